//! Mapping of continuous progress onto discrete steps.

/// Split `alpha` in [0, 1] over the integer range `start..end`.
///
/// Returns the integer step reached and the fractional progress inside
/// that step. `alpha >= 1` pins to the last step with residue `1.0`, so the
/// final tick of an animation never lands on a step that does not exist.
pub fn integer_interpolate(start: i64, end: i64, alpha: f32) -> (i64, f32) {
    if alpha >= 1.0 {
        return (end - 1, 1.0);
    }
    if alpha <= 0.0 {
        return (start, 0.0);
    }
    let span = (end - start) as f32 * alpha;
    let step = span.floor();
    (start + step as i64, span - step)
}

/// Split `progress` into `(phase_index, local_progress)` over `phase_count`
/// ordered phases.
pub fn phase_split(phase_count: usize, progress: f32) -> (usize, f32) {
    debug_assert!(phase_count > 0, "phase_count must be positive");
    let count = phase_count.max(1) as i64;
    let (index, local) = integer_interpolate(0, count, progress);
    (index as usize, local)
}
