use crate::object::VObject;

/// A frame is the set of objects to draw at one instant of playback.
///
/// Frames borrow from the scene and the running animation, so they only
/// live for the duration of the frame callback.
pub struct Frame<'a, M> {
    pub index: usize,
    /// Seconds since the animation began.
    pub time: f32,
    /// Raw (un-eased) progress handed to the animation.
    pub alpha: f32,
    pub objects: Vec<&'a M>,
}

impl<'a, M> Frame<'a, M> {
    pub fn new(index: usize, time: f32, alpha: f32, objects: Vec<&'a M>) -> Self {
        Self { index, time, alpha, objects }
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Frame<'_, VObject> {
    /// Path length of everything in the frame.
    pub fn total_length(&self) -> f32 {
        self.objects.iter().map(|o| o.total_length()).sum()
    }
}
