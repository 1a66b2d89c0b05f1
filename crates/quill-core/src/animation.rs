//! The animation lifecycle and the per-member progress plumbing shared by
//! every effect.

use serde::{Deserialize, Serialize};

use crate::animatable::Animatable;
use crate::rate::RateFunc;
use crate::scene::Scene;

/// Settings common to every animation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Duration in seconds.
    pub run_time: f32,
    /// Stagger between consecutive family members, as a fraction of one
    /// member's duration. `0` runs all members in lockstep, `1` runs them
    /// strictly one after another.
    pub lag_ratio: f32,
    pub rate_func: RateFunc,
    /// Take the object out of the scene once finished.
    pub remover: bool,
    /// Progress value applied by [`Animation::finish`].
    pub final_alpha_value: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            run_time: 1.0,
            lag_ratio: 0.0,
            rate_func: RateFunc::Smooth,
            remover: false,
            final_alpha_value: 1.0,
        }
    }
}

impl AnimationConfig {
    pub fn with_run_time(mut self, run_time: f32) -> Self {
        self.run_time = run_time;
        self
    }

    pub fn with_lag_ratio(mut self, lag_ratio: f32) -> Self {
        self.lag_ratio = lag_ratio;
        self
    }

    pub fn with_rate_func(mut self, rate_func: RateFunc) -> Self {
        self.rate_func = rate_func;
        self
    }

    pub fn with_remover(mut self, remover: bool) -> Self {
        self.remover = remover;
        self
    }

    /// Eased progress of member `index` out of `count` at overall `alpha`.
    ///
    /// The whole run is stretched to `(count - 1) * lag_ratio + 1` member
    /// durations and member `i` starts `i * lag_ratio` durations in.
    pub fn sub_alpha(&self, alpha: f32, index: usize, count: usize) -> f32 {
        let lag = self.lag_ratio;
        let full_length = count.saturating_sub(1) as f32 * lag + 1.0;
        let value = alpha * full_length;
        let local = (value - index as f32 * lag).clamp(0.0, 1.0);
        self.rate_func.apply(local)
    }
}

/// A time-parameterised change applied to a host object.
///
/// Lifecycle: [`begin`](Animation::begin) once, then
/// [`interpolate`](Animation::interpolate) any number of times with
/// progress in [0, 1], then [`finish`](Animation::finish), then
/// [`clean_up_from_scene`](Animation::clean_up_from_scene), which consumes
/// the animation.
pub trait Animation<M: Animatable> {
    fn name(&self) -> &str;

    fn config(&self) -> &AnimationConfig;

    /// Effective duration in seconds.
    fn run_time(&self) -> f32 {
        self.config().run_time
    }

    /// The object being animated.
    fn mobject(&self) -> &M;

    fn begin(&mut self);

    fn interpolate(&mut self, alpha: f32);

    fn finish(&mut self);

    /// Everything that should be drawn while the animation runs.
    fn composited_objects(&self) -> Vec<&M> {
        vec![self.mobject()]
    }

    fn clean_up_from_scene(self: Box<Self>, scene: &mut Scene<M>);
}

/// Drive `target`'s drawable family in lockstep with `reference`'s,
/// handing each pair its lagged, eased progress.
///
/// `f` receives the member index, the target member, its reference
/// counterpart and the member's progress. Surplus members on either side
/// are left alone.
pub fn for_each_member<M, F>(
    target: &mut M,
    reference: &M,
    config: &AnimationConfig,
    alpha: f32,
    mut f: F,
) where
    M: Animatable,
    F: FnMut(usize, &mut M, &M, f32),
{
    let references = reference.family_with_points();
    let count = references.len();
    let mut index = 0;
    target.visit_family_with_points_mut(&mut |member| {
        if let Some(counterpart) = references.get(index) {
            f(index, member, counterpart, config.sub_alpha(alpha, index, count));
        }
        index += 1;
    });
}

/// Default hand-off once an animation is over: removers leave the scene,
/// everything else is (re)added.
pub fn clean_up_target<M: Animatable>(target: M, remover: bool, scene: &mut Scene<M>) {
    if remover {
        scene.remove(target.id());
    } else {
        scene.add(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnimationConfig::default();
        assert_eq!(config.run_time, 1.0);
        assert_eq!(config.lag_ratio, 0.0);
        assert!(!config.remover);
        assert_eq!(config.final_alpha_value, 1.0);
    }

    #[test]
    fn test_sub_alpha_without_lag_matches_rate() {
        let config = AnimationConfig::default().with_rate_func(RateFunc::Linear);
        for i in 0..4 {
            assert_eq!(config.sub_alpha(0.3, i, 4), 0.3);
        }
    }

    #[test]
    fn test_sub_alpha_full_lag_is_sequential() {
        let config = AnimationConfig::default()
            .with_rate_func(RateFunc::Linear)
            .with_lag_ratio(1.0);
        // Four members, each owns a quarter of the run.
        assert_eq!(config.sub_alpha(0.125, 0, 4), 0.5);
        assert_eq!(config.sub_alpha(0.125, 1, 4), 0.0);
        assert_eq!(config.sub_alpha(0.5, 1, 4), 1.0);
        assert_eq!(config.sub_alpha(0.5, 2, 4), 0.0);
        assert_eq!(config.sub_alpha(1.0, 3, 4), 1.0);
    }

    #[test]
    fn test_sub_alpha_single_member_ignores_lag() {
        let config = AnimationConfig::default()
            .with_rate_func(RateFunc::Linear)
            .with_lag_ratio(0.7);
        assert_eq!(config.sub_alpha(0.4, 0, 1), 0.4);
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: AnimationConfig =
            serde_json::from_str(r#"{"run_time":2.5,"rate_func":"linear"}"#).unwrap();
        assert_eq!(config.run_time, 2.5);
        assert!(matches!(config.rate_func, RateFunc::Linear));
        assert_eq!(config.final_alpha_value, 1.0);
    }
}
