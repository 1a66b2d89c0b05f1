//! Handwriting-style drawing: [`DrawBorderThenFill`] with timing scaled to
//! the size of the target.

use serde::{Deserialize, Serialize};

use quill_core::{Animatable, Animation, AnimationConfig, AnimationResult, Color, RateFunc, Scene};

use crate::draw_border::{DrawBorderThenFill, DrawBorderThenFillConfig};

/// Objects with at least this many drawable members get the long run time.
const COMPLEXITY_THRESHOLD: usize = 15;

/// Run time for a target of the given complexity. A negative `requested`
/// means "pick one"; anything else is returned unchanged.
pub fn compute_run_time(complexity: usize, requested: f32) -> f32 {
    if requested >= 0.0 {
        return requested;
    }
    if complexity < COMPLEXITY_THRESHOLD {
        1.0
    } else {
        2.0
    }
}

/// Lag ratio for a target of the given complexity. A negative `requested`
/// means "pick one"; anything else is returned unchanged.
pub fn compute_lag_ratio(complexity: usize, requested: f32) -> f32 {
    if requested >= 0.0 {
        return requested;
    }
    (4.0 / (complexity as f32 + 1.0)).min(0.2)
}

/// Settings for [`Write`]. Negative `run_time` and `lag_ratio` are resolved
/// from the target's complexity at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WriteConfig {
    pub run_time: f32,
    pub lag_ratio: f32,
    pub rate_func: RateFunc,
    pub remover: bool,
    pub stroke_width: f32,
    /// Outline color. `None` uses the target's color.
    pub stroke_color: Option<Color>,
}

impl Default for WriteConfig {
    fn default() -> Self {
        Self {
            run_time: -1.0,
            lag_ratio: -1.0,
            rate_func: RateFunc::Linear,
            remover: false,
            stroke_width: DrawBorderThenFillConfig::default().stroke_width,
            stroke_color: None,
        }
    }
}

/// Draws a vector object stroke by stroke, then fills it.
///
/// The outline defaults to the target's own color.
pub struct Write<M: Animatable> {
    inner: DrawBorderThenFill<M>,
}

impl<M: Animatable> Write<M> {
    pub fn new(mobject: M, config: WriteConfig) -> AnimationResult<Self> {
        let complexity = mobject.complexity();
        let border = DrawBorderThenFillConfig {
            run_time: compute_run_time(complexity, config.run_time),
            lag_ratio: compute_lag_ratio(complexity, config.lag_ratio),
            rate_func: config.rate_func,
            remover: config.remover,
            stroke_width: config.stroke_width,
            stroke_color: Some(config.stroke_color.unwrap_or_else(|| mobject.color())),
            ..DrawBorderThenFillConfig::default()
        };
        log::debug!(
            "Write on '{}': complexity {}, run time {}, lag ratio {}",
            mobject.name(),
            complexity,
            border.run_time,
            border.lag_ratio
        );
        let inner = DrawBorderThenFill::new(mobject, border)?.with_name("Write");
        Ok(Self { inner })
    }

    pub fn draw_border(&self) -> &DrawBorderThenFill<M> {
        &self.inner
    }
}

impl<M: Animatable> Animation<M> for Write<M> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn config(&self) -> &AnimationConfig {
        self.inner.config()
    }

    fn mobject(&self) -> &M {
        self.inner.mobject()
    }

    fn begin(&mut self) {
        self.inner.begin();
    }

    fn interpolate(&mut self, alpha: f32) {
        self.inner.interpolate(alpha);
    }

    fn finish(&mut self) {
        self.inner.finish();
    }

    fn composited_objects(&self) -> Vec<&M> {
        self.inner.composited_objects()
    }

    fn clean_up_from_scene(self: Box<Self>, scene: &mut Scene<M>) {
        Box::new(self.inner).clean_up_from_scene(scene);
    }
}
