//! Two-phase stroke-then-fill drawing.
//!
//! Phase 0 traces a stroke-only outline of every drawable member; phase 1
//! blends each member from that outline back to its original, filled look.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use quill_core::animation::{clean_up_target, for_each_member};
use quill_core::{
    phase_split, Animatable, Animation, AnimationConfig, AnimationError, AnimationResult, Color,
    RateFunc, Scene,
};

/// Settings for [`DrawBorderThenFill`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawBorderThenFillConfig {
    pub run_time: f32,
    pub lag_ratio: f32,
    pub rate_func: RateFunc,
    pub remover: bool,
    /// Stroke width of the outline.
    pub stroke_width: f32,
    /// Outline color. `None` keeps each member's own stroke color.
    pub stroke_color: Option<Color>,
    /// Extra settings for the border phase. Carried for hosts that drive
    /// the phases separately; not interpreted here.
    pub draw_border_animation_config: Map<String, Value>,
    /// Extra settings for the fill phase. Not interpreted here.
    pub fill_animation_config: Map<String, Value>,
}

impl Default for DrawBorderThenFillConfig {
    fn default() -> Self {
        Self {
            run_time: 2.0,
            lag_ratio: 0.0,
            rate_func: RateFunc::DoubleSmooth,
            remover: false,
            stroke_width: 2.0,
            stroke_color: None,
            draw_border_animation_config: Map::new(),
            fill_animation_config: Map::new(),
        }
    }
}

impl DrawBorderThenFillConfig {
    pub fn animation(&self) -> AnimationConfig {
        AnimationConfig {
            run_time: self.run_time,
            lag_ratio: self.lag_ratio,
            rate_func: self.rate_func.clone(),
            remover: self.remover,
            ..AnimationConfig::default()
        }
    }
}

/// Draws the outline of a vector object, then fills it in.
///
/// Every drawable member keeps a phase marker in a list parallel to the
/// target's family order. A marker moves from 0 to 1 exactly once, on the
/// first tick its progress reaches the second phase; at that moment the
/// member takes on the full outline data so the fill blend starts from a
/// complete stroke.
///
/// The outline and starting snapshots are taken once, at begin.
pub struct DrawBorderThenFill<M: Animatable> {
    name: String,
    config: DrawBorderThenFillConfig,
    animation: AnimationConfig,
    mobject: M,
    outline: Option<M>,
    starting: Option<M>,
    phase_markers: Vec<usize>,
}

impl<M: Animatable> DrawBorderThenFill<M> {
    /// Fails if `mobject` is not vectorized. Nothing is modified before the
    /// check.
    pub fn new(mobject: M, config: DrawBorderThenFillConfig) -> AnimationResult<Self> {
        if !mobject.is_vectorized() {
            return Err(AnimationError::NotVectorized { name: mobject.name().to_string() });
        }
        Ok(Self {
            name: "DrawBorderThenFill".to_string(),
            animation: config.animation(),
            config,
            mobject,
            outline: None,
            starting: None,
            phase_markers: Vec::new(),
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn settings(&self) -> &DrawBorderThenFillConfig {
        &self.config
    }

    /// The stroke-only snapshot drawn during the first phase; `None`
    /// before begin.
    pub fn outline(&self) -> Option<&M> {
        self.outline.as_ref()
    }

    pub fn starting_mobject(&self) -> Option<&M> {
        self.starting.as_ref()
    }

    /// Current phase of each drawable member, in family order.
    pub fn phase_markers(&self) -> &[usize] {
        &self.phase_markers
    }

    fn build_outline(&self) -> M {
        let mut outline = self.mobject.copy();
        let stroke_color = self.config.stroke_color;
        let stroke_width = self.config.stroke_width;
        let behind = self.mobject.style().stroke_behind;
        outline.visit_family_with_points_mut(&mut |member| {
            let mut style = member.style();
            style.fill_opacity = 0.0;
            style.stroke_color = stroke_color.unwrap_or(style.stroke_color);
            style.stroke_width = stroke_width;
            style.stroke_behind = behind;
            member.set_style(style);
        });
        outline
    }

    fn match_outline_style(&mut self) {
        let Some(outline) = self.outline.as_ref() else {
            return;
        };
        let styles: Vec<_> = outline.family_with_points().iter().map(|o| o.style()).collect();
        let mut index = 0;
        self.mobject.visit_family_with_points_mut(&mut |member| {
            if let Some(style) = styles.get(index) {
                member.set_style(*style);
            }
            index += 1;
        });
    }
}

impl<M: Animatable> Animation<M> for DrawBorderThenFill<M> {
    fn name(&self) -> &str {
        &self.name
    }

    fn config(&self) -> &AnimationConfig {
        &self.animation
    }

    fn mobject(&self) -> &M {
        &self.mobject
    }

    fn begin(&mut self) {
        log::debug!("{} begin on '{}'", self.name, self.mobject.name());
        self.mobject.set_animating_status(true);
        let outline = self.build_outline();
        self.phase_markers = vec![0; outline.family_with_points().len()];
        self.outline = Some(outline);
        self.starting = Some(self.mobject.copy());
        self.interpolate(0.0);
        self.match_outline_style();
    }

    fn interpolate(&mut self, alpha: f32) {
        let (Some(outline), Some(starting)) = (self.outline.as_ref(), self.starting.as_ref()) else {
            return;
        };
        let starts = starting.family_with_points();
        let markers = &mut self.phase_markers;
        for_each_member(
            &mut self.mobject,
            outline,
            &self.animation,
            alpha.clamp(0.0, 1.0),
            |index, member, outline, sub_alpha| {
                let (phase, local) = phase_split(2, sub_alpha);
                if phase == 1 {
                    if let Some(marker) = markers.get_mut(index).filter(|m| **m == 0) {
                        member.set_data(outline);
                        *marker = 1;
                    }
                }
                match (phase, starts.get(index)) {
                    (0, _) => member.pointwise_become_partial(outline, 0.0, local),
                    (_, Some(start)) => member.interpolate(outline, start, local),
                    (_, None) => {}
                }
            },
        );
    }

    fn finish(&mut self) {
        self.interpolate(self.animation.final_alpha_value);
        self.mobject.set_animating_status(false);
        self.mobject.refresh_joint_angles();
        log::debug!("{} finished on '{}'", self.name, self.mobject.name());
    }

    fn composited_objects(&self) -> Vec<&M> {
        let mut objects = vec![&self.mobject];
        objects.extend(self.outline.as_ref());
        objects
    }

    fn clean_up_from_scene(self: Box<Self>, scene: &mut Scene<M>) {
        clean_up_target(self.mobject, self.animation.remover, scene);
    }
}
