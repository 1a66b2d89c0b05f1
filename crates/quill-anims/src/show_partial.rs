//! Partial-path reveal: each drawable member of the target shows only a
//! window of its own path, chosen by a [`RevealBounds`] strategy.

use quill_core::animation::{clean_up_target, for_each_member};
use quill_core::{Animatable, Animation, AnimationConfig, RateFunc, Scene};

/// Maps member progress onto the `(lower, upper)` fractions of the path to
/// show.
pub trait RevealBounds {
    fn bounds(&self, alpha: f32) -> (f32, f32);
}

/// Grow the path from its start: `(0, alpha)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RevealForward;

impl RevealBounds for RevealForward {
    fn bounds(&self, alpha: f32) -> (f32, f32) {
        (0.0, alpha)
    }
}

/// Reveals part of every drawable member's path.
///
/// Each tick, member `i` of the target becomes the `bounds(sub_alpha)`
/// window of member `i` of the snapshot taken at [`Animation::begin`].
/// Ticks before `begin` leave the target alone.
pub struct ShowPartial<M: Animatable, B: RevealBounds = RevealForward> {
    name: String,
    config: AnimationConfig,
    bounds: B,
    should_match_start: bool,
    mobject: M,
    starting: Option<M>,
}

/// Draw the target's path from start to end.
pub type ShowCreation<M> = ShowPartial<M, RevealForward>;

impl<M: Animatable, B: RevealBounds> ShowPartial<M, B> {
    pub fn new(mobject: M, bounds: B, config: AnimationConfig) -> Self {
        Self {
            name: "ShowPartial".to_string(),
            config,
            bounds,
            should_match_start: false,
            mobject,
            starting: None,
        }
    }

    /// When false (the default) the host is told at begin that the target's
    /// data matching the snapshot can be locked for the whole run.
    pub fn with_should_match_start(mut self, should_match_start: bool) -> Self {
        self.should_match_start = should_match_start;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The snapshot taken at begin; `None` until then.
    pub fn starting_mobject(&self) -> Option<&M> {
        self.starting.as_ref()
    }
}

impl<M: Animatable> ShowPartial<M, RevealForward> {
    /// Members are drawn one after another by default.
    pub fn creation_config() -> AnimationConfig {
        AnimationConfig::default().with_lag_ratio(1.0)
    }

    pub fn creation(mobject: M) -> Self {
        Self::creation_with(mobject, Self::creation_config())
    }

    pub fn creation_with(mobject: M, config: AnimationConfig) -> Self {
        Self::new(mobject, RevealForward, config).with_name("ShowCreation")
    }
}

/// Erase the target's path end to start, then take it off the scene.
///
/// This is a forward reveal played with reversed progress, starting from
/// the fully drawn state.
pub fn uncreate<M: Animatable>(mobject: M) -> ShowCreation<M> {
    uncreate_with(mobject, uncreate_config())
}

pub fn uncreate_config() -> AnimationConfig {
    AnimationConfig::default()
        .with_lag_ratio(1.0)
        .with_rate_func(RateFunc::reversed(RateFunc::Smooth))
        .with_remover(true)
}

pub fn uncreate_with<M: Animatable>(mobject: M, config: AnimationConfig) -> ShowCreation<M> {
    ShowCreation::creation_with(mobject, config)
        .with_should_match_start(true)
        .with_name("Uncreate")
}

impl<M: Animatable, B: RevealBounds> Animation<M> for ShowPartial<M, B> {
    fn name(&self) -> &str {
        &self.name
    }

    fn config(&self) -> &AnimationConfig {
        &self.config
    }

    fn mobject(&self) -> &M {
        &self.mobject
    }

    fn begin(&mut self) {
        log::debug!("{} begin on '{}'", self.name, self.mobject.name());
        self.mobject.set_animating_status(true);
        let starting = self.mobject.copy();
        if !self.should_match_start {
            self.mobject.lock_matching_data(&starting);
        }
        self.starting = Some(starting);
        self.interpolate(0.0);
    }

    fn interpolate(&mut self, alpha: f32) {
        let Some(starting) = self.starting.as_ref() else {
            return;
        };
        let bounds = &self.bounds;
        for_each_member(
            &mut self.mobject,
            starting,
            &self.config,
            alpha.clamp(0.0, 1.0),
            |_, member, start, sub_alpha| {
                let (lower, upper) = bounds.bounds(sub_alpha);
                member.pointwise_become_partial(start, lower, upper);
            },
        );
    }

    fn finish(&mut self) {
        self.interpolate(self.config.final_alpha_value);
        self.mobject.set_animating_status(false);
        log::debug!("{} finished on '{}'", self.name, self.mobject.name());
    }

    fn clean_up_from_scene(self: Box<Self>, scene: &mut Scene<M>) {
        clean_up_target(self.mobject, self.config.remover, scene);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::shape::{Line, Shape};
    use quill_core::VObject;

    fn square() -> VObject {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Line::new(0.0, 0.0, 1.0, 0.0)),
            Box::new(Line::new(1.0, 0.0, 1.0, 1.0)),
            Box::new(Line::new(1.0, 1.0, 0.0, 1.0)),
            Box::new(Line::new(0.0, 1.0, 0.0, 0.0)),
        ];
        VObject::from_shapes("square", &shapes)
    }

    #[test]
    fn test_forward_bounds() {
        assert_eq!(RevealForward.bounds(0.3), (0.0, 0.3));
        assert_eq!(RevealForward.bounds(0.0), (0.0, 0.0));
        assert_eq!(RevealForward.bounds(1.0), (0.0, 1.0));
    }

    #[test]
    fn test_creation_defaults() {
        let anim = ShowCreation::creation(square());
        assert_eq!(anim.config().lag_ratio, 1.0);
        assert!(!anim.config().remover);
        assert_eq!(anim.name(), "ShowCreation");
    }

    #[test]
    fn test_creation_reveals_half_at_midpoint() {
        let source = square();
        let mut anim = ShowCreation::creation(source.clone());
        anim.begin();
        assert!(anim.mobject().curves().iter().all(|c| c.is_degenerate()));

        // smooth(0.5) == 0.5: two of four sides drawn.
        anim.interpolate(0.5);
        let curves = anim.mobject().curves();
        assert_eq!(curves.len(), 4);
        assert_eq!(curves[0], source.curves()[0]);
        assert!(curves[1].end.approx_eq(&source.curves()[1].end));
        assert!(curves[2].is_degenerate());
        assert!(curves[3].is_degenerate());

        anim.finish();
        assert_eq!(anim.mobject().curves(), source.curves());
        assert!(!anim.mobject().is_animating());
    }

    #[test]
    fn test_uncreate_erases_and_removes() {
        let anim = uncreate(square());
        assert!(anim.config().remover);
        assert_eq!(anim.config().rate_func.apply(0.0), 1.0);
        assert_eq!(anim.config().rate_func.apply(1.0), 0.0);

        let mut anim = anim;
        anim.begin();
        assert_eq!(anim.mobject().curves(), square().curves());
        anim.finish();
        assert!(anim.mobject().curves().iter().all(|c| c.is_degenerate()));
    }

    #[test]
    fn test_snapshot_taken_at_begin() {
        let source = square();
        let mut anim = ShowCreation::creation(source.clone());
        assert!(anim.starting_mobject().is_none());
        anim.interpolate(0.5);
        assert_eq!(anim.mobject().curves(), source.curves());
        assert_eq!(anim.composited_objects().len(), 1);

        anim.begin();
        let starting = anim.starting_mobject().unwrap();
        assert_eq!(starting.curves(), source.curves());
        assert_ne!(starting.id(), anim.mobject().id());
    }

    #[test]
    fn test_lagged_members_draw_in_turn() {
        let group = VObject::vgroup("pair", vec![square(), square()]);
        let mut anim = ShowCreation::creation_with(
            group,
            ShowCreation::<VObject>::creation_config().with_rate_func(RateFunc::Linear),
        );
        anim.begin();
        anim.interpolate(0.5);
        let members = anim.mobject().family_with_points();
        assert!(members[0].curves().iter().all(|c| !c.is_degenerate()));
        assert!(members[1].curves().iter().all(|c| c.is_degenerate()));
    }
}
