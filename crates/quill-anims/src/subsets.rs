//! Progressive display of a container's children.
//!
//! The children are captured once, at construction. Each tick the
//! container's visible child list is rebuilt from that snapshot, so the
//! output depends only on the progress value.

use serde::{Deserialize, Serialize};

use quill_core::animation::clean_up_target;
use quill_core::{Animatable, Animation, AnimationConfig, Scene};

/// How scaled progress is turned into a child count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexRounding {
    /// Nearest integer, ties to even.
    #[default]
    Round,
    Floor,
    Ceil,
}

impl IndexRounding {
    pub fn apply(self, value: f32) -> f32 {
        match self {
            IndexRounding::Round => value.round_ties_even(),
            IndexRounding::Floor => value.floor(),
            IndexRounding::Ceil => value.ceil(),
        }
    }
}

/// Which children are visible at a given index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubsetMode {
    /// The first `index` children.
    Cumulative,
    /// Only child `index - 1`; nothing at index 0.
    OneByOne,
}

/// Shows a growing prefix of a container's children, or a single child
/// at a time.
pub struct ShowSubsets<M: Animatable> {
    name: String,
    config: AnimationConfig,
    mode: SubsetMode,
    rounding: IndexRounding,
    mobject: M,
    all_submobs: Vec<M>,
}

/// Cumulative display: after `k` of `n` steps the first `k` children show.
pub type ShowIncreasingSubsets<M> = ShowSubsets<M>;

/// Spotlight display: exactly one child shows at a time.
pub type ShowSubmobjectsOneByOne<M> = ShowSubsets<M>;

impl<M: Animatable> ShowSubsets<M> {
    pub fn increasing(group: M, config: AnimationConfig) -> Self {
        Self::with_mode(group, config, SubsetMode::Cumulative, IndexRounding::Round)
            .with_name("ShowIncreasingSubsets")
    }

    /// Always rounds up, so any progress past zero shows the first child.
    pub fn one_by_one(group: M, config: AnimationConfig) -> Self {
        Self::with_mode(group, config, SubsetMode::OneByOne, IndexRounding::Ceil)
            .with_name("ShowSubmobjectsOneByOne")
    }

    fn with_mode(group: M, config: AnimationConfig, mode: SubsetMode, rounding: IndexRounding) -> Self {
        let all_submobs = group.submobjects().to_vec();
        Self {
            name: String::new(),
            config,
            mode,
            rounding,
            mobject: group,
            all_submobs,
        }
    }

    /// Only meaningful for the cumulative mode.
    pub fn with_rounding(mut self, rounding: IndexRounding) -> Self {
        if self.mode == SubsetMode::Cumulative {
            self.rounding = rounding;
        }
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn mode(&self) -> SubsetMode {
        self.mode
    }

    pub fn rounding(&self) -> IndexRounding {
        self.rounding
    }

    /// The children captured at construction.
    pub fn all_submobjects(&self) -> &[M] {
        &self.all_submobs
    }

    /// Children currently visible.
    pub fn displayed(&self) -> &[M] {
        self.mobject.submobjects()
    }

    fn update_submobject_list(&mut self, index: usize) {
        let visible = match self.mode {
            SubsetMode::Cumulative => self.all_submobs[..index].to_vec(),
            SubsetMode::OneByOne if index == 0 => Vec::new(),
            SubsetMode::OneByOne => vec![self.all_submobs[index - 1].clone()],
        };
        self.mobject.set_submobjects(visible);
    }
}

impl<M: Animatable> Animation<M> for ShowSubsets<M> {
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
        log::debug!(
            "{} begin on '{}' with {} children",
            self.name,
            self.mobject.name(),
            self.all_submobs.len()
        );
        self.mobject.set_animating_status(true);
        self.interpolate(0.0);
    }

    fn interpolate(&mut self, alpha: f32) {
        let count = self.all_submobs.len();
        let eased = self.config.rate_func.apply(alpha);
        let raw = self.rounding.apply(eased * count as f32);
        let index = raw.clamp(0.0, count as f32) as usize;
        if raw != index as f32 {
            log::debug!("{}: index {} clamped to {}", self.name, raw, index);
        }
        self.update_submobject_list(index);
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
