use serde::{Deserialize, Serialize};

use quill_core::{
    Animatable, Animation, AnimationConfig, AnimationError, AnimationResult, RateFunc, VObject,
};

use crate::draw_border::{DrawBorderThenFill, DrawBorderThenFillConfig};
use crate::show_partial::{uncreate, uncreate_config, uncreate_with, ShowCreation};
use crate::subsets::{IndexRounding, ShowSubsets};
use crate::write::{Write, WriteConfig};

pub type BoxedAnimation = Box<dyn Animation<VObject>>;

/// An entry in the animation registry: a constructor with default settings.
pub struct AnimationEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub constructor: fn(VObject) -> AnimationResult<BoxedAnimation>,
}

/// Build the registry of creation animations for [`VObject`] targets.
///
/// Each animation is identified by a unique string ID, the same ID used as
/// the `"type"` tag of an [`AnimationPreset`]. Word-by-word text is not
/// listed: it needs structured text rather than a plain object.
pub fn build_registry() -> Vec<AnimationEntry> {
    vec![
        AnimationEntry {
            id: "show_creation",
            name: "Show Creation",
            description: "Draws each path from its start to its end.",
            constructor: |target| Ok(Box::new(ShowCreation::creation(target))),
        },
        AnimationEntry {
            id: "uncreate",
            name: "Uncreate",
            description: "Erases each path back to its start, then removes the object.",
            constructor: |target| Ok(Box::new(uncreate(target))),
        },
        AnimationEntry {
            id: "draw_border_then_fill",
            name: "Draw Border Then Fill",
            description: "Traces a stroke-only outline, then blends into the filled object.",
            constructor: |target| {
                Ok(Box::new(DrawBorderThenFill::new(target, DrawBorderThenFillConfig::default())?))
            },
        },
        AnimationEntry {
            id: "write",
            name: "Write",
            description: "Outline-then-fill with timing scaled to the object's complexity.",
            constructor: |target| Ok(Box::new(Write::new(target, WriteConfig::default())?)),
        },
        AnimationEntry {
            id: "show_increasing_subsets",
            name: "Show Increasing Subsets",
            description: "Reveals a growing prefix of the object's children.",
            constructor: |target| {
                Ok(Box::new(ShowSubsets::increasing(target, AnimationConfig::default())))
            },
        },
        AnimationEntry {
            id: "show_submobjects_one_by_one",
            name: "Show Submobjects One By One",
            description: "Shows the object's children one at a time.",
            constructor: |target| {
                Ok(Box::new(ShowSubsets::one_by_one(target, AnimationConfig::default())))
            },
        },
    ]
}

/// Look up an animation entry by its ID.
pub fn find_animation(id: &str) -> Option<&'static AnimationEntry> {
    static REGISTRY: std::sync::OnceLock<Vec<AnimationEntry>> = std::sync::OnceLock::new();
    let entries = REGISTRY.get_or_init(build_registry);
    entries.iter().find(|e| e.id == id)
}

/// Instantiate the animation registered under `id` with default settings.
pub fn create(id: &str, target: VObject) -> AnimationResult<BoxedAnimation> {
    let entry = find_animation(id)
        .ok_or_else(|| AnimationError::UnknownAnimation { id: id.to_string() })?;
    (entry.constructor)(target)
}

/// Partial override of an animation's base settings. Unset fields keep
/// the animation's own defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    pub run_time: Option<f32>,
    pub lag_ratio: Option<f32>,
    pub rate_func: Option<RateFunc>,
    pub remover: Option<bool>,
}

impl ConfigOverrides {
    pub fn apply(&self, mut base: AnimationConfig) -> AnimationConfig {
        if let Some(run_time) = self.run_time {
            base.run_time = run_time;
        }
        if let Some(lag_ratio) = self.lag_ratio {
            base.lag_ratio = lag_ratio;
        }
        if let Some(rate_func) = &self.rate_func {
            base.rate_func = rate_func.clone();
        }
        if let Some(remover) = self.remover {
            base.remover = remover;
        }
        base
    }
}

/// A serialized animation choice with its settings, e.g.
/// `{"type": "write", "config": {"stroke_width": 3.0}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnimationPreset {
    ShowCreation {
        #[serde(default)]
        config: ConfigOverrides,
    },
    Uncreate {
        #[serde(default)]
        config: ConfigOverrides,
    },
    DrawBorderThenFill {
        #[serde(default)]
        config: DrawBorderThenFillConfig,
    },
    Write {
        #[serde(default)]
        config: WriteConfig,
    },
    ShowIncreasingSubsets {
        #[serde(default)]
        config: ConfigOverrides,
        #[serde(default)]
        rounding: IndexRounding,
    },
    ShowSubmobjectsOneByOne {
        #[serde(default)]
        config: ConfigOverrides,
    },
}

impl AnimationPreset {
    pub fn from_json(json: &str) -> AnimationResult<Self> {
        serde_json::from_str(json).map_err(|e| AnimationError::InvalidPreset(e.to_string()))
    }

    pub fn to_json(&self) -> AnimationResult<String> {
        serde_json::to_string(self).map_err(|e| AnimationError::InvalidPreset(e.to_string()))
    }

    /// Registry ID of the animation this preset builds.
    pub fn id(&self) -> &'static str {
        match self {
            AnimationPreset::ShowCreation { .. } => "show_creation",
            AnimationPreset::Uncreate { .. } => "uncreate",
            AnimationPreset::DrawBorderThenFill { .. } => "draw_border_then_fill",
            AnimationPreset::Write { .. } => "write",
            AnimationPreset::ShowIncreasingSubsets { .. } => "show_increasing_subsets",
            AnimationPreset::ShowSubmobjectsOneByOne { .. } => "show_submobjects_one_by_one",
        }
    }
}

/// Instantiate `preset` on `target`.
pub fn build(preset: &AnimationPreset, target: VObject) -> AnimationResult<BoxedAnimation> {
    log::debug!("Building '{}' preset for '{}'", preset.id(), target.name());
    let animation: BoxedAnimation = match preset {
        AnimationPreset::ShowCreation { config } => Box::new(ShowCreation::creation_with(
            target,
            config.apply(ShowCreation::<VObject>::creation_config()),
        )),
        AnimationPreset::Uncreate { config } => {
            Box::new(uncreate_with(target, config.apply(uncreate_config())))
        }
        AnimationPreset::DrawBorderThenFill { config } => {
            Box::new(DrawBorderThenFill::new(target, config.clone())?)
        }
        AnimationPreset::Write { config } => Box::new(Write::new(target, config.clone())?),
        AnimationPreset::ShowIncreasingSubsets { config, rounding } => Box::new(
            ShowSubsets::increasing(target, config.apply(AnimationConfig::default()))
                .with_rounding(*rounding),
        ),
        AnimationPreset::ShowSubmobjectsOneByOne { config } => Box::new(ShowSubsets::one_by_one(
            target,
            config.apply(AnimationConfig::default()),
        )),
    };
    Ok(animation)
}
