//! Word-at-a-time text reveal.

use serde::{Deserialize, Serialize};

use quill_core::{Animatable, Animation, AnimationConfig, RateFunc, Scene, StructuredText};

use crate::subsets::ShowSubsets;

/// Settings for [`AddTextWordByWord`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WordByWordConfig {
    /// A negative run time is replaced by `word_count * time_per_word`.
    pub run_time: f32,
    pub rate_func: RateFunc,
    pub remover: bool,
    pub time_per_word: f32,
}

impl Default for WordByWordConfig {
    fn default() -> Self {
        Self {
            run_time: -1.0,
            rate_func: RateFunc::Linear,
            remover: false,
            time_per_word: 0.2,
        }
    }
}

/// Adds a text one word group at a time.
///
/// The animation runs on a transient object built from the text's word
/// groups. On clean-up that object leaves the scene and the text's own
/// object takes its place, unless the animation is a remover.
pub struct AddTextWordByWord<T: StructuredText> {
    subsets: ShowSubsets<T::Object>,
    string_object: T,
}

impl<T: StructuredText> AddTextWordByWord<T> {
    pub fn new(string_object: T, config: WordByWordConfig) -> Self {
        let grouped = string_object.build_groups();
        let group_count = grouped.submobjects().len();
        let run_time = if config.run_time < 0.0 {
            config.time_per_word * group_count as f32
        } else {
            config.run_time
        };
        let animation = AnimationConfig {
            run_time,
            rate_func: config.rate_func,
            remover: config.remover,
            ..AnimationConfig::default()
        };
        let subsets = ShowSubsets::increasing(grouped, animation).with_name("AddTextWordByWord");
        Self { subsets, string_object }
    }

    pub fn string_object(&self) -> &T {
        &self.string_object
    }

    /// Word groups currently visible.
    pub fn displayed(&self) -> &[T::Object] {
        self.subsets.displayed()
    }
}

impl<T: StructuredText> Animation<T::Object> for AddTextWordByWord<T> {
    fn name(&self) -> &str {
        self.subsets.name()
    }

    fn config(&self) -> &AnimationConfig {
        self.subsets.config()
    }

    fn mobject(&self) -> &T::Object {
        self.subsets.mobject()
    }

    fn begin(&mut self) {
        self.subsets.begin();
    }

    fn interpolate(&mut self, alpha: f32) {
        self.subsets.interpolate(alpha);
    }

    fn finish(&mut self) {
        self.subsets.finish();
    }

    fn clean_up_from_scene(self: Box<Self>, scene: &mut Scene<T::Object>) {
        let remover = self.subsets.config().remover;
        scene.remove(self.subsets.mobject().id());
        if !remover {
            scene.add(self.string_object.into_object());
        }
        log::debug!("AddTextWordByWord cleaned up (remover: {})", remover);
    }
}
