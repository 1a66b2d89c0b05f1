pub mod show_partial;
pub mod draw_border;
pub mod write;
pub mod subsets;
pub mod word_by_word;
pub mod registry;

pub use show_partial::{
    uncreate, uncreate_config, uncreate_with, RevealBounds, RevealForward, ShowCreation, ShowPartial,
};
pub use draw_border::{DrawBorderThenFill, DrawBorderThenFillConfig};
pub use write::{compute_lag_ratio, compute_run_time, Write, WriteConfig};
pub use subsets::{
    IndexRounding, ShowIncreasingSubsets, ShowSubmobjectsOneByOne, ShowSubsets, SubsetMode,
};
pub use word_by_word::{AddTextWordByWord, WordByWordConfig};
pub use registry::{
    build, build_registry, create, find_animation, AnimationEntry, AnimationPreset, BoxedAnimation,
    ConfigOverrides,
};
