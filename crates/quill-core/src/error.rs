use thiserror::Error;

/// Errors raised while setting up an animation.
///
/// All of them are reported synchronously by constructors, before the
/// target object has been touched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimationError {
    /// The target lacks the vector capability set (stroke, fill, partial paths).
    #[error("'{name}' is not a vectorized object")]
    NotVectorized { name: String },

    /// No registry entry carries this id.
    #[error("unknown animation '{id}'")]
    UnknownAnimation { id: String },

    /// A string object was given a different number of glyphs than it has
    /// visible characters.
    #[error("text has {expected} visible characters but {actual} glyphs were supplied")]
    GlyphCountMismatch { expected: usize, actual: usize },

    /// A preset document could not be decoded.
    #[error("invalid animation preset: {0}")]
    InvalidPreset(String),
}

pub type AnimationResult<T> = Result<T, AnimationError>;
