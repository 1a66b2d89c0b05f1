//! Structured text: strings whose glyphs can be addressed as word groups.
//!
//! No shaping happens here. Callers supply one glyph object per visible
//! character (whatever their font pipeline produced) and [`StringObject`]
//! tracks which glyphs make up which word.

use crate::animatable::Animatable;
use crate::error::{AnimationError, AnimationResult};
use crate::object::VObject;
use crate::point::Point;
use crate::shape::{Line, Shape};

/// Text that can be broken into discrete, addressable groups.
pub trait StructuredText {
    type Object: Animatable;

    /// A transient display object whose children are the groups, in
    /// reading order.
    fn build_groups(&self) -> Self::Object;

    /// The persistent object representing the whole text.
    fn into_object(self) -> Self::Object;
}

/// A string paired with its glyph objects.
#[derive(Debug, Clone)]
pub struct StringObject {
    text: String,
    object: VObject,
    /// Glyph index ranges of each word.
    words: Vec<std::ops::Range<usize>>,
}

impl StringObject {
    /// `glyphs` must hold exactly one object per non-whitespace character.
    pub fn new(text: impl Into<String>, glyphs: Vec<VObject>) -> AnimationResult<Self> {
        let text = text.into();
        let expected = text.chars().filter(|c| !c.is_whitespace()).count();
        if glyphs.len() != expected {
            return Err(AnimationError::GlyphCountMismatch { expected, actual: glyphs.len() });
        }

        let object = VObject::vgroup(text.clone(), glyphs);
        let words = Self::word_ranges(&text);
        Ok(Self { text, object, words })
    }

    /// Lay the text out with a box outline standing in for each glyph.
    ///
    /// Every character, whitespace included, advances the pen by `advance`.
    pub fn boxed(text: impl Into<String>, advance: f32) -> Self {
        let text = text.into();
        let height = advance * 1.4;
        let glyphs = text
            .chars()
            .enumerate()
            .filter(|(_, c)| !c.is_whitespace())
            .map(|(i, c)| {
                let x = i as f32 * advance;
                let w = advance * 0.8;
                let corners = [
                    Point::new(x, 0.0),
                    Point::new(x + w, 0.0),
                    Point::new(x + w, height),
                    Point::new(x, height),
                ];
                let outline: Vec<Box<dyn Shape>> = (0..4)
                    .map(|k| {
                        Box::new(Line::from_points(corners[k], corners[(k + 1) % 4]))
                            as Box<dyn Shape>
                    })
                    .collect();
                VObject::from_shapes(c.to_string(), &outline)
            })
            .collect();

        let object = VObject::vgroup(text.clone(), glyphs);
        let words = Self::word_ranges(&text);
        Self { text, object, words }
    }

    fn word_ranges(text: &str) -> Vec<std::ops::Range<usize>> {
        let mut words = Vec::new();
        let mut glyph = 0;
        for word in text.split_whitespace() {
            let len = word.chars().count();
            words.push(glyph..glyph + len);
            glyph += len;
        }
        words
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn object(&self) -> &VObject {
        &self.object
    }

    pub fn glyphs(&self) -> &[VObject] {
        self.object.submobjects()
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

impl StructuredText for StringObject {
    type Object = VObject;

    fn build_groups(&self) -> VObject {
        let glyphs = self.glyphs();
        let groups = self
            .words
            .iter()
            .zip(self.text.split_whitespace())
            .map(|(range, word)| VObject::vgroup(word, glyphs[range.clone()].to_vec()))
            .collect();
        VObject::vgroup(format!("{} (words)", self.text), groups)
    }

    fn into_object(self) -> VObject {
        self.object
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_split_on_whitespace() {
        let text = StringObject::boxed("To be  or\tnot", 1.0);
        assert_eq!(text.word_count(), 4);
        assert_eq!(text.glyphs().len(), 9);

        let groups = text.build_groups();
        let names: Vec<&str> = groups.submobjects().iter().map(|g| g.name()).collect();
        assert_eq!(names, ["To", "be", "or", "not"]);
        assert_eq!(groups.submobjects()[3].submobjects().len(), 3);
    }

    #[test]
    fn test_glyph_count_checked() {
        let err = StringObject::new("ab c", vec![VObject::new("a")]).unwrap_err();
        assert_eq!(err, AnimationError::GlyphCountMismatch { expected: 3, actual: 1 });
    }

    #[test]
    fn test_supplied_glyphs_are_grouped() {
        let glyphs = ["h", "i", "y", "o"].iter().map(|n| VObject::new(*n)).collect();
        let text = StringObject::new("hi yo", glyphs).unwrap();
        let groups = text.build_groups();
        assert_eq!(groups.submobjects().len(), 2);
        assert_eq!(groups.submobjects()[1].submobjects()[0].name(), "y");
    }

    #[test]
    fn test_empty_text() {
        let text = StringObject::boxed("   ", 1.0);
        assert_eq!(text.word_count(), 0);
        assert!(text.build_groups().submobjects().is_empty());
        assert!(text.into_object().family_with_points().is_empty());
    }
}
