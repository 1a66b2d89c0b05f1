use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Stroke and fill attributes of a single vector object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub stroke_color: Color,
    pub stroke_width: f32,
    pub stroke_opacity: f32,
    pub fill_color: Color,
    pub fill_opacity: f32,
    /// Draw the stroke underneath the fill.
    pub stroke_behind: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke_color: Color::WHITE,
            stroke_width: 4.0,
            stroke_opacity: 1.0,
            fill_color: Color::WHITE,
            fill_opacity: 0.0,
            stroke_behind: false,
        }
    }
}

impl Style {
    pub fn stroked(color: Color, width: f32) -> Self {
        Self { stroke_color: color, stroke_width: width, ..Self::default() }
    }

    pub fn filled(color: Color, opacity: f32) -> Self {
        Self {
            stroke_color: color,
            fill_color: color,
            fill_opacity: opacity,
            ..Self::default()
        }
    }

    pub fn has_fill(&self) -> bool {
        self.fill_opacity > 0.0
    }

    /// Component-wise blend; the boolean flag switches at the halfway mark.
    pub fn lerp(&self, other: &Style, alpha: f32) -> Style {
        let mix = |a: f32, b: f32| a * (1.0 - alpha) + b * alpha;
        Style {
            stroke_color: self.stroke_color.lerp(other.stroke_color, alpha),
            stroke_width: mix(self.stroke_width, other.stroke_width),
            stroke_opacity: mix(self.stroke_opacity, other.stroke_opacity),
            fill_color: self.fill_color.lerp(other.fill_color, alpha),
            fill_opacity: mix(self.fill_opacity, other.fill_opacity),
            stroke_behind: if alpha < 0.5 { self.stroke_behind } else { other.stroke_behind },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let a = Style::stroked(Color::BLACK, 2.0);
        let b = Style::filled(Color::WHITE, 1.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
    }

    #[test]
    fn test_lerp_midpoint() {
        let a = Style { fill_opacity: 0.0, stroke_width: 2.0, ..Style::default() };
        let b = Style { fill_opacity: 1.0, stroke_width: 4.0, ..Style::default() };
        let mid = a.lerp(&b, 0.5);
        assert_eq!(mid.fill_opacity, 0.5);
        assert_eq!(mid.stroke_width, 3.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let style: Style = serde_json::from_str(r#"{"fill_opacity":0.5}"#).unwrap();
        assert_eq!(style.fill_opacity, 0.5);
        assert_eq!(style.stroke_width, Style::default().stroke_width);
        assert!(style.has_fill());
    }
}
