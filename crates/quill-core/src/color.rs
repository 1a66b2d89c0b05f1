use serde::{Deserialize, Serialize};

/// An RGB color with channels in 0..1.
///
/// Serializes as `{"r", "g", "b"}`; deserializes from that or from a
/// `"#RRGGBB"` string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Hex(String),
    Rgb { r: f32, g: f32, b: f32 },
}

impl TryFrom<ColorRepr> for Color {
    type Error = String;

    fn try_from(repr: ColorRepr) -> Result<Self, Self::Error> {
        match repr {
            ColorRepr::Hex(hex) => {
                Color::from_hex(&hex).ok_or_else(|| format!("invalid hex color '{hex}'"))
            }
            ColorRepr::Rgb { r, g, b } => Ok(Color { r, g, b }),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0 };

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .ok()
                .map(|v| v as f32 / 255.0)
        };
        Some(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    pub fn lerp(&self, other: Color, alpha: f32) -> Color {
        let mix = |a: f32, b: f32| a * (1.0 - alpha) + b * alpha;
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let c = Color::from_hex("#FF8000").unwrap();
        assert_eq!(c.r, 1.0);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.b, 0.0);
        assert_eq!(Color::from_hex("00ff00"), Some(Color::rgb(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert_eq!(Color::from_hex("#FFF"), None);
        assert_eq!(Color::from_hex("#GG0000"), None);
    }

    #[test]
    fn test_deserialize_hex_or_channels() {
        let hex: Color = serde_json::from_str(r##""#FF0000""##).unwrap();
        assert_eq!(hex, Color::rgb(1.0, 0.0, 0.0));
        let rgb: Color = serde_json::from_str(r#"{"r": 0.0, "g": 0.5, "b": 1.0}"#).unwrap();
        assert_eq!(rgb, Color::rgb(0.0, 0.5, 1.0));
        assert!(serde_json::from_str::<Color>(r#""blue""#).is_err());
    }

    #[test]
    fn test_serialized_channels_read_back() {
        let color = Color::rgb(0.2, 0.4, 0.6);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(serde_json::from_str::<Color>(&json).unwrap(), color);
    }

    #[test]
    fn test_lerp_midpoint() {
        let mid = Color::BLACK.lerp(Color::WHITE, 0.5);
        assert_eq!(mid, Color::rgb(0.5, 0.5, 0.5));
    }
}
