//! Rate functions: the easing applied to raw animation time.

use serde::{Deserialize, Serialize};

/// An easing curve mapping elapsed time in [0, 1] onto progress.
///
/// `Reverse` feeds `1 - t` into the wrapped curve; reveal-backward
/// animations are built from it rather than from dedicated geometry code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateFunc {
    Linear,
    #[default]
    Smooth,
    DoubleSmooth,
    RushInto,
    RushFrom,
    ThereAndBack,
    Reverse(Box<RateFunc>),
    /// Caller-supplied curve. Cannot be serialized.
    #[serde(skip)]
    Custom(fn(f32) -> f32),
}

impl RateFunc {
    pub fn reversed(inner: RateFunc) -> Self {
        RateFunc::Reverse(Box::new(inner))
    }

    pub fn apply(&self, t: f32) -> f32 {
        match self {
            RateFunc::Linear => t,
            RateFunc::Smooth => smooth(t),
            RateFunc::DoubleSmooth => double_smooth(t),
            RateFunc::RushInto => 2.0 * smooth(0.5 * t),
            RateFunc::RushFrom => 2.0 * smooth(0.5 * (t + 1.0)) - 1.0,
            RateFunc::ThereAndBack => {
                let t = if t < 0.5 { 2.0 * t } else { 2.0 * (1.0 - t) };
                smooth(t)
            }
            RateFunc::Reverse(inner) => inner.apply(1.0 - t),
            RateFunc::Custom(f) => f(t),
        }
    }
}

/// Degree-5 smoothstep: zero first and second derivatives at 0 and 1.
pub fn smooth(t: f32) -> f32 {
    let s = 1.0 - t;
    t * t * t * (10.0 * s * s + 5.0 * s * t + t * t)
}

pub fn double_smooth(t: f32) -> f32 {
    if t < 0.5 {
        0.5 * smooth(2.0 * t)
    } else {
        0.5 * (1.0 + smooth(2.0 * t - 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_endpoints() {
        for rate in [
            RateFunc::Linear,
            RateFunc::Smooth,
            RateFunc::DoubleSmooth,
            RateFunc::RushInto,
            RateFunc::RushFrom,
        ] {
            assert!(close(rate.apply(0.0), 0.0), "{rate:?} at 0");
            assert!(close(rate.apply(1.0), 1.0), "{rate:?} at 1");
        }
    }

    #[test]
    fn test_smooth_midpoint() {
        assert!(close(smooth(0.5), 0.5));
        assert!(close(double_smooth(0.5), 0.5));
        assert!(close(double_smooth(0.25), 0.25));
    }

    #[test]
    fn test_there_and_back() {
        let rate = RateFunc::ThereAndBack;
        assert!(close(rate.apply(0.0), 0.0));
        assert!(close(rate.apply(0.5), 1.0));
        assert!(close(rate.apply(1.0), 0.0));
    }

    #[test]
    fn test_reverse_inverts_time() {
        let rate = RateFunc::reversed(RateFunc::Smooth);
        assert!(close(rate.apply(0.0), 1.0));
        assert!(close(rate.apply(1.0), 0.0));
        assert!(close(rate.apply(0.3), smooth(0.7)));
    }

    #[test]
    fn test_custom() {
        let rate = RateFunc::Custom(|t| t * t);
        assert!(close(rate.apply(0.5), 0.25));
    }

    #[test]
    fn test_serde_names() {
        let rate: RateFunc = serde_json::from_str("\"double_smooth\"").unwrap();
        assert!(matches!(rate, RateFunc::DoubleSmooth));
        let rate: RateFunc = serde_json::from_str(r#"{"reverse":"smooth"}"#).unwrap();
        assert!(close(rate.apply(0.0), 1.0));
    }
}
