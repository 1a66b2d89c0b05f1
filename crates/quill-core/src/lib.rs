pub mod point;
pub mod color;
pub mod shape;
pub mod style;
pub mod progress;
pub mod rate;
pub mod animatable;
pub mod object;
pub mod text;
pub mod error;
pub mod animation;
pub mod frame;
pub mod scene;

pub use point::Point;
pub use color::Color;
pub use shape::{Shape, Line, CubicBezierCurve, QuadraticBezierCurve, CircleArc};
pub use style::Style;
pub use progress::{integer_interpolate, phase_split};
pub use rate::RateFunc;
pub use animatable::{Animatable, ObjectId};
pub use object::VObject;
pub use text::{StringObject, StructuredText};
pub use error::{AnimationError, AnimationResult};
pub use animation::{Animation, AnimationConfig};
pub use frame::Frame;
pub use scene::{PlaybackConfig, Scene};
