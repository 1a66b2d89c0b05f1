use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// A point in the 2D drawing plane.
///
/// Control points of every bezier curve and every anchor of a vector
/// object are stored as `Point`s. Conversions to `glam::Vec2` and lyon's
/// point type are provided so the geometry code can lean on both crates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

const EPSILON: f32 = 0.0001;

impl Default for Point {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(&self, other: Point) -> f32 {
        (*self - other).magnitude()
    }

    /// Linear interpolation towards `other`; exact at `alpha` 0 and 1.
    pub fn lerp(&self, other: Point, alpha: f32) -> Point {
        Point::new(
            self.x * (1.0 - alpha) + other.x * alpha,
            self.y * (1.0 - alpha) + other.y * alpha,
        )
    }

    /// Approximate equality using epsilon comparison
    pub fn approx_eq(&self, other: &Point) -> bool {
        (self.x - other.x).abs() < EPSILON && (self.y - other.y).abs() < EPSILON
    }
}

impl From<glam::Vec2> for Point {
    fn from(v: glam::Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Point> for glam::Vec2 {
    fn from(p: Point) -> Self {
        glam::Vec2::new(p.x, p.y)
    }
}

impl From<lyon::math::Point> for Point {
    fn from(p: lyon::math::Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<Point> for lyon::math::Point {
    fn from(p: Point) -> Self {
        lyon::math::point(p.x, p.y)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;
    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Point> for f32 {
    type Output = Point;
    fn mul(self, rhs: Point) -> Point {
        Point::new(rhs.x * self, rhs.y * self)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_default() {
        let p = Point::default();
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn test_point_add() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 5.0);
        let c = a + b;
        assert_eq!(c.x, 5.0);
        assert_eq!(c.y, 7.0);
    }

    #[test]
    fn test_point_magnitude() {
        let p = Point::new(3.0, 4.0);
        assert!((p.magnitude() - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_point_lerp() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, -4.0);
        assert!(a.lerp(b, 0.5).approx_eq(&Point::new(5.0, -2.0)));
        assert!(a.lerp(b, 0.0).approx_eq(&a));
        assert!(a.lerp(b, 1.0).approx_eq(&b));
    }

    #[test]
    fn test_point_negate() {
        let n = -Point::new(1.0, -2.0);
        assert_eq!(n.x, -1.0);
        assert_eq!(n.y, 2.0);
    }

    #[test]
    fn test_lyon_round_trip() {
        let p = Point::new(0.25, -0.75);
        let l: lyon::math::Point = p.into();
        assert_eq!(Point::from(l), p);
    }
}
