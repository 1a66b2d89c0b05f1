use std::f32::consts::FRAC_PI_2;

use lyon::geom::CubicBezierSegment;
use serde::{Deserialize, Serialize};

use crate::point::Point;

/// Flattening tolerance used for arc-length estimates.
const LENGTH_TOLERANCE: f32 = 0.001;

/// A drawable shape that can be sampled at any drawing progress [0, 1].
///
/// Shapes are the authoring primitives: lines, bezier curves and arcs.
/// A vector object stores its geometry as cubic curves only, so every
/// shape knows how to express itself through [`Shape::to_cubics`].
pub trait Shape: Send + Sync {
    /// Sample the shape at a given drawing progress in [0, 1].
    fn next_vector(&self, drawing_progress: f32) -> Point;

    /// The path length of this shape.
    fn length(&self) -> f32;

    /// The shape as a run of cubic bezier curves.
    fn to_cubics(&self) -> Vec<CubicBezierCurve>;
}

/// Compute total path length of a collection of shapes.
pub fn total_length(shapes: &[Box<dyn Shape>]) -> f32 {
    shapes.iter().map(|s| s.length()).sum()
}

// --- Concrete shape implementations ---

/// A cubic Bezier curve, the unit of geometry inside a vector object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezierCurve {
    pub start: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub end: Point,
}

impl CubicBezierCurve {
    pub fn new(start: Point, ctrl1: Point, ctrl2: Point, end: Point) -> Self {
        Self { start, ctrl1, ctrl2, end }
    }

    /// A straight segment expressed as a cubic with control points at thirds.
    pub fn line(start: Point, end: Point) -> Self {
        Self {
            start,
            ctrl1: start.lerp(end, 1.0 / 3.0),
            ctrl2: start.lerp(end, 2.0 / 3.0),
            end,
        }
    }

    /// A zero-length curve sitting on `point`.
    pub fn degenerate(point: Point) -> Self {
        Self { start: point, ctrl1: point, ctrl2: point, end: point }
    }

    pub fn points(&self) -> [Point; 4] {
        [self.start, self.ctrl1, self.ctrl2, self.end]
    }

    pub fn is_degenerate(&self) -> bool {
        self.points().iter().all(|p| p.approx_eq(&self.start))
    }

    fn segment(&self) -> CubicBezierSegment<f32> {
        CubicBezierSegment {
            from: self.start.into(),
            ctrl1: self.ctrl1.into(),
            ctrl2: self.ctrl2.into(),
            to: self.end.into(),
        }
    }

    fn from_segment(segment: CubicBezierSegment<f32>) -> Self {
        Self {
            start: segment.from.into(),
            ctrl1: segment.ctrl1.into(),
            ctrl2: segment.ctrl2.into(),
            end: segment.to.into(),
        }
    }

    /// The sub-curve between parameters `t0` and `t1`.
    pub fn split_range(&self, t0: f32, t1: f32) -> Self {
        if t0 <= 0.0 && t1 >= 1.0 {
            return *self;
        }
        if t0 == t1 {
            return Self::degenerate(self.next_vector(t0));
        }
        Self::from_segment(self.segment().split_range(t0..t1))
    }

    /// Control-point-wise interpolation.
    pub fn lerp(&self, other: &CubicBezierCurve, alpha: f32) -> Self {
        Self {
            start: self.start.lerp(other.start, alpha),
            ctrl1: self.ctrl1.lerp(other.ctrl1, alpha),
            ctrl2: self.ctrl2.lerp(other.ctrl2, alpha),
            end: self.end.lerp(other.end, alpha),
        }
    }

    /// Direction the curve leaves its start point, skipping coincident controls.
    pub fn start_tangent(&self) -> Point {
        let p = self.points();
        p[1..]
            .iter()
            .map(|q| *q - p[0])
            .find(|d| d.magnitude() > f32::EPSILON)
            .unwrap_or(Point::ZERO)
    }

    /// Direction the curve arrives at its end point, skipping coincident controls.
    pub fn end_tangent(&self) -> Point {
        let p = self.points();
        p[..3]
            .iter()
            .rev()
            .map(|q| p[3] - *q)
            .find(|d| d.magnitude() > f32::EPSILON)
            .unwrap_or(Point::ZERO)
    }
}

impl Shape for CubicBezierCurve {
    fn next_vector(&self, t: f32) -> Point {
        self.segment().sample(t).into()
    }

    fn length(&self) -> f32 {
        // lyon's flattening yields NaN on a zero-length segment.
        if self.is_degenerate() {
            return 0.0;
        }
        self.segment().approximate_length(LENGTH_TOLERANCE)
    }

    fn to_cubics(&self) -> Vec<CubicBezierCurve> {
        vec![*self]
    }
}

/// A line segment between two points.
#[derive(Debug, Clone)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { start: Point::new(x1, y1), end: Point::new(x2, y2) }
    }

    pub fn from_points(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

impl Shape for Line {
    fn next_vector(&self, drawing_progress: f32) -> Point {
        self.start.lerp(self.end, drawing_progress)
    }

    fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    fn to_cubics(&self) -> Vec<CubicBezierCurve> {
        vec![CubicBezierCurve::line(self.start, self.end)]
    }
}

/// A quadratic Bezier curve, stored as a cubic Bezier using degree elevation.
#[derive(Debug, Clone)]
pub struct QuadraticBezierCurve {
    inner: CubicBezierCurve,
}

impl QuadraticBezierCurve {
    pub fn new(start: Point, ctrl: Point, end: Point) -> Self {
        // Degree elevation: quadratic -> cubic
        Self {
            inner: CubicBezierCurve::new(
                start,
                start.lerp(ctrl, 2.0 / 3.0),
                end.lerp(ctrl, 2.0 / 3.0),
                end,
            ),
        }
    }
}

impl Shape for QuadraticBezierCurve {
    fn next_vector(&self, drawing_progress: f32) -> Point {
        self.inner.next_vector(drawing_progress)
    }

    fn length(&self) -> f32 {
        self.inner.length()
    }

    fn to_cubics(&self) -> Vec<CubicBezierCurve> {
        vec![self.inner]
    }
}

/// A circular or elliptical arc sweeping `sweep` radians from `start_angle`.
#[derive(Debug, Clone)]
pub struct CircleArc {
    pub center: Point,
    pub radius_x: f32,
    pub radius_y: f32,
    pub start_angle: f32,
    pub sweep: f32,
}

impl CircleArc {
    pub fn new(center: Point, radius_x: f32, radius_y: f32, start_angle: f32, sweep: f32) -> Self {
        Self { center, radius_x, radius_y, start_angle, sweep }
    }

    /// A full circle starting at angle zero.
    pub fn circle(center: Point, radius: f32) -> Self {
        Self::new(center, radius, radius, 0.0, std::f32::consts::TAU)
    }

    fn at_angle(&self, angle: f32) -> Point {
        Point::new(
            self.center.x + self.radius_x * angle.cos(),
            self.center.y + self.radius_y * angle.sin(),
        )
    }
}

impl Shape for CircleArc {
    fn next_vector(&self, drawing_progress: f32) -> Point {
        self.at_angle(self.start_angle + self.sweep * drawing_progress)
    }

    fn length(&self) -> f32 {
        self.to_cubics().iter().map(|c| c.length()).sum()
    }

    /// Splits the sweep into pieces of at most a quarter turn, each
    /// approximated with the standard `4/3 * tan(theta/4)` handle length.
    fn to_cubics(&self) -> Vec<CubicBezierCurve> {
        let pieces = (self.sweep.abs() / FRAC_PI_2).ceil().max(1.0) as usize;
        let step = self.sweep / pieces as f32;
        let handle = 4.0 / 3.0 * (step / 4.0).tan();

        (0..pieces)
            .map(|i| {
                let a0 = self.start_angle + step * i as f32;
                let a1 = a0 + step;
                let start = self.at_angle(a0);
                let end = self.at_angle(a1);
                let ctrl1 = Point::new(
                    start.x - handle * self.radius_x * a0.sin(),
                    start.y + handle * self.radius_y * a0.cos(),
                );
                let ctrl2 = Point::new(
                    end.x + handle * self.radius_x * a1.sin(),
                    end.y - handle * self.radius_y * a1.cos(),
                );
                CubicBezierCurve::new(start, ctrl1, ctrl2, end)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_interpolation() {
        let line = Line::new(0.0, 0.0, 10.0, 10.0);
        let mid = line.next_vector(0.5);
        assert!((mid.x - 5.0).abs() < 0.001);
        assert!((mid.y - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_line_length() {
        let line = Line::new(0.0, 0.0, 3.0, 4.0);
        assert!((line.length() - 5.0).abs() < 0.001);
        let cubic = &line.to_cubics()[0];
        assert!((cubic.length() - 5.0).abs() < 0.01);
    }

    #[test]
    fn test_cubic_bezier_endpoints() {
        let curve = CubicBezierCurve::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        );
        assert!(curve.next_vector(0.0).approx_eq(&Point::new(0.0, 0.0)));
        assert!(curve.next_vector(1.0).approx_eq(&Point::new(0.0, 1.0)));
    }

    #[test]
    fn test_split_range_matches_samples() {
        let curve = CubicBezierCurve::new(
            Point::new(0.0, 0.0),
            Point::new(0.3, 1.0),
            Point::new(0.7, 1.0),
            Point::new(1.0, 0.0),
        );
        let sub = curve.split_range(0.25, 0.75);
        assert!(sub.start.approx_eq(&curve.next_vector(0.25)));
        assert!(sub.end.approx_eq(&curve.next_vector(0.75)));
        assert!(sub.next_vector(0.5).approx_eq(&curve.next_vector(0.5)));
    }

    #[test]
    fn test_split_range_empty_is_degenerate() {
        let curve = CubicBezierCurve::line(Point::ZERO, Point::new(2.0, 0.0));
        let sub = curve.split_range(0.5, 0.5);
        assert!(sub.is_degenerate());
        assert!(sub.start.approx_eq(&Point::new(1.0, 0.0)));
    }

    #[test]
    fn test_degenerate_curve_has_zero_length() {
        let point = CubicBezierCurve::degenerate(Point::new(1.0, 1.0));
        assert_eq!(point.length(), 0.0);
        let empty = CubicBezierCurve::line(Point::ZERO, Point::new(2.0, 0.0)).split_range(0.5, 0.5);
        assert_eq!(empty.length(), 0.0);
    }

    #[test]
    fn test_quadratic_keeps_endpoints() {
        let quad = QuadraticBezierCurve::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(2.0, 0.0),
        );
        assert!(quad.next_vector(0.0).approx_eq(&Point::new(0.0, 0.0)));
        assert!(quad.next_vector(1.0).approx_eq(&Point::new(2.0, 0.0)));
        // Apex of the quadratic is at t = 0.5, y = 1.
        assert!(quad.next_vector(0.5).approx_eq(&Point::new(1.0, 1.0)));
    }

    #[test]
    fn test_circle_arc_to_cubics() {
        let arc = CircleArc::circle(Point::ZERO, 1.0);
        let cubics = arc.to_cubics();
        assert_eq!(cubics.len(), 4);
        assert!(cubics[0].start.approx_eq(&Point::new(1.0, 0.0)));
        assert!(cubics[3].end.approx_eq(&Point::new(1.0, 0.0)));
        let circumference = std::f32::consts::TAU;
        assert!((arc.length() - circumference).abs() < 0.01);
    }

    #[test]
    fn test_tangents_skip_coincident_controls() {
        let curve = CubicBezierCurve::new(
            Point::ZERO,
            Point::ZERO,
            Point::new(1.0, 1.0),
            Point::new(1.0, 1.0),
        );
        let start = curve.start_tangent();
        assert!(start.approx_eq(&Point::new(1.0, 1.0)));
        let end = curve.end_tangent();
        assert!(end.approx_eq(&Point::new(1.0, 1.0)));
        assert_eq!(CubicBezierCurve::degenerate(Point::ZERO).end_tangent(), Point::ZERO);
    }

    #[test]
    fn test_total_length() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Line::new(0.0, 0.0, 3.0, 4.0)),
            Box::new(Line::new(0.0, 0.0, 6.0, 8.0)),
        ];
        let total = total_length(&shapes);
        assert!((total - 15.0).abs() < 0.001);
    }
}
