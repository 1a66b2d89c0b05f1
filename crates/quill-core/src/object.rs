//! Reference host object: a styled tree of cubic bezier paths.

use crate::animatable::{Animatable, ObjectId};
use crate::point::Point;
use crate::progress::integer_interpolate;
use crate::shape::{CubicBezierCurve, Shape};
use crate::style::Style;

/// A vector object: an optional path of cubic curves, its style, and
/// child objects.
///
/// Plain containers built with [`VObject::group`] hold children but are not
/// vectorized, so stroke-and-fill animations refuse them.
#[derive(Debug, Clone)]
pub struct VObject {
    id: ObjectId,
    name: String,
    curves: Vec<CubicBezierCurve>,
    style: Style,
    children: Vec<VObject>,
    vectorized: bool,
    animating: bool,
    joint_angles: Vec<f32>,
}

impl VObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ObjectId::next(),
            name: name.into(),
            curves: Vec::new(),
            style: Style::default(),
            children: Vec::new(),
            vectorized: true,
            animating: false,
            joint_angles: Vec::new(),
        }
    }

    pub fn from_curves(name: impl Into<String>, curves: Vec<CubicBezierCurve>) -> Self {
        let mut obj = Self::new(name);
        obj.curves = curves;
        obj.refresh_joint_angles();
        obj
    }

    pub fn from_shapes(name: impl Into<String>, shapes: &[Box<dyn Shape>]) -> Self {
        let curves = shapes.iter().flat_map(|s| s.to_cubics()).collect();
        Self::from_curves(name, curves)
    }

    /// A vectorized container.
    pub fn vgroup(name: impl Into<String>, children: Vec<VObject>) -> Self {
        let mut obj = Self::new(name);
        obj.children = children;
        obj
    }

    /// A generic, non-vectorized container.
    pub fn group(name: impl Into<String>, children: Vec<VObject>) -> Self {
        let mut obj = Self::vgroup(name, children);
        obj.vectorized = false;
        obj
    }

    /// Set this node's style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the style of this node and every descendant.
    pub fn with_family_style(mut self, style: Style) -> Self {
        self.set_family_style(style);
        self
    }

    pub fn set_family_style(&mut self, style: Style) {
        self.style = style;
        for child in &mut self.children {
            child.set_family_style(style);
        }
    }

    pub fn add(&mut self, child: VObject) {
        self.children.push(child);
    }

    pub fn curves(&self) -> &[CubicBezierCurve] {
        &self.curves
    }

    pub fn joint_angles(&self) -> &[f32] {
        &self.joint_angles
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Path length of this node and all descendants.
    pub fn total_length(&self) -> f32 {
        let own: f32 = self.curves.iter().map(|c| c.length()).sum();
        own + self.children.iter().map(|c| c.total_length()).sum::<f32>()
    }

    fn reassign_ids(&mut self) {
        self.id = ObjectId::next();
        for child in &mut self.children {
            child.reassign_ids();
        }
    }

    fn is_closed(&self) -> bool {
        match (self.curves.first(), self.curves.last()) {
            (Some(first), Some(last)) => self.curves.len() > 1 && last.end.approx_eq(&first.start),
            _ => false,
        }
    }
}

/// Pad the shorter of two curve runs with degenerate curves at its end
/// point so the two can be blended curve by curve.
fn align_curves(
    a: &[CubicBezierCurve],
    b: &[CubicBezierCurve],
) -> (Vec<CubicBezierCurve>, Vec<CubicBezierCurve>) {
    let n = a.len().max(b.len());
    let pad = |curves: &[CubicBezierCurve], other: &[CubicBezierCurve]| {
        let anchor = curves
            .last()
            .map(|c| c.end)
            .or_else(|| other.first().map(|c| c.start))
            .unwrap_or(Point::ZERO);
        let mut padded = curves.to_vec();
        padded.resize(n, CubicBezierCurve::degenerate(anchor));
        padded
    };
    (pad(a, b), pad(b, a))
}

fn turning_angle(from: Point, to: Point) -> f32 {
    if from.magnitude() <= f32::EPSILON || to.magnitude() <= f32::EPSILON {
        return 0.0;
    }
    let (from, to) = (glam::Vec2::from(from), glam::Vec2::from(to));
    from.perp_dot(to).atan2(from.dot(to))
}

impl Animatable for VObject {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn copy(&self) -> Self {
        let mut copy = self.clone();
        copy.reassign_ids();
        copy
    }

    fn is_vectorized(&self) -> bool {
        self.vectorized
    }

    fn has_points(&self) -> bool {
        !self.curves.is_empty()
    }

    fn submobjects(&self) -> &[Self] {
        &self.children
    }

    fn set_submobjects(&mut self, submobjects: Vec<Self>) {
        self.children = submobjects;
    }

    fn family_with_points(&self) -> Vec<&Self> {
        let mut family = Vec::new();
        if self.has_points() {
            family.push(self);
        }
        for child in &self.children {
            family.extend(child.family_with_points());
        }
        family
    }

    fn visit_family_with_points_mut(&mut self, visitor: &mut dyn FnMut(&mut Self)) {
        if self.has_points() {
            visitor(self);
        }
        for child in &mut self.children {
            child.visit_family_with_points_mut(visitor);
        }
    }

    fn style(&self) -> Style {
        self.style
    }

    fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    fn set_data(&mut self, other: &Self) {
        self.curves = other.curves.clone();
        self.style = other.style;
        self.joint_angles = other.joint_angles.clone();
    }

    fn pointwise_become_partial(&mut self, other: &Self, a: f32, b: f32) {
        let source = &other.curves;
        let n = source.len();
        if n == 0 {
            self.curves.clear();
            return;
        }
        let a = a.clamp(0.0, 1.0);
        let b = b.clamp(a, 1.0);
        if a <= 0.0 && b >= 1.0 {
            self.curves = source.clone();
            return;
        }

        let (lower_index, lower_residue) = integer_interpolate(0, n as i64, a);
        let (upper_index, upper_residue) = integer_interpolate(0, n as i64, b);
        let (lower, upper) = (lower_index as usize, upper_index as usize);

        let (first, last) = if lower == upper {
            let piece = source[lower].split_range(lower_residue, upper_residue);
            (piece, piece)
        } else {
            (
                source[lower].split_range(lower_residue, 1.0),
                source[upper].split_range(0.0, upper_residue),
            )
        };

        self.curves = (0..n)
            .map(|i| match i {
                i if i < lower => CubicBezierCurve::degenerate(first.start),
                i if i == lower => first,
                i if i < upper => source[i],
                i if i == upper => last,
                _ => CubicBezierCurve::degenerate(last.end),
            })
            .collect();
    }

    fn interpolate(&mut self, start: &Self, end: &Self, alpha: f32) {
        let (from, to) = align_curves(&start.curves, &end.curves);
        self.curves = from.iter().zip(&to).map(|(a, b)| a.lerp(b, alpha)).collect();
        self.style = start.style.lerp(&end.style, alpha);
    }

    fn set_animating_status(&mut self, animating: bool) {
        self.animating = animating;
        for child in &mut self.children {
            child.set_animating_status(animating);
        }
    }

    fn refresh_joint_angles(&mut self) {
        let n = self.curves.len();
        let closed = self.is_closed();
        self.joint_angles = (0..n)
            .map(|i| {
                let next = if i + 1 < n {
                    i + 1
                } else if closed {
                    0
                } else {
                    return 0.0;
                };
                let (here, there) = (&self.curves[i], &self.curves[next]);
                if !here.end.approx_eq(&there.start) {
                    return 0.0;
                }
                turning_angle(here.end_tangent(), there.start_tangent())
            })
            .collect();
        for child in &mut self.children {
            child.refresh_joint_angles();
        }
    }
}
