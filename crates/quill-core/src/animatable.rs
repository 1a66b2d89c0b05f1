//! The capability set an animation needs from a host object.
//!
//! Animations never look inside the objects they drive. Everything they do
//! (snapshotting, restyling, partial paths, blending) goes through
//! [`Animatable`], so any rendering library can be plugged in by writing an
//! adapter. [`crate::object::VObject`] is the adapter shipped with this crate.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::color::Color;
use crate::style::Style;

/// Stable integer handle of a host object.
///
/// Handed out from a process-wide counter; a deep [`Animatable::copy`]
/// receives a fresh id while `Clone` keeps the original one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ObjectId({})", self.0)
    }
}

/// Host object interface.
///
/// Style and geometry operations are node-local: they touch only the
/// receiver, never its submobjects. Family-wide work is done by walking
/// [`Animatable::family_with_points`] (or its mutable visitor), which both
/// enumerate in the same pre-order: the receiver first, then each child's
/// family in turn.
pub trait Animatable: Clone + 'static {
    fn id(&self) -> ObjectId;

    /// Human-readable label, used in error messages and logs.
    fn name(&self) -> &str;

    /// Deep copy with fresh ids throughout the family.
    fn copy(&self) -> Self;

    /// Whether the object supports the full vector capability set
    /// (partial paths, stroke/fill styling).
    fn is_vectorized(&self) -> bool;

    /// Whether this node owns non-empty geometry.
    fn has_points(&self) -> bool;

    fn submobjects(&self) -> &[Self];

    fn set_submobjects(&mut self, submobjects: Vec<Self>);

    /// Drawable members of the family, in pre-order.
    fn family_with_points(&self) -> Vec<&Self>;

    /// Mutable walk over the drawable members, same order as
    /// [`Animatable::family_with_points`].
    fn visit_family_with_points_mut(&mut self, visitor: &mut dyn FnMut(&mut Self));

    fn style(&self) -> Style;

    fn set_style(&mut self, style: Style);

    /// Replace this node's geometry and style with `other`'s.
    fn set_data(&mut self, other: &Self);

    /// Become the portion of `other`'s path between fractions `a` and `b`.
    fn pointwise_become_partial(&mut self, other: &Self, a: f32, b: f32);

    /// Blend geometry and style between `start` and `end`.
    fn interpolate(&mut self, start: &Self, end: &Self, alpha: f32);

    /// Flag the whole family as animating (or not). Hosts use this to
    /// bypass caching while the object changes every frame.
    fn set_animating_status(&mut self, animating: bool);

    /// Recompute derived geometry (joint angles) across the family.
    fn refresh_joint_angles(&mut self);

    /// Hint that data equal to `other`'s will not change during the
    /// animation. Hosts without such an optimisation ignore it.
    fn lock_matching_data(&mut self, _other: &Self) {}

    /// The representative color: fill color when filled, stroke otherwise.
    fn color(&self) -> Color {
        let style = self
            .family_with_points()
            .first()
            .map(|sm| sm.style())
            .unwrap_or_else(|| self.style());
        if style.has_fill() {
            style.fill_color
        } else {
            style.stroke_color
        }
    }

    /// Count of drawable descendants with non-empty geometry.
    fn complexity(&self) -> usize {
        self.family_with_points().len()
    }
}
