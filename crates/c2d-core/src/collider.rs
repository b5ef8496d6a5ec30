// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use c2d_geom::{BoundingBox, BoundingCircle, Edges, Point, Transform};
use serde::{Deserialize, Serialize};

use crate::collision::alpha::AlphaProbe;
use crate::collision::PixelPoint;
use crate::error::ColliderError;
use crate::kind::ColliderKind;
use crate::renderable::SharedRenderable;
use crate::settings::Settings;

/// How a collider derives its bounding circle radius from its box.
///
/// Both variants truncate the radius toward zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundingCirclePolicy {
    /// `max(width, height) / 2`.
    #[default]
    Inscribed,
    /// `hypot(width, height) / 2`: the circle through the box corners.
    Circumscribed,
}

impl BoundingCirclePolicy {
    /// Radius for a `width` × `height` box.
    #[must_use]
    pub fn radius(self, width: f32, height: f32) -> f32 {
        match self {
            Self::Inscribed => (width.max(height) * 0.5).trunc(),
            Self::Circumscribed => (width.hypot(height) * 0.5).trunc(),
        }
    }
}

/// Collision shape of one renderable.
///
/// Geometry is cached from the renderable's bounds and world transform and
/// refreshed by [`update`](Self::update). The box is always present; the
/// circle is exposed only for circle and alpha kinds.
///
/// The last pixel-exact probe involving this collider is kept for
/// diagnostics. Its only writer is
/// [`Detector::collide_and_record`](crate::Detector::collide_and_record),
/// which needs `&mut` access to both colliders.
pub struct Collider {
    kind: ColliderKind,
    renderable: SharedRenderable,
    policy: BoundingCirclePolicy,
    bounds: BoundingBox,
    transform: Transform,
    bounding_box: BoundingBox,
    circle: BoundingCircle,
    last_probe: Option<AlphaProbe>,
}

impl fmt::Debug for Collider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collider")
            .field("kind", &self.kind)
            .field("bounding_box", &self.bounding_box)
            .field("circle", &self.circle)
            .field("last_probe", &self.last_probe)
            .finish_non_exhaustive()
    }
}

impl Collider {
    /// Builds a collider of `kind` for `renderable` and reads its geometry.
    pub fn new(
        kind: ColliderKind,
        renderable: SharedRenderable,
        policy: BoundingCirclePolicy,
    ) -> Result<Self, ColliderError> {
        let mut collider = Self {
            kind,
            renderable,
            policy,
            bounds: BoundingBox::default(),
            transform: Transform::identity(),
            bounding_box: BoundingBox::default(),
            circle: BoundingCircle::default(),
            last_probe: None,
        };
        collider.update()?;
        Ok(collider)
    }

    /// Builds a collider from a kind tag such as `"circle"`.
    pub fn from_tag(
        tag: &str,
        renderable: SharedRenderable,
        policy: BoundingCirclePolicy,
    ) -> Result<Self, ColliderError> {
        Self::new(tag.parse()?, renderable, policy)
    }

    /// Builds a collider of `kind` using the circle policy from `settings`.
    pub fn with_settings(
        kind: ColliderKind,
        renderable: SharedRenderable,
        settings: &Settings,
    ) -> Result<Self, ColliderError> {
        Self::new(kind, renderable, settings.bounding_circle)
    }

    /// Box collider with the default circle policy.
    pub fn boxed(renderable: SharedRenderable) -> Result<Self, ColliderError> {
        Self::new(ColliderKind::Box, renderable, BoundingCirclePolicy::default())
    }

    /// Circle collider with the default circle policy.
    pub fn circle(renderable: SharedRenderable) -> Result<Self, ColliderError> {
        Self::new(ColliderKind::Circle, renderable, BoundingCirclePolicy::default())
    }

    /// Pixel-exact collider with the default circle policy.
    pub fn alpha(renderable: SharedRenderable) -> Result<Self, ColliderError> {
        Self::new(ColliderKind::Alpha, renderable, BoundingCirclePolicy::default())
    }

    /// Re-reads bounds and transform from the renderable and rebuilds the
    /// cached geometry.
    ///
    /// The box spans the local bounds mapped into world space
    /// (`width = scale_x * bounds.width`, likewise for height). A negative
    /// scale mirrors the box around its origin; extents stay non-negative.
    /// On error the previous geometry is kept.
    pub fn update(&mut self) -> Result<(), ColliderError> {
        let bounds = self.renderable.local_bounds();
        let transform = self.renderable.world_transform();
        let finite = [bounds.x(), bounds.y(), bounds.width(), bounds.height()]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(ColliderError::NonFiniteGeometry { what: "bounds" });
        }
        if !transform.is_finite() {
            return Err(ColliderError::NonFiniteGeometry { what: "transform" });
        }

        let a = transform.apply(bounds.origin());
        let b = transform.apply(Point::new(bounds.right(), bounds.bottom()));
        if ![a.x, a.y, b.x, b.y].iter().all(|v| v.is_finite()) {
            return Err(ColliderError::NonFiniteGeometry { what: "bounding box" });
        }
        let bounding_box =
            BoundingBox::from_edges(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y));
        let center = bounding_box.center();
        let radius = self.policy.radius(bounding_box.width(), bounding_box.height());

        self.bounds = bounds;
        self.transform = transform;
        self.bounding_box = bounding_box;
        self.circle = BoundingCircle::new(center.x, center.y, radius);
        Ok(())
    }

    /// Shape kind.
    #[must_use]
    pub const fn kind(&self) -> ColliderKind {
        self.kind
    }

    /// Returns `true` for box colliders.
    #[must_use]
    pub fn is_box(&self) -> bool {
        self.kind == ColliderKind::Box
    }

    /// Returns `true` for circle colliders.
    #[must_use]
    pub fn is_circle(&self) -> bool {
        self.kind == ColliderKind::Circle
    }

    /// Returns `true` for pixel-exact colliders.
    #[must_use]
    pub fn is_alpha(&self) -> bool {
        self.kind == ColliderKind::Alpha
    }

    /// The renderable this collider describes.
    #[must_use]
    pub fn renderable(&self) -> &SharedRenderable {
        &self.renderable
    }

    /// Circle policy used by [`update`](Self::update).
    #[must_use]
    pub const fn policy(&self) -> BoundingCirclePolicy {
        self.policy
    }

    /// Local bounds as of the last update.
    #[must_use]
    pub const fn local_bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// World transform as of the last update.
    #[must_use]
    pub const fn transform(&self) -> Transform {
        self.transform
    }

    /// World-space bounding box.
    #[must_use]
    pub const fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    /// World-space bounding circle (circle and alpha kinds only).
    #[must_use]
    pub fn bounding_circle(&self) -> Option<BoundingCircle> {
        match self.kind {
            ColliderKind::Box => None,
            ColliderKind::Circle | ColliderKind::Alpha => Some(self.circle),
        }
    }

    /// Bounding circle regardless of kind; the dispatcher only asks circle
    /// colliders for it.
    pub(crate) const fn circle_shape(&self) -> BoundingCircle {
        self.circle
    }

    /// The box a collider occupies for overlap purposes: the circumscribing
    /// box of the circle for circle colliders, the bounding box otherwise.
    #[must_use]
    pub fn effective_bounds(&self) -> BoundingBox {
        match self.kind {
            ColliderKind::Circle => self.circle.circumscribing_box(),
            ColliderKind::Box | ColliderKind::Alpha => self.bounding_box,
        }
    }

    /// Box left edge.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.bounding_box.x()
    }

    /// Box top edge.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.bounding_box.y()
    }

    /// Box width.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.bounding_box.width()
    }

    /// Box height.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.bounding_box.height()
    }

    /// Bounding circle radius.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.circle.radius()
    }

    /// World x scale.
    #[must_use]
    pub const fn scale_x(&self) -> f32 {
        self.transform.scale().x
    }

    /// World y scale.
    #[must_use]
    pub const fn scale_y(&self) -> f32 {
        self.transform.scale().y
    }

    /// The last recorded pixel-exact probe, if any.
    #[must_use]
    pub const fn last_probe(&self) -> Option<AlphaProbe> {
        self.last_probe
    }

    /// Collision point of the last recorded probe, if it hit.
    #[must_use]
    pub fn collision_point(&self) -> Option<PixelPoint> {
        self.last_probe.and_then(|p| p.point)
    }

    /// Local sub-rectangle sampled by the last recorded probe.
    #[must_use]
    pub fn alpha_test_bounds(&self) -> Option<BoundingBox> {
        self.last_probe.map(|p| p.bounds)
    }

    pub(crate) fn record_probe(&mut self, probe: Option<AlphaProbe>) {
        self.last_probe = probe;
    }
}

impl Edges for Collider {
    fn left(&self) -> f32 {
        self.bounding_box.left()
    }

    fn top(&self) -> f32 {
        self.bounding_box.top()
    }

    fn right(&self) -> f32 {
        self.bounding_box.right()
    }

    fn bottom(&self) -> f32 {
        self.bounding_box.bottom()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn inscribed_radius_uses_longest_side() {
        assert_eq!(BoundingCirclePolicy::Inscribed.radius(100.0, 50.0), 50.0);
        assert_eq!(BoundingCirclePolicy::Inscribed.radius(33.0, 10.0), 16.0);
    }

    #[test]
    fn circumscribed_radius_reaches_corners() {
        assert_eq!(BoundingCirclePolicy::Circumscribed.radius(30.0, 40.0), 25.0);
        assert_eq!(BoundingCirclePolicy::Circumscribed.radius(10.0, 10.0), 7.0);
    }
}
