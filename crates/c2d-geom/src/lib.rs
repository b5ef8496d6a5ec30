// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Geometry primitives for 2D collision testing.

This crate provides:
- Axis-aligned bounding boxes (`BoundingBox`) described by a top-left corner
  and extents.
- Bounding circles (`BoundingCircle`) described by a center and radius.
- Axis-aligned 2D transforms (`Transform`): translation plus independent x/y
  scale. Rotation is not modeled.
- Intersection math shared by every collision predicate (`math`).

Design notes:
- Screen coordinates: `x` grows right, `y` grows down; `top <= bottom`.
- Float32 throughout.
- Two overlap semantics coexist on purpose: `math::intersection` is strict
  (touching edges do not intersect) while the inclusive test used by the box
  predicate treats touching edges as overlapping.
"]

/// Intersection math shared by the collision predicates.
pub mod math;
/// Foundational geometric types.
pub mod types;

pub use math::{intersection, intersects, point_inside_circle};
pub use types::bounding_box::BoundingBox;
pub use types::bounding_circle::BoundingCircle;
pub use types::point::{Point, Vec2};
pub use types::transform::Transform;
pub use types::Edges;
