// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core geometry types (bounding box, bounding circle, points, transform).
//!
//! Every shape exposes its axis-aligned extent through [`Edges`], so the
//! intersection math can compare a box against a circle's circumscribing box
//! without materializing it first.

#[doc = "Axis-aligned bounding boxes (top-left corner + extents)."]
pub mod bounding_box;
#[doc = "Bounding circles (center + radius)."]
pub mod bounding_circle;
#[doc = "Points and 2D vectors."]
pub mod point;
#[doc = "Translation + non-uniform scale transforms."]
pub mod transform;

/// Axis-aligned extent of a shape.
///
/// For a box these are its sides; for a circle they are the sides of the
/// circumscribing box.
pub trait Edges {
    /// Smallest x coordinate covered by the shape.
    fn left(&self) -> f32;
    /// Smallest y coordinate covered by the shape.
    fn top(&self) -> f32;
    /// Largest x coordinate covered by the shape.
    fn right(&self) -> f32;
    /// Largest y coordinate covered by the shape.
    fn bottom(&self) -> f32;
}
