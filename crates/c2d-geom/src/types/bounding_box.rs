// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use super::point::Point;
use super::Edges;

/// Axis-aligned rectangle described by its top-left corner and extents.
///
/// Invariants:
/// - `width >= 0` and `height >= 0`.
/// - Derived edges: `left = x`, `top = y`, `right = x + width`,
///   `bottom = y + height`.
///
/// Boxes are immutable values; colliders rebuild theirs whenever the
/// underlying renderable's transform changes.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl BoundingBox {
    /// Constructs a box from its top-left corner and extents.
    ///
    /// # Panics
    /// Panics if `width` or `height` is negative or NaN.
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        assert!(
            width >= 0.0 && height >= 0.0,
            "invalid bounding box: negative extent ({width} x {height})"
        );
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds the box spanning `left..right` × `top..bottom`.
    ///
    /// # Panics
    /// Panics if `right < left` or `bottom < top`.
    #[must_use]
    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Builds the box covering another shape's axis-aligned extent.
    ///
    /// For a circle this is its circumscribing box.
    #[must_use]
    pub fn enclosing<E: Edges + ?Sized>(shape: &E) -> Self {
        Self::from_edges(shape.left(), shape.top(), shape.right(), shape.bottom())
    }

    /// Top-left x coordinate.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Top-left y coordinate.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// Horizontal extent.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Vertical extent.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Top-left corner.
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Geometric center.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Returns `true` when the box covers no area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Re-expresses this box in a frame whose origin sits at `origin`.
    #[must_use]
    pub fn relative_to(&self, origin: Point) -> Self {
        Self {
            x: self.x - origin.x,
            y: self.y - origin.y,
            width: self.width,
            height: self.height,
        }
    }
}

impl Edges for BoundingBox {
    fn left(&self) -> f32 {
        self.x
    }

    fn top(&self) -> f32 {
        self.y
    }

    fn right(&self) -> f32 {
        self.x + self.width
    }

    fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn edges_derive_from_corner_and_extent() {
        let b = BoundingBox::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(b.left(), 10.0);
        assert_eq!(b.top(), 20.0);
        assert_eq!(b.right(), 40.0);
        assert_eq!(b.bottom(), 60.0);
        assert_eq!(b.center(), Point::new(25.0, 40.0));
    }

    #[test]
    fn relative_to_keeps_extent() {
        let b = BoundingBox::new(50.0, 60.0, 5.0, 6.0);
        let local = b.relative_to(Point::new(40.0, 40.0));
        assert_eq!(local, BoundingBox::new(10.0, 20.0, 5.0, 6.0));
    }

    #[test]
    fn zero_area_box_is_empty() {
        assert!(BoundingBox::new(1.0, 1.0, 0.0, 5.0).is_empty());
        assert!(!BoundingBox::new(1.0, 1.0, 1.0, 5.0).is_empty());
    }

    #[test]
    #[should_panic(expected = "negative extent")]
    fn negative_width_panics() {
        let _ = BoundingBox::new(0.0, 0.0, -1.0, 1.0);
    }
}
