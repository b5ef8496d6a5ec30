// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use super::bounding_box::BoundingBox;
use super::point::Point;
use super::Edges;

/// Circle described by its center and radius.
///
/// Invariant: `radius >= 0`. A zero radius is legal and degenerates to a
/// point: it never satisfies the strict point-in-circle test but still
/// satisfies inclusive box overlap tests.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingCircle {
    x: f32,
    y: f32,
    radius: f32,
}

impl BoundingCircle {
    /// Constructs a circle centered at `(x, y)`.
    ///
    /// # Panics
    /// Panics if `radius` is negative or NaN.
    #[must_use]
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        assert!(radius >= 0.0, "invalid bounding circle: negative radius ({radius})");
        Self { x, y, radius }
    }

    /// Center x coordinate.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Center y coordinate.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// Radius.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Center point.
    #[must_use]
    pub const fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The smallest axis-aligned box containing the circle.
    #[must_use]
    pub fn circumscribing_box(&self) -> BoundingBox {
        BoundingBox::enclosing(self)
    }
}

impl Edges for BoundingCircle {
    fn left(&self) -> f32 {
        self.x - self.radius
    }

    fn top(&self) -> f32 {
        self.y - self.radius
    }

    fn right(&self) -> f32 {
        self.x + self.radius
    }

    fn bottom(&self) -> f32 {
        self.y + self.radius
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn edges_extend_radius_from_center() {
        let c = BoundingCircle::new(64.0, 32.0, 16.0);
        assert_eq!(c.left(), 48.0);
        assert_eq!(c.top(), 16.0);
        assert_eq!(c.right(), 80.0);
        assert_eq!(c.bottom(), 48.0);
        assert_eq!(
            c.circumscribing_box(),
            BoundingBox::new(48.0, 16.0, 32.0, 32.0)
        );
    }

    #[test]
    fn zero_radius_box_is_a_point() {
        let c = BoundingCircle::new(5.0, 7.0, 0.0);
        let b = c.circumscribing_box();
        assert_eq!(b.origin(), Point::new(5.0, 7.0));
        assert!(b.is_empty());
    }
}
