// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::types::bounding_box::BoundingBox;
use crate::types::point::Point;
use crate::types::Edges;

/// Returns the overlap rectangle of two shapes' axis-aligned extents.
///
/// The test is strict: the overlap must have positive area, so shapes that
/// only share an edge or a corner yield `None`. This is deliberately
/// narrower than the inclusive box predicate, which counts touching edges
/// as a collision.
///
/// Circles participate through their circumscribing box.
#[must_use]
pub fn intersection<A, B>(a: &A, b: &B) -> Option<BoundingBox>
where
    A: Edges + ?Sized,
    B: Edges + ?Sized,
{
    let left = a.left().max(b.left());
    let top = a.top().max(b.top());
    let right = a.right().min(b.right());
    let bottom = a.bottom().min(b.bottom());
    if right > left && bottom > top {
        return Some(BoundingBox::from_edges(left, top, right, bottom));
    }
    None
}

/// Returns `true` iff [`intersection`] would return a rectangle.
#[must_use]
pub fn intersects<A, B>(a: &A, b: &B) -> bool
where
    A: Edges + ?Sized,
    B: Edges + ?Sized,
{
    intersection(a, b).is_some()
}

/// Returns `true` iff `(x, y)` lies strictly inside the circle of `radius`
/// around `center`.
///
/// Compares squared distances, so no square root is taken. A point exactly
/// on the circumference is outside, and a zero radius contains nothing.
#[must_use]
pub fn point_inside_circle(x: f32, y: f32, center: Point, radius: f32) -> bool {
    let dist = center.distance_squared(&Point::new(x, y));
    dist.abs() < radius * radius
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::bounding_circle::BoundingCircle;

    #[test]
    fn overlapping_boxes_intersect() {
        let a = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
        let b = BoundingBox::new(50.0, 50.0, 100.0, 100.0);
        assert_eq!(
            intersection(&a, &b),
            Some(BoundingBox::new(50.0, 50.0, 50.0, 50.0))
        );
        assert!(intersects(&a, &b));
    }

    #[test]
    fn separated_boxes_do_not_intersect() {
        let a = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
        let b = BoundingBox::new(250.0, 50.0, 100.0, 100.0);
        assert_eq!(intersection(&a, &b), None);
        assert!(!intersects(&a, &b));
    }

    #[test]
    fn shared_edge_is_not_an_intersection() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(10.0, 0.0, 10.0, 10.0);
        assert_eq!(intersection(&a, &b), None);
    }

    #[test]
    fn contained_box_intersection_is_the_inner_box() {
        let outer = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
        let inner = BoundingBox::new(10.0, 20.0, 5.0, 5.0);
        assert_eq!(intersection(&outer, &inner), Some(inner));
    }

    #[test]
    fn circle_participates_through_its_box() {
        let c = BoundingCircle::new(10.0, 10.0, 10.0);
        let b = BoundingBox::new(15.0, 15.0, 10.0, 10.0);
        let overlap = intersection(&c, &b).unwrap();
        assert_eq!(overlap, BoundingBox::new(15.0, 15.0, 5.0, 5.0));
    }

    #[test]
    fn circumference_point_is_outside() {
        let center = Point::new(0.0, 0.0);
        assert!(!point_inside_circle(3.0, 4.0, center, 5.0));
        assert!(point_inside_circle(3.0, 3.9, center, 5.0));
    }

    #[test]
    fn zero_radius_contains_nothing() {
        let center = Point::new(1.0, 1.0);
        assert!(!point_inside_circle(1.0, 1.0, center, 0.0));
    }
}
