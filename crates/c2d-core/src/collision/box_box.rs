// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use c2d_geom::Edges;

/// Returns `true` if the axis-aligned extents of `a` and `b` overlap.
///
/// Inclusive on edges: boxes that merely touch collide. This is wider than
/// [`c2d_geom::intersection`], which requires a positive-area overlap.
#[must_use]
pub fn collided_box<A, B>(a: &A, b: &B) -> bool
where
    A: Edges + ?Sized,
    B: Edges + ?Sized,
{
    !(a.bottom() < b.top() || a.top() > b.bottom() || a.left() > b.right() || a.right() < b.left())
}

#[cfg(test)]
mod tests {
    use super::*;
    use c2d_geom::{intersection, BoundingBox};

    #[test]
    fn overlapping_boxes_collide() {
        let a = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
        let b = BoundingBox::new(50.0, 50.0, 100.0, 100.0);
        assert!(collided_box(&a, &b));
    }

    #[test]
    fn separated_boxes_miss() {
        let a = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
        let b = BoundingBox::new(250.0, 50.0, 100.0, 100.0);
        assert!(!collided_box(&a, &b));
    }

    #[test]
    fn touching_edges_collide_but_do_not_intersect() {
        let a = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
        let b = BoundingBox::new(100.0, 0.0, 100.0, 100.0);
        assert!(collided_box(&a, &b));
        assert_eq!(intersection(&a, &b), None);
    }

    #[test]
    fn zero_area_box_on_edge_collides() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let point = BoundingBox::new(10.0, 10.0, 0.0, 0.0);
        assert!(collided_box(&a, &point));
        assert!(collided_box(&point, &a));
    }
}
