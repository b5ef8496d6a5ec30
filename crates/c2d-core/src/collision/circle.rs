// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use c2d_geom::{point_inside_circle, BoundingCircle};

use crate::collision::box_box::collided_box;

/// Returns `true` if two circles overlap.
///
/// The circumscribing boxes are compared first to reject distant pairs;
/// the answer is always decided by the strict distance test, so circles
/// whose centers are exactly `a.radius + b.radius` apart do not collide.
#[must_use]
pub fn collided_circle(a: &BoundingCircle, b: &BoundingCircle) -> bool {
    if !collided_box(a, b) {
        return false;
    }
    point_inside_circle(b.x(), b.y(), a.center(), a.radius() + b.radius())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tangent_circles_do_not_collide() {
        let a = BoundingCircle::new(64.0, 64.0, 64.0);
        let b = BoundingCircle::new(192.0, 64.0, 64.0);
        assert!(!collided_circle(&a, &b));
    }

    #[test]
    fn overlapping_circles_collide() {
        let a = BoundingCircle::new(64.0, 64.0, 64.0);
        let b = BoundingCircle::new(190.0, 64.0, 64.0);
        assert!(collided_circle(&a, &b));
        assert!(collided_circle(&b, &a));
    }

    #[test]
    fn diagonal_boxes_overlap_but_circles_miss() {
        // Circumscribing boxes overlap at the corner; the circles do not.
        let a = BoundingCircle::new(0.0, 0.0, 10.0);
        let b = BoundingCircle::new(15.0, 15.0, 10.0);
        assert!(collided_box(&a, &b));
        assert!(!collided_circle(&a, &b));
    }

    #[test]
    fn concentric_circles_collide() {
        let a = BoundingCircle::new(5.0, 5.0, 1.0);
        let b = BoundingCircle::new(5.0, 5.0, 50.0);
        assert!(collided_circle(&a, &b));
    }
}
