// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use c2d_geom::{point_inside_circle, BoundingCircle, Edges, Point};

use crate::collision::box_box::collided_box;

/// Voronoi region of a rectangle that contains a circle's center.
///
/// Centers inside the rectangle's vertical span are split only into left
/// and right; an interior center classifies as [`Region::RightCenter`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Region {
    /// Above and left of the rectangle.
    TopLeft,
    /// Above the rectangle, within its horizontal span.
    TopCenter,
    /// Above and right of the rectangle.
    TopRight,
    /// Within the vertical span, left of the rectangle.
    LeftCenter,
    /// Within the vertical span, not left of the rectangle.
    RightCenter,
    /// Below and left of the rectangle.
    BottomLeft,
    /// Below the rectangle, within its horizontal span.
    BottomCenter,
    /// Below and right of the rectangle.
    BottomRight,
}

impl Region {
    /// The rectangle vertex nearest to this region, for corner regions.
    #[must_use]
    pub fn corner<R: Edges + ?Sized>(self, rect: &R) -> Option<Point> {
        match self {
            Self::TopLeft => Some(Point::new(rect.left(), rect.top())),
            Self::TopRight => Some(Point::new(rect.right(), rect.top())),
            Self::BottomLeft => Some(Point::new(rect.left(), rect.bottom())),
            Self::BottomRight => Some(Point::new(rect.right(), rect.bottom())),
            Self::TopCenter | Self::BottomCenter | Self::LeftCenter | Self::RightCenter => None,
        }
    }
}

/// Classifies the circle's center against `rect`.
///
/// Vertical position is decided first; every comparison uses the center,
/// not the circle's edges.
#[must_use]
pub fn classify<R: Edges + ?Sized>(circle: &BoundingCircle, rect: &R) -> Region {
    let (x, y) = (circle.x(), circle.y());
    if y < rect.top() {
        if x < rect.left() {
            Region::TopLeft
        } else if x > rect.right() {
            Region::TopRight
        } else {
            Region::TopCenter
        }
    } else if y > rect.bottom() {
        if x < rect.left() {
            Region::BottomLeft
        } else if x > rect.right() {
            Region::BottomRight
        } else {
            Region::BottomCenter
        }
    } else if x < rect.left() {
        Region::LeftCenter
    } else {
        Region::RightCenter
    }
}

/// Returns `true` if `circle` overlaps `rect`.
///
/// Edge regions reduce to the inclusive box test between the circle's
/// circumscribing box and the rectangle. Corner regions test whether the
/// nearest rectangle vertex lies strictly inside the circle.
#[must_use]
pub fn collided_circle_rect<R: Edges + ?Sized>(circle: &BoundingCircle, rect: &R) -> bool {
    match classify(circle, rect).corner(rect) {
        None => collided_box(circle, rect),
        Some(vertex) => point_inside_circle(vertex.x, vertex.y, circle.center(), circle.radius()),
    }
}

/// [`collided_circle_rect`] with the arguments reversed.
#[must_use]
pub fn collided_rect_circle<R: Edges + ?Sized>(rect: &R, circle: &BoundingCircle) -> bool {
    collided_circle_rect(circle, rect)
}
