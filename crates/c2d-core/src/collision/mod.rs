// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Collision predicates and the dispatcher that picks among them.

use serde::{Deserialize, Serialize};

/// Pixel-exact predicate.
pub mod alpha;
/// Inclusive box-vs-box predicate.
pub mod box_box;
/// Circle-vs-box predicate via Voronoi regions.
pub mod box_circle;
/// Circle-vs-circle predicate.
pub mod circle;
/// Type-pair dispatch.
pub mod dispatch;

/// Pixel location inside the overlap region of a pixel-exact test.
///
/// `(0, 0)` is the top-left pixel of the overlap; coordinates are bounded by
/// the overlap's width and height in pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelPoint {
    /// Column.
    pub x: u32,
    /// Row.
    pub y: u32,
}

impl PixelPoint {
    /// Creates a point from column and row.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Outcome of a collision query.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collision {
    /// The shapes do not overlap.
    #[default]
    Miss,
    /// A geometric predicate found an overlap.
    Overlap,
    /// The pixel-exact predicate found opaque coverage in both shapes.
    Pixel(PixelPoint),
}

impl Collision {
    /// Returns `true` for any positive outcome.
    #[must_use]
    pub const fn is_hit(&self) -> bool {
        !matches!(self, Self::Miss)
    }

    /// Collision point, when the outcome came from a pixel-exact test.
    #[must_use]
    pub const fn point(&self) -> Option<PixelPoint> {
        match self {
            Self::Pixel(p) => Some(*p),
            Self::Miss | Self::Overlap => None,
        }
    }
}

impl From<bool> for Collision {
    fn from(hit: bool) -> Self {
        if hit {
            Self::Overlap
        } else {
            Self::Miss
        }
    }
}

impl From<Option<PixelPoint>> for Collision {
    fn from(point: Option<PixelPoint>) -> Self {
        point.map_or(Self::Miss, Self::Pixel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_and_point_accessors() {
        assert!(!Collision::Miss.is_hit());
        assert!(Collision::Overlap.is_hit());
        let p = PixelPoint::new(3, 4);
        assert!(Collision::Pixel(p).is_hit());
        assert_eq!(Collision::Pixel(p).point(), Some(p));
        assert_eq!(Collision::Overlap.point(), None);
        assert_eq!(Collision::from(false), Collision::Miss);
        assert_eq!(Collision::from(Some(p)), Collision::Pixel(p));
    }
}
