// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use super::point::{Point, Vec2};

/// Axis-aligned 2D transform: non-uniform scale followed by translation.
///
/// Conventions:
/// - `translation` is the world position of the local origin.
/// - `scale` applies independently per axis, before translation.
/// - Rotation is intentionally absent; every derived shape stays
///   axis-aligned.
///
/// A negative scale mirrors the shape. Colliders normalize the resulting
/// box so that its extents stay non-negative.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    translation: Point,
    scale: Vec2,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Identity transform (no translation, unit scale).
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            translation: Point::ORIGIN,
            scale: Vec2::ONE,
        }
    }

    /// Creates a transform from components.
    #[must_use]
    pub const fn new(translation: Point, scale: Vec2) -> Self {
        Self { translation, scale }
    }

    /// Pure translation with unit scale.
    #[must_use]
    pub const fn from_translation(x: f32, y: f32) -> Self {
        Self::new(Point::new(x, y), Vec2::ONE)
    }

    /// Returns a copy with the scale replaced.
    #[must_use]
    pub const fn with_scale(self, sx: f32, sy: f32) -> Self {
        Self::new(self.translation, Vec2::new(sx, sy))
    }

    /// Translation component.
    #[must_use]
    pub const fn translation(&self) -> Point {
        self.translation
    }

    /// Scale component.
    #[must_use]
    pub const fn scale(&self) -> Vec2 {
        self.scale
    }

    /// Returns `true` if every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.translation.x.is_finite() && self.translation.y.is_finite() && self.scale.is_finite()
    }

    /// Maps a local-space point into the parent space.
    #[must_use]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            p.x * self.scale.x + self.translation.x,
            p.y * self.scale.y + self.translation.y,
        )
    }

    /// Composes `self ∘ inner`: the result applies `inner` first.
    ///
    /// Used to concatenate a child's local transform under its parent's.
    #[must_use]
    pub fn then(&self, inner: &Self) -> Self {
        Self {
            translation: self.apply(inner.translation),
            scale: Vec2::new(self.scale.x * inner.scale.x, self.scale.y * inner.scale.y),
        }
    }
}
