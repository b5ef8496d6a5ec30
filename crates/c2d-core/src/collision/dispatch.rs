// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::trace;

use crate::collider::Collider;
use crate::collision::alpha::{collided_alpha, AlphaOutcome};
use crate::collision::box_box::collided_box;
use crate::collision::box_circle::{collided_circle_rect, collided_rect_circle};
use crate::collision::circle::collided_circle;
use crate::collision::Collision;
use crate::kind::ColliderKind;
use crate::raster::Rasterizer;
use crate::settings::{Settings, SettingsError};

/// Predicate selected for an ordered pair of collider kinds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Predicate {
    /// [`collided_box`] on the bounding boxes.
    Box,
    /// [`collided_circle`] on the bounding circles.
    Circle,
    /// [`collided_circle_rect`]: first collider is the circle.
    CircleRect,
    /// [`collided_rect_circle`]: second collider is the circle.
    RectCircle,
    /// [`collided_alpha`]: pixel-exact.
    Alpha,
}

/// Looks up the predicate for `(a, b)`. Any pair involving an alpha
/// collider is pixel-exact.
#[must_use]
pub const fn predicate_for(a: ColliderKind, b: ColliderKind) -> Predicate {
    match (a, b) {
        (ColliderKind::Box, ColliderKind::Box) => Predicate::Box,
        (ColliderKind::Box, ColliderKind::Circle) => Predicate::RectCircle,
        (ColliderKind::Circle, ColliderKind::Box) => Predicate::CircleRect,
        (ColliderKind::Circle, ColliderKind::Circle) => Predicate::Circle,
        (ColliderKind::Alpha, _) | (_, ColliderKind::Alpha) => Predicate::Alpha,
    }
}

/// Entry point for collision queries.
///
/// Owns the scratch [`Rasterizer`] used by pixel-exact tests and the
/// coverage threshold on the byte scale of sampled buffers.
#[derive(Debug)]
pub struct Detector {
    rasterizer: Rasterizer,
    alpha_threshold: u8,
}

impl Default for Detector {
    fn default() -> Self {
        let settings = Settings::default();
        Self::with_rasterizer(
            Rasterizer::from_settings(&settings),
            settings.alpha_threshold_byte(),
        )
    }
}

impl Detector {
    /// Builds a detector from validated settings.
    pub fn new(settings: &Settings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self::with_rasterizer(
            Rasterizer::from_settings(settings),
            settings.alpha_threshold_byte(),
        ))
    }

    /// Builds a detector around an existing rasterizer.
    #[must_use]
    pub const fn with_rasterizer(rasterizer: Rasterizer, alpha_threshold: u8) -> Self {
        Self {
            rasterizer,
            alpha_threshold,
        }
    }

    /// The scratch rasterizer.
    #[must_use]
    pub const fn rasterizer(&self) -> &Rasterizer {
        &self.rasterizer
    }

    /// Coverage threshold (0–255).
    #[must_use]
    pub const fn alpha_threshold(&self) -> u8 {
        self.alpha_threshold
    }

    /// Tests `a` against `b` with the predicate for their kinds.
    ///
    /// A collider never collides with itself.
    pub fn collided(&self, a: &Collider, b: &Collider) -> Collision {
        self.evaluate(a, b).0
    }

    /// Like [`collided`](Self::collided), and records the pixel-exact probe
    /// on each collider.
    ///
    /// Both colliders' previous probes are cleared first, so after a
    /// non-alpha query `collision_point()` is `None` on both.
    pub fn collide_and_record(&self, a: &mut Collider, b: &mut Collider) -> Collision {
        a.record_probe(None);
        b.record_probe(None);
        let (collision, outcome) = self.evaluate(a, b);
        if let Some(outcome) = outcome {
            a.record_probe(outcome.probe_a);
            b.record_probe(outcome.probe_b);
        }
        collision
    }

    fn evaluate(&self, a: &Collider, b: &Collider) -> (Collision, Option<AlphaOutcome>) {
        if core::ptr::eq(a, b) {
            trace!(kind = %a.kind(), "self-collision ignored");
            return (Collision::Miss, None);
        }
        let predicate = predicate_for(a.kind(), b.kind());
        trace!(a = %a.kind(), b = %b.kind(), ?predicate, "dispatch");
        match predicate {
            Predicate::Box => (collided_box(a, b).into(), None),
            Predicate::Circle => (
                collided_circle(&a.circle_shape(), &b.circle_shape()).into(),
                None,
            ),
            Predicate::CircleRect => (collided_circle_rect(&a.circle_shape(), b).into(), None),
            Predicate::RectCircle => (collided_rect_circle(a, &b.circle_shape()).into(), None),
            Predicate::Alpha => {
                let outcome = collided_alpha(a, b, &self.rasterizer, self.alpha_threshold);
                (outcome.collision, Some(outcome))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_kind_pairs() {
        use ColliderKind::{Alpha, Box, Circle};
        let expected = [
            (Box, Box, Predicate::Box),
            (Box, Circle, Predicate::RectCircle),
            (Box, Alpha, Predicate::Alpha),
            (Circle, Box, Predicate::CircleRect),
            (Circle, Circle, Predicate::Circle),
            (Circle, Alpha, Predicate::Alpha),
            (Alpha, Box, Predicate::Alpha),
            (Alpha, Circle, Predicate::Alpha),
            (Alpha, Alpha, Predicate::Alpha),
        ];
        for (a, b, p) in expected {
            assert_eq!(predicate_for(a, b), p, "{a} vs {b}");
        }
    }

    #[test]
    fn default_detector_uses_default_threshold() {
        assert_eq!(Detector::default().alpha_threshold(), 77);
        assert_eq!(Detector::default().rasterizer().surface_size(), (1024, 1024));
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let settings = Settings {
            alpha_threshold: -0.1,
            ..Settings::default()
        };
        assert!(Detector::new(&settings).is_err());
    }
}
