// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Port trait for the display layer that owns the shapes being tested.

use std::sync::Arc;

use c2d_geom::{BoundingBox, Transform};

use crate::error::SampleError;
use crate::raster::{Canvas, Rgba};

/// Display-side object a collider describes.
///
/// The collider never owns the object; it reads bounds and transform on
/// [`Collider::update`](crate::Collider::update) and asks the object to draw
/// itself only when a pixel-exact test needs its coverage.
pub trait Renderable: Send + Sync {
    /// Untransformed bounds of the artwork in its own coordinate space.
    fn local_bounds(&self) -> BoundingBox;

    /// Concatenated transform from local space into world space.
    fn world_transform(&self) -> Transform;

    /// Opacity in `0.0..=1.0` applied when the artwork is rasterized.
    fn opacity(&self) -> f32 {
        1.0
    }

    /// Draws the artwork in local coordinates.
    ///
    /// The canvas already carries the world scale and the opacity; the
    /// implementation only issues local-space draw calls. The default draws
    /// the local bounds as a solid rectangle.
    fn draw(&self, canvas: &mut Canvas<'_>) -> Result<(), SampleError> {
        let b = self.local_bounds();
        canvas.fill_rect(b.x(), b.y(), b.width(), b.height(), Rgba::RED);
        Ok(())
    }
}

/// Shared handle to a renderable.
pub type SharedRenderable = Arc<dyn Renderable>;
