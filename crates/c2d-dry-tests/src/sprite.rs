// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scriptable renderable for collider tests.

use std::sync::{Arc, Mutex};

use c2d_core::{Canvas, Image, Renderable, Rgba, SampleError, SharedRenderable};
use c2d_geom::{BoundingBox, Point, Transform};

/// What a [`FakeSprite`] paints when asked to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Coverage {
    /// Fills the local bounds with one color.
    Solid(Rgba),
    /// Paints nothing.
    Transparent,
    /// Fills the largest disc centered in the local bounds.
    Disc(Rgba),
    /// Stamps an image at the local bounds' origin.
    Image(Image),
    /// Fails to draw with the given message.
    Fail(String),
}

#[derive(Debug)]
struct SpriteState {
    bounds: BoundingBox,
    transform: Transform,
    opacity: f32,
}

/// In-memory [`Renderable`] with fixed bounds and artwork.
///
/// Bounds, transform, and opacity sit behind a lock so tests can move a
/// sprite after a collider has been built and then call
/// [`Collider::update`](c2d_core::Collider::update).
///
/// # Example
///
/// ```
/// use c2d_core::Collider;
/// use c2d_dry_tests::FakeSprite;
///
/// let sprite = FakeSprite::solid(10.0, 10.0).at(5.0, 5.0).shared();
/// let collider = Collider::boxed(sprite).unwrap();
/// assert_eq!(collider.x(), 5.0);
/// ```
#[derive(Debug)]
pub struct FakeSprite {
    state: Mutex<SpriteState>,
    coverage: Coverage,
}

impl FakeSprite {
    /// Sprite with local bounds `(0, 0, width, height)` painting `coverage`.
    pub fn new(width: f32, height: f32, coverage: Coverage) -> Self {
        Self {
            state: Mutex::new(SpriteState {
                bounds: BoundingBox::new(0.0, 0.0, width, height),
                transform: Transform::identity(),
                opacity: 1.0,
            }),
            coverage,
        }
    }

    /// Opaque red rectangle.
    pub fn solid(width: f32, height: f32) -> Self {
        Self::new(width, height, Coverage::Solid(Rgba::RED))
    }

    /// Fully transparent artwork.
    pub fn transparent(width: f32, height: f32) -> Self {
        Self::new(width, height, Coverage::Transparent)
    }

    /// Opaque red disc inscribed in a `diameter` square.
    pub fn disc(diameter: f32) -> Self {
        Self::new(diameter, diameter, Coverage::Disc(Rgba::RED))
    }

    /// Artwork taken from `image`; bounds match the image size.
    pub fn image(image: Image) -> Self {
        let (w, h) = (image.width() as f32, image.height() as f32);
        Self::new(w, h, Coverage::Image(image))
    }

    /// Sprite whose `draw` always fails.
    pub fn failing(width: f32, height: f32) -> Self {
        Self::new(width, height, Coverage::Fail("simulated draw failure".into()))
    }

    /// Builder: translate to `(x, y)`.
    #[must_use]
    pub fn at(self, x: f32, y: f32) -> Self {
        self.set_translation(x, y);
        self
    }

    /// Builder: scale by `(sx, sy)`.
    #[must_use]
    pub fn scaled(self, sx: f32, sy: f32) -> Self {
        self.set_scale(sx, sy);
        self
    }

    /// Builder: offset local bounds to `(x, y)`.
    #[must_use]
    pub fn with_local_origin(self, x: f32, y: f32) -> Self {
        {
            let mut state = self.lock();
            let b = state.bounds;
            state.bounds = BoundingBox::new(x, y, b.width(), b.height());
        }
        self
    }

    /// Builder: set opacity.
    #[must_use]
    pub fn with_opacity(self, opacity: f32) -> Self {
        self.lock().opacity = opacity;
        self
    }

    /// Wraps the sprite in a shared handle.
    pub fn shared(self) -> SharedRenderable {
        Arc::new(self)
    }

    /// Moves the sprite.
    pub fn set_translation(&self, x: f32, y: f32) {
        let mut state = self.lock();
        state.transform = Transform::new(Point::new(x, y), state.transform.scale());
    }

    /// Rescales the sprite.
    pub fn set_scale(&self, sx: f32, sy: f32) {
        let mut state = self.lock();
        state.transform = state.transform.with_scale(sx, sy);
    }

    /// Replaces the local bounds, including non-finite values.
    pub fn set_bounds(&self, bounds: BoundingBox) {
        self.lock().bounds = bounds;
    }

    /// Replaces the world transform.
    pub fn set_transform(&self, transform: Transform) {
        self.lock().transform = transform;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SpriteState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Renderable for FakeSprite {
    fn local_bounds(&self) -> BoundingBox {
        self.lock().bounds
    }

    fn world_transform(&self) -> Transform {
        self.lock().transform
    }

    fn opacity(&self) -> f32 {
        self.lock().opacity
    }

    fn draw(&self, canvas: &mut Canvas<'_>) -> Result<(), SampleError> {
        let b = self.local_bounds();
        match &self.coverage {
            Coverage::Solid(color) => canvas.fill_rect(b.x(), b.y(), b.width(), b.height(), *color),
            Coverage::Transparent => {}
            Coverage::Disc(color) => {
                let c = b.center();
                canvas.fill_disc(c.x, c.y, b.width().min(b.height()) * 0.5, *color);
            }
            Coverage::Image(image) => canvas.draw_image(b.x(), b.y(), image),
            Coverage::Fail(message) => return Err(SampleError::Render(message.clone())),
        }
        Ok(())
    }
}

/// Shared handle to a [`FakeSprite`], keeping concrete access for mutation.
pub fn shared_sprite(sprite: FakeSprite) -> (Arc<FakeSprite>, SharedRenderable) {
    let concrete = Arc::new(sprite);
    let dynamic: SharedRenderable = concrete.clone();
    (concrete, dynamic)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use c2d_geom::Vec2;

    #[test]
    fn builder_sets_transform() {
        let sprite = FakeSprite::solid(4.0, 6.0).at(1.0, 2.0).scaled(2.0, 3.0);
        let t = sprite.world_transform();
        assert_eq!(t.translation(), Point::new(1.0, 2.0));
        assert_eq!(t.scale(), Vec2::new(2.0, 3.0));
        assert_eq!(sprite.local_bounds(), BoundingBox::new(0.0, 0.0, 4.0, 6.0));
    }

    #[test]
    fn mutation_is_visible_through_shared_handle() {
        let (concrete, dynamic) = shared_sprite(FakeSprite::solid(1.0, 1.0));
        concrete.set_translation(9.0, 8.0);
        assert_eq!(dynamic.world_transform().translation(), Point::new(9.0, 8.0));
    }

    #[test]
    fn opacity_defaults_to_one() {
        assert_eq!(FakeSprite::transparent(1.0, 1.0).opacity(), 1.0);
        assert_eq!(FakeSprite::solid(1.0, 1.0).with_opacity(0.2).opacity(), 0.2);
    }
}
