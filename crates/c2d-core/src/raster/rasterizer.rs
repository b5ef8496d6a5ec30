// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::sync::{Mutex, PoisonError};

use c2d_geom::{Point, Transform};

use crate::collider::Collider;
use crate::error::SampleError;
use crate::kind::ColliderKind;
use crate::raster::canvas::Canvas;
use crate::raster::surface::{Rgba, Surface};
use crate::settings::Settings;

/// Integer pixel rectangle in a collider's local space.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRegion {
    /// Left edge in pixels.
    pub x: i32,
    /// Top edge in pixels.
    pub y: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Owner of the scratch surface used to sample collider coverage.
///
/// One surface is reused across samples and access is serialized by a lock.
/// A sample only touches the top-left window of the requested size: the
/// window is cleared, the collider is drawn shifted so the region's origin
/// lands on surface `(0, 0)`, and the window is read back. The surface
/// therefore bounds the size of an overlap, not its position inside a
/// collider.
#[derive(Debug)]
pub struct Rasterizer {
    surface: Mutex<Surface>,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl Rasterizer {
    /// Creates a rasterizer with a `width` × `height` scratch surface.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            surface: Mutex::new(Surface::new(width, height)),
        }
    }

    /// Creates a rasterizer sized by `settings`.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.surface_width, settings.surface_height)
    }

    /// Scratch surface dimensions.
    #[must_use]
    pub fn surface_size(&self) -> (u32, u32) {
        let surface = self.surface.lock().unwrap_or_else(PoisonError::into_inner);
        (surface.width(), surface.height())
    }

    /// Renders `collider` by kind and returns the RGBA coverage of `region`
    /// (local to the collider's effective bounds).
    ///
    /// - Box: a filled rectangle the size of the bounding box.
    /// - Circle: a filled disc of the bounding radius centered at `(r, r)`.
    /// - Alpha: the renderable's own artwork under the collider's scale and
    ///   the renderable's opacity.
    ///
    /// Fails with [`SampleError::OutOfSurface`] when the region is larger
    /// than the scratch surface.
    pub fn sample(&self, collider: &Collider, region: PixelRegion) -> Result<Vec<u8>, SampleError> {
        let mut surface = self.surface.lock().unwrap_or_else(PoisonError::into_inner);
        if region.width == 0 || region.height == 0 {
            return Err(SampleError::EmptyRegion);
        }
        if region.width > surface.width() || region.height > surface.height() {
            return Err(SampleError::OutOfSurface {
                x: region.x,
                y: region.y,
                width: region.width,
                height: region.height,
                surface_width: surface.width(),
                surface_height: surface.height(),
            });
        }
        surface.clear_window(region.width, region.height);
        draw_collider(&mut surface, collider, region)?;
        surface.read_region(PixelRegion {
            x: 0,
            y: 0,
            ..region
        })
    }
}

fn draw_collider(
    surface: &mut Surface,
    collider: &Collider,
    region: PixelRegion,
) -> Result<(), SampleError> {
    let shift = Point::new(-(region.x as f32), -(region.y as f32));
    let shifted = Transform::from_translation(shift.x, shift.y);
    match collider.kind() {
        ColliderKind::Box => {
            let b = collider.bounding_box();
            window(surface, region, shifted, 1.0).fill_rect(
                0.0,
                0.0,
                b.width(),
                b.height(),
                Rgba::RED,
            );
            Ok(())
        }
        ColliderKind::Circle => {
            let r = collider.radius();
            window(surface, region, shifted, 1.0).fill_disc(r, r, r, Rgba::RED);
            Ok(())
        }
        ColliderKind::Alpha => {
            let world = collider.transform();
            let origin = collider.effective_bounds().origin();
            let t = world.translation();
            let local = Transform::new(
                Point::new(t.x - origin.x + shift.x, t.y - origin.y + shift.y),
                world.scale(),
            );
            let renderable = collider.renderable();
            renderable.draw(&mut window(surface, region, local, renderable.opacity()))
        }
    }
}

/// Canvas limited to the sampled window at the surface origin.
fn window(
    surface: &mut Surface,
    region: PixelRegion,
    transform: Transform,
    opacity: f32,
) -> Canvas<'_> {
    Canvas::new(surface, transform, opacity).clipped(region.width, region.height)
}
