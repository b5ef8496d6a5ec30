// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use c2d_geom::{point_inside_circle, Point, Transform};

use crate::raster::surface::{byte_len, Rgba, Surface, BYTES_PER_PIXEL};

/// Immutable RGBA8 artwork that a renderable can stamp onto a [`Canvas`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Image {
    /// Wraps row-major RGBA bytes. Returns `None` when the length does not
    /// match `width * height * 4`.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        (byte_len(width, height) == Some(pixels.len())).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Builds an image by evaluating `f` at every pixel.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> Rgba,
    {
        let mut pixels = Vec::with_capacity(byte_len(width, height).unwrap_or_default());
        for y in 0..height {
            for x in 0..width {
                let c = f(x, y);
                pixels.extend_from_slice(&[c.r, c.g, c.b, c.a]);
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Reads one pixel; `None` outside the image.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let p = &self.pixels[i..i + BYTES_PER_PIXEL];
        Some(Rgba::new(p[0], p[1], p[2], p[3]))
    }
}

/// Drawing view over a [`Surface`] with a transform and global opacity.
///
/// Draw calls take local coordinates; the canvas maps them through its
/// transform and multiplies every color's alpha by its opacity. Writes are
/// confined to the top-left clip window, which defaults to the whole
/// surface.
#[derive(Debug)]
pub struct Canvas<'s> {
    surface: &'s mut Surface,
    transform: Transform,
    opacity: f32,
    clip_width: u32,
    clip_height: u32,
}

impl<'s> Canvas<'s> {
    /// Wraps `surface` with the given local-to-surface transform and opacity.
    pub fn new(surface: &'s mut Surface, transform: Transform, opacity: f32) -> Self {
        let (clip_width, clip_height) = (surface.width(), surface.height());
        Self {
            surface,
            transform,
            opacity,
            clip_width,
            clip_height,
        }
    }

    /// Restricts writes to the top-left `width` × `height` pixels.
    pub fn clipped(mut self, width: u32, height: u32) -> Self {
        self.clip_width = width.min(self.surface.width());
        self.clip_height = height.min(self.surface.height());
        self
    }

    /// Local-to-surface transform.
    #[must_use]
    pub const fn transform(&self) -> Transform {
        self.transform
    }

    /// Global opacity.
    #[must_use]
    pub const fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Fills the half-open rectangle `[x, x + width) × [y, y + height)`.
    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba) {
        let (right, bottom) = (x + width, y + height);
        self.cover(x, y, right, bottom, |lx, ly| {
            (lx >= x && lx < right && ly >= y && ly < bottom).then_some(color)
        });
    }

    /// Fills the disc of `radius` around `(cx, cy)`.
    pub fn fill_disc(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba) {
        let center = Point::new(cx, cy);
        self.cover(
            cx - radius,
            cy - radius,
            cx + radius,
            cy + radius,
            |lx, ly| point_inside_circle(lx, ly, center, radius).then_some(color),
        );
    }

    /// Stamps `image` with its top-left corner at `(x, y)`, one image pixel
    /// per local unit (nearest-neighbour under scale).
    pub fn draw_image(&mut self, x: f32, y: f32, image: &Image) {
        let right = x + image.width() as f32;
        let bottom = y + image.height() as f32;
        self.cover(x, y, right, bottom, |lx, ly| {
            let (ix, iy) = ((lx - x).floor(), (ly - y).floor());
            if ix < 0.0 || iy < 0.0 {
                return None;
            }
            image.pixel(ix as u32, iy as u32)
        });
    }

    /// Visits every surface pixel whose center maps inside the local
    /// rectangle `left..right` × `top..bottom` and blends whatever `shade`
    /// returns for that local point.
    fn cover<F>(&mut self, left: f32, top: f32, right: f32, bottom: f32, mut shade: F)
    where
        F: FnMut(f32, f32) -> Option<Rgba>,
    {
        let scale = self.transform.scale();
        if scale.x == 0.0 || scale.y == 0.0 || self.opacity <= 0.0 {
            return;
        }
        let a = self.transform.apply(Point::new(left, top));
        let b = self.transform.apply(Point::new(right, bottom));
        let px0 = a.x.min(b.x).floor().max(0.0) as u32;
        let py0 = a.y.min(b.y).floor().max(0.0) as u32;
        let px1 = (a.x.max(b.x).ceil() as u32).min(self.clip_width);
        let py1 = (a.y.max(b.y).ceil() as u32).min(self.clip_height);

        let t = self.transform.translation();
        for py in py0..py1 {
            let ly = (py as f32 + 0.5 - t.y) / scale.y;
            for px in px0..px1 {
                let lx = (px as f32 + 0.5 - t.x) / scale.x;
                if let Some(color) = shade(lx, ly) {
                    self.surface.blend(px, py, color, self.opacity);
                }
            }
        }
    }
}
