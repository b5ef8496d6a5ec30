// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::error::SampleError;
use crate::raster::rasterizer::PixelRegion;

/// Bytes per RGBA pixel.
pub(crate) const BYTES_PER_PIXEL: usize = 4;
/// Byte offset of the alpha channel within a pixel.
pub(crate) const ALPHA_OFFSET: usize = 3;

/// RGBA color with 8-bit straight-alpha components.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Rgba {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha (0 = transparent, 255 = opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque red, the fill used for box and circle coverage.
    pub const RED: Self = Self::new(255, 0, 0, 255);

    /// Creates a color from components.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Byte length of a `width` × `height` RGBA8 buffer, `None` on overflow.
pub(crate) fn byte_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(BYTES_PER_PIXEL)
}

/// Owned RGBA8 pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Surface {
    /// Allocates a transparent surface.
    ///
    /// # Panics
    /// Panics if `width * height * 4` does not fit in `usize`.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let len = byte_len(width, height);
        assert!(
            len.is_some(),
            "invalid surface: {width} x {height} pixels overflow the address space"
        );
        Self {
            width,
            height,
            pixels: vec![0; len.unwrap_or_default()],
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

    /// Raw row-major RGBA bytes.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Resets every pixel to transparent.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Resets the top-left `width` × `height` window to transparent,
    /// clipped to the surface.
    pub fn clear_window(&mut self, width: u32, height: u32) {
        let row_bytes = width.min(self.width) as usize * BYTES_PER_PIXEL;
        let stride = self.width as usize * BYTES_PER_PIXEL;
        for row in 0..height.min(self.height) as usize {
            let start = row * stride;
            self.pixels[start..start + row_bytes].fill(0);
        }
    }

    /// Reads one pixel; `None` outside the surface.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let i = self.offset(x, y)?;
        let p = &self.pixels[i..i + BYTES_PER_PIXEL];
        Some(Rgba::new(p[0], p[1], p[2], p[3]))
    }

    /// Composites `color` over the pixel at `(x, y)` (source-over), with the
    /// color's alpha multiplied by `opacity`. Out-of-surface writes are
    /// dropped.
    pub fn blend(&mut self, x: u32, y: u32, color: Rgba, opacity: f32) {
        let Some(i) = self.offset(x, y) else {
            return;
        };
        let sa = f32::from(color.a) / 255.0 * opacity.clamp(0.0, 1.0);
        if sa <= 0.0 {
            return;
        }
        let dst = &mut self.pixels[i..i + BYTES_PER_PIXEL];
        let da = f32::from(dst[ALPHA_OFFSET]) / 255.0;
        let oa = sa + da * (1.0 - sa);
        for (channel, src) in dst.iter_mut().zip([color.r, color.g, color.b]) {
            let mixed = (f32::from(src) * sa + f32::from(*channel) * da * (1.0 - sa)) / oa;
            *channel = mixed.round().clamp(0.0, 255.0) as u8;
        }
        dst[ALPHA_OFFSET] = (oa * 255.0).round().clamp(0.0, 255.0) as u8;
    }

    /// Copies `region` out as a row-major RGBA buffer of exactly
    /// `width * height * 4` bytes.
    pub fn read_region(&self, region: PixelRegion) -> Result<Vec<u8>, SampleError> {
        if region.width == 0 || region.height == 0 {
            return Err(SampleError::EmptyRegion);
        }
        let out_of_surface = || SampleError::OutOfSurface {
            x: region.x,
            y: region.y,
            width: region.width,
            height: region.height,
            surface_width: self.width,
            surface_height: self.height,
        };
        let x0 = u32::try_from(region.x).map_err(|_| out_of_surface())?;
        let y0 = u32::try_from(region.y).map_err(|_| out_of_surface())?;
        let fits_x = x0.checked_add(region.width).is_some_and(|r| r <= self.width);
        let fits_y = y0.checked_add(region.height).is_some_and(|b| b <= self.height);
        if !(fits_x && fits_y) {
            return Err(out_of_surface());
        }

        let row_bytes = region.width as usize * BYTES_PER_PIXEL;
        let stride = self.width as usize * BYTES_PER_PIXEL;
        let mut out = Vec::with_capacity(row_bytes * region.height as usize);
        for row in y0..y0 + region.height {
            let start = row as usize * stride + x0 as usize * BYTES_PER_PIXEL;
            out.extend_from_slice(&self.pixels[start..start + row_bytes]);
        }
        Ok(out)
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn blend_opaque_over_transparent_is_source() {
        let mut s = Surface::new(2, 2);
        s.blend(1, 0, Rgba::RED, 1.0);
        assert_eq!(s.pixel(1, 0), Some(Rgba::RED));
        assert_eq!(s.pixel(0, 0), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn blend_applies_opacity() {
        let mut s = Surface::new(1, 1);
        s.blend(0, 0, Rgba::RED, 0.5);
        assert_eq!(s.pixel(0, 0).unwrap().a, 128);
    }

    #[test]
    fn translucent_layers_accumulate() {
        let mut s = Surface::new(1, 1);
        s.blend(0, 0, Rgba::RED, 0.5);
        s.blend(0, 0, Rgba::RED, 0.5);
        // Roughly 0.5 + 0.5 * 0.5 of full coverage.
        let a = s.pixel(0, 0).unwrap().a;
        assert!((190..=193).contains(&a), "alpha {a}");
    }

    #[test]
    fn clear_window_leaves_the_rest() {
        let mut s = Surface::new(4, 4);
        s.blend(0, 0, Rgba::RED, 1.0);
        s.blend(3, 0, Rgba::RED, 1.0);
        s.blend(1, 3, Rgba::RED, 1.0);
        s.clear_window(2, 8);
        assert_eq!(s.pixel(0, 0), Some(Rgba::TRANSPARENT));
        assert_eq!(s.pixel(1, 3), Some(Rgba::TRANSPARENT));
        assert_eq!(s.pixel(3, 0), Some(Rgba::RED));
    }

    #[test]
    fn byte_len_detects_overflow() {
        assert_eq!(byte_len(1024, 1024), Some(4 * 1024 * 1024));
        assert_eq!(byte_len(0, u32::MAX), Some(0));
        assert_eq!(byte_len(u32::MAX, u32::MAX), None);
    }

    #[test]
    #[should_panic(expected = "overflow the address space")]
    fn oversized_surface_is_rejected() {
        let _ = Surface::new(u32::MAX, u32::MAX);
    }

    #[test]
    fn read_region_is_row_major() {
        let mut s = Surface::new(4, 4);
        s.blend(2, 1, Rgba::RED, 1.0);
        let buf = s
            .read_region(PixelRegion {
                x: 1,
                y: 1,
                width: 2,
                height: 2,
            })
            .unwrap();
        assert_eq!(buf.len(), 16);
        // (2,1) is the second pixel of the first row.
        assert_eq!(buf[4 + ALPHA_OFFSET], 255);
        assert_eq!(buf.iter().filter(|b| **b == 255).count(), 2);
    }

    #[test]
    fn read_region_rejects_out_of_surface_and_empty() {
        let s = Surface::new(4, 4);
        let region = |x, y, width, height| PixelRegion {
            x,
            y,
            width,
            height,
        };
        assert!(matches!(
            s.read_region(region(3, 0, 2, 1)),
            Err(SampleError::OutOfSurface { .. })
        ));
        assert!(matches!(
            s.read_region(region(-1, 0, 1, 1)),
            Err(SampleError::OutOfSurface { .. })
        ));
        assert_eq!(s.read_region(region(0, 0, 0, 3)), Err(SampleError::EmptyRegion));
        assert!(s.read_region(region(0, 0, 4, 4)).is_ok());
    }
}
