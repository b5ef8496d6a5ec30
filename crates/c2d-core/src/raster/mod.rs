// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Software rasterization for pixel-exact collision tests.
//!
//! Coverage is decided at pixel centers: pixel `(px, py)` is covered by a
//! shape when `(px + 0.5, py + 0.5)`, mapped back into the shape's local
//! space, lies inside it. Buffers are row-major RGBA8 with straight alpha.

mod canvas;
mod rasterizer;
mod surface;

pub use canvas::{Canvas, Image};
pub use rasterizer::{PixelRegion, Rasterizer};
pub use surface::{Rgba, Surface};

pub(crate) use surface::{ALPHA_OFFSET, BYTES_PER_PIXEL};
