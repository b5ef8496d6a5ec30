// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use c2d_geom::{intersection, BoundingBox};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::collider::Collider;
use crate::collision::box_box::collided_box;
use crate::collision::{Collision, PixelPoint};
use crate::raster::{PixelRegion, Rasterizer, ALPHA_OFFSET, BYTES_PER_PIXEL};

/// What one collider contributed to a pixel-exact test.
///
/// Serializable so a failing query can be logged and replayed.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlphaProbe {
    /// Overlap rectangle in the collider's local space: the sub-rectangle
    /// that was sampled.
    pub bounds: BoundingBox,
    /// First pixel where both colliders were covered, if any.
    pub point: Option<PixelPoint>,
}

/// Result of [`collided_alpha`].
///
/// Probes are `None` when the shapes' boxes do not overlap and nothing was
/// sampled.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AlphaOutcome {
    /// `Pixel` on a hit, `Miss` otherwise.
    pub collision: Collision,
    /// Probe for the first collider.
    pub probe_a: Option<AlphaProbe>,
    /// Probe for the second collider.
    pub probe_b: Option<AlphaProbe>,
}

impl AlphaOutcome {
    const MISS: Self = Self {
        collision: Collision::Miss,
        probe_a: None,
        probe_b: None,
    };
}

/// Pixel-exact overlap test.
///
/// 1. Intersects the colliders' effective boxes (a circle collider
///    contributes its circumscribing box); no overlap is a miss.
/// 2. Expresses the overlap in each collider's local space and samples
///    each collider's rendered coverage over it.
/// 3. Scans both buffers pixel by pixel; the first pixel whose alpha is at
///    least `threshold` in both is the hit, reported as a position inside
///    the overlap.
///
/// A sample that cannot be produced is logged and treated as a miss.
#[instrument(skip_all, fields(a = %a.kind(), b = %b.kind()))]
pub fn collided_alpha(
    a: &Collider,
    b: &Collider,
    rasterizer: &Rasterizer,
    threshold: u8,
) -> AlphaOutcome {
    let Some(overlap) = overlap_of(a, b) else {
        return AlphaOutcome::MISS;
    };

    let bounds_a = overlap.relative_to(a.effective_bounds().origin());
    let bounds_b = overlap.relative_to(b.effective_bounds().origin());
    let width = overlap.width().ceil() as u32;
    let height = overlap.height().ceil() as u32;
    let region = |local: &BoundingBox| PixelRegion {
        x: local.x().floor() as i32,
        y: local.y().floor() as i32,
        width,
        height,
    };

    let samples = rasterizer.sample(a, region(&bounds_a)).and_then(|pixels_a| {
        let pixels_b = rasterizer.sample(b, region(&bounds_b))?;
        Ok((pixels_a, pixels_b))
    });
    let point = match samples {
        Ok((pixels_a, pixels_b)) => first_covered_pixel(&pixels_a, &pixels_b, width, threshold),
        Err(err) => {
            debug!(error = %err, "coverage sample unavailable; treating as miss");
            None
        }
    };
    if let Some(p) = point {
        debug!(x = p.x, y = p.y, "pixel-exact hit");
    }

    AlphaOutcome {
        collision: point.into(),
        probe_a: Some(AlphaProbe {
            bounds: bounds_a,
            point,
        }),
        probe_b: Some(AlphaProbe {
            bounds: bounds_b,
            point,
        }),
    }
}

fn overlap_of(a: &Collider, b: &Collider) -> Option<BoundingBox> {
    let (box_a, box_b) = (a.effective_bounds(), b.effective_bounds());
    if !collided_box(&box_a, &box_b) {
        return None;
    }
    intersection(&box_a, &box_b)
}

/// Scans two equally sized RGBA buffers in lock-step and decodes the first
/// pixel covered in both into a column/row within a `width`-pixel-wide
/// region.
pub(crate) fn first_covered_pixel(
    a: &[u8],
    b: &[u8],
    width: u32,
    threshold: u8,
) -> Option<PixelPoint> {
    if width == 0 {
        return None;
    }
    let index = a
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(b.chunks_exact(BYTES_PER_PIXEL))
        .position(|(pa, pb)| pa[ALPHA_OFFSET] >= threshold && pb[ALPHA_OFFSET] >= threshold)?;
    let index = u32::try_from(index).ok()?;
    Some(PixelPoint::new(index % width, index / width))
}
