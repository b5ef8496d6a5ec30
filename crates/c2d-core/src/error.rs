// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Errors raised while building colliders or sampling their coverage.

use thiserror::Error;

/// A collider could not be built from its inputs.
///
/// Construction errors are precondition violations: the caller handed over
/// something that cannot describe a shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColliderError {
    /// The kind tag does not name a known collider kind.
    #[error("unknown collider kind: {0:?}")]
    UnknownKind(String),
    /// The renderable reported NaN or infinite geometry.
    #[error("renderable reported non-finite {what}")]
    NonFiniteGeometry {
        /// Which input was non-finite (`"bounds"`, `"transform"`, or the
        /// derived `"bounding box"`).
        what: &'static str,
    },
}

/// A coverage sample could not be produced.
///
/// The pixel-exact predicate treats every variant as "no collision": a
/// region that cannot be rendered cannot contain overlapping opaque pixels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    /// The requested region covers no pixels.
    #[error("sample region is empty")]
    EmptyRegion,
    /// The requested region extends past the scratch surface.
    #[error(
        "sample region {x},{y} {width}x{height} exceeds surface {surface_width}x{surface_height}"
    )]
    OutOfSurface {
        /// Region left edge.
        x: i32,
        /// Region top edge.
        y: i32,
        /// Region width in pixels.
        width: u32,
        /// Region height in pixels.
        height: u32,
        /// Surface width in pixels.
        surface_width: u32,
        /// Surface height in pixels.
        surface_height: u32,
    },
    /// The renderable failed to draw itself.
    #[error("render failed: {0}")]
    Render(String),
}
