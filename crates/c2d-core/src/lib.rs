// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Collision detection between the shapes of 2D renderables.
//!
//! A [`Collider`] pairs a [`ColliderKind`] with geometry derived from a
//! [`Renderable`]: an axis-aligned bounding box in world space and, for
//! circle and alpha kinds, a bounding circle. The [`Detector`] picks the
//! cheapest sufficient predicate for the pair of kinds:
//!
//! | a \ b  | Box          | Circle       | Alpha  |
//! |--------|--------------|--------------|--------|
//! | Box    | box          | rect/circle  | alpha  |
//! | Circle | circle/rect  | circle       | alpha  |
//! | Alpha  | alpha        | alpha        | alpha  |
//!
//! The alpha predicate is pixel-exact: it rasterizes both colliders into a
//! shared scratch [`Surface`](raster::Surface) owned by a
//! [`Rasterizer`] and scans the overlapping region for a pixel where both
//! are opaque enough.
//!
//! Everything here is synchronous. The only shared mutable resource is the
//! rasterizer's scratch surface, which sits behind a lock.

/// Colliders and the bounding-circle policy.
pub mod collider;
/// Collision predicates, results, and the type-pair dispatcher.
pub mod collision;
/// Error taxonomy.
pub mod error;
/// The closed set of collider kinds.
pub mod kind;
/// Software rasterization used by the pixel-exact predicate.
pub mod raster;
/// Port implemented by the display layer.
pub mod renderable;
/// Tunables and their storage port.
pub mod settings;

pub use collider::{BoundingCirclePolicy, Collider};
pub use collision::alpha::{collided_alpha, AlphaOutcome, AlphaProbe};
pub use collision::box_box::collided_box;
pub use collision::box_circle::{classify, collided_circle_rect, collided_rect_circle, Region};
pub use collision::circle::collided_circle;
pub use collision::dispatch::{predicate_for, Detector, Predicate};
pub use collision::{Collision, PixelPoint};
pub use error::{ColliderError, SampleError};
pub use kind::ColliderKind;
pub use raster::{Canvas, Image, PixelRegion, Rasterizer, Rgba, Surface};
pub use renderable::{Renderable, SharedRenderable};
pub use settings::{Settings, SettingsError, SettingsService, SettingsStore};

pub use c2d_geom as geom;
