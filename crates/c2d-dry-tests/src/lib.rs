// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles and fixtures for c2d crates.
#![forbid(unsafe_code)]
//!
//! # Modules
//!
//! - [`settings`] - In-memory settings store fake for testing without filesystem
//! - [`sprite`] - Scriptable [`Renderable`](c2d_core::Renderable) with fixed artwork

pub mod settings;
pub mod sprite;

pub use settings::InMemorySettingsStore;
pub use sprite::{shared_sprite, Coverage, FakeSprite};
