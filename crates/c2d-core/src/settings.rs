// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Collision tunables and the storage port they are loaded through.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::collider::BoundingCirclePolicy;

/// Default normalized coverage threshold for the pixel-exact predicate.
pub const DEFAULT_ALPHA_THRESHOLD: f32 = 0.3;
/// Default scratch surface edge length in pixels.
pub const DEFAULT_SURFACE_EDGE: u32 = 1024;
/// Largest accepted scratch surface edge length in pixels (1 GiB at the cap).
pub const MAX_SURFACE_EDGE: u32 = 16_384;

/// Tunables for collider construction and pixel-exact testing.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// How a collider derives its bounding circle from its box.
    pub bounding_circle: BoundingCirclePolicy,
    /// Minimum normalized alpha (`0.0..=1.0`) for a pixel to count as covered.
    pub alpha_threshold: f32,
    /// Scratch surface width in pixels.
    pub surface_width: u32,
    /// Scratch surface height in pixels.
    pub surface_height: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bounding_circle: BoundingCirclePolicy::default(),
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
            surface_width: DEFAULT_SURFACE_EDGE,
            surface_height: DEFAULT_SURFACE_EDGE,
        }
    }
}

impl Settings {
    /// Checks ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(0.0..=1.0).contains(&self.alpha_threshold) {
            return Err(SettingsError::Invalid(format!(
                "alpha_threshold must be within 0..=1, got {}",
                self.alpha_threshold
            )));
        }
        if self.surface_width == 0 || self.surface_height == 0 {
            return Err(SettingsError::Invalid(format!(
                "surface must be non-empty, got {}x{}",
                self.surface_width, self.surface_height
            )));
        }
        if self.surface_width > MAX_SURFACE_EDGE || self.surface_height > MAX_SURFACE_EDGE {
            return Err(SettingsError::Invalid(format!(
                "surface edges must be at most {MAX_SURFACE_EDGE}, got {}x{}",
                self.surface_width, self.surface_height
            )));
        }
        Ok(())
    }

    /// The coverage threshold on the 0–255 scale of sampled RGBA bytes.
    #[must_use]
    pub fn alpha_threshold_byte(&self) -> u8 {
        (self.alpha_threshold.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

/// Storage port for raw settings blobs (keyed by logical name).
pub trait SettingsStore {
    /// Load a raw settings blob. Returns `NotFound` when missing.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, SettingsError>;
    /// Persist a raw settings blob.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), SettingsError>;
}

/// Error type for settings operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Key not present in store.
    #[error("not found")]
    NotFound,
    /// I/O error while reading/writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Values parsed but are out of range.
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Thin service that (de)serializes [`Settings`] as JSON and delegates
/// storage to a [`SettingsStore`].
pub struct SettingsService<S> {
    store: S,
}

impl<S> SettingsService<S> {
    /// Create a new service using the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Consume the service and return the inner store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S> SettingsService<S>
where
    S: SettingsStore,
{
    /// Load settings for `key`, falling back to defaults when the key is
    /// missing or empty. Loaded values are validated.
    pub fn load(&self, key: &str) -> Result<Settings, SettingsError> {
        let settings = match self.store.load_raw(key) {
            Ok(bytes) if bytes.is_empty() => Settings::default(),
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(SettingsError::NotFound) => Settings::default(),
            Err(e) => return Err(e),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Validate, serialize, and persist settings for `key`.
    pub fn save(&self, key: &str, settings: &Settings) -> Result<(), SettingsError> {
        settings.validate()?;
        let data = serde_json::to_vec_pretty(settings)?;
        self.store.save_raw(key, &data)
    }
}
