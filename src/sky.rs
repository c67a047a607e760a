//! Celestial object model: positions supplied by the host, the in-memory
//! list, and the marker palette.
//!
//! The host recomputes horizontal coordinates with its ephemeris library
//! and hands the result across as a full list; nothing here is ever
//! updated in place. Data arrives either as already-typed [`SkyObject`]
//! values or as a JSON payload from the wasm boundary.

#[cfg(test)]
#[path = "sky_test.rs"]
mod sky_test;

use serde::{Deserialize, Serialize};

/// Marker color for object names outside the fixed palette.
const DEFAULT_MARKER_COLOR: &str = "#FFD700";

/// Error returned by [`parse_positions`].
#[derive(Debug, thiserror::Error)]
pub enum PositionsError {
    /// The payload was not a JSON array of position records.
    #[error("failed to decode positions payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A celestial object's horizontal position, as computed by the host.
///
/// Produced fresh on every recomputation and immutable once constructed.
/// `azimuth` is degrees clockwise from due north in [0, 360); `altitude`
/// is degrees above the horizon in [-90, 90].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkyObject {
    /// Display name; also keys the marker palette.
    pub name: String,
    /// Compass bearing in degrees.
    pub azimuth: f64,
    /// Elevation above the horizon in degrees.
    pub altitude: f64,
}

impl SkyObject {
    #[must_use]
    pub fn new(name: impl Into<String>, azimuth: f64, altitude: f64) -> Self {
        Self { name: name.into(), azimuth, altitude }
    }
}

/// Marker fill color for an object, keyed by name.
///
/// Unrecognized names fall back to a gold default.
#[must_use]
pub fn marker_color(name: &str) -> &'static str {
    match name {
        "Mercury" => "#b0b0b0",
        "Venus" => "#e6e2af",
        "Mars" => "#c1440e",
        "Jupiter" => "#e3c07b",
        "Saturn" => "#f7e7b4",
        "Uranus" => "#7ad7f0",
        "Neptune" => "#4062bb",
        "Moon" => "#dddddd",
        _ => DEFAULT_MARKER_COLOR,
    }
}

/// Decode a JSON array of position records.
///
/// # Errors
///
/// Returns [`PositionsError::Decode`] when the payload is not valid JSON
/// or does not match the record shape.
pub fn parse_positions(payload: &str) -> Result<Vec<SkyObject>, PositionsError> {
    Ok(serde_json::from_str(payload)?)
}

/// The most recently supplied object list.
///
/// Replaced wholesale on every recomputation; iteration order is the
/// supplied order, which is also draw order.
pub struct SkyStore {
    objects: Vec<SkyObject>,
}

impl SkyStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { objects: Vec::new() }
    }

    /// Replace the full object list.
    pub fn load_positions(&mut self, objects: Vec<SkyObject>) {
        self.objects = objects;
    }

    /// The current object list in draw order.
    #[must_use]
    pub fn objects(&self) -> &[SkyObject] {
        &self.objects
    }

    /// Number of objects currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if no positions have been supplied yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for SkyStore {
    fn default() -> Self {
        Self::new()
    }
}
