//! Shared numeric constants for the sky-map crate.

// ── View geometry ───────────────────────────────────────────────

/// Degrees of azimuth visible at once.
pub const AZ_RANGE_DEG: f64 = 180.0;

/// Degrees of altitude visible at once.
pub const ALT_RANGE_DEG: f64 = 120.0;

/// Lowest legal view-center altitude: window bottom at the nadir.
pub const ALT_CENTER_MIN_DEG: f64 = -90.0 + ALT_RANGE_DEG / 2.0;

/// Highest legal view-center altitude: window top at the zenith.
pub const ALT_CENTER_MAX_DEG: f64 = 90.0 - ALT_RANGE_DEG / 2.0;

/// Initial view-center azimuth: due south.
pub const DEFAULT_CENTER_AZ_DEG: f64 = 180.0;

/// Initial view-center altitude: as high as the clamp allows, so the
/// window top sits exactly at the zenith.
pub const DEFAULT_CENTER_ALT_DEG: f64 = ALT_CENTER_MAX_DEG;

// ── Frame layout ────────────────────────────────────────────────

/// Blank margin above and below the altitude window, in pixels.
pub const FRAME_MARGIN_PX: f64 = 30.0;

/// Left edge of altitude gridlines; keeps the degree labels clear.
pub const ALT_AXIS_GUTTER_PX: f64 = 40.0;

/// Right-aligned x position of altitude degree labels.
pub const ALT_AXIS_LABEL_X_PX: f64 = 35.0;

/// Altitude gridline spacing in degrees.
pub const ALT_GRID_STEP_DEG: i32 = 30;

/// Tick length below the horizon line at each azimuth label.
pub const AZ_TICK_LEN_PX: f64 = 10.0;

/// Distance of the azimuth labels from the bottom canvas edge.
pub const AZ_LABEL_BASELINE_PX: f64 = 10.0;

// ── Markers ─────────────────────────────────────────────────────

/// Radius of a celestial-object marker.
pub const MARKER_RADIUS_PX: f64 = 8.0;

/// Vertical offset of an object's name label above its marker.
pub const MARKER_LABEL_OFFSET_PX: f64 = 12.0;

/// Radius of the zenith/nadir ring markers.
pub const POLE_MARKER_RADIUS_PX: f64 = 10.0;

/// Zenith label offset above its ring.
pub const ZENITH_LABEL_OFFSET_PX: f64 = 10.0;

/// Nadir label offset below its ring.
pub const NADIR_LABEL_OFFSET_PX: f64 = 22.0;
