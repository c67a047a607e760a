//! Pannable view center and sky-to-screen projection.
//!
//! [`Camera`] owns the two-axis view center: a compass azimuth that wraps
//! modulo 360 and a horizon altitude that is clamped so the visible window
//! never reaches past the zenith or nadir. [`ViewWindow`] is the slice of
//! sky derived from the camera each frame and carries the pure projection
//! math from sky coordinates to canvas pixels, including the hard
//! visibility cutoff.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{
    ALT_CENTER_MAX_DEG, ALT_CENTER_MIN_DEG, ALT_RANGE_DEG, AZ_RANGE_DEG, DEFAULT_CENTER_ALT_DEG,
    DEFAULT_CENTER_AZ_DEG, FRAME_MARGIN_PX,
};

/// A point in screen space (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// View center for the pannable sky projection.
///
/// `center_az` is a compass bearing in degrees, kept in [0, 360) by
/// modular wrapping (azimuth is cyclic, so it is never clamped).
/// `center_alt` is degrees above the horizon, kept inside
/// [`ALT_CENTER_MIN_DEG`, `ALT_CENTER_MAX_DEG`]. The fields are private
/// so every write path goes through the wrap and clamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    center_az: f64,
    center_alt: f64,
}

impl Default for Camera {
    /// Looking due south, window top at the zenith.
    fn default() -> Self {
        Self::new(DEFAULT_CENTER_AZ_DEG, DEFAULT_CENTER_ALT_DEG)
    }
}

impl Camera {
    /// Create a camera, wrapping the azimuth and clamping the altitude.
    #[must_use]
    pub fn new(center_az: f64, center_alt: f64) -> Self {
        Self {
            center_az: wrap_azimuth(center_az),
            center_alt: clamp_center_altitude(center_alt),
        }
    }

    /// View-center azimuth in degrees, always in [0, 360).
    #[must_use]
    pub fn center_az(&self) -> f64 {
        self.center_az
    }

    /// View-center altitude in degrees, always inside the clamp band.
    #[must_use]
    pub fn center_alt(&self) -> f64 {
        self.center_alt
    }

    /// The slice of sky visible through this camera.
    #[must_use]
    pub fn view_window(&self) -> ViewWindow {
        ViewWindow {
            az_min: self.center_az - AZ_RANGE_DEG / 2.0,
            alt_min: self.center_alt - ALT_RANGE_DEG / 2.0,
            alt_max: self.center_alt + ALT_RANGE_DEG / 2.0,
        }
    }

    /// Project a sky position to canvas pixels; `None` when culled.
    #[must_use]
    pub fn sky_to_screen(&self, azimuth: f64, altitude: f64, width: f64, height: f64) -> Option<Point> {
        self.view_window().sky_to_screen(azimuth, altitude, width, height)
    }

    /// Pan relative to a drag-start baseline.
    ///
    /// Pixel deltas convert to degrees with the `AZ_RANGE/width` and
    /// `ALT_RANGE/height` scale factors and apply to `start`, not to the
    /// current center, so a long gesture cannot accumulate drift.
    /// Dragging right moves the view west (azimuth decreases); dragging
    /// down raises it. A non-positive canvas dimension makes the pan a
    /// no-op.
    #[must_use]
    pub fn panned_from(start: Camera, dx_px: f64, dy_px: f64, width: f64, height: f64) -> Camera {
        if width <= 0.0 || height <= 0.0 {
            return start;
        }
        Camera::new(
            start.center_az - dx_px * (AZ_RANGE_DEG / width),
            start.center_alt + dy_px * (ALT_RANGE_DEG / height),
        )
    }
}

/// Wrap an azimuth into [0, 360).
#[must_use]
pub fn wrap_azimuth(azimuth: f64) -> f64 {
    azimuth.rem_euclid(360.0)
}

/// Clamp a view-center altitude so the window stays inside ±90°.
#[must_use]
pub fn clamp_center_altitude(altitude: f64) -> f64 {
    altitude.clamp(ALT_CENTER_MIN_DEG, ALT_CENTER_MAX_DEG)
}

/// The visible slice of sky: an azimuth band starting at `az_min` and the
/// closed altitude band [`alt_min`, `alt_max`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewWindow {
    pub az_min: f64,
    pub alt_min: f64,
    pub alt_max: f64,
}

impl ViewWindow {
    /// Azimuth distance east of the window's left edge, wrapped into [0, 360).
    #[must_use]
    pub fn relative_azimuth(&self, azimuth: f64) -> f64 {
        (azimuth - self.az_min).rem_euclid(360.0)
    }

    /// Map an azimuth to a pixel x without applying the visibility cutoff.
    #[must_use]
    pub fn azimuth_to_x(&self, azimuth: f64, width: f64) -> f64 {
        self.relative_azimuth(azimuth) / AZ_RANGE_DEG * width
    }

    /// Map an altitude to a pixel y.
    ///
    /// Affine and monotonic decreasing: higher altitudes land closer to
    /// the top of the canvas, with a fixed blank margin above and below
    /// the window extremes.
    #[must_use]
    pub fn altitude_to_y(&self, altitude: f64, height: f64) -> f64 {
        height
            - FRAME_MARGIN_PX
            - (altitude - self.alt_min) / ALT_RANGE_DEG * (height - 2.0 * FRAME_MARGIN_PX)
    }

    /// Project to pixels, applying the hard visibility cutoff.
    ///
    /// Horizontally a position is kept while its wrapped offset is at most
    /// the window width — inclusive at exactly the right edge, with the
    /// left bound handled by the wrap itself. Vertically the mapped y must
    /// land inside [0, height]. Culling is by marker center; there is no
    /// partial clipping.
    #[must_use]
    pub fn sky_to_screen(&self, azimuth: f64, altitude: f64, width: f64, height: f64) -> Option<Point> {
        let rel_az = self.relative_azimuth(azimuth);
        if rel_az > AZ_RANGE_DEG {
            return None;
        }
        let y = self.altitude_to_y(altitude, height);
        if y < 0.0 || y > height {
            return None;
        }
        Some(Point::new(rel_az / AZ_RANGE_DEG * width, y))
    }
}
