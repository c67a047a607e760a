//! Pure frame geometry: computes the draw-command list for one frame.
//!
//! [`build`] is a pure function of the camera, the last-known object list,
//! and the canvas size — calling it twice with identical inputs yields an
//! identical command sequence. Nothing here touches a drawing surface;
//! [`crate::render`] replays the commands onto the canvas context, which
//! keeps every pixel coordinate and visibility decision assertable in
//! native tests.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use crate::camera::{Camera, ViewWindow};
use crate::consts::{
    ALT_AXIS_GUTTER_PX, ALT_AXIS_LABEL_X_PX, ALT_GRID_STEP_DEG, AZ_LABEL_BASELINE_PX,
    AZ_RANGE_DEG, AZ_TICK_LEN_PX, MARKER_LABEL_OFFSET_PX, MARKER_RADIUS_PX,
    NADIR_LABEL_OFFSET_PX, POLE_MARKER_RADIUS_PX, ZENITH_LABEL_OFFSET_PX,
};
use crate::sky::{SkyObject, marker_color};

/// Background fill behind the whole frame.
const BACKGROUND_COLOR: &str = "#000";

/// Horizon line and the altitude-0 gridline.
const HORIZON_COLOR: &str = "#888";

/// Ordinary altitude gridlines.
const GRID_COLOR: &str = "#444";

/// Axis furniture: ticks, degree labels, zenith/nadir rings.
const AXIS_COLOR: &str = "#aaa";

/// Object name labels.
const OBJECT_LABEL_COLOR: &str = "#fff";

/// Baseline nudge that vertically centers altitude labels on their line.
const ALT_LABEL_NUDGE_PX: f64 = 4.0;

/// Cardinal azimuth labels drawn along the bottom edge.
const CARDINALS: [(i32, &str); 4] = [(0, "N"), (90, "E"), (180, "S"), (270, "W")];

/// Horizontal text anchoring for a [`SceneCmd::Text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Center,
    Right,
}

/// One drawing instruction for the 2D surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneCmd {
    /// Fill the whole canvas with a flat background color.
    Clear { width: f64, height: f64, color: &'static str },
    /// Stroke a line segment.
    Line { x1: f64, y1: f64, x2: f64, y2: f64, color: &'static str },
    /// Stroke an unfilled circle outline.
    StrokeCircle { x: f64, y: f64, radius: f64, color: &'static str },
    /// Fill a solid circle.
    FillCircle { x: f64, y: f64, radius: f64, color: &'static str },
    /// Fill a single line of text.
    Text { x: f64, y: f64, text: String, color: &'static str, align: TextAlign },
}

/// Compute the full frame for the given view and object list.
///
/// Draw order: background, horizon, azimuth grid, altitude grid,
/// zenith/nadir markers, then one marker per visible object. A canvas
/// with a non-positive dimension produces an empty frame.
#[must_use]
pub fn build(camera: &Camera, objects: &[SkyObject], width: f64, height: f64) -> Vec<SceneCmd> {
    if width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }
    let window = camera.view_window();
    let mut cmds = vec![SceneCmd::Clear { width, height, color: BACKGROUND_COLOR }];
    push_horizon(&mut cmds, &window, width, height);
    push_azimuth_grid(&mut cmds, &window, width, height);
    push_altitude_grid(&mut cmds, &window, width, height);
    push_pole_markers(&mut cmds, &window, width, height);
    push_objects(&mut cmds, &window, objects, width, height);
    cmds
}

fn push_horizon(cmds: &mut Vec<SceneCmd>, window: &ViewWindow, width: f64, height: f64) {
    let y = window.altitude_to_y(0.0, height);
    cmds.push(SceneCmd::Line { x1: 0.0, y1: y, x2: width, y2: y, color: HORIZON_COLOR });
}

/// Cardinal labels along the bottom edge plus a tick below the horizon,
/// at whichever of 0/90/180/270° fall inside the azimuth window.
fn push_azimuth_grid(cmds: &mut Vec<SceneCmd>, window: &ViewWindow, width: f64, height: f64) {
    let horizon_y = window.altitude_to_y(0.0, height);
    for (az_deg, cardinal) in CARDINALS {
        if window.relative_azimuth(f64::from(az_deg)) > AZ_RANGE_DEG {
            continue;
        }
        let x = window.azimuth_to_x(f64::from(az_deg), width);
        cmds.push(SceneCmd::Text {
            x,
            y: height - AZ_LABEL_BASELINE_PX,
            text: format!("{cardinal}/{az_deg}°"),
            color: AXIS_COLOR,
            align: TextAlign::Center,
        });
        cmds.push(SceneCmd::Line {
            x1: x,
            y1: horizon_y,
            x2: x,
            y2: horizon_y + AZ_TICK_LEN_PX,
            color: AXIS_COLOR,
        });
    }
}

/// Gridlines every 30° of altitude, from the first multiple of 30 at or
/// above the window bottom through the window top, each with a
/// right-aligned degree label. The altitude-0 line repeats the horizon
/// color; the rest are dimmer.
#[allow(clippy::cast_possible_truncation)]
fn push_altitude_grid(cmds: &mut Vec<SceneCmd>, window: &ViewWindow, width: f64, height: f64) {
    let step = f64::from(ALT_GRID_STEP_DEG);
    let mut alt_deg = ((window.alt_min / step).ceil() * step) as i32;
    while f64::from(alt_deg) <= window.alt_max {
        let y = window.altitude_to_y(f64::from(alt_deg), height);
        cmds.push(SceneCmd::Text {
            x: ALT_AXIS_LABEL_X_PX,
            y: y + ALT_LABEL_NUDGE_PX,
            text: format!("{alt_deg}°"),
            color: AXIS_COLOR,
            align: TextAlign::Right,
        });
        let color = if alt_deg == 0 { HORIZON_COLOR } else { GRID_COLOR };
        cmds.push(SceneCmd::Line { x1: ALT_AXIS_GUTTER_PX, y1: y, x2: width, y2: y, color });
        alt_deg += ALT_GRID_STEP_DEG;
    }
}

/// Ring markers for the points straight overhead and straight down. Both
/// sit on the canvas centerline; whether they land on-canvas depends on
/// the current view center.
fn push_pole_markers(cmds: &mut Vec<SceneCmd>, window: &ViewWindow, width: f64, height: f64) {
    let x = width / 2.0;
    for (altitude, label, label_dy) in [
        (90.0, "Zenith", -ZENITH_LABEL_OFFSET_PX),
        (-90.0, "Nadir", NADIR_LABEL_OFFSET_PX),
    ] {
        let y = window.altitude_to_y(altitude, height);
        cmds.push(SceneCmd::StrokeCircle { x, y, radius: POLE_MARKER_RADIUS_PX, color: AXIS_COLOR });
        cmds.push(SceneCmd::Text {
            x,
            y: y + label_dy,
            text: label.to_string(),
            color: AXIS_COLOR,
            align: TextAlign::Center,
        });
    }
}

/// A filled marker and name label per object that survives the visibility
/// cutoff; out-of-window objects are skipped outright, not clipped.
fn push_objects(
    cmds: &mut Vec<SceneCmd>,
    window: &ViewWindow,
    objects: &[SkyObject],
    width: f64,
    height: f64,
) {
    for obj in objects {
        let Some(p) = window.sky_to_screen(obj.azimuth, obj.altitude, width, height) else {
            continue;
        };
        cmds.push(SceneCmd::FillCircle {
            x: p.x,
            y: p.y,
            radius: MARKER_RADIUS_PX,
            color: marker_color(&obj.name),
        });
        cmds.push(SceneCmd::Text {
            x: p.x,
            y: p.y - MARKER_LABEL_OFFSET_PX,
            text: obj.name.clone(),
            color: OBJECT_LABEL_COLOR,
            align: TextAlign::Center,
        });
    }
}
