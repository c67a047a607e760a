#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn window(az_min: f64, alt_min: f64) -> ViewWindow {
    ViewWindow { az_min, alt_min, alt_max: alt_min + ALT_RANGE_DEG }
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_equality() {
    assert_eq!(Point::new(1.0, 2.0), Point::new(1.0, 2.0));
    assert_ne!(Point::new(1.0, 2.0), Point::new(1.0, 3.0));
}

// --- Camera construction ---

#[test]
fn camera_default_faces_south() {
    let cam = Camera::default();
    assert_eq!(cam.center_az(), 180.0);
}

#[test]
fn camera_default_altitude_is_clamp_top() {
    let cam = Camera::default();
    assert_eq!(cam.center_alt(), ALT_CENTER_MAX_DEG);
}

#[test]
fn camera_new_wraps_azimuth_above_360() {
    assert_eq!(Camera::new(450.0, 0.0).center_az(), 90.0);
}

#[test]
fn camera_new_wraps_negative_azimuth() {
    assert_eq!(Camera::new(-90.0, 0.0).center_az(), 270.0);
}

#[test]
fn camera_new_wraps_exactly_360_to_zero() {
    assert_eq!(Camera::new(360.0, 0.0).center_az(), 0.0);
}

#[test]
fn camera_new_keeps_in_range_azimuth() {
    assert_eq!(Camera::new(359.5, 0.0).center_az(), 359.5);
}

#[test]
fn camera_new_clamps_high_altitude() {
    assert_eq!(Camera::new(0.0, 91.0).center_alt(), ALT_CENTER_MAX_DEG);
}

#[test]
fn camera_new_clamps_low_altitude() {
    assert_eq!(Camera::new(0.0, -91.0).center_alt(), ALT_CENTER_MIN_DEG);
}

#[test]
fn camera_new_keeps_in_band_altitude() {
    assert_eq!(Camera::new(0.0, 12.5).center_alt(), 12.5);
}

// --- wrap_azimuth / clamp_center_altitude ---

#[test]
fn wrap_azimuth_identity_in_range() {
    assert_eq!(wrap_azimuth(0.0), 0.0);
    assert_eq!(wrap_azimuth(359.9), 359.9);
}

#[test]
fn wrap_azimuth_full_turns() {
    assert!(approx_eq(wrap_azimuth(360.0), 0.0));
    assert!(approx_eq(wrap_azimuth(720.25), 0.25));
}

#[test]
fn wrap_azimuth_negative() {
    assert!(approx_eq(wrap_azimuth(-0.5), 359.5));
    assert!(approx_eq(wrap_azimuth(-450.0), 270.0));
}

#[test]
fn clamp_center_altitude_saturates_both_ends() {
    assert_eq!(clamp_center_altitude(45.0), ALT_CENTER_MAX_DEG);
    assert_eq!(clamp_center_altitude(-45.0), ALT_CENTER_MIN_DEG);
    assert_eq!(clamp_center_altitude(0.0), 0.0);
}

// --- view_window ---

#[test]
fn view_window_centered_south() {
    let w = Camera::new(180.0, 0.0).view_window();
    assert_eq!(w.az_min, 90.0);
    assert_eq!(w.alt_min, -60.0);
    assert_eq!(w.alt_max, 60.0);
}

#[test]
fn view_window_left_edge_can_go_negative() {
    // Azimuth is cyclic; the wrap in relative_azimuth handles this.
    let w = Camera::new(0.0, 0.0).view_window();
    assert_eq!(w.az_min, -90.0);
}

// --- relative_azimuth ---

#[test]
fn relative_azimuth_at_left_edge_is_zero() {
    let w = Camera::new(180.0, 0.0).view_window();
    assert_eq!(w.relative_azimuth(90.0), 0.0);
}

#[test]
fn relative_azimuth_at_right_edge_is_range() {
    let w = Camera::new(180.0, 0.0).view_window();
    assert_eq!(w.relative_azimuth(270.0), AZ_RANGE_DEG);
}

#[test]
fn relative_azimuth_wraps_behind_the_view() {
    let w = Camera::new(180.0, 0.0).view_window();
    assert_eq!(w.relative_azimuth(0.0), 270.0);
    assert_eq!(w.relative_azimuth(89.0), 359.0);
}

#[test]
fn relative_azimuth_wraps_across_north() {
    let w = Camera::new(0.0, 0.0).view_window();
    assert_eq!(w.relative_azimuth(270.0), 0.0);
    assert_eq!(w.relative_azimuth(0.0), 90.0);
    assert_eq!(w.relative_azimuth(90.0), 180.0);
}

// --- azimuth_to_x ---

#[test]
fn azimuth_to_x_spans_the_canvas() {
    let w = Camera::new(180.0, 0.0).view_window();
    assert!(approx_eq(w.azimuth_to_x(90.0, 800.0), 0.0));
    assert!(approx_eq(w.azimuth_to_x(180.0, 800.0), 400.0));
    assert!(approx_eq(w.azimuth_to_x(270.0, 800.0), 800.0));
}

// --- altitude_to_y ---

#[test]
fn altitude_to_y_reference_value() {
    // alt_min -15, canvas 400 high: altitude 0 maps 42.5 px above the
    // bottom margin line.
    let w = window(0.0, -15.0);
    assert!(approx_eq(w.altitude_to_y(0.0, 400.0), 327.5));
}

#[test]
fn altitude_to_y_hits_margins_at_window_extremes() {
    let w = window(0.0, -60.0);
    assert!(approx_eq(w.altitude_to_y(w.alt_min, 400.0), 370.0));
    assert!(approx_eq(w.altitude_to_y(w.alt_max, 400.0), 30.0));
}

#[test]
fn altitude_to_y_monotonic_decreasing() {
    let w = window(0.0, -60.0);
    assert!(w.altitude_to_y(30.0, 400.0) < w.altitude_to_y(0.0, 400.0));
    assert!(w.altitude_to_y(0.0, 400.0) < w.altitude_to_y(-30.0, 400.0));
}

#[test]
fn altitude_to_y_is_affine() {
    let w = window(0.0, -60.0);
    let mid = w.altitude_to_y(30.0, 400.0);
    assert!(approx_eq(w.altitude_to_y(0.0, 400.0) + w.altitude_to_y(60.0, 400.0), 2.0 * mid));
}

// --- sky_to_screen ---

#[test]
fn sky_to_screen_left_edge_maps_to_x_zero() {
    let cam = Camera::new(180.0, 0.0);
    let p = cam.sky_to_screen(90.0, 0.0, 800.0, 400.0).unwrap();
    assert!(approx_eq(p.x, 0.0));
}

#[test]
fn sky_to_screen_right_edge_is_inclusive() {
    let cam = Camera::new(180.0, 0.0);
    let p = cam.sky_to_screen(270.0, 0.0, 800.0, 400.0).unwrap();
    assert!(approx_eq(p.x, 800.0));
}

#[test]
fn sky_to_screen_one_degree_past_right_edge_is_culled() {
    let cam = Camera::new(180.0, 0.0);
    assert!(cam.sky_to_screen(271.0, 0.0, 800.0, 400.0).is_none());
}

#[test]
fn sky_to_screen_culls_above_canvas_top() {
    // Window tops out at +60; +90 maps above y = 0.
    let cam = Camera::new(180.0, 0.0);
    assert!(cam.sky_to_screen(180.0, 90.0, 800.0, 400.0).is_none());
}

#[test]
fn sky_to_screen_culls_below_canvas_bottom() {
    let cam = Camera::new(180.0, 0.0);
    assert!(cam.sky_to_screen(180.0, -75.0, 800.0, 400.0).is_none());
}

#[test]
fn sky_to_screen_keeps_margin_band_positions() {
    // Altitudes past the window extremes are still kept while their
    // mapped y stays inside the canvas (the 30 px margin band).
    let cam = Camera::new(180.0, 0.0);
    assert!(cam.sky_to_screen(180.0, 65.0, 800.0, 400.0).is_some());
    assert!(cam.sky_to_screen(180.0, -65.0, 800.0, 400.0).is_some());
}

// --- panned_from ---

#[test]
fn panned_from_converts_pixels_to_degrees() {
    let start = Camera::new(180.0, 0.0);
    let cam = Camera::panned_from(start, 50.0, 30.0, 800.0, 400.0);
    assert!(approx_eq(cam.center_az(), 168.75));
    assert!(approx_eq(cam.center_alt(), 9.0));
}

#[test]
fn panned_from_wraps_a_full_circle_back() {
    // -1600 px at 180°/800 px is exactly +360° of azimuth.
    let start = Camera::new(180.0, 0.0);
    let cam = Camera::panned_from(start, -1600.0, 0.0, 800.0, 400.0);
    assert!(approx_eq(cam.center_az(), 180.0));
}

#[test]
fn panned_from_azimuth_stays_in_range() {
    let start = Camera::new(180.0, 0.0);
    let cam = Camera::panned_from(start, 2000.0, 0.0, 800.0, 400.0);
    assert!(approx_eq(cam.center_az(), 90.0));
    assert!(cam.center_az() >= 0.0 && cam.center_az() < 360.0);
}

#[test]
fn panned_from_altitude_clamp_is_saturating() {
    let start = Camera::new(180.0, 0.0);
    let up = Camera::panned_from(start, 0.0, 1.0e6, 800.0, 400.0);
    let down = Camera::panned_from(start, 0.0, -1.0e6, 800.0, 400.0);
    assert_eq!(up.center_alt(), ALT_CENTER_MAX_DEG);
    assert_eq!(down.center_alt(), ALT_CENTER_MIN_DEG);
}

#[test]
fn panned_from_zero_canvas_is_noop() {
    let start = Camera::new(123.0, 7.0);
    assert_eq!(Camera::panned_from(start, 50.0, 50.0, 0.0, 400.0), start);
    assert_eq!(Camera::panned_from(start, 50.0, 50.0, 800.0, 0.0), start);
    assert_eq!(Camera::panned_from(start, 50.0, 50.0, -1.0, -1.0), start);
}

#[test]
fn panned_from_is_absolute_from_baseline() {
    // Two moves from the same baseline land where the larger one says,
    // not at the sum of both.
    let start = Camera::new(180.0, 0.0);
    let _ = Camera::panned_from(start, 40.0, 0.0, 800.0, 400.0);
    let cam = Camera::panned_from(start, 80.0, 0.0, 800.0, 400.0);
    assert!(approx_eq(cam.center_az(), 180.0 - 18.0));
}
