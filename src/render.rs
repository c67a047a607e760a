//! Canvas replay: draws a computed scene onto a 2D context.
//!
//! Nothing outside this module names
//! [`web_sys::CanvasRenderingContext2d`]. It takes the command list from
//! [`crate::scene::build`] and issues the matching context calls, touching
//! no application state. Fallible `Canvas2D` calls bubble up as
//! `Result<(), JsValue>` for [`crate::engine::Engine::render`] to handle.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::scene::{SceneCmd, TextAlign};

/// Font for every label on the map.
const LABEL_FONT: &str = "12px Times New Roman";

/// Replay scene commands onto the context.
///
/// `dpr` is the device pixel ratio; the host sizes the canvas bitmap, and
/// the transform here maps CSS-pixel command coordinates onto it.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, commands: &[SceneCmd], dpr: f64) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.set_font(LABEL_FONT);

    for cmd in commands {
        match cmd {
            SceneCmd::Clear { width, height, color } => {
                ctx.set_fill_style_str(color);
                ctx.fill_rect(0.0, 0.0, *width, *height);
            }
            SceneCmd::Line { x1, y1, x2, y2, color } => {
                ctx.set_stroke_style_str(color);
                ctx.begin_path();
                ctx.move_to(*x1, *y1);
                ctx.line_to(*x2, *y2);
                ctx.stroke();
            }
            SceneCmd::StrokeCircle { x, y, radius, color } => {
                ctx.set_stroke_style_str(color);
                ctx.begin_path();
                ctx.arc(*x, *y, *radius, 0.0, 2.0 * PI)?;
                ctx.stroke();
            }
            SceneCmd::FillCircle { x, y, radius, color } => {
                ctx.set_fill_style_str(color);
                ctx.begin_path();
                ctx.arc(*x, *y, *radius, 0.0, 2.0 * PI)?;
                ctx.fill();
            }
            SceneCmd::Text { x, y, text, color, align } => {
                ctx.set_fill_style_str(color);
                ctx.set_text_align(match align {
                    TextAlign::Center => "center",
                    TextAlign::Right => "right",
                });
                ctx.fill_text(text, *x, *y)?;
            }
        }
    }

    Ok(())
}
