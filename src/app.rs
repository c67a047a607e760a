//! Browser entry: `wasm_bindgen` facade for a plain JavaScript host page.
//!
//! The host wires DOM pointer/touch events to [`SkyMap`] and pushes a
//! fresh JSON position list whenever it recomputes the ephemeris; the
//! engine owns everything else. Mapping mouse vs. touch coordinates onto
//! the `(x, y)` arguments is the host's job, which keeps this surface
//! identical for both event families.

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::camera::Point;
use crate::engine::{Action, Engine};

/// Install the panic hook and console logger once per module load.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}

/// The exported sky-map widget.
#[wasm_bindgen]
pub struct SkyMap {
    engine: Engine,
}

#[wasm_bindgen]
impl SkyMap {
    /// Bind a new sky map to the given canvas element.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> SkyMap {
        let mut engine = Engine::new(canvas);
        engine.sync_viewport();
        SkyMap { engine }
    }

    /// Replace the object list with freshly recomputed positions and
    /// redraw.
    ///
    /// `payload` is a JSON array of `{ name, azimuth, altitude }` records.
    ///
    /// # Errors
    ///
    /// Returns a JS error when the payload fails to decode; the previous
    /// list is kept and nothing is redrawn.
    pub fn set_positions(&mut self, payload: &str) -> Result<(), JsValue> {
        self.engine
            .core
            .load_positions_json(payload)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.engine.render()
    }

    /// Pointer or single-touch press at canvas coordinates.
    ///
    /// # Errors
    ///
    /// Propagates canvas drawing failures.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        self.engine.sync_viewport();
        let actions = self.engine.core.on_pointer_down(Point::new(x, y));
        self.apply(actions)
    }

    /// Pointer or touch move.
    ///
    /// # Errors
    ///
    /// Propagates canvas drawing failures.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        let actions = self.engine.core.on_pointer_move(Point::new(x, y));
        self.apply(actions)
    }

    /// Pointer release or touch end.
    ///
    /// # Errors
    ///
    /// Propagates canvas drawing failures.
    pub fn pointer_up(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        let actions = self.engine.core.on_pointer_up(Point::new(x, y));
        self.apply(actions)
    }

    /// Re-center the view, wrapping the azimuth and clamping the altitude.
    ///
    /// # Errors
    ///
    /// Propagates canvas drawing failures.
    pub fn set_center(&mut self, azimuth: f64, altitude: f64) -> Result<(), JsValue> {
        let actions = self.engine.core.set_center(azimuth, altitude);
        self.apply(actions)
    }

    /// Current view-center azimuth in degrees, in [0, 360).
    #[must_use]
    pub fn center_azimuth(&self) -> f64 {
        self.engine.core.camera().center_az()
    }

    /// Current view-center altitude in degrees.
    #[must_use]
    pub fn center_altitude(&self) -> f64 {
        self.engine.core.camera().center_alt()
    }

    /// Redraw with the last-known object list.
    ///
    /// # Errors
    ///
    /// Propagates canvas drawing failures.
    pub fn render(&mut self) -> Result<(), JsValue> {
        self.engine.sync_viewport();
        self.engine.render()
    }

    fn apply(&mut self, actions: Vec<Action>) -> Result<(), JsValue> {
        for action in actions {
            match action {
                Action::SetCursor(cursor) => {
                    self.engine.canvas().style().set_property("cursor", &cursor)?;
                }
                Action::RenderNeeded => self.engine.render()?,
            }
        }
        Ok(())
    }
}
