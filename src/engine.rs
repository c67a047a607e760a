//! Top-level engine: ties the camera, gesture state machine, object list,
//! and renderer together.
//!
//! [`EngineCore`] holds all state and logic with no browser dependency so
//! it can be driven by synthetic events in native tests. [`Engine`] wraps
//! it and owns the canvas element. Everything is single-threaded and
//! event-driven: each handler runs to completion before control returns
//! to the host, and successive pointer events are applied in delivery
//! order with no coalescing.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point};
use crate::input::InputState;
use crate::render;
use crate::scene::{self, SceneCmd};
use crate::sky::{self, PositionsError, SkyObject, SkyStore};

/// Cursor shown while a drag is active.
const CURSOR_DRAGGING: &str = "grabbing";

/// Cursor shown when no gesture is in progress.
const CURSOR_IDLE: &str = "pointer";

/// What the host should do after an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The canvas cursor style should change.
    SetCursor(String),
    /// The view changed; redraw with the last-known object list.
    RenderNeeded,
}

/// Engine state and logic, independent of the canvas element.
///
/// Kept apart from [`Engine`] so native tests can drive it with synthetic
/// events and no browser. The camera is the only shared mutable piece: it
/// has one writer at a time (the active gesture, or an external
/// re-center) and is read by every render.
pub struct EngineCore {
    pub camera: Camera,
    pub sky: SkyStore,
    pub input: InputState,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            camera: Camera::default(),
            sky: SkyStore::new(),
            input: InputState::default(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Replace the object list with freshly recomputed positions.
    pub fn load_positions(&mut self, objects: Vec<SkyObject>) {
        self.sky.load_positions(objects);
    }

    /// Decode and load a JSON positions payload from the host.
    ///
    /// # Errors
    ///
    /// Returns [`PositionsError`] when the payload fails to decode; the
    /// previous object list is kept untouched in that case.
    pub fn load_positions_json(&mut self, payload: &str) -> Result<usize, PositionsError> {
        let objects = sky::parse_positions(payload)?;
        let count = objects.len();
        log::debug!("loaded {count} positions");
        self.sky.load_positions(objects);
        Ok(count)
    }

    /// Record the drawable size and device pixel ratio for later frames.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = dpr;
    }

    // --- Input events ---

    /// Pointer press: start a drag, capturing the pan baseline.
    ///
    /// A press while a drag is already active is a second concurrent
    /// pointer (touch); it ends the gesture, and further moves are
    /// ignored until the next clean press.
    pub fn on_pointer_down(&mut self, screen_pt: Point) -> Vec<Action> {
        match self.input {
            InputState::Idle => {
                self.input = InputState::Dragging {
                    start_screen: screen_pt,
                    start_camera: self.camera,
                };
                vec![Action::SetCursor(CURSOR_DRAGGING.to_string())]
            }
            InputState::Dragging { .. } => {
                self.input = InputState::Idle;
                Vec::new()
            }
        }
    }

    /// Pointer move: pan by the total delta from the drag baseline.
    ///
    /// The pan is absolute — recomputed from the press position and the
    /// press-time camera every move — so event order within a gesture
    /// cannot accumulate drift, and an aborted drag needs no rollback.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        let InputState::Dragging { start_screen, start_camera } = self.input else {
            return Vec::new();
        };
        self.camera = Camera::panned_from(
            start_camera,
            screen_pt.x - start_screen.x,
            screen_pt.y - start_screen.y,
            self.viewport_width,
            self.viewport_height,
        );
        vec![Action::RenderNeeded]
    }

    /// Pointer release: end the gesture.
    pub fn on_pointer_up(&mut self, _screen_pt: Point) -> Vec<Action> {
        if self.input == InputState::Idle {
            return Vec::new();
        }
        self.input = InputState::Idle;
        vec![Action::SetCursor(CURSOR_IDLE.to_string())]
    }

    /// External re-center (e.g. a "face south" control on the host page).
    ///
    /// Wraps and clamps like a pan would.
    pub fn set_center(&mut self, azimuth: f64, altitude: f64) -> Vec<Action> {
        self.camera = Camera::new(azimuth, altitude);
        vec![Action::RenderNeeded]
    }

    // --- Queries ---

    /// Compute the frame for the current view and object list.
    ///
    /// Re-invokable at any time; before any positions arrive it yields
    /// the frame furniture alone, and a zero-sized viewport yields an
    /// empty frame.
    #[must_use]
    pub fn scene(&self) -> Vec<SceneCmd> {
        scene::build(&self.camera, self.sky.objects(), self.viewport_width, self.viewport_height)
    }

    /// The current view center.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Whether a drag gesture is currently active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.input, InputState::Dragging { .. })
    }
}

/// Browser-facing engine: an [`EngineCore`] plus the canvas element it
/// draws to.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Bind a new engine to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EngineCore::new() }
    }

    /// The canvas element this engine draws to.
    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Refresh the core's viewport from the canvas attributes.
    ///
    /// The host owns bitmap sizing; when it scales the bitmap for a
    /// high-dpi display it reports the ratio through
    /// [`EngineCore::set_viewport`] instead.
    pub fn sync_viewport(&mut self) {
        let dpr = self.core.dpr;
        self.core.set_viewport(f64::from(self.canvas.width()), f64::from(self.canvas.height()), dpr);
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2d context cannot be acquired or a `Canvas2D`
    /// call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let Some(ctx) = self.canvas.get_context("2d")? else {
            return Err(JsValue::from_str("canvas has no 2d context"));
        };
        let ctx: CanvasRenderingContext2d = ctx.dyn_into()?;
        render::draw(&ctx, &self.core.scene(), self.core.dpr)
    }
}
