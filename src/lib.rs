//! Canvas engine for the browser sky-map viewer.
//!
//! Compiled to WebAssembly and run in the browser, this crate owns the
//! sky-map canvas end to end: it turns pointer input into view panning,
//! keeps the alt/az view center, projects celestial objects to pixels,
//! and renders the scene. The host page has two jobs only — wire DOM
//! events to the engine, and hand over a fresh position list whenever its
//! ephemeris library recomputes where everything is.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`camera`] | Pannable alt/az view center and sky-to-screen projection |
//! | [`sky`] | Celestial object list, JSON ingestion, marker palette |
//! | [`input`] | Drag gesture state machine |
//! | [`scene`] | Pure frame geometry as a replayable command list |
//! | [`render`] | Scene replay onto the 2D canvas context |
//! | [`consts`] | Shared numeric constants (view ranges, margins, radii) |

pub mod camera;
pub mod consts;
pub mod engine;
pub mod input;
pub mod render;
pub mod scene;
pub mod sky;

#[cfg(target_arch = "wasm32")]
pub mod app;
