// Deny rather than forbid: wasm-bindgen import shims expand with their own
// lint allows.
#![deny(unsafe_code)]

//! WASM frontend for the Tripane playground.
//!
//! This crate provides [`TripaneApp`], a `wasm-bindgen`-exported struct
//! that owns the three editor regions, the sandboxed preview frame, and
//! the history handle, and drives the pure sync loop in `tripane-core`.
//!
//! Host-driven: the JavaScript page supplies the pane containers, the
//! preview iframe, and an `editorHost` factory implementing the minimal
//! editor-widget contract (`create` / `getText` / `setText` / `onChange`),
//! then constructs `TripaneApp` once after the DOM is ready.

mod options;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::TripaneApp;

pub use options::EditorOptions;

/// Version of the JS-facing API surface.
pub const TRIPANE_JS_API_VERSION: u32 = 1;
