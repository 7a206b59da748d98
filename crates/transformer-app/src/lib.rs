//! Transformer Application
//!
//! Demo hosts for the transformer: a native winit window and a wasm entry
//! point that binds a DOM element.

#[cfg(not(target_arch = "wasm32"))]
mod app;
#[cfg(not(target_arch = "wasm32"))]
mod host;

#[cfg(not(target_arch = "wasm32"))]
pub use app::{App, AppConfig, AppError};
#[cfg(not(target_arch = "wasm32"))]
pub use host::{WindowCursor, cursor_icon, key_name, mouse_button};

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{WebTransformer, run_wasm};
