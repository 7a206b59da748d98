//! Transformer Core Library
//!
//! Platform-agnostic move/resize/rotate interaction for a rectangular element
//! inside a container. Pointer and keyboard events go in; normalized
//! (percent-of-container) position, size and rotation come out.

pub mod anchor;
pub mod binding;
pub mod config;
pub mod cursor;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod handles;
pub mod input;
pub mod machine;
pub mod store;
pub mod transform;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use anchor::Anchor;
pub use binding::{Channel, EventHub, Host, HostBinding, HostEvent};
pub use config::TransformerConfig;
pub use cursor::{CursorAdvisor, CursorHint, CursorKind, CursorLog, NoCursor, ResizeDirection};
pub use error::{TransformError, TransformResult};
pub use gesture::{Gesture, Mode};
pub use handles::{Handle, HandleKind, Target};
pub use input::{KeyEvent, MouseButton, PointerEvent};
pub use machine::Transformer;
pub use store::{ListenerId, TransformStore};
pub use transform::{ContainerSize, Position, Size, TransformState};

#[cfg(target_arch = "wasm32")]
pub use web::{CssCursor, DomHost};
