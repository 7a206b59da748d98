//! Normalized transform state shared with the host.

use serde::{Deserialize, Serialize};

/// Default element size in percent of the container.
pub const DEFAULT_SIZE_PERCENT: f64 = 10.0;

/// Element position in percent of the container (top-left corner).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Element size in percent of the container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE_PERCENT, DEFAULT_SIZE_PERCENT)
    }
}

/// Container box in absolute pixels.
///
/// A zero dimension is allowed; conversions against it produce non-finite
/// values instead of panicking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

impl ContainerSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether either dimension is zero, negative or non-finite.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }
}

impl From<kurbo::Size> for ContainerSize {
    fn from(size: kurbo::Size) -> Self {
        Self::new(size.width, size.height)
    }
}

/// Externally observable widget state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformState {
    pub position: Position,
    pub size: Size,
    /// Rotation in degrees. Not wrapped.
    pub rotation: f64,
    pub selected: bool,
}

impl TransformState {
    /// Create a state with the given geometry, unselected.
    pub fn new(position: Position, size: Size, rotation: f64) -> Self {
        Self {
            position,
            size,
            rotation,
            selected: false,
        }
    }
}
