//! Cursor advisory contract.
//!
//! The transformer never sets a cursor itself. It tells an injected
//! [`CursorAdvisor`] which cursor fits the current hover or gesture, plus an
//! optional rotation so the glyph can follow a rotated element.

use crate::anchor::Anchor;
use crate::geometry::normalize_degrees;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Compass direction of a resize cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl ResizeDirection {
    /// Clockwise order starting at north.
    const CLOCKWISE: [ResizeDirection; 8] = [
        ResizeDirection::N,
        ResizeDirection::NE,
        ResizeDirection::E,
        ResizeDirection::SE,
        ResizeDirection::S,
        ResizeDirection::SW,
        ResizeDirection::W,
        ResizeDirection::NW,
    ];

    /// The direction nearest to a compass bearing (degrees clockwise from north).
    pub fn from_bearing(bearing: f64) -> Self {
        let index = (normalize_degrees(bearing) / 45.0).round() as usize % 8;
        Self::CLOCKWISE[index]
    }

    /// Bearing of this direction in degrees clockwise from north.
    pub fn bearing(self) -> f64 {
        let index = Self::CLOCKWISE
            .iter()
            .position(|d| *d == self)
            .unwrap_or_default();
        index as f64 * 45.0
    }

    /// Rotate clockwise by `degrees`, quantized to the nearest of the eight
    /// directions. Used by hosts that cannot rotate cursor glyphs.
    pub fn rotated(self, degrees: f64) -> Self {
        Self::from_bearing(self.bearing() + degrees)
    }
}

impl From<Anchor> for ResizeDirection {
    fn from(anchor: Anchor) -> Self {
        Self::from_bearing(anchor.bearing())
    }
}

/// Cursor kinds the transformer asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CursorKind {
    #[default]
    Auto,
    Move,
    Rotate,
    Resize(ResizeDirection),
}

impl CursorKind {
    /// Fold an advisory angle into the kind, for hosts with fixed glyphs.
    /// Resize directions are rotated; other kinds pass through.
    pub fn resolve(self, angle: Option<f64>) -> Self {
        match (self, angle) {
            (CursorKind::Resize(direction), Some(angle)) => {
                CursorKind::Resize(direction.rotated(angle))
            }
            (kind, _) => kind,
        }
    }

    /// CSS `cursor` value. CSS has no rotate cursor, so `Rotate` maps to `grab`.
    pub fn css_name(self) -> &'static str {
        match self {
            CursorKind::Auto => "auto",
            CursorKind::Move => "move",
            CursorKind::Rotate => "grab",
            CursorKind::Resize(direction) => match direction {
                ResizeDirection::N => "n-resize",
                ResizeDirection::NE => "ne-resize",
                ResizeDirection::E => "e-resize",
                ResizeDirection::SE => "se-resize",
                ResizeDirection::S => "s-resize",
                ResizeDirection::SW => "sw-resize",
                ResizeDirection::W => "w-resize",
                ResizeDirection::NW => "nw-resize",
            },
        }
    }
}

/// One cursor request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CursorHint {
    pub kind: CursorKind,
    /// Rotation of the glyph in degrees, `[0, 360)`.
    pub angle: Option<f64>,
}

/// Receives cursor requests from a transformer.
pub trait CursorAdvisor {
    /// Use `kind`, optionally rotated clockwise by `angle` degrees.
    fn set_cursor(&mut self, kind: CursorKind, angle: Option<f64>);
}

/// Shared advisors, so the host can keep a handle to the same instance.
impl<T: CursorAdvisor> CursorAdvisor for Rc<RefCell<T>> {
    fn set_cursor(&mut self, kind: CursorKind, angle: Option<f64>) {
        self.borrow_mut().set_cursor(kind, angle);
    }
}

/// An absent advisor ignores requests.
impl<T: CursorAdvisor> CursorAdvisor for Option<T> {
    fn set_cursor(&mut self, kind: CursorKind, angle: Option<f64>) {
        if let Some(advisor) = self {
            advisor.set_cursor(kind, angle);
        }
    }
}

/// Advisor that drops every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCursor;

impl CursorAdvisor for NoCursor {
    fn set_cursor(&mut self, _kind: CursorKind, _angle: Option<f64>) {}
}

/// Advisor that records requests in order.
#[derive(Debug, Clone, Default)]
pub struct CursorLog {
    pub hints: Vec<CursorHint>,
}

impl CursorLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent request, if any.
    pub fn last(&self) -> Option<CursorHint> {
        self.hints.last().copied()
    }
}

impl CursorAdvisor for CursorLog {
    fn set_cursor(&mut self, kind: CursorKind, angle: Option<f64>) {
        self.hints.push(CursorHint { kind, angle });
    }
}
