//! Manipulation handles and hit testing.

use crate::anchor::Anchor;
use crate::config::TransformerConfig;
use crate::cursor::{CursorKind, ResizeDirection};
use crate::geometry::{normalize_degrees, rotate_point};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;

/// The kind of handle - determines what gesture a press starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleKind {
    /// Resize handle sitting on a corner or edge midpoint.
    Resize(Anchor),
    /// Rotate handle just outside a corner.
    Rotate(Anchor),
}

impl HandleKind {
    /// Cursor base angle for rotate handles: the handle's compass bearing,
    /// so the glyph lines up with the handle on a rotated box.
    pub fn cursor_base(self) -> f64 {
        match self {
            HandleKind::Resize(_) => 0.0,
            HandleKind::Rotate(anchor) => anchor.bearing(),
        }
    }

    /// Cursor to request while hovering this handle on a box rotated by
    /// `rotation` degrees.
    pub fn cursor(self, rotation: f64) -> (CursorKind, f64) {
        match self {
            HandleKind::Resize(anchor) => (
                CursorKind::Resize(ResizeDirection::from(anchor)),
                normalize_degrees(rotation),
            ),
            HandleKind::Rotate(_) => (
                CursorKind::Rotate,
                normalize_degrees(rotation + self.cursor_base()),
            ),
        }
    }
}

/// A handle with its position in container pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    pub position: Point,
    pub kind: HandleKind,
}

impl Handle {
    /// Create a new handle.
    pub fn new(position: Point, kind: HandleKind) -> Self {
        Self { position, kind }
    }

    /// Check if a point hits this handle.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let dx = point.x - self.position.x;
        let dy = point.y - self.position.y;
        dx * dx + dy * dy <= tolerance * tolerance
    }
}

/// What a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    Handle(HandleKind),
    /// The element itself, away from any handle.
    Body,
    /// The surrounding container, outside the element.
    Container,
}

impl Target {
    /// Whether the press landed on the element (body or handle).
    pub fn is_element(self) -> bool {
        !matches!(self, Target::Container)
    }
}

/// Unrotated position of an anchor on `rect`.
fn anchor_point(rect: Rect, anchor: Anchor) -> Point {
    let center = rect.center();
    let (dx, dy) = anchor.direction();
    Point::new(
        center.x + f64::from(dx) * rect.width() / 2.0,
        center.y + f64::from(dy) * rect.height() / 2.0,
    )
}

/// Handles for an element box `rect` rotated by `rotation` degrees about its
/// center. Only capabilities enabled in `config` produce handles.
pub fn get_handles(rect: Rect, rotation: f64, config: &TransformerConfig) -> Vec<Handle> {
    let center = rect.center();
    let mut handles = Vec::new();

    if config.resizable {
        for anchor in Anchor::ALL {
            handles.push(Handle::new(
                rotate_point(anchor_point(rect, anchor), center, rotation),
                HandleKind::Resize(anchor),
            ));
        }
    }

    if config.rotatable {
        let offset = config.rotate_handle_offset * FRAC_1_SQRT_2;
        for anchor in Anchor::CORNERS {
            let (dx, dy) = anchor.direction();
            let corner = anchor_point(rect, anchor);
            let outside = Point::new(
                corner.x + f64::from(dx) * offset,
                corner.y + f64::from(dy) * offset,
            );
            handles.push(Handle::new(
                rotate_point(outside, center, rotation),
                HandleKind::Rotate(anchor),
            ));
        }
    }

    handles
}

/// Resolve a container-relative point to the thing it hits.
///
/// Resize handles win over rotate handles, which win over the body.
pub fn hit_test(rect: Rect, rotation: f64, point: Point, config: &TransformerConfig) -> Target {
    let handles = get_handles(rect, rotation, config);
    if let Some(handle) = handles
        .iter()
        .find(|h| h.hit_test(point, config.handle_tolerance))
    {
        return Target::Handle(handle.kind);
    }

    let local = rotate_point(point, rect.center(), -rotation);
    if rect.contains(local) {
        Target::Body
    } else {
        Target::Container
    }
}
