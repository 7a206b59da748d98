//! Translation between winit input and transformer events.

use std::sync::Arc;
use transformer_core::{CursorAdvisor, CursorKind, MouseButton, ResizeDirection};
use winit::event::MouseButton as WinitButton;
use winit::keyboard::{Key, NamedKey};
use winit::window::{CursorIcon, Window};

/// Map a winit mouse button onto the transformer's button type.
pub fn mouse_button(button: WinitButton) -> MouseButton {
    match button {
        WinitButton::Left => MouseButton::Left,
        WinitButton::Right => MouseButton::Right,
        WinitButton::Middle => MouseButton::Middle,
        WinitButton::Back => MouseButton::Other(3),
        WinitButton::Forward => MouseButton::Other(4),
        WinitButton::Other(n) => MouseButton::Other(n),
    }
}

/// Key name in the DOM `KeyboardEvent.key` vocabulary, e.g. `"Shift"` or `"r"`.
pub fn key_name(key: &Key) -> Option<String> {
    match key {
        Key::Named(NamedKey::Space) => Some(" ".to_string()),
        Key::Named(named) => Some(format!("{:?}", named)),
        Key::Character(c) => Some(c.to_string()),
        _ => None,
    }
}

/// Fixed winit icon for a cursor hint. Angles are folded in by quantizing
/// resize directions.
pub fn cursor_icon(kind: CursorKind, angle: Option<f64>) -> CursorIcon {
    match kind.resolve(angle) {
        CursorKind::Auto => CursorIcon::Default,
        CursorKind::Move => CursorIcon::Move,
        CursorKind::Rotate => CursorIcon::Grab,
        CursorKind::Resize(direction) => match direction {
            ResizeDirection::N => CursorIcon::NResize,
            ResizeDirection::NE => CursorIcon::NeResize,
            ResizeDirection::E => CursorIcon::EResize,
            ResizeDirection::SE => CursorIcon::SeResize,
            ResizeDirection::S => CursorIcon::SResize,
            ResizeDirection::SW => CursorIcon::SwResize,
            ResizeDirection::W => CursorIcon::WResize,
            ResizeDirection::NW => CursorIcon::NwResize,
        },
    }
}

/// Cursor advisor that sets the cursor icon of a winit window.
pub struct WindowCursor {
    window: Arc<Window>,
    current: CursorIcon,
}

impl WindowCursor {
    pub fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            current: CursorIcon::Default,
        }
    }
}

impl CursorAdvisor for WindowCursor {
    fn set_cursor(&mut self, kind: CursorKind, angle: Option<f64>) {
        let icon = cursor_icon(kind, angle);
        if icon != self.current {
            self.current = icon;
            self.window.set_cursor(icon);
        }
    }
}
