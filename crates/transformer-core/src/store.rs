//! Observable transform state.
//!
//! The host and the gesture loop both write through the same setters; the
//! last write wins and every write notifies subscribers once with the full
//! new state.

use crate::transform::{Position, Size, TransformState};
use std::fmt;

/// Identifier returned by [`TransformStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&TransformState)>;

/// Holds the externally observable state and its subscribers.
pub struct TransformStore {
    state: TransformState,
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl TransformStore {
    /// Create a store with the given initial state.
    pub fn new(state: TransformState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Current state.
    pub fn get(&self) -> &TransformState {
        &self.state
    }

    /// Register a change callback.
    pub fn subscribe(&mut self, listener: impl FnMut(&TransformState) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a change callback. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Number of registered callbacks.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Replace the whole state.
    pub fn set(&mut self, state: TransformState) {
        self.state = state;
        self.notify();
    }

    pub fn set_position(&mut self, position: Position) {
        self.state.position = position;
        self.notify();
    }

    pub fn set_size(&mut self, size: Size) {
        self.state.size = size;
        self.notify();
    }

    /// Set position and size together, with a single notification.
    pub fn set_geometry(&mut self, position: Position, size: Size) {
        self.state.position = position;
        self.state.size = size;
        self.notify();
    }

    pub fn set_rotation(&mut self, rotation: f64) {
        self.state.rotation = rotation;
        self.notify();
    }

    /// Set the selection flag. Only notifies when it actually changes.
    pub fn set_selected(&mut self, selected: bool) {
        if self.state.selected != selected {
            self.state.selected = selected;
            self.notify();
        }
    }

    fn notify(&mut self) {
        let state = self.state;
        for (_, listener) in &mut self.listeners {
            listener(&state);
        }
    }
}

impl Default for TransformStore {
    fn default() -> Self {
        Self::new(TransformState::default())
    }
}

impl fmt::Debug for TransformStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
