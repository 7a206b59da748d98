//! The interaction state machine.
//!
//! A [`Transformer`] turns pointer and keyboard events into new normalized
//! transform values. It owns the gesture snapshot, the cached container size
//! and the discrete-rotation flag; the normalized state lives in a
//! [`TransformStore`] so hosts can observe and override it.

use crate::config::TransformerConfig;
use crate::cursor::{CursorAdvisor, CursorKind, ResizeDirection};
use crate::geometry::{element_rect, normalize_degrees, normalize_rect, pixel_to_percent};
use crate::gesture::{move_origin, resize_rect, rotation_at, Gesture, Mode};
use crate::handles::{get_handles, hit_test, Handle, HandleKind, Target};
use crate::input::{KeyEvent, MouseButton, PointerEvent};
use crate::store::{ListenerId, TransformStore};
use crate::transform::{ContainerSize, Position, Size, TransformState};
use kurbo::{Point, Rect};
use std::fmt;
use uuid::Uuid;

/// Move/resize/rotate state machine for one element.
pub struct Transformer {
    id: Uuid,
    config: TransformerConfig,
    store: TransformStore,
    container: ContainerSize,
    /// Active gesture; `None` while idle.
    gesture: Option<Gesture>,
    /// Snap rotation to `config.snap_step` (snap key held).
    discrete: bool,
    /// Last pointer position seen during the active gesture.
    last_pointer: Option<Point>,
    /// Target under the pointer while idle, for hover cursor hints.
    hovered: Option<Target>,
    cursor: Box<dyn CursorAdvisor>,
}

impl Transformer {
    /// Create a transformer with the default state.
    pub fn new(config: TransformerConfig, cursor: impl CursorAdvisor + 'static) -> Self {
        Self {
            id: Uuid::new_v4(),
            config,
            store: TransformStore::default(),
            container: ContainerSize::default(),
            gesture: None,
            discrete: false,
            last_pointer: None,
            hovered: None,
            cursor: Box::new(cursor),
        }
    }

    /// Set the initial state.
    pub fn with_state(mut self, state: TransformState) -> Self {
        self.store = TransformStore::new(state);
        self
    }

    /// Set the initial container size.
    pub fn with_container(mut self, container: ContainerSize) -> Self {
        self.set_container_size(container);
        self
    }

    /// Instance id, used to tell widgets apart in logs.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &TransformerConfig {
        &self.config
    }

    /// Replace the configuration. Capabilities are checked when a gesture
    /// starts, so an active gesture is not affected.
    pub fn set_config(&mut self, config: TransformerConfig) {
        self.config = config;
        self.hovered = None;
    }

    /// Current interaction mode.
    pub fn mode(&self) -> Mode {
        self.gesture.as_ref().map_or(Mode::Idle, Gesture::mode)
    }

    /// Check if a gesture is in progress.
    pub fn is_transforming(&self) -> bool {
        self.gesture.is_some()
    }

    /// Snapshot of the active gesture.
    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    /// Whether discrete rotation is engaged.
    pub fn is_discrete(&self) -> bool {
        self.discrete
    }

    pub fn state(&self) -> &TransformState {
        self.store.get()
    }

    pub fn set_state(&mut self, state: TransformState) {
        self.store.set(state);
        self.hovered = None;
    }

    pub fn set_position(&mut self, position: Position) {
        self.store.set_position(position);
    }

    pub fn set_size(&mut self, size: Size) {
        self.store.set_size(size);
    }

    pub fn set_rotation(&mut self, rotation: f64) {
        self.store.set_rotation(rotation);
        self.hovered = None;
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.store.set_selected(selected);
    }

    /// Register a state change callback.
    pub fn subscribe(&mut self, listener: impl FnMut(&TransformState) + 'static) -> ListenerId {
        self.store.subscribe(listener)
    }

    /// Remove a state change callback.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.store.unsubscribe(id)
    }

    pub fn container_size(&self) -> ContainerSize {
        self.container
    }

    /// Update the cached container size. Later conversions use it.
    pub fn set_container_size(&mut self, container: ContainerSize) {
        if container.is_degenerate() {
            log::warn!(
                "Transformer {}: degenerate container {}x{}",
                self.id,
                container.width,
                container.height
            );
        }
        self.container = container;
    }

    /// Element box in container pixels, ignoring rotation.
    pub fn element_rect(&self) -> Rect {
        element_rect(self.state(), self.container)
    }

    /// Handles for the current state and capabilities.
    pub fn handles(&self) -> Vec<Handle> {
        get_handles(self.element_rect(), self.state().rotation, &self.config)
    }

    /// What a container-relative point would hit.
    pub fn target_at(&self, point: Point) -> Target {
        hit_test(self.element_rect(), self.state().rotation, point, &self.config)
    }

    /// Handle a press on `target`. Returns the mode after the press.
    ///
    /// Pressing the element selects it, pressing the container deselects it.
    /// Only a primary press on an enabled target starts a gesture, and only
    /// from idle; presses during a gesture are ignored.
    pub fn press(&mut self, target: Target, position: Point, button: MouseButton) -> Mode {
        if let Some(gesture) = &self.gesture {
            log::debug!(
                "Transformer {}: ignoring press during {:?}",
                self.id,
                gesture.mode()
            );
            return gesture.mode();
        }

        self.store.set_selected(target.is_element());
        if !button.is_primary() {
            return Mode::Idle;
        }

        let rect = self.element_rect();
        let rotation = self.state().rotation;
        let gesture = match target {
            Target::Body if self.config.movable => Some(Gesture::start_move(position, rect.origin())),
            Target::Handle(HandleKind::Resize(anchor)) if self.config.resizable => {
                Some(Gesture::start_resize(anchor, position, rect))
            }
            Target::Handle(kind @ HandleKind::Rotate(_)) if self.config.rotatable => Some(
                Gesture::start_rotate(position, rect.center(), rotation, kind.cursor_base()),
            ),
            _ => None,
        };

        let Some(gesture) = gesture else {
            return Mode::Idle;
        };

        log::debug!(
            "Transformer {}: {:?} started at ({:.1}, {:.1})",
            self.id,
            gesture.mode(),
            position.x,
            position.y
        );
        self.gesture = Some(gesture);
        self.last_pointer = Some(position);
        self.hovered = None;
        self.request_gesture_cursor();
        gesture.mode()
    }

    /// Pointer moved while a gesture may be active. Idle moves are ignored;
    /// use [`Transformer::hover`] for those.
    pub fn pointer_move(&mut self, position: Point) {
        if self.gesture.is_none() {
            return;
        }
        self.last_pointer = Some(position);
        self.recompute(position);
    }

    /// End the active gesture, whatever button was released and wherever.
    /// A release while idle does nothing.
    pub fn release(&mut self) {
        let Some(gesture) = self.gesture.take() else {
            return;
        };
        log::debug!("Transformer {}: {:?} ended", self.id, gesture.mode());
        self.last_pointer = None;
        self.hovered = None;
        self.cursor.set_cursor(CursorKind::Auto, None);
    }

    /// Pointer is over `target` without dragging. Requests a cursor when the
    /// hovered target changes; suppressed during a gesture.
    pub fn hover(&mut self, target: Target) {
        if self.gesture.is_some() || self.hovered == Some(target) {
            return;
        }
        self.hovered = Some(target);

        let rotation = self.state().rotation;
        let (kind, angle) = match target {
            Target::Handle(handle @ HandleKind::Resize(_)) if self.config.resizable => {
                let (kind, angle) = handle.cursor(rotation);
                (kind, Some(angle))
            }
            Target::Handle(handle @ HandleKind::Rotate(_)) if self.config.rotatable => {
                let (kind, angle) = handle.cursor(rotation);
                (kind, Some(angle))
            }
            Target::Body if self.config.movable => (CursorKind::Move, None),
            _ => (CursorKind::Auto, None),
        };
        self.cursor.set_cursor(kind, angle);
    }

    /// Engage or release discrete rotation. While rotating, the rotation is
    /// recomputed at the last pointer position right away.
    pub fn set_discrete(&mut self, discrete: bool) {
        if self.discrete == discrete {
            return;
        }
        self.discrete = discrete;
        if self.mode() == Mode::Rotating {
            if let Some(pointer) = self.last_pointer {
                self.recompute(pointer);
            }
        }
    }

    pub fn key_down(&mut self, key: &str) {
        if key == self.config.snap_key {
            self.set_discrete(true);
        }
    }

    pub fn key_up(&mut self, key: &str) {
        if key == self.config.snap_key {
            self.set_discrete(false);
        }
    }

    /// Reset rotation to 0°. Ignored during a gesture.
    pub fn reset_rotation(&mut self) {
        if self.gesture.is_none() {
            self.store.set_rotation(0.0);
            self.hovered = None;
        }
    }

    /// Dispatch a raw pointer event, hit testing presses and idle moves.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position, button } => {
                let target = self.target_at(position);
                self.press(target, position, button);
            }
            PointerEvent::Move { position } => {
                if self.gesture.is_some() {
                    self.pointer_move(position);
                } else {
                    let target = self.target_at(position);
                    self.hover(target);
                }
            }
            PointerEvent::Up { .. } => self.release(),
        }
    }

    /// Dispatch a raw key event.
    pub fn handle_key_event(&mut self, event: &KeyEvent) {
        match event {
            KeyEvent::Pressed(key) => self.key_down(key),
            KeyEvent::Released(key) => self.key_up(key),
        }
    }

    fn recompute(&mut self, pointer: Point) {
        let Some(gesture) = self.gesture else {
            return;
        };
        let container = self.container;

        match gesture {
            Gesture::Move { offset } => {
                let origin = move_origin(pointer, offset);
                self.store.set_position(Position::new(
                    pixel_to_percent(origin.x, container.width),
                    pixel_to_percent(origin.y, container.height),
                ));
            }
            Gesture::Resize {
                anchor,
                start_pointer,
                start_rect,
            } => {
                let rect = resize_rect(start_rect, anchor, pointer - start_pointer, self.config.min_size_px);
                let (position, size) = normalize_rect(rect, container);
                self.store.set_geometry(position, size);
            }
            Gesture::Rotate {
                center,
                start_angle,
                cursor_base,
            } => {
                let snap = self.discrete.then_some(self.config.snap_step);
                let rotation = rotation_at(pointer, center, start_angle, snap);
                self.store.set_rotation(rotation);
                self.cursor
                    .set_cursor(CursorKind::Rotate, Some(normalize_degrees(rotation + cursor_base)));
            }
        }
    }

    fn request_gesture_cursor(&mut self) {
        let rotation = self.state().rotation;
        match self.gesture {
            Some(Gesture::Move { .. }) => self.cursor.set_cursor(CursorKind::Move, None),
            Some(Gesture::Resize { anchor, .. }) => self.cursor.set_cursor(
                CursorKind::Resize(ResizeDirection::from(anchor)),
                Some(normalize_degrees(rotation)),
            ),
            Some(Gesture::Rotate { cursor_base, .. }) => self
                .cursor
                .set_cursor(CursorKind::Rotate, Some(normalize_degrees(rotation + cursor_base))),
            None => {}
        }
    }
}

impl fmt::Debug for Transformer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transformer")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("store", &self.store)
            .field("container", &self.container)
            .field("gesture", &self.gesture)
            .field("discrete", &self.discrete)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::Anchor;
    use crate::cursor::{CursorHint, CursorLog};
    use std::cell::RefCell;
    use std::rc::Rc;

    const LEFT: MouseButton = MouseButton::Left;

    /// Container 1000x500, element at {10,10} sized {20,20}: pixel box
    /// (100, 50) - (300, 150), center (200, 100).
    fn transformer(config: TransformerConfig) -> (Transformer, Rc<RefCell<CursorLog>>) {
        let log = Rc::new(RefCell::new(CursorLog::new()));
        let transformer = Transformer::new(config, Rc::clone(&log))
            .with_state(TransformState::new(
                Position::new(10.0, 10.0),
                Size::new(20.0, 20.0),
                0.0,
            ))
            .with_container(ContainerSize::new(1000.0, 500.0));
        (transformer, log)
    }

    fn last_hint(log: &Rc<RefCell<CursorLog>>) -> CursorHint {
        log.borrow().last().unwrap()
    }

    /// Point at `degrees` (screen convention) and `radius` from the element center.
    fn at_angle(degrees: f64, radius: f64) -> Point {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Point::new(200.0 + radius * cos, 100.0 + radius * sin)
    }

    #[test]
    fn test_scenario_move() {
        let (mut t, log) = transformer(TransformerConfig::default().with_movable(true));
        assert_eq!(t.press(Target::Body, Point::new(150.0, 100.0), LEFT), Mode::Moving);
        assert_eq!(last_hint(&log).kind, CursorKind::Move);

        t.pointer_move(Point::new(250.0, 100.0));
        assert!((t.state().position.x - 20.0).abs() < 1e-9);
        assert!((t.state().position.y - 10.0).abs() < 1e-9);
        assert_eq!(t.state().size, Size::new(20.0, 20.0));

        t.release();
        assert_eq!(t.mode(), Mode::Idle);
        assert_eq!(last_hint(&log).kind, CursorKind::Auto);
    }

    #[test]
    fn test_move_is_pure_translation() {
        let (mut t, _) = transformer(TransformerConfig::default().with_movable(true));
        t.set_rotation(37.0);
        t.press(Target::Body, Point::new(120.0, 60.0), LEFT);
        t.pointer_move(Point::new(120.0 - 75.0, 60.0 + 40.0));
        assert!((t.state().position.x - (10.0 - 7.5)).abs() < 1e-9);
        assert!((t.state().position.y - (10.0 + 8.0)).abs() < 1e-9);
        // Unclamped: can leave the container
        t.pointer_move(Point::new(-500.0, 60.0));
        assert!(t.state().position.x < 0.0);
    }

    #[test]
    fn test_scenario_resize_clamps() {
        let (mut t, log) = transformer(TransformerConfig::default().with_resizable(true));
        let handle = Target::Handle(HandleKind::Resize(Anchor::BottomRight));
        assert_eq!(t.press(handle, Point::new(300.0, 150.0), LEFT), Mode::Resizing);
        assert_eq!(
            last_hint(&log).kind,
            CursorKind::Resize(ResizeDirection::SE)
        );

        t.pointer_move(Point::new(-100.0, 150.0));
        assert!((t.state().size.width - 1.4).abs() < 1e-9);
        assert!((t.state().size.height - 20.0).abs() < 1e-9);
        assert!((t.state().position.x - 10.0).abs() < 1e-9);
        assert!((t.state().position.y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_top_left_resize_keeps_bottom_right() {
        let (mut t, _) = transformer(TransformerConfig::default().with_resizable(true));
        t.press(
            Target::Handle(HandleKind::Resize(Anchor::TopLeft)),
            Point::new(100.0, 50.0),
            LEFT,
        );
        for pointer in [Point::new(50.0, 20.0), Point::new(900.0, 600.0), Point::new(299.0, 149.0)] {
            t.pointer_move(pointer);
            let state = t.state();
            assert!((state.position.x + state.size.width - 30.0).abs() < 1e-9);
            assert!((state.position.y + state.size.height - 30.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_resize_is_one_notification() {
        let (mut t, _) = transformer(TransformerConfig::default().with_resizable(true));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        t.subscribe(move |state| sink.borrow_mut().push(*state));

        t.press(
            Target::Handle(HandleKind::Resize(Anchor::Left)),
            Point::new(100.0, 100.0),
            LEFT,
        );
        seen.borrow_mut().clear();
        t.pointer_move(Point::new(80.0, 100.0));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert!((seen[0].position.x - 8.0).abs() < 1e-9);
        assert!((seen[0].size.width - 22.0).abs() < 1e-9);
    }

    #[test]
    fn test_scenario_rotate() {
        let (mut t, log) = transformer(TransformerConfig::default().with_rotatable(true));
        let handle = Target::Handle(HandleKind::Rotate(Anchor::BottomRight));
        assert_eq!(t.press(handle, at_angle(90.0, 100.0), LEFT), Mode::Rotating);
        assert_eq!(last_hint(&log).kind, CursorKind::Rotate);
        assert!((last_hint(&log).angle.unwrap() - 135.0).abs() < 1e-9);

        t.pointer_move(at_angle(135.0, 100.0));
        assert!((t.state().rotation - 45.0).abs() < 1e-9);
        assert!((last_hint(&log).angle.unwrap() - 180.0).abs() < 1e-9);

        t.key_down("Shift");
        assert!((t.state().rotation - 45.0).abs() < 1e-9);

        t.pointer_move(at_angle(100.0, 100.0));
        assert!((t.state().rotation - 15.0).abs() < 1e-9);

        // Releasing the key re-renders without a pointer move
        t.key_up("Shift");
        assert!((t.state().rotation - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotation_continuous_at_start() {
        let (mut t, _) = transformer(TransformerConfig::default().with_rotatable(true));
        t.set_rotation(-400.0);
        let start = at_angle(-30.0, 80.0);
        t.press(Target::Handle(HandleKind::Rotate(Anchor::TopRight)), start, LEFT);
        t.pointer_move(start);
        assert!((t.state().rotation + 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_discrete_rotation_is_multiple_of_step() {
        let (mut t, _) = transformer(TransformerConfig::default().with_rotatable(true));
        t.key_down("Shift");
        t.press(
            Target::Handle(HandleKind::Rotate(Anchor::TopLeft)),
            at_angle(0.0, 50.0),
            LEFT,
        );
        for degrees in [3.0, 22.4, 97.0, -141.0, 181.0] {
            t.pointer_move(at_angle(degrees, 50.0));
            let steps = t.state().rotation / 15.0;
            assert!((steps - steps.round()).abs() < 1e-9, "{degrees} gave {}", t.state().rotation);
        }
    }

    #[test]
    fn test_release_when_idle_is_noop() {
        let (mut t, log) = transformer(TransformerConfig::interactive());
        let seen = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&seen);
        t.subscribe(move |_| *sink.borrow_mut() += 1);

        let before = *t.state();
        t.release();
        t.release();
        assert_eq!(t.mode(), Mode::Idle);
        assert_eq!(*t.state(), before);
        assert_eq!(*seen.borrow(), 0);
        assert!(log.borrow().hints.is_empty());
    }

    #[test]
    fn test_press_during_gesture_is_ignored() {
        let (mut t, _) = transformer(TransformerConfig::interactive());
        t.press(Target::Body, Point::new(150.0, 100.0), LEFT);
        let snapshot = *t.gesture().unwrap();

        assert_eq!(t.press(Target::Container, Point::new(5.0, 5.0), LEFT), Mode::Moving);
        assert_eq!(
            t.press(Target::Handle(HandleKind::Rotate(Anchor::TopLeft)), Point::ZERO, LEFT),
            Mode::Moving
        );
        assert_eq!(*t.gesture().unwrap(), snapshot);
        assert!(t.state().selected);
    }

    #[test]
    fn test_selection() {
        let (mut t, _) = transformer(TransformerConfig::default());
        // Not movable, still selectable
        assert_eq!(t.press(Target::Body, Point::new(150.0, 100.0), LEFT), Mode::Idle);
        assert!(t.state().selected);

        t.press(Target::Container, Point::new(900.0, 400.0), LEFT);
        assert!(!t.state().selected);

        t.press(Target::Body, Point::new(150.0, 100.0), MouseButton::Right);
        assert!(t.state().selected);
    }

    #[test]
    fn test_secondary_button_does_not_start_gesture() {
        let (mut t, _) = transformer(TransformerConfig::interactive());
        assert_eq!(t.press(Target::Body, Point::new(150.0, 100.0), MouseButton::Middle), Mode::Idle);
        assert!(!t.is_transforming());
    }

    #[test]
    fn test_disabled_capabilities() {
        let (mut t, _) = transformer(TransformerConfig::default());
        let resize = Target::Handle(HandleKind::Resize(Anchor::Top));
        let rotate = Target::Handle(HandleKind::Rotate(Anchor::TopLeft));
        assert_eq!(t.press(resize, Point::new(200.0, 50.0), LEFT), Mode::Idle);
        assert_eq!(t.press(rotate, Point::new(90.0, 40.0), LEFT), Mode::Idle);
    }

    #[test]
    fn test_hover_hints() {
        let (mut t, log) = transformer(TransformerConfig::interactive());
        t.set_rotation(90.0);

        t.hover(Target::Handle(HandleKind::Resize(Anchor::Top)));
        let hint = last_hint(&log);
        assert_eq!(hint.kind, CursorKind::Resize(ResizeDirection::N));
        assert!((hint.angle.unwrap() - 90.0).abs() < 1e-9);
        assert_eq!(
            hint.kind.resolve(hint.angle),
            CursorKind::Resize(ResizeDirection::E)
        );

        // Same target again: no new hint
        let count = log.borrow().hints.len();
        t.hover(Target::Handle(HandleKind::Resize(Anchor::Top)));
        assert_eq!(log.borrow().hints.len(), count);

        t.hover(Target::Body);
        assert_eq!(last_hint(&log).kind, CursorKind::Move);
        t.hover(Target::Container);
        assert_eq!(last_hint(&log).kind, CursorKind::Auto);
    }

    #[test]
    fn test_hover_follows_rotation_change() {
        let (mut t, log) = transformer(TransformerConfig::interactive());
        let handle = Target::Handle(HandleKind::Rotate(Anchor::TopRight));
        t.hover(handle);
        assert!((last_hint(&log).angle.unwrap() - 45.0).abs() < 1e-9);

        t.set_rotation(90.0);
        t.hover(handle);
        assert!((last_hint(&log).angle.unwrap() - 135.0).abs() < 1e-9);

        t.reset_rotation();
        t.hover(handle);
        assert!((last_hint(&log).angle.unwrap() - 45.0).abs() < 1e-9);

        // Capabilities changed: the same target now maps to Auto
        t.set_config(TransformerConfig::default());
        t.hover(handle);
        assert_eq!(last_hint(&log).kind, CursorKind::Auto);
    }

    #[test]
    fn test_hover_suppressed_during_gesture() {
        let (mut t, log) = transformer(TransformerConfig::interactive());
        t.press(Target::Body, Point::new(150.0, 100.0), LEFT);
        let count = log.borrow().hints.len();
        t.hover(Target::Handle(HandleKind::Resize(Anchor::Left)));
        t.hover(Target::Container);
        assert_eq!(log.borrow().hints.len(), count);
    }

    #[test]
    fn test_raw_event_dispatch() {
        let (mut t, _) = transformer(TransformerConfig::interactive());
        t.handle_pointer_event(PointerEvent::Down {
            position: Point::new(200.0, 100.0),
            button: LEFT,
        });
        assert_eq!(t.mode(), Mode::Moving);
        t.handle_pointer_event(PointerEvent::Move {
            position: Point::new(210.0, 125.0),
        });
        assert!((t.state().position.x - 11.0).abs() < 1e-9);
        assert!((t.state().position.y - 15.0).abs() < 1e-9);
        t.handle_pointer_event(PointerEvent::Up {
            position: Point::new(5000.0, -20.0),
            button: MouseButton::Right,
        });
        assert_eq!(t.mode(), Mode::Idle);

        // Top-left resize handle sits at the new origin (110, 75)
        t.handle_pointer_event(PointerEvent::Down {
            position: Point::new(110.0, 75.0),
            button: LEFT,
        });
        assert_eq!(t.mode(), Mode::Resizing);
    }

    #[test]
    fn test_container_resize_applies_to_next_move() {
        let (mut t, _) = transformer(TransformerConfig::default().with_movable(true));
        t.press(Target::Body, Point::new(150.0, 100.0), LEFT);
        t.set_container_size(ContainerSize::new(2000.0, 500.0));
        t.pointer_move(Point::new(250.0, 100.0));
        assert!((t.state().position.x - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_container_does_not_panic() {
        let (mut t, _) = transformer(TransformerConfig::interactive());
        t.press(Target::Body, Point::new(150.0, 100.0), LEFT);
        t.set_container_size(ContainerSize::new(0.0, 0.0));
        t.pointer_move(Point::new(160.0, 100.0));
        assert!(!t.state().position.x.is_finite());
        t.release();
        assert_eq!(t.mode(), Mode::Idle);
    }

    #[test]
    fn test_reset_rotation() {
        let (mut t, _) = transformer(TransformerConfig::interactive());
        t.set_rotation(75.0);
        t.press(Target::Handle(HandleKind::Rotate(Anchor::TopLeft)), at_angle(200.0, 90.0), LEFT);
        t.reset_rotation();
        assert!((t.state().rotation - 75.0).abs() < f64::EPSILON);
        t.release();
        t.reset_rotation();
        assert!(t.state().rotation.abs() < f64::EPSILON);
    }

    #[test]
    fn test_independent_instances() {
        let (a, log_a) = transformer(TransformerConfig::interactive());
        let (mut b, log_b) = transformer(TransformerConfig::interactive());
        assert_ne!(a.id(), b.id());
        b.hover(Target::Body);
        assert!(log_a.borrow().hints.is_empty());
        assert_eq!(log_b.borrow().hints.len(), 1);
    }
}
