//! Gesture modes, start-of-gesture snapshots and the per-mode math.

use crate::anchor::Anchor;
use crate::geometry::{angle_from_center, snap_to_step};
use kurbo::{Point, Rect, Vec2};

/// Interaction mode. Only one is active at a time; every gesture starts and
/// ends in `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Idle,
    Moving,
    Resizing,
    Rotating,
}

/// Snapshot taken when a gesture starts, in container pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Move {
        /// Pointer minus the element origin at press time.
        offset: Vec2,
    },
    Resize {
        anchor: Anchor,
        start_pointer: Point,
        start_rect: Rect,
    },
    Rotate {
        /// Element center at press time.
        center: Point,
        /// Initial rotation minus initial pointer angle.
        start_angle: f64,
        /// Cursor base angle of the handle that started the gesture.
        cursor_base: f64,
    },
}

impl Gesture {
    /// Mode this snapshot belongs to.
    pub fn mode(&self) -> Mode {
        match self {
            Gesture::Move { .. } => Mode::Moving,
            Gesture::Resize { .. } => Mode::Resizing,
            Gesture::Rotate { .. } => Mode::Rotating,
        }
    }

    /// Start a move: remember where the pointer sits relative to the origin.
    pub fn start_move(pointer: Point, origin: Point) -> Self {
        Gesture::Move {
            offset: pointer - origin,
        }
    }

    /// Start a resize from `anchor`.
    pub fn start_resize(anchor: Anchor, pointer: Point, rect: Rect) -> Self {
        Gesture::Resize {
            anchor,
            start_pointer: pointer,
            start_rect: rect,
        }
    }

    /// Start a rotation so that the first recomputation at `pointer`
    /// returns `rotation` unchanged.
    pub fn start_rotate(pointer: Point, center: Point, rotation: f64, cursor_base: f64) -> Self {
        Gesture::Rotate {
            center,
            start_angle: rotation - angle_from_center(pointer, center),
            cursor_base,
        }
    }
}

/// New element origin while moving.
pub fn move_origin(pointer: Point, offset: Vec2) -> Point {
    pointer - offset
}

/// Resize `start` from `anchor` by the pointer delta `delta`.
///
/// Edges not implicated by the anchor stay where they were, and an axis the
/// anchor does not touch is returned as is. Dragged dimensions are kept at
/// or above `min_size`; when the dragged left/top edge would push past that,
/// it stops `min_size` short of the pinned edge.
pub fn resize_rect(start: Rect, anchor: Anchor, delta: Vec2, min_size: f64) -> Rect {
    let (dir_x, dir_y) = anchor.direction();
    let (left, width) = resize_axis(start.x0, start.width(), dir_x, delta.x, min_size);
    let (top, height) = resize_axis(start.y0, start.height(), dir_y, delta.y, min_size);
    Rect::new(left, top, left + width, top + height)
}

fn resize_axis(start: f64, length: f64, direction: i8, delta: f64, min_size: f64) -> (f64, f64) {
    match direction {
        1 => (start, (length + delta).max(min_size)),
        -1 => (
            (start + delta).min(start + length - min_size),
            (length - delta).max(min_size),
        ),
        _ => (start, length),
    }
}

/// Rotation for the current pointer, optionally snapped to `snap_step`.
pub fn rotation_at(pointer: Point, center: Point, start_angle: f64, snap_step: Option<f64>) -> f64 {
    let angle = angle_from_center(pointer, center) + start_angle;
    match snap_step {
        Some(step) => snap_to_step(angle, step),
        None => angle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: f64 = 14.0;

    fn start() -> Rect {
        Rect::new(100.0, 50.0, 300.0, 150.0)
    }

    fn deltas() -> Vec<Vec2> {
        let mut out = Vec::new();
        for dx in [-1000.0, -250.0, -199.0, -50.0, 0.0, 37.5, 400.0] {
            for dy in [-1000.0, -95.0, -10.0, 0.0, 20.0, 300.0] {
                out.push(Vec2::new(dx, dy));
            }
        }
        out
    }

    #[test]
    fn test_pinned_edges_never_move() {
        let s = start();
        for anchor in Anchor::ALL {
            let (dir_x, dir_y) = anchor.direction();
            for delta in deltas() {
                let r = resize_rect(s, anchor, delta, MIN);
                match dir_x {
                    1 => assert_eq!(r.x0, s.x0, "{anchor} left moved"),
                    -1 => assert!((r.x1 - s.x1).abs() < 1e-9, "{anchor} right moved"),
                    _ => assert_eq!((r.x0, r.x1), (s.x0, s.x1), "{anchor} x moved"),
                }
                match dir_y {
                    1 => assert_eq!(r.y0, s.y0, "{anchor} top moved"),
                    -1 => assert!((r.y1 - s.y1).abs() < 1e-9, "{anchor} bottom moved"),
                    _ => assert_eq!((r.y0, r.y1), (s.y0, s.y1), "{anchor} y moved"),
                }
            }
        }
    }

    #[test]
    fn test_minimum_size_holds() {
        for anchor in Anchor::ALL {
            for delta in deltas() {
                let r = resize_rect(start(), anchor, delta, MIN);
                assert!(r.width() >= MIN - 1e-9, "{anchor} {delta:?} width {}", r.width());
                assert!(r.height() >= MIN - 1e-9, "{anchor} {delta:?} height {}", r.height());
            }
        }
    }

    #[test]
    fn test_edge_resize_leaves_short_axis_alone() {
        // Already below the minimum on the axis the anchor does not touch
        let short = Rect::new(100.0, 50.0, 300.0, 60.0);
        let r = resize_rect(short, Anchor::Left, Vec2::new(-5.0, 0.0), MIN);
        assert_eq!(r, Rect::new(95.0, 50.0, 300.0, 60.0));

        let narrow = Rect::new(100.0, 50.0, 108.0, 150.0);
        let r = resize_rect(narrow, Anchor::Top, Vec2::new(0.0, -20.0), MIN);
        assert_eq!(r, Rect::new(100.0, 30.0, 108.0, 150.0));

        let r = resize_rect(narrow, Anchor::Bottom, Vec2::new(0.0, -200.0), MIN);
        assert_eq!(r, Rect::new(100.0, 50.0, 108.0, 64.0));
    }

    #[test]
    fn test_corner_resize_moves_position() {
        let r = resize_rect(start(), Anchor::TopLeft, Vec2::new(-20.0, 10.0), MIN);
        assert_eq!(r, Rect::new(80.0, 60.0, 300.0, 150.0));

        let r = resize_rect(start(), Anchor::BottomRight, Vec2::new(50.0, 25.0), MIN);
        assert_eq!(r, Rect::new(100.0, 50.0, 350.0, 175.0));
    }

    #[test]
    fn test_edge_resize_leaves_other_axis() {
        let r = resize_rect(start(), Anchor::Left, Vec2::new(30.0, 500.0), MIN);
        assert_eq!(r, Rect::new(130.0, 50.0, 300.0, 150.0));
    }

    #[test]
    fn test_left_clamp_pins_right_edge() {
        let r = resize_rect(start(), Anchor::Left, Vec2::new(1000.0, 0.0), MIN);
        assert_eq!(r.x0, 300.0 - MIN);
        assert_eq!(r.x1, 300.0);
    }

    #[test]
    fn test_move_origin() {
        let gesture = Gesture::start_move(Point::new(150.0, 80.0), Point::new(100.0, 50.0));
        let Gesture::Move { offset } = gesture else {
            panic!("Expected move gesture");
        };
        assert_eq!(move_origin(Point::new(250.0, 80.0), offset), Point::new(200.0, 50.0));
    }

    #[test]
    fn test_rotation_continuous_at_start() {
        let center = Point::new(200.0, 100.0);
        let pointer = Point::new(260.0, 20.0);
        let Gesture::Rotate { start_angle, .. } = Gesture::start_rotate(pointer, center, 33.0, 45.0) else {
            panic!("Expected rotate gesture");
        };
        assert!((rotation_at(pointer, center, start_angle, None) - 33.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotation_snapping() {
        let center = Point::ZERO;
        let pointer = Point::new(100.0_f64.to_radians().cos(), 100.0_f64.to_radians().sin());
        let raw = rotation_at(pointer, center, -90.0, None);
        assert!((raw - 10.0).abs() < 1e-9);
        let snapped = rotation_at(pointer, center, -90.0, Some(15.0));
        assert!((snapped - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_gesture_modes() {
        let rect = start();
        assert_eq!(Gesture::start_move(Point::ZERO, Point::ZERO).mode(), Mode::Moving);
        assert_eq!(Gesture::start_resize(Anchor::Top, Point::ZERO, rect).mode(), Mode::Resizing);
        assert_eq!(Gesture::start_rotate(Point::ZERO, Point::ZERO, 0.0, 0.0).mode(), Mode::Rotating);
    }
}
