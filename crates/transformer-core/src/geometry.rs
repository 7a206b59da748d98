//! Pure conversions between container pixels and normalized units.
//!
//! Nothing here guards against a zero container dimension: the division
//! yields infinity or NaN and the caller decides what to do with it.

use crate::transform::{ContainerSize, Position, Size, TransformState};
use kurbo::{Point, Rect, Vec2};

/// Angle snap increment in degrees.
pub const ROTATION_SNAP_STEP: f64 = 15.0;

/// Convert a pixel length to percent of a container dimension.
pub fn pixel_to_percent(px: f64, container_dimension: f64) -> f64 {
    px / container_dimension * 100.0
}

/// Convert a percent of a container dimension to pixels.
pub fn percent_to_pixel(percent: f64, container_dimension: f64) -> f64 {
    percent / 100.0 * container_dimension
}

/// Angle in degrees from `center` to `pointer`, screen convention (y down,
/// 0° pointing right, positive clockwise).
pub fn angle_from_center(pointer: Point, center: Point) -> f64 {
    (pointer.y - center.y).atan2(pointer.x - center.x).to_degrees()
}

/// Snap an angle to the nearest multiple of `step`.
///
/// Unlike cursor angles, the result is not wrapped.
pub fn snap_to_step(angle: f64, step: f64) -> f64 {
    (angle / step).round() * step
}

/// Wrap an angle into `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Rotate `point` about `center` by `degrees` (clockwise on screen).
pub fn rotate_point(point: Point, center: Point, degrees: f64) -> Point {
    let (sin_r, cos_r) = degrees.to_radians().sin_cos();
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    Point::new(
        center.x + dx * cos_r - dy * sin_r,
        center.y + dx * sin_r + dy * cos_r,
    )
}

/// Viewport point relative to a container's padding box, which is the box
/// percent offsets and sizes resolve against. `border_origin` is the top-left
/// of the border box and `border` the left/top border widths.
pub fn padding_box_point(client: Point, border_origin: Point, border: Vec2) -> Point {
    client - (border_origin.to_vec2() + border)
}

/// Unrotated pixel box of the element inside the container.
pub fn element_rect(state: &TransformState, container: ContainerSize) -> Rect {
    let x0 = percent_to_pixel(state.position.x, container.width);
    let y0 = percent_to_pixel(state.position.y, container.height);
    let width = percent_to_pixel(state.size.width, container.width);
    let height = percent_to_pixel(state.size.height, container.height);
    Rect::new(x0, y0, x0 + width, y0 + height)
}

/// Convert a pixel box back to normalized position and size.
pub fn normalize_rect(rect: Rect, container: ContainerSize) -> (Position, Size) {
    (
        Position::new(
            pixel_to_percent(rect.x0, container.width),
            pixel_to_percent(rect.y0, container.height),
        ),
        Size::new(
            pixel_to_percent(rect.width(), container.width),
            pixel_to_percent(rect.height(), container.height),
        ),
    )
}
