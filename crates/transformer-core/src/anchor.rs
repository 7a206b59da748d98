//! Resize anchors.

use crate::error::{TransformError, TransformResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The edge or corner a resize gesture was started from.
///
/// The dragged edges follow the pointer; the opposite edges stay pinned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Top,
    Bottom,
    Left,
    Right,
}

impl Anchor {
    /// All anchors, corners first.
    pub const ALL: [Anchor; 8] = [
        Anchor::TopLeft,
        Anchor::TopRight,
        Anchor::BottomLeft,
        Anchor::BottomRight,
        Anchor::Top,
        Anchor::Bottom,
        Anchor::Left,
        Anchor::Right,
    ];

    /// The four corners.
    pub const CORNERS: [Anchor; 4] = [
        Anchor::TopLeft,
        Anchor::TopRight,
        Anchor::BottomLeft,
        Anchor::BottomRight,
    ];

    /// Signed direction per axis: -1 moves the left/top edge, +1 the
    /// right/bottom edge, 0 leaves the axis alone.
    pub fn direction(self) -> (i8, i8) {
        match self {
            Anchor::TopLeft => (-1, -1),
            Anchor::TopRight => (1, -1),
            Anchor::BottomLeft => (-1, 1),
            Anchor::BottomRight => (1, 1),
            Anchor::Top => (0, -1),
            Anchor::Bottom => (0, 1),
            Anchor::Left => (-1, 0),
            Anchor::Right => (1, 0),
        }
    }

    /// Check if this is a corner anchor.
    pub fn is_corner(self) -> bool {
        let (dx, dy) = self.direction();
        dx != 0 && dy != 0
    }

    /// Compass bearing of the anchor as seen from the element center, in
    /// degrees clockwise from north (top = 0, right = 90).
    pub fn bearing(self) -> f64 {
        match self {
            Anchor::Top => 0.0,
            Anchor::TopRight => 45.0,
            Anchor::Right => 90.0,
            Anchor::BottomRight => 135.0,
            Anchor::Bottom => 180.0,
            Anchor::BottomLeft => 225.0,
            Anchor::Left => 270.0,
            Anchor::TopLeft => 315.0,
        }
    }

    /// Kebab-case token, e.g. `"top-left"`.
    pub fn token(self) -> &'static str {
        match self {
            Anchor::TopLeft => "top-left",
            Anchor::TopRight => "top-right",
            Anchor::BottomLeft => "bottom-left",
            Anchor::BottomRight => "bottom-right",
            Anchor::Top => "top",
            Anchor::Bottom => "bottom",
            Anchor::Left => "left",
            Anchor::Right => "right",
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Anchor {
    type Err = TransformError;

    fn from_str(s: &str) -> TransformResult<Self> {
        Anchor::ALL
            .into_iter()
            .find(|anchor| anchor.token() == s)
            .ok_or_else(|| TransformError::UnknownAnchor(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        for anchor in Anchor::ALL {
            assert_eq!(anchor.token().parse::<Anchor>().unwrap(), anchor);
        }
    }

    #[test]
    fn test_unknown_token_rejected() {
        let err = "middle".parse::<Anchor>().unwrap_err();
        assert!(matches!(err, TransformError::UnknownAnchor(ref t) if t == "middle"));
        assert!("TopLeft".parse::<Anchor>().is_err());
    }

    #[test]
    fn test_corners() {
        assert!(Anchor::CORNERS.iter().all(|a| a.is_corner()));
        assert!(!Anchor::Top.is_corner());
        assert!(!Anchor::Right.is_corner());
    }

    #[test]
    fn test_serde_uses_tokens() {
        let json = serde_json::to_string(&Anchor::BottomRight).unwrap();
        assert_eq!(json, "\"bottom-right\"");
        let anchor: Anchor = serde_json::from_str("\"left\"").unwrap();
        assert_eq!(anchor, Anchor::Left);
    }
}
