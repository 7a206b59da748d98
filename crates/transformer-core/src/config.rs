//! Per-instance transformer configuration.

use crate::error::{TransformError, TransformResult};
use crate::geometry::ROTATION_SNAP_STEP;
use serde::{Deserialize, Serialize};

/// Minimum element width/height in pixels enforced while resizing.
pub const MIN_SIZE_PX: f64 = 14.0;
/// Handle hit tolerance in pixels.
pub const HANDLE_HIT_TOLERANCE: f64 = 8.0;
/// Diagonal distance from a corner to its rotate handle, in pixels.
pub const ROTATE_HANDLE_OFFSET: f64 = 16.0;
/// Key that engages discrete rotation.
pub const DEFAULT_SNAP_KEY: &str = "Shift";

/// Capabilities and tuning for one transformer.
///
/// Every field has a default, so partial JSON is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformerConfig {
    /// Enables dragging the element body.
    pub movable: bool,
    /// Enables the resize handles.
    pub resizable: bool,
    /// Enables the rotate handles.
    pub rotatable: bool,
    pub min_size_px: f64,
    /// Rotation step in degrees while the snap key is held.
    pub snap_step: f64,
    /// Key name (as reported by the host) that engages discrete rotation.
    pub snap_key: String,
    pub handle_tolerance: f64,
    pub rotate_handle_offset: f64,
}

impl Default for TransformerConfig {
    fn default() -> Self {
        Self {
            movable: false,
            resizable: false,
            rotatable: false,
            min_size_px: MIN_SIZE_PX,
            snap_step: ROTATION_SNAP_STEP,
            snap_key: DEFAULT_SNAP_KEY.to_string(),
            handle_tolerance: HANDLE_HIT_TOLERANCE,
            rotate_handle_offset: ROTATE_HANDLE_OFFSET,
        }
    }
}

impl TransformerConfig {
    /// Config with move, resize and rotate all enabled.
    pub fn interactive() -> Self {
        Self {
            movable: true,
            resizable: true,
            rotatable: true,
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) JSON configuration and validate it.
    pub fn from_json(json: &str) -> TransformResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the numeric tuning values. Sizes, the snap step and the hit
    /// tolerance must be positive; the rotate handle offset may be zero.
    pub fn validate(&self) -> TransformResult<()> {
        let positive = [
            ("min_size_px", self.min_size_px),
            ("snap_step", self.snap_step),
            ("handle_tolerance", self.handle_tolerance),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TransformError::ConfigValue {
                    field,
                    expected: "positive",
                    value,
                });
            }
        }
        if !(self.rotate_handle_offset.is_finite() && self.rotate_handle_offset >= 0.0) {
            return Err(TransformError::ConfigValue {
                field: "rotate_handle_offset",
                expected: "non-negative",
                value: self.rotate_handle_offset,
            });
        }
        Ok(())
    }

    pub fn with_movable(mut self, movable: bool) -> Self {
        self.movable = movable;
        self
    }

    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    pub fn with_rotatable(mut self, rotatable: bool) -> Self {
        self.rotatable = rotatable;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_disable_everything() {
        let config = TransformerConfig::default();
        assert!(!config.movable && !config.resizable && !config.rotatable);
        assert!((config.min_size_px - 14.0).abs() < f64::EPSILON);
        assert!((config.snap_step - 15.0).abs() < f64::EPSILON);
        assert_eq!(config.snap_key, "Shift");
    }

    #[test]
    fn test_partial_json() {
        let config = TransformerConfig::from_json(r#"{"movable": true, "min_size_px": 20}"#).unwrap();
        assert!(config.movable);
        assert!(!config.rotatable);
        assert!((config.min_size_px - 20.0).abs() < f64::EPSILON);
        assert_eq!(config.snap_key, "Shift");
    }

    #[test]
    fn test_invalid_json() {
        let err = TransformerConfig::from_json(r#"{"movable": "yes"}"#).unwrap_err();
        assert!(matches!(err, TransformError::Config(_)));
    }

    #[test]
    fn test_rejects_bad_tuning() {
        let err = TransformerConfig::from_json(r#"{"snap_step": 0}"#).unwrap_err();
        assert!(matches!(err, TransformError::ConfigValue { field: "snap_step", .. }));

        let err = TransformerConfig::from_json(r#"{"min_size_px": -3}"#).unwrap_err();
        assert!(matches!(err, TransformError::ConfigValue { field: "min_size_px", .. }));

        let err = TransformerConfig::from_json(r#"{"handle_tolerance": -1}"#).unwrap_err();
        assert!(matches!(err, TransformError::ConfigValue { field: "handle_tolerance", .. }));

        let err = TransformerConfig::from_json(r#"{"rotate_handle_offset": -1}"#).unwrap_err();
        assert!(matches!(
            err,
            TransformError::ConfigValue { field: "rotate_handle_offset", .. }
        ));

        assert!(TransformerConfig::from_json(r#"{"rotate_handle_offset": 0}"#).is_ok());
        assert!(TransformerConfig::interactive().validate().is_ok());
    }
}
