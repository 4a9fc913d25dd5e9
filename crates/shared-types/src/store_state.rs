// Surface options and the snapshot that survives a surface teardown.

use serde::{Deserialize, Serialize};

use crate::{Category, RingChartError, RingChartResult};

/// Ring thickness used when the host does not configure one.
pub const DEFAULT_STROKE_WIDTH: f32 = 80.0;

/// Maximum pointer travel, in surface units, that still counts as a tap.
pub const DEFAULT_TOUCH_SLOP: f32 = 8.0;

/// Host-tunable surface settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SurfaceOptions {
    pub stroke_width: f32,
    pub touch_slop: f32,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            stroke_width: DEFAULT_STROKE_WIDTH,
            touch_slop: DEFAULT_TOUCH_SLOP,
        }
    }
}

impl SurfaceOptions {
    pub fn validate(&self) -> RingChartResult<()> {
        validate_stroke_width(self.stroke_width)?;

        if !self.touch_slop.is_finite() || self.touch_slop < 0.0 {
            return Err(RingChartError::InvalidOption {
                field: "touchSlop".to_string(),
                message: format!("must be a finite value >= 0, got {}", self.touch_slop),
            });
        }

        Ok(())
    }
}

/// Stroke widths must be finite and non-negative.
pub fn validate_stroke_width(value: f32) -> RingChartResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(RingChartError::InvalidStrokeWidth { value });
    }
    Ok(())
}

/// Amounts must be finite and non-negative.
pub fn validate_amount(category: &str, amount: f64) -> RingChartResult<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(RingChartError::InvalidAmount {
            category: category.to_string(),
            amount,
        });
    }
    Ok(())
}

/// Minimal state needed to redraw the same ring after the surface is
/// recreated. Geometry is deliberately absent; it is rebuilt from these
/// fields once the new surface reports its size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedState {
    pub categories: Vec<Category>,
    pub stroke_width: f32,
}

impl SavedState {
    pub fn validate(&self) -> RingChartResult<()> {
        validate_stroke_width(self.stroke_width)?;

        for (index, category) in self.categories.iter().enumerate() {
            validate_amount(&category.name, category.amount)?;

            if self.categories[..index]
                .iter()
                .any(|other| other.name == category.name)
            {
                return Err(RingChartError::StateDecode {
                    message: format!("duplicate category '{}'", category.name),
                });
            }
        }

        Ok(())
    }

    /// Encode into the opaque blob handed to the host's persistence layer.
    pub fn to_bytes(&self) -> RingChartResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| RingChartError::StateEncode {
            message: e.to_string(),
        })
    }

    /// Decode and validate a blob produced by [`SavedState::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> RingChartResult<Self> {
        let state: SavedState =
            bincode::deserialize(bytes).map_err(|e| RingChartError::StateDecode {
                message: e.to_string(),
            })?;

        state.validate()?;
        log::trace!(
            "Decoded saved state: {} categories, stroke width {}",
            state.categories.len(),
            state.stroke_width
        );
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rgb;

    fn category(name: &str, amount: f64) -> Category {
        Category {
            name: name.to_string(),
            amount,
            color: Rgb::new(10, 20, 30),
        }
    }

    #[test]
    fn test_default_options_are_valid() {
        let options = SurfaceOptions::default();
        assert_eq!(options.stroke_width, 80.0);
        assert_eq!(options.touch_slop, 8.0);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_invalid_options() {
        let options = SurfaceOptions {
            stroke_width: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            options.validate(),
            Err(RingChartError::InvalidStrokeWidth { .. })
        ));

        let options = SurfaceOptions {
            touch_slop: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            options.validate(),
            Err(RingChartError::InvalidOption { .. })
        ));
    }

    #[test]
    fn test_blob_round_trip() {
        let state = SavedState {
            categories: vec![category("Rent", 900.0), category("Food", 250.5)],
            stroke_width: 42.0,
        };

        let bytes = state.to_bytes().unwrap();
        let restored = SavedState::from_bytes(&bytes).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn test_garbage_blob_is_rejected() {
        let result = SavedState::from_bytes(&[0xFF, 0x01]);
        assert!(matches!(result, Err(RingChartError::StateDecode { .. })));
    }

    #[test]
    fn test_snapshot_validation() {
        let negative = SavedState {
            categories: vec![category("Refund", -5.0)],
            stroke_width: 10.0,
        };
        assert!(matches!(
            negative.validate(),
            Err(RingChartError::InvalidAmount { .. })
        ));

        let duplicate = SavedState {
            categories: vec![category("A", 1.0), category("A", 2.0)],
            stroke_width: 10.0,
        };
        assert!(matches!(
            duplicate.validate(),
            Err(RingChartError::StateDecode { .. })
        ));
    }

    #[test]
    fn test_json_field_names() {
        let state = SavedState {
            categories: vec![],
            stroke_width: 12.0,
        };
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"categories":[],"strokeWidth":12.0}"#);
    }
}
