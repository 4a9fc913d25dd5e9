//! Common error types used across all ring chart crates

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base error type for ring chart operations.
///
/// Empty data sets, zero totals and taps outside the ring are ordinary
/// outcomes and never show up here.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum RingChartError {
    #[error("Invalid amount {amount} for category '{category}'")]
    InvalidAmount { category: String, amount: f64 },

    #[error("Invalid stroke width: {value}")]
    InvalidStrokeWidth { value: f32 },

    #[error("Invalid option '{field}': {message}")]
    InvalidOption { field: String, message: String },

    #[error("Failed to encode saved state: {message}")]
    StateEncode { message: String },

    #[error("Failed to decode saved state: {message}")]
    StateDecode { message: String },
}

/// Result type alias for ring chart operations
pub type RingChartResult<T> = Result<T, RingChartError>;

impl RingChartError {
    /// Convert to a JSON string for hosts that surface errors as text
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"type":"StateEncode","details":{"message":"Failed to serialize error"}}"#
                .to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = RingChartError::InvalidAmount {
            category: "Food".to_string(),
            amount: -3.0,
        };

        let json = error.to_json();
        assert!(json.contains("InvalidAmount"));
        assert!(json.contains("Food"));

        let back: RingChartError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, error);
    }

    #[test]
    fn test_error_display() {
        let error = RingChartError::InvalidStrokeWidth { value: -1.0 };
        assert_eq!(error.to_string(), "Invalid stroke width: -1");
    }
}
