//! Configuration validation utilities

use crate::{ConfigError, Result, RingChartConfig};
use ring_charts_shared::SurfaceOptions;

/// Upper bound on pointer travel that still reads as a tap.
const MAX_TOUCH_SLOP: f32 = 64.0;

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration
    pub fn validate(config: &RingChartConfig) -> Result<()> {
        Self::validate_surface(&config.surface)
    }

    fn validate_surface(surface: &SurfaceOptions) -> Result<()> {
        surface.validate()?;

        if surface.touch_slop > MAX_TOUCH_SLOP {
            return Err(ConfigError::Validation(format!(
                "Invalid touch slop: {}. Must be at most {}",
                surface.touch_slop, MAX_TOUCH_SLOP
            )));
        }

        Ok(())
    }
}
