use crate::LayoutError;
use crate::geometry::Containment;
use serde::{Deserialize, Serialize};

/// Tuning knobs for the card packer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Divides the per-symbol share of the circle's area.
    ///
    /// - **Higher values**: smaller symbols, more empty space, packing almost never backtracks.
    /// - **Lower values**: denser cards, but more whole-card retries (or none succeeding at all).
    ///
    /// Defaults to `4.0`.
    pub reduction_factor: f64,

    /// Lower bound of the per-symbol random scale, in percent. Defaults to `80`.
    pub scale_percent_min: u32,

    /// Upper bound of the per-symbol random scale, in percent. Defaults to `120`.
    pub scale_percent_max: u32,

    /// How a corner is judged to lie inside the card's circle.
    pub containment: Containment,

    /// Whole-card attempts before giving up with `PackingFailed`.
    /// `None` retries forever. Defaults to `Some(10_000)`.
    pub max_card_attempts: Option<u32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            reduction_factor: 4.0,
            scale_percent_min: 80,
            scale_percent_max: 120,
            containment: Containment::default(),
            max_card_attempts: Some(10_000),
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !(self.reduction_factor.is_finite() && self.reduction_factor > 0.0) {
            return Err(LayoutError::InvalidConfig(format!(
                "reduction factor must be a positive number, got {}",
                self.reduction_factor
            )));
        }
        if self.scale_percent_min == 0 || self.scale_percent_min > self.scale_percent_max {
            return Err(LayoutError::InvalidConfig(format!(
                "scale range {}%..={}% is empty or starts at zero",
                self.scale_percent_min, self.scale_percent_max
            )));
        }
        if self.max_card_attempts == Some(0) {
            return Err(LayoutError::InvalidConfig(
                "max card attempts must be at least 1 (use no limit for unbounded retries)"
                    .to_string(),
            ));
        }
        Ok(())
    }
}
