use serde::{Deserialize, Serialize};

use crate::costing::constants::{round_to, FACTOR_DECIMALS, PERCENT_DECIMALS};
use crate::error::{CostbookError, Result};

/// Raw purchase and trim measurements for one ingredient.
///
/// Constructed transiently from form input at submission time; the
/// calculator never mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IngredientMeasurement {
    /// Weight or volume purchased, before trimming or cooking loss.
    pub gross_weight: f64,

    /// Usable weight or volume after trimming or cooking loss.
    pub net_weight: f64,

    /// Cost paid for the gross quantity.
    pub gross_cost: f64,
}

impl IngredientMeasurement {
    pub fn new(gross_weight: f64, net_weight: f64, gross_cost: f64) -> Self {
        Self {
            gross_weight,
            net_weight,
            gross_cost,
        }
    }

    /// Check that both weights are finite and positive and the cost is
    /// finite and non-negative.
    fn validate(&self) -> Result<()> {
        if !self.gross_weight.is_finite() || self.gross_weight <= 0.0 {
            return Err(CostbookError::InvalidMeasurement(format!(
                "gross weight must be positive, got {}",
                self.gross_weight
            )));
        }
        if !self.net_weight.is_finite() || self.net_weight <= 0.0 {
            return Err(CostbookError::InvalidMeasurement(format!(
                "net weight must be positive, got {}",
                self.net_weight
            )));
        }
        if !self.gross_cost.is_finite() || self.gross_cost < 0.0 {
            return Err(CostbookError::InvalidMeasurement(format!(
                "gross cost must be non-negative, got {}",
                self.gross_cost
            )));
        }
        Ok(())
    }
}

/// Cost and yield metrics derived from one measurement.
///
/// `yield_percentage + loss_percentage == 100` for every valid input.
/// A net weight above the gross weight (water absorption, soaking) gives
/// a factor below 1 and a negative loss; both pass through unclamped so
/// the caller can decide whether to flag them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldMetrics {
    /// Gross over net; multiplier from raw unit cost to usable-unit cost.
    pub correction_factor: f64,

    /// Usable share of the purchased quantity, in percent.
    pub yield_percentage: f64,

    /// Complement of the yield percentage.
    pub loss_percentage: f64,

    /// True cost per usable unit after preparation loss.
    pub effective_unit_cost: f64,
}

impl YieldMetrics {
    /// Display-rounded copy: factor and cost to two decimals, percentages
    /// to one. The quoted unit cost is priced from the published
    /// two-decimal factor, so the figures on a printed costing sheet agree
    /// with each other (e.g. 32.50 at factor 1.18 quotes as 38.35).
    pub fn display(&self, gross_cost: f64) -> YieldMetrics {
        let factor = round_to(self.correction_factor, FACTOR_DECIMALS);
        YieldMetrics {
            correction_factor: factor,
            yield_percentage: round_to(self.yield_percentage, PERCENT_DECIMALS),
            loss_percentage: round_to(self.loss_percentage, PERCENT_DECIMALS),
            effective_unit_cost: round_to(gross_cost * factor, FACTOR_DECIMALS),
        }
    }
}

/// Compute full-precision metrics from a measurement.
///
/// Pure and deterministic: identical input yields bit-identical output.
/// No rounding happens here, so the result can feed further calculations
/// (recipe costing) without compounding error.
pub fn compute_yield_metrics(measurement: &IngredientMeasurement) -> Result<YieldMetrics> {
    measurement.validate()?;

    let gross = measurement.gross_weight;
    let net = measurement.net_weight;

    let correction_factor = gross / net;

    Ok(YieldMetrics {
        correction_factor,
        yield_percentage: (net / gross) * 100.0,
        loss_percentage: ((gross - net) / gross) * 100.0,
        effective_unit_cost: measurement.gross_cost * correction_factor,
    })
}

/// Compute metrics rounded for display: factor and cost to two decimals,
/// percentages to one.
pub fn compute_display_metrics(measurement: &IngredientMeasurement) -> Result<YieldMetrics> {
    let raw = compute_yield_metrics(measurement)?;
    Ok(raw.display(measurement.gross_cost))
}
