use serde::{Deserialize, Serialize};

use crate::costing::{IngredientMeasurement, YieldMetrics};

/// A catalog ingredient: identity and display fields plus the measurement
/// it was costed from and the metrics derived from it.
///
/// Metrics are stored at full precision and recomputed whenever the
/// measurement changes; rendering rounds them at the output boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub unit: String,
    pub measurement: IngredientMeasurement,
    pub metrics: YieldMetrics,
}

impl Ingredient {
    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
