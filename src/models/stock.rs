use serde::{Deserialize, Serialize};

use crate::costing::constants::LOW_STOCK_RATIO;

/// Derived stock level relative to the item's minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    Ok,
    Low,
    Critical,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Ok => "normal",
            StockStatus::Low => "low stock",
            StockStatus::Critical => "critical",
        }
    }
}

/// A stock position for one product, with its replenishment minimum and
/// the date of the last recorded entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockItem {
    pub id: u32,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub minimum: f64,

    /// ISO date (YYYY-MM-DD) of the last entry.
    pub last_entry: String,
}

impl StockItem {
    /// Critical below minimum, low below twice the minimum, ok otherwise.
    pub fn status(&self) -> StockStatus {
        if self.quantity < self.minimum {
            StockStatus::Critical
        } else if self.quantity < self.minimum * LOW_STOCK_RATIO {
            StockStatus::Low
        } else {
            StockStatus::Ok
        }
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
