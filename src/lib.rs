pub mod catalog;
pub mod cli;
pub mod costing;
pub mod error;
pub mod interface;
pub mod models;

pub use error::{CostbookError, Result};
pub use models::{Ingredient, Recipe, StockItem};
