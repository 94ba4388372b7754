use serde::{Deserialize, Serialize};

use crate::costing::constants::DEFAULT_RECIPE_FACTOR;

/// One ingredient used by a recipe, referenced by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeLine {
    pub ingredient: String,
    pub quantity: f64,
    pub unit: String,
}

/// A recipe: its ingredient lines plus a recipe-level correction factor
/// for preparation loss on the assembled dish.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    pub lines: Vec<RecipeLine>,

    /// Unit the finished recipe is sold or portioned in.
    pub final_unit: String,

    #[serde(default = "default_factor")]
    pub correction_factor: f64,
}

fn default_factor() -> f64 {
    DEFAULT_RECIPE_FACTOR
}
