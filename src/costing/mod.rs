pub mod constants;
pub mod recipe_cost;
pub mod yield_metrics;

pub use constants::*;
pub use recipe_cost::{cost_recipe, RecipeCostBreakdown, RecipeLineCost};
pub use yield_metrics::{
    compute_display_metrics, compute_yield_metrics, IngredientMeasurement, YieldMetrics,
};
