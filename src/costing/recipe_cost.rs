use std::collections::HashMap;

use crate::error::{CostbookError, Result};
use crate::models::Recipe;

/// Cost contribution of a single recipe line.
#[derive(Debug, Clone)]
pub struct RecipeLineCost {
    pub ingredient: String,
    pub quantity: f64,
    pub unit: String,
    pub line_cost: f64,
}

/// Full cost breakdown for one recipe.
#[derive(Debug, Clone)]
pub struct RecipeCostBreakdown {
    pub lines: Vec<RecipeLineCost>,

    /// Sum of line costs before the recipe-level correction factor.
    pub ingredient_cost: f64,

    /// Ingredient cost scaled by the recipe correction factor.
    pub total_cost: f64,
}

/// Cost a recipe from an index of effective unit costs keyed by lowercase
/// ingredient name.
///
/// Inputs stay unrounded; rendering rounds at the output boundary. An
/// ingredient name missing from the index is an error rather than a zero
/// line, so a renamed ingredient cannot silently cheapen a recipe.
pub fn cost_recipe(
    recipe: &Recipe,
    unit_costs: &HashMap<String, f64>,
) -> Result<RecipeCostBreakdown> {
    let mut lines = Vec::with_capacity(recipe.lines.len());
    let mut ingredient_cost = 0.0;

    for line in &recipe.lines {
        let unit_cost = unit_costs
            .get(&line.ingredient.to_lowercase())
            .ok_or_else(|| CostbookError::IngredientNotFound(line.ingredient.clone()))?;

        let line_cost = line.quantity * unit_cost;
        ingredient_cost += line_cost;

        lines.push(RecipeLineCost {
            ingredient: line.ingredient.clone(),
            quantity: line.quantity,
            unit: line.unit.clone(),
            line_cost,
        });
    }

    Ok(RecipeCostBreakdown {
        lines,
        ingredient_cost,
        total_cost: ingredient_cost * recipe.correction_factor,
    })
}
