use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::costing::constants::{
    DEFAULT_RECIPE_FACTOR, FUZZY_MATCH_THRESHOLD, RECIPE_UNITS, UNITS,
};
use crate::costing::IngredientMeasurement;
use crate::error::{CostbookError, Result};
use crate::models::{Ingredient, RecipeLine};

/// Validated form input for creating or editing one ingredient.
#[derive(Debug, Clone)]
pub struct IngredientForm {
    pub name: String,
    pub category: String,
    pub unit: String,
    pub measurement: IngredientMeasurement,
}

fn parse_number(input: &str, label: &str) -> Result<f64> {
    input
        .trim()
        .parse()
        .map_err(|_| CostbookError::InvalidInput(format!("{}: not a number", label)))
}

/// Prompt for a number, optionally pre-filled with a default.
fn prompt_number(label: &str, default: Option<f64>) -> Result<f64> {
    let mut input = Input::new().with_prompt(label);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    let text: String = input.interact_text()?;
    parse_number(&text, label)
}

fn prompt_text(label: &str, default: Option<&str>) -> Result<String> {
    let mut input = Input::new().with_prompt(label);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    Ok(input.interact_text()?)
}

fn prompt_select(label: &str, options: &[String], default: usize) -> Result<usize> {
    Ok(Select::new()
        .with_prompt(label)
        .items(options)
        .default(default)
        .interact()?)
}

/// Collect the full ingredient form. When editing, `current` pre-fills
/// every field as the default.
pub fn prompt_ingredient_form(
    categories: &[String],
    current: Option<&Ingredient>,
) -> Result<IngredientForm> {
    let name = prompt_text("Ingredient name", current.map(|i| i.name.as_str()))?;

    let category_default = current
        .and_then(|i| categories.iter().position(|c| *c == i.category))
        .unwrap_or(0);
    let category_idx = prompt_select("Category", categories, category_default)?;

    let unit_labels: Vec<String> = UNITS.iter().map(|(_, label)| label.to_string()).collect();
    let unit_default = current
        .and_then(|i| UNITS.iter().position(|(value, _)| *value == i.unit))
        .unwrap_or(0);
    let unit_idx = prompt_select("Unit of measure", &unit_labels, unit_default)?;

    let gross_cost = prompt_number(
        "Cost for the gross quantity",
        current.map(|i| i.measurement.gross_cost),
    )?;
    let gross_weight = prompt_number(
        "Gross weight (as purchased)",
        current.map(|i| i.measurement.gross_weight),
    )?;
    let net_weight = prompt_number(
        "Net weight (after trim/cooking loss)",
        current.map(|i| i.measurement.net_weight),
    )?;

    Ok(IngredientForm {
        name: name.trim().to_string(),
        category: categories[category_idx].clone(),
        unit: UNITS[unit_idx].0.to_string(),
        measurement: IngredientMeasurement::new(gross_weight, net_weight, gross_cost),
    })
}

/// Pick one cataloged ingredient by name, exact match first, then fuzzy.
///
/// Returns None when the user gives up on the entered name.
fn match_ingredient<'a>(
    input: &str,
    available: &[&'a Ingredient],
) -> Result<Option<&'a Ingredient>> {
    let exact = available
        .iter()
        .find(|i| i.name.to_lowercase() == input.to_lowercase())
        .copied();
    if let Some(ingredient) = exact {
        return Ok(Some(ingredient));
    }

    let mut candidates: Vec<(&Ingredient, f64)> = available
        .iter()
        .map(|i| (*i, jaro_winkler(&i.name.to_lowercase(), &input.to_lowercase())))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        println!("No cataloged ingredient matches '{}'", input);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let ingredient = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", ingredient.name))
            .default(true)
            .interact()?;
        return Ok(confirm.then_some(ingredient));
    }

    let mut options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(i, _)| i.name.clone())
        .collect();
    let none_idx = options.len();
    options.push("None of these".to_string());

    let selection = prompt_select("Which did you mean?", &options, 0)?;
    if selection == none_idx {
        return Ok(None);
    }
    Ok(Some(candidates[selection].0))
}

/// Compose a recipe interactively: name, ingredient lines (with fuzzy
/// name matching against the catalog), final unit, and correction factor.
pub fn prompt_recipe_form(
    available: &[&Ingredient],
) -> Result<(String, Vec<RecipeLine>, String, f64)> {
    let name = prompt_text("Recipe name", None)?;

    let mut lines = Vec::new();
    loop {
        let input: String = Input::new()
            .with_prompt("Add an ingredient (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        let Some(ingredient) = match_ingredient(input, available)? else {
            continue;
        };

        let quantity = prompt_number(&format!("Quantity of {}", ingredient.name), None)?;
        let unit = prompt_text("Line unit", Some(&ingredient.unit))?;

        lines.push(RecipeLine {
            ingredient: ingredient.name.clone(),
            quantity,
            unit: unit.trim().to_string(),
        });
        println!("Added: {}", ingredient.name);
    }

    let recipe_units: Vec<String> = RECIPE_UNITS.iter().map(|u| u.to_string()).collect();
    let unit_idx = prompt_select("Final unit", &recipe_units, 0)?;

    let factor = prompt_number("Recipe correction factor", Some(DEFAULT_RECIPE_FACTOR))?;

    Ok((
        name.trim().to_string(),
        lines,
        recipe_units[unit_idx].clone(),
        factor,
    ))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
