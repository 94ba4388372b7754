use std::path::Path;

use crate::error::Result;
use crate::models::Ingredient;

/// Export the ingredient table to CSV, one row per ingredient with the
/// same display-rounded figures the table renders.
pub fn export_ingredients_csv<P: AsRef<Path>>(path: P, ingredients: &[&Ingredient]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record([
        "id",
        "name",
        "category",
        "unit",
        "gross_weight",
        "net_weight",
        "gross_cost",
        "correction_factor",
        "yield_pct",
        "loss_pct",
        "effective_unit_cost",
    ])?;

    for ingredient in ingredients {
        let display = ingredient
            .metrics
            .display(ingredient.measurement.gross_cost);
        writer.write_record([
            ingredient.id.to_string(),
            ingredient.name.clone(),
            ingredient.category.clone(),
            ingredient.unit.clone(),
            format!("{}", ingredient.measurement.gross_weight),
            format!("{}", ingredient.measurement.net_weight),
            format!("{:.2}", ingredient.measurement.gross_cost),
            format!("{:.2}", display.correction_factor),
            format!("{:.1}", display.yield_percentage),
            format!("{:.1}", display.loss_percentage),
            format!("{:.2}", display.effective_unit_cost),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
