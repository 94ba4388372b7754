use crate::costing::{RecipeCostBreakdown, YieldMetrics};
use crate::models::{Ingredient, Recipe, StockItem, StockStatus};

/// Display one set of yield metrics, already display-rounded.
pub fn display_yield_metrics(metrics: &YieldMetrics) {
    println!("Correction factor:   {:.2}", metrics.correction_factor);
    println!("Yield:               {:.1}%", metrics.yield_percentage);
    println!("Loss:                {:.1}%", metrics.loss_percentage);
    println!("Effective unit cost: {:.2}", metrics.effective_unit_cost);

    if metrics.loss_percentage < 0.0 {
        println!("Note: net weight exceeds gross weight (yield gain); check the entry.");
    }
}

/// Display the ingredient table with display-rounded figures.
pub fn display_ingredient_table(ingredients: &[&Ingredient]) {
    if ingredients.is_empty() {
        println!("No ingredients found.");
        return;
    }

    let name_width = ingredients
        .iter()
        .map(|i| i.name.len())
        .max()
        .unwrap_or(10)
        .max(10);
    let category_width = ingredients
        .iter()
        .map(|i| i.category.len())
        .max()
        .unwrap_or(8)
        .max(8);

    println!();
    println!("=== Ingredients ({} items) ===", ingredients.len());
    println!();
    println!(
        "{:>4}  {:<name$}  {:<cat$}  {:<4}  {:>8}  {:>7}  {:>7}  {:>7}  {:>10}",
        "id",
        "name",
        "category",
        "unit",
        "cost",
        "yield%",
        "loss%",
        "factor",
        "real cost",
        name = name_width,
        cat = category_width,
    );

    for ingredient in ingredients {
        let display = ingredient
            .metrics
            .display(ingredient.measurement.gross_cost);

        println!(
            "{:>4}  {:<name$}  {:<cat$}  {:<4}  {:>8.2}  {:>7.1}  {:>7.1}  {:>7.2}  {:>10.2}",
            format!("#{}", ingredient.id),
            ingredient.name,
            ingredient.category,
            ingredient.unit,
            ingredient.measurement.gross_cost,
            display.yield_percentage,
            display.loss_percentage,
            display.correction_factor,
            display.effective_unit_cost,
            name = name_width,
            cat = category_width,
        );
    }

    println!();
}

/// Display recipes with their computed cost breakdowns.
pub fn display_recipes(recipes: &[(&Recipe, RecipeCostBreakdown)]) {
    if recipes.is_empty() {
        println!("No recipes yet. Use 'new-recipe' to compose one.");
        return;
    }

    for (recipe, breakdown) in recipes {
        println!();
        println!(
            "=== {} — {:.2} per {} ===",
            recipe.name, breakdown.total_cost, recipe.final_unit
        );

        for line in &breakdown.lines {
            println!(
                "  {:<24} {:>8} {:<8} {:>8.2}",
                line.ingredient, line.quantity, line.unit, line.line_cost
            );
        }

        println!("  Ingredient cost: {:.2}", breakdown.ingredient_cost);
        println!("  Correction factor: {:.2}x", recipe.correction_factor);
    }

    println!();
}

/// Display the stock list with an alert line for low/critical items.
pub fn display_stock(stock: &[StockItem]) {
    if stock.is_empty() {
        println!("No stock items. Use 'stock-entry' to record one.");
        return;
    }

    let critical = stock
        .iter()
        .filter(|s| s.status() == StockStatus::Critical)
        .count();
    let low = stock
        .iter()
        .filter(|s| s.status() == StockStatus::Low)
        .count();

    println!();
    println!("=== Stock ({} items) ===", stock.len());
    if critical > 0 || low > 0 {
        println!(
            "Attention: {} critical, {} low on stock.",
            critical, low
        );
    }
    println!();

    let name_width = stock.iter().map(|s| s.name.len()).max().unwrap_or(10).max(10);

    for item in stock {
        println!(
            "{:>4}  {:<name$}  {:>9.2} {:<6}  min {:>7.2}  last entry {}  [{}]",
            format!("#{}", item.id),
            item.name,
            item.quantity,
            item.unit,
            item.minimum,
            item.last_entry,
            item.status().label(),
            name = name_width,
        );
    }

    println!();
}

/// Display default and custom categories.
pub fn display_categories(defaults: &[&str], custom: &[String]) {
    println!();
    println!(
        "=== Categories ({} total) ===",
        defaults.len() + custom.len()
    );
    println!();

    for category in defaults {
        println!("  {}", category);
    }
    for category in custom {
        println!("  {} (custom)", category);
    }

    println!();
}

/// Display the back-office summary counts.
pub fn display_summary(
    ingredient_count: usize,
    recipe_count: usize,
    stock_count: usize,
    average_yield: Option<f64>,
    catalog_value: f64,
    critical: usize,
    low: usize,
) {
    println!();
    println!("=== Summary ===");
    println!("Ingredients cataloged: {}", ingredient_count);
    println!("Recipes:               {}", recipe_count);
    println!("Stock items:           {}", stock_count);
    println!("Catalog value:         {:.2}", catalog_value);

    match average_yield {
        Some(avg) => println!("Average yield:         {:.1}%", avg),
        None => println!("Average yield:         n/a"),
    }

    if critical > 0 || low > 0 {
        println!("Stock alerts:          {} critical, {} low", critical, low);
    }

    println!();
}
