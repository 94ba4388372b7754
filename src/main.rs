use clap::Parser;
use std::path::Path;

use costbook::catalog::{export_ingredients_csv, load_catalog, save_catalog, CatalogManager};
use costbook::cli::{Cli, Command};
use costbook::costing::constants::DEFAULT_CATEGORIES;
use costbook::costing::{compute_display_metrics, cost_recipe, IngredientMeasurement};
use costbook::error::Result;
use costbook::interface::{
    display_categories, display_ingredient_table, display_recipes, display_stock, display_summary,
    display_yield_metrics, prompt_ingredient_form, prompt_recipe_form, prompt_yes_no,
};
use costbook::models::StockStatus;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Calc { gross, net, cost } => cmd_calc(gross, net, cost),
        Command::Add => cmd_add(&cli.file),
        Command::List { category, search } => {
            cmd_list(&cli.file, category.as_deref(), search.as_deref())
        }
        Command::Edit { ingredient } => cmd_edit(&cli.file, &ingredient),
        Command::Remove { ingredient, yes } => cmd_remove(&cli.file, &ingredient, yes),
        Command::NewRecipe => cmd_new_recipe(&cli.file),
        Command::Recipes => cmd_recipes(&cli.file),
        Command::Stock => cmd_stock(&cli.file),
        Command::StockEntry {
            name,
            quantity,
            unit,
            minimum,
        } => cmd_stock_entry(&cli.file, &name, quantity, unit.as_deref(), minimum),
        Command::Categories => cmd_categories(&cli.file),
        Command::AddCategory { name } => cmd_add_category(&cli.file, &name),
        Command::Export { out } => cmd_export(&cli.file, &out),
        Command::Summary => cmd_summary(&cli.file),
    }
}

/// Load a manager for read commands; None when the file does not exist.
fn load_manager(file_path: &str) -> Result<Option<CatalogManager>> {
    let path = Path::new(file_path);
    if !path.exists() {
        eprintln!("Catalog file not found: {}", file_path);
        eprintln!("Use 'add' to create your first ingredient.");
        return Ok(None);
    }
    Ok(Some(CatalogManager::new(load_catalog(path)?)))
}

/// Load a manager for mutating commands; missing file starts empty.
fn load_or_empty(file_path: &str) -> Result<CatalogManager> {
    let path = Path::new(file_path);
    if !path.exists() {
        return Ok(CatalogManager::empty());
    }
    Ok(CatalogManager::new(load_catalog(path)?))
}

fn persist(file_path: &str, manager: &CatalogManager) -> Result<()> {
    save_catalog(file_path, &manager.to_catalog())?;
    println!("Catalog saved.");
    Ok(())
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// One-shot calculation without touching the catalog.
fn cmd_calc(gross: f64, net: f64, cost: f64) -> Result<()> {
    let measurement = IngredientMeasurement::new(gross, net, cost);
    let display = compute_display_metrics(&measurement)?;
    display_yield_metrics(&display);
    Ok(())
}

/// Add an ingredient interactively.
fn cmd_add(file_path: &str) -> Result<()> {
    let mut manager = load_or_empty(file_path)?;

    let form = prompt_ingredient_form(&manager.categories(), None)?;
    let display = compute_display_metrics(&form.measurement)?;

    println!();
    display_yield_metrics(&display);
    println!();

    if !prompt_yes_no("Save this ingredient?", true)? {
        println!("Discarded.");
        return Ok(());
    }

    let ingredient =
        manager.add_ingredient(&form.name, &form.category, &form.unit, form.measurement)?;
    println!("Ingredient \"{}\" created with id #{}.", ingredient.name, ingredient.id);

    persist(file_path, &manager)
}

/// List ingredients, optionally filtered by category and/or name search.
fn cmd_list(file_path: &str, category: Option<&str>, search: Option<&str>) -> Result<()> {
    let Some(manager) = load_manager(file_path)? else {
        return Ok(());
    };

    display_ingredient_table(&manager.filter_ingredients(category, search));
    Ok(())
}

/// Edit an ingredient, re-prompting every field with current values.
fn cmd_edit(file_path: &str, query: &str) -> Result<()> {
    let Some(mut manager) = load_manager(file_path)? else {
        return Ok(());
    };

    let current = manager
        .get_ingredient(query)
        .cloned()
        .ok_or_else(|| costbook::CostbookError::IngredientNotFound(query.to_string()))?;

    let form = prompt_ingredient_form(&manager.categories(), Some(&current))?;
    let display = compute_display_metrics(&form.measurement)?;

    println!();
    display_yield_metrics(&display);
    println!();

    if !prompt_yes_no("Apply these changes?", true)? {
        println!("Discarded.");
        return Ok(());
    }

    let id_query = format!("#{}", current.id);
    manager.update_ingredient(&id_query, &form.name, &form.category, &form.unit, form.measurement)?;
    println!("Ingredient #{} updated.", current.id);

    persist(file_path, &manager)
}

/// Remove an ingredient after confirmation (or straight away with --yes).
fn cmd_remove(file_path: &str, query: &str, yes: bool) -> Result<()> {
    let Some(mut manager) = load_manager(file_path)? else {
        return Ok(());
    };

    let ingredient = manager
        .get_ingredient(query)
        .cloned()
        .ok_or_else(|| costbook::CostbookError::IngredientNotFound(query.to_string()))?;

    if !yes {
        let confirmed = prompt_yes_no(&format!("Remove '{}'?", ingredient.name), false)?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    manager.remove_ingredient(&format!("#{}", ingredient.id))?;
    println!("Ingredient \"{}\" removed.", ingredient.name);

    persist(file_path, &manager)
}

/// Compose a recipe interactively and show its computed cost.
fn cmd_new_recipe(file_path: &str) -> Result<()> {
    let Some(mut manager) = load_manager(file_path)? else {
        return Ok(());
    };

    if manager.ingredient_count() == 0 {
        println!("No ingredients cataloged yet. Use 'add' first.");
        return Ok(());
    }

    let (name, lines, final_unit, factor) = {
        let available = manager.all_ingredients();
        prompt_recipe_form(&available)?
    };

    if lines.is_empty() {
        println!("No ingredients added; recipe not saved.");
        return Ok(());
    }

    let recipe = manager.add_recipe(&name, lines, &final_unit, factor)?.clone();

    let index = manager.unit_cost_index();
    let breakdown = cost_recipe(&recipe, &index)?;
    display_recipes(&[(&recipe, breakdown)]);

    persist(file_path, &manager)
}

/// List recipes with their cost breakdowns from the current catalog.
fn cmd_recipes(file_path: &str) -> Result<()> {
    let Some(manager) = load_manager(file_path)? else {
        return Ok(());
    };

    let index = manager.unit_cost_index();
    let mut costed = Vec::new();
    for recipe in manager.recipes() {
        costed.push((recipe, cost_recipe(recipe, &index)?));
    }

    display_recipes(&costed);
    Ok(())
}

fn cmd_stock(file_path: &str) -> Result<()> {
    let Some(manager) = load_manager(file_path)? else {
        return Ok(());
    };

    display_stock(manager.stock());
    Ok(())
}

/// Record a stock entry, creating the item on first sight.
fn cmd_stock_entry(
    file_path: &str,
    name: &str,
    quantity: f64,
    unit: Option<&str>,
    minimum: Option<f64>,
) -> Result<()> {
    let mut manager = load_or_empty(file_path)?;

    let date = today();
    let item = manager.record_stock_entry(name, quantity, unit, minimum, &date)?;
    println!(
        "{}: {} {} in stock [{}]",
        item.name,
        item.quantity,
        item.unit,
        item.status().label()
    );

    persist(file_path, &manager)
}

fn cmd_categories(file_path: &str) -> Result<()> {
    let manager = load_or_empty(file_path)?;
    display_categories(DEFAULT_CATEGORIES, manager.custom_categories());
    Ok(())
}

fn cmd_add_category(file_path: &str, name: &str) -> Result<()> {
    let mut manager = load_or_empty(file_path)?;
    manager.add_category(name)?;
    println!("Category \"{}\" added.", name.trim());

    persist(file_path, &manager)
}

/// Export the ingredient table to CSV.
fn cmd_export(file_path: &str, out: &str) -> Result<()> {
    let Some(manager) = load_manager(file_path)? else {
        return Ok(());
    };

    let ingredients = manager.all_ingredients();
    export_ingredients_csv(out, &ingredients)?;
    println!("Exported {} ingredients to {}.", ingredients.len(), out);
    Ok(())
}

fn cmd_summary(file_path: &str) -> Result<()> {
    let Some(manager) = load_manager(file_path)? else {
        return Ok(());
    };

    let critical = manager
        .stock()
        .iter()
        .filter(|s| s.status() == StockStatus::Critical)
        .count();
    let low = manager
        .stock()
        .iter()
        .filter(|s| s.status() == StockStatus::Low)
        .count();

    display_summary(
        manager.ingredient_count(),
        manager.recipe_count(),
        manager.stock_count(),
        manager.average_yield(),
        manager.catalog_value(),
        critical,
        low,
    );
    Ok(())
}
