use assert_float_eq::*;
use tempfile::NamedTempFile;

use costbook::catalog::{export_ingredients_csv, load_catalog, save_catalog, CatalogManager};
use costbook::costing::{cost_recipe, IngredientMeasurement};
use costbook::models::{RecipeLine, StockStatus};
use costbook::CostbookError;

fn sample_manager() -> CatalogManager {
    let mut manager = CatalogManager::empty();
    manager
        .add_ingredient(
            "Beef Patty",
            "Beef",
            "kg",
            IngredientMeasurement::new(1.0, 0.85, 32.50),
        )
        .unwrap();
    manager
        .add_ingredient(
            "Mozzarella",
            "Dairy",
            "kg",
            IngredientMeasurement::new(1.0, 0.95, 28.90),
        )
        .unwrap();
    manager
        .add_ingredient(
            "Burger Bun",
            "Other foods",
            "unit",
            IngredientMeasurement::new(1.0, 1.0, 0.80),
        )
        .unwrap();
    manager
}

#[test]
fn test_catalog_roundtrip_preserves_everything() {
    let mut manager = sample_manager();
    manager.add_category("Sauces").unwrap();
    manager
        .add_recipe(
            "Classic Burger",
            vec![
                RecipeLine {
                    ingredient: "Beef Patty".to_string(),
                    quantity: 0.15,
                    unit: "kg".to_string(),
                },
                RecipeLine {
                    ingredient: "Burger Bun".to_string(),
                    quantity: 1.0,
                    unit: "unit".to_string(),
                },
            ],
            "unit",
            1.1,
        )
        .unwrap();
    manager
        .record_stock_entry("Tomato", 2.1, Some("kg"), Some(3.0), "2026-08-23")
        .unwrap();

    let file = NamedTempFile::new().unwrap();
    save_catalog(file.path(), &manager.to_catalog()).unwrap();

    let reloaded = CatalogManager::new(load_catalog(file.path()).unwrap());

    assert_eq!(reloaded.ingredient_count(), 3);
    assert_eq!(reloaded.recipe_count(), 1);
    assert_eq!(reloaded.stock_count(), 1);
    assert_eq!(reloaded.custom_categories(), &["Sauces".to_string()]);

    // Metrics survive the roundtrip at full precision.
    let patty = reloaded.get_ingredient("Beef Patty").unwrap();
    assert_float_absolute_eq!(patty.metrics.correction_factor, 1.0 / 0.85, 1e-12);

    // New ids keep counting after a reload.
    let mut reloaded = reloaded;
    let tomato = reloaded
        .add_ingredient(
            "Tomato",
            "Produce",
            "kg",
            IngredientMeasurement::new(1.0, 0.9, 6.0),
        )
        .unwrap();
    assert_eq!(tomato.id, 4);
}

#[test]
fn test_recipe_costing_from_catalog() {
    let mut manager = sample_manager();
    let recipe = manager
        .add_recipe(
            "Classic Burger",
            vec![
                RecipeLine {
                    ingredient: "Beef Patty".to_string(),
                    quantity: 0.15,
                    unit: "kg".to_string(),
                },
                RecipeLine {
                    ingredient: "Mozzarella".to_string(),
                    quantity: 0.03,
                    unit: "kg".to_string(),
                },
                RecipeLine {
                    ingredient: "Burger Bun".to_string(),
                    quantity: 1.0,
                    unit: "unit".to_string(),
                },
            ],
            "unit",
            1.1,
        )
        .unwrap()
        .clone();

    let index = manager.unit_cost_index();
    let breakdown = cost_recipe(&recipe, &index).unwrap();

    let patty_cost = 0.15 * (32.50 / 0.85);
    let cheese_cost = 0.03 * (28.90 / 0.95);
    let bun_cost = 1.0 * 0.80;
    let expected = (patty_cost + cheese_cost + bun_cost) * 1.1;

    assert_eq!(breakdown.lines.len(), 3);
    assert_float_absolute_eq!(breakdown.ingredient_cost, patty_cost + cheese_cost + bun_cost, 1e-9);
    assert_float_absolute_eq!(breakdown.total_cost, expected, 1e-9);
}

#[test]
fn test_recipe_costing_fails_after_ingredient_removed() {
    let mut manager = sample_manager();
    let recipe = manager
        .add_recipe(
            "Cheese Plate",
            vec![RecipeLine {
                ingredient: "Mozzarella".to_string(),
                quantity: 0.2,
                unit: "kg".to_string(),
            }],
            "portion",
            1.0,
        )
        .unwrap()
        .clone();

    manager.remove_ingredient("Mozzarella").unwrap();

    let index = manager.unit_cost_index();
    let err = cost_recipe(&recipe, &index).unwrap_err();
    assert!(matches!(err, CostbookError::IngredientNotFound(_)));
}

#[test]
fn test_edit_recomputes_downstream_costs() {
    let mut manager = sample_manager();

    let before = manager.unit_cost_index()["beef patty"];

    // Worse trim on the same purchase makes the usable unit pricier.
    manager
        .update_ingredient(
            "Beef Patty",
            "Beef Patty",
            "Beef",
            "kg",
            IngredientMeasurement::new(1.0, 0.75, 32.50),
        )
        .unwrap();

    let after = manager.unit_cost_index()["beef patty"];
    assert!(after > before);
}

#[test]
fn test_stock_statuses_match_thresholds() {
    let mut manager = CatalogManager::empty();

    let entries = [
        ("Beef", 45.5, 10.0, StockStatus::Ok),
        ("Mozzarella", 8.2, 5.0, StockStatus::Low),
        ("Tomato", 2.1, 3.0, StockStatus::Critical),
        ("Lettuce", 25.0, 10.0, StockStatus::Ok),
    ];

    for (name, quantity, minimum, expected) in entries {
        let item = manager
            .record_stock_entry(name, quantity, Some("kg"), Some(minimum), "2026-08-24")
            .unwrap();
        assert_eq!(item.status(), expected, "wrong status for {}", name);
    }
}

#[test]
fn test_csv_export_matches_table_figures() {
    let manager = sample_manager();

    let file = NamedTempFile::new().unwrap();
    export_ingredients_csv(file.path(), &manager.all_ingredients()).unwrap();

    let mut reader = csv::Reader::from_path(file.path()).unwrap();
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[0][1], "Beef Patty");
    assert_eq!(&rows[0][7], "1.18");
    assert_eq!(&rows[0][10], "38.35");
    assert_eq!(&rows[1][1], "Mozzarella");
    assert_eq!(&rows[1][10], "30.35");

    // Zero-loss ingredient exports a flat factor and its raw cost.
    assert_eq!(&rows[2][7], "1.00");
    assert_eq!(&rows[2][10], "0.80");
}

#[test]
fn test_duplicate_rejections() {
    let mut manager = sample_manager();

    assert!(manager
        .add_ingredient(
            "BEEF PATTY",
            "Beef",
            "kg",
            IngredientMeasurement::new(1.0, 0.9, 30.0),
        )
        .is_err());

    manager.add_category("Sauces").unwrap();
    assert!(matches!(
        manager.add_category("SAUCES"),
        Err(CostbookError::DuplicateCategory(_))
    ));
}

#[test]
fn test_invalid_measurement_never_enters_catalog() {
    let mut manager = CatalogManager::empty();

    let err = manager
        .add_ingredient(
            "Ghost",
            "Other foods",
            "kg",
            IngredientMeasurement::new(1.0, 0.0, 10.0),
        )
        .unwrap_err();

    assert!(matches!(err, CostbookError::InvalidMeasurement(_)));
    assert_eq!(manager.ingredient_count(), 0);
}
