use std::collections::HashMap;

use crate::catalog::persistence::Catalog;
use crate::costing::constants::DEFAULT_CATEGORIES;
use crate::costing::{compute_yield_metrics, IngredientMeasurement};
use crate::error::{CostbookError, Result};
use crate::models::{Ingredient, Recipe, RecipeLine, StockItem};

/// In-memory catalog of ingredients, recipes, and stock for one session.
///
/// Ids are sequential per collection and never reused within a session.
/// Ingredient lookups accept either a name (case-insensitive) or a `#id`
/// reference as shown in the ingredient table.
pub struct CatalogManager {
    ingredients: Vec<Ingredient>,
    recipes: Vec<Recipe>,
    stock: Vec<StockItem>,
    custom_categories: Vec<String>,
}

impl CatalogManager {
    /// Create a manager from a loaded catalog document.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            ingredients: catalog.ingredients,
            recipes: catalog.recipes,
            stock: catalog.stock,
            custom_categories: catalog.custom_categories,
        }
    }

    /// Create an empty manager.
    pub fn empty() -> Self {
        Self::new(Catalog::default())
    }

    /// Convert back to the serializable document.
    pub fn to_catalog(&self) -> Catalog {
        Catalog {
            ingredients: self.ingredients.clone(),
            recipes: self.recipes.clone(),
            stock: self.stock.clone(),
            custom_categories: self.custom_categories.clone(),
        }
    }

    // ── Ingredients ──────────────────────────────────────────────────

    fn next_ingredient_id(&self) -> u32 {
        self.ingredients.iter().map(|i| i.id).max().unwrap_or(0) + 1
    }

    /// Add an ingredient, computing its metrics from the measurement.
    ///
    /// Names must be unique (case-insensitive) so recipe lines stay
    /// unambiguous.
    pub fn add_ingredient(
        &mut self,
        name: &str,
        category: &str,
        unit: &str,
        measurement: IngredientMeasurement,
    ) -> Result<&Ingredient> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CostbookError::InvalidInput(
                "ingredient name must not be empty".to_string(),
            ));
        }
        if self.find_by_name(name).is_some() {
            return Err(CostbookError::InvalidInput(format!(
                "ingredient already exists: {}",
                name
            )));
        }

        let metrics = compute_yield_metrics(&measurement)?;
        let ingredient = Ingredient {
            id: self.next_ingredient_id(),
            name: name.to_string(),
            category: category.to_string(),
            unit: unit.to_string(),
            measurement,
            metrics,
        };

        self.ingredients.push(ingredient);
        Ok(self.ingredients.last().unwrap())
    }

    fn find_by_name(&self, name: &str) -> Option<usize> {
        let key = name.to_lowercase();
        self.ingredients.iter().position(|i| i.key() == key)
    }

    fn find_ingredient(&self, query: &str) -> Option<usize> {
        if let Some(id) = parse_id_query(query) {
            return self.ingredients.iter().position(|i| i.id == id);
        }
        self.find_by_name(query)
    }

    /// Look up an ingredient by name or `#id`.
    pub fn get_ingredient(&self, query: &str) -> Option<&Ingredient> {
        self.find_ingredient(query).map(|idx| &self.ingredients[idx])
    }

    /// Replace an ingredient's fields, recomputing metrics from the new
    /// measurement. The id is kept.
    ///
    /// Renaming does not rewrite recipe lines that reference the old
    /// name; costing such a recipe fails with `IngredientNotFound` until
    /// the recipe is edited to match.
    pub fn update_ingredient(
        &mut self,
        query: &str,
        name: &str,
        category: &str,
        unit: &str,
        measurement: IngredientMeasurement,
    ) -> Result<&Ingredient> {
        let idx = self
            .find_ingredient(query)
            .ok_or_else(|| CostbookError::IngredientNotFound(query.to_string()))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(CostbookError::InvalidInput(
                "ingredient name must not be empty".to_string(),
            ));
        }
        if let Some(other) = self.find_by_name(name) {
            if other != idx {
                return Err(CostbookError::InvalidInput(format!(
                    "ingredient already exists: {}",
                    name
                )));
            }
        }

        let metrics = compute_yield_metrics(&measurement)?;
        let ingredient = &mut self.ingredients[idx];
        ingredient.name = name.to_string();
        ingredient.category = category.to_string();
        ingredient.unit = unit.to_string();
        ingredient.measurement = measurement;
        ingredient.metrics = metrics;

        Ok(&self.ingredients[idx])
    }

    /// Remove an ingredient by name or `#id`, returning it.
    pub fn remove_ingredient(&mut self, query: &str) -> Result<Ingredient> {
        let idx = self
            .find_ingredient(query)
            .ok_or_else(|| CostbookError::IngredientNotFound(query.to_string()))?;
        Ok(self.ingredients.remove(idx))
    }

    /// Filter by exact category and/or case-insensitive substring of the
    /// name. `None` means no constraint.
    pub fn filter_ingredients(
        &self,
        category: Option<&str>,
        search: Option<&str>,
    ) -> Vec<&Ingredient> {
        let search = search.map(|s| s.to_lowercase());
        self.ingredients
            .iter()
            .filter(|i| category.is_none_or(|c| i.category == c))
            .filter(|i| {
                search
                    .as_deref()
                    .is_none_or(|s| i.name.to_lowercase().contains(s))
            })
            .collect()
    }

    /// All ingredients in insertion (id) order.
    pub fn all_ingredients(&self) -> Vec<&Ingredient> {
        self.ingredients.iter().collect()
    }

    /// Effective unit cost per lowercase ingredient name, for recipe
    /// costing.
    pub fn unit_cost_index(&self) -> HashMap<String, f64> {
        self.ingredients
            .iter()
            .map(|i| (i.key(), i.metrics.effective_unit_cost))
            .collect()
    }

    /// Total purchase cost across cataloged ingredients.
    pub fn catalog_value(&self) -> f64 {
        self.ingredients
            .iter()
            .map(|i| i.measurement.gross_cost)
            .sum()
    }

    /// Mean yield percentage across the catalog, if non-empty.
    pub fn average_yield(&self) -> Option<f64> {
        if self.ingredients.is_empty() {
            return None;
        }
        let sum: f64 = self
            .ingredients
            .iter()
            .map(|i| i.metrics.yield_percentage)
            .sum();
        Some(sum / self.ingredients.len() as f64)
    }

    // ── Categories ───────────────────────────────────────────────────

    /// Default categories followed by custom ones, in registration order.
    pub fn categories(&self) -> Vec<String> {
        DEFAULT_CATEGORIES
            .iter()
            .map(|c| c.to_string())
            .chain(self.custom_categories.iter().cloned())
            .collect()
    }

    pub fn custom_categories(&self) -> &[String] {
        &self.custom_categories
    }

    /// Register a custom category; duplicates (against defaults or custom
    /// ones, case-insensitive) are rejected.
    pub fn add_category(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CostbookError::InvalidInput(
                "category name must not be empty".to_string(),
            ));
        }

        let key = name.to_lowercase();
        let exists = self
            .categories()
            .iter()
            .any(|c| c.to_lowercase() == key);
        if exists {
            return Err(CostbookError::DuplicateCategory(name.to_string()));
        }

        self.custom_categories.push(name.to_string());
        Ok(())
    }

    // ── Recipes ──────────────────────────────────────────────────────

    fn next_recipe_id(&self) -> u32 {
        self.recipes.iter().map(|r| r.id).max().unwrap_or(0) + 1
    }

    /// Add a recipe. Every line must reference a cataloged ingredient and
    /// the correction factor must be positive.
    pub fn add_recipe(
        &mut self,
        name: &str,
        lines: Vec<RecipeLine>,
        final_unit: &str,
        correction_factor: f64,
    ) -> Result<&Recipe> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CostbookError::InvalidInput(
                "recipe name must not be empty".to_string(),
            ));
        }
        if !correction_factor.is_finite() || correction_factor <= 0.0 {
            return Err(CostbookError::InvalidInput(format!(
                "recipe correction factor must be positive, got {}",
                correction_factor
            )));
        }
        for line in &lines {
            if self.find_by_name(&line.ingredient).is_none() {
                return Err(CostbookError::IngredientNotFound(line.ingredient.clone()));
            }
        }

        let recipe = Recipe {
            id: self.next_recipe_id(),
            name: name.to_string(),
            lines,
            final_unit: final_unit.to_string(),
            correction_factor,
        };

        self.recipes.push(recipe);
        Ok(self.recipes.last().unwrap())
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    // ── Stock ────────────────────────────────────────────────────────

    fn next_stock_id(&self) -> u32 {
        self.stock.iter().map(|s| s.id).max().unwrap_or(0) + 1
    }

    /// Record a stock entry for `date` (YYYY-MM-DD).
    ///
    /// An existing item (matched by name, case-insensitive) accumulates
    /// the quantity and refreshes its entry date; otherwise a new item is
    /// created, which requires a unit.
    pub fn record_stock_entry(
        &mut self,
        name: &str,
        quantity: f64,
        unit: Option<&str>,
        minimum: Option<f64>,
        date: &str,
    ) -> Result<&StockItem> {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(CostbookError::InvalidInput(format!(
                "entry quantity must be positive, got {}",
                quantity
            )));
        }

        let key = name.trim().to_lowercase();
        if key.is_empty() {
            return Err(CostbookError::InvalidInput(
                "product name must not be empty".to_string(),
            ));
        }

        if let Some(idx) = self.stock.iter().position(|s| s.key() == key) {
            let item = &mut self.stock[idx];
            item.quantity += quantity;
            item.last_entry = date.to_string();
            if let Some(unit) = unit {
                item.unit = unit.to_string();
            }
            if let Some(minimum) = minimum {
                item.minimum = minimum;
            }
            return Ok(&self.stock[idx]);
        }

        let unit = unit.ok_or_else(|| {
            CostbookError::InvalidInput(format!("unit required for new stock item: {}", name))
        })?;

        let item = StockItem {
            id: self.next_stock_id(),
            name: name.trim().to_string(),
            quantity,
            unit: unit.to_string(),
            minimum: minimum.unwrap_or(0.0),
            last_entry: date.to_string(),
        };

        self.stock.push(item);
        Ok(self.stock.last().unwrap())
    }

    pub fn stock(&self) -> &[StockItem] {
        &self.stock
    }

    // ── Counts ───────────────────────────────────────────────────────

    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }

    pub fn recipe_count(&self) -> usize {
        self.recipes.len()
    }

    pub fn stock_count(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty() && self.recipes.is_empty() && self.stock.is_empty()
    }
}

/// Parse a `#id` or bare numeric id query.
fn parse_id_query(query: &str) -> Option<u32> {
    query.trim().strip_prefix('#')?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager_with_samples() -> CatalogManager {
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
    }

    #[test]
    fn test_sequential_ids() {
        let manager = manager_with_samples();
        let ids: Vec<u32> = manager.all_ingredients().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_lookup_by_name_and_id() {
        let manager = manager_with_samples();
        assert!(manager.get_ingredient("beef patty").is_some());
        assert!(manager.get_ingredient("BEEF PATTY").is_some());
        assert_eq!(manager.get_ingredient("#2").unwrap().name, "Mozzarella");
        assert!(manager.get_ingredient("#9").is_none());
        assert!(manager.get_ingredient("butter").is_none());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut manager = manager_with_samples();
        let err = manager
            .add_ingredient(
                "beef patty",
                "Beef",
                "kg",
                IngredientMeasurement::new(1.0, 0.9, 30.0),
            )
            .unwrap_err();
        assert!(matches!(err, CostbookError::InvalidInput(_)));
    }

    #[test]
    fn test_update_recomputes_metrics() {
        let mut manager = manager_with_samples();
        let before = manager.get_ingredient("#1").unwrap().metrics;

        manager
            .update_ingredient(
                "#1",
                "Beef Patty",
                "Beef",
                "kg",
                IngredientMeasurement::new(1.0, 0.80, 32.50),
            )
            .unwrap();

        let after = manager.get_ingredient("#1").unwrap().metrics;
        assert!(after.correction_factor > before.correction_factor);
        assert!(after.effective_unit_cost > before.effective_unit_cost);
    }

    #[test]
    fn test_update_rejects_invalid_measurement() {
        let mut manager = manager_with_samples();
        let err = manager
            .update_ingredient(
                "#1",
                "Beef Patty",
                "Beef",
                "kg",
                IngredientMeasurement::new(1.0, 0.0, 32.50),
            )
            .unwrap_err();
        assert!(matches!(err, CostbookError::InvalidMeasurement(_)));

        // Original metrics untouched on failure.
        let metrics = manager.get_ingredient("#1").unwrap().metrics;
        assert!(metrics.correction_factor.is_finite());
    }

    #[test]
    fn test_remove_ingredient() {
        let mut manager = manager_with_samples();
        let removed = manager.remove_ingredient("Mozzarella").unwrap();
        assert_eq!(removed.id, 2);
        assert_eq!(manager.ingredient_count(), 1);

        // Next id keeps counting from the max seen.
        manager
            .add_ingredient(
                "Tomato",
                "Produce",
                "kg",
                IngredientMeasurement::new(1.0, 0.9, 6.0),
            )
            .unwrap();
        assert_eq!(manager.get_ingredient("Tomato").unwrap().id, 2);
    }

    #[test]
    fn test_filter_by_category_and_search() {
        let manager = manager_with_samples();

        assert_eq!(manager.filter_ingredients(Some("Beef"), None).len(), 1);
        assert_eq!(manager.filter_ingredients(None, Some("zarel")).len(), 1);
        assert_eq!(manager.filter_ingredients(Some("Dairy"), Some("beef")).len(), 0);
        assert_eq!(manager.filter_ingredients(None, None).len(), 2);
    }

    #[test]
    fn test_add_category_rejects_duplicates() {
        let mut manager = CatalogManager::empty();
        manager.add_category("Sauces").unwrap();

        assert!(matches!(
            manager.add_category("sauces"),
            Err(CostbookError::DuplicateCategory(_))
        ));
        assert!(matches!(
            manager.add_category("Dairy"),
            Err(CostbookError::DuplicateCategory(_))
        ));

        let categories = manager.categories();
        assert_eq!(categories.last().unwrap(), "Sauces");
        assert_eq!(categories.len(), DEFAULT_CATEGORIES.len() + 1);
    }

    #[test]
    fn test_add_recipe_validates_lines() {
        let mut manager = manager_with_samples();

        let err = manager
            .add_recipe(
                "Burger",
                vec![RecipeLine {
                    ingredient: "Lamb".to_string(),
                    quantity: 0.15,
                    unit: "kg".to_string(),
                }],
                "unit",
                1.0,
            )
            .unwrap_err();
        assert!(matches!(err, CostbookError::IngredientNotFound(_)));

        let recipe = manager
            .add_recipe(
                "Burger",
                vec![RecipeLine {
                    ingredient: "Beef Patty".to_string(),
                    quantity: 0.15,
                    unit: "kg".to_string(),
                }],
                "unit",
                1.1,
            )
            .unwrap();
        assert_eq!(recipe.id, 1);
    }

    #[test]
    fn test_stock_entry_upsert() {
        let mut manager = CatalogManager::empty();

        manager
            .record_stock_entry("Tomato", 2.0, Some("kg"), Some(3.0), "2026-08-23")
            .unwrap();
        let item = &manager.stock()[0];
        assert_eq!(item.status().label(), "critical");

        manager
            .record_stock_entry("tomato", 5.0, None, None, "2026-08-24")
            .unwrap();
        assert_eq!(manager.stock_count(), 1);

        let item = &manager.stock()[0];
        assert!((item.quantity - 7.0).abs() < 1e-9);
        assert_eq!(item.last_entry, "2026-08-24");
        assert_eq!(item.status().label(), "normal");
    }

    #[test]
    fn test_stock_new_item_requires_unit() {
        let mut manager = CatalogManager::empty();
        let err = manager
            .record_stock_entry("Tomato", 2.0, None, None, "2026-08-24")
            .unwrap_err();
        assert!(matches!(err, CostbookError::InvalidInput(_)));
    }

    #[test]
    fn test_catalog_value_sums_gross_costs() {
        let mut manager = manager_with_samples();
        assert!((manager.catalog_value() - 61.40).abs() < 1e-9);

        manager.remove_ingredient("Mozzarella").unwrap();
        assert!((manager.catalog_value() - 32.50).abs() < 1e-9);

        assert_eq!(CatalogManager::empty().catalog_value(), 0.0);
    }

    #[test]
    fn test_rename_strands_recipe_references() {
        let mut manager = manager_with_samples();
        let recipe = manager
            .add_recipe(
                "Burger",
                vec![RecipeLine {
                    ingredient: "Beef Patty".to_string(),
                    quantity: 0.15,
                    unit: "kg".to_string(),
                }],
                "unit",
                1.0,
            )
            .unwrap()
            .clone();

        manager
            .update_ingredient(
                "#1",
                "Chuck Patty",
                "Beef",
                "kg",
                IngredientMeasurement::new(1.0, 0.85, 32.50),
            )
            .unwrap();

        // The recipe still names the old ingredient; costing fails loudly
        // instead of pricing the line at zero.
        let index = manager.unit_cost_index();
        let err = crate::costing::cost_recipe(&recipe, &index).unwrap_err();
        assert!(matches!(err, CostbookError::IngredientNotFound(name) if name == "Beef Patty"));
    }

    #[test]
    fn test_unit_cost_index_matches_metrics() {
        let manager = manager_with_samples();
        let index = manager.unit_cost_index();

        let patty = manager.get_ingredient("Beef Patty").unwrap();
        assert_eq!(
            index["beef patty"],
            patty.metrics.effective_unit_cost
        );
    }
}
