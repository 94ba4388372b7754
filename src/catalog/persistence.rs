use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Ingredient, Recipe, StockItem};

/// The on-disk document: everything the catalog manager owns.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,

    #[serde(default)]
    pub recipes: Vec<Recipe>,

    #[serde(default)]
    pub stock: Vec<StockItem>,

    #[serde(default)]
    pub custom_categories: Vec<String>,
}

/// Load a catalog from a JSON file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save a catalog to a JSON file, pretty-printed.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog)?;
    fs::write(path, json)?;
    Ok(())
}
