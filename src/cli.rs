use clap::{Parser, Subcommand};

/// costbook — kitchen back-office CLI for ingredient yield costing, recipes, and stock.
#[derive(Parser, Debug)]
#[command(name = "costbook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the catalog JSON file.
    #[arg(short, long, default_value = "costbook.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// One-shot yield/cost calculation, nothing saved.
    Calc {
        /// Gross weight (as purchased).
        #[arg(long)]
        gross: f64,

        /// Net weight (after trim/cooking loss).
        #[arg(long)]
        net: f64,

        /// Cost paid for the gross quantity.
        #[arg(long, default_value_t = 0.0)]
        cost: f64,
    },

    /// Add an ingredient interactively.
    Add,

    /// List ingredients, optionally filtered.
    List {
        /// Only this category.
        #[arg(long)]
        category: Option<String>,

        /// Case-insensitive name search.
        #[arg(long)]
        search: Option<String>,
    },

    /// Edit an ingredient by name or #id.
    Edit { ingredient: String },

    /// Remove an ingredient by name or #id.
    Remove {
        ingredient: String,

        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },

    /// Compose a recipe interactively.
    NewRecipe,

    /// List recipes with computed costs.
    Recipes,

    /// Show stock levels and alerts.
    Stock,

    /// Record a stock entry (creates the item on first entry).
    StockEntry {
        name: String,
        quantity: f64,

        /// Unit of measure; required for a new item.
        unit: Option<String>,

        /// Replenishment minimum for alerts.
        #[arg(long)]
        minimum: Option<f64>,
    },

    /// List ingredient categories.
    Categories,

    /// Register a custom category.
    AddCategory { name: String },

    /// Export the ingredient table to CSV.
    Export {
        #[arg(short, long, default_value = "ingredients.csv")]
        out: String,
    },

    /// Show catalog summary counts.
    Summary,
}

impl Default for Command {
    fn default() -> Self {
        Command::List {
            category: None,
            search: None,
        }
    }
}
