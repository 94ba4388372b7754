pub mod prompts;
pub mod render;

pub use prompts::{prompt_ingredient_form, prompt_recipe_form, prompt_yes_no, IngredientForm};
pub use render::{
    display_categories, display_ingredient_table, display_recipes, display_stock, display_summary,
    display_yield_metrics,
};
