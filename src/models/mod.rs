mod ingredient;
mod recipe;
mod stock;

pub use ingredient::Ingredient;
pub use recipe::{Recipe, RecipeLine};
pub use stock::{StockItem, StockStatus};
