/// Categories every catalog starts with. Custom categories are appended
/// through the catalog manager.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Dairy",
    "Beef",
    "Poultry",
    "Pork",
    "Other foods",
    "Fish & seafood",
    "Beverages",
    "Spirits",
    "Beers",
    "Wines",
    "Produce",
    "Pastas",
];

/// Measurement units offered in the ingredient form, as (value, label).
pub const UNITS: &[(&str, &str)] = &[
    ("kg", "Kilogram (kg)"),
    ("l", "Liter (l)"),
    ("unit", "Unit"),
];

/// Units a finished recipe can be portioned in.
pub const RECIPE_UNITS: &[&str] = &["unit", "portion", "kg", "l"];

/// Decimal places for correction factors and currency amounts.
pub const FACTOR_DECIMALS: u32 = 2;

/// Decimal places for yield/loss percentages.
pub const PERCENT_DECIMALS: u32 = 1;

/// Stock below minimum is critical; below this multiple of minimum is low.
pub const LOW_STOCK_RATIO: f64 = 2.0;

/// Default recipe correction factor (no preparation loss at recipe level).
pub const DEFAULT_RECIPE_FACTOR: f64 = 1.0;

/// Minimum Jaro-Winkler score for a fuzzy ingredient-name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10_f64.powi(decimals as i32);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.17647, 2), 1.18);
        assert_eq!(round_to(85.0, 1), 85.0);
        assert_eq!(round_to(-10.04, 1), -10.0);
        assert_eq!(round_to(30.345000000000002, 2), 30.35);
    }
}
