//! The default dish catalog competing in a tournament.

/// The 16 dishes of the default deployment.
pub const DISHES: [&str; 16] = [
    "Pizza", "Burger", "Sushi", "Pasta", "Tacos", "Steak", "Salad", "Ramen", "Curry", "Sandwich",
    "Dumplings", "BBQ", "Ice Cream", "Cake", "Fries", "Waffles",
];

/// The default catalog as owned items.
pub fn default_dishes() -> Vec<String> {
    DISHES.iter().map(|s| s.to_string()).collect()
}
