//! FILENAME: core/engine/src/catalog.rs
//! PURPOSE: The fixed product catalog: products and unit price bounds per category.

use crate::record::Category;

/// Inclusive unit price bounds, in currency units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub const fn new(min: f64, max: f64) -> Self {
        PriceRange { min, max }
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

pub fn price_range(category: Category) -> PriceRange {
    match category {
        Category::FruitsVegetables => PriceRange::new(1.0, 8.0),
        Category::DairyEggs => PriceRange::new(2.0, 12.0),
        Category::MeatSeafood => PriceRange::new(8.0, 25.0),
        Category::Bakery => PriceRange::new(2.0, 10.0),
        Category::Beverages => PriceRange::new(1.0, 6.0),
        Category::Snacks => PriceRange::new(2.0, 8.0),
        Category::FrozenFoods => PriceRange::new(3.0, 12.0),
        Category::Household => PriceRange::new(3.0, 15.0),
        Category::PersonalCare => PriceRange::new(3.0, 18.0),
    }
}

pub fn products(category: Category) -> &'static [&'static str] {
    match category {
        Category::FruitsVegetables => &["Apples", "Bananas", "Tomatoes", "Carrots", "Lettuce", "Oranges"],
        Category::DairyEggs => &["Milk", "Cheese", "Yogurt", "Butter", "Eggs"],
        Category::MeatSeafood => &["Chicken Breast", "Ground Beef", "Salmon", "Pork Chops", "Shrimp"],
        Category::Bakery => &["Bread", "Croissants", "Bagels", "Muffins", "Cake"],
        Category::Beverages => &["Water", "Juice", "Soda", "Coffee", "Tea"],
        Category::Snacks => &["Chips", "Cookies", "Nuts", "Chocolate", "Crackers"],
        Category::FrozenFoods => &["Ice Cream", "Pizza", "Vegetables", "French Fries", "Chicken Nuggets"],
        Category::Household => &["Detergent", "Paper Towels", "Trash Bags", "Dish Soap", "Sponges"],
        Category::PersonalCare => &["Shampoo", "Toothpaste", "Soap", "Deodorant", "Tissues"],
    }
}
