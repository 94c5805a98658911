/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Product listing: filtering, sorting, quantity, and wishlist state.
//!
//! Prices are kept as display labels ("1,250 ر.س") and parsed on demand
//! by keeping only the ASCII digits. A label with no digits has no price
//! and never matches a price range.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(rename = "price")]
    pub price_label: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    pub fn price(&self) -> Option<u64> {
        parse_price(&self.price_label)
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Extract the numeric price from a label, ignoring currency and separators.
pub fn parse_price(label: &str) -> Option<u64> {
    let digits: String = label.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// `"all"` (or empty) selects everything; anything else is a category name.
    pub fn from_value(value: &str) -> Self {
        match value {
            "" | "all" => Self::All,
            category => Self::Only(category.to_string()),
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category == *category,
        }
    }
}

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: u64::MAX,
        }
    }
}

impl PriceRange {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    pub fn matches(&self, product: &Product) -> bool {
        product
            .price()
            .is_some_and(|price| price >= self.min && price <= self.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    Name,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort order: {0:?}")]
pub struct ParseSortOrderError(pub String);

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [Self::Featured, Self::PriceLow, Self::PriceHigh, Self::Name];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Name => "name",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Featured => "المميزة",
            Self::PriceLow => "السعر: من الأقل",
            Self::PriceHigh => "السعر: من الأعلى",
            Self::Name => "الاسم",
        }
    }

    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::Featured => Ordering::Equal,
            Self::PriceLow => cmp_prices(a.price(), b.price()),
            Self::PriceHigh => match (a.price(), b.price()) {
                (Some(a), Some(b)) => b.cmp(&a),
                // unpriced stay last in both directions
                (a, b) => cmp_prices(a, b),
            },
            Self::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        }
    }
}

/// Ascending by price, unpriced products after priced ones.
fn cmp_prices(a: Option<u64>, b: Option<u64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| ParseSortOrderError(s.to_string()))
    }
}

/// Stable sort; `Featured` keeps catalogue order.
pub fn sort_products(products: &mut [Product], order: SortOrder) {
    products.sort_by(|a, b| order.compare(a, b));
}

/// Everything needed to turn the full catalogue into the visible grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingQuery {
    pub category: CategoryFilter,
    pub price: Option<PriceRange>,
    pub order: SortOrder,
}

impl ListingQuery {
    pub fn is_visible(&self, product: &Product) -> bool {
        self.category.matches(product) && self.price.map_or(true, |range| range.matches(product))
    }

    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut visible: Vec<Product> = products
            .iter()
            .filter(|p| self.is_visible(p))
            .cloned()
            .collect();
        sort_products(&mut visible, self.order);
        visible
    }
}

/// Distinct categories in first-seen order.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    products
        .iter()
        .filter(|p| seen.insert(p.category.as_str()))
        .map(|p| p.category.clone())
        .collect()
}

/// Item count in the cart stepper; never below one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity(u32);

impl Default for Quantity {
    fn default() -> Self {
        Self(1)
    }
}

impl Quantity {
    pub const MIN: u32 = 1;

    pub fn new(value: u32) -> Self {
        Self(value.max(Self::MIN))
    }

    /// Parse whatever the user typed; junk falls back to the minimum.
    pub fn parse(input: &str) -> Self {
        input.trim().parse().map(Self::new).unwrap_or_default()
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    pub fn decrement(self) -> Self {
        Self::new(self.0.saturating_sub(1))
    }
}

/// Products the visitor has hearted during this page view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Wishlist {
    ids: HashSet<String>,
}

impl Wishlist {
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Flip membership and return the new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

pub fn wishlist_icon(listed: bool) -> &'static str {
    if listed {
        "❤️"
    } else {
        "🤍"
    }
}

pub fn wishlist_message(listed: bool) -> &'static str {
    if listed {
        "تمت الإضافة إلى المفضلة"
    } else {
        "تمت الإزالة من المفضلة"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, category: &str, price: &str) -> Product {
        Product {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price_label: price.into(),
            images: Vec::new(),
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product("1", "Oud Royal", "perfume", "1,250 ر.س"),
            product("2", "amber mist", "perfume", "480 ر.س"),
            product("3", "Gold Watch", "watches", "3,900 ر.س"),
            product("4", "Gift Box", "gifts", "قريباً"),
        ]
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn price_ignores_currency_and_separators() {
        assert_eq!(parse_price("1,250 ر.س"), Some(1250));
        assert_eq!(parse_price("SAR 75"), Some(75));
        assert_eq!(parse_price("قريباً"), None);
    }

    #[test]
    fn category_filter_all_keeps_everything() {
        let query = ListingQuery::default();
        assert_eq!(query.apply(&sample()).len(), 4);

        let query = ListingQuery {
            category: CategoryFilter::from_value("perfume"),
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&sample())), vec!["1", "2"]);
    }

    #[test]
    fn price_range_is_inclusive_and_drops_unpriced() {
        let query = ListingQuery {
            price: Some(PriceRange::new(480, 1250)),
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&sample())), vec!["1", "2"]);
    }

    #[test]
    fn sorts_by_price_with_unpriced_last() {
        let mut products = sample();
        sort_products(&mut products, SortOrder::PriceLow);
        assert_eq!(ids(&products), vec!["2", "1", "3", "4"]);
        sort_products(&mut products, SortOrder::PriceHigh);
        assert_eq!(ids(&products), vec!["3", "1", "2", "4"]);
    }

    #[test]
    fn sorts_by_name_case_insensitively() {
        let mut products = sample();
        sort_products(&mut products, SortOrder::Name);
        assert_eq!(ids(&products), vec!["2", "4", "3", "1"]);
    }

    #[test]
    fn featured_keeps_catalogue_order() {
        let mut products = sample();
        sort_products(&mut products, SortOrder::Featured);
        assert_eq!(ids(&products), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn sort_order_parses_select_values() {
        assert_eq!("price-high".parse(), Ok(SortOrder::PriceHigh));
        assert_eq!("".parse(), Ok(SortOrder::Featured));
        assert!("rating".parse::<SortOrder>().is_err());
    }

    #[test]
    fn categories_are_distinct_in_order() {
        assert_eq!(categories(&sample()), vec!["perfume", "watches", "gifts"]);
    }

    #[test]
    fn quantity_never_drops_below_one() {
        let q = Quantity::default();
        assert_eq!(q.decrement().get(), 1);
        assert_eq!(q.increment().increment().decrement().get(), 2);
        assert_eq!(Quantity::parse("abc").get(), 1);
        assert_eq!(Quantity::parse(" 7 ").get(), 7);
        assert_eq!(Quantity::parse("0").get(), 1);
    }

    #[test]
    fn wishlist_toggle_reports_state() {
        let mut wishlist = Wishlist::default();
        assert!(wishlist.toggle("3"));
        assert_eq!(wishlist_icon(wishlist.contains("3")), "❤️");
        assert!(!wishlist.toggle("3"));
        assert!(wishlist.is_empty());
        assert_eq!(wishlist_message(false), "تمت الإزالة من المفضلة");
    }

    #[test]
    fn product_deserializes_from_catalogue_json() {
        let json = r#"{"id":"9","name":"Musk","category":"perfume","price":"99 ر.س"}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.price(), Some(99));
        assert_eq!(p.cover_image(), None);
    }
}
