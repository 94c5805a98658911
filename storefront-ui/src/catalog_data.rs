// SPDX-License-Identifier: MIT OR Apache-2.0

//! Product catalogue bundled into the binary.

use anyhow::Context;
use once_cell::sync::Lazy;
use storefront_core::catalog::Product;

const CATALOG_JSON: &str = include_str!("../assets/catalog.json");

// Parsed on first use; empty if the bundled data is broken.
static CATALOG: Lazy<Vec<Product>> = Lazy::new(|| {
    load_catalog().unwrap_or_else(|e| {
        log::error!("{e:#}");
        Vec::new()
    })
});

pub fn load_catalog() -> anyhow::Result<Vec<Product>> {
    serde_json::from_str(CATALOG_JSON).context("failed to parse bundled catalog.json")
}

pub fn catalog() -> &'static [Product] {
    &CATALOG
}

pub fn find_product(id: &str) -> Option<&'static Product> {
    catalog().iter().find(|p| p.id == id)
}
