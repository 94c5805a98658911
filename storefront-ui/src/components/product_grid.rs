// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filterable, sortable product grid.

use storefront_core::catalog::{
    categories, CategoryFilter, ListingQuery, PriceRange, Product, SortOrder,
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::product_card::ProductCard;

#[derive(Properties, PartialEq)]
pub struct ProductGridProps {
    pub products: Vec<Product>,
}

/// Build the price range from the two inputs. Blank inputs leave that
/// side open; both blank means no price filter at all.
fn price_range(min: &str, max: &str) -> Option<PriceRange> {
    let (min, max) = (min.trim(), max.trim());
    if min.is_empty() && max.is_empty() {
        return None;
    }
    let defaults = PriceRange::default();
    Some(PriceRange::new(
        min.parse().unwrap_or(defaults.min),
        max.parse().unwrap_or(defaults.max),
    ))
}

#[function_component(ProductGrid)]
pub fn product_grid(props: &ProductGridProps) -> Html {
    let category = use_state_eq(CategoryFilter::default);
    let min_price = use_state_eq(String::new);
    let max_price = use_state_eq(String::new);
    let order = use_state_eq(SortOrder::default);

    let query = ListingQuery {
        category: (*category).clone(),
        price: price_range(&min_price, &max_price),
        order: *order,
    };
    let visible = query.apply(&props.products);

    let on_category = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            category.set(CategoryFilter::from_value(&value));
        })
    };
    let on_order = {
        let order = order.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            match value.parse::<SortOrder>() {
                Ok(parsed) => order.set(parsed),
                Err(err) => log::warn!("{err}"),
            }
        })
    };
    let price_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            state.set(e.target_unchecked_into::<HtmlInputElement>().value())
        })
    };

    html! {
        <div class="products-listing">
            <div class="products-toolbar">
                <select id="categoryFilter" class="filter-select" onchange={on_category}>
                    <option value="all" selected={*category == CategoryFilter::All}>{ "جميع الفئات" }</option>
                    { for categories(&props.products).into_iter().map(|name| {
                        let selected = *category == CategoryFilter::Only(name.clone());
                        html! { <option value={name.clone()} {selected}>{ name }</option> }
                    }) }
                </select>
                <div class="price-range">
                    <input id="minPrice" type="number" min="0" placeholder="من"
                        value={(*min_price).clone()} oninput={price_input(&min_price)} />
                    <input id="maxPrice" type="number" min="0" placeholder="إلى"
                        value={(*max_price).clone()} oninput={price_input(&max_price)} />
                </div>
                <select id="sortSelect" class="filter-select" onchange={on_order}>
                    { for SortOrder::ALL.iter().map(|option| html! {
                        <option value={option.as_str()} selected={*order == *option}>{ option.label() }</option>
                    }) }
                </select>
            </div>
            <div class="products-grid">
                { for visible.into_iter().map(|product| html! {
                    <ProductCard key={product.id.clone()} product={product.clone()} />
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_inputs_disable_the_price_filter() {
        assert_eq!(price_range("", "  "), None);
    }

    #[test]
    fn one_sided_ranges_stay_open() {
        assert_eq!(price_range("100", ""), Some(PriceRange::new(100, u64::MAX)));
        assert_eq!(price_range("", "250"), Some(PriceRange::new(0, 250)));
    }
}
