// SPDX-License-Identifier: MIT OR Apache-2.0

use yew::prelude::*;

use crate::catalog_data::catalog;
use crate::components::product_grid::ProductGrid;

#[function_component(ProductsPage)]
pub fn products_page() -> Html {
    let products = use_memo((), |_| catalog().to_vec());

    html! {
        <main class="products-page">
            <div class="container">
                <h1 class="page-title">{ "المنتجات" }</h1>
                <ProductGrid products={(*products).clone()} />
            </div>
        </main>
    }
}
