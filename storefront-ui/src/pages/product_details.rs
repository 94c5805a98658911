// SPDX-License-Identifier: MIT OR Apache-2.0

use storefront_core::catalog::Quantity;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::catalog_data::find_product;
use crate::components::product_card::{AddToCartButton, WishlistButton};
use crate::components::product_gallery::ProductGallery;
use crate::components::quantity_stepper::QuantityStepper;
use crate::routing::Route;

#[derive(Properties, PartialEq)]
pub struct ProductDetailsProps {
    pub id: String,
}

#[function_component(ProductDetailsPage)]
pub fn product_details_page(props: &ProductDetailsProps) -> Html {
    let quantity = use_state_eq(Quantity::default);
    let Some(product) = find_product(&props.id) else {
        log::warn!("unknown product id: {}", props.id);
        return html! {
            <main class="product-details not-found">
                <p>{ "المنتج غير موجود." }</p>
                <Link<Route> to={Route::Products}>{ "العودة إلى المنتجات" }</Link<Route>>
            </main>
        };
    };

    let on_quantity = {
        let quantity = quantity.clone();
        Callback::from(move |value: Quantity| quantity.set(value))
    };

    html! {
        <main class="product-details">
            <div class="container product-details-grid">
                <ProductGallery images={product.images.clone()} alt={product.name.clone()} />
                <div class="product-summary">
                    <span class="product-category">{ &product.category }</span>
                    <h1 class="product-name">{ &product.name }</h1>
                    <span class="product-price">{ &product.price_label }</span>
                    <QuantityStepper value={*quantity} on_change={on_quantity} />
                    <div class="product-actions">
                        <AddToCartButton product_name={product.name.clone()} quantity={quantity.get()} />
                        <WishlistButton product_id={product.id.clone()} />
                    </div>
                </div>
            </div>
        </main>
    }
}
