// SPDX-License-Identifier: MIT OR Apache-2.0

use storefront_core::catalog::{wishlist_icon, wishlist_message, Product};
use storefront_core::notifications::cart_message;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::context::{notify_info, Notifier, WishlistCtx};
use crate::routing::Route;

#[derive(Properties, PartialEq)]
pub struct WishlistButtonProps {
    pub product_id: AttrValue,
}

/// Heart toggle for one product. The button flips its own product only,
/// using the click it received.
#[function_component(WishlistButton)]
pub fn wishlist_button(props: &WishlistButtonProps) -> Html {
    let wishlist = use_context::<WishlistCtx>();
    let notifier = use_context::<Notifier>();
    let listed = wishlist
        .as_ref()
        .is_some_and(|w| w.contains(&props.product_id));

    let onclick = {
        let id = props.product_id.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            event.stop_propagation();
            let Some(wishlist) = wishlist.as_ref() else {
                log::warn!("wishlist toggled outside a wishlist provider");
                return;
            };
            let mut next = (**wishlist).clone();
            let now_listed = next.toggle(&id);
            wishlist.set(next);
            notify_info(notifier.as_ref(), wishlist_message(now_listed));
        })
    };

    html! {
        <button
            class={classes!("wishlist-btn", listed.then_some("active"))}
            data-product-id={props.product_id.clone()}
            {onclick}
        >
            { wishlist_icon(listed) }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct AddToCartProps {
    pub product_name: AttrValue,
    #[prop_or(1)]
    pub quantity: u32,
}

#[function_component(AddToCartButton)]
pub fn add_to_cart_button(props: &AddToCartProps) -> Html {
    let notifier = use_context::<Notifier>();
    let onclick = {
        let name = props.product_name.clone();
        let quantity = props.quantity;
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            log::info!("add to cart: {name} x{quantity}");
            let message = cart_message(&name);
            match notifier.as_ref() {
                Some(notifier) => notifier.cart(message),
                None => log::info!("{message}"),
            }
        })
    };

    html! {
        <button class="btn btn-primary add-to-cart" {onclick}>{ "أضف إلى السلة" }</button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let product = &props.product;

    let on_quick_view = {
        let id = product.id.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            log::info!("quick view: {id}");
        })
    };

    html! {
        <div
            class="product-card"
            data-category={product.category.clone()}
            data-price={product.price_label.clone()}
        >
            <div class="product-image">
                if let Some(src) = product.cover_image() {
                    <img src={src.to_string()} alt={product.name.clone()} loading="lazy" />
                }
                <WishlistButton product_id={product.id.clone()} />
                <button class="quick-view-btn" onclick={on_quick_view}>{ "عرض سريع" }</button>
            </div>
            <div class="product-info">
                <span class="product-category">{ &product.category }</span>
                <h3 class="product-name">
                    <Link<Route> to={Route::Product { id: product.id.clone() }}>
                        { &product.name }
                    </Link<Route>>
                </h3>
                <span class="product-price">{ &product.price_label }</span>
                <AddToCartButton product_name={product.name.clone()} />
            </div>
        </div>
    }
}
