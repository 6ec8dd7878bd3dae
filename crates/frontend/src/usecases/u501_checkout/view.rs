use contracts::domain::a003_cart::{Cart, CartItem};
use contracts::domain::a004_order::{CreateOrderDto, OrderItem};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_product::api as product_api;
use crate::domain::a003_cart::api as cart_api;
use crate::domain::a004_order::api as order_api;
use crate::layout::global_context::{use_app_context, Page};
use crate::layout::toast::use_toast;
use crate::shared::money::format_price;
use crate::shared::upload::{file_from_input, upload_image};
use crate::system::auth::context::current_user_id;
use crate::usecases::u501_checkout::validate::validate_checkout;

fn order_items(items: &[CartItem]) -> Vec<OrderItem> {
    items
        .iter()
        .map(|item| OrderItem {
            product_id: item.product_id.clone(),
            product_name: item.product_name.clone(),
            product_image: item.product_image.clone(),
            price: item.price,
            quantity: item.quantity,
        })
        .collect()
}

/// Checkout flow: shipping details, payment-proof upload, then order
/// creation. Each product's `active` flag is re-queried just before submit;
/// the race with a concurrent deactivation is accepted, the backend gives
/// the final answer.
#[component]
pub fn CheckoutPage() -> impl IntoView {
    let ctx = use_app_context();
    let toast = use_toast();
    let (cart, set_cart) = signal(Option::<Cart>::None);
    let (shipping_address, set_shipping_address) = signal(String::new());
    let (note, set_note) = signal(String::new());
    let (proof_url, set_proof_url) = signal(Option::<String>::None);
    let (is_uploading, set_is_uploading) = signal(false);
    let (is_submitting, set_is_submitting) = signal(false);

    Effect::new(move |_| {
        let user_id = current_user_id();
        spawn_local(async move {
            match cart_api::fetch_cart(&user_id).await {
                Ok(c) => set_cart.set(Some(c)),
                Err(e) => toast.error(e),
            }
        });
    });

    let on_proof = move |ev: leptos::ev::Event| {
        let Some(file) = file_from_input(&ev) else {
            return;
        };
        set_is_uploading.set(true);
        spawn_local(async move {
            match upload_image(file).await {
                Ok(url) => set_proof_url.set(Some(url)),
                Err(e) => toast.error(e),
            }
            set_is_uploading.set(false);
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get() || is_uploading.get() {
            return;
        }
        let Some(c) = cart.get() else {
            return;
        };
        let address = shipping_address.get();
        if let Err(err) = validate_checkout(&c.items, &address) {
            toast.error(err.message());
            return;
        }
        let Some(proof) = proof_url.get() else {
            toast.error("Upload your payment proof first");
            return;
        };
        let seller_id = c.items[0].seller_id.clone();
        let dto = CreateOrderDto {
            buyer_id: current_user_id(),
            seller_id,
            items: order_items(&c.items),
            total_amount: c.total,
            shipping_address: address.trim().to_string(),
            note: {
                let n = note.get().trim().to_string();
                if n.is_empty() {
                    None
                } else {
                    Some(n)
                }
            },
            payment_screenshot_url: proof,
        };
        set_is_submitting.set(true);
        spawn_local(async move {
            // Availability pre-check: a listing pulled since the cart was
            // filled fails here with a clearer message than the server's.
            for item in &c.items {
                match product_api::fetch_product(&item.product_id).await {
                    Ok(p) if !p.active => {
                        toast.error(format!("'{}' is no longer available", p.name));
                        set_is_submitting.set(false);
                        return;
                    }
                    Ok(_) => {}
                    Err(e) => {
                        toast.error(e);
                        set_is_submitting.set(false);
                        return;
                    }
                }
            }
            match order_api::create_order(dto).await {
                Ok(order) => {
                    // The backend empties the cart as part of order creation.
                    ctx.cart_count.set(0);
                    toast.success("Order placed");
                    ctx.navigate(Page::Order { id: order.order_id });
                }
                Err(e) => toast.error(e),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="page checkout-page">
            <h1>"Checkout"</h1>

            {move || {
                let Some(c) = cart.get() else {
                    return view! { <p>"Loading..."</p> }.into_any();
                };
                if c.items.is_empty() {
                    return view! { <p class="empty-state">"Your cart is empty."</p> }
                        .into_any();
                }
                let total = c.total;
                view! {
                    <ul class="checkout-summary">
                        {c.items
                            .iter()
                            .map(|item| {
                                view! {
                                    <li>
                                        {format!("{} x{}", item.product_name, item.quantity)}
                                        <span>{format_price(item.line_total())}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <p class="cart-total">"Total: " {format_price(total)}</p>
                }
                .into_any()
            }}

            <form class="checkout-form" on:submit=on_submit>
                <label>
                    "Shipping address"
                    <textarea
                        placeholder="Street, city, postal code"
                        prop:value=move || shipping_address.get()
                        on:input=move |ev| set_shipping_address.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label>
                    "Note to seller (optional)"
                    <input
                        type="text"
                        value=move || note.get()
                        on:input=move |ev| set_note.set(event_target_value(&ev))
                    />
                </label>

                <label>
                    "Payment proof"
                    <input type="file" accept="image/*" on:change=on_proof />
                </label>
                <Show when=move || is_uploading.get()>
                    <span class="upload-hint">"Uploading proof..."</span>
                </Show>
                {move || {
                    proof_url
                        .get()
                        .map(|url| view! { <img class="proof-preview" src=url /> })
                }}

                <button
                    type="submit"
                    class="btn-primary"
                    disabled=move || {
                        is_submitting.get() || is_uploading.get() || proof_url.get().is_none()
                    }
                >
                    "Place order"
                </button>
            </form>
        </div>
    }
}
