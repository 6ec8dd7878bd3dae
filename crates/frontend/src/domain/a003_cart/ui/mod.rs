use contracts::domain::a003_cart::{Cart, CartItem, UpdateQuantityDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_cart::api;
use crate::layout::global_context::{use_app_context, Page};
use crate::layout::toast::use_toast;
use crate::shared::money::format_price;
use crate::system::auth::context::current_user_id;

/// Cart page. The server owns the cart; every mutation response replaces
/// the local copy and refreshes the header badge.
#[component]
pub fn CartPage() -> impl IntoView {
    let ctx = use_app_context();
    let toast = use_toast();
    let (cart, set_cart) = signal(Option::<Cart>::None);

    let apply = move |c: Cart| {
        ctx.cart_count.set(c.items.len());
        set_cart.set(Some(c));
    };

    Effect::new(move |_| {
        let user_id = current_user_id();
        spawn_local(async move {
            match api::fetch_cart(&user_id).await {
                Ok(c) => apply(c),
                Err(e) => toast.error(e),
            }
        });
    });

    let on_set_quantity = move |product_id: String, quantity: u32| {
        if quantity == 0 {
            return;
        }
        let dto = UpdateQuantityDto {
            user_id: current_user_id(),
            product_id,
            quantity,
        };
        spawn_local(async move {
            match api::update_quantity(dto).await {
                Ok(c) => apply(c),
                Err(e) => toast.error(e),
            }
        });
    };

    let on_remove = move |product_id: String| {
        let user_id = current_user_id();
        spawn_local(async move {
            match api::remove_item(&user_id, &product_id).await {
                Ok(c) => apply(c),
                Err(e) => toast.error(e),
            }
        });
    };

    view! {
        <div class="page cart-page">
            <h1>"Your cart"</h1>
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
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Item"</th>
                                <th>"Price"</th>
                                <th>"Quantity"</th>
                                <th>"Line total"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || c.items.clone()
                                key=|item| item.product_id.clone()
                                children=move |item: CartItem| {
                                    let dec_id = item.product_id.clone();
                                    let inc_id = item.product_id.clone();
                                    let remove_id = item.product_id.clone();
                                    let quantity = item.quantity;
                                    view! {
                                        <tr>
                                            <td class="cart-item-name">
                                                {item.product_image.clone().map(|url| {
                                                    view! { <img class="cart-thumb" src=url /> }
                                                })}
                                                {item.product_name.clone()}
                                            </td>
                                            <td>{format_price(item.price)}</td>
                                            <td class="quantity-cell">
                                                <button
                                                    class="btn-quantity"
                                                    disabled={quantity <= 1}
                                                    on:click=move |_| on_set_quantity(
                                                        dec_id.clone(),
                                                        quantity.saturating_sub(1),
                                                    )
                                                >
                                                    "-"
                                                </button>
                                                <span>{quantity}</span>
                                                <button
                                                    class="btn-quantity"
                                                    on:click=move |_| on_set_quantity(
                                                        inc_id.clone(),
                                                        quantity + 1,
                                                    )
                                                >
                                                    "+"
                                                </button>
                                            </td>
                                            <td>{format_price(item.line_total())}</td>
                                            <td>
                                                <button
                                                    class="btn-link danger"
                                                    on:click=move |_| on_remove(remove_id.clone())
                                                >
                                                    "Remove"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                    <div class="cart-footer">
                        <span class="cart-total">"Total: " {format_price(total)}</span>
                        <button
                            class="btn-primary"
                            on:click=move |_| ctx.navigate(Page::Checkout)
                        >
                            "Proceed to checkout"
                        </button>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
