use contracts::domain::a003_cart::AddToCartDto;
use contracts::domain::a007_wishlist::WishlistItem;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_cart::api as cart_api;
use crate::domain::a007_wishlist::api;
use crate::layout::global_context::{use_app_context, Page};
use crate::layout::toast::use_toast;
use crate::shared::date_utils::format_date;
use crate::shared::money::format_price;
use crate::system::auth::context::current_user_id;

/// Saved-for-later page. "Move to cart" adds the product to the cart and
/// drops it from the wishlist.
#[component]
pub fn WishlistPage() -> impl IntoView {
    let ctx = use_app_context();
    let toast = use_toast();
    let (items, set_items) = signal(Vec::<WishlistItem>::new());
    let (is_loaded, set_is_loaded) = signal(false);

    let reload = move || {
        let user_id = current_user_id();
        spawn_local(async move {
            match api::fetch_wishlist(&user_id).await {
                Ok(list) => {
                    set_items.set(list);
                    set_is_loaded.set(true);
                }
                Err(e) => toast.error(e),
            }
        });
    };

    Effect::new(move |_| {
        reload();
    });

    let on_remove = move |product_id: String| {
        let user_id = current_user_id();
        spawn_local(async move {
            match api::remove_from_wishlist(&user_id, &product_id).await {
                Ok(()) => reload(),
                Err(e) => toast.error(e),
            }
        });
    };

    let on_move_to_cart = move |product_id: String| {
        let user_id = current_user_id();
        let dto = AddToCartDto {
            user_id: user_id.clone(),
            product_id: product_id.clone(),
            quantity: 1,
        };
        spawn_local(async move {
            match cart_api::add_to_cart(dto).await {
                Ok(cart) => {
                    ctx.cart_count.set(cart.items.len());
                    match api::remove_from_wishlist(&user_id, &product_id).await {
                        Ok(()) => {
                            toast.success("Moved to cart");
                            reload();
                        }
                        Err(e) => toast.error(e),
                    }
                }
                Err(e) => toast.error(e),
            }
        });
    };

    view! {
        <div class="page wishlist-page">
            <h1>"Wishlist"</h1>

            <Show when=move || is_loaded.get() fallback=|| view! { <p>"Loading..."</p> }>
                <Show
                    when=move || !items.get().is_empty()
                    fallback=|| view! { <p class="empty-state">"Nothing saved yet."</p> }
                >
                    <div class="wishlist-grid">
                        <For
                            each=move || items.get()
                            key=|item| item.id.clone()
                            children=move |item: WishlistItem| {
                                let open_id = item.product_id.clone();
                                let cart_id = item.product_id.clone();
                                let remove_id = item.product_id.clone();
                                view! {
                                    <div class="wishlist-card">
                                        {item.product_image.clone().map(|url| {
                                            view! { <img class="wishlist-thumb" src=url /> }
                                        })}
                                        <h3
                                            class="link-title"
                                            on:click=move |_| {
                                                ctx.navigate(Page::Product { id: open_id.clone() })
                                            }
                                        >
                                            {item.product_name.clone()}
                                        </h3>
                                        <p class="price">{format_price(item.price)}</p>
                                        <p class="added-at">
                                            "Saved " {format_date(&item.added_at)}
                                        </p>
                                        <button
                                            class="btn-primary"
                                            on:click=move |_| on_move_to_cart(cart_id.clone())
                                        >
                                            "Move to cart"
                                        </button>
                                        <button
                                            class="btn-link danger"
                                            on:click=move |_| on_remove(remove_id.clone())
                                        >
                                            "Remove"
                                        </button>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
