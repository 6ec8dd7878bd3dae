use contracts::domain::a002_product::Product;
use contracts::domain::a003_cart::AddToCartDto;
use contracts::domain::a007_wishlist::AddWishlistDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_product::api;
use crate::domain::a003_cart::api as cart_api;
use crate::domain::a005_message::ui::ChatOverlay;
use crate::domain::a007_wishlist::api as wishlist_api;
use crate::layout::global_context::{use_app_context, Page};
use crate::layout::toast::use_toast;
use crate::shared::money::format_price;
use crate::system::auth::context::current_user_id;

#[component]
pub fn ProductDetailsPage(id: String) -> impl IntoView {
    let ctx = use_app_context();
    let toast = use_toast();
    let (product, set_product) = signal(Option::<Product>::None);
    let (chat_open, set_chat_open) = signal(false);

    {
        let id = id.clone();
        Effect::new(move |_| {
            let id = id.clone();
            spawn_local(async move {
                match api::fetch_product(&id).await {
                    Ok(p) => set_product.set(Some(p)),
                    Err(e) => toast.error(e),
                }
            });
        });
    }

    let on_add_to_cart = move |product_id: String| {
        let dto = AddToCartDto {
            user_id: current_user_id(),
            product_id,
            quantity: 1,
        };
        spawn_local(async move {
            match cart_api::add_to_cart(dto).await {
                Ok(cart) => {
                    ctx.cart_count.set(cart.items.len());
                    toast.success("Added to cart");
                }
                Err(e) => toast.error(e),
            }
        });
    };

    let on_add_to_wishlist = move |product_id: String| {
        let dto = AddWishlistDto {
            user_id: current_user_id(),
            product_id,
        };
        spawn_local(async move {
            match wishlist_api::add_to_wishlist(dto).await {
                Ok(_) => toast.success("Saved to wishlist"),
                Err(e) => toast.error(e),
            }
        });
    };

    view! {
        <div class="page product-details-page">
            {move || {
                let Some(p) = product.get() else {
                    return view! { <p>"Loading..."</p> }.into_any();
                };
                let mine = p.seller_id == current_user_id();
                let cart_id = p.id.clone();
                let wish_id = p.id.clone();
                let feature_id = p.id.clone();
                let seller_id = p.seller_id.clone();

                view! {
                    <div class="product-gallery">
                        {p.image_urls
                            .iter()
                            .map(|url| view! { <img src=url.clone() alt=p.name.clone() /> })
                            .collect_view()}
                    </div>
                    <h1>{p.name.clone()}</h1>
                    <p class="price">{format_price(p.price)}</p>
                    <p class="description">{p.description.clone()}</p>
                    <Show when={
                        let active = p.active;
                        move || !active
                    }>
                        <p class="inactive-warning">"This listing is currently unavailable."</p>
                    </Show>

                    <div class="product-actions">
                        {if mine {
                            view! {
                                <button
                                    class="btn-secondary"
                                    on:click=move |_| {
                                        ctx.navigate(Page::FeaturedRequest {
                                            product_id: feature_id.clone(),
                                        })
                                    }
                                >
                                    "Promote this listing"
                                </button>
                            }
                            .into_any()
                        } else {
                            view! {
                                <button
                                    class="btn-primary"
                                    disabled=!p.active
                                    on:click=move |_| on_add_to_cart(cart_id.clone())
                                >
                                    "Add to cart"
                                </button>
                                <button
                                    class="btn-secondary"
                                    on:click=move |_| on_add_to_wishlist(wish_id.clone())
                                >
                                    "Add to wishlist"
                                </button>
                                <button
                                    class="btn-secondary"
                                    on:click=move |_| set_chat_open.set(true)
                                >
                                    "Chat with seller"
                                </button>
                            }
                            .into_any()
                        }}
                    </div>

                    <Show when=move || chat_open.get()>
                        {
                            let seller_id = seller_id.clone();
                            view! {
                                <ChatOverlay
                                    counterpart_id=seller_id.clone()
                                    on_close=Callback::new(move |_| set_chat_open.set(false))
                                />
                            }
                        }
                    </Show>
                }
                .into_any()
            }}
        </div>
    }
}
