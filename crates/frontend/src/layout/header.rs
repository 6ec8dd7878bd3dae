use contracts::enums::UserRole;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::{use_app_context, Page};
use crate::system::auth::context::use_auth;

#[component]
fn NavLink(label: &'static str, target: Page) -> impl IntoView {
    let ctx = use_app_context();
    let key = target.key();

    view! {
        <button
            class=move || {
                if ctx.page.get().key() == key { "nav-link nav-link-active" } else { "nav-link" }
            }
            on:click=move |_| ctx.navigate(target.clone())
        >
            {label}
        </button>
    }
}

/// Top navigation bar. Links are role-aware: selling pages appear for
/// sellers, the back office only for admins.
#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let (auth_state, _) = use_auth();

    let role = move || auth_state.get().user_info.as_ref().map(|u| u.role);
    let is_seller = move || matches!(role(), Some(UserRole::Seller) | Some(UserRole::Admin));
    let is_admin = move || matches!(role(), Some(UserRole::Admin));
    let username = move || {
        auth_state
            .get()
            .user_info
            .map(|u| u.username)
            .unwrap_or_default()
    };

    let (_, set_auth_state) = use_auth();
    let on_logout = move |_| {
        spawn_local(async move {
            crate::system::auth::context::do_logout(set_auth_state).await;
        });
    };

    view! {
        <header class="top-header">
            <div class="brand" on:click=move |_| ctx.navigate(Page::Catalog)>
                "Refashion"
            </div>

            <nav class="main-nav">
                <NavLink label="Browse" target=Page::Catalog />
                <NavLink label="Wishlist" target=Page::Wishlist />
                <NavLink label="Messages" target=Page::Messages />
                <NavLink label="My purchases" target=Page::BuyerOrders />
                <Show when=is_seller>
                    <NavLink label="My listings" target=Page::MyListings />
                    <NavLink label="My sales" target=Page::SellerOrders />
                </Show>
                <Show when=is_admin>
                    <span class="nav-divider">"Admin:"</span>
                    <NavLink label="Users" target=Page::AdminUsers />
                    <NavLink label="Categories" target=Page::AdminCategories />
                    <NavLink label="Products" target=Page::AdminProducts />
                    <NavLink label="Orders" target=Page::AdminOrders />
                    <NavLink label="Featured" target=Page::AdminFeatured />
                </Show>
            </nav>

            <div class="header-right">
                <button class="cart-button" on:click=move |_| ctx.navigate(Page::Cart)>
                    "Cart"
                    <Show when={move || ctx.cart_count.get() > 0}>
                        <span class="cart-badge">{move || ctx.cart_count.get()}</span>
                    </Show>
                </button>
                <span class="current-user">{username}</span>
                <button class="btn-link" on:click=on_logout>
                    "Sign out"
                </button>
            </div>
        </header>
    }
}
