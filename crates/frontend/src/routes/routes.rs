use leptos::prelude::*;

use crate::domain::a001_category::ui::AdminCategoriesPage;
use crate::domain::a002_product::ui::{
    AdminProductsPage, CatalogPage, MyListingsPage, ProductDetailsPage,
};
use crate::domain::a003_cart::ui::CartPage;
use crate::domain::a004_order::ui::{
    AdminOrdersPage, OrderDetailsPage, OrderScope, OrdersListPage,
};
use crate::domain::a005_message::ui::MessagesPage;
use crate::domain::a006_featured_payment::ui::{AdminFeaturedPage, FeaturedRequestPage};
use crate::domain::a007_wishlist::ui::WishlistPage;
use crate::layout::global_context::{use_app_context, Page};
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard;
use crate::system::pages::login::LoginPage;
use crate::system::users::ui::AdminUsersPage;
use crate::usecases::u501_checkout::CheckoutPage;

/// Top-level gate: the shell renders only for a signed-in session,
/// everything else lands on the login screen.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_app_context();
    ctx.init_router_integration();

    view! {
        <Shell>
            <ActivePage />
        </Shell>
    }
}

/// Renders the page the global context points at. Admin pages fall back to
/// the catalog for non-admin viewers; the backend enforces the same rule on
/// every request regardless.
#[component]
fn ActivePage() -> impl IntoView {
    let ctx = use_app_context();

    move || {
        let page = ctx.page.get();
        let admin_page = matches!(
            page,
            Page::AdminUsers
                | Page::AdminCategories
                | Page::AdminProducts
                | Page::AdminOrders
                | Page::AdminFeatured
        );
        if admin_page && !guard::is_admin() {
            return view! { <CatalogPage /> }.into_any();
        }
        match page {
            Page::Catalog => view! { <CatalogPage /> }.into_any(),
            Page::Product { id } => view! { <ProductDetailsPage id=id /> }.into_any(),
            Page::Cart => view! { <CartPage /> }.into_any(),
            Page::Checkout => view! { <CheckoutPage /> }.into_any(),
            Page::Wishlist => view! { <WishlistPage /> }.into_any(),
            Page::Messages => view! { <MessagesPage /> }.into_any(),
            Page::MyListings => view! { <MyListingsPage /> }.into_any(),
            Page::BuyerOrders => {
                view! { <OrdersListPage scope=OrderScope::Purchases /> }.into_any()
            }
            Page::SellerOrders => {
                view! { <OrdersListPage scope=OrderScope::Sales /> }.into_any()
            }
            Page::Order { id } => view! { <OrderDetailsPage id=id /> }.into_any(),
            Page::FeaturedRequest { product_id } => {
                view! { <FeaturedRequestPage product_id=product_id /> }.into_any()
            }
            Page::AdminUsers => view! { <AdminUsersPage /> }.into_any(),
            Page::AdminCategories => view! { <AdminCategoriesPage /> }.into_any(),
            Page::AdminProducts => view! { <AdminProductsPage /> }.into_any(),
            Page::AdminOrders => view! { <AdminOrdersPage /> }.into_any(),
            Page::AdminFeatured => view! { <AdminFeaturedPage /> }.into_any(),
        }
    }
}
