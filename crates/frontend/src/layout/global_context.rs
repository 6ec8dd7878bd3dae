use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// The page the shell is currently showing. The app keeps a single active
/// page instead of a tab stack; the query string mirrors it so reloads and
/// shared links land on the same view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Catalog,
    Product { id: String },
    Cart,
    Checkout,
    Wishlist,
    Messages,
    MyListings,
    BuyerOrders,
    SellerOrders,
    Order { id: String },
    FeaturedRequest { product_id: String },
    AdminUsers,
    AdminCategories,
    AdminProducts,
    AdminOrders,
    AdminFeatured,
}

impl Page {
    pub fn key(&self) -> &'static str {
        match self {
            Page::Catalog => "catalog",
            Page::Product { .. } => "product",
            Page::Cart => "cart",
            Page::Checkout => "checkout",
            Page::Wishlist => "wishlist",
            Page::Messages => "messages",
            Page::MyListings => "my-listings",
            Page::BuyerOrders => "purchases",
            Page::SellerOrders => "sales",
            Page::Order { .. } => "order",
            Page::FeaturedRequest { .. } => "feature",
            Page::AdminUsers => "admin-users",
            Page::AdminCategories => "admin-categories",
            Page::AdminProducts => "admin-products",
            Page::AdminOrders => "admin-orders",
            Page::AdminFeatured => "admin-featured",
        }
    }

    /// Entity id carried in the query string, when the page has one.
    pub fn param(&self) -> Option<&str> {
        match self {
            Page::Product { id } | Page::Order { id } => Some(id),
            Page::FeaturedRequest { product_id } => Some(product_id),
            _ => None,
        }
    }

    /// Rebuild a page from `?page=` and `?id=`. Unknown keys fall back to
    /// the catalog so stale links never strand the user on a blank shell.
    pub fn from_parts(key: &str, id: Option<&str>) -> Page {
        let id = id.unwrap_or_default();
        match key {
            "product" if !id.is_empty() => Page::Product { id: id.to_string() },
            "cart" => Page::Cart,
            "checkout" => Page::Checkout,
            "wishlist" => Page::Wishlist,
            "messages" => Page::Messages,
            "my-listings" => Page::MyListings,
            "purchases" => Page::BuyerOrders,
            "sales" => Page::SellerOrders,
            "order" if !id.is_empty() => Page::Order { id: id.to_string() },
            "feature" if !id.is_empty() => Page::FeaturedRequest {
                product_id: id.to_string(),
            },
            "admin-users" => Page::AdminUsers,
            "admin-categories" => Page::AdminCategories,
            "admin-products" => Page::AdminProducts,
            "admin-orders" => Page::AdminOrders,
            "admin-featured" => Page::AdminFeatured,
            _ => Page::Catalog,
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<Page>,
    /// Number of lines in the signed-in user's cart, shown in the header
    /// badge. Updated by cart pages after each re-fetch.
    pub cart_count: RwSignal<usize>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(Page::Catalog),
            cart_count: RwSignal::new(0),
        }
    }

    pub fn navigate(&self, page: Page) {
        self.page.set(page);
    }

    /// Restore the active page from the query string, then keep the query
    /// string in sync while the user navigates. Runs once at shell mount.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(key) = params.get("page") {
            let page = Page::from_parts(key, params.get("id").map(|s| s.as_str()));
            self.page.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.page.get();
            let mut query = HashMap::from([("page".to_string(), page.key().to_string())]);
            if let Some(id) = page.param() {
                query.insert("id".to_string(), id.to_string());
            }
            if let Ok(qs) = serde_qs::to_string(&query) {
                if let Some(w) = window() {
                    let _ = w.history().and_then(|h| {
                        h.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&format!("?{}", qs)),
                        )
                    });
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_roundtrip() {
        let pages = [
            Page::Catalog,
            Page::Product { id: "p-9".into() },
            Page::Order { id: "o-3".into() },
            Page::AdminOrders,
        ];
        for page in pages {
            let back = Page::from_parts(page.key(), page.param());
            assert_eq!(back, page);
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_catalog() {
        assert_eq!(Page::from_parts("nonsense", None), Page::Catalog);
        // A detail page without an id is equally unusable.
        assert_eq!(Page::from_parts("product", None), Page::Catalog);
        assert_eq!(Page::from_parts("order", Some("")), Page::Catalog);
    }
}
