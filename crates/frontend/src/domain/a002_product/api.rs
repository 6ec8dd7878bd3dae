use contracts::domain::a002_product::{CreateProductDto, Product, ProductQuery, UpdateProductDto};
use urlencoding::encode;

use crate::shared::http;

/// Request path for a catalog query. Empty search and no category collapse
/// to the bare listing endpoint.
fn catalog_path(query: &ProductQuery) -> String {
    let mut path = String::from("/api/products?");
    if !query.search.trim().is_empty() {
        path.push_str(&format!("search={}&", encode(query.search.trim())));
    }
    if let Some(cat) = query.category_id.as_deref().filter(|c| !c.is_empty()) {
        path.push_str(&format!("categoryId={}&", encode(cat)));
    }
    path.pop();
    path
}

/// Active catalog listings, optionally narrowed by search text and
/// category. Filtering also happens client-side for responsiveness; the
/// query keeps result sets small.
pub async fn fetch_catalog(query: &ProductQuery) -> Result<Vec<Product>, String> {
    http::get_json(&catalog_path(query)).await
}

/// Admin-only listing that includes inactive products.
pub async fn fetch_all_products() -> Result<Vec<Product>, String> {
    http::get_json("/api/products/all").await
}

pub async fn fetch_product(id: &str) -> Result<Product, String> {
    http::get_json(&format!("/api/products/{}", id)).await
}

/// A seller's own listings, active or not.
pub async fn fetch_seller_products(seller_id: &str) -> Result<Vec<Product>, String> {
    http::get_json(&format!("/api/products/seller/{}", seller_id)).await
}

pub async fn create_product(dto: CreateProductDto) -> Result<Product, String> {
    http::post_json("/api/products", &dto).await
}

pub async fn update_product(dto: UpdateProductDto) -> Result<Product, String> {
    http::put_json(&format!("/api/products/{}", dto.id), &dto).await
}

pub async fn delete_product(id: &str) -> Result<(), String> {
    http::delete_ack(&format!("/api/products/{}", id)).await
}

/// Flip a listing's active flag (seller pause or admin moderation).
pub async fn set_active(id: &str, active: bool) -> Result<Product, String> {
    http::patch(&format!("/api/products/{}/active?active={}", id, active)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_path_from_query() {
        let empty = ProductQuery::default();
        assert_eq!(catalog_path(&empty), "/api/products");

        let by_category = ProductQuery {
            search: String::new(),
            category_id: Some("cat-7".into()),
        };
        assert_eq!(catalog_path(&by_category), "/api/products?categoryId=cat-7");

        let both = ProductQuery {
            search: "denim jacket".into(),
            category_id: Some("cat-7".into()),
        };
        assert_eq!(
            catalog_path(&both),
            "/api/products?search=denim%20jacket&categoryId=cat-7"
        );
    }

    #[test]
    fn test_catalog_path_ignores_blank_filters() {
        let blanks = ProductQuery {
            search: "   ".into(),
            category_id: Some(String::new()),
        };
        assert_eq!(catalog_path(&blanks), "/api/products");
    }
}
