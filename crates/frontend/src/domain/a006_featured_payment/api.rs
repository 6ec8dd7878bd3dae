use contracts::domain::a006_featured_payment::{CreateFeaturedPaymentDto, FeaturedPayment};
use urlencoding::encode;

use crate::shared::http;

pub async fn create_request(dto: CreateFeaturedPaymentDto) -> Result<FeaturedPayment, String> {
    http::post_json("/api/featured-payments", &dto).await
}

/// Admin approval queue.
pub async fn fetch_requests(admin_id: &str) -> Result<Vec<FeaturedPayment>, String> {
    http::get_json(&format!("/api/featured-payments?adminId={}", encode(admin_id))).await
}

/// Payments filed for one product, for the pre-submit "already featured"
/// check. The backend enforces the rule regardless.
pub async fn fetch_for_product(product_id: &str) -> Result<Vec<FeaturedPayment>, String> {
    http::get_json(&format!(
        "/api/featured-payments/product/{}",
        encode(product_id)
    ))
    .await
}

pub async fn confirm(id: &str, approve: bool) -> Result<FeaturedPayment, String> {
    http::patch(&format!(
        "/api/featured-payments/{}/confirm?approve={}",
        id, approve
    ))
    .await
}
