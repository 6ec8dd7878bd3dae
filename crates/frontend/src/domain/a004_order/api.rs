use contracts::domain::a004_order::{CreateOrderDto, Order};
use urlencoding::encode;

use crate::shared::http;

/// Create an order from the checkout payload.
pub async fn create_order(dto: CreateOrderDto) -> Result<Order, String> {
    http::post_json("/api/orders", &dto).await
}

pub async fn fetch_order(id: &str) -> Result<Order, String> {
    http::get_json(&format!("/api/orders/{}", id)).await
}

pub async fn fetch_buyer_orders(buyer_id: &str) -> Result<Vec<Order>, String> {
    http::get_json(&format!("/api/orders/buyer/{}", buyer_id)).await
}

pub async fn fetch_seller_orders(seller_id: &str) -> Result<Vec<Order>, String> {
    http::get_json(&format!("/api/orders/seller/{}", seller_id)).await
}

/// Admin: all orders, optionally narrowed to one status.
pub async fn fetch_orders(status: Option<&str>) -> Result<Vec<Order>, String> {
    match status {
        Some(s) if !s.is_empty() => {
            http::get_json(&format!("/api/orders?status={}", encode(s))).await
        }
        _ => http::get_json("/api/orders").await,
    }
}

/// Admin: set the order status directly. The backend owns the transition
/// rules; an invalid request comes back as an error envelope.
pub async fn update_status(id: &str, status: &str) -> Result<Order, String> {
    http::patch(&format!("/api/orders/{}/status?status={}", id, encode(status))).await
}

/// Seller confirms shipment with the uploaded package photo.
pub async fn confirm_shipped(id: &str, image_url: &str, seller_id: &str) -> Result<Order, String> {
    http::patch(&format!(
        "/api/orders/{}/shipped?imageUrls={}&sellerId={}",
        id,
        encode(image_url),
        encode(seller_id)
    ))
    .await
}

/// Buyer confirms delivery with the uploaded receipt photo.
pub async fn confirm_delivered(id: &str, image_url: &str, buyer_id: &str) -> Result<Order, String> {
    http::patch(&format!(
        "/api/orders/{}/delivered?imageUrls={}&buyerId={}",
        id,
        encode(image_url),
        encode(buyer_id)
    ))
    .await
}

/// Admin confirms or refunds the payment.
pub async fn update_payment_status(id: &str, payment_status: &str) -> Result<Order, String> {
    http::patch(&format!(
        "/api/orders/{}/payment-status?paymentStatus={}",
        id,
        encode(payment_status)
    ))
    .await
}
