use serde::{Deserialize, Serialize};

use crate::enums::{OrderStatus, PaymentStatus};

/// An order as the backend reports it.
///
/// Statuses arrive as raw strings: the backend may grow values this client
/// has never heard of, and an unrecognized status must render with a neutral
/// badge rather than fail deserialization. `status()` / `payment_status()`
/// give the typed view where one exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: String,
    pub buyer_id: String,
    pub seller_id: String,
    pub status: String,
    pub payment_status: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    #[serde(default)]
    pub shipping_address: String,
    #[serde(default)]
    pub note: Option<String>,
    /// Buyer's payment proof, uploaded at checkout.
    #[serde(default)]
    pub payment_screenshot_url: Option<String>,
    /// Seller's package photo, uploaded at ship-confirm.
    #[serde(default)]
    pub seller_package_image_url: Option<String>,
    /// Buyer's receipt photo, uploaded at delivery-confirm.
    #[serde(default)]
    pub buyer_package_image_url: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

impl Order {
    pub fn status(&self) -> Option<OrderStatus> {
        OrderStatus::parse(&self.status)
    }

    pub fn payment_status(&self) -> Option<PaymentStatus> {
        PaymentStatus::parse(&self.payment_status)
    }
}

/// Denormalized line snapshot taken at order creation; not a live reference
/// to current product data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    #[serde(default)]
    pub product_image: Option<String>,
    pub price: f64,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderDto {
    pub buyer_id: String,
    pub seller_id: String,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    pub shipping_address: String,
    #[serde(default)]
    pub note: Option<String>,
    pub payment_screenshot_url: String,
}
