use serde::{Deserialize, Serialize};

/// Per-user cart aggregate. The server owns it; the client replaces its
/// local copy wholesale after every mutation instead of merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    #[serde(default)]
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub total: f64,
}

/// Denormalized snapshot taken at add-time. Name, image and price do not
/// track later edits to the product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    pub product_name: String,
    #[serde(default)]
    pub product_image: Option<String>,
    pub seller_id: String,
    pub price: f64,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartDto {
    pub user_id: String,
    pub product_id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuantityDto {
    pub user_id: String,
    pub product_id: String,
    pub quantity: u32,
}
