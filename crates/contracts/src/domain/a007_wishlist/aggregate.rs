use serde::{Deserialize, Serialize};

/// Saved-for-later entry with the usual add-time snapshot of name, image
/// and price.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub id: String,
    pub user_id: String,
    pub product_id: String,
    pub product_name: String,
    #[serde(default)]
    pub product_image: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub added_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWishlistDto {
    pub user_id: String,
    pub product_id: String,
}
