use serde::{Deserialize, Serialize};

/// A second-hand listing. `active` is flipped by the seller (pausing a
/// listing) or by an admin (moderation); inactive products stay visible to
/// their owner but are excluded from the catalog and rejected at checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub seller_id: String,
    pub category_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub active: bool,
    /// Set server-side while an approved featured-listing payment is live.
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductDto {
    pub seller_id: String,
    pub category_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_urls: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductDto {
    pub id: String,
    pub category_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_urls: Vec<String>,
    pub active: bool,
}

/// Catalog query parameters. All optional; empty search and no category
/// means "everything active".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub category_id: Option<String>,
}
