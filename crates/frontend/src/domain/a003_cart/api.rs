use contracts::domain::a003_cart::{AddToCartDto, Cart, UpdateQuantityDto};

use crate::shared::http;

/// Every mutation returns the full cart; callers replace their local copy
/// wholesale instead of merging.
pub async fn fetch_cart(user_id: &str) -> Result<Cart, String> {
    http::get_json(&format!("/api/carts/{}", user_id)).await
}

pub async fn add_to_cart(dto: AddToCartDto) -> Result<Cart, String> {
    http::post_json("/api/carts/add", &dto).await
}

pub async fn update_quantity(dto: UpdateQuantityDto) -> Result<Cart, String> {
    http::patch_json("/api/carts/updateQuantity", &dto).await
}

pub async fn remove_item(user_id: &str, product_id: &str) -> Result<Cart, String> {
    http::delete_json(&format!("/api/carts/{}/remove/{}", user_id, product_id)).await
}
