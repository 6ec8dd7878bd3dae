use contracts::domain::a007_wishlist::{AddWishlistDto, WishlistItem};

use crate::shared::http;

pub async fn fetch_wishlist(user_id: &str) -> Result<Vec<WishlistItem>, String> {
    http::get_json(&format!("/api/wishlist/{}", user_id)).await
}

pub async fn add_to_wishlist(dto: AddWishlistDto) -> Result<WishlistItem, String> {
    http::post_json("/api/wishlist/add", &dto).await
}

pub async fn remove_from_wishlist(user_id: &str, product_id: &str) -> Result<(), String> {
    http::delete_ack(&format!("/api/wishlist/{}/remove/{}", user_id, product_id)).await
}
