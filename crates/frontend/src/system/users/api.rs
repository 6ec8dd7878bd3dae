use contracts::system::users::{CreateUserDto, UpdateUserDto, User};

use crate::shared::http;

/// Fetch all users (admin back office).
pub async fn fetch_users() -> Result<Vec<User>, String> {
    http::get_json("/api/users").await
}

/// Look up a single user, used to resolve buyer/seller display names on
/// order pages.
pub async fn fetch_user(id: &str) -> Result<User, String> {
    http::get_json(&format!("/api/users/{}", id)).await
}

/// Create a new user.
pub async fn create_user(dto: CreateUserDto) -> Result<User, String> {
    http::post_json("/api/users", &dto).await
}

/// Update an existing user.
pub async fn update_user(dto: UpdateUserDto) -> Result<User, String> {
    http::put_json(&format!("/api/users/{}", dto.id), &dto).await
}

/// Delete a user.
pub async fn delete_user(id: &str) -> Result<(), String> {
    http::delete_ack(&format!("/api/users/{}", id)).await
}
