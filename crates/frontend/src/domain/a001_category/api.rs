use contracts::domain::a001_category::{Category, CreateCategoryDto, UpdateCategoryDto};

use crate::shared::http;

pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    http::get_json("/api/categories").await
}

pub async fn create_category(dto: CreateCategoryDto) -> Result<Category, String> {
    http::post_json("/api/categories", &dto).await
}

pub async fn update_category(dto: UpdateCategoryDto) -> Result<Category, String> {
    http::put_json(&format!("/api/categories/{}", dto.id), &dto).await
}

pub async fn delete_category(id: &str) -> Result<(), String> {
    http::delete_ack(&format!("/api/categories/{}", id)).await
}
