use serde::{Deserialize, Serialize};

use crate::enums::UserRole;

/// Full user record as returned to the admin back office.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub active: bool,
}
