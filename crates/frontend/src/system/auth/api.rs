use contracts::system::auth::{LoginRequest, LoginResponse, RegisterRequest, UserInfo};

use crate::shared::http;

/// Sign in with email and password.
pub async fn login(email: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { email, password };
    http::post_json_public("/api/auth/login", &request).await
}

/// Create a new account. The backend signs the user in on success.
pub async fn register(
    username: String,
    email: String,
    password: String,
) -> Result<LoginResponse, String> {
    let request = RegisterRequest {
        username,
        email,
        password,
    };
    http::post_json_public("/api/auth/register", &request).await
}

/// Fetch the profile behind the stored token.
pub async fn get_current_user() -> Result<UserInfo, String> {
    http::get_json("/api/auth/me").await
}
