use contracts::system::auth::UserInfo;
use web_sys::window;

const TOKEN_KEY: &str = "refashion_token";
const USER_KEY: &str = "refashion_user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the bearer token to localStorage
pub fn save_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Get the bearer token from localStorage
pub fn get_token() -> Option<String> {
    get_local_storage()?.get_item(TOKEN_KEY).ok()?
}

/// Cache the signed-in user's profile next to the token so the shell can
/// render role-aware navigation before the first `/me` round trip.
pub fn save_user(user: &UserInfo) {
    if let (Some(storage), Ok(json)) = (get_local_storage(), serde_json::to_string(user)) {
        let _ = storage.set_item(USER_KEY, &json);
    }
}

pub fn get_user() -> Option<UserInfo> {
    let json = get_local_storage()?.get_item(USER_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

/// Clear token and cached profile
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}
