use contracts::enums::UserRole;
use leptos::prelude::*;

use super::context::use_auth;

/// Role of the signed-in user as seen by the component tree.
pub fn viewer_role() -> Option<UserRole> {
    let (auth_state, _) = use_auth();
    auth_state.get().user_info.map(|u| u.role)
}

pub fn is_admin() -> bool {
    matches!(viewer_role(), Some(UserRole::Admin))
}

/// Sellers and admins may manage listings.
pub fn can_sell() -> bool {
    matches!(viewer_role(), Some(UserRole::Seller) | Some(UserRole::Admin))
}
