use serde::{Deserialize, Serialize};

/// Role a user acts under. Every account can buy; selling and admin
/// capabilities are granted server-side. For order pages the role describes
/// the viewer's relationship to the order, not a global permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Buyer,
    Seller,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Buyer => "BUYER",
            UserRole::Seller => "SELLER",
            UserRole::Admin => "ADMIN",
        }
    }

    pub fn parse(s: &str) -> Option<UserRole> {
        match s {
            "BUYER" => Some(UserRole::Buyer),
            "SELLER" => Some(UserRole::Seller),
            "ADMIN" => Some(UserRole::Admin),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
