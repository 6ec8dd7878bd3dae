use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::enums::UserRole;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Profile of the signed-in user, cached client-side alongside the token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Claims the client reads out of the bearer token.
///
/// Decoded without signature verification: the client only needs the expiry
/// to decide whether a request is worth sending. The server still verifies
/// every token it receives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    pub sub: String,
    #[serde(default)]
    pub role: Option<UserRole>,
    /// Expiry as unix seconds.
    pub exp: i64,
}

impl TokenClaims {
    /// Decode the payload segment of a JWT. Returns `None` for anything
    /// that is not a three-segment token with a JSON payload carrying `exp`.
    pub fn decode(token: &str) -> Option<TokenClaims> {
        let mut segments = token.split('.');
        let _header = segments.next()?;
        let payload = segments.next()?;
        let _signature = segments.next()?;
        if segments.next().is_some() {
            return None;
        }
        let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    /// True when the token's `exp` claim lies at or before `now_unix`.
    pub fn is_expired(&self, now_unix: i64) -> bool {
        self.exp <= now_unix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_token(claims: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
        format!("{}.{}.sig", header, payload)
    }

    #[test]
    fn test_decode_claims() {
        let token = make_token(&serde_json::json!({
            "sub": "user-17",
            "role": "SELLER",
            "exp": 2_000_000_000i64,
        }));
        let claims = TokenClaims::decode(&token).unwrap();
        assert_eq!(claims.sub, "user-17");
        assert_eq!(claims.role, Some(UserRole::Seller));
        assert!(!claims.is_expired(1_900_000_000));
    }

    #[test]
    fn test_expired_claim() {
        let token = make_token(&serde_json::json!({"sub": "u", "exp": 100i64}));
        let claims = TokenClaims::decode(&token).unwrap();
        assert!(claims.is_expired(101));
        assert!(claims.is_expired(100));
        assert!(!claims.is_expired(99));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(TokenClaims::decode("not-a-jwt").is_none());
        assert!(TokenClaims::decode("a.b").is_none());
        assert!(TokenClaims::decode("a.%%%.c").is_none());
        assert!(TokenClaims::decode("a.b.c.d").is_none());
    }
}
