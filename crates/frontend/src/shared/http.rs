//! Thin wrapper around `gloo_net` for envelope-carrying API calls.
//!
//! Every backend response is an `{code, message, result}` envelope. This
//! module attaches the bearer token, checks its expiry before sending (an
//! expired session forces logout instead of issuing a doomed request),
//! unwraps the envelope, and maps transport failures to one generic
//! user-facing message. There are no retries and no request cancellation:
//! a failed call surfaces its message and stops.

use contracts::shared::ApiEnvelope;
use contracts::system::auth::TokenClaims;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::api_url;
use crate::system::auth::{context, storage};

/// Shown for transport-level failures where the server never answered.
pub const GENERIC_ERROR: &str = "An unexpected error occurred";

/// Bearer header value for the stored token, or a forced logout when the
/// token is missing or its `exp` claim already passed.
fn auth_header() -> Result<String, String> {
    let token = match storage::get_token() {
        Some(t) => t,
        None => {
            context::force_logout();
            return Err("Not authenticated".to_string());
        }
    };
    let now_unix = (js_sys::Date::now() / 1000.0) as i64;
    match TokenClaims::decode(&token) {
        Some(claims) if claims.is_expired(now_unix) => {
            context::force_logout();
            Err("Session expired".to_string())
        }
        // An undecodable token is left for the server to reject with 401.
        _ => Ok(format!("Bearer {}", token)),
    }
}

async fn read_envelope<T>(response: Response) -> Result<T, String>
where
    T: DeserializeOwned,
{
    if response.status() == 401 {
        context::force_logout();
        return Err("Session expired".to_string());
    }
    let ok = response.ok();
    match response.json::<ApiEnvelope<T>>().await {
        Ok(envelope) => envelope.into_result(),
        Err(_) if ok => Err("Failed to parse response".to_string()),
        Err(_) => Err(GENERIC_ERROR.to_string()),
    }
}

async fn read_ack(response: Response) -> Result<(), String> {
    if response.status() == 401 {
        context::force_logout();
        return Err("Session expired".to_string());
    }
    let ok = response.ok();
    match response.json::<ApiEnvelope<serde_json::Value>>().await {
        Ok(envelope) => envelope.into_ack(),
        Err(_) if ok => Ok(()),
        Err(_) => Err(GENERIC_ERROR.to_string()),
    }
}

pub async fn get_json<T>(path: &str) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let auth = auth_header()?;
    let response = Request::get(&api_url(path))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|_| GENERIC_ERROR.to_string())?;
    read_envelope(response).await
}

pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, String>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let auth = auth_header()?;
    let response = Request::post(&api_url(path))
        .header("Authorization", &auth)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|_| GENERIC_ERROR.to_string())?;
    read_envelope(response).await
}

/// POST where only the acknowledgement matters.
pub async fn post_ack<B>(path: &str, body: &B) -> Result<(), String>
where
    B: Serialize,
{
    let auth = auth_header()?;
    let response = Request::post(&api_url(path))
        .header("Authorization", &auth)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|_| GENERIC_ERROR.to_string())?;
    read_ack(response).await
}

pub async fn put_json<B, T>(path: &str, body: &B) -> Result<T, String>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let auth = auth_header()?;
    let response = Request::put(&api_url(path))
        .header("Authorization", &auth)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|_| GENERIC_ERROR.to_string())?;
    read_envelope(response).await
}

/// PATCH with all parameters in the query string, the backend's convention
/// for lifecycle transitions.
pub async fn patch<T>(path: &str) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let auth = auth_header()?;
    let response = Request::patch(&api_url(path))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|_| GENERIC_ERROR.to_string())?;
    read_envelope(response).await
}

pub async fn patch_json<B, T>(path: &str, body: &B) -> Result<T, String>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let auth = auth_header()?;
    let response = Request::patch(&api_url(path))
        .header("Authorization", &auth)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|_| GENERIC_ERROR.to_string())?;
    read_envelope(response).await
}

/// DELETE that returns the updated resource (cart line removal).
pub async fn delete_json<T>(path: &str) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let auth = auth_header()?;
    let response = Request::delete(&api_url(path))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|_| GENERIC_ERROR.to_string())?;
    read_envelope(response).await
}

pub async fn delete_ack(path: &str) -> Result<(), String> {
    let auth = auth_header()?;
    let response = Request::delete(&api_url(path))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|_| GENERIC_ERROR.to_string())?;
    read_ack(response).await
}

/// Unauthenticated POST, used by login and registration only.
pub async fn post_json_public<B, T>(path: &str, body: &B) -> Result<T, String>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|_| GENERIC_ERROR.to_string())?;
    read_envelope(response).await
}
