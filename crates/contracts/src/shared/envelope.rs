use serde::{Deserialize, Serialize};

/// Numeric code the backend puts in every successful envelope.
pub const SUCCESS_CODE: i32 = 1000;

/// The `{code, message, result}` wrapper every API response uses.
///
/// The client gives `code` no semantic interpretation beyond the success
/// constant: a success code with a present `result` is success, anything
/// else surfaces `message` verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub code: i32,
    #[serde(default)]
    pub message: String,
    #[serde(default = "none_result")]
    pub result: Option<T>,
}

fn none_result<T>() -> Option<T> {
    None
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the envelope into the carried result or the server's message.
    pub fn into_result(self) -> Result<T, String> {
        if self.code != SUCCESS_CODE {
            let msg = if self.message.is_empty() {
                format!("Request failed with code {}", self.code)
            } else {
                self.message
            };
            return Err(msg);
        }
        self.result
            .ok_or_else(|| "Response envelope carried no result".to_string())
    }

    /// For mutations where the backend returns a success envelope with an
    /// empty or irrelevant `result`.
    pub fn into_ack(self) -> Result<(), String> {
        if self.code != SUCCESS_CODE {
            let msg = if self.message.is_empty() {
                format!("Request failed with code {}", self.code)
            } else {
                self.message
            };
            return Err(msg);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_unwraps_result() {
        let env: ApiEnvelope<i32> =
            serde_json::from_str(r#"{"code":1000,"message":"ok","result":42}"#).unwrap();
        assert_eq!(env.into_result(), Ok(42));
    }

    #[test]
    fn test_error_surfaces_message() {
        let env: ApiEnvelope<i32> =
            serde_json::from_str(r#"{"code":4012,"message":"Product is inactive"}"#).unwrap();
        assert_eq!(env.into_result(), Err("Product is inactive".to_string()));
    }

    #[test]
    fn test_error_without_message() {
        let env: ApiEnvelope<i32> = ApiEnvelope {
            code: 5000,
            message: String::new(),
            result: None,
        };
        assert_eq!(
            env.into_result(),
            Err("Request failed with code 5000".to_string())
        );
    }

    #[test]
    fn test_success_without_result_is_error() {
        let env: ApiEnvelope<i32> =
            serde_json::from_str(r#"{"code":1000,"message":"ok"}"#).unwrap();
        assert!(env.clone().into_result().is_err());
        // ...but fine as a bare acknowledgement.
        assert_eq!(env.into_ack(), Ok(()));
    }
}
