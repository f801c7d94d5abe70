//! REST API module.
//!
//! Contains all API routes and handlers. Every endpoint answers with the same
//! `{code, msg, extras}` envelope.

mod departments;
mod employees;

pub use departments::*;
pub use employees::*;

use axum::{
    extract::{FromRequest, FromRequestParts},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::AppError;

/// Envelope code for a successful request.
pub const CODE_SUCCESS: i32 = 0;
/// Envelope code for a failed request.
pub const CODE_FAILURE: i32 = 100;

const MSG_SUCCESS: &str = "处理成功!";
const MSG_FAILURE: &str = "处理失败!";

/// Response envelope shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub code: i32,
    pub msg: String,
    pub extras: Map<String, Value>,
}

impl ApiResponse {
    pub fn success() -> Self {
        Self {
            code: CODE_SUCCESS,
            msg: MSG_SUCCESS.to_string(),
            extras: Map::new(),
        }
    }

    pub fn fail() -> Self {
        Self {
            code: CODE_FAILURE,
            msg: MSG_FAILURE.to_string(),
            extras: Map::new(),
        }
    }

    /// Replace the human readable message.
    pub fn with_msg(mut self, msg: impl Into<String>) -> Self {
        self.msg = msg.into();
        self
    }

    /// Attach a value under `key` in `extras`.
    pub fn add<T: Serialize>(mut self, key: &str, value: T) -> Self {
        let value = serde_json::to_value(value).unwrap_or_else(|e| {
            tracing::warn!("Failed to serialize extras[{}]: {}", key, e);
            Value::Null
        });
        self.extras.insert(key.to_string(), value);
        self
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either an envelope or an error.
pub type ApiResult = Result<ApiResponse, AppError>;

/// Form extractor whose rejections become failure envelopes.
#[derive(FromRequest)]
#[from_request(via(axum::Form), rejection(AppError))]
pub struct AppForm<T>(pub T);

/// Query extractor whose rejections become failure envelopes.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let body = serde_json::to_value(ApiResponse::success()).unwrap();
        assert_eq!(
            body,
            json!({ "code": 0, "msg": "处理成功!", "extras": {} })
        );
    }

    #[test]
    fn test_fail_envelope_with_extras() {
        let resp = ApiResponse::fail().add("va_msg", "用户名不可用");

        let body = serde_json::to_value(resp).unwrap();
        assert_eq!(body["code"], 100);
        assert_eq!(body["extras"]["va_msg"], "用户名不可用");
    }

    #[test]
    fn test_add_none_serializes_null() {
        let resp = ApiResponse::success().add("emp", Option::<i32>::None);
        assert_eq!(resp.extras.get("emp"), Some(&Value::Null));
    }
}
