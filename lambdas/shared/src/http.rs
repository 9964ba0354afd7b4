//! Status/payload pairs and their API Gateway rendering

use lambda_http::{Body, Error as LambdaError, Response};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::error;

/// Headers attached to every HTTP response
pub const CORS_HEADERS: [(&str, &str); 4] = [
    ("Access-Control-Allow-Origin", "*"),
    (
        "Access-Control-Allow-Headers",
        "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token",
    ),
    ("Access-Control-Allow-Methods", "GET,PUT,DELETE,POST,OPTIONS"),
    ("Content-Type", "application/json"),
];

/// Transport-neutral output of an HTTP handler
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub payload: Value,
}

impl ApiResponse {
    /// Serialize a typed body
    pub fn json<T: Serialize>(status: u16, body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(payload) => Self { status, payload },
            Err(e) => {
                error!(error = %e, "Failed to serialize response body");
                Self::error(500, "internal")
            }
        }
    }

    /// `{"error": message}` with the given status
    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            payload: Value::Object(Map::from_iter([(
                "error".to_string(),
                Value::String(message.into()),
            )])),
        }
    }

    /// Render as an API Gateway proxy response
    pub fn into_response(self) -> Result<Response<Body>, LambdaError> {
        let mut builder = Response::builder().status(self.status);
        for (name, value) in CORS_HEADERS {
            builder = builder.header(name, value);
        }
        Ok(builder.body(Body::from(serde_json::to_string(&self.payload)?))?)
    }
}
