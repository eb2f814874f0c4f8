use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

const JSON_BODY_LIMIT_BYTES: usize = 65_536; // 64KB

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiSuccess<T> {
    pub success: bool,
    pub data: T
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiFailure {
    pub success: bool,
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>
}

pub fn success<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(ApiSuccess { success: true, data })
}

pub fn failure(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(ApiFailure {
        success: false,
        error: message.to_owned(),
        code: None,
        details: None
    })
}

pub fn failure_with_details(
    status: StatusCode,
    message: &str,
    code: &str,
    details: serde_json::Value
) -> HttpResponse {
    HttpResponse::build(status).json(ApiFailure {
        success: false,
        error: message.to_owned(),
        code: Some(code.to_owned()),
        details: Some(details)
    })
}

/// Rejected JSON bodies get the same envelope as every other failure.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT_BYTES)
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
            let response = failure_with_details(
                StatusCode::BAD_REQUEST,
                "Validation error",
                "invalid_body",
                serde_json::Value::String(err.to_string())
            );
            InternalError::from_response(err, response).into()
        })
}
