use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::web::JsonConfig;
use actix_web::HttpResponse;
use tracing::warn;

use crate::shared::api::ApiResponse;

/// Batch bodies carry many rows, so the limit sits well above actix's 32 KiB default.
const MAX_JSON_BYTES: usize = 1024 * 1024;

/// JSON extractor config whose failures use the API error envelope.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(MAX_JSON_BYTES)
        .error_handler(|err, req| {
            warn!("Rejected JSON body on {} {}: {}", req.method(), req.path(), err);
            let response = payload_error_response(&err);
            InternalError::from_response(err, response).into()
        })
}

fn payload_error_response(err: &JsonPayloadError) -> HttpResponse {
    match err {
        JsonPayloadError::ContentType => ApiResponse::error(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "UNSUPPORTED_MEDIA_TYPE",
            "Expected an application/json body",
        ),
        JsonPayloadError::Overflow { limit } | JsonPayloadError::OverflowKnownLength { limit, .. } => {
            ApiResponse::error(
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                &format!("Body exceeds {} bytes", limit),
            )
        }
        // Missing required fields and wrong types land here.
        JsonPayloadError::Deserialize(e) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        other => ApiResponse::bad_request("INVALID_JSON", &other.to_string()),
    }
}
