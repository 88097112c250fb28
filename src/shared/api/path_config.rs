use actix_web::error::InternalError;
use actix_web::web::PathConfig;
use tracing::warn;

use crate::shared::api::ApiResponse;

/// Path extractor config whose failures use the API error envelope.
///
/// Routes only match `\d+` ids, so this fires for digit strings beyond `i32`.
pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, req| {
        warn!("Rejected path {} {}: {}", req.method(), req.path(), err);
        let response = ApiResponse::bad_request("INVALID_PATH", &err.to_string());
        InternalError::from_response(err, response).into()
    })
}
