use actix_web::{http::StatusCode, HttpResponse};
use tracing::{error, warn};

use crate::shared::api::ApiResponse;
use crate::shared::patch::GuardError;

/// Renders a guard failure: 404, 400 with field errors, 409 with conflicts, or 500.
pub fn guard_error_response(err: GuardError, not_found_code: &str, resource: &str) -> HttpResponse {
    match err {
        GuardError::NotFound => {
            ApiResponse::not_found(not_found_code, &format!("{resource} not found"))
        }

        GuardError::Validation(errors) => {
            warn!("Rejected {} input: {} invalid field(s)", resource, errors.len());
            ApiResponse::rejected(
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "One or more fields are invalid",
                errors,
            )
        }

        GuardError::Conflict(conflicts) => {
            warn!("Rejected {} write: {} conflict(s)", resource, conflicts.len());
            ApiResponse::rejected(
                StatusCode::CONFLICT,
                "CONFLICT",
                "One or more values are already taken",
                conflicts,
            )
        }

        GuardError::Internal(msg) => {
            error!("Store error on {}: {}", resource, msg);
            ApiResponse::internal_error()
        }
    }
}
