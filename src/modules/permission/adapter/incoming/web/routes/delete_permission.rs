use actix_web::{post, web, Responder};

use crate::shared::api::{guard_error_response, ApiResponse};
use crate::AppState;

#[post("/api/permissions/{id:\\d+}/delete")]
pub async fn delete_permission_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.permission.delete.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => guard_error_response(err, "PERMISSION_NOT_FOUND", "Permission"),
    }
}
