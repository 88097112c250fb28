use actix_web::{get, web, Responder};

use crate::shared::api::{guard_error_response, ApiResponse};
use crate::AppState;

#[get("/api/permissions/{id:\\d+}")]
pub async fn get_permission_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.permission.get.get(path.into_inner()).await {
        Ok(permission) => ApiResponse::success(permission),
        Err(err) => guard_error_response(err, "PERMISSION_NOT_FOUND", "Permission"),
    }
}

#[get("/api/permissions")]
pub async fn list_permissions_handler(data: web::Data<AppState>) -> impl Responder {
    match data.permission.get.list().await {
        Ok(permissions) => ApiResponse::success(permissions),
        Err(err) => guard_error_response(err, "PERMISSION_NOT_FOUND", "Permission"),
    }
}

#[get("/api/role-permissions")]
pub async fn list_role_permissions_handler(data: web::Data<AppState>) -> impl Responder {
    match data.permission.get.list_role_permissions().await {
        Ok(pairs) => ApiResponse::success(pairs),
        Err(err) => guard_error_response(err, "PERMISSION_NOT_FOUND", "Permission"),
    }
}
