use actix_web::{get, web, Responder};

use crate::shared::api::{guard_error_response, ApiResponse};
use crate::AppState;

#[get("/api/roles/{id:\\d+}")]
pub async fn get_role_handler(path: web::Path<i32>, data: web::Data<AppState>) -> impl Responder {
    match data.role.get.get(path.into_inner()).await {
        Ok(role) => ApiResponse::success(role),
        Err(err) => guard_error_response(err, "ROLE_NOT_FOUND", "Role"),
    }
}

#[get("/api/roles")]
pub async fn list_roles_handler(data: web::Data<AppState>) -> impl Responder {
    match data.role.get.list().await {
        Ok(roles) => ApiResponse::success(roles),
        Err(err) => guard_error_response(err, "ROLE_NOT_FOUND", "Role"),
    }
}
