use actix_web::{get, web, Responder};

use crate::shared::api::{guard_error_response, ApiResponse};
use crate::AppState;

#[get("/api/user-roles")]
pub async fn list_user_roles_handler(data: web::Data<AppState>) -> impl Responder {
    match data.user_role.list.execute().await {
        Ok(pairs) => ApiResponse::success(pairs),
        Err(err) => guard_error_response(err, "USER_ROLE_NOT_FOUND", "User role"),
    }
}
