use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::shared::api::{guard_error_response, ApiResponse};
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceUserRolesRequest {
    #[serde(default)]
    pub role_ids: Vec<i32>,
}

#[post("/api/user-roles/{user_id:\\d+}/replace")]
pub async fn replace_user_roles_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
    payload: web::Json<ReplaceUserRolesRequest>,
) -> impl Responder {
    match data
        .user_role
        .replace
        .execute(path.into_inner(), payload.into_inner().role_ids)
        .await
    {
        Ok(pairs) => ApiResponse::success(pairs),
        Err(err) => guard_error_response(err, "USER_NOT_FOUND", "User"),
    }
}
