use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::shared::api::{guard_error_response, ApiResponse};
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchAssignUserRolesRequest {
    #[serde(default)]
    pub user_ids: Vec<i32>,
    #[serde(default)]
    pub role_ids: Vec<i32>,
}

#[post("/api/user-roles/batch")]
pub async fn batch_assign_user_roles_handler(
    data: web::Data<AppState>,
    payload: web::Json<BatchAssignUserRolesRequest>,
) -> impl Responder {
    let req = payload.into_inner();

    match data
        .user_role
        .batch_assign
        .execute(req.user_ids, req.role_ids)
        .await
    {
        Ok(report) => ApiResponse::success(report),
        Err(err) => guard_error_response(err, "USER_ROLE_NOT_FOUND", "User role"),
    }
}
