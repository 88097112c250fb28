use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::user_role::application::domain::entities::UserRole;
use crate::modules::user_role::application::ports::incoming::use_cases::AssignUserRoleError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignUserRoleRequest {
    pub user_id: i32,
    pub role_id: i32,
}

#[post("/api/user-roles")]
pub async fn assign_user_role_handler(
    data: web::Data<AppState>,
    payload: web::Json<AssignUserRoleRequest>,
) -> impl Responder {
    let pair = UserRole {
        user_id: payload.user_id,
        role_id: payload.role_id,
    };

    match data.user_role.assign.execute(pair).await {
        Ok(pair) => ApiResponse::created(pair),
        Err(AssignUserRoleError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(AssignUserRoleError::RoleNotFound) => {
            ApiResponse::not_found("ROLE_NOT_FOUND", "Role not found")
        }
        Err(AssignUserRoleError::AlreadyAssigned) => {
            ApiResponse::conflict("USER_ROLE_EXISTS", "User already holds this role")
        }
        Err(AssignUserRoleError::RepositoryError(msg)) => {
            error!("Failed to assign role: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
