use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::modules::permission::application::domain::entities::NewPermission;
use crate::shared::api::{guard_error_response, ApiResponse};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreatePermissionRequest {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub module: Option<String>,
}

impl From<CreatePermissionRequest> for NewPermission {
    fn from(req: CreatePermissionRequest) -> Self {
        NewPermission {
            name: req.name,
            description: req.description,
            module: req.module,
        }
    }
}

#[post("/api/permissions")]
pub async fn create_permission_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreatePermissionRequest>,
) -> impl Responder {
    match data
        .permission
        .create
        .execute(payload.into_inner().into())
        .await
    {
        Ok(permission) => ApiResponse::created(permission),
        Err(err) => guard_error_response(err, "PERMISSION_NOT_FOUND", "Permission"),
    }
}
