use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::modules::role::application::domain::entities::NewRole;
use crate::shared::api::{guard_error_response, ApiResponse};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateRoleRequest {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
}

impl From<CreateRoleRequest> for NewRole {
    fn from(req: CreateRoleRequest) -> Self {
        NewRole {
            name: req.name,
            description: req.description,
        }
    }
}

#[post("/api/roles")]
pub async fn create_role_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateRoleRequest>,
) -> impl Responder {
    match data.role.create.execute(payload.into_inner().into()).await {
        Ok(role) => ApiResponse::created(role),
        Err(err) => guard_error_response(err, "ROLE_NOT_FOUND", "Role"),
    }
}
