use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::modules::role::application::domain::entities::RolePatch;
use crate::shared::api::{guard_error_response, ApiResponse};
use crate::shared::patch::PatchField;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PatchRoleRequest {
    #[serde(default)]
    pub name: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<String>,
}

impl From<PatchRoleRequest> for RolePatch {
    fn from(req: PatchRoleRequest) -> Self {
        RolePatch {
            name: req.name,
            description: req.description,
        }
    }
}

#[post("/api/roles/{id:\\d+}/update")]
pub async fn patch_role_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
    payload: web::Json<PatchRoleRequest>,
) -> impl Responder {
    match data
        .role
        .patch
        .execute(path.into_inner(), payload.into_inner().into())
        .await
    {
        Ok(outcome) => ApiResponse::success(outcome.summary()),
        Err(err) => guard_error_response(err, "ROLE_NOT_FOUND", "Role"),
    }
}
