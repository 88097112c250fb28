use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::modules::user::application::domain::entities::NewUser;
use crate::shared::api::{guard_error_response, ApiResponse};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

// Missing strings default to "" so they surface as field errors, not JSON errors.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub real_name: String,
    #[serde(default)]
    pub id_card: String,
    #[serde(default)]
    pub gender: String,
    pub avatar_url: Option<String>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        NewUser {
            username: req.username,
            password: req.password,
            email: req.email,
            phone: req.phone,
            real_name: req.real_name,
            id_card: req.id_card,
            gender: req.gender,
            avatar_url: req.avatar_url,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[post("/api/users")]
pub async fn create_user_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateUserRequest>,
) -> impl Responder {
    match data.user.create.execute(payload.into_inner().into()).await {
        Ok(user) => ApiResponse::created(user),
        Err(err) => guard_error_response(err, "USER_NOT_FOUND", "User"),
    }
}
