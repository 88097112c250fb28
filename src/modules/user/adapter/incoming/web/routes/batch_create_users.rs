use actix_web::{post, web, Responder};

use super::create_user::CreateUserRequest;
use crate::shared::api::{guard_error_response, ApiResponse};
use crate::AppState;

#[post("/api/users/batch")]
pub async fn batch_create_users_handler(
    data: web::Data<AppState>,
    payload: web::Json<Vec<CreateUserRequest>>,
) -> impl Responder {
    let inputs = payload.into_inner().into_iter().map(Into::into).collect();

    match data.user.batch_create.execute(inputs).await {
        Ok(report) => ApiResponse::success(report),
        Err(err) => guard_error_response(err, "USER_NOT_FOUND", "User"),
    }
}
