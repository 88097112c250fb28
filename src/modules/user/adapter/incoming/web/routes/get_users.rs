use actix_web::{get, post, web, Responder};
use serde::Deserialize;

use crate::modules::user::application::domain::entities::{Gender, UserFilter};
use crate::shared::api::{guard_error_response, ApiResponse};
use crate::shared::pagination::PageRequest;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchUsersRequest {
    pub username: Option<String>,
    pub real_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<Gender>,
    pub status: Option<bool>,
}

impl From<SearchUsersRequest> for UserFilter {
    fn from(req: SearchUsersRequest) -> Self {
        UserFilter {
            username: req.username,
            real_name: req.real_name,
            email: req.email,
            phone: req.phone,
            gender: req.gender,
            status: req.status,
        }
    }
}

#[get("/api/users/{id:\\d+}")]
pub async fn get_user_handler(path: web::Path<i32>, data: web::Data<AppState>) -> impl Responder {
    match data.user.get.get(path.into_inner()).await {
        Ok(user) => ApiResponse::success(user),
        Err(err) => guard_error_response(err, "USER_NOT_FOUND", "User"),
    }
}

#[get("/api/users")]
pub async fn list_users_handler(data: web::Data<AppState>) -> impl Responder {
    match data.user.get.list().await {
        Ok(users) => ApiResponse::success(users),
        Err(err) => guard_error_response(err, "USER_NOT_FOUND", "User"),
    }
}

#[get("/api/users/paged")]
pub async fn list_users_paged_handler(
    query: web::Query<PageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.user.get.list_paged(query.into_inner()).await {
        Ok(page) => ApiResponse::success(page),
        Err(err) => guard_error_response(err, "USER_NOT_FOUND", "User"),
    }
}

#[post("/api/users/search")]
pub async fn search_users_handler(
    data: web::Data<AppState>,
    payload: web::Json<SearchUsersRequest>,
) -> impl Responder {
    match data.user.get.search(payload.into_inner().into()).await {
        Ok(users) => ApiResponse::success(users),
        Err(err) => guard_error_response(err, "USER_NOT_FOUND", "User"),
    }
}

#[get("/api/users/without-role")]
pub async fn list_users_without_role_handler(
    query: web::Query<PageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.user.get.list_without_role(query.into_inner()).await {
        Ok(page) => ApiResponse::success(page),
        Err(err) => guard_error_response(err, "USER_NOT_FOUND", "User"),
    }
}
