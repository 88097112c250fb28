use actix_web::{post, web, Responder};

use crate::shared::api::{guard_error_response, ApiResponse};
use crate::AppState;

#[post("/api/announcements/{id:\\d+}/delete")]
pub async fn delete_announcement_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.announcement.archive.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => guard_error_response(err, "ANNOUNCEMENT_NOT_FOUND", "Announcement"),
    }
}

#[post("/api/announcements/{id:\\d+}/restore")]
pub async fn restore_announcement_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.announcement.archive.restore(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => guard_error_response(err, "ANNOUNCEMENT_NOT_FOUND", "Announcement"),
    }
}

#[post("/api/announcements/{id:\\d+}/hard-delete")]
pub async fn hard_delete_announcement_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.announcement.archive.hard_delete(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => guard_error_response(err, "ANNOUNCEMENT_NOT_FOUND", "Announcement"),
    }
}
