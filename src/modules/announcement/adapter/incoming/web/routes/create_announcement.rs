use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::modules::announcement::application::domain::entities::{
    AnnouncementStatus, AnnouncementType, NewAnnouncement,
};
use crate::shared::api::{guard_error_response, ApiResponse};
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnnouncementRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "type")]
    pub kind: Option<AnnouncementType>,
    pub status: Option<AnnouncementStatus>,
    pub publish_time: Option<DateTime<Utc>>,
    pub expire_time: Option<DateTime<Utc>>,
}

impl From<CreateAnnouncementRequest> for NewAnnouncement {
    fn from(req: CreateAnnouncementRequest) -> Self {
        NewAnnouncement {
            title: req.title,
            content: req.content,
            kind: req.kind,
            status: req.status,
            publish_time: req.publish_time,
            expire_time: req.expire_time,
        }
    }
}

#[post("/api/announcements")]
pub async fn create_announcement_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateAnnouncementRequest>,
) -> impl Responder {
    match data.announcement.create.execute(payload.into_inner().into()).await {
        Ok(announcement) => ApiResponse::created(announcement),
        Err(err) => guard_error_response(err, "ANNOUNCEMENT_NOT_FOUND", "Announcement"),
    }
}
