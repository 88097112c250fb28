use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::modules::announcement::application::domain::entities::{
    AnnouncementPatch, AnnouncementStatus, AnnouncementType,
};
use crate::shared::api::{guard_error_response, ApiResponse};
use crate::shared::patch::PatchField;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchAnnouncementRequest {
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub content: PatchField<String>,
    #[serde(default, rename = "type")]
    pub kind: PatchField<AnnouncementType>,
    #[serde(default)]
    pub status: PatchField<AnnouncementStatus>,
    #[serde(default)]
    pub publish_time: PatchField<DateTime<Utc>>,
    #[serde(default)]
    pub expire_time: PatchField<DateTime<Utc>>,
}

impl From<PatchAnnouncementRequest> for AnnouncementPatch {
    fn from(req: PatchAnnouncementRequest) -> Self {
        AnnouncementPatch {
            title: req.title,
            content: req.content,
            kind: req.kind,
            status: req.status,
            publish_time: req.publish_time,
            expire_time: req.expire_time,
        }
    }
}

#[post("/api/announcements/{id:\\d+}/update")]
pub async fn patch_announcement_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
    payload: web::Json<PatchAnnouncementRequest>,
) -> impl Responder {
    let id = path.into_inner();

    match data
        .announcement
        .patch
        .execute(id, payload.into_inner().into())
        .await
    {
        Ok(outcome) => ApiResponse::success(outcome.summary()),
        Err(err) => guard_error_response(err, "ANNOUNCEMENT_NOT_FOUND", "Announcement"),
    }
}
