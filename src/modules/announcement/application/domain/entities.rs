use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::shared::codes::coded_enum;
use crate::shared::patch::{FieldError, PatchField, PatchPlan};
use crate::shared::validation::Violations;

pub const TITLE_MAX: usize = 255;

coded_enum! {
    pub enum AnnouncementType {
        System = 1,
        Maintenance = 2,
        Marketing = 3,
    }
}

coded_enum! {
    pub enum AnnouncementStatus {
        Draft = 0,
        Published = 1,
        Closed = 2,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: i32,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: AnnouncementType,
    pub status: AnnouncementStatus,
    pub publish_time: Option<DateTime<Utc>>,
    pub expire_time: Option<DateTime<Utc>>,
    pub is_deleted: bool,
}

fn check_expiry(v: &mut Violations, publish: Option<&DateTime<Utc>>, expire: Option<&DateTime<Utc>>) {
    if let (Some(publish), Some(expire)) = (publish, expire) {
        v.check(expire > publish, "expireTime", "must be after publishTime");
    }
}

//
// ──────────────────────────────────────────────────────────
// Create
// ──────────────────────────────────────────────────────────
//

/// Raw create input; `prepare` turns it into an insertable draft.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAnnouncement {
    pub title: String,
    pub content: String,
    pub kind: Option<AnnouncementType>,
    pub status: Option<AnnouncementStatus>,
    pub publish_time: Option<DateTime<Utc>>,
    pub expire_time: Option<DateTime<Utc>>,
}

/// A validated announcement with its defaults resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnouncementDraft {
    pub title: String,
    pub content: String,
    pub kind: AnnouncementType,
    pub status: AnnouncementStatus,
    pub publish_time: Option<DateTime<Utc>>,
    pub expire_time: Option<DateTime<Utc>>,
}

impl NewAnnouncement {
    /// Status defaults to `Draft`; a `Published` announcement without a publish time gets `now`.
    pub fn prepare(self, now: DateTime<Utc>) -> Result<AnnouncementDraft, Vec<FieldError>> {
        let title = self.title.trim().to_string();
        let content = self.content.trim().to_string();
        let status = self.status.unwrap_or(AnnouncementStatus::Draft);
        let publish_time = match (status, self.publish_time) {
            (AnnouncementStatus::Published, None) => Some(now),
            (_, publish_time) => publish_time,
        };

        let mut v = Violations::new();
        if v.required("title", &title) {
            v.max_chars("title", &title, TITLE_MAX);
        }
        v.required("content", &content);
        v.check(self.kind.is_some(), "type", "is required");
        check_expiry(&mut v, publish_time.as_ref(), self.expire_time.as_ref());

        match self.kind {
            Some(kind) if v.is_empty() => Ok(AnnouncementDraft {
                title,
                content,
                kind,
                status,
                publish_time,
                expire_time: self.expire_time,
            }),
            _ => Err(v.into_vec()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Patch
// ──────────────────────────────────────────────────────────
//

/// Moving to `Published` leaves `publish_time` as sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnouncementPatch {
    pub title: PatchField<String>,
    pub content: PatchField<String>,
    pub kind: PatchField<AnnouncementType>,
    pub status: PatchField<AnnouncementStatus>,
    pub publish_time: PatchField<DateTime<Utc>>,
    pub expire_time: PatchField<DateTime<Utc>>,
}

impl PatchPlan<Announcement> for AnnouncementPatch {
    fn normalize(self) -> Self {
        Self {
            title: self.title.blank_as_unset(),
            content: self.content.blank_as_unset(),
            ..self
        }
    }

    fn present_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        self.title.mark("title", &mut fields);
        self.content.mark("content", &mut fields);
        self.kind.mark("type", &mut fields);
        self.status.mark("status", &mut fields);
        self.publish_time.mark("publishTime", &mut fields);
        self.expire_time.mark("expireTime", &mut fields);
        fields
    }

    fn validate(&self, current: &Announcement) -> Vec<FieldError> {
        let mut v = Violations::new();

        v.not_null("title", &self.title);
        v.not_null("content", &self.content);
        v.not_null("type", &self.kind);
        v.not_null("status", &self.status);
        if let Some(title) = self.title.as_value() {
            v.max_chars("title", title, TITLE_MAX);
        }

        if self.publish_time.is_present() || self.expire_time.is_present() {
            check_expiry(
                &mut v,
                self.publish_time.resolve(current.publish_time.as_ref()),
                self.expire_time.resolve(current.expire_time.as_ref()),
            );
        }

        v.into_vec()
    }

    fn apply_to(&self, row: &mut Announcement) {
        self.title.apply(&mut row.title);
        self.content.apply(&mut row.content);
        self.kind.apply(&mut row.kind);
        self.status.apply(&mut row.status);
        self.publish_time.apply_nullable(&mut row.publish_time);
        self.expire_time.apply_nullable(&mut row.expire_time);
    }
}
