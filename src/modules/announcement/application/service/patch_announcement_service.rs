use async_trait::async_trait;
use tracing::info;

use crate::modules::announcement::application::domain::entities::{
    Announcement, AnnouncementPatch,
};
use crate::modules::announcement::application::ports::incoming::use_cases::PatchAnnouncementUseCase;
use crate::modules::announcement::application::ports::outgoing::AnnouncementRepository;
use crate::shared::patch::{guarded_patch, GuardError, PatchOutcome};

pub struct PatchAnnouncementService<R>
where
    R: AnnouncementRepository,
{
    repository: R,
}

impl<R> PatchAnnouncementService<R>
where
    R: AnnouncementRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> PatchAnnouncementUseCase for PatchAnnouncementService<R>
where
    R: AnnouncementRepository,
{
    async fn execute(
        &self,
        id: i32,
        patch: AnnouncementPatch,
    ) -> Result<PatchOutcome<Announcement>, GuardError> {
        let outcome = guarded_patch(&self.repository, id, patch).await?;

        if outcome.affected_rows > 0 {
            info!(
                "Patched announcement {}: {}",
                outcome.id,
                outcome.updated_fields.join(", ")
            );
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::announcement::application::domain::entities::AnnouncementStatus;
    use crate::shared::patch::{FieldError, PatchField};
    use crate::tests::support::fixtures::seeded_announcement;
    use crate::tests::support::in_memory::InMemoryStore;
    use chrono::Duration;

    #[tokio::test]
    async fn test_close_and_clear_expiry() {
        let store = InMemoryStore::default();
        let row = store.insert_announcement(seeded_announcement("Lift maintenance"));
        let service = PatchAnnouncementService::new(store.clone());

        let outcome = service
            .execute(
                row.id,
                AnnouncementPatch {
                    status: PatchField::Value(AnnouncementStatus::Closed),
                    expire_time: PatchField::Null,
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(outcome.updated_fields, vec!["status", "expireTime"]);
        let stored = store.announcement(row.id).unwrap();
        assert_eq!(stored.status, AnnouncementStatus::Closed);
        assert!(stored.expire_time.is_none());
        assert_eq!(stored.publish_time, row.publish_time);
    }

    #[tokio::test]
    async fn test_expiry_before_stored_publish_time() {
        let store = InMemoryStore::default();
        let row = store.insert_announcement(seeded_announcement("Lift maintenance"));
        let service = PatchAnnouncementService::new(store.clone());
        let publish = row.publish_time.unwrap();

        let err = service
            .execute(
                row.id,
                AnnouncementPatch {
                    expire_time: PatchField::Value(publish - Duration::days(1)),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert_eq!(
            err,
            GuardError::Validation(vec![FieldError::new(
                "expireTime",
                "must be after publishTime"
            )])
        );
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn test_deleted_announcement_is_not_found() {
        let store = InMemoryStore::default();
        let mut row = seeded_announcement("Lift maintenance");
        row.is_deleted = true;
        let row = store.insert_announcement(row);
        let service = PatchAnnouncementService::new(store);

        let err = service
            .execute(
                row.id,
                AnnouncementPatch {
                    title: PatchField::Value("Lift back".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err, GuardError::NotFound);
    }
}
