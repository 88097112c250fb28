use async_trait::async_trait;
use tracing::info;

use crate::modules::property::application::ports::incoming::use_cases::ArchivePropertyUseCase;
use crate::modules::property::application::ports::outgoing::PropertyRepository;
use crate::shared::patch::GuardError;

pub struct ArchivePropertyService<R>
where
    R: PropertyRepository,
{
    repository: R,
}

impl<R> ArchivePropertyService<R>
where
    R: PropertyRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ArchivePropertyUseCase for ArchivePropertyService<R>
where
    R: PropertyRepository,
{
    async fn delete(&self, id: i32) -> Result<(), GuardError> {
        if !self.repository.soft_delete(id).await? {
            return Err(GuardError::NotFound);
        }
        info!("Soft-deleted property {}", id);
        Ok(())
    }

    async fn restore(&self, id: i32) -> Result<(), GuardError> {
        if !self.repository.restore(id).await? {
            return Err(GuardError::NotFound);
        }
        info!("Restored property {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::seeded_property;
    use crate::tests::support::in_memory::InMemoryStore;

    #[tokio::test]
    async fn test_delete_then_restore() {
        let store = InMemoryStore::default();
        let row = store.insert_property(seeded_property("GZ-A-01"));
        let service = ArchivePropertyService::new(store.clone());

        service.delete(row.id).await.unwrap();
        let deleted = store.property(row.id).unwrap();
        assert!(deleted.is_deleted);
        assert!(deleted.deleted_at.is_some());
        assert_eq!(service.delete(row.id).await, Err(GuardError::NotFound));

        service.restore(row.id).await.unwrap();
        let restored = store.property(row.id).unwrap();
        assert!(!restored.is_deleted);
        assert!(restored.deleted_at.is_none());
        assert_eq!(service.restore(row.id).await, Err(GuardError::NotFound));
    }
}
