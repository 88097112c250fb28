use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::modules::property::application::domain::entities::{Property, PropertyPatch};
use crate::modules::property::application::ports::incoming::use_cases::PatchPropertyUseCase;
use crate::modules::property::application::ports::outgoing::PropertyRepository;
use crate::shared::patch::{check_patch, commit_patch, CheckedPatch, GuardError, PatchOutcome};

pub struct PatchPropertyService<R>
where
    R: PropertyRepository,
{
    repository: R,
}

impl<R> PatchPropertyService<R>
where
    R: PropertyRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> PatchPropertyUseCase for PatchPropertyService<R>
where
    R: PropertyRepository,
{
    async fn execute(
        &self,
        id: i32,
        patch: PropertyPatch,
    ) -> Result<PatchOutcome<Property>, GuardError> {
        let checked = check_patch(&self.repository, id, patch).await?;
        let checked = CheckedPatch {
            patch: checked.patch.stamped(Utc::now()),
            ..checked
        };

        let outcome = commit_patch(&self.repository, checked).await?;

        if outcome.affected_rows > 0 {
            info!(
                "Patched property {}: {}",
                outcome.id,
                outcome.updated_fields.join(", ")
            );
        }
        Ok(outcome)
    }
}
