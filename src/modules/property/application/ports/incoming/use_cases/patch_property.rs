use async_trait::async_trait;

use crate::modules::property::application::domain::entities::{Property, PropertyPatch};
use crate::shared::patch::{GuardError, PatchOutcome};

#[async_trait]
pub trait PatchPropertyUseCase: Send + Sync {
    async fn execute(
        &self,
        id: i32,
        patch: PropertyPatch,
    ) -> Result<PatchOutcome<Property>, GuardError>;
}
