use async_trait::async_trait;

use crate::modules::property::application::domain::entities::{NewProperty, Property};
use crate::shared::patch::GuardError;

/// All-or-nothing: one bad item rejects the batch.
#[async_trait]
pub trait BatchCreatePropertiesUseCase: Send + Sync {
    async fn execute(&self, items: Vec<NewProperty>) -> Result<Vec<Property>, GuardError>;
}
