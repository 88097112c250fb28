use async_trait::async_trait;

use crate::modules::property::application::domain::entities::{NewProperty, Property};
use crate::shared::patch::GuardError;

#[async_trait]
pub trait CreatePropertyUseCase: Send + Sync {
    async fn execute(&self, input: NewProperty) -> Result<Property, GuardError>;
}
