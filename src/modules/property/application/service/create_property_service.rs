use async_trait::async_trait;
use tracing::info;

use crate::modules::property::application::domain::entities::{NewProperty, Property};
use crate::modules::property::application::ports::incoming::use_cases::CreatePropertyUseCase;
use crate::modules::property::application::ports::outgoing::{
    approver_errors, PropertyRepository,
};
use crate::shared::patch::{guard_create, GuardError};

pub struct CreatePropertyService<R>
where
    R: PropertyRepository,
{
    repository: R,
}

impl<R> CreatePropertyService<R>
where
    R: PropertyRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreatePropertyUseCase for CreatePropertyService<R>
where
    R: PropertyRepository,
{
    async fn execute(&self, input: NewProperty) -> Result<Property, GuardError> {
        let input = input.normalized();
        let references = approver_errors(&self.repository, input.approved_by).await?;
        guard_create(&self.repository, &input, references).await?;

        let property = self.repository.create_property(input).await?;
        info!(
            "Created property {} ({})",
            property.id, property.property_code
        );
        Ok(property)
    }
}
