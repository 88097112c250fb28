use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::property::application::domain::entities::{NewProperty, Property};
use crate::modules::property::application::ports::incoming::use_cases::BatchCreatePropertiesUseCase;
use crate::modules::property::application::ports::outgoing::PropertyRepository;
use crate::shared::patch::{check_unique, Conflict, CreatePlan, FieldError, GuardError};

pub struct BatchCreatePropertiesService<R>
where
    R: PropertyRepository,
{
    repository: R,
}

impl<R> BatchCreatePropertiesService<R>
where
    R: PropertyRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    async fn approver_known(
        &self,
        cache: &mut HashMap<i32, bool>,
        id: i32,
    ) -> Result<bool, GuardError> {
        if let Some(known) = cache.get(&id) {
            return Ok(*known);
        }
        let known = self.repository.approver_exists(id).await?;
        cache.insert(id, known);
        Ok(known)
    }
}

#[async_trait]
impl<R> BatchCreatePropertiesUseCase for BatchCreatePropertiesService<R>
where
    R: PropertyRepository,
{
    async fn execute(&self, items: Vec<NewProperty>) -> Result<Vec<Property>, GuardError> {
        if items.is_empty() {
            return Err(GuardError::Validation(vec![FieldError::new(
                "items",
                "must contain at least one property",
            )]));
        }

        let items: Vec<NewProperty> = items.into_iter().map(NewProperty::normalized).collect();

        let mut errors = Vec::new();
        let mut approvers = HashMap::new();
        for (index, item) in items.iter().enumerate() {
            errors.extend(item.validate().into_iter().map(|e| e.at_index(index)));

            if let Some(id) = item.approved_by {
                if !self.approver_known(&mut approvers, id).await? {
                    errors.push(
                        FieldError::new("approvedBy", format!("user {id} does not exist"))
                            .at_index(index),
                    );
                }
            }
        }
        if !errors.is_empty() {
            warn!(
                "Rejected property batch of {}: {} invalid field(s)",
                items.len(),
                errors.len()
            );
            return Err(GuardError::Validation(errors));
        }

        let mut conflicts = Vec::new();
        let mut seen = HashSet::new();
        for item in &items {
            let claims = item.unique_claims();
            for claim in &claims {
                if !seen.insert(claim.value.clone()) {
                    conflicts.push(Conflict {
                        field: claim.field,
                        value: claim.value.clone(),
                        owner_id: None,
                    });
                }
            }
            conflicts.extend(check_unique(&self.repository, &claims, None).await?);
        }
        if !conflicts.is_empty() {
            warn!(
                "Rejected property batch of {}: {} conflict(s)",
                items.len(),
                conflicts.len()
            );
            return Err(GuardError::Conflict(conflicts));
        }

        let created = self.repository.create_properties(items).await?;
        info!("Created {} properties in one batch", created.len());
        Ok(created)
    }
}
