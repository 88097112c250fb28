use std::collections::HashSet;

use async_trait::async_trait;
use tracing::{info, warn};

use super::create_user_service::{hash_failed, to_create_data};
use crate::modules::user::application::domain::entities::NewUser;
use crate::modules::user::application::ports::incoming::use_cases::{
    BatchCreateUsersReport, BatchCreateUsersUseCase, RejectedUser,
};
use crate::modules::user::application::ports::outgoing::{PasswordHasher, UserRepository};
use crate::shared::patch::{
    check_unique, Conflict, CreatePlan, GuardError, StoreError, UniqueField,
};

pub struct BatchCreateUsersService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    repository: R,
    hasher: H,
}

impl<R, H> BatchCreateUsersService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    pub fn new(repository: R, hasher: H) -> Self {
        Self { repository, hasher }
    }
}

#[async_trait]
impl<R, H> BatchCreateUsersUseCase for BatchCreateUsersService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    async fn execute(&self, inputs: Vec<NewUser>) -> Result<BatchCreateUsersReport, GuardError> {
        let mut report = BatchCreateUsersReport::default();
        // Values taken by earlier items of this batch.
        let mut claimed: HashSet<(UniqueField, String)> = HashSet::new();

        for (index, input) in inputs.into_iter().enumerate() {
            let input = input.normalized();

            let errors = input.validate();
            if !errors.is_empty() {
                report.rejected.push(RejectedUser {
                    index,
                    errors,
                    conflicts: Vec::new(),
                });
                continue;
            }

            let claims = input.unique_claims();
            let mut conflicts: Vec<Conflict> = claims
                .iter()
                .filter(|c| claimed.contains(&(c.field, c.value.clone())))
                .map(|c| Conflict {
                    field: c.field,
                    value: c.value.clone(),
                    owner_id: None,
                })
                .collect();
            for stored in check_unique(&self.repository, &claims, None).await? {
                if !conflicts.iter().any(|c| c.field == stored.field) {
                    conflicts.push(stored);
                }
            }
            if !conflicts.is_empty() {
                report.rejected.push(RejectedUser {
                    index,
                    errors: Vec::new(),
                    conflicts,
                });
                continue;
            }

            let password_hash = self
                .hasher
                .hash_password(&input.password)
                .await
                .map_err(hash_failed)?;

            match self
                .repository
                .create_user(to_create_data(input, password_hash)?)
                .await
            {
                Ok(user) => {
                    claimed.extend(claims.into_iter().map(|c| (c.field, c.value)));
                    report.created.push(user);
                }
                Err(StoreError::UniqueViolation(field)) => {
                    let value = claims
                        .into_iter()
                        .find(|c| c.field == field)
                        .map(|c| c.value)
                        .unwrap_or_default();
                    report.rejected.push(RejectedUser {
                        index,
                        errors: Vec::new(),
                        conflicts: vec![Conflict {
                            field,
                            value,
                            owner_id: None,
                        }],
                    });
                }
                Err(e) => return Err(e.into()),
            }
        }

        if !report.rejected.is_empty() {
            warn!("Batch user import rejected {} item(s)", report.rejected.len());
        }
        info!("Batch user import created {} user(s)", report.created.len());

        Ok(report)
    }
}
