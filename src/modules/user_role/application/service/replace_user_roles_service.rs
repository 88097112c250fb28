use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::user_role::application::domain::entities::{dedup_ids, UserRole};
use crate::modules::user_role::application::ports::incoming::use_cases::ReplaceUserRolesUseCase;
use crate::modules::user_role::application::ports::outgoing::UserRoleRepository;
use crate::shared::patch::{FieldError, GuardError};

pub struct ReplaceUserRolesService<R>
where
    R: UserRoleRepository,
{
    repository: R,
}

impl<R> ReplaceUserRolesService<R>
where
    R: UserRoleRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ReplaceUserRolesUseCase for ReplaceUserRolesService<R>
where
    R: UserRoleRepository,
{
    async fn execute(&self, user_id: i32, role_ids: Vec<i32>) -> Result<Vec<UserRole>, GuardError> {
        if self
            .repository
            .existing_user_ids(&[user_id])
            .await?
            .is_empty()
        {
            return Err(GuardError::NotFound);
        }

        let role_ids = dedup_ids(role_ids);
        let known = self.repository.existing_role_ids(&role_ids).await?;
        let errors: Vec<FieldError> = role_ids
            .iter()
            .filter(|id| !known.contains(id))
            .map(|id| FieldError::new("roleIds", format!("role {id} does not exist")))
            .collect();
        if !errors.is_empty() {
            warn!(
                "Rejected role replacement for user {}: {} unknown role(s)",
                user_id,
                errors.len()
            );
            return Err(GuardError::Validation(errors));
        }

        self.repository.replace_roles(user_id, &role_ids).await?;
        info!("Replaced roles of user {} with {:?}", user_id, role_ids);

        Ok(role_ids
            .into_iter()
            .map(|role_id| UserRole { user_id, role_id })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::seeded_user;
    use crate::tests::support::in_memory::InMemoryStore;

    #[tokio::test]
    async fn test_replace_dedups_and_swaps_the_set() {
        let store = InMemoryStore::default();
        let alice = store.insert_user(seeded_user("alice01", "110101199001011234"));
        let tenant = store.insert_role("Tenant");
        let agent = store.insert_role("Agent");
        store.link_user_role(alice.id, tenant.id);
        let service = ReplaceUserRolesService::new(store.clone());

        let roles = service
            .execute(alice.id, vec![agent.id, agent.id])
            .await
            .unwrap();

        let expected = vec![UserRole {
            user_id: alice.id,
            role_id: agent.id,
        }];
        assert_eq!(roles, expected);
        assert_eq!(store.user_role_pairs(), expected);
    }

    #[tokio::test]
    async fn test_unknown_role_leaves_existing_roles_untouched() {
        let store = InMemoryStore::default();
        let alice = store.insert_user(seeded_user("alice01", "110101199001011234"));
        let tenant = store.insert_role("Tenant");
        store.link_user_role(alice.id, tenant.id);
        let service = ReplaceUserRolesService::new(store.clone());

        let err = service
            .execute(alice.id, vec![tenant.id, 41, 42])
            .await
            .unwrap_err();

        assert!(matches!(err, GuardError::Validation(ref e) if e.len() == 2));
        assert_eq!(
            store.user_role_pairs(),
            vec![UserRole {
                user_id: alice.id,
                role_id: tenant.id
            }]
        );
    }

    #[tokio::test]
    async fn test_empty_list_clears_roles() {
        let store = InMemoryStore::default();
        let alice = store.insert_user(seeded_user("alice01", "110101199001011234"));
        let tenant = store.insert_role("Tenant");
        store.link_user_role(alice.id, tenant.id);
        let service = ReplaceUserRolesService::new(store.clone());

        assert!(service.execute(alice.id, Vec::new()).await.unwrap().is_empty());
        assert!(store.user_role_pairs().is_empty());
    }

    #[tokio::test]
    async fn test_missing_user() {
        let store = InMemoryStore::default();
        let tenant = store.insert_role("Tenant");
        let service = ReplaceUserRolesService::new(store);

        assert_eq!(
            service.execute(999, vec![tenant.id]).await,
            Err(GuardError::NotFound)
        );
    }
}
