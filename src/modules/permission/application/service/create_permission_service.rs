use async_trait::async_trait;
use tracing::info;

use crate::modules::permission::application::domain::entities::{NewPermission, Permission};
use crate::modules::permission::application::ports::incoming::use_cases::CreatePermissionUseCase;
use crate::modules::permission::application::ports::outgoing::PermissionRepository;
use crate::shared::patch::{guard_create, GuardError};

pub struct CreatePermissionService<R>
where
    R: PermissionRepository,
{
    repository: R,
}

impl<R> CreatePermissionService<R>
where
    R: PermissionRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreatePermissionUseCase for CreatePermissionService<R>
where
    R: PermissionRepository,
{
    async fn execute(&self, input: NewPermission) -> Result<Permission, GuardError> {
        let input = input.normalized();
        guard_create(&self.repository, &input, Vec::new()).await?;

        let permission = self.repository.create_permission(input).await?;
        info!("Created permission {} ({})", permission.id, permission.name);
        Ok(permission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::in_memory::InMemoryStore;

    #[tokio::test]
    async fn test_create_permission_trims_optional_fields() {
        let store = InMemoryStore::default();
        let service = CreatePermissionService::new(store.clone());

        let permission = service
            .execute(NewPermission {
                name: "property:approve".to_string(),
                description: Some("   ".to_string()),
                module: Some(" property ".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(permission.description, None);
        assert_eq!(permission.module.as_deref(), Some("property"));
        assert_eq!(store.permission(permission.id), Some(permission));
    }

    #[tokio::test]
    async fn test_create_permission_reports_every_bad_field() {
        let service = CreatePermissionService::new(InMemoryStore::default());

        let err = service
            .execute(NewPermission {
                name: String::new(),
                description: Some("d".repeat(101)),
                module: None,
            })
            .await
            .unwrap_err();

        match err {
            GuardError::Validation(errors) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["name", "description"]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
