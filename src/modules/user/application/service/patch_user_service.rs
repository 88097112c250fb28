use async_trait::async_trait;
use tracing::info;

use super::create_user_service::hash_failed;
use crate::modules::user::application::domain::entities::{User, UserPatch};
use crate::modules::user::application::ports::incoming::use_cases::PatchUserUseCase;
use crate::modules::user::application::ports::outgoing::{PasswordHasher, UserRepository};
use crate::shared::patch::{check_patch, commit_patch, GuardError, PatchField, PatchOutcome};

pub struct PatchUserService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    repository: R,
    hasher: H,
}

impl<R, H> PatchUserService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    pub fn new(repository: R, hasher: H) -> Self {
        Self { repository, hasher }
    }
}

#[async_trait]
impl<R, H> PatchUserUseCase for PatchUserService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    async fn execute(&self, id: i32, patch: UserPatch) -> Result<PatchOutcome<User>, GuardError> {
        let mut checked = check_patch(&self.repository, id, patch).await?;

        // The raw password is only validated; the hash is what gets stored.
        if let PatchField::Value(raw) = &checked.patch.password {
            let hash = self
                .hasher
                .hash_password(raw)
                .await
                .map_err(hash_failed)?;
            checked.patch.password = PatchField::Value(hash);
        }

        let outcome = commit_patch(&self.repository, checked).await?;

        if outcome.affected_rows > 0 {
            info!(
                "Patched user {}: {}",
                outcome.id,
                outcome.updated_fields.join(", ")
            );
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::patch::{Conflict, FieldError, UniqueField};
    use crate::tests::support::fixtures::seeded_user;
    use crate::tests::support::in_memory::InMemoryStore;
    use crate::tests::support::stubs::StubPasswordHasher;

    fn service(store: &InMemoryStore) -> PatchUserService<InMemoryStore, StubPasswordHasher> {
        PatchUserService::new(store.clone(), StubPasswordHasher)
    }

    fn three_users(store: &InMemoryStore) -> (User, User, User) {
        (
            store.insert_user(seeded_user("alice01", "110101199001011234")),
            store.insert_user(seeded_user("bob02", "110101199001011235")),
            store.insert_user(seeded_user("carol03", "110101199001011236")),
        )
    }

    #[tokio::test]
    async fn test_empty_patch_on_existing_user_is_noop() {
        let store = InMemoryStore::default();
        let (_, _, carol) = three_users(&store);

        let outcome = service(&store)
            .execute(carol.id, UserPatch::default())
            .await
            .unwrap();

        assert_eq!(outcome.affected_rows, 0);
        assert!(outcome.updated_fields.is_empty());
        assert_eq!(outcome.row, carol);
        assert_eq!(store.user(carol.id).unwrap(), carol);
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_user_is_not_found_regardless_of_body() {
        let store = InMemoryStore::default();
        three_users(&store);

        let err = service(&store)
            .execute(
                999,
                UserPatch {
                    username: PatchField::Value("alice01".to_string()),
                    phone: PatchField::Value("bad".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err, GuardError::NotFound);
    }

    #[tokio::test]
    async fn test_taking_another_users_username_conflicts() {
        let store = InMemoryStore::default();
        let (alice, bob, _) = three_users(&store);

        let err = service(&store)
            .execute(
                bob.id,
                UserPatch {
                    username: PatchField::Value("alice01".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert_eq!(
            err,
            GuardError::Conflict(vec![Conflict {
                field: UniqueField::Username,
                value: "alice01".to_string(),
                owner_id: Some(alice.id),
            }])
        );
        assert_eq!(store.user(bob.id).unwrap(), bob);
    }

    #[tokio::test]
    async fn test_resubmitting_own_values_is_allowed() {
        let store = InMemoryStore::default();
        let (alice, _, _) = three_users(&store);

        let outcome = service(&store)
            .execute(
                alice.id,
                UserPatch {
                    username: PatchField::Value("alice01".to_string()),
                    id_card: PatchField::Value("110101199001011234".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(outcome.updated_fields, vec!["username", "idCard"]);
        assert_eq!(outcome.affected_rows, 1);
    }

    #[tokio::test]
    async fn test_password_is_hashed_before_write() {
        let store = InMemoryStore::default();
        let (alice, _, _) = three_users(&store);

        let outcome = service(&store)
            .execute(
                alice.id,
                UserPatch {
                    password: PatchField::Value("newpass99".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(outcome.updated_fields, vec!["password"]);
        assert_eq!(store.user(alice.id).unwrap().password_hash, "hashed:newpass99");
    }

    #[tokio::test]
    async fn test_null_avatar_clears_it_and_leaves_the_rest() {
        let store = InMemoryStore::default();
        let (alice, _, _) = three_users(&store);

        let outcome = service(&store)
            .execute(
                alice.id,
                UserPatch {
                    avatar_url: PatchField::Null,
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let mut expected = alice.clone();
        expected.avatar_url = None;
        assert_eq!(outcome.row, expected);
        assert_eq!(store.user(alice.id).unwrap().username, alice.username);
    }

    #[tokio::test]
    async fn test_invalid_fields_are_all_reported() {
        let store = InMemoryStore::default();
        let (alice, _, _) = three_users(&store);

        let err = service(&store)
            .execute(
                alice.id,
                UserPatch {
                    email: PatchField::Value("nope".to_string()),
                    gender: PatchField::Value("x".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert_eq!(
            err,
            GuardError::Validation(vec![
                FieldError::new("email", "is not a valid email address"),
                FieldError::new("gender", "must be 男 or 女"),
            ])
        );
    }
}
