use async_trait::async_trait;
use std::collections::HashSet;

use crate::modules::user_role::application::domain::entities::UserRole;
use crate::shared::patch::StoreError;

#[async_trait]
pub trait UserRoleRepository: Send + Sync {
    /// The subset of `ids` naming stored users.
    async fn existing_user_ids(&self, ids: &[i32]) -> Result<HashSet<i32>, StoreError>;

    /// The subset of `ids` naming stored roles.
    async fn existing_role_ids(&self, ids: &[i32]) -> Result<HashSet<i32>, StoreError>;

    async fn existing_pairs(
        &self,
        user_ids: &[i32],
        role_ids: &[i32],
    ) -> Result<HashSet<UserRole>, StoreError>;

    /// Inserts every pair in one statement; returns the inserted count.
    async fn insert_pairs(&self, pairs: &[UserRole]) -> Result<u64, StoreError>;

    /// Replaces the user's role set in one transaction.
    async fn replace_roles(&self, user_id: i32, role_ids: &[i32]) -> Result<(), StoreError>;
}
