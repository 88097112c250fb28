use async_trait::async_trait;

use crate::modules::user::application::domain::entities::{Gender, User, UserPatch};
use crate::shared::patch::{PatchStore, StoreError};

// Input DTO for inserting a user; the password is already hashed
#[derive(Debug, Clone, PartialEq)]
pub struct CreateUserData {
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub phone: String,
    pub real_name: String,
    pub id_card: String,
    pub gender: Gender,
    pub avatar_url: Option<String>,
}

/// Write side of the users table. `fetch`/`apply` come from the patch engine.
#[async_trait]
pub trait UserRepository: PatchStore<UserPatch, Row = User> {
    async fn create_user(&self, data: CreateUserData) -> Result<User, StoreError>;

    /// `None` when no such user exists.
    async fn set_status(&self, id: i32, status: bool) -> Result<Option<User>, StoreError>;
}
