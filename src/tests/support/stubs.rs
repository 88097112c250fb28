use async_trait::async_trait;

use crate::modules::user::application::ports::outgoing::{HashError, PasswordHasher};

/// Deterministic "hash" so tests can assert on the stored value.
#[derive(Clone)]
pub struct StubPasswordHasher;

#[async_trait]
impl PasswordHasher for StubPasswordHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{password}"))
    }
}

#[derive(Clone)]
pub struct FailingPasswordHasher;

#[async_trait]
impl PasswordHasher for FailingPasswordHasher {
    async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
        Err(HashError::HashFailed)
    }
}
