use async_trait::async_trait;
use serde::Serialize;

use crate::modules::user::application::domain::entities::{NewUser, User};
use crate::shared::patch::{Conflict, FieldError, GuardError};

//
// ──────────────────────────────────────────────────────────
// Report
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedUser {
    /// Position of the item in the submitted batch.
    pub index: usize,
    pub errors: Vec<FieldError>,
    pub conflicts: Vec<Conflict>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchCreateUsersReport {
    pub created: Vec<User>,
    pub rejected: Vec<RejectedUser>,
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

/// Items are guarded one by one; a rejected item does not stop the rest.
/// Only an infrastructure failure aborts the batch.
#[async_trait]
pub trait BatchCreateUsersUseCase: Send + Sync {
    async fn execute(&self, inputs: Vec<NewUser>) -> Result<BatchCreateUsersReport, GuardError>;
}
