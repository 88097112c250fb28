use async_trait::async_trait;

use crate::modules::property::application::domain::entities::{
    NewProperty, Property, PropertyPatch,
};
use crate::shared::patch::{FieldError, PatchStore, StoreError};

#[async_trait]
pub trait PropertyRepository: PatchStore<PropertyPatch, Row = Property> {
    async fn approver_exists(&self, user_id: i32) -> Result<bool, StoreError>;

    async fn create_property(&self, data: NewProperty) -> Result<Property, StoreError>;

    /// Inserts every row in one transaction, or none.
    async fn create_properties(&self, data: Vec<NewProperty>) -> Result<Vec<Property>, StoreError>;

    /// `false` when no live row matched.
    async fn soft_delete(&self, id: i32) -> Result<bool, StoreError>;

    /// `false` when no deleted row matched.
    async fn restore(&self, id: i32) -> Result<bool, StoreError>;
}

/// Reference check on `approvedBy`, shared by create and patch.
pub async fn approver_errors<R>(
    repository: &R,
    approved_by: Option<i32>,
) -> Result<Vec<FieldError>, StoreError>
where
    R: PropertyRepository + ?Sized,
{
    match approved_by {
        Some(id) if !repository.approver_exists(id).await? => Ok(vec![FieldError::new(
            "approvedBy",
            format!("user {id} does not exist"),
        )]),
        _ => Ok(Vec::new()),
    }
}
