mod property_query;
mod property_repository;

pub use property_query::PropertyQuery;
pub use property_repository::{approver_errors, PropertyRepository};
