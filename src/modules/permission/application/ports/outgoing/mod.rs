mod permission_query;
mod permission_repository;

pub use permission_query::PermissionQuery;
pub use permission_repository::PermissionRepository;
