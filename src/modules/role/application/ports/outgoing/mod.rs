mod role_query;
mod role_repository;

pub use role_query::RoleQuery;
pub use role_repository::RoleRepository;
