mod user_role_query;
mod user_role_repository;

pub use user_role_query::UserRoleQuery;
pub use user_role_repository::UserRoleRepository;
