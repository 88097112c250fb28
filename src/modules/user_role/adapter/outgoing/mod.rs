pub mod sea_orm_entity;
mod user_role_query_postgres;
mod user_role_repository_postgres;

pub use user_role_query_postgres::UserRoleQueryPostgres;
pub use user_role_repository_postgres::UserRoleRepositoryPostgres;
