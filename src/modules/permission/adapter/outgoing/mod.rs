mod permission_query_postgres;
mod permission_repository_postgres;
pub mod sea_orm_entity;

pub use permission_query_postgres::PermissionQueryPostgres;
pub use permission_repository_postgres::PermissionRepositoryPostgres;
