mod announcement_query_postgres;
mod announcement_repository_postgres;
pub mod sea_orm_entity;

pub use announcement_query_postgres::AnnouncementQueryPostgres;
pub use announcement_repository_postgres::AnnouncementRepositoryPostgres;
