mod announcement_query;
mod announcement_repository;

pub use announcement_query::AnnouncementQuery;
pub use announcement_repository::AnnouncementRepository;
