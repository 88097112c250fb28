mod archive_announcement_service;
mod create_announcement_service;
mod get_announcements_service;
mod patch_announcement_service;

pub use archive_announcement_service::ArchiveAnnouncementService;
pub use create_announcement_service::CreateAnnouncementService;
pub use get_announcements_service::GetAnnouncementsService;
pub use patch_announcement_service::PatchAnnouncementService;
