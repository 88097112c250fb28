mod archive_announcement;
mod create_announcement;
mod get_announcements;
mod patch_announcement;

pub use archive_announcement::ArchiveAnnouncementUseCase;
pub use create_announcement::CreateAnnouncementUseCase;
pub use get_announcements::GetAnnouncementsUseCase;
pub use patch_announcement::PatchAnnouncementUseCase;
