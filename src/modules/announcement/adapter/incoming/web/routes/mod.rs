mod archive_announcement;
mod create_announcement;
mod get_announcements;
mod patch_announcement;

pub use archive_announcement::{
    delete_announcement_handler, hard_delete_announcement_handler,
    restore_announcement_handler,
};
pub use create_announcement::create_announcement_handler;
pub use get_announcements::{
    get_announcement_handler, list_announcements_handler, list_deleted_announcements_handler,
};
pub use patch_announcement::patch_announcement_handler;
