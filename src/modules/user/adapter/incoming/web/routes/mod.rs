mod batch_create_users;
mod create_user;
mod get_users;
mod patch_user;
mod set_user_status;

pub use batch_create_users::batch_create_users_handler;
pub use create_user::create_user_handler;
pub use get_users::{
    get_user_handler, list_users_handler, list_users_paged_handler,
    list_users_without_role_handler, search_users_handler,
};
pub use patch_user::patch_user_handler;
pub use set_user_status::set_user_status_handler;
