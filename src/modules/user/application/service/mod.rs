mod batch_create_users_service;
mod create_user_service;
mod get_users_service;
mod patch_user_service;
mod set_user_status_service;

pub use batch_create_users_service::BatchCreateUsersService;
pub use create_user_service::CreateUserService;
pub use get_users_service::GetUsersService;
pub use patch_user_service::PatchUserService;
pub use set_user_status_service::SetUserStatusService;
