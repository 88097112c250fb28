mod batch_create_users;
mod create_user;
mod get_users;
mod patch_user;
mod set_user_status;

pub use batch_create_users::{BatchCreateUsersReport, BatchCreateUsersUseCase, RejectedUser};
pub use create_user::CreateUserUseCase;
pub use get_users::GetUsersUseCase;
pub use patch_user::PatchUserUseCase;
pub use set_user_status::SetUserStatusUseCase;
