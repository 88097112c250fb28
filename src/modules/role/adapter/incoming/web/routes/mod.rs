mod create_role;
mod get_roles;
mod patch_role;

pub use create_role::create_role_handler;
pub use get_roles::{get_role_handler, list_roles_handler};
pub use patch_role::patch_role_handler;
