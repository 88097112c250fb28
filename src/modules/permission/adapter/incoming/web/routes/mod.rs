mod create_permission;
mod delete_permission;
mod get_permissions;

pub use create_permission::create_permission_handler;
pub use delete_permission::delete_permission_handler;
pub use get_permissions::{
    get_permission_handler, list_permissions_handler, list_role_permissions_handler,
};
