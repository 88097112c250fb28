pub mod permissions;
pub mod role_permissions;
