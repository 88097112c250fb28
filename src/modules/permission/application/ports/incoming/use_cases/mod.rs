mod create_permission;
mod delete_permission;
mod get_permissions;

pub use create_permission::CreatePermissionUseCase;
pub use delete_permission::DeletePermissionUseCase;
pub use get_permissions::GetPermissionsUseCase;
