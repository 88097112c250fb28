mod create_permission_service;
mod delete_permission_service;
mod get_permissions_service;

pub use create_permission_service::CreatePermissionService;
pub use delete_permission_service::DeletePermissionService;
pub use get_permissions_service::GetPermissionsService;
