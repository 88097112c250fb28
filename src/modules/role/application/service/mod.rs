mod create_role_service;
mod get_roles_service;
mod patch_role_service;

pub use create_role_service::CreateRoleService;
pub use get_roles_service::GetRolesService;
pub use patch_role_service::PatchRoleService;
