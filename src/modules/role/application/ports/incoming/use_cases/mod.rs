mod create_role;
mod get_roles;
mod patch_role;

pub use create_role::CreateRoleUseCase;
pub use get_roles::GetRolesUseCase;
pub use patch_role::PatchRoleUseCase;
