mod assign_user_role_service;
mod batch_assign_user_roles_service;
mod list_user_roles_service;
mod replace_user_roles_service;

pub use assign_user_role_service::AssignUserRoleService;
pub use batch_assign_user_roles_service::BatchAssignUserRolesService;
pub use list_user_roles_service::ListUserRolesService;
pub use replace_user_roles_service::ReplaceUserRolesService;
