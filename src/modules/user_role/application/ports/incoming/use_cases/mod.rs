mod assign_user_role;
mod batch_assign_user_roles;
mod list_user_roles;
mod replace_user_roles;

pub use assign_user_role::{AssignUserRoleError, AssignUserRoleUseCase};
pub use batch_assign_user_roles::BatchAssignUserRolesUseCase;
pub use list_user_roles::ListUserRolesUseCase;
pub use replace_user_roles::ReplaceUserRolesUseCase;
