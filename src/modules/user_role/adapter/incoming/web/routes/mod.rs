mod assign_user_role;
mod batch_assign_user_roles;
mod list_user_roles;
mod replace_user_roles;

pub use assign_user_role::assign_user_role_handler;
pub use batch_assign_user_roles::batch_assign_user_roles_handler;
pub use list_user_roles::list_user_roles_handler;
pub use replace_user_roles::replace_user_roles_handler;
