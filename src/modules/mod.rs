pub mod announcement;
pub mod appointment;
pub mod permission;
pub mod property;
pub mod role;
pub mod user;
pub mod user_role;
