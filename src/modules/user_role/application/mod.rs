pub mod domain;
pub mod ports;
pub mod service;
pub mod user_role_use_cases;
