pub mod domain;
pub mod ports;
pub mod role_use_cases;
pub mod service;
