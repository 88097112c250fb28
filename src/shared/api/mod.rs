mod guard_response;
mod json_config;
mod path_config;
mod response;

pub use guard_response::guard_error_response;
pub use json_config::custom_json_config;
pub use path_config::custom_path_config;
pub use response::ApiResponse;
