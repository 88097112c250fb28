pub mod api;
pub mod codes;
pub mod db;
pub mod pagination;
pub mod patch;
pub mod validation;
