mod archive_property;
mod batch_create_properties;
mod create_property;
mod get_properties;
mod patch_property;

pub use archive_property::{delete_property_handler, restore_property_handler};
pub use batch_create_properties::batch_create_properties_handler;
pub use create_property::create_property_handler;
pub use get_properties::{
    get_property_handler, list_properties_handler, list_properties_paged_handler,
    search_properties_handler,
};
pub use patch_property::patch_property_handler;
