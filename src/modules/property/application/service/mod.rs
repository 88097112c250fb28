mod archive_property_service;
mod batch_create_properties_service;
mod create_property_service;
mod get_properties_service;
mod patch_property_service;

pub use archive_property_service::ArchivePropertyService;
pub use batch_create_properties_service::BatchCreatePropertiesService;
pub use create_property_service::CreatePropertyService;
pub use get_properties_service::GetPropertiesService;
pub use patch_property_service::PatchPropertyService;
