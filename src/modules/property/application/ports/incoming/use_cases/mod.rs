mod archive_property;
mod batch_create_properties;
mod create_property;
mod get_properties;
mod patch_property;

pub use archive_property::ArchivePropertyUseCase;
pub use batch_create_properties::BatchCreatePropertiesUseCase;
pub use create_property::CreatePropertyUseCase;
pub use get_properties::GetPropertiesUseCase;
pub use patch_property::PatchPropertyUseCase;
