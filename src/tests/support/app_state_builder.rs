use std::sync::Arc;

use actix_web::web;

use crate::modules::announcement::application::announcement_use_cases::AnnouncementUseCases;
use crate::modules::announcement::application::service::{
    ArchiveAnnouncementService, CreateAnnouncementService, GetAnnouncementsService,
    PatchAnnouncementService,
};
use crate::modules::appointment::application::appointment_use_cases::AppointmentUseCases;
use crate::modules::appointment::application::service::{
    CreateAppointmentService, DeleteAppointmentService, GetAppointmentsService,
    PatchAppointmentService,
};
use crate::modules::permission::application::permission_use_cases::PermissionUseCases;
use crate::modules::permission::application::service::{
    CreatePermissionService, DeletePermissionService, GetPermissionsService,
};
use crate::modules::property::application::property_use_cases::PropertyUseCases;
use crate::modules::property::application::service::{
    ArchivePropertyService, BatchCreatePropertiesService, CreatePropertyService,
    GetPropertiesService, PatchPropertyService,
};
use crate::modules::role::application::role_use_cases::RoleUseCases;
use crate::modules::role::application::service::{
    CreateRoleService, GetRolesService, PatchRoleService,
};
use crate::modules::user::application::ports::incoming::use_cases::PatchUserUseCase;
use crate::modules::user::application::service::{
    BatchCreateUsersService, CreateUserService, GetUsersService, PatchUserService,
    SetUserStatusService,
};
use crate::modules::user::application::user_use_cases::UserUseCases;
use crate::modules::user_role::application::service::{
    AssignUserRoleService, BatchAssignUserRolesService, ListUserRolesService,
    ReplaceUserRolesService,
};
use crate::modules::user_role::application::user_role_use_cases::UserRoleUseCases;
use crate::tests::support::in_memory::InMemoryStore;
use crate::tests::support::stubs::StubPasswordHasher;
use crate::AppState;

/// Wires every real service over one shared [`InMemoryStore`].
/// Individual use cases can be swapped for failing doubles.
#[derive(Default)]
pub struct TestAppStateBuilder {
    store: InMemoryStore,
    patch_user: Option<Arc<dyn PatchUserUseCase + Send + Sync>>,
}

impl TestAppStateBuilder {
    /// Handle on the backing store, for seeding and inspection.
    pub fn store(&self) -> InMemoryStore {
        self.store.clone()
    }

    pub fn with_patch_user(mut self, use_case: impl PatchUserUseCase + 'static) -> Self {
        self.patch_user = Some(Arc::new(use_case));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let store = self.store;

        let user = UserUseCases {
            create: Arc::new(CreateUserService::new(store.clone(), StubPasswordHasher)),
            batch_create: Arc::new(BatchCreateUsersService::new(
                store.clone(),
                StubPasswordHasher,
            )),
            patch: self.patch_user.unwrap_or_else(|| {
                Arc::new(PatchUserService::new(store.clone(), StubPasswordHasher))
            }),
            set_status: Arc::new(SetUserStatusService::new(store.clone())),
            get: Arc::new(GetUsersService::new(store.clone())),
        };

        let role = RoleUseCases {
            create: Arc::new(CreateRoleService::new(store.clone())),
            patch: Arc::new(PatchRoleService::new(store.clone())),
            get: Arc::new(GetRolesService::new(store.clone())),
        };

        let permission = PermissionUseCases {
            create: Arc::new(CreatePermissionService::new(store.clone())),
            delete: Arc::new(DeletePermissionService::new(store.clone())),
            get: Arc::new(GetPermissionsService::new(store.clone())),
        };

        let user_role = UserRoleUseCases {
            list: Arc::new(ListUserRolesService::new(store.clone())),
            assign: Arc::new(AssignUserRoleService::new(store.clone())),
            batch_assign: Arc::new(BatchAssignUserRolesService::new(store.clone())),
            replace: Arc::new(ReplaceUserRolesService::new(store.clone())),
        };

        let property = PropertyUseCases {
            create: Arc::new(CreatePropertyService::new(store.clone())),
            batch_create: Arc::new(BatchCreatePropertiesService::new(store.clone())),
            patch: Arc::new(PatchPropertyService::new(store.clone())),
            get: Arc::new(GetPropertiesService::new(store.clone())),
            archive: Arc::new(ArchivePropertyService::new(store.clone())),
        };

        let appointment = AppointmentUseCases {
            create: Arc::new(CreateAppointmentService::new(store.clone())),
            patch: Arc::new(PatchAppointmentService::new(store.clone())),
            get: Arc::new(GetAppointmentsService::new(store.clone())),
            delete: Arc::new(DeleteAppointmentService::new(store.clone())),
        };

        let announcement = AnnouncementUseCases {
            create: Arc::new(CreateAnnouncementService::new(store.clone())),
            patch: Arc::new(PatchAnnouncementService::new(store.clone())),
            get: Arc::new(GetAnnouncementsService::new(store.clone())),
            archive: Arc::new(ArchiveAnnouncementService::new(store)),
        };

        web::Data::new(AppState {
            user,
            role,
            permission,
            user_role,
            property,
            appointment,
            announcement,
        })
    }
}
