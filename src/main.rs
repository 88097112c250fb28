mod config;
pub mod health;
pub mod modules;
mod shared;

#[cfg(test)]
mod tests;

use crate::config::AppConfig;
use crate::modules::announcement::adapter::outgoing::{
    AnnouncementQueryPostgres, AnnouncementRepositoryPostgres,
};
use crate::modules::announcement::application::announcement_use_cases::AnnouncementUseCases;
use crate::modules::announcement::application::service::{
    ArchiveAnnouncementService, CreateAnnouncementService, GetAnnouncementsService,
    PatchAnnouncementService,
};
use crate::modules::appointment::adapter::outgoing::{
    AppointmentQueryPostgres, AppointmentRepositoryPostgres,
};
use crate::modules::appointment::application::appointment_use_cases::AppointmentUseCases;
use crate::modules::appointment::application::service::{
    CreateAppointmentService, DeleteAppointmentService, GetAppointmentsService,
    PatchAppointmentService,
};
use crate::modules::permission::adapter::outgoing::{
    PermissionQueryPostgres, PermissionRepositoryPostgres,
};
use crate::modules::permission::application::permission_use_cases::PermissionUseCases;
use crate::modules::permission::application::service::{
    CreatePermissionService, DeletePermissionService, GetPermissionsService,
};
use crate::modules::property::adapter::outgoing::{
    PropertyQueryPostgres, PropertyRepositoryPostgres,
};
use crate::modules::property::application::property_use_cases::PropertyUseCases;
use crate::modules::property::application::service::{
    ArchivePropertyService, BatchCreatePropertiesService, CreatePropertyService,
    GetPropertiesService, PatchPropertyService,
};
use crate::modules::role::adapter::outgoing::{RoleQueryPostgres, RoleRepositoryPostgres};
use crate::modules::role::application::role_use_cases::RoleUseCases;
use crate::modules::role::application::service::{
    CreateRoleService, GetRolesService, PatchRoleService,
};
use crate::modules::user::adapter::outgoing::security::Argon2Hasher;
use crate::modules::user::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::modules::user::application::service::{
    BatchCreateUsersService, CreateUserService, GetUsersService, PatchUserService,
    SetUserStatusService,
};
use crate::modules::user::application::user_use_cases::UserUseCases;
use crate::modules::user_role::adapter::outgoing::{
    UserRoleQueryPostgres, UserRoleRepositoryPostgres,
};
use crate::modules::user_role::application::service::{
    AssignUserRoleService, BatchAssignUserRolesService, ListUserRolesService,
    ReplaceUserRolesService,
};
use crate::modules::user_role::application::user_role_use_cases::UserRoleUseCases;
use crate::shared::api::{custom_json_config, custom_path_config};

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone)]
pub struct AppState {
    pub user: UserUseCases,
    pub role: RoleUseCases,
    pub permission: PermissionUseCases,
    pub user_role: UserRoleUseCases,
    pub property: PropertyUseCases,
    pub appointment: AppointmentUseCases,
    pub announcement: AnnouncementUseCases,
}

#[cfg(not(tarpaulin_include))]
fn build_state(db: &Arc<DatabaseConnection>, hasher: Argon2Hasher) -> AppState {
    let user_repo = UserRepositoryPostgres::new(Arc::clone(db));
    let user_query = UserQueryPostgres::new(Arc::clone(db));
    let role_repo = RoleRepositoryPostgres::new(Arc::clone(db));
    let role_query = RoleQueryPostgres::new(Arc::clone(db));
    let permission_repo = PermissionRepositoryPostgres::new(Arc::clone(db));
    let permission_query = PermissionQueryPostgres::new(Arc::clone(db));
    let user_role_repo = UserRoleRepositoryPostgres::new(Arc::clone(db));
    let user_role_query = UserRoleQueryPostgres::new(Arc::clone(db));
    let property_repo = PropertyRepositoryPostgres::new(Arc::clone(db));
    let property_query = PropertyQueryPostgres::new(Arc::clone(db));
    let appointment_repo = AppointmentRepositoryPostgres::new(Arc::clone(db));
    let appointment_query = AppointmentQueryPostgres::new(Arc::clone(db));
    let announcement_repo = AnnouncementRepositoryPostgres::new(Arc::clone(db));
    let announcement_query = AnnouncementQueryPostgres::new(Arc::clone(db));

    AppState {
        user: UserUseCases {
            create: Arc::new(CreateUserService::new(user_repo.clone(), hasher.clone())),
            batch_create: Arc::new(BatchCreateUsersService::new(
                user_repo.clone(),
                hasher.clone(),
            )),
            patch: Arc::new(PatchUserService::new(user_repo.clone(), hasher)),
            set_status: Arc::new(SetUserStatusService::new(user_repo)),
            get: Arc::new(GetUsersService::new(user_query)),
        },
        role: RoleUseCases {
            create: Arc::new(CreateRoleService::new(role_repo.clone())),
            patch: Arc::new(PatchRoleService::new(role_repo)),
            get: Arc::new(GetRolesService::new(role_query)),
        },
        permission: PermissionUseCases {
            create: Arc::new(CreatePermissionService::new(permission_repo.clone())),
            delete: Arc::new(DeletePermissionService::new(permission_repo)),
            get: Arc::new(GetPermissionsService::new(permission_query)),
        },
        user_role: UserRoleUseCases {
            list: Arc::new(ListUserRolesService::new(user_role_query)),
            assign: Arc::new(AssignUserRoleService::new(user_role_repo.clone())),
            batch_assign: Arc::new(BatchAssignUserRolesService::new(user_role_repo.clone())),
            replace: Arc::new(ReplaceUserRolesService::new(user_role_repo)),
        },
        property: PropertyUseCases {
            create: Arc::new(CreatePropertyService::new(property_repo.clone())),
            batch_create: Arc::new(BatchCreatePropertiesService::new(property_repo.clone())),
            patch: Arc::new(PatchPropertyService::new(property_repo.clone())),
            get: Arc::new(GetPropertiesService::new(property_query)),
            archive: Arc::new(ArchivePropertyService::new(property_repo)),
        },
        appointment: AppointmentUseCases {
            create: Arc::new(CreateAppointmentService::new(appointment_repo.clone())),
            patch: Arc::new(PatchAppointmentService::new(appointment_repo.clone())),
            get: Arc::new(GetAppointmentsService::new(appointment_query)),
            delete: Arc::new(DeleteAppointmentService::new(appointment_repo)),
        },
        announcement: AnnouncementUseCases {
            create: Arc::new(CreateAnnouncementService::new(announcement_repo.clone())),
            patch: Arc::new(PatchAnnouncementService::new(announcement_repo.clone())),
            get: Arc::new(GetAnnouncementsService::new(announcement_query)),
            archive: Arc::new(ArchiveAnnouncementService::new(announcement_repo)),
        },
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env()?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.pool.max_connections)
        .min_connections(config.pool.min_connections)
        .connect_timeout(config.pool.connect_timeout)
        .acquire_timeout(config.pool.connect_timeout)
        .idle_timeout(config.pool.idle_timeout)
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db = Arc::new(Database::connect(opt).await?);

    let hasher = Argon2Hasher::new(&config.argon2)
        .map_err(|e| anyhow::anyhow!("Invalid Argon2 parameters: {e}"))?;

    let state = build_state(&db, hasher);

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db)))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::announcement::adapter::incoming::web::routes as announcement;
    use crate::modules::appointment::adapter::incoming::web::routes as appointment;
    use crate::modules::permission::adapter::incoming::web::routes as permission;
    use crate::modules::property::adapter::incoming::web::routes as property;
    use crate::modules::role::adapter::incoming::web::routes as role;
    use crate::modules::user::adapter::incoming::web::routes as user;
    use crate::modules::user_role::adapter::incoming::web::routes as user_role;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Users
    cfg.service(user::list_users_paged_handler);
    cfg.service(user::list_users_without_role_handler);
    cfg.service(user::search_users_handler);
    cfg.service(user::batch_create_users_handler);
    cfg.service(user::get_user_handler);
    cfg.service(user::list_users_handler);
    cfg.service(user::create_user_handler);
    cfg.service(user::patch_user_handler);
    cfg.service(user::set_user_status_handler);
    // Roles
    cfg.service(role::get_role_handler);
    cfg.service(role::list_roles_handler);
    cfg.service(role::create_role_handler);
    cfg.service(role::patch_role_handler);
    // Permissions
    cfg.service(permission::get_permission_handler);
    cfg.service(permission::list_permissions_handler);
    cfg.service(permission::list_role_permissions_handler);
    cfg.service(permission::create_permission_handler);
    cfg.service(permission::delete_permission_handler);
    // User roles
    cfg.service(user_role::list_user_roles_handler);
    cfg.service(user_role::batch_assign_user_roles_handler);
    cfg.service(user_role::assign_user_role_handler);
    cfg.service(user_role::replace_user_roles_handler);
    // Properties
    cfg.service(property::list_properties_paged_handler);
    cfg.service(property::search_properties_handler);
    cfg.service(property::batch_create_properties_handler);
    cfg.service(property::get_property_handler);
    cfg.service(property::list_properties_handler);
    cfg.service(property::create_property_handler);
    cfg.service(property::patch_property_handler);
    cfg.service(property::delete_property_handler);
    cfg.service(property::restore_property_handler);
    // Appointments
    cfg.service(appointment::list_appointments_paged_handler);
    cfg.service(appointment::get_appointment_handler);
    cfg.service(appointment::list_appointments_handler);
    cfg.service(appointment::create_appointment_handler);
    cfg.service(appointment::patch_appointment_handler);
    cfg.service(appointment::delete_appointment_handler);
    // Announcements
    cfg.service(announcement::list_deleted_announcements_handler);
    cfg.service(announcement::get_announcement_handler);
    cfg.service(announcement::list_announcements_handler);
    cfg.service(announcement::create_announcement_handler);
    cfg.service(announcement::patch_announcement_handler);
    cfg.service(announcement::delete_announcement_handler);
    cfg.service(announcement::restore_announcement_handler);
    cfg.service(announcement::hard_delete_announcement_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
