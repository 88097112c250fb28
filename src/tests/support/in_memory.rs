use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::modules::announcement::application::domain::entities::{
    Announcement, AnnouncementDraft, AnnouncementPatch,
};
use crate::modules::announcement::application::ports::outgoing::{
    AnnouncementQuery, AnnouncementRepository,
};
use crate::modules::appointment::application::domain::entities::{
    Appointment, AppointmentPatch, AppointmentStatus, NewAppointment,
};
use crate::modules::appointment::application::ports::outgoing::{
    staff_errors, AppointmentQuery, AppointmentRepository,
};
use crate::modules::permission::application::domain::entities::{
    NewPermission, Permission, RolePermission,
};
use crate::modules::permission::application::ports::outgoing::{
    PermissionQuery, PermissionRepository,
};
use crate::modules::property::application::domain::entities::{
    NewProperty, Property, PropertyFilter, PropertyPatch, PropertyStatus,
};
use crate::modules::property::application::ports::outgoing::{
    approver_errors, PropertyQuery, PropertyRepository,
};
use crate::modules::role::application::domain::entities::{NewRole, Role, RolePatch};
use crate::modules::role::application::ports::outgoing::{RoleQuery, RoleRepository};
use crate::modules::user::application::domain::entities::{User, UserFilter, UserPatch};
use crate::modules::user::application::ports::outgoing::{
    CreateUserData, UserQuery, UserRepository,
};
use crate::modules::user_role::application::domain::entities::UserRole;
use crate::modules::user_role::application::ports::outgoing::{
    UserRoleQuery, UserRoleRepository,
};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::shared::patch::{
    FieldError, PatchPlan, PatchStore, StoreError, UniqueField, UniqueLookup,
};

#[derive(Default)]
struct State {
    users: BTreeMap<i32, User>,
    roles: BTreeMap<i32, Role>,
    permissions: BTreeMap<i32, Permission>,
    role_permissions: BTreeSet<(i32, i32)>,
    user_roles: BTreeSet<UserRole>,
    properties: BTreeMap<i32, Property>,
    appointments: BTreeMap<i32, Appointment>,
    announcements: BTreeMap<i32, Announcement>,
    writes: usize,
}

fn next_id<T>(rows: &BTreeMap<i32, T>) -> i32 {
    rows.keys().next_back().map_or(1, |id| id + 1)
}

/// Keeps the caller's id unless it is 0, which asks for the next free one.
fn insert_row<T: Clone>(
    rows: &mut BTreeMap<i32, T>,
    id: i32,
    mut row: T,
    set_id: impl FnOnce(&mut T, i32),
) -> T {
    let id = if id == 0 { next_id(rows) } else { id };
    set_id(&mut row, id);
    rows.insert(id, row.clone());
    row
}

/// One store behind every port, so tests can seed and inspect any table.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    /// Number of patch writes that reached the store.
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }

    // Users

    pub fn insert_user(&self, user: User) -> User {
        let id = user.id;
        insert_row(&mut self.lock().users, id, user, |u, id| u.id = id)
    }

    pub fn user(&self, id: i32) -> Option<User> {
        self.lock().users.get(&id).cloned()
    }

    pub fn user_count(&self) -> usize {
        self.lock().users.len()
    }

    pub fn set_user_status(&self, id: i32, status: bool) {
        if let Some(user) = self.lock().users.get_mut(&id) {
            user.status = status;
        }
    }

    // Roles and permissions

    pub fn insert_role(&self, name: &str) -> Role {
        let role = Role {
            id: 0,
            name: name.to_string(),
            description: None,
        };
        insert_row(&mut self.lock().roles, 0, role, |r, id| r.id = id)
    }

    pub fn role(&self, id: i32) -> Option<Role> {
        self.lock().roles.get(&id).cloned()
    }

    pub fn insert_permission(&self, name: &str) -> Permission {
        let permission = Permission {
            id: 0,
            name: name.to_string(),
            description: None,
            module: None,
        };
        insert_row(&mut self.lock().permissions, 0, permission, |p, id| p.id = id)
    }

    pub fn permission(&self, id: i32) -> Option<Permission> {
        self.lock().permissions.get(&id).cloned()
    }

    pub fn link_role_permission(&self, role_id: i32, permission_id: i32) {
        self.lock().role_permissions.insert((role_id, permission_id));
    }

    pub fn role_permission_pairs(&self) -> Vec<RolePermission> {
        self.lock()
            .role_permissions
            .iter()
            .map(|&(role_id, permission_id)| RolePermission {
                role_id,
                permission_id,
            })
            .collect()
    }

    pub fn link_user_role(&self, user_id: i32, role_id: i32) {
        self.lock().user_roles.insert(UserRole { user_id, role_id });
    }

    /// Sorted by user, then role.
    pub fn user_role_pairs(&self) -> Vec<UserRole> {
        self.lock().user_roles.iter().copied().collect()
    }

    // Properties

    pub fn insert_property(&self, property: Property) -> Property {
        let id = property.id;
        insert_row(&mut self.lock().properties, id, property, |p, id| p.id = id)
    }

    /// Includes soft-deleted rows.
    pub fn property(&self, id: i32) -> Option<Property> {
        self.lock().properties.get(&id).cloned()
    }

    pub fn property_count(&self) -> usize {
        self.lock().properties.len()
    }

    // Appointments

    pub fn insert_appointment(&self, appointment: Appointment) -> Appointment {
        let id = appointment.id;
        insert_row(&mut self.lock().appointments, id, appointment, |a, id| a.id = id)
    }

    /// Includes soft-deleted rows.
    pub fn appointment(&self, id: i32) -> Option<Appointment> {
        self.lock().appointments.get(&id).cloned()
    }

    pub fn appointment_count(&self) -> usize {
        self.lock().appointments.len()
    }

    // Announcements

    pub fn insert_announcement(&self, announcement: Announcement) -> Announcement {
        let id = announcement.id;
        insert_row(&mut self.lock().announcements, id, announcement, |a, id| a.id = id)
    }

    /// Includes soft-deleted rows; `None` once hard-deleted.
    pub fn announcement(&self, id: i32) -> Option<Announcement> {
        self.lock().announcements.get(&id).cloned()
    }

    pub fn announcement_count(&self) -> usize {
        self.lock().announcements.len()
    }

    fn live_properties(&self) -> Vec<Property> {
        self.lock()
            .properties
            .values()
            .filter(|p| !p.is_deleted)
            .cloned()
            .collect()
    }

    fn live_appointments(&self) -> Vec<Appointment> {
        self.lock()
            .appointments
            .values()
            .filter(|a| !a.is_deleted)
            .cloned()
            .collect()
    }

    fn announcements_where(&self, deleted: bool) -> Vec<Announcement> {
        let mut rows: Vec<Announcement> = self
            .lock()
            .announcements
            .values()
            .filter(|a| a.is_deleted == deleted)
            .cloned()
            .collect();

        // Postgres sorts NULL first under DESC.
        rows.sort_by(|a, b| match (a.publish_time, b.publish_time) {
            (None, Some(_)) => std::cmp::Ordering::Less,
            (Some(_), None) => std::cmp::Ordering::Greater,
            (x, y) => y.cmp(&x).then(b.id.cmp(&a.id)),
        });
        rows
    }

    fn code_taken(state: &State, code: &str) -> bool {
        state.properties.values().any(|p| p.property_code == code)
    }

    fn property_row(id: i32, data: NewProperty) -> Property {
        Property {
            id,
            region_id: data.region_id,
            approved_by: data.approved_by,
            property_name: data.property_name,
            property_code: data.property_code,
            room_number: data.room_number,
            address: data.address,
            description: data.description,
            area: data.area,
            bedrooms: data.bedrooms,
            bathrooms: data.bathrooms,
            max_tenants: data.max_tenants,
            rent_price: data.rent_price,
            rent_deposit: data.rent_deposit,
            property_fee: data.property_fee,
            latitude: data.latitude,
            longitude: data.longitude,
            status: PropertyStatus::PendingReview,
            lease_type: data.lease_type,
            lease_term: data.lease_term,
            available_date: data.available_date,
            approved_at: None,
            created_at: Utc::now(),
            updated_at: None,
            is_deleted: false,
            deleted_at: None,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Uniqueness
// ──────────────────────────────────────────────────────────
//

#[async_trait]
impl UniqueLookup for InMemoryStore {
    async fn owner_of(&self, field: UniqueField, value: &str) -> Result<Option<i32>, StoreError> {
        let state = self.lock();
        let owner = match field {
            UniqueField::Username => state
                .users
                .values()
                .find(|u| u.username == value)
                .map(|u| u.id),
            UniqueField::IdCard => state
                .users
                .values()
                .find(|u| u.id_card.as_deref() == Some(value))
                .map(|u| u.id),
            UniqueField::PropertyCode => state
                .properties
                .values()
                .find(|p| p.property_code == value)
                .map(|p| p.id),
        };
        Ok(owner)
    }
}

//
// ──────────────────────────────────────────────────────────
// Users
// ──────────────────────────────────────────────────────────
//

#[async_trait]
impl PatchStore<UserPatch> for InMemoryStore {
    type Row = User;

    async fn fetch(&self, id: i32) -> Result<Option<User>, StoreError> {
        Ok(self.user(id))
    }

    async fn apply(&self, id: i32, patch: &UserPatch) -> Result<u64, StoreError> {
        let mut state = self.lock();
        state.writes += 1;
        match state.users.get_mut(&id) {
            Some(user) => {
                patch.apply_to(user);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create_user(&self, data: CreateUserData) -> Result<User, StoreError> {
        let mut state = self.lock();

        if state.users.values().any(|u| u.username == data.username) {
            return Err(StoreError::UniqueViolation(UniqueField::Username));
        }
        if state
            .users
            .values()
            .any(|u| u.id_card.as_deref() == Some(data.id_card.as_str()))
        {
            return Err(StoreError::UniqueViolation(UniqueField::IdCard));
        }

        let now = Utc::now();
        let user = User {
            id: 0,
            username: data.username,
            password_hash: data.password_hash,
            email: Some(data.email),
            phone: Some(data.phone),
            real_name: Some(data.real_name),
            id_card: Some(data.id_card),
            gender: Some(data.gender),
            avatar_url: data.avatar_url,
            status: false,
            created_at: now,
            updated_at: now,
        };
        Ok(insert_row(&mut state.users, 0, user, |u, id| u.id = id))
    }

    async fn set_status(&self, id: i32, status: bool) -> Result<Option<User>, StoreError> {
        let mut state = self.lock();
        Ok(state.users.get_mut(&id).map(|user| {
            user.status = status;
            user.clone()
        }))
    }
}

#[async_trait]
impl UserQuery for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, StoreError> {
        Ok(self.user(id))
    }

    async fn list_all(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.lock().users.values().cloned().collect())
    }

    async fn list_paged(&self, page: PageRequest) -> Result<PageResult<User>, StoreError> {
        let all = self.lock().users.values().cloned().collect();
        Ok(PageResult::from_all(all, page))
    }

    async fn search(&self, filter: UserFilter) -> Result<Vec<User>, StoreError> {
        Ok(self
            .lock()
            .users
            .values()
            .filter(|u| filter.matches(u))
            .cloned()
            .collect())
    }

    async fn list_without_role(&self, page: PageRequest) -> Result<PageResult<User>, StoreError> {
        let state = self.lock();
        let assigned: HashSet<i32> = state.user_roles.iter().map(|p| p.user_id).collect();
        let all = state
            .users
            .values()
            .filter(|u| !assigned.contains(&u.id))
            .cloned()
            .collect();
        Ok(PageResult::from_all(all, page))
    }
}

//
// ──────────────────────────────────────────────────────────
// Roles
// ──────────────────────────────────────────────────────────
//

#[async_trait]
impl PatchStore<RolePatch> for InMemoryStore {
    type Row = Role;

    async fn fetch(&self, id: i32) -> Result<Option<Role>, StoreError> {
        Ok(self.role(id))
    }

    async fn apply(&self, id: i32, patch: &RolePatch) -> Result<u64, StoreError> {
        let mut state = self.lock();
        state.writes += 1;
        match state.roles.get_mut(&id) {
            Some(role) => {
                patch.apply_to(role);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[async_trait]
impl RoleRepository for InMemoryStore {
    async fn create_role(&self, data: NewRole) -> Result<Role, StoreError> {
        let role = Role {
            id: 0,
            name: data.name,
            description: data.description,
        };
        Ok(insert_row(&mut self.lock().roles, 0, role, |r, id| r.id = id))
    }
}

#[async_trait]
impl RoleQuery for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Role>, StoreError> {
        Ok(self.role(id))
    }

    async fn list_all(&self) -> Result<Vec<Role>, StoreError> {
        Ok(self.lock().roles.values().cloned().collect())
    }
}

#[async_trait]
impl PermissionRepository for InMemoryStore {
    async fn create_permission(&self, data: NewPermission) -> Result<Permission, StoreError> {
        let permission = Permission {
            id: 0,
            name: data.name,
            description: data.description,
            module: data.module,
        };
        Ok(insert_row(
            &mut self.lock().permissions,
            0,
            permission,
            |p, id| p.id = id,
        ))
    }

    async fn delete_permission(&self, id: i32) -> Result<bool, StoreError> {
        let mut state = self.lock();
        if state.permissions.remove(&id).is_none() {
            return Ok(false);
        }
        state.role_permissions.retain(|&(_, permission_id)| permission_id != id);
        Ok(true)
    }
}

#[async_trait]
impl PermissionQuery for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Permission>, StoreError> {
        Ok(self.permission(id))
    }

    async fn list_all(&self) -> Result<Vec<Permission>, StoreError> {
        Ok(self.lock().permissions.values().cloned().collect())
    }

    async fn list_role_permissions(&self) -> Result<Vec<RolePermission>, StoreError> {
        Ok(self.role_permission_pairs())
    }
}

#[async_trait]
impl UserRoleRepository for InMemoryStore {
    async fn existing_user_ids(&self, ids: &[i32]) -> Result<HashSet<i32>, StoreError> {
        let state = self.lock();
        Ok(ids
            .iter()
            .copied()
            .filter(|id| state.users.contains_key(id))
            .collect())
    }

    async fn existing_role_ids(&self, ids: &[i32]) -> Result<HashSet<i32>, StoreError> {
        let state = self.lock();
        Ok(ids
            .iter()
            .copied()
            .filter(|id| state.roles.contains_key(id))
            .collect())
    }

    async fn existing_pairs(
        &self,
        user_ids: &[i32],
        role_ids: &[i32],
    ) -> Result<HashSet<UserRole>, StoreError> {
        Ok(self
            .lock()
            .user_roles
            .iter()
            .filter(|p| user_ids.contains(&p.user_id) && role_ids.contains(&p.role_id))
            .copied()
            .collect())
    }

    async fn insert_pairs(&self, pairs: &[UserRole]) -> Result<u64, StoreError> {
        let mut state = self.lock();
        if pairs.iter().any(|p| state.user_roles.contains(p)) {
            return Err(StoreError::Database(
                "duplicate key value violates unique constraint \"user_roles_pkey\"".to_string(),
            ));
        }
        state.user_roles.extend(pairs.iter().copied());
        Ok(pairs.len() as u64)
    }

    async fn replace_roles(&self, user_id: i32, role_ids: &[i32]) -> Result<(), StoreError> {
        let mut state = self.lock();
        state.user_roles.retain(|p| p.user_id != user_id);
        state
            .user_roles
            .extend(role_ids.iter().map(|&role_id| UserRole { user_id, role_id }));
        Ok(())
    }
}

#[async_trait]
impl UserRoleQuery for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<UserRole>, StoreError> {
        Ok(self.user_role_pairs())
    }
}

//
// ──────────────────────────────────────────────────────────
// Properties
// ──────────────────────────────────────────────────────────
//

#[async_trait]
impl PatchStore<PropertyPatch> for InMemoryStore {
    type Row = Property;

    async fn fetch(&self, id: i32) -> Result<Option<Property>, StoreError> {
        Ok(self.property(id).filter(|p| !p.is_deleted))
    }

    async fn check_references(&self, patch: &PropertyPatch) -> Result<Vec<FieldError>, StoreError> {
        approver_errors(self, patch.approved_by.as_value().copied()).await
    }

    async fn apply(&self, id: i32, patch: &PropertyPatch) -> Result<u64, StoreError> {
        let mut state = self.lock();
        state.writes += 1;
        match state.properties.get_mut(&id).filter(|p| !p.is_deleted) {
            Some(property) => {
                patch.apply_to(property);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[async_trait]
impl PropertyRepository for InMemoryStore {
    async fn approver_exists(&self, user_id: i32) -> Result<bool, StoreError> {
        Ok(self.lock().users.contains_key(&user_id))
    }

    async fn create_property(&self, data: NewProperty) -> Result<Property, StoreError> {
        let mut state = self.lock();
        if Self::code_taken(&state, &data.property_code) {
            return Err(StoreError::UniqueViolation(UniqueField::PropertyCode));
        }
        let id = next_id(&state.properties);
        let property = Self::property_row(id, data);
        state.properties.insert(id, property.clone());
        Ok(property)
    }

    async fn create_properties(&self, data: Vec<NewProperty>) -> Result<Vec<Property>, StoreError> {
        let mut state = self.lock();

        let mut codes = HashSet::new();
        for item in &data {
            if Self::code_taken(&state, &item.property_code) || !codes.insert(&item.property_code) {
                return Err(StoreError::UniqueViolation(UniqueField::PropertyCode));
            }
        }

        let mut created = Vec::with_capacity(data.len());
        for item in data {
            let id = next_id(&state.properties);
            let property = Self::property_row(id, item);
            state.properties.insert(id, property.clone());
            created.push(property);
        }
        Ok(created)
    }

    async fn soft_delete(&self, id: i32) -> Result<bool, StoreError> {
        let mut state = self.lock();
        match state.properties.get_mut(&id).filter(|p| !p.is_deleted) {
            Some(property) => {
                property.is_deleted = true;
                property.deleted_at = Some(Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn restore(&self, id: i32) -> Result<bool, StoreError> {
        let mut state = self.lock();
        match state.properties.get_mut(&id).filter(|p| p.is_deleted) {
            Some(property) => {
                property.is_deleted = false;
                property.deleted_at = None;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl PropertyQuery for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Property>, StoreError> {
        Ok(self.property(id).filter(|p| !p.is_deleted))
    }

    async fn list_all(&self) -> Result<Vec<Property>, StoreError> {
        Ok(self.live_properties())
    }

    async fn list_paged(&self, page: PageRequest) -> Result<PageResult<Property>, StoreError> {
        Ok(PageResult::from_all(self.live_properties(), page))
    }

    async fn search(
        &self,
        filter: PropertyFilter,
        page: PageRequest,
    ) -> Result<PageResult<Property>, StoreError> {
        let hits = self
            .live_properties()
            .into_iter()
            .filter(|p| filter.matches(p))
            .collect();
        Ok(PageResult::from_all(hits, page))
    }
}

//
// ──────────────────────────────────────────────────────────
// Appointments
// ──────────────────────────────────────────────────────────
//

#[async_trait]
impl PatchStore<AppointmentPatch> for InMemoryStore {
    type Row = Appointment;

    async fn fetch(&self, id: i32) -> Result<Option<Appointment>, StoreError> {
        Ok(self.appointment(id).filter(|a| !a.is_deleted))
    }

    async fn check_references(
        &self,
        patch: &AppointmentPatch,
    ) -> Result<Vec<FieldError>, StoreError> {
        staff_errors(self, patch.assigned_staff_id.as_value().copied()).await
    }

    async fn apply(&self, id: i32, patch: &AppointmentPatch) -> Result<u64, StoreError> {
        let mut state = self.lock();
        state.writes += 1;
        match state.appointments.get_mut(&id).filter(|a| !a.is_deleted) {
            Some(appointment) => {
                patch.apply_to(appointment);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryStore {
    async fn user_exists(&self, user_id: i32) -> Result<bool, StoreError> {
        Ok(self.lock().users.contains_key(&user_id))
    }

    async fn live_property_exists(&self, property_id: i32) -> Result<bool, StoreError> {
        Ok(self
            .lock()
            .properties
            .get(&property_id)
            .is_some_and(|p| !p.is_deleted))
    }

    async fn create_appointment(&self, data: NewAppointment) -> Result<Appointment, StoreError> {
        let now = Utc::now();
        let appointment = Appointment {
            id: 0,
            user_id: data.user_id,
            property_id: data.property_id,
            assigned_staff_id: data.assigned_staff_id,
            remarks: data.remarks,
            cancel_reason: None,
            status: AppointmentStatus::Pending,
            appointment_time: data.appointment_time,
            appointment_end_time: data.appointment_end_time,
            assignment_time: data.assigned_staff_id.map(|_| now),
            created_at: now,
            is_deleted: false,
            deleted_at: None,
        };
        Ok(insert_row(
            &mut self.lock().appointments,
            0,
            appointment,
            |a, id| a.id = id,
        ))
    }

    async fn soft_delete(&self, id: i32) -> Result<bool, StoreError> {
        let mut state = self.lock();
        match state.appointments.get_mut(&id).filter(|a| !a.is_deleted) {
            Some(appointment) => {
                appointment.is_deleted = true;
                appointment.deleted_at = Some(Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl AppointmentQuery for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Appointment>, StoreError> {
        Ok(self.appointment(id).filter(|a| !a.is_deleted))
    }

    async fn list_all(&self) -> Result<Vec<Appointment>, StoreError> {
        Ok(self.live_appointments())
    }

    async fn list_paged(&self, page: PageRequest) -> Result<PageResult<Appointment>, StoreError> {
        Ok(PageResult::from_all(self.live_appointments(), page))
    }
}

//
// ──────────────────────────────────────────────────────────
// Announcements
// ──────────────────────────────────────────────────────────
//

#[async_trait]
impl PatchStore<AnnouncementPatch> for InMemoryStore {
    type Row = Announcement;

    async fn fetch(&self, id: i32) -> Result<Option<Announcement>, StoreError> {
        Ok(self.announcement(id).filter(|a| !a.is_deleted))
    }

    async fn apply(&self, id: i32, patch: &AnnouncementPatch) -> Result<u64, StoreError> {
        let mut state = self.lock();
        state.writes += 1;
        match state.announcements.get_mut(&id).filter(|a| !a.is_deleted) {
            Some(announcement) => {
                patch.apply_to(announcement);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[async_trait]
impl AnnouncementRepository for InMemoryStore {
    async fn create_announcement(
        &self,
        draft: AnnouncementDraft,
    ) -> Result<Announcement, StoreError> {
        let announcement = Announcement {
            id: 0,
            title: draft.title,
            content: draft.content,
            kind: draft.kind,
            status: draft.status,
            publish_time: draft.publish_time,
            expire_time: draft.expire_time,
            is_deleted: false,
        };
        Ok(insert_row(
            &mut self.lock().announcements,
            0,
            announcement,
            |a, id| a.id = id,
        ))
    }

    async fn soft_delete(&self, id: i32) -> Result<bool, StoreError> {
        let mut state = self.lock();
        match state.announcements.get_mut(&id).filter(|a| !a.is_deleted) {
            Some(announcement) => {
                announcement.is_deleted = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn restore(&self, id: i32) -> Result<bool, StoreError> {
        let mut state = self.lock();
        match state.announcements.get_mut(&id).filter(|a| a.is_deleted) {
            Some(announcement) => {
                announcement.is_deleted = false;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn hard_delete(&self, id: i32) -> Result<bool, StoreError> {
        Ok(self.lock().announcements.remove(&id).is_some())
    }
}

#[async_trait]
impl AnnouncementQuery for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Announcement>, StoreError> {
        Ok(self.announcement(id).filter(|a| !a.is_deleted))
    }

    async fn list_all(&self) -> Result<Vec<Announcement>, StoreError> {
        Ok(self.announcements_where(false))
    }

    async fn list_deleted(&self) -> Result<Vec<Announcement>, StoreError> {
        Ok(self.announcements_where(true))
    }
}
