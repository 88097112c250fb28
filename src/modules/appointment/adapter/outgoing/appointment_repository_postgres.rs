use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use std::sync::Arc;

use crate::modules::appointment::application::domain::entities::{
    Appointment, AppointmentPatch, AppointmentStatus, NewAppointment,
};
use crate::modules::appointment::application::ports::outgoing::{
    staff_errors, AppointmentRepository,
};
use crate::modules::property::adapter::outgoing::sea_orm_entity::properties;
use crate::modules::user::adapter::outgoing::sea_orm_entity::users;
use crate::shared::db::{map_db_err, stage, stage_nullable, to_db_time};
use crate::shared::patch::{FieldError, PatchStore, StoreError, UniqueLookup};

use super::sea_orm_entity::appointments::{
    ActiveModel as AppointmentActiveModel, Column as AppointmentColumn,
    Entity as AppointmentEntity,
};

#[derive(Clone, Debug)]
pub struct AppointmentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AppointmentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn new_appointment_model(data: NewAppointment) -> AppointmentActiveModel {
    let now = to_db_time(Utc::now());

    AppointmentActiveModel {
        id: NotSet,
        user_id: Set(data.user_id),
        property_id: Set(data.property_id),
        assigned_staff_id: Set(data.assigned_staff_id),
        remarks: Set(data.remarks),
        cancel_reason: Set(None),
        status: Set(AppointmentStatus::Pending.into()),
        appointment_time: Set(data.appointment_time.map(to_db_time)),
        appointment_end_time: Set(data.appointment_end_time.map(to_db_time)),
        assignment_time: Set(data.assigned_staff_id.map(|_| now)),
        created_at: Set(now),
        is_deleted: Set(false),
        deleted_at: Set(None),
    }
}

pub(crate) fn stage_appointment_patch(patch: &AppointmentPatch) -> AppointmentActiveModel {
    AppointmentActiveModel {
        assigned_staff_id: stage_nullable(patch.assigned_staff_id.clone()),
        status: stage(patch.status.clone().map(i32::from)),
        remarks: stage_nullable(patch.remarks.clone()),
        cancel_reason: stage_nullable(patch.cancel_reason.clone()),
        appointment_time: stage_nullable(patch.appointment_time.clone().map(to_db_time)),
        appointment_end_time: stage_nullable(
            patch.appointment_end_time.clone().map(to_db_time),
        ),
        assignment_time: stage_nullable(patch.assignment_time().map(to_db_time)),
        ..Default::default()
    }
}

impl UniqueLookup for AppointmentRepositoryPostgres {}

#[async_trait]
impl PatchStore<AppointmentPatch> for AppointmentRepositoryPostgres {
    type Row = Appointment;

    async fn fetch(&self, id: i32) -> Result<Option<Appointment>, StoreError> {
        AppointmentEntity::find_by_id(id)
            .filter(AppointmentColumn::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|m| m.to_domain())
            .transpose()
    }

    async fn check_references(
        &self,
        patch: &AppointmentPatch,
    ) -> Result<Vec<FieldError>, StoreError> {
        staff_errors(self, patch.assigned_staff_id.as_value().copied()).await
    }

    async fn apply(&self, id: i32, patch: &AppointmentPatch) -> Result<u64, StoreError> {
        let result = AppointmentEntity::update_many()
            .set(stage_appointment_patch(patch))
            .filter(AppointmentColumn::Id.eq(id))
            .filter(AppointmentColumn::IsDeleted.eq(false))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(result.rows_affected)
    }
}

#[async_trait]
impl AppointmentRepository for AppointmentRepositoryPostgres {
    async fn user_exists(&self, user_id: i32) -> Result<bool, StoreError> {
        let count = users::Entity::find_by_id(user_id)
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(count > 0)
    }

    async fn live_property_exists(&self, property_id: i32) -> Result<bool, StoreError> {
        let count = properties::Entity::find_by_id(property_id)
            .filter(properties::Column::IsDeleted.eq(false))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(count > 0)
    }

    async fn create_appointment(&self, data: NewAppointment) -> Result<Appointment, StoreError> {
        new_appointment_model(data)
            .insert(&*self.db)
            .await
            .map_err(map_db_err)?
            .to_domain()
    }

    async fn soft_delete(&self, id: i32) -> Result<bool, StoreError> {
        let result = AppointmentEntity::update_many()
            .col_expr(AppointmentColumn::IsDeleted, Expr::value(true))
            .col_expr(
                AppointmentColumn::DeletedAt,
                Expr::value(to_db_time(Utc::now())),
            )
            .filter(AppointmentColumn::Id.eq(id))
            .filter(AppointmentColumn::IsDeleted.eq(false))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::appointment::adapter::outgoing::sea_orm_entity::appointments::Model as AppointmentModel;
    use crate::shared::patch::PatchField;
    use crate::tests::support::fixtures::new_appointment;
    use sea_orm::sea_query::Value;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};
    use std::collections::BTreeMap;

    fn model(id: i32) -> AppointmentModel {
        AppointmentModel {
            id,
            user_id: 1,
            property_id: 2,
            assigned_staff_id: None,
            remarks: None,
            cancel_reason: None,
            status: 0,
            appointment_time: None,
            appointment_end_time: None,
            assignment_time: None,
            created_at: Utc::now().fixed_offset(),
            is_deleted: false,
            deleted_at: None,
        }
    }

    fn count_row(n: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("num_items", Value::BigInt(Some(n)))])
    }

    #[test]
    fn test_stage_assignment() {
        let model = stage_appointment_patch(
            &AppointmentPatch {
                assigned_staff_id: PatchField::Value(4),
                ..Default::default()
            }
            .stamped(Utc::now()),
        );
        assert!(model.assigned_staff_id.is_set());
        assert!(matches!(
            model.assignment_time,
            sea_orm::ActiveValue::Set(Some(_))
        ));
        assert!(model.status.is_not_set());

        let model = stage_appointment_patch(&AppointmentPatch {
            remarks: PatchField::Null,
            ..Default::default()
        });
        assert!(matches!(model.remarks, sea_orm::ActiveValue::Set(None)));
        assert!(model.assignment_time.is_not_set());
    }

    #[tokio::test]
    async fn test_create_returns_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(8)]])
            .into_connection();
        let repo = AppointmentRepositoryPostgres::new(Arc::new(db));

        let created = repo.create_appointment(new_appointment(1, 2)).await.unwrap();

        assert_eq!(created.id, 8);
        assert_eq!(created.status, AppointmentStatus::Pending);
    }

    #[tokio::test]
    async fn test_reference_lookups() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(1)]])
            .append_query_results(vec![vec![count_row(0)]])
            .into_connection();
        let repo = AppointmentRepositoryPostgres::new(Arc::new(db));

        assert!(repo.user_exists(1).await.unwrap());
        assert!(!repo.live_property_exists(2).await.unwrap());
    }

    #[tokio::test]
    async fn test_soft_delete() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();
        let repo = AppointmentRepositoryPostgres::new(Arc::new(db));

        assert!(repo.soft_delete(3).await.unwrap());
        assert!(!repo.soft_delete(3).await.unwrap());
    }

    #[tokio::test]
    async fn test_fetch_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Query(RuntimeErr::Internal("boom".into()))])
            .into_connection();
        let repo = AppointmentRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(repo.fetch(1).await, Err(StoreError::Database(_))));
    }
}
