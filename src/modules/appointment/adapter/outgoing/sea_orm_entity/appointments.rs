use sea_orm::entity::prelude::*;

use crate::modules::appointment::application::domain::entities::Appointment;
use crate::shared::db::from_db_time;
use crate::shared::patch::StoreError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "appointments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub property_id: i32,
    pub assigned_staff_id: Option<i32>,
    pub remarks: Option<String>,
    pub cancel_reason: Option<String>,
    pub status: i32,
    pub appointment_time: Option<DateTimeWithTimeZone>,
    pub appointment_end_time: Option<DateTimeWithTimeZone>,
    pub assignment_time: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(self) -> Result<Appointment, StoreError> {
        Ok(Appointment {
            id: self.id,
            user_id: self.user_id,
            property_id: self.property_id,
            assigned_staff_id: self.assigned_staff_id,
            remarks: self.remarks,
            cancel_reason: self.cancel_reason,
            status: self.status.try_into()?,
            appointment_time: self.appointment_time.map(from_db_time),
            appointment_end_time: self.appointment_end_time.map(from_db_time),
            assignment_time: self.assignment_time.map(from_db_time),
            created_at: from_db_time(self.created_at),
            is_deleted: self.is_deleted,
            deleted_at: self.deleted_at.map(from_db_time),
        })
    }
}
