use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::shared::codes::coded_enum;
use crate::shared::patch::{CreatePlan, FieldError, PatchField, PatchPlan};
use crate::shared::validation::Violations;

pub const REMARKS_MAX: usize = 128;
pub const CANCEL_REASON_MAX: usize = 128;

coded_enum! {
    pub enum AppointmentStatus {
        Pending = 0,
        Confirmed = 1,
        Cancelled = 2,
        Viewed = 3,
        Missed = 4,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i32,
    pub user_id: i32,
    pub property_id: i32,
    pub assigned_staff_id: Option<i32>,
    pub remarks: Option<String>,
    pub cancel_reason: Option<String>,
    pub status: AppointmentStatus,
    pub appointment_time: Option<DateTime<Utc>>,
    pub appointment_end_time: Option<DateTime<Utc>>,
    pub assignment_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
}

fn check_window(v: &mut Violations, start: Option<&DateTime<Utc>>, end: Option<&DateTime<Utc>>) {
    if let (Some(start), Some(end)) = (start, end) {
        v.check(
            end > start,
            "appointmentEndTime",
            "must be after appointmentTime",
        );
    }
}

fn clean(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

//
// ──────────────────────────────────────────────────────────
// Create
// ──────────────────────────────────────────────────────────
//

/// A viewing request. Status always starts at `Pending`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAppointment {
    pub user_id: i32,
    pub property_id: i32,
    pub assigned_staff_id: Option<i32>,
    pub remarks: Option<String>,
    pub appointment_time: Option<DateTime<Utc>>,
    pub appointment_end_time: Option<DateTime<Utc>>,
}

impl NewAppointment {
    pub fn normalized(self) -> Self {
        Self {
            remarks: clean(self.remarks),
            ..self
        }
    }
}

impl CreatePlan for NewAppointment {
    fn validate(&self) -> Vec<FieldError> {
        let mut v = Violations::new();

        if let Some(remarks) = &self.remarks {
            v.max_chars("remarks", remarks, REMARKS_MAX);
        }
        check_window(
            &mut v,
            self.appointment_time.as_ref(),
            self.appointment_end_time.as_ref(),
        );

        v.into_vec()
    }
}

//
// ──────────────────────────────────────────────────────────
// Patch
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentPatch {
    pub assigned_staff_id: PatchField<i32>,
    pub status: PatchField<AppointmentStatus>,
    pub remarks: PatchField<String>,
    pub cancel_reason: PatchField<String>,
    pub appointment_time: PatchField<DateTime<Utc>>,
    pub appointment_end_time: PatchField<DateTime<Utc>>,
    /// Write time; becomes `assignment_time` when staff is (un)assigned.
    pub stamped_at: Option<DateTime<Utc>>,
}

impl AppointmentPatch {
    pub fn stamped(self, now: DateTime<Utc>) -> Self {
        Self {
            stamped_at: Some(now),
            ..self
        }
    }

    /// `assignment_time` after this patch, when it changes it.
    pub fn assignment_time(&self) -> PatchField<DateTime<Utc>> {
        match (&self.assigned_staff_id, self.stamped_at) {
            (PatchField::Value(_), Some(now)) => PatchField::Value(now),
            (PatchField::Null, Some(_)) => PatchField::Null,
            _ => PatchField::Unset,
        }
    }
}

impl PatchPlan<Appointment> for AppointmentPatch {
    fn normalize(self) -> Self {
        Self {
            remarks: self.remarks.blank_as_unset(),
            cancel_reason: self.cancel_reason.blank_as_unset(),
            ..self
        }
    }

    fn present_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        self.assigned_staff_id.mark("assignedStaffId", &mut fields);
        self.status.mark("status", &mut fields);
        self.remarks.mark("remarks", &mut fields);
        self.cancel_reason.mark("cancelReason", &mut fields);
        self.appointment_time.mark("appointmentTime", &mut fields);
        self.appointment_end_time
            .mark("appointmentEndTime", &mut fields);
        fields
    }

    fn validate(&self, current: &Appointment) -> Vec<FieldError> {
        let mut v = Violations::new();

        v.not_null("status", &self.status);
        if let Some(remarks) = self.remarks.as_value() {
            v.max_chars("remarks", remarks, REMARKS_MAX);
        }
        if let Some(reason) = self.cancel_reason.as_value() {
            v.max_chars("cancelReason", reason, CANCEL_REASON_MAX);
        }

        if self.appointment_time.is_present() || self.appointment_end_time.is_present() {
            check_window(
                &mut v,
                self.appointment_time
                    .resolve(current.appointment_time.as_ref()),
                self.appointment_end_time
                    .resolve(current.appointment_end_time.as_ref()),
            );
        }

        v.into_vec()
    }

    fn apply_to(&self, row: &mut Appointment) {
        self.assigned_staff_id
            .apply_nullable(&mut row.assigned_staff_id);
        self.status.apply(&mut row.status);
        self.remarks.apply_nullable(&mut row.remarks);
        self.cancel_reason.apply_nullable(&mut row.cancel_reason);
        self.appointment_time
            .apply_nullable(&mut row.appointment_time);
        self.appointment_end_time
            .apply_nullable(&mut row.appointment_end_time);
        self.assignment_time()
            .apply_nullable(&mut row.assignment_time);
    }
}
