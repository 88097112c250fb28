use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::modules::appointment::application::domain::entities::{
    AppointmentPatch, AppointmentStatus,
};
use crate::shared::api::{guard_error_response, ApiResponse};
use crate::shared::patch::PatchField;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchAppointmentRequest {
    #[serde(default)]
    pub assigned_staff_id: PatchField<i32>,
    #[serde(default)]
    pub status: PatchField<AppointmentStatus>,
    #[serde(default)]
    pub remarks: PatchField<String>,
    #[serde(default)]
    pub cancel_reason: PatchField<String>,
    #[serde(default)]
    pub appointment_time: PatchField<DateTime<Utc>>,
    #[serde(default)]
    pub appointment_end_time: PatchField<DateTime<Utc>>,
}

impl From<PatchAppointmentRequest> for AppointmentPatch {
    fn from(req: PatchAppointmentRequest) -> Self {
        AppointmentPatch {
            assigned_staff_id: req.assigned_staff_id,
            status: req.status,
            remarks: req.remarks,
            cancel_reason: req.cancel_reason,
            appointment_time: req.appointment_time,
            appointment_end_time: req.appointment_end_time,
            stamped_at: None,
        }
    }
}

#[post("/api/appointments/{id:\\d+}/update")]
pub async fn patch_appointment_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
    payload: web::Json<PatchAppointmentRequest>,
) -> impl Responder {
    let id = path.into_inner();

    match data
        .appointment
        .patch
        .execute(id, payload.into_inner().into())
        .await
    {
        Ok(outcome) => ApiResponse::success(outcome.summary()),
        Err(err) => guard_error_response(err, "APPOINTMENT_NOT_FOUND", "Appointment"),
    }
}
