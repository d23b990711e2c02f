use crate::{models::appointments::Appointment, protocol::Render, utils};
use serde::Serialize;

#[derive(Debug, Default, Serialize)]
pub struct AppointmentItem {
    pub appnt_id: i32,
    pub date: String,
    pub time_slot: String,
    pub status: String,
}

impl AppointmentItem {
    pub fn line(&self) -> String {
        format!(
            "appnt_ID: {}, date: {}, time_slot: {}, status: {}",
            self.appnt_id, self.date, self.time_slot, self.status
        )
    }
}

impl From<&Appointment> for AppointmentItem {
    fn from(data: &Appointment) -> Self {
        Self {
            appnt_id: data.appnt_id,
            date: utils::format_date_str(&data.adate),
            time_slot: data.time_slot.clone(),
            status: data.status.trim().to_string(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct AddAppointmentResponse {
    pub success: bool,
    pub err: String,
    pub appnt_id: i32,
}

impl Render for AddAppointmentResponse {
    fn lines(&self) -> Vec<String> {
        vec![format!("Appointment ID: {}", self.appnt_id)]
    }
}

#[derive(Debug, Default, Serialize)]
pub struct DepartmentAppointmentsResponse {
    pub success: bool,
    pub err: String,
    pub appointments: Vec<AppointmentItem>,
}

impl Render for DepartmentAppointmentsResponse {
    fn lines(&self) -> Vec<String> {
        if self.appointments.is_empty() {
            return vec!["No available appointments found.".to_string()];
        }
        self.appointments.iter().map(AppointmentItem::line).collect()
    }
}

crate::impl_err_response! {
    AddAppointmentResponse,
    DepartmentAppointmentsResponse,
}
