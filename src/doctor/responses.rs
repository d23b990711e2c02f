use crate::{appointment::AppointmentItem, protocol::Render};
use serde::Serialize;

#[derive(Debug, Default, Serialize)]
pub struct AddDoctorResponse {
    pub success: bool,
    pub err: String,
    pub doctor_id: i32,
}

impl Render for AddDoctorResponse {
    fn lines(&self) -> Vec<String> {
        vec![format!("Doctor ID: {}", self.doctor_id)]
    }
}

#[derive(Debug, Default, Serialize)]
pub struct ListAppointmentsResponse {
    pub success: bool,
    pub err: String,
    pub appointments: Vec<AppointmentItem>,
}

impl Render for ListAppointmentsResponse {
    fn lines(&self) -> Vec<String> {
        if self.appointments.is_empty() {
            return vec!["No appointments found.".to_string()];
        }
        self.appointments.iter().map(AppointmentItem::line).collect()
    }
}

#[derive(Debug, Default, Serialize)]
pub struct StatusCountItem {
    pub doctor_id: i32,
    pub name: String,
    pub status: String,
    pub count: i64,
}

#[derive(Debug, Default, Serialize)]
pub struct StatusCountResponse {
    pub success: bool,
    pub err: String,
    pub counts: Vec<StatusCountItem>,
}

impl Render for StatusCountResponse {
    fn lines(&self) -> Vec<String> {
        if self.counts.is_empty() {
            return vec!["No appointments found.".to_string()];
        }
        self.counts
            .iter()
            .map(|item| {
                format!(
                    "doctor_ID: {}, name: {}, status: {}, count: {}",
                    item.doctor_id, item.name, item.status, item.count
                )
            })
            .collect()
    }
}

#[derive(Debug, Default, Serialize)]
pub struct PatientCountItem {
    pub doctor_id: i32,
    pub name: String,
    pub count: i64,
}

#[derive(Debug, Default, Serialize)]
pub struct PatientCountResponse {
    pub success: bool,
    pub err: String,
    pub status: String,
    pub counts: Vec<PatientCountItem>,
}

impl Render for PatientCountResponse {
    fn lines(&self) -> Vec<String> {
        if self.counts.is_empty() {
            return vec!["No doctors found.".to_string()];
        }
        self.counts
            .iter()
            .map(|item| {
                format!(
                    "doctor_ID: {}, name: {}, patients with status {}: {}",
                    item.doctor_id, item.name, self.status, item.count
                )
            })
            .collect()
    }
}

crate::impl_err_response! {
    AddDoctorResponse,
    ListAppointmentsResponse,
    StatusCountResponse,
    PatientCountResponse,
}
