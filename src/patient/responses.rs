use crate::{models::appointments::AppointmentStatus, protocol::Render};
use serde::Serialize;

#[derive(Debug, Default, Serialize)]
pub struct AddPatientResponse {
    pub success: bool,
    pub err: String,
    pub patient_id: i32,
}

impl Render for AddPatientResponse {
    fn lines(&self) -> Vec<String> {
        vec![format!("Patient ID: {}", self.patient_id)]
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BookingOutcome {
    Booked {
        appnt_id: i32,
        from: AppointmentStatus,
        to: AppointmentStatus,
        number_of_appts: i32,
    },
    Unchanged {
        appnt_id: i32,
        status: AppointmentStatus,
    },
    DoctorNotFound {
        doctor_id: i32,
    },
    NotAssociated {
        appnt_id: i32,
        doctor_id: i32,
    },
}

#[derive(Debug, Default, Serialize)]
pub struct MakeAppointmentResponse {
    pub success: bool,
    pub err: String,
    pub patient_id: i32,
    pub patient_created: bool,
    pub booking: Option<BookingOutcome>,
}

impl Render for MakeAppointmentResponse {
    fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.patient_created {
            lines.push(format!(
                "Patient does not exist. Created patient with ID: {}",
                self.patient_id
            ));
        }
        match &self.booking {
            Some(BookingOutcome::Booked {
                appnt_id,
                from,
                to,
                number_of_appts,
            }) => lines.push(format!(
                "Appointment {} status {} -> {}. Patient {} now has {} appointment(s).",
                appnt_id, from, to, self.patient_id, number_of_appts
            )),
            Some(BookingOutcome::Unchanged { appnt_id, status }) => lines.push(format!(
                "Appointment {} has status {}; nothing to book.",
                appnt_id, status
            )),
            Some(BookingOutcome::DoctorNotFound { .. }) => {
                lines.push("Doctor does not exist. Returning to menu.".to_string())
            }
            Some(BookingOutcome::NotAssociated { .. }) => lines.push(
                "Appointment ID is not associated with Doctor ID. Returning to menu.".to_string(),
            ),
            None => {}
        }
        lines
    }
}

crate::impl_err_response! {
    AddPatientResponse,
    MakeAppointmentResponse,
}
