use crate::{input::Prompt, models::appointments::AppointmentStatus};
use chrono::NaiveDate;

pub struct AddDoctorRequest {
    pub name: String,
    pub did: i32,
    pub specialty: String,
}

impl AddDoctorRequest {
    pub fn read(input: &mut dyn Prompt) -> anyhow::Result<Self> {
        let name = input.read_line("Input Doctor Name: ")?;
        let did = input.read_int("Input department ID: ")?;
        let specialty = input.read_line("Input specialty: ")?;
        Ok(Self {
            name,
            did,
            specialty,
        })
    }
}

pub struct ListAppointmentsRequest {
    pub doctor_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl ListAppointmentsRequest {
    pub fn read(input: &mut dyn Prompt) -> anyhow::Result<Self> {
        let doctor_id = input.read_int("Input Doctor ID: ")?;
        let start_date = input.read_date("Input Start Date (YYYY/MM/DD): ")?;
        let end_date = input.read_date("Input End Date (YYYY/MM/DD): ")?;
        Ok(Self {
            doctor_id,
            start_date,
            end_date,
        })
    }
}

pub struct PatientsCountRequest {
    pub status: AppointmentStatus,
}

impl PatientsCountRequest {
    pub fn read(input: &mut dyn Prompt) -> anyhow::Result<Self> {
        let status = input.read_line("Input Appointment Status (PA, AC, AV, or WL): ")?;
        Ok(Self {
            status: status.parse()?,
        })
    }
}
