use crate::{input::Prompt, models::appointments::AppointmentStatus, utils};
use chrono::NaiveDate;

pub struct AddAppointmentRequest {
    pub adate: NaiveDate,
    pub time_slot: String,
    pub status: AppointmentStatus,
}

impl AddAppointmentRequest {
    pub fn read(input: &mut dyn Prompt) -> anyhow::Result<Self> {
        let adate = input.read_date("Input Appointment Date (YYYY/MM/DD): ")?;
        let time_slot = input.read_line("Input Appointment Time Slot (HH:MM-HH:MM): ")?;
        let time_slot = time_slot.trim().to_string();
        utils::assert_time_slot_str(&time_slot)?;
        let status = input
            .read_line("Input Appointment Status (PA, AC, AV, or WL): ")?
            .parse()?;
        Ok(Self {
            adate,
            time_slot,
            status,
        })
    }
}

pub struct DepartmentAppointmentsRequest {
    pub department: String,
    pub adate: NaiveDate,
}

impl DepartmentAppointmentsRequest {
    pub fn read(input: &mut dyn Prompt) -> anyhow::Result<Self> {
        let department = input.read_line("Input Department Name: ")?;
        let adate = input.read_date("Input Date (YYYY/MM/DD): ")?;
        Ok(Self { department, adate })
    }
}
