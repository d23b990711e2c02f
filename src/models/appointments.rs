use crate::schema::appointment;
use anyhow::bail;
use chrono::NaiveDate;
use serde::Serialize;
use std::{fmt, str::FromStr};

#[derive(Queryable)]
pub struct Appointment {
    pub appnt_id: i32,
    pub adate: NaiveDate,
    pub time_slot: String,
    pub status: String,
}

#[derive(Insertable)]
#[table_name = "appointment"]
pub struct NewAppointment {
    pub appnt_id: Option<i32>,
    pub adate: NaiveDate,
    pub time_slot: String,
    pub status: String,
}

pub const APPOINT_STATUS_PENDING: &str = "PA";
pub const APPOINT_STATUS_ACTIVE: &str = "AC";
pub const APPOINT_STATUS_AVAILABLE: &str = "AV";
pub const APPOINT_STATUS_WAITLISTED: &str = "WL";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AppointmentStatus {
    #[serde(rename = "PA")]
    Pending,
    #[serde(rename = "AC")]
    Active,
    #[serde(rename = "AV")]
    Available,
    #[serde(rename = "WL")]
    Waitlisted,
}

impl AppointmentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentStatus::Pending => APPOINT_STATUS_PENDING,
            AppointmentStatus::Active => APPOINT_STATUS_ACTIVE,
            AppointmentStatus::Available => APPOINT_STATUS_AVAILABLE,
            AppointmentStatus::Waitlisted => APPOINT_STATUS_WAITLISTED,
        }
    }

    /// Status after a patient books this appointment. Only `AV` and `AC` move;
    /// `PA` and `WL` have no outgoing transition.
    pub fn after_booking(self) -> Option<AppointmentStatus> {
        match self {
            AppointmentStatus::Available => Some(AppointmentStatus::Active),
            AppointmentStatus::Active => Some(AppointmentStatus::Waitlisted),
            AppointmentStatus::Pending | AppointmentStatus::Waitlisted => None,
        }
    }
}

impl FromStr for AppointmentStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        // CHAR columns come back space padded
        match s.trim() {
            APPOINT_STATUS_PENDING => Ok(AppointmentStatus::Pending),
            APPOINT_STATUS_ACTIVE => Ok(AppointmentStatus::Active),
            APPOINT_STATUS_AVAILABLE => Ok(AppointmentStatus::Available),
            APPOINT_STATUS_WAITLISTED => Ok(AppointmentStatus::Waitlisted),
            other => bail!("Unknown appointment status '{}' (expected PA, AC, AV or WL)", other),
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
