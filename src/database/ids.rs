//! Id assignment for the three tables the menu inserts into.
//!
//! `Max` reads `MAX(id)` and adds one on the client. Two sessions doing this
//! at the same time can compute the same id; the primary key makes the later
//! insert fail. `Sequence` leaves the id to the column default and reads it
//! back with `currval`.

use anyhow::{bail, Context};
use clap::ValueEnum;
use std::convert::TryFrom;

use super::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum IdStrategy {
    Max,
    Sequence,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdTable {
    Doctor,
    Patient,
    Appointment,
}

impl IdTable {
    pub fn table_name(self) -> &'static str {
        match self {
            IdTable::Doctor => "Doctor",
            IdTable::Patient => "Patient",
            IdTable::Appointment => "Appointment",
        }
    }

    pub fn id_column(self) -> &'static str {
        match self {
            IdTable::Doctor => "doctor_id",
            IdTable::Patient => "patient_id",
            IdTable::Appointment => "appnt_id",
        }
    }

    /// Name PostgreSQL gives a serial column's sequence.
    pub fn sequence_name(self) -> String {
        format!(
            "{}_{}_seq",
            self.table_name().to_lowercase(),
            self.id_column()
        )
    }

    fn max_query(self) -> String {
        format!(
            "SELECT MAX(t.{}) FROM {} t",
            self.id_column(),
            self.table_name()
        )
    }
}

/// Next id given the current maximum: `max + 1`, but never below zero.
pub fn next_id_from_max(max: Option<i32>) -> anyhow::Result<i32> {
    let id = match max.unwrap_or(-1).checked_add(1) {
        Some(id) => id,
        None => bail!("Id space exhausted: maximum id is already {}", i32::MAX),
    };
    Ok(id.max(0))
}

/// Id to insert with, or `None` when the column default assigns it.
pub fn allocate(session: &Session, table: IdTable) -> anyhow::Result<Option<i32>> {
    match session.id_strategy() {
        IdStrategy::Max => {
            let rows = session.execute_query_rows(&table.max_query())?;
            let max = match rows.first().and_then(|row| row.first()) {
                Some(cell) if !cell.is_empty() => Some(
                    cell.parse::<i32>()
                        .with_context(|| format!("Invalid maximum id '{}' in {}", cell, table.table_name()))?,
                ),
                _ => None,
            };
            let id = next_id_from_max(max)
                .with_context(|| format!("Cannot allocate an id in {}", table.table_name()))?;
            tracing::debug!(table = table.table_name(), ?max, id, "allocated id");
            Ok(Some(id))
        }
        IdStrategy::Sequence => Ok(None),
    }
}

/// Final id of the row just inserted with the result of `allocate`.
pub fn assigned(session: &Session, table: IdTable, allocated: Option<i32>) -> anyhow::Result<i32> {
    if let Some(id) = allocated {
        return Ok(id);
    }

    let value = session.get_last_sequence_value(&table.sequence_name())?;
    if value < 0 {
        bail!("Sequence {} has no value", table.sequence_name());
    }
    i32::try_from(value).with_context(|| format!("Sequence value {} out of range", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_starts_at_zero() {
        assert_eq!(next_id_from_max(None).unwrap(), 0);
    }

    #[test]
    fn next_id_is_max_plus_one() {
        assert_eq!(next_id_from_max(Some(0)).unwrap(), 1);
        assert_eq!(next_id_from_max(Some(41)).unwrap(), 42);
        assert_eq!(next_id_from_max(Some(i32::MAX - 1)).unwrap(), i32::MAX);
    }

    #[test]
    fn negative_max_clamps_to_zero() {
        assert_eq!(next_id_from_max(Some(-1)).unwrap(), 0);
        assert_eq!(next_id_from_max(Some(-20)).unwrap(), 0);
        assert_eq!(next_id_from_max(Some(i32::MIN)).unwrap(), 0);
    }

    #[test]
    fn overflow_past_i32_max_is_an_error() {
        let err = next_id_from_max(Some(i32::MAX)).unwrap_err();
        assert!(err.to_string().contains("exhausted"));
    }

    #[test]
    fn sequence_names_follow_serial_convention() {
        assert_eq!(IdTable::Doctor.sequence_name(), "doctor_doctor_id_seq");
        assert_eq!(IdTable::Appointment.sequence_name(), "appointment_appnt_id_seq");
        assert_eq!(
            IdTable::Patient.max_query(),
            "SELECT MAX(t.patient_id) FROM Patient t"
        );
    }

    #[test]
    #[ignore = "needs HOSPITAL_TEST_DATABASE_URL"]
    fn max_strategy_reads_current_maximum() {
        let session = crate::database::testing::test_session(IdStrategy::Max);
        session.execute_update("DELETE FROM has_appointment").unwrap();
        session.execute_update("DELETE FROM Appointment").unwrap();
        assert_eq!(allocate(&session, IdTable::Appointment).unwrap(), Some(0));

        session
            .execute_update(
                "INSERT INTO Appointment (appnt_ID, adate, time_slot, status) \
                 VALUES (9, '2024-01-02', '09:00-10:00', 'AV')",
            )
            .unwrap();
        assert_eq!(allocate(&session, IdTable::Appointment).unwrap(), Some(10));
        assert_eq!(assigned(&session, IdTable::Appointment, Some(10)).unwrap(), 10);
    }
}
