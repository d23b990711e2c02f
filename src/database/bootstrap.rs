// Schema creation and presence checks
use super::Session;

pub const REQUIRED_TABLES: &[&str] = &[
    "department",
    "doctor",
    "patient",
    "appointment",
    "has_appointment",
];

const SCHEMA: &[&str] = &[
    "CREATE SEQUENCE IF NOT EXISTS doctor_doctor_id_seq",
    "CREATE SEQUENCE IF NOT EXISTS patient_patient_id_seq",
    "CREATE SEQUENCE IF NOT EXISTS appointment_appnt_id_seq",
    "CREATE TABLE IF NOT EXISTS Department (
        dept_ID INTEGER NOT NULL,
        name VARCHAR(32) NOT NULL,
        PRIMARY KEY (dept_ID)
    )",
    "CREATE TABLE IF NOT EXISTS Doctor (
        doctor_ID INTEGER NOT NULL DEFAULT nextval('doctor_doctor_id_seq'),
        name VARCHAR(128) NOT NULL,
        specialty VARCHAR(24) NOT NULL,
        did INTEGER NOT NULL,
        PRIMARY KEY (doctor_ID),
        FOREIGN KEY (did) REFERENCES Department (dept_ID)
    )",
    "CREATE TABLE IF NOT EXISTS Patient (
        patient_ID INTEGER NOT NULL DEFAULT nextval('patient_patient_id_seq'),
        name VARCHAR(128) NOT NULL,
        gtype VARCHAR(1) NOT NULL CHECK (gtype IN ('F', 'M')),
        age INTEGER NOT NULL CHECK (age >= 0),
        address VARCHAR(256) NOT NULL,
        number_of_appts INTEGER NOT NULL DEFAULT 0,
        PRIMARY KEY (patient_ID)
    )",
    "CREATE TABLE IF NOT EXISTS Appointment (
        appnt_ID INTEGER NOT NULL DEFAULT nextval('appointment_appnt_id_seq'),
        adate DATE NOT NULL,
        time_slot VARCHAR(11) NOT NULL,
        status VARCHAR(2) NOT NULL CHECK (status IN ('PA', 'AC', 'AV', 'WL')),
        PRIMARY KEY (appnt_ID)
    )",
    "CREATE TABLE IF NOT EXISTS has_appointment (
        appt_id INTEGER NOT NULL,
        doctor_id INTEGER NOT NULL,
        PRIMARY KEY (appt_id, doctor_id),
        FOREIGN KEY (appt_id) REFERENCES Appointment (appnt_ID),
        FOREIGN KEY (doctor_id) REFERENCES Doctor (doctor_ID)
    )",
];

pub fn create_schema(session: &Session) -> anyhow::Result<()> {
    for statement in SCHEMA {
        session.execute_update(statement)?;
    }
    tracing::info!("schema ready");
    Ok(())
}

fn table_query(table: &str) -> String {
    format!(
        "SELECT 1 FROM information_schema.tables \
         WHERE table_schema = current_schema() AND table_name = '{}'",
        table
    )
}

/// Tables from `REQUIRED_TABLES` that do not exist in the current schema.
pub fn missing_tables(session: &Session) -> anyhow::Result<Vec<&'static str>> {
    let mut missing = Vec::new();
    for &table in REQUIRED_TABLES {
        if session.execute_query_count(&table_query(table))? == 0 {
            tracing::warn!(table, "missing table");
            missing.push(table);
        }
    }
    Ok(missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{ids::IdStrategy, testing::test_session};

    #[test]
    fn required_tables_are_lowercase() {
        for table in REQUIRED_TABLES {
            assert_eq!(*table, table.to_lowercase());
        }
        assert!(table_query("doctor").ends_with("table_name = 'doctor'"));
    }

    #[test]
    #[ignore = "needs HOSPITAL_TEST_DATABASE_URL"]
    fn bootstrapped_schema_has_every_table() {
        let session = test_session(IdStrategy::Max);
        create_schema(&session).unwrap();
        assert!(missing_tables(&session).unwrap().is_empty());
    }
}
