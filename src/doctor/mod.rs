mod requests;
mod responses;

use crate::{
    appointment::AppointmentItem,
    database::{
        ids::{self, IdTable},
        Session,
    },
    input::Prompt,
    models::{
        appointments::{Appointment, APPOINT_STATUS_ACTIVE, APPOINT_STATUS_AVAILABLE},
        doctors::{DoctorPatientCount, DoctorStatusCount, NewDoctor},
    },
};
use anyhow::Context;
use diesel::{prelude::*, sql_types::Text};

pub use self::{requests::*, responses::*};

crate::menu_funcs! {
    (add_doctor, AddDoctorResponse),
    (list_appointments_of_doctor, ListAppointmentsResponse),
    (list_status_number_of_appointments_per_doctor, StatusCountResponse),
    (find_patients_count_with_status, PatientCountResponse),
}

fn add_doctor_impl(
    session: &Session,
    input: &mut dyn Prompt,
) -> anyhow::Result<AddDoctorResponse> {
    use crate::schema::doctor;

    let info = AddDoctorRequest::read(input)?;
    let conn = session.conn()?;
    let doctor_id = conn.transaction(|| {
        let allocated = ids::allocate(session, IdTable::Doctor)?;
        let data = NewDoctor {
            doctor_id: allocated,
            name: info.name,
            specialty: info.specialty,
            did: info.did,
        };
        // an unknown department is rejected by the foreign key
        diesel::insert_into(doctor::table)
            .values(data)
            .execute(conn)
            .context("DB error")?;

        ids::assigned(session, IdTable::Doctor, allocated)
    })?;
    tracing::info!(doctor_id, "doctor added");

    Ok(AddDoctorResponse {
        success: true,
        err: "".to_string(),
        doctor_id,
    })
}

/// Active and available appointments of a doctor strictly between two dates.
fn list_appointments_of_doctor_impl(
    session: &Session,
    input: &mut dyn Prompt,
) -> anyhow::Result<ListAppointmentsResponse> {
    use crate::schema::{appointment, has_appointment};

    let info = ListAppointmentsRequest::read(input)?;
    let conn = session.conn()?;
    let appointments = appointment::table
        .inner_join(has_appointment::table)
        .filter(has_appointment::doctor_id.eq(info.doctor_id))
        .filter(appointment::adate.gt(info.start_date))
        .filter(appointment::adate.lt(info.end_date))
        .filter(appointment::status.eq_any(vec![APPOINT_STATUS_AVAILABLE, APPOINT_STATUS_ACTIVE]))
        .select((
            appointment::appnt_id,
            appointment::adate,
            appointment::time_slot,
            appointment::status,
        ))
        .order((appointment::adate, appointment::appnt_id))
        .load::<Appointment>(conn)
        .context("DB error")?;

    Ok(ListAppointmentsResponse {
        success: true,
        err: "".to_string(),
        appointments: appointments.iter().map(AppointmentItem::from).collect(),
    })
}

const STATUS_COUNT_QUERY: &str = "\
    SELECT d.doctor_id, d.name, a.status, COUNT(*) AS total \
    FROM doctor d \
    INNER JOIN has_appointment ha ON ha.doctor_id = d.doctor_id \
    INNER JOIN appointment a ON a.appnt_id = ha.appt_id \
    GROUP BY d.doctor_id, d.name, a.status \
    ORDER BY total DESC, d.doctor_id, a.status";

/// Number of appointments of each status per doctor, largest first.
fn list_status_number_of_appointments_per_doctor_impl(
    session: &Session,
    _input: &mut dyn Prompt,
) -> anyhow::Result<StatusCountResponse> {
    let rows = diesel::sql_query(STATUS_COUNT_QUERY)
        .load::<DoctorStatusCount>(session.conn()?)
        .context("DB error")?;

    let counts = rows
        .into_iter()
        .map(|row| StatusCountItem {
            doctor_id: row.doctor_id,
            name: row.name,
            status: row.status.trim().to_string(),
            count: row.total,
        })
        .collect();

    Ok(StatusCountResponse {
        success: true,
        err: "".to_string(),
        counts,
    })
}

// Each booked appointment holds one patient and nothing links a patient to
// an appointment row, so this counts the doctor's appointments in the status.
const PATIENT_COUNT_QUERY: &str = "\
    SELECT d.doctor_id, d.name, COUNT(a.appnt_id) AS total \
    FROM doctor d \
    LEFT JOIN has_appointment ha ON ha.doctor_id = d.doctor_id \
    LEFT JOIN appointment a ON a.appnt_id = ha.appt_id AND a.status = $1 \
    GROUP BY d.doctor_id, d.name \
    ORDER BY total DESC, d.doctor_id";

/// Patients per doctor holding an appointment in the given status.
fn find_patients_count_with_status_impl(
    session: &Session,
    input: &mut dyn Prompt,
) -> anyhow::Result<PatientCountResponse> {
    let info = PatientsCountRequest::read(input)?;
    let rows = diesel::sql_query(PATIENT_COUNT_QUERY)
        .bind::<Text, _>(info.status.as_str())
        .load::<DoctorPatientCount>(session.conn()?)
        .context("DB error")?;

    let counts = rows
        .into_iter()
        .map(|row| PatientCountItem {
            doctor_id: row.doctor_id,
            name: row.name,
            count: row.total,
        })
        .collect();

    Ok(PatientCountResponse {
        success: true,
        err: "".to_string(),
        status: info.status.to_string(),
        counts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        database::{ids::IdStrategy, testing::test_session},
        input::ScriptedInput,
        models::{
            appointments::NewAppointment, departments::DepartData, doctors::DoctorData,
            has_appointments::HasAppointment,
        },
        protocol::{Render, Status},
        schema::{appointment, department, doctor, has_appointment},
    };
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn clear(session: &Session) {
        for table in &["has_appointment", "Appointment", "Doctor", "Department"] {
            session
                .execute_update(&format!("DELETE FROM {}", table))
                .unwrap();
        }
    }

    fn seed_department(session: &Session, dept_id: i32, name: &str) {
        diesel::insert_into(department::table)
            .values(DepartData {
                dept_id,
                name: name.to_string(),
            })
            .execute(session.conn().unwrap())
            .unwrap();
    }

    fn seed_doctor(session: &Session, doctor_id: i32, name: &str, did: i32) {
        diesel::insert_into(doctor::table)
            .values(NewDoctor {
                doctor_id: Some(doctor_id),
                name: name.to_string(),
                specialty: "General".to_string(),
                did,
            })
            .execute(session.conn().unwrap())
            .unwrap();
    }

    fn seed_appointment(session: &Session, appnt_id: i32, adate: NaiveDate, status: &str, doctor_id: i32) {
        let conn = session.conn().unwrap();
        diesel::insert_into(appointment::table)
            .values(NewAppointment {
                appnt_id: Some(appnt_id),
                adate,
                time_slot: "09:00-10:00".to_string(),
                status: status.to_string(),
            })
            .execute(conn)
            .unwrap();
        diesel::insert_into(has_appointment::table)
            .values(HasAppointment {
                appt_id: appnt_id,
                doctor_id,
            })
            .execute(conn)
            .unwrap();
    }

    #[test]
    #[ignore = "needs HOSPITAL_TEST_DATABASE_URL"]
    fn add_doctor_assigns_max_plus_one() {
        let session = test_session(IdStrategy::Max);
        clear(&session);
        seed_department(&session, 2, "Cardiology");

        let mut input = ScriptedInput::new(vec!["Dr. Smith", "2", "Cardiology"]);
        let first = add_doctor_impl(&session, &mut input).unwrap();
        assert_eq!(first.doctor_id, 0);

        let mut input = ScriptedInput::new(vec!["Dr. Jones", "2", "Surgery"]);
        let second = add_doctor_impl(&session, &mut input).unwrap();
        assert_eq!(second.doctor_id, 1);

        let stored = doctor::table
            .find(1)
            .get_result::<DoctorData>(session.conn().unwrap())
            .unwrap();
        assert_eq!(stored.name, "Dr. Jones");
        assert_eq!(stored.specialty, "Surgery");
        assert_eq!(stored.did, 2);
    }

    #[test]
    #[ignore = "needs HOSPITAL_TEST_DATABASE_URL"]
    fn add_doctor_with_sequence_reads_back_currval() {
        let session = test_session(IdStrategy::Sequence);
        clear(&session);
        seed_department(&session, 2, "Cardiology");
        session
            .execute_update("SELECT setval('doctor_doctor_id_seq', 500)")
            .unwrap();

        let mut input = ScriptedInput::new(vec!["Dr. Seq", "2", "Oncology"]);
        let response = add_doctor_impl(&session, &mut input).unwrap();
        assert_eq!(response.doctor_id, 501);
        assert_eq!(session.get_last_sequence_value("doctor_doctor_id_seq").unwrap(), 501);
    }

    #[test]
    #[ignore = "needs HOSPITAL_TEST_DATABASE_URL"]
    fn add_doctor_rejects_bad_department_id_input() {
        let session = test_session(IdStrategy::Max);
        let mut input = ScriptedInput::new(vec!["Dr. Smith", "two", "Cardiology"]);
        let err = add_doctor_impl(&session, &mut input).unwrap_err();
        assert!(err.to_string().contains("two"));
        assert!(AddDoctorResponse::err(format!("{:#}", err)).error_message().contains("two"));
    }

    #[test]
    #[ignore = "needs HOSPITAL_TEST_DATABASE_URL"]
    fn list_appointments_excludes_boundaries_and_other_statuses() {
        let session = test_session(IdStrategy::Max);
        clear(&session);
        seed_department(&session, 1, "Cardiology");
        seed_doctor(&session, 3, "Dr. House", 1);
        seed_doctor(&session, 4, "Dr. Grey", 1);
        seed_appointment(&session, 10, date(2024, 1, 1), "AV", 3);
        seed_appointment(&session, 11, date(2024, 1, 2), "AV", 3);
        seed_appointment(&session, 12, date(2024, 1, 15), "AC", 3);
        seed_appointment(&session, 13, date(2024, 1, 16), "WL", 3);
        seed_appointment(&session, 14, date(2024, 1, 20), "PA", 3);
        seed_appointment(&session, 15, date(2024, 1, 31), "AC", 3);
        seed_appointment(&session, 16, date(2024, 1, 10), "AV", 4);

        let mut input = ScriptedInput::new(vec!["3", "2024/01/01", "2024/01/31"]);
        let response = list_appointments_of_doctor_impl(&session, &mut input).unwrap();
        let ids: Vec<i32> = response.appointments.iter().map(|a| a.appnt_id).collect();
        assert_eq!(ids, vec![11, 12]);
        assert_eq!(response.appointments[0].date, "2024/01/02");
    }

    #[test]
    #[ignore = "needs HOSPITAL_TEST_DATABASE_URL"]
    fn status_counts_are_sorted_descending() {
        let session = test_session(IdStrategy::Max);
        clear(&session);
        seed_department(&session, 1, "Cardiology");
        seed_doctor(&session, 1, "Dr. A", 1);
        seed_doctor(&session, 2, "Dr. B", 1);
        seed_appointment(&session, 1, date(2024, 3, 1), "AV", 1);
        seed_appointment(&session, 2, date(2024, 3, 2), "AC", 2);
        seed_appointment(&session, 3, date(2024, 3, 3), "AC", 2);
        seed_appointment(&session, 4, date(2024, 3, 4), "AC", 2);
        seed_appointment(&session, 5, date(2024, 3, 5), "WL", 1);
        seed_appointment(&session, 6, date(2024, 3, 6), "WL", 1);

        let mut input = ScriptedInput::default();
        let response =
            list_status_number_of_appointments_per_doctor_impl(&session, &mut input).unwrap();
        let rows: Vec<(i32, &str, i64)> = response
            .counts
            .iter()
            .map(|c| (c.doctor_id, c.status.as_str(), c.count))
            .collect();
        assert_eq!(rows, vec![(2, "AC", 3), (1, "WL", 2), (1, "AV", 1)]);
    }

    #[test]
    #[ignore = "needs HOSPITAL_TEST_DATABASE_URL"]
    fn patient_counts_cover_every_doctor() {
        let session = test_session(IdStrategy::Max);
        clear(&session);
        seed_department(&session, 1, "Cardiology");
        seed_doctor(&session, 1, "Dr. A", 1);
        seed_doctor(&session, 2, "Dr. B", 1);
        seed_doctor(&session, 3, "Dr. C", 1);
        seed_appointment(&session, 1, date(2024, 3, 1), "AC", 2);
        seed_appointment(&session, 2, date(2024, 3, 2), "AC", 2);
        seed_appointment(&session, 3, date(2024, 3, 3), "AC", 1);
        seed_appointment(&session, 4, date(2024, 3, 4), "AV", 3);

        let mut input = ScriptedInput::new(vec!["AC"]);
        let response = find_patients_count_with_status_impl(&session, &mut input).unwrap();
        let rows: Vec<(i32, i64)> = response
            .counts
            .iter()
            .map(|c| (c.doctor_id, c.count))
            .collect();
        assert_eq!(rows, vec![(2, 2), (1, 1), (3, 0)]);
        assert_eq!(response.status, "AC");
    }

    #[test]
    fn patient_count_rejects_unknown_status() {
        let mut input = ScriptedInput::new(vec!["XX"]);
        assert!(PatientsCountRequest::read(&mut input).is_err());
    }

    #[test]
    fn status_count_lines() {
        let response = StatusCountResponse {
            success: true,
            err: String::new(),
            counts: vec![StatusCountItem {
                doctor_id: 2,
                name: "Dr. B".to_string(),
                status: "AC".to_string(),
                count: 3,
            }],
        };
        assert_eq!(
            response.lines(),
            vec!["doctor_ID: 2, name: Dr. B, status: AC, count: 3"]
        );
        assert_eq!(
            StatusCountResponse::default().lines(),
            vec!["No appointments found."]
        );
    }
}
