mod requests;
mod responses;

use crate::{
    database::{
        ids::{self, IdTable},
        lookup, Session,
    },
    input::Prompt,
    models::{appointments::AppointmentStatus, patients::NewPatient},
};
use anyhow::Context;
use diesel::prelude::*;

pub use self::{requests::*, responses::*};

crate::menu_funcs! {
    (add_patient, AddPatientResponse),
    (make_appointment, MakeAppointmentResponse),
}

/// Inserts a patient with no appointments and returns its id.
fn create_patient(session: &Session, info: &PatientRequest) -> anyhow::Result<i32> {
    use crate::schema::patient;

    let conn = session.conn()?;
    let allocated = ids::allocate(session, IdTable::Patient)?;
    let data = NewPatient {
        patient_id: allocated,
        name: info.name.clone(),
        gtype: info.gender.clone(),
        age: info.age,
        address: info.address.clone(),
        number_of_appts: 0,
    };
    diesel::insert_into(patient::table)
        .values(data)
        .execute(conn)
        .context("DB error")?;

    let patient_id = ids::assigned(session, IdTable::Patient, allocated)?;
    tracing::info!(patient_id, "patient added");
    Ok(patient_id)
}

fn add_patient_impl(
    session: &Session,
    input: &mut dyn Prompt,
) -> anyhow::Result<AddPatientResponse> {
    let info = PatientRequest::read_new(input)?;
    let conn = session.conn()?;
    let patient_id = conn.transaction(|| create_patient(session, &info))?;

    Ok(AddPatientResponse {
        success: true,
        err: "".to_string(),
        patient_id,
    })
}

/// Books an appointment of a doctor for a patient, creating the patient when
/// no row matches all of name, gender, age and address.
///
/// Everything runs in one transaction. A missing doctor or an appointment
/// that does not belong to the doctor ends the operation without an error,
/// so a patient created on the way is kept.
fn make_appointment_impl(
    session: &Session,
    input: &mut dyn Prompt,
) -> anyhow::Result<MakeAppointmentResponse> {
    use crate::schema::{appointment, patient};

    let info = PatientRequest::read_for_booking(input)?;
    let conn = session.conn()?;
    conn.transaction::<_, anyhow::Error, _>(|| {
        let found = lookup::find_patient(conn, &info.name, &info.gender, info.age, &info.address)?;
        let (patient_id, patient_created) = match found {
            Some(patient_id) => (patient_id, false),
            None => (create_patient(session, &info)?, true),
        };
        let respond = |booking: BookingOutcome| MakeAppointmentResponse {
            success: true,
            err: "".to_string(),
            patient_id,
            patient_created,
            booking: Some(booking),
        };

        let doctor_id = input.read_int("Input Doctor ID: ")?;
        if !lookup::doctor_exists(conn, doctor_id)? {
            return Ok(respond(BookingOutcome::DoctorNotFound { doctor_id }));
        }

        let appnt_id = input.read_int("Input Appointment ID: ")?;
        if !lookup::appointment_of_doctor_exists(conn, appnt_id, doctor_id)? {
            return Ok(respond(BookingOutcome::NotAssociated {
                appnt_id,
                doctor_id,
            }));
        }

        let status = appointment::table
            .find(appnt_id)
            .select(appointment::status)
            .first::<String>(conn)
            .context("DB error")?
            .parse::<AppointmentStatus>()?;

        let next = match status.after_booking() {
            Some(next) => next,
            None => {
                tracing::debug!(appnt_id, %status, "no transition");
                return Ok(respond(BookingOutcome::Unchanged { appnt_id, status }));
            }
        };

        diesel::update(appointment::table.find(appnt_id))
            .set(appointment::status.eq(next.as_str()))
            .execute(conn)
            .context("DB error")?;
        let number_of_appts = diesel::update(patient::table.find(patient_id))
            .set(patient::number_of_appts.eq(patient::number_of_appts + 1))
            .returning(patient::number_of_appts)
            .get_result::<i32>(conn)
            .context("DB error")?;
        tracing::info!(appnt_id, patient_id, from = %status, to = %next, "appointment booked");

        Ok(respond(BookingOutcome::Booked {
            appnt_id,
            from: status,
            to: next,
            number_of_appts,
        }))
    })
}
