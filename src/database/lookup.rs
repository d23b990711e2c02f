use anyhow::Context;
use diesel::{pg::PgConnection, prelude::*};

pub fn doctor_exists(conn: &PgConnection, doctor_id: i32) -> anyhow::Result<bool> {
    use crate::schema::doctor;

    let res = doctor::table
        .filter(doctor::doctor_id.eq(doctor_id))
        .count()
        .get_result::<i64>(conn)
        .context("DB error")?;

    Ok(res > 0)
}

pub fn appointment_of_doctor_exists(
    conn: &PgConnection,
    appnt_id: i32,
    doctor_id: i32,
) -> anyhow::Result<bool> {
    use crate::schema::has_appointment;

    let res = has_appointment::table
        .filter(has_appointment::appt_id.eq(appnt_id))
        .filter(has_appointment::doctor_id.eq(doctor_id))
        .count()
        .get_result::<i64>(conn)
        .context("DB error")?;

    Ok(res > 0)
}

/// Id of the patient matching every field exactly, if there is one.
pub fn find_patient(
    conn: &PgConnection,
    name: &str,
    gender: &str,
    age: i32,
    address: &str,
) -> anyhow::Result<Option<i32>> {
    use crate::schema::patient;

    patient::table
        .filter(patient::name.eq(name))
        .filter(patient::gtype.eq(gender))
        .filter(patient::age.eq(age))
        .filter(patient::address.eq(address))
        .select(patient::patient_id)
        .order(patient::patient_id)
        .first::<i32>(conn)
        .optional()
        .context("DB error")
}
