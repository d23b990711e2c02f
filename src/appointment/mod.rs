mod requests;
mod responses;

use crate::{
    database::{
        ids::{self, IdTable},
        Session,
    },
    input::Prompt,
    models::appointments::{Appointment, NewAppointment, APPOINT_STATUS_AVAILABLE},
};
use anyhow::Context;
use diesel::prelude::*;

pub use self::{requests::*, responses::*};

crate::menu_funcs! {
    (add_appointment, AddAppointmentResponse),
    (list_available_appointments_of_department, DepartmentAppointmentsResponse),
}

fn add_appointment_impl(
    session: &Session,
    input: &mut dyn Prompt,
) -> anyhow::Result<AddAppointmentResponse> {
    use crate::schema::appointment;

    let info = AddAppointmentRequest::read(input)?;
    let conn = session.conn()?;
    let appnt_id = conn.transaction(|| {
        let allocated = ids::allocate(session, IdTable::Appointment)?;
        let data = NewAppointment {
            appnt_id: allocated,
            adate: info.adate,
            time_slot: info.time_slot,
            status: info.status.as_str().to_string(),
        };
        diesel::insert_into(appointment::table)
            .values(data)
            .execute(conn)
            .context("DB error")?;

        ids::assigned(session, IdTable::Appointment, allocated)
    })?;
    tracing::info!(appnt_id, "appointment added");

    Ok(AddAppointmentResponse {
        success: true,
        err: "".to_string(),
        appnt_id,
    })
}

/// Available appointments on one date across the doctors of a department.
fn list_available_appointments_of_department_impl(
    session: &Session,
    input: &mut dyn Prompt,
) -> anyhow::Result<DepartmentAppointmentsResponse> {
    use crate::schema::{appointment, department, doctor, has_appointment};

    let info = DepartmentAppointmentsRequest::read(input)?;
    let conn = session.conn()?;
    let appointments = appointment::table
        .inner_join(has_appointment::table.inner_join(doctor::table.inner_join(department::table)))
        .filter(appointment::adate.eq(info.adate))
        .filter(department::name.eq(&info.department))
        .filter(appointment::status.eq(APPOINT_STATUS_AVAILABLE))
        .select((
            appointment::appnt_id,
            appointment::adate,
            appointment::time_slot,
            appointment::status,
        ))
        .order(appointment::appnt_id)
        .load::<Appointment>(conn)
        .context("DB error")?;

    Ok(DepartmentAppointmentsResponse {
        success: true,
        err: "".to_string(),
        appointments: appointments.iter().map(AppointmentItem::from).collect(),
    })
}
