use crate::schema::has_appointment;

#[derive(Queryable, Insertable)]
#[table_name = "has_appointment"]
pub struct HasAppointment {
    pub appt_id: i32,
    pub doctor_id: i32,
}
