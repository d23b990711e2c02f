use crate::schema::patient;

#[derive(Queryable)]
pub struct PatientData {
    pub patient_id: i32,
    pub name: String,
    pub gtype: String,
    pub age: i32,
    pub address: String,
    pub number_of_appts: i32,
}

#[derive(Insertable)]
#[table_name = "patient"]
pub struct NewPatient {
    pub patient_id: Option<i32>,
    pub name: String,
    pub gtype: String,
    pub age: i32,
    pub address: String,
    pub number_of_appts: i32,
}

pub const GENDER_FEMALE: &str = "F";
pub const GENDER_MALE: &str = "M";
