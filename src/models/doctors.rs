use crate::schema::doctor;
use diesel::sql_types::{BigInt, Integer, Text};

#[derive(Queryable)]
pub struct DoctorData {
    pub doctor_id: i32,
    pub name: String,
    pub specialty: String,
    pub did: i32,
}

/// `doctor_id` is `None` when the id comes from the column default.
#[derive(Insertable)]
#[table_name = "doctor"]
pub struct NewDoctor {
    pub doctor_id: Option<i32>,
    pub name: String,
    pub specialty: String,
    pub did: i32,
}

#[derive(QueryableByName)]
pub struct DoctorStatusCount {
    #[sql_type = "Integer"]
    pub doctor_id: i32,
    #[sql_type = "Text"]
    pub name: String,
    #[sql_type = "Text"]
    pub status: String,
    #[sql_type = "BigInt"]
    pub total: i64,
}

#[derive(QueryableByName)]
pub struct DoctorPatientCount {
    #[sql_type = "Integer"]
    pub doctor_id: i32,
    #[sql_type = "Text"]
    pub name: String,
    #[sql_type = "BigInt"]
    pub total: i64,
}
