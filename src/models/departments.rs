use crate::schema::department;

#[derive(Queryable, Insertable)]
#[table_name = "department"]
pub struct DepartData {
    pub dept_id: i32,
    pub name: String,
}
