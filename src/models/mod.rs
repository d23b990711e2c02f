pub mod appointments;
pub mod departments;
pub mod doctors;
pub mod has_appointments;
pub mod patients;
