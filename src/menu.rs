use crate::{
    appointment, database::Session, doctor, input::Prompt, patient, protocol::Output,
};
use anyhow::Context;
use std::io;

pub const MENU: &str = "\
MAIN MENU
---------
1. Add Doctor
2. Add Patient
3. Add Appointment
4. Make an Appointment
5. List appointments of a given doctor
6. List all available appointments of a given department
7. List total number of different types of appointments per doctor in descending order
8. Find total number of patients per doctor with a given status
9. < EXIT";

pub type Operation = fn(&Session, &mut dyn Prompt, &Output);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    AddDoctor,
    AddPatient,
    AddAppointment,
    MakeAppointment,
    ListAppointmentsOfDoctor,
    ListAvailableAppointmentsOfDepartment,
    ListStatusNumberOfAppointmentsPerDoctor,
    FindPatientsCountWithStatus,
    Exit,
}

impl MenuChoice {
    pub fn from_number(n: i32) -> Option<Self> {
        let choice = match n {
            1 => MenuChoice::AddDoctor,
            2 => MenuChoice::AddPatient,
            3 => MenuChoice::AddAppointment,
            4 => MenuChoice::MakeAppointment,
            5 => MenuChoice::ListAppointmentsOfDoctor,
            6 => MenuChoice::ListAvailableAppointmentsOfDepartment,
            7 => MenuChoice::ListStatusNumberOfAppointmentsPerDoctor,
            8 => MenuChoice::FindPatientsCountWithStatus,
            9 => MenuChoice::Exit,
            _ => return None,
        };
        Some(choice)
    }

    /// `None` for `Exit`.
    pub fn operation(self) -> Option<Operation> {
        let op: Operation = match self {
            MenuChoice::AddDoctor => doctor::add_doctor,
            MenuChoice::AddPatient => patient::add_patient,
            MenuChoice::AddAppointment => appointment::add_appointment,
            MenuChoice::MakeAppointment => patient::make_appointment,
            MenuChoice::ListAppointmentsOfDoctor => doctor::list_appointments_of_doctor,
            MenuChoice::ListAvailableAppointmentsOfDepartment => {
                appointment::list_available_appointments_of_department
            }
            MenuChoice::ListStatusNumberOfAppointmentsPerDoctor => {
                doctor::list_status_number_of_appointments_per_doctor
            }
            MenuChoice::FindPatientsCountWithStatus => doctor::find_patients_count_with_status,
            MenuChoice::Exit => return None,
        };
        Some(op)
    }
}

/// Asks until a line parses as an integer. `None` at end of input.
pub fn read_choice(input: &mut dyn Prompt) -> io::Result<Option<i32>> {
    loop {
        match input.ask("Please make your choice: ")? {
            None => return Ok(None),
            Some(line) => match line.trim().parse::<i32>() {
                Ok(choice) => return Ok(Some(choice)),
                Err(_) => println!("Your input is invalid!"),
            },
        }
    }
}

pub fn run(session: &Session, input: &mut dyn Prompt, output: &Output) -> anyhow::Result<()> {
    loop {
        println!("{}", MENU);
        let choice = match read_choice(input).context("Input error")? {
            Some(choice) => choice,
            None => {
                tracing::info!("end of input, leaving menu");
                break;
            }
        };

        match MenuChoice::from_number(choice) {
            Some(MenuChoice::Exit) => break,
            Some(choice) => {
                if let Some(op) = choice.operation() {
                    op(session, input, output);
                }
            }
            None => tracing::debug!(choice, "unknown menu choice"),
        }
    }

    Ok(())
}
