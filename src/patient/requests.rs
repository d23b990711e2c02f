use crate::{input::Prompt, utils};
use anyhow::bail;

/// Identity fields of a patient. Prompt order differs between adding a
/// patient and booking for one.
pub struct PatientRequest {
    pub name: String,
    pub gender: String,
    pub age: i32,
    pub address: String,
}

impl PatientRequest {
    pub fn read_new(input: &mut dyn Prompt) -> anyhow::Result<Self> {
        let name = input.read_line("Input Patient Name: ")?;
        let age = input.read_int("Input Patient Age: ")?;
        let gender = input.read_line("Input Patient Gender (F or M): ")?;
        let address = input.read_line("Input Patient Address: ")?;
        Self::checked(name, gender, age, address)
    }

    pub fn read_for_booking(input: &mut dyn Prompt) -> anyhow::Result<Self> {
        let name = input.read_line("Input Patient Name: ")?;
        let gender = input.read_line("Input Patient Gender (F or M): ")?;
        let age = input.read_int("Input Patient Age: ")?;
        let address = input.read_line("Input Patient Address: ")?;
        Self::checked(name, gender, age, address)
    }

    fn checked(name: String, gender: String, age: i32, address: String) -> anyhow::Result<Self> {
        let gender = gender.trim().to_string();
        utils::assert_gender_str(&gender)?;
        if age < 0 {
            bail!("Age must not be negative, got {}", age);
        }
        Ok(Self {
            name,
            gender,
            age,
            address,
        })
    }
}
