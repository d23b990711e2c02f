#[macro_use]
extern crate diesel;

pub mod appointment;
pub mod config;
pub mod database;
pub mod doctor;
pub mod input;
pub mod menu;
pub mod models;
pub mod patient;
pub mod protocol;
pub mod schema;
pub mod utils;
