// Appointment domain module
// Contains the appointment entity, its status lifecycle and ratings

#![allow(clippy::module_inception)]

pub mod appointment;
pub mod value_objects;

pub use appointment::Appointment;
pub use value_objects::{AppointmentStatus, Rating};
