// Module exports for models

pub mod appointment;
pub mod resource;
pub mod settings;
pub mod student;
pub mod transaction;
