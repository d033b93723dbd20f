// Module exports for services

pub mod database;
pub mod finance;
pub mod settings;
pub mod student;
