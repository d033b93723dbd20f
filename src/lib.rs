// Studio Manager Library
// Exports all modules for testing and reuse

pub mod models;
pub mod schedule;
pub mod services;
pub mod ui;
