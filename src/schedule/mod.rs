//! Scheduling-grid core: the in-memory appointment store, the day-grid
//! geometry, and the drag/drop state machine. This module never touches
//! the database; grid mutations live only for the current session.

pub mod drag;
pub mod grid;
pub mod sample;
pub mod store;
