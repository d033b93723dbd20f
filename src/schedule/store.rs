// Appointment store
// Holds the appointments visible for the currently selected date.
// One writer (the drag controller), one reader (the grid), same thread.

use crate::models::appointment::Appointment;

/// Result of a relocate call.
///
/// A collision with an existing appointment in the destination cell is not
/// an outcome: relocations stack. The grid derives the conflict badge from
/// live cell occupancy instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelocateOutcome {
    /// Resource and/or slot changed.
    Moved,
    /// Target cell equals the source cell; nothing to do.
    Unchanged,
    /// No appointment with the given id; the store is untouched.
    NotFound,
}

/// In-memory ordered collection of appointments for the visible date.
/// Seeded on load and on date navigation; mutations are session-local.
#[derive(Debug, Default)]
pub struct AppointmentStore {
    appointments: Vec<Appointment>,
}

impl AppointmentStore {
    /// Builds the store from a seed list, dropping records that fail
    /// validation so a bad row cannot reach the grid.
    pub fn new(appointments: Vec<Appointment>) -> Self {
        let appointments = appointments
            .into_iter()
            .filter(|a| match a.validate() {
                Ok(()) => true,
                Err(err) => {
                    log::warn!("dropping invalid appointment {}: {err}", a.id);
                    false
                }
            })
            .collect();
        Self { appointments }
    }

    /// Snapshot of the current list, in insertion order.
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    /// Move the appointment with `id` to a new (resource, slot) cell,
    /// preserving every other field.
    ///
    /// Unknown ids leave the store unchanged and are reported back so a
    /// miswired drop does not get swallowed silently.
    pub fn relocate(
        &mut self,
        id: &str,
        new_resource_id: usize,
        new_slot: &str,
    ) -> RelocateOutcome {
        let Some(appointment) = self.appointments.iter_mut().find(|a| a.id == id) else {
            log::warn!("relocate: no appointment with id {id}");
            return RelocateOutcome::NotFound;
        };

        if appointment.resource_id == new_resource_id && appointment.start_slot == new_slot {
            return RelocateOutcome::Unchanged;
        }

        appointment.resource_id = new_resource_id;
        appointment.start_slot = new_slot.to_string();
        RelocateOutcome::Moved
    }
}
