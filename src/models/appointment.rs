// Appointment model
// A booked class occupying one grid cell (resource column x time slot)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppointmentError {
    #[error("appointment title cannot be empty")]
    EmptyTitle,
    #[error("appointment must span at least one slot")]
    ZeroDuration,
}

/// Display tag shown on the appointment card. Never recomputed by the
/// store; the grid derives real conflicts from live cell occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Confirmed,
    Pending,
    Conflict,
}

impl AppointmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Confirmed => "Confirmada",
            AppointmentStatus::Pending => "Aguardando",
            AppointmentStatus::Conflict => "Conflito",
        }
    }
}

/// A scheduled class session on the day grid.
///
/// `id` is stable across moves; a relocation rewrites only `resource_id`
/// and `start_slot`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub resource_id: usize,
    pub date: NaiveDate,
    /// One of the fixed hourly labels in `schedule::grid::TIME_SLOTS`.
    pub start_slot: String,
    pub duration_slots: u32,
    pub title: String,
    pub participant_name: String,
    pub status: AppointmentStatus,
    /// Hex color for the card accent, e.g. "#13eca4".
    pub color_tag: String,
}

impl Appointment {
    pub fn new(
        id: impl Into<String>,
        resource_id: usize,
        date: NaiveDate,
        start_slot: impl Into<String>,
        title: impl Into<String>,
    ) -> Result<Self, AppointmentError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(AppointmentError::EmptyTitle);
        }

        Ok(Self {
            id: id.into(),
            resource_id,
            date,
            start_slot: start_slot.into(),
            duration_slots: 1,
            title,
            participant_name: String::new(),
            status: AppointmentStatus::Confirmed,
            color_tag: "#13eca4".to_string(),
        })
    }

    pub fn validate(&self) -> Result<(), AppointmentError> {
        if self.title.trim().is_empty() {
            return Err(AppointmentError::EmptyTitle);
        }
        if self.duration_slots == 0 {
            return Err(AppointmentError::ZeroDuration);
        }
        Ok(())
    }

    /// True when this appointment sits in the given cell of the given day.
    pub fn occupies(&self, resource_id: usize, slot: &str, date: NaiveDate) -> bool {
        self.resource_id == resource_id && self.start_slot == slot && self.date == date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 10, 14).unwrap()
    }

    #[test]
    fn test_new_appointment_success() {
        let result = Appointment::new("1", 0, sample_date(), "08:00", "Pilates Clássico");
        assert!(result.is_ok());
        let appointment = result.unwrap();
        assert_eq!(appointment.id, "1");
        assert_eq!(appointment.resource_id, 0);
        assert_eq!(appointment.start_slot, "08:00");
        assert_eq!(appointment.duration_slots, 1);
        assert_eq!(appointment.status, AppointmentStatus::Confirmed);
    }

    #[test]
    fn test_new_appointment_empty_title() {
        let result = Appointment::new("1", 0, sample_date(), "08:00", "   ");
        assert_eq!(result.unwrap_err(), AppointmentError::EmptyTitle);
    }

    #[test]
    fn test_validate_zero_duration() {
        let mut appointment =
            Appointment::new("1", 0, sample_date(), "08:00", "Pilates Clássico").unwrap();
        appointment.duration_slots = 0;
        assert_eq!(
            appointment.validate().unwrap_err(),
            AppointmentError::ZeroDuration
        );
    }

    #[test]
    fn test_occupies_matches_only_exact_cell() {
        let appointment = Appointment::new("1", 2, sample_date(), "09:00", "Cadillac Duo").unwrap();

        assert!(appointment.occupies(2, "09:00", sample_date()));
        assert!(!appointment.occupies(1, "09:00", sample_date()));
        assert!(!appointment.occupies(2, "10:00", sample_date()));
        assert!(!appointment.occupies(
            2,
            "09:00",
            sample_date().succ_opt().unwrap()
        ));
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(AppointmentStatus::Confirmed.label(), "Confirmada");
        assert_eq!(AppointmentStatus::Pending.label(), "Aguardando");
        assert_eq!(AppointmentStatus::Conflict.label(), "Conflito");
    }
}
