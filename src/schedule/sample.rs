// Seed data for the schedule grid
//
// The grid is a session-local view: its appointments are seeded here on
// startup and on every date navigation, and drag mutations are discarded
// when the date changes. The 09:00 Cadillac double-booking is intentional
// so the conflict rendering has something to show.

use chrono::NaiveDate;

use crate::models::appointment::{Appointment, AppointmentStatus};
use crate::models::resource::Resource;

/// The studio's bookable columns. Static reference data.
pub fn studio_resources() -> Vec<Resource> {
    vec![
        Resource::new(0, "Reformer 1", "Sala A"),
        Resource::new(1, "Reformer 2", "Sala A"),
        Resource::new(2, "Cadillac", "Sala B"),
        Resource::new(3, "Chair / Solo", "Sala B"),
    ]
}

/// Sample appointments for the given day.
pub fn appointments_for(date: NaiveDate) -> Vec<Appointment> {
    let mut seed = |id: &str,
                    resource_id: usize,
                    slot: &str,
                    title: &str,
                    participant: &str,
                    status: AppointmentStatus,
                    color: &str| {
        let mut appointment = Appointment::new(id, resource_id, date, slot, title)
            .expect("sample appointment titles are non-empty");
        appointment.participant_name = participant.to_string();
        appointment.status = status;
        appointment.color_tag = color.to_string();
        appointment
    };

    vec![
        seed(
            "1",
            0,
            "08:00",
            "Pilates Clássico",
            "Maria Silva",
            AppointmentStatus::Confirmed,
            "#13eca4",
        ),
        seed(
            "2",
            2,
            "09:00",
            "Cadillac Individual",
            "Lúcia Mendes",
            AppointmentStatus::Conflict,
            "#f87171",
        ),
        seed(
            "3",
            2,
            "09:00",
            "Cadillac Individual",
            "Roberto Farias",
            AppointmentStatus::Conflict,
            "#f87171",
        ),
        seed(
            "4",
            1,
            "10:00",
            "Pilates Funcional",
            "Ana Castro",
            AppointmentStatus::Pending,
            "#f59e0b",
        ),
        seed(
            "5",
            3,
            "14:00",
            "Chair Solo",
            "João Pereira",
            AppointmentStatus::Confirmed,
            "#3b82f6",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::grid::{cell_occupants, slot_index};

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 10, 14).unwrap()
    }

    #[test]
    fn test_resources_are_stable() {
        let resources = studio_resources();
        assert_eq!(resources.len(), 4);
        for (index, resource) in resources.iter().enumerate() {
            assert_eq!(resource.id, index);
        }
    }

    #[test]
    fn test_sample_appointments_land_on_valid_slots() {
        for appointment in appointments_for(sample_date()) {
            assert!(
                slot_index(&appointment.start_slot).is_some(),
                "slot {} is not on the grid axis",
                appointment.start_slot
            );
            assert!(appointment.resource_id < studio_resources().len());
            assert_eq!(appointment.date, sample_date());
        }
    }

    #[test]
    fn test_seed_contains_the_intended_double_booking() {
        let appointments = appointments_for(sample_date());
        let conflicted = cell_occupants(&appointments, 2, "09:00", sample_date());
        assert_eq!(conflicted.len(), 2);
        assert!(conflicted
            .iter()
            .all(|a| a.status == AppointmentStatus::Conflict));
    }
}
