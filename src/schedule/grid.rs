// Day-grid geometry
// Maps the fixed slot axis and the resource columns to appointments by
// linear scan. Pure lookups; all painting lives in the schedule view.

use chrono::NaiveDate;

use crate::models::appointment::Appointment;

/// Fixed hourly axis of the day grid.
pub const TIME_SLOTS: [&str; 10] = [
    "08:00", "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00",
];

/// Row index of a slot label, or None for labels outside the grid.
pub fn slot_index(label: &str) -> Option<usize> {
    TIME_SLOTS.iter().position(|slot| *slot == label)
}

/// All appointments sitting in the (resource, slot) cell on `date`, in
/// store iteration order. More than one entry means a double-booking.
pub fn cell_occupants<'a>(
    appointments: &'a [Appointment],
    resource_id: usize,
    slot: &str,
    date: NaiveDate,
) -> Vec<&'a Appointment> {
    appointments
        .iter()
        .filter(|a| a.occupies(resource_id, slot, date))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 10, 14).unwrap()
    }

    fn appointment(id: &str, resource_id: usize, slot: &str, date: NaiveDate) -> Appointment {
        Appointment::new(id, resource_id, date, slot, "Pilates Clássico").unwrap()
    }

    #[test_case("08:00", Some(0))]
    #[test_case("12:00", Some(4))]
    #[test_case("17:00", Some(9))]
    #[test_case("18:00", None)]
    #[test_case("8:00", None)]
    fn test_slot_index(label: &str, expected: Option<usize>) {
        assert_eq!(slot_index(label), expected);
    }

    #[test]
    fn test_cell_occupants_matches_exact_triple_only() {
        let date = sample_date();
        let other_day = date.succ_opt().unwrap();
        let appointments = vec![
            appointment("1", 0, "08:00", date),
            appointment("2", 0, "09:00", date),
            appointment("3", 1, "08:00", date),
            appointment("4", 0, "08:00", other_day),
        ];

        let hits = cell_occupants(&appointments, 0, "08:00", date);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");

        // Every appointment appears in exactly one cell of its own day.
        for a in &appointments {
            let own_cell = cell_occupants(&appointments, a.resource_id, &a.start_slot, a.date);
            assert!(own_cell.iter().any(|hit| hit.id == a.id));
        }
    }

    #[test]
    fn test_cell_occupants_reports_double_booking_in_order() {
        let date = sample_date();
        let appointments = vec![
            appointment("2", 2, "09:00", date),
            appointment("3", 2, "09:00", date),
        ];

        let hits = cell_occupants(&appointments, 2, "09:00", date);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, "2");
        assert_eq!(hits[1].id, "3");
    }

    #[test]
    fn test_empty_cell_has_no_occupants() {
        let date = sample_date();
        let appointments = vec![appointment("1", 0, "08:00", date)];
        assert!(cell_occupants(&appointments, 3, "15:00", date).is_empty());
    }
}
