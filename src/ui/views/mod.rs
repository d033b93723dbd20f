// Screen renderers, one submodule per sidebar entry

mod communication;
mod dashboard;
mod financial;
mod reports;
mod schedule;
mod student_profile;
mod students;

use egui::Color32;

use crate::models::appointment::AppointmentStatus;
use crate::models::student::StudentStatus;
use crate::models::transaction::TransactionStatus;

pub(super) const ACCENT_GREEN: Color32 = Color32::from_rgb(19, 236, 164);
pub(super) const ALERT_RED: Color32 = Color32::from_rgb(248, 113, 113);
pub(super) const WARN_AMBER: Color32 = Color32::from_rgb(245, 158, 11);

pub(super) fn appointment_status_color(status: AppointmentStatus) -> Color32 {
    match status {
        AppointmentStatus::Confirmed => ACCENT_GREEN,
        AppointmentStatus::Pending => WARN_AMBER,
        AppointmentStatus::Conflict => ALERT_RED,
    }
}

pub(super) fn student_status_color(status: StudentStatus) -> Color32 {
    match status {
        StudentStatus::Active => ACCENT_GREEN,
        StudentStatus::Inactive => Color32::GRAY,
        StudentStatus::Pending => WARN_AMBER,
    }
}

pub(super) fn transaction_status_color(status: TransactionStatus) -> Color32 {
    match status {
        TransactionStatus::Paid => ACCENT_GREEN,
        TransactionStatus::Pending => WARN_AMBER,
        TransactionStatus::Overdue => ALERT_RED,
    }
}

/// Currency display, Brazilian style: "R$ 1234,56".
pub(super) fn format_money(value: f64) -> String {
    format!("R$ {:.2}", value).replace('.', ",")
}

/// Parse a "#RRGGBB" tag; falls back to the accent color on bad input.
pub(super) fn parse_color(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return ACCENT_GREEN;
    }
    let channel = |range| u8::from_str_radix(&hex[range], 16).ok();
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => Color32::from_rgb(r, g, b),
        _ => ACCENT_GREEN,
    }
}
