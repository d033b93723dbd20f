//! Detail screen for a single student.

use egui::RichText;

use crate::ui::app::StudioApp;
use crate::ui::state::Screen;

use super::student_status_color;

impl StudioApp {
    pub(crate) fn render_student_profile(&mut self, ui: &mut egui::Ui) {
        if ui.button("← Back to students").clicked() {
            self.set_screen(Screen::Students);
            return;
        }
        ui.add_space(8.0);

        let Some(id) = self.selected_student else {
            ui.label("No student selected.");
            return;
        };

        let student = match self.student_service().get(id) {
            Ok(Some(student)) => student,
            Ok(None) => {
                ui.label("This student no longer exists.");
                self.selected_student = None;
                return;
            }
            Err(err) => {
                self.report_error(err);
                return;
            }
        };

        ui.horizontal(|ui| {
            ui.label(RichText::new(&student.name).size(20.0).strong());
            ui.colored_label(
                student_status_color(student.status),
                student.status.as_str(),
            );
        });
        ui.add_space(6.0);

        egui::Grid::new("student_profile_fields")
            .num_columns(2)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                ui.label(RichText::new("Email").weak());
                ui.label(&student.email);
                ui.end_row();

                ui.label(RichText::new("Phone").weak());
                ui.label(&student.phone);
                ui.end_row();

                ui.label(RichText::new("Plan").weak());
                ui.label(&student.plan);
                ui.end_row();

                ui.label(RichText::new("Next payment").weak());
                ui.label(
                    student
                        .next_payment
                        .map(|d| d.format("%d/%m/%Y").to_string())
                        .unwrap_or_else(|| "—".to_string()),
                );
                ui.end_row();
            });

        ui.add_space(12.0);
        if ui.button("Edit").clicked() {
            self.student_dialog.open_edit(&student);
        }
    }
}
