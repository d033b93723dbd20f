//! Create/edit student modal.

use chrono::NaiveDate;
use egui::RichText;

use crate::models::student::{Student, StudentStatus};
use crate::ui::app::StudioApp;

impl StudioApp {
    pub(crate) fn render_student_dialog(&mut self, ctx: &egui::Context) {
        let mut open = true;
        let mut save_clicked = false;
        let mut cancel_clicked = false;

        let title = if self.student_dialog.editing_id.is_some() {
            "Edit student"
        } else {
            "New student"
        };

        egui::Window::new(title)
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                egui::Grid::new("student_form")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Name");
                        ui.text_edit_singleline(&mut self.student_dialog.name);
                        ui.end_row();

                        ui.label("Email");
                        ui.text_edit_singleline(&mut self.student_dialog.email);
                        ui.end_row();

                        ui.label("Phone");
                        ui.text_edit_singleline(&mut self.student_dialog.phone);
                        ui.end_row();

                        ui.label("Plan");
                        ui.text_edit_singleline(&mut self.student_dialog.plan);
                        ui.end_row();

                        ui.label("Status");
                        egui::ComboBox::from_id_source("student_status")
                            .selected_text(self.student_dialog.status.as_str())
                            .show_ui(ui, |ui| {
                                for status in [
                                    StudentStatus::Active,
                                    StudentStatus::Pending,
                                    StudentStatus::Inactive,
                                ] {
                                    ui.selectable_value(
                                        &mut self.student_dialog.status,
                                        status,
                                        status.as_str(),
                                    );
                                }
                            });
                        ui.end_row();

                        ui.label("Next payment");
                        ui.add(
                            egui::TextEdit::singleline(
                                &mut self.student_dialog.next_payment_text,
                            )
                            .hint_text("YYYY-MM-DD"),
                        );
                        ui.end_row();
                    });

                if let Some(error) = &self.student_dialog.validation_error {
                    ui.add_space(4.0);
                    ui.colored_label(
                        egui::Color32::from_rgb(220, 80, 80),
                        RichText::new(error).size(11.0),
                    );
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        save_clicked = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel_clicked = true;
                    }
                });
            });

        if save_clicked {
            self.save_student_dialog();
        }
        if cancel_clicked || !open {
            self.student_dialog.close();
        }
    }

    fn save_student_dialog(&mut self) {
        let dialog = &mut self.student_dialog;

        if dialog.name.trim().is_empty() {
            dialog.validation_error = Some("Name is required".to_string());
            return;
        }

        let next_payment = match dialog.next_payment_text.trim() {
            "" => None,
            text => match NaiveDate::parse_from_str(text, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    dialog.validation_error =
                        Some("Next payment must be YYYY-MM-DD".to_string());
                    return;
                }
            },
        };

        let student = Student {
            id: dialog.editing_id,
            name: dialog.name.trim().to_string(),
            email: dialog.email.trim().to_string(),
            phone: dialog.phone.trim().to_string(),
            plan: dialog.plan.trim().to_string(),
            status: dialog.status,
            next_payment,
        };

        let result = if student.id.is_some() {
            self.student_service().update(&student)
        } else {
            self.student_service().create(student).map(|_| ())
        };

        match result {
            Ok(()) => self.student_dialog.close(),
            Err(err) => self.report_error(err),
        }
    }
}
