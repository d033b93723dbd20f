//! Student list: search, table, and row actions (profile, edit, delete).

use egui::RichText;

use crate::models::student::Student;
use crate::ui::app::StudioApp;
use crate::ui::state::Screen;

use super::student_status_color;

impl StudioApp {
    pub(crate) fn render_students(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Search:");
            ui.add(
                egui::TextEdit::singleline(&mut self.student_search)
                    .hint_text("name or email")
                    .desired_width(240.0),
            );
            if !self.student_search.is_empty() && ui.small_button("✖").clicked() {
                self.student_search.clear();
            }
            if ui.button("➕ New student").clicked() {
                self.student_dialog.open_create();
            }
        });
        ui.add_space(8.0);

        let students = {
            let service = self.student_service();
            let result = if self.student_search.trim().is_empty() {
                service.list_all()
            } else {
                service.search(self.student_search.trim())
            };
            match result {
                Ok(students) => students,
                Err(err) => {
                    self.report_error(err);
                    return;
                }
            }
        };

        if students.is_empty() {
            ui.label("No students found.");
            return;
        }

        let mut to_open: Option<i64> = None;
        let mut to_edit: Option<Student> = None;
        let mut to_delete: Option<i64> = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Grid::new("students_table")
                    .num_columns(6)
                    .striped(true)
                    .spacing([16.0, 6.0])
                    .show(ui, |ui| {
                        for header in ["Name", "Plan", "Status", "Next payment", "", ""] {
                            ui.label(RichText::new(header).strong());
                        }
                        ui.end_row();

                        for student in &students {
                            if ui.link(&student.name).clicked() {
                                to_open = student.id;
                            }
                            ui.label(&student.plan);
                            ui.colored_label(
                                student_status_color(student.status),
                                student.status.as_str(),
                            );
                            ui.label(
                                student
                                    .next_payment
                                    .map(|d| d.format("%d/%m/%Y").to_string())
                                    .unwrap_or_else(|| "—".to_string()),
                            );
                            if ui.small_button("Edit").clicked() {
                                to_edit = Some(student.clone());
                            }
                            if ui.small_button("Delete").clicked() {
                                to_delete = student.id;
                            }
                            ui.end_row();
                        }
                    });
            });

        if let Some(id) = to_open {
            self.selected_student = Some(id);
            self.set_screen(Screen::StudentProfile);
        }
        if let Some(student) = to_edit {
            self.student_dialog.open_edit(&student);
        }
        if let Some(id) = to_delete {
            if let Err(err) = self.student_service().delete(id) {
                self.report_error(err);
            }
            if self.selected_student == Some(id) {
                self.selected_student = None;
            }
        }
    }
}
