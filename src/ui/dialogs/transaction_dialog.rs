//! New-transaction modal. Negative values record expenses.

use chrono::Duration;
use egui::RichText;

use crate::models::transaction::{Transaction, TransactionStatus};
use crate::ui::app::StudioApp;

impl StudioApp {
    pub(crate) fn render_transaction_dialog(&mut self, ctx: &egui::Context) {
        let mut open = true;
        let mut save_clicked = false;
        let mut cancel_clicked = false;

        egui::Window::new("New transaction")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                egui::Grid::new("transaction_form")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Description");
                        ui.text_edit_singleline(&mut self.transaction_dialog.description);
                        ui.end_row();

                        ui.label("Student");
                        ui.add(
                            egui::TextEdit::singleline(
                                &mut self.transaction_dialog.student_name,
                            )
                            .hint_text("optional"),
                        );
                        ui.end_row();

                        ui.label("Value");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.transaction_dialog.value_text)
                                .hint_text("250.00 (negative = expense)"),
                        );
                        ui.end_row();

                        ui.label("Due date");
                        ui.horizontal(|ui| {
                            if ui.small_button("◀").clicked() {
                                if let Some(date) = self.transaction_dialog.due_date {
                                    self.transaction_dialog.due_date =
                                        Some(date - Duration::days(1));
                                }
                            }
                            let label = self
                                .transaction_dialog
                                .due_date
                                .map(|d| d.format("%d/%m/%Y").to_string())
                                .unwrap_or_else(|| "—".to_string());
                            ui.label(label);
                            if ui.small_button("▶").clicked() {
                                if let Some(date) = self.transaction_dialog.due_date {
                                    self.transaction_dialog.due_date =
                                        Some(date + Duration::days(1));
                                }
                            }
                        });
                        ui.end_row();

                        ui.label("Paid");
                        ui.checkbox(&mut self.transaction_dialog.mark_paid, "already settled");
                        ui.end_row();
                    });

                if let Some(error) = &self.transaction_dialog.validation_error {
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
            self.save_transaction_dialog();
        }
        if cancel_clicked || !open {
            self.transaction_dialog.close();
        }
    }

    fn save_transaction_dialog(&mut self) {
        let dialog = &mut self.transaction_dialog;

        if dialog.description.trim().is_empty() {
            dialog.validation_error = Some("Description is required".to_string());
            return;
        }
        let value: f64 = match dialog.value_text.trim().replace(',', ".").parse() {
            Ok(value) => value,
            Err(_) => {
                dialog.validation_error = Some("Value must be a number".to_string());
                return;
            }
        };
        let Some(due_date) = dialog.due_date else {
            dialog.validation_error = Some("Due date is required".to_string());
            return;
        };

        let transaction = Transaction {
            id: None,
            description: dialog.description.trim().to_string(),
            student_name: match dialog.student_name.trim() {
                "" => None,
                name => Some(name.to_string()),
            },
            value,
            due_date,
            status: if dialog.mark_paid {
                TransactionStatus::Paid
            } else {
                TransactionStatus::Pending
            },
        };

        match self.finance_service().create(transaction) {
            Ok(_) => self.transaction_dialog.close(),
            Err(err) => self.report_error(err),
        }
    }
}
