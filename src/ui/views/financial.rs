//! Financial screen: totals by status plus the transaction ledger.

use egui::{Color32, RichText};

use crate::ui::app::StudioApp;

use super::{format_money, transaction_status_color, ACCENT_GREEN, ALERT_RED, WARN_AMBER};

impl StudioApp {
    pub(crate) fn render_financial(&mut self, ui: &mut egui::Ui) {
        let summary = match self.finance_service().summary() {
            Ok(summary) => summary,
            Err(err) => {
                self.report_error(err);
                return;
            }
        };

        ui.horizontal(|ui| {
            summary_card(ui, "Received", summary.received, ACCENT_GREEN);
            summary_card(ui, "Pending", summary.pending, WARN_AMBER);
            summary_card(ui, "Overdue", summary.overdue, ALERT_RED);
            summary_card(ui, "Expenses", summary.expense, Color32::GRAY);
        });

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Transactions").size(15.0).strong());
            if ui.button("➕ New transaction").clicked() {
                self.transaction_dialog.open(self.active_date);
            }
        });
        ui.add_space(4.0);

        let transactions = match self.finance_service().list_all() {
            Ok(transactions) => transactions,
            Err(err) => {
                self.report_error(err);
                return;
            }
        };

        if transactions.is_empty() {
            ui.label("No transactions recorded.");
            return;
        }

        let mut to_delete: Option<i64> = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Grid::new("transactions_table")
                    .num_columns(6)
                    .striped(true)
                    .spacing([16.0, 6.0])
                    .show(ui, |ui| {
                        for header in ["Description", "Student", "Due", "Value", "Status", ""] {
                            ui.label(RichText::new(header).strong());
                        }
                        ui.end_row();

                        for transaction in &transactions {
                            ui.label(&transaction.description);
                            ui.label(transaction.student_name.as_deref().unwrap_or("—"));
                            ui.label(transaction.due_date.format("%d/%m/%Y").to_string());
                            let value_color = if transaction.is_income() {
                                ACCENT_GREEN
                            } else {
                                ALERT_RED
                            };
                            ui.colored_label(value_color, format_money(transaction.value));
                            ui.colored_label(
                                transaction_status_color(transaction.status),
                                transaction.status.as_str(),
                            );
                            if ui.small_button("Delete").clicked() {
                                to_delete = transaction.id;
                            }
                            ui.end_row();
                        }
                    });
            });

        if let Some(id) = to_delete {
            if let Err(err) = self.finance_service().delete(id) {
                self.report_error(err);
            }
        }
    }
}

fn summary_card(ui: &mut egui::Ui, label: &str, value: f64, color: Color32) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::symmetric(14.0, 10.0))
        .show(ui, |ui| {
            ui.set_min_width(120.0);
            ui.vertical(|ui| {
                ui.label(RichText::new(label).size(11.0).weak());
                ui.label(RichText::new(format_money(value)).size(18.0).strong().color(color));
            });
        });
}
