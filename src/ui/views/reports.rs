//! Reports screen. Aggregates are computed from the ledger; the class
//! attendance block is a fixed reference series until attendance is
//! actually tracked.

use egui::{Color32, Pos2, Rect, RichText, Sense, Stroke, Vec2};

use crate::ui::app::StudioApp;

use super::{format_money, ACCENT_GREEN, WARN_AMBER};

const BAR_MAX_WIDTH: f32 = 260.0;
const BAR_HEIGHT: f32 = 16.0;

impl StudioApp {
    pub(crate) fn render_reports(&mut self, ui: &mut egui::Ui) {
        let summary = match self.finance_service().summary() {
            Ok(summary) => summary,
            Err(err) => {
                self.report_error(err);
                return;
            }
        };

        ui.label(RichText::new("Revenue by status").size(15.0).strong());
        ui.add_space(4.0);

        let rows = [
            ("Received", summary.received, ACCENT_GREEN),
            ("Pending", summary.pending, WARN_AMBER),
            ("Overdue", summary.overdue, Color32::from_rgb(248, 113, 113)),
            ("Expenses", summary.expense, Color32::GRAY),
        ];
        let max = rows
            .iter()
            .map(|(_, value, _)| *value)
            .fold(0.0_f64, f64::max);

        for (label, value, color) in rows {
            bar_row(ui, label, value, max, color, &format_money(value));
        }

        ui.add_space(16.0);
        ui.label(RichText::new("Attendance by class type").size(15.0).strong());
        ui.add_space(4.0);

        let attendance = [
            ("Pilates Clássico", 32.0),
            ("Pilates Funcional", 24.0),
            ("Cadillac Individual", 12.0),
            ("Chair Solo", 9.0),
        ];
        let max_attendance = attendance
            .iter()
            .map(|(_, count)| *count)
            .fold(0.0_f64, f64::max);

        for (label, count) in attendance {
            bar_row(
                ui,
                label,
                count,
                max_attendance,
                ACCENT_GREEN,
                &format!("{count:.0} classes"),
            );
        }
    }
}

fn bar_row(ui: &mut egui::Ui, label: &str, value: f64, max: f64, color: Color32, text: &str) {
    ui.horizontal(|ui| {
        ui.allocate_ui_with_layout(
            Vec2::new(140.0, BAR_HEIGHT + 4.0),
            egui::Layout::left_to_right(egui::Align::Center),
            |ui| {
                ui.label(label);
            },
        );

        let fraction = if max > 0.0 { (value / max) as f32 } else { 0.0 };
        let (rect, _) = ui.allocate_exact_size(
            Vec2::new(BAR_MAX_WIDTH, BAR_HEIGHT),
            Sense::hover(),
        );
        ui.painter()
            .rect_stroke(rect, 3.0, Stroke::new(1.0, Color32::from_gray(100)));
        let fill = Rect::from_min_max(
            rect.min,
            Pos2::new(rect.left() + BAR_MAX_WIDTH * fraction, rect.bottom()),
        );
        ui.painter().rect_filled(fill, 3.0, color.linear_multiply(0.8));

        ui.label(RichText::new(text).weak());
    });
}
