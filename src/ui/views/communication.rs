//! Communication screen: message templates and a compose box. Sending is
//! a mock; the message is only logged.

use egui::RichText;

use crate::ui::app::StudioApp;

/// Canned messages the studio sends most often. Picking one replaces the
/// compose text.
const TEMPLATES: [(&str, &str); 3] = [
    (
        "Payment reminder",
        "Olá! Este é um lembrete de que sua mensalidade vence em breve. \
         Qualquer dúvida, estamos à disposição.",
    ),
    (
        "Class confirmation",
        "Olá! Confirmando sua aula agendada. Até breve!",
    ),
    (
        "Welcome",
        "Seja bem-vindo(a) ao estúdio! Estamos felizes em ter você com a gente.",
    ),
];

impl StudioApp {
    pub(crate) fn render_communication(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Templates").size(15.0).strong());
        ui.add_space(4.0);

        for (index, (title, body)) in TEMPLATES.iter().enumerate() {
            let selected = self.selected_template == Some(index);
            if ui.selectable_label(selected, *title).clicked() {
                self.selected_template = Some(index);
                self.compose_text = (*body).to_string();
            }
        }

        ui.add_space(12.0);
        ui.label(RichText::new("Compose").size(15.0).strong());
        ui.add_space(4.0);

        ui.add(
            egui::TextEdit::multiline(&mut self.compose_text)
                .hint_text("Write a message or pick a template above")
                .desired_rows(5)
                .desired_width(f32::INFINITY),
        );

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let can_send = !self.compose_text.trim().is_empty();
            if ui
                .add_enabled(can_send, egui::Button::new("Send to all students"))
                .clicked()
            {
                // No messaging backend yet; record the intent and clear.
                log::info!(
                    "communication: broadcast message queued ({} chars)",
                    self.compose_text.len()
                );
                self.compose_text.clear();
                self.selected_template = None;
            }
            if ui.button("Clear").clicked() {
                self.compose_text.clear();
                self.selected_template = None;
            }
        });
    }
}
