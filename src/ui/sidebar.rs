//! Navigation sidebar listing the application screens.

use super::app::StudioApp;
use super::state::Screen;

const SIDEBAR_WIDTH: f32 = 170.0;

/// Sidebar entries in display order. StudentProfile is reached from the
/// student list, not from here.
const NAV_SCREENS: [Screen; 6] = [
    Screen::Dashboard,
    Screen::Schedule,
    Screen::Students,
    Screen::Financial,
    Screen::Reports,
    Screen::Communication,
];

impl StudioApp {
    pub(super) fn render_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("sidebar")
            .default_width(SIDEBAR_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.heading("Studio Manager");
                ui.add_space(8.0);
                ui.separator();

                for screen in NAV_SCREENS {
                    let selected = self.screen == screen
                        || (screen == Screen::Students && self.screen == Screen::StudentProfile);
                    if ui.selectable_label(selected, screen.title()).clicked() {
                        self.set_screen(screen);
                    }
                }

                ui.separator();
                ui.add_space(4.0);
                if ui.button("➕ New student").clicked() {
                    self.student_dialog.open_create();
                }

                ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                    ui.add_space(8.0);
                    let dark = self.settings.theme == "dark";
                    let label = if dark { "☀ Light theme" } else { "🌙 Dark theme" };
                    if ui.button(label).clicked() {
                        self.toggle_theme(ctx);
                    }
                });
            });
    }
}
