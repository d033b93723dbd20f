//! Day schedule grid: resource columns crossed with the fixed hourly slot
//! axis, with drag/drop relocation of appointment cards. Week and Month
//! are explicit placeholder states.

use egui::{Color32, CursorIcon, Pos2, Rect, RichText, Sense, Stroke, Vec2};

use crate::models::appointment::Appointment;
use crate::schedule::drag::{DragContext, DragManager};
use crate::schedule::grid::{cell_occupants, TIME_SLOTS};
use crate::schedule::store::RelocateOutcome;
use crate::ui::app::StudioApp;
use crate::ui::state::ScheduleViewMode;

use super::{appointment_status_color, parse_color, ALERT_RED};

const TIME_COL_WIDTH: f32 = 70.0;
const ROW_HEIGHT: f32 = 64.0;
const HEADER_HEIGHT: f32 = 44.0;

/// A drop that still has to be applied to the store once painting is done.
struct PendingDrop {
    appointment_id: String,
    resource_id: usize,
    slot: String,
}

impl StudioApp {
    /// Esc cancels an active drag with no mutation.
    pub(crate) fn handle_drag_cancel_shortcut(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) && DragManager::is_active(ctx) {
            DragManager::cancel(ctx);
        }
    }

    pub(crate) fn render_schedule(&mut self, ui: &mut egui::Ui) {
        self.render_schedule_toolbar(ui);
        ui.add_space(8.0);

        match self.schedule_view {
            ScheduleViewMode::Day => self.render_day_grid(ui),
            ScheduleViewMode::Week | ScheduleViewMode::Month => {
                self.render_unimplemented_view(ui)
            }
        }
    }

    fn render_schedule_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for mode in [
                ScheduleViewMode::Day,
                ScheduleViewMode::Week,
                ScheduleViewMode::Month,
            ] {
                if ui
                    .selectable_label(self.schedule_view == mode, mode.label())
                    .clicked()
                {
                    self.set_schedule_view(mode);
                }
            }

            ui.separator();

            if ui.button("◀").on_hover_text("Previous").clicked() {
                self.navigate_previous();
            }
            if ui.button("Today").clicked() {
                self.jump_to_today();
            }
            if ui.button("▶").on_hover_text("Next").clicked() {
                self.navigate_next();
            }

            ui.separator();
            ui.label(
                RichText::new(self.active_date.format("%d %b, %Y").to_string()).strong(),
            );
        });
    }

    /// Placeholder for the not-yet-implemented view modes. Its controls
    /// come from `placeholder_controls`, which pins them to a single
    /// recovery action.
    fn render_unimplemented_view(&mut self, ui: &mut egui::Ui) {
        ui.add_space(40.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!(
                    "{} view is not implemented yet.",
                    self.schedule_view.label()
                ))
                .size(16.0),
            );
            ui.add_space(8.0);
            for (label, target) in placeholder_controls() {
                if ui.button(label).clicked() {
                    self.set_schedule_view(target);
                }
            }
        });
    }

    fn render_day_grid(&mut self, ui: &mut egui::Ui) {
        // Snapshot for painting; the store is only mutated after the whole
        // grid has been laid out.
        let appointments: Vec<Appointment> = self.store.appointments().to_vec();
        let resources = self.resources.clone();
        let active_date = self.active_date;

        let col_width =
            ((ui.available_width() - TIME_COL_WIDTH) / resources.len() as f32).max(90.0);

        let mut pending_drop: Option<PendingDrop> = None;

        // Resource header row
        ui.horizontal(|ui| {
            ui.allocate_exact_size(Vec2::new(TIME_COL_WIDTH, HEADER_HEIGHT), Sense::hover());
            for resource in &resources {
                let (rect, _) =
                    ui.allocate_exact_size(Vec2::new(col_width, HEADER_HEIGHT), Sense::hover());
                ui.painter().text(
                    Pos2::new(rect.center().x, rect.top() + 14.0),
                    egui::Align2::CENTER_CENTER,
                    &resource.name,
                    egui::FontId::proportional(14.0),
                    ui.visuals().strong_text_color(),
                );
                ui.painter().text(
                    Pos2::new(rect.center().x, rect.top() + 32.0),
                    egui::Align2::CENTER_CENTER,
                    resource.sub_label.to_uppercase(),
                    egui::FontId::proportional(10.0),
                    ui.visuals().weak_text_color(),
                );
            }
        });
        ui.separator();

        let mut cells_rect = Rect::NOTHING;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for slot in TIME_SLOTS {
                    ui.horizontal(|ui| {
                        // Time label column
                        ui.allocate_ui_with_layout(
                            Vec2::new(TIME_COL_WIDTH, ROW_HEIGHT),
                            egui::Layout::right_to_left(egui::Align::TOP),
                            |ui| {
                                ui.add_space(8.0);
                                ui.label(
                                    RichText::new(slot).size(11.0).color(Color32::GRAY),
                                );
                            },
                        );

                        for resource in &resources {
                            let (cell_rect, dropped) = render_grid_cell(
                                ui,
                                &appointments,
                                resource.id,
                                slot,
                                active_date,
                                col_width,
                            );
                            if let Some(dropped) = dropped {
                                pending_drop = Some(dropped);
                            }
                            // Only actual cells are drop targets; the
                            // time-label gutter stays out of this union.
                            cells_rect = cells_rect.union(cell_rect);
                        }
                    });
                }
            });

        // A release outside any cell cancels rather than drops. drag_stopped
        // still fires on the origin cell in that case, so the pending drop
        // has to be discarded here, not just any leftover drag state.
        let released_outside = ui.input(|i| {
            i.pointer.any_released() && released_outside_cells(i.pointer.latest_pos(), cells_rect)
        });
        if released_outside {
            if pending_drop.take().is_some() {
                log::debug!("drag released outside the grid, relocation cancelled");
            }
            if DragManager::is_active(ui.ctx()) {
                DragManager::cancel(ui.ctx());
            }
        }

        if let Some(dropped) = pending_drop {
            match self
                .store
                .relocate(&dropped.appointment_id, dropped.resource_id, &dropped.slot)
            {
                RelocateOutcome::Moved => log::debug!(
                    "moved appointment {} to ({}, {})",
                    dropped.appointment_id,
                    dropped.resource_id,
                    dropped.slot
                ),
                RelocateOutcome::Unchanged => {}
                // The store already logged the miss.
                RelocateOutcome::NotFound => {}
            }
        }
    }
}

/// Render one (resource, slot) cell; returns its rect and a drop landing
/// in it, if any.
fn render_grid_cell(
    ui: &mut egui::Ui,
    appointments: &[Appointment],
    resource_id: usize,
    slot: &'static str,
    active_date: chrono::NaiveDate,
    col_width: f32,
) -> (Rect, Option<PendingDrop>) {
    let (rect, response) = ui.allocate_exact_size(
        Vec2::new(col_width, ROW_HEIGHT),
        Sense::click_and_drag().union(Sense::hover()),
    );

    let dark_mode = ui.style().visuals.dark_mode;
    let (bg, line) = if dark_mode {
        (Color32::from_gray(40), Color32::from_gray(55))
    } else {
        (Color32::from_rgb(248, 248, 248), Color32::from_rgb(225, 225, 225))
    };
    ui.painter().rect_filled(rect, 0.0, bg);
    ui.painter().line_segment(
        [
            Pos2::new(rect.left(), rect.top()),
            Pos2::new(rect.right(), rect.top()),
        ],
        Stroke::new(1.0, line),
    );
    ui.painter().line_segment(
        [
            Pos2::new(rect.left(), rect.top()),
            Pos2::new(rect.left(), rect.bottom()),
        ],
        Stroke::new(1.0, line),
    );

    let occupants = cell_occupants(appointments, resource_id, slot, active_date);

    // At most one full card per cell; extra occupants show up as the badge.
    let card_rect = occupants
        .first()
        .map(|appointment| render_appointment_card(ui, rect, appointment, occupants.len()));

    let pointer_for_hover = ui
        .ctx()
        .pointer_interact_pos()
        .or_else(|| ui.input(|i| i.pointer.hover_pos()));
    if let Some(pointer) = pointer_for_hover {
        if rect.contains(pointer) {
            DragManager::update_hover(ui.ctx(), resource_id, slot);
            if DragManager::is_active(ui.ctx()) {
                ui.output_mut(|out| out.cursor_icon = CursorIcon::Grabbing);
                ui.ctx().request_repaint();
            }
        }
    }

    // Drop-target highlight
    if let Some(drag_state) = DragManager::active(ui.ctx()) {
        if drag_state.hovered_target() == Some((resource_id, slot.to_string())) {
            let highlight = rect.shrink2(Vec2::new(4.0, 3.0));
            ui.painter().rect_filled(
                highlight,
                3.0,
                Color32::from_rgba_unmultiplied(120, 200, 120, 35),
            );
            ui.painter().rect_stroke(
                highlight,
                3.0,
                Stroke::new(1.5, Color32::from_rgb(120, 200, 120)),
            );
        }
    }

    if response.drag_started() {
        let grabbed = response
            .interact_pointer_pos()
            .zip(card_rect)
            .and_then(|(pos, card)| {
                (card.contains(pos)).then(|| occupants.first().map(|a| a.id.clone()))
            })
            .flatten();
        if let Some(appointment_id) = grabbed {
            DragManager::begin(ui.ctx(), DragContext::new(appointment_id, resource_id, slot));
            ui.output_mut(|out| out.cursor_icon = CursorIcon::Grabbing);
        }
    }

    if response.dragged() {
        ui.output_mut(|out| out.cursor_icon = CursorIcon::Grabbing);
    }

    if response.drag_stopped() {
        if let Some(drag_state) = DragManager::finish(ui.ctx()) {
            if let Some((target_resource, target_slot)) = drag_state.hovered_target() {
                return (
                    rect,
                    Some(PendingDrop {
                        appointment_id: drag_state.appointment_id,
                        resource_id: target_resource,
                        slot: target_slot,
                    }),
                );
            }
        }
    }

    (rect, None)
}

/// True when the pointer was released somewhere that is not a grid cell.
/// The time-label gutter and the header row are not drop targets.
fn released_outside_cells(release_pos: Option<Pos2>, cells_rect: Rect) -> bool {
    release_pos.is_some_and(|pos| !cells_rect.contains(pos))
}

/// Controls offered by the week/month placeholder: exactly one, returning
/// to the day view.
fn placeholder_controls() -> [(&'static str, ScheduleViewMode); 1] {
    [("Back to day view", ScheduleViewMode::Day)]
}

/// Paint an appointment card inside a cell; returns its hit rect.
fn render_appointment_card(
    ui: &mut egui::Ui,
    cell_rect: Rect,
    appointment: &Appointment,
    occupant_count: usize,
) -> Rect {
    let color = parse_color(&appointment.color_tag);
    let being_dragged = DragManager::is_dragging(ui.ctx(), &appointment.id);

    let card_rect = cell_rect.shrink2(Vec2::new(5.0, 4.0));
    let fill = if being_dragged {
        color.linear_multiply(0.35)
    } else {
        color.linear_multiply(0.85)
    };
    ui.painter().rect_filled(card_rect, 4.0, fill);

    // Accent bar on the left edge
    let bar_rect = Rect::from_min_size(card_rect.min, Vec2::new(4.0, card_rect.height()));
    ui.painter().rect_filled(bar_rect, 4.0, color.linear_multiply(0.6));

    ui.painter().text(
        Pos2::new(card_rect.left() + 10.0, card_rect.top() + 6.0),
        egui::Align2::LEFT_TOP,
        &appointment.title,
        egui::FontId::proportional(12.0),
        Color32::WHITE,
    );
    ui.painter().text(
        Pos2::new(card_rect.left() + 10.0, card_rect.top() + 22.0),
        egui::Align2::LEFT_TOP,
        &appointment.participant_name,
        egui::FontId::proportional(10.0),
        Color32::from_gray(235),
    );
    ui.painter().text(
        Pos2::new(card_rect.left() + 10.0, card_rect.bottom() - 14.0),
        egui::Align2::LEFT_TOP,
        appointment.status.label(),
        egui::FontId::proportional(9.0),
        appointment_status_color(appointment.status),
    );

    // Live double-booking badge, derived from cell occupancy rather than
    // the display-only status tag.
    if occupant_count > 1 {
        let badge_pos = Pos2::new(card_rect.right() - 8.0, card_rect.top() + 10.0);
        ui.painter().circle_filled(badge_pos, 9.0, ALERT_RED);
        ui.painter().text(
            badge_pos,
            egui::Align2::CENTER_CENTER,
            format!("+{}", occupant_count - 1),
            egui::FontId::proportional(10.0),
            Color32::WHITE,
        );
    }

    card_rect
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_offers_exactly_one_recovery_control() {
        let controls = placeholder_controls();
        assert_eq!(controls.len(), 1);
        let (label, target) = controls[0];
        assert_eq!(label, "Back to day view");
        assert_eq!(target, ScheduleViewMode::Day);
    }

    #[test]
    fn test_release_over_time_gutter_cancels() {
        // Cells start after the time-label column.
        let cells_rect = Rect::from_min_max(
            Pos2::new(TIME_COL_WIDTH, HEADER_HEIGHT),
            Pos2::new(TIME_COL_WIDTH + 4.0 * 120.0, HEADER_HEIGHT + 10.0 * ROW_HEIGHT),
        );

        let over_gutter = Pos2::new(TIME_COL_WIDTH - 10.0, HEADER_HEIGHT + 100.0);
        assert!(released_outside_cells(Some(over_gutter), cells_rect));

        let over_cell = Pos2::new(TIME_COL_WIDTH + 50.0, HEADER_HEIGHT + 100.0);
        assert!(!released_outside_cells(Some(over_cell), cells_rect));
    }

    #[test]
    fn test_release_outside_window_cancels() {
        let cells_rect = Rect::from_min_max(Pos2::new(70.0, 44.0), Pos2::new(470.0, 684.0));
        assert!(released_outside_cells(Some(Pos2::new(500.0, 700.0)), cells_rect));
    }

    #[test]
    fn test_release_without_pointer_position_does_not_cancel() {
        let cells_rect = Rect::from_min_max(Pos2::new(70.0, 44.0), Pos2::new(470.0, 684.0));
        assert!(!released_outside_cells(None, cells_rect));
    }
}
