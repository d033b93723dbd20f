// Drag/drop state machine for the schedule grid
//
// Idle -> Dragging(appointment id) -> Idle. Grab carries only the id; the
// drop mutates the live record by id lookup. State lives in egui memory so
// it survives across frames and is testable with a headless Context.

use egui::{Context, Id};

/// Payload of an active drag. The origin cell is kept only so a drop back
/// onto it can be recognized as a no-op by the caller's relocate.
#[derive(Clone, Debug)]
pub struct DragContext {
    pub appointment_id: String,
    pub origin_resource: usize,
    pub origin_slot: String,
    /// Candidate drop target, updated while the pointer crosses cells.
    pub hovered_resource: Option<usize>,
    pub hovered_slot: Option<String>,
}

impl DragContext {
    pub fn new(appointment_id: impl Into<String>, resource_id: usize, slot: &str) -> Self {
        Self {
            appointment_id: appointment_id.into(),
            origin_resource: resource_id,
            origin_slot: slot.to_string(),
            hovered_resource: Some(resource_id),
            hovered_slot: Some(slot.to_string()),
        }
    }

    /// The (resource, slot) cell the drop would land in.
    pub fn hovered_target(&self) -> Option<(usize, String)> {
        match (self.hovered_resource, &self.hovered_slot) {
            (Some(resource), Some(slot)) => Some((resource, slot.clone())),
            _ => None,
        }
    }
}

pub struct DragManager;

impl DragManager {
    fn storage_id() -> Id {
        Id::new("schedule_appointment_drag_state")
    }

    /// Idle -> Dragging. Replaces any stale drag.
    pub fn begin(ctx: &Context, context: DragContext) {
        ctx.memory_mut(|mem| {
            mem.data.insert_persisted(Self::storage_id(), context);
        });
    }

    pub fn active(ctx: &Context) -> Option<DragContext> {
        ctx.memory_mut(|mem| mem.data.get_persisted::<DragContext>(Self::storage_id()))
    }

    pub fn is_active(ctx: &Context) -> bool {
        Self::active(ctx).is_some()
    }

    pub fn is_dragging(ctx: &Context, appointment_id: &str) -> bool {
        Self::active(ctx).is_some_and(|c| c.appointment_id == appointment_id)
    }

    /// Record the cell currently under the pointer as the drop candidate.
    pub fn update_hover(ctx: &Context, resource_id: usize, slot: &str) {
        let id = Self::storage_id();
        ctx.memory_mut(|mem| {
            if let Some(mut state) = mem.data.get_persisted::<DragContext>(id) {
                state.hovered_resource = Some(resource_id);
                state.hovered_slot = Some(slot.to_string());
                mem.data.insert_persisted(id, state);
            }
        });
    }

    /// Dragging -> Idle on a valid drop; returns the payload so the caller
    /// can relocate. None when no drag was active.
    pub fn finish(ctx: &Context) -> Option<DragContext> {
        let id = Self::storage_id();
        let mut result = None;
        ctx.memory_mut(|mem| {
            if let Some(current) = mem.data.get_persisted::<DragContext>(id) {
                result = Some(current);
                mem.data.remove::<DragContext>(id);
            }
        });
        result
    }

    /// Dragging -> Idle with no mutation (release outside the grid, or an
    /// explicit gesture cancel).
    pub fn cancel(ctx: &Context) {
        ctx.memory_mut(|mem| {
            mem.data.remove::<DragContext>(Self::storage_id());
        });
    }
}
