//! Drag-and-drop coordination between item views and list views.
//!
//! Sources and targets never reference each other. A source writes its
//! item's ID onto the [`DataTransfer`] when the gesture starts; a target
//! opts in to receiving a drop during drag-over and, on drop, reads the ID
//! back and asks the store to move it. [`DragGesture`] plays the platform's
//! part and dispatches the events in order.

pub mod gesture;
pub mod transfer;

pub use gesture::{DragGesture, GestureOutcome, GesturePhase};
pub use transfer::{DataTransfer, DragPayload, DropEffect, PayloadFormat};

/// A view that can be picked up and dragged
pub trait DragSource {
    /// Writes the payload; must not mutate any store
    fn on_drag_start(&self, transfer: &mut DataTransfer);

    fn on_drag_end(&self, transfer: &DataTransfer);
}

/// A view that can receive a dragged item
pub trait DropTarget {
    /// Called repeatedly while the pointer is above the target. Call
    /// [`DragOverEvent::prevent_default`] to accept a drop.
    fn on_drag_over(&self, event: &mut DragOverEvent<'_>);

    fn on_drag_leave(&self);

    /// Only delivered if the last drag-over was accepted
    fn on_drop(&self, transfer: &DataTransfer);
}

/// A drag-over notification; targets are not droppable unless they opt in
#[derive(Debug)]
pub struct DragOverEvent<'a> {
    transfer: &'a mut DataTransfer,
    default_prevented: bool,
}

impl<'a> DragOverEvent<'a> {
    pub fn new(transfer: &'a mut DataTransfer) -> Self {
        Self {
            transfer,
            default_prevented: false,
        }
    }

    pub fn transfer(&self) -> &DataTransfer {
        self.transfer
    }

    /// Opts the target in to receiving a drop and records a move effect
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
        self.transfer.set_drop_effect(DropEffect::Move);
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}
