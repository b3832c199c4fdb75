use crate::dnd::transfer::{DataTransfer, DropEffect};
use crate::dnd::{DragOverEvent, DragSource, DropTarget};
use log::trace;

/// Where a gesture currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// Picked up, not above any target
    Dragging,
    /// Above a target that opted in
    OverValid,
    /// Above a target that refused
    OverInvalid,
}

/// How a gesture ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// A target accepted the drop
    Dropped,
    /// Released outside any accepting target
    Cancelled,
}

/// One drag gesture, from pick-up to release
///
/// Dispatches events the way the platform does: `drag_start` on the source
/// at creation, `drag_over`/`drag_leave` on targets as the pointer moves,
/// `drop` only on a target whose last drag-over opted in, and `drag_end` on
/// the source when the gesture finishes either way.
pub struct DragGesture<'a> {
    source: &'a dyn DragSource,
    transfer: DataTransfer,
    hovered: Option<&'a dyn DropTarget>,
    phase: GesturePhase,
}

impl<'a> DragGesture<'a> {
    /// Picks up `source`, letting it fill the data channel
    pub fn start(source: &'a dyn DragSource) -> Self {
        let mut transfer = DataTransfer::new();
        source.on_drag_start(&mut transfer);
        trace!(
            "event=drag_start types={}",
            transfer.types().map(|t| t.mime()).collect::<Vec<_>>().join(",")
        );

        Self {
            source,
            transfer,
            hovered: None,
            phase: GesturePhase::Dragging,
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn transfer(&self) -> &DataTransfer {
        &self.transfer
    }

    /// Moves the pointer over `target`, leaving the previous target if
    /// it was a different one
    pub fn drag_over(&mut self, target: &'a dyn DropTarget) -> GesturePhase {
        if let Some(previous) = self.hovered {
            if !same_target(previous, target) {
                previous.on_drag_leave();
            }
        }
        self.hovered = Some(target);
        self.transfer.set_drop_effect(DropEffect::None);

        let mut event = DragOverEvent::new(&mut self.transfer);
        target.on_drag_over(&mut event);

        self.phase = if event.is_default_prevented() {
            GesturePhase::OverValid
        } else {
            GesturePhase::OverInvalid
        };
        trace!("event=drag_over phase={:?}", self.phase);
        self.phase
    }

    /// Moves the pointer off the current target without dropping
    pub fn leave(&mut self) {
        if let Some(previous) = self.hovered.take() {
            previous.on_drag_leave();
            trace!("event=drag_leave");
        }
        self.transfer.set_drop_effect(DropEffect::None);
        self.phase = GesturePhase::Dragging;
    }

    /// Releases the pointer
    pub fn drop(mut self) -> GestureOutcome {
        let outcome = match (self.hovered, self.phase) {
            (Some(target), GesturePhase::OverValid) => {
                target.on_drop(&self.transfer);
                self.hovered = None;
                GestureOutcome::Dropped
            }
            _ => {
                self.leave();
                GestureOutcome::Cancelled
            }
        };
        self.finish(outcome)
    }

    /// Aborts the gesture (e.g. escape key) without dropping anywhere
    pub fn cancel(mut self) -> GestureOutcome {
        self.leave();
        self.finish(GestureOutcome::Cancelled)
    }

    fn finish(self, outcome: GestureOutcome) -> GestureOutcome {
        self.source.on_drag_end(&self.transfer);
        trace!("event=drag_end outcome={:?}", outcome);
        outcome
    }
}

fn same_target(a: &dyn DropTarget, b: &dyn DropTarget) -> bool {
    std::ptr::eq(a as *const _ as *const (), b as *const _ as *const ())
}
