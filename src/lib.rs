//! # Project Board Core
//!
//! State store and drag-and-drop coordination for a two-column project
//! board. Work items live in a single [`ProjectStore`]; list views subscribe
//! to it and re-render their status subset on every change, and items move
//! between lists through a typed drag payload carrying only the item's ID.
//!
//! Everything here is headless and single-threaded: no rendering backend,
//! persistence or async runtime is assumed.

pub mod app;
pub mod dnd;
pub mod domain;
pub mod error;
pub mod input;
pub mod store;
pub mod view;

// Re-export commonly used types
pub use app::ProjectBoard;
pub use dnd::{
    DataTransfer, DragGesture, DragOverEvent, DragPayload, DragSource, DropEffect, DropTarget,
    GestureOutcome, GesturePhase, PayloadFormat,
};
pub use domain::{
    board::{BoardConfig, Column, InputRules},
    item::{ItemId, ItemStatus, WorkItem},
};
pub use error::{BoardError, Result};
pub use input::ProjectInput;
pub use store::{MoveOutcome, ProjectStore, SubscriptionId};
pub use view::{ItemCard, ItemView, ListView};
