pub mod board;
pub mod item;

pub use board::{BoardConfig, Column, InputRules};
pub use item::{people_label, ItemId, ItemStatus, WorkItem};
