pub mod item_view;
pub mod list_view;

pub use item_view::{ItemCard, ItemView};
pub use list_view::ListView;
