use crate::dnd::{DataTransfer, DragSource, DropEffect, PayloadFormat};
use crate::domain::item::{ItemId, WorkItem};
use log::trace;

/// Rendered content of a single item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCard {
    pub id: ItemId,
    pub title: String,
    pub people_label: String,
    pub description: String,
}

/// A draggable item inside a list
#[derive(Debug, Clone)]
pub struct ItemView {
    item: WorkItem,
}

impl ItemView {
    pub fn new(item: WorkItem) -> Self {
        Self { item }
    }

    pub fn id(&self) -> ItemId {
        self.item.id
    }

    pub fn item(&self) -> &WorkItem {
        &self.item
    }

    pub fn card(&self) -> ItemCard {
        ItemCard {
            id: self.item.id,
            title: self.item.title.clone(),
            people_label: self.item.people_label(),
            description: self.item.description.clone(),
        }
    }
}

impl DragSource for ItemView {
    fn on_drag_start(&self, transfer: &mut DataTransfer) {
        transfer.set_data(PayloadFormat::PlainText, self.item.id.to_string());
        transfer.set_effect_allowed(DropEffect::Move);
    }

    fn on_drag_end(&self, transfer: &DataTransfer) {
        trace!(
            "event=item_drag_end id={} drop_effect={:?}",
            self.item.id,
            transfer.drop_effect()
        );
    }
}
