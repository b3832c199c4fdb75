use crate::dnd::{DataTransfer, DragOverEvent, DropTarget};
use crate::domain::board::Column;
use crate::domain::item::{ItemId, ItemStatus, WorkItem};
use crate::store::{ProjectStore, SubscriptionId};
use crate::view::item_view::{ItemCard, ItemView};
use log::{debug, trace};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct ListState {
    items: Vec<ItemView>,
    droppable: bool,
    render_count: usize,
}

impl ListState {
    fn render(&mut self, status: ItemStatus, snapshot: &[WorkItem]) {
        self.items = snapshot
            .iter()
            .filter(|item| item.status == status)
            .cloned()
            .map(ItemView::new)
            .collect();
        self.render_count += 1;
    }
}

/// A column listing every item with one status
///
/// Subscribes to the store on construction and re-renders its whole
/// subset on every snapshot. Doubles as the drop target for that status.
pub struct ListView {
    status: ItemStatus,
    heading: String,
    store: Rc<ProjectStore>,
    state: Rc<RefCell<ListState>>,
    subscription: SubscriptionId,
}

impl ListView {
    pub fn new(store: Rc<ProjectStore>, column: &Column) -> Self {
        let status = column.status;
        let state = Rc::new(RefCell::new(ListState::default()));
        state.borrow_mut().render(status, &store.items());

        let weak = Rc::downgrade(&state);
        let subscription = store.subscribe(move |snapshot| {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().render(status, snapshot);
            }
        });

        Self {
            status,
            heading: column.heading(),
            store,
            state,
            subscription,
        }
    }

    pub fn status(&self) -> ItemStatus {
        self.status
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn cards(&self) -> Vec<ItemCard> {
        self.state.borrow().items.iter().map(ItemView::card).collect()
    }

    pub fn item_ids(&self) -> Vec<ItemId> {
        self.state.borrow().items.iter().map(ItemView::id).collect()
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.state.borrow().items.iter().any(|view| &view.id() == id)
    }

    /// The rendered view for `id`, usable as a drag source
    pub fn item_view(&self, id: &ItemId) -> Option<ItemView> {
        self.state
            .borrow()
            .items
            .iter()
            .find(|view| &view.id() == id)
            .cloned()
    }

    /// Whether the "droppable" affordance is currently shown
    pub fn is_droppable(&self) -> bool {
        self.state.borrow().droppable
    }

    pub fn render_count(&self) -> usize {
        self.state.borrow().render_count
    }

    fn set_droppable(&self, droppable: bool) {
        self.state.borrow_mut().droppable = droppable;
    }
}

impl DropTarget for ListView {
    fn on_drag_over(&self, event: &mut DragOverEvent<'_>) {
        if event.transfer().carries_plain_text() {
            event.prevent_default();
            self.set_droppable(true);
        } else {
            trace!(
                "event=drag_over_rejected list={} type={:?}",
                self.status,
                event.transfer().declared_type()
            );
        }
    }

    fn on_drag_leave(&self) {
        self.set_droppable(false);
    }

    fn on_drop(&self, transfer: &DataTransfer) {
        // Cleared before the store call so the re-render never shows it.
        self.set_droppable(false);

        match transfer.item_id() {
            Ok(id) => {
                let outcome = self.store.move_item(&id, self.status);
                debug!(
                    "event=item_dropped id={} list={} outcome={:?}",
                    id, self.status, outcome
                );
            }
            Err(err) => debug!("event=drop_ignored list={} reason=\"{}\"", self.status, err),
        }
    }
}

impl Drop for ListView {
    fn drop(&mut self) {
        self.store.unsubscribe(self.subscription);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dnd::{DragGesture, GestureOutcome, PayloadFormat};

    fn lists(store: &Rc<ProjectStore>) -> (ListView, ListView) {
        (
            ListView::new(Rc::clone(store), &Column::new("Active Projects", ItemStatus::Active)),
            ListView::new(
                Rc::clone(store),
                &Column::new("Finished Projects", ItemStatus::Finished),
            ),
        )
    }

    #[test]
    fn test_lists_filter_by_status() {
        let store = Rc::new(ProjectStore::new());
        let (active, finished) = lists(&store);

        let a = store.add_item("A", "desc", 2);

        assert_eq!(active.heading(), "ACTIVE PROJECTS");
        assert_eq!(active.item_ids(), vec![a]);
        assert_eq!(active.cards()[0].people_label, "2 persons");
        assert!(finished.cards().is_empty());
    }

    #[test]
    fn test_initial_render_uses_existing_items() {
        let store = Rc::new(ProjectStore::new());
        let a = store.add_item("A", "desc", 1);

        let (active, _finished) = lists(&store);
        assert!(active.contains(&a));
        assert_eq!(active.render_count(), 1);
    }

    #[test]
    fn test_drop_moves_item() {
        let store = Rc::new(ProjectStore::new());
        let (active, finished) = lists(&store);
        let a = store.add_item("A", "desc", 2);
        let b = store.add_item("B", "desc", 1);

        let source = active.item_view(&a).unwrap();
        let mut gesture = DragGesture::start(&source);
        gesture.drag_over(&finished);
        assert!(finished.is_droppable());
        assert_eq!(gesture.drop(), GestureOutcome::Dropped);

        assert!(!finished.is_droppable());
        assert_eq!(finished.item_ids(), vec![a]);
        assert_eq!(active.item_ids(), vec![b]);
    }

    #[test]
    fn test_drop_on_own_list_does_not_rerender() {
        let store = Rc::new(ProjectStore::new());
        let (active, finished) = lists(&store);
        let a = store.add_item("A", "desc", 2);
        let renders = (active.render_count(), finished.render_count());

        let source = active.item_view(&a).unwrap();
        let mut gesture = DragGesture::start(&source);
        gesture.drag_over(&active);
        assert_eq!(gesture.drop(), GestureOutcome::Dropped);

        assert!(!active.is_droppable());
        assert_eq!((active.render_count(), finished.render_count()), renders);
        assert_eq!(store.get(&a).unwrap().status, ItemStatus::Active);
    }

    #[test]
    fn test_drop_with_unknown_id_clears_affordance() {
        let store = Rc::new(ProjectStore::new());
        let (_active, finished) = lists(&store);
        store.add_item("A", "desc", 2);
        let before = store.items();

        let mut transfer = DataTransfer::new();
        transfer.set_data(PayloadFormat::PlainText, "stale-id");
        let mut event = DragOverEvent::new(&mut transfer);
        finished.on_drag_over(&mut event);
        assert!(event.is_default_prevented());
        assert!(finished.is_droppable());

        finished.on_drop(&transfer);

        assert!(!finished.is_droppable());
        assert_eq!(store.items(), before);
    }

    #[test]
    fn test_foreign_type_is_not_droppable() {
        let store = Rc::new(ProjectStore::new());
        let (_active, finished) = lists(&store);

        let mut transfer = DataTransfer::new();
        transfer.set_data(PayloadFormat::from_mime("text/uri-list"), "https://example.com");
        let mut event = DragOverEvent::new(&mut transfer);
        finished.on_drag_over(&mut event);

        assert!(!event.is_default_prevented());
        assert!(!finished.is_droppable());
    }

    #[test]
    fn test_dropped_view_unsubscribes() {
        let store = Rc::new(ProjectStore::new());
        let (active, finished) = lists(&store);
        assert_eq!(store.subscriber_count(), 2);

        drop(active);
        assert_eq!(store.subscriber_count(), 1);
        drop(finished);
        assert_eq!(store.subscriber_count(), 0);
    }
}
