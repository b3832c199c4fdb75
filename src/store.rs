//! The project store: single source of truth for work items.
//!
//! Every mutation runs to completion on the calling (UI) thread and fans the
//! full post-mutation list out to every subscriber before returning.
//! Subscribers that mutate the store from inside a callback have their
//! snapshot queued behind the one currently being delivered, so delivery
//! order always matches mutation order.

use crate::domain::item::{ItemId, ItemStatus, WorkItem};
use crate::error::{BoardError, Result};
use log::{debug, trace};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;

/// Callback receiving a full snapshot of the store's items
pub type Listener = dyn Fn(&[WorkItem]);

/// Handle identifying a registered subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Result of a move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Status changed and subscribers were notified
    Moved,
    /// Item already had the requested status; nothing was notified
    Unchanged,
    /// No item with that ID exists
    NotFound,
}

thread_local! {
    static SHARED: Rc<ProjectStore> = Rc::new(ProjectStore::new());
}

#[derive(Default)]
pub struct ProjectStore {
    items: RefCell<Vec<WorkItem>>,
    subscribers: RefCell<BTreeMap<SubscriptionId, Rc<Listener>>>,
    next_subscription: Cell<u64>,
    pending: RefCell<VecDeque<Vec<WorkItem>>>,
    notifying: Cell<bool>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide store for the current UI thread
    pub fn shared() -> Rc<ProjectStore> {
        SHARED.with(Rc::clone)
    }

    /// Appends a new active item and notifies subscribers
    ///
    /// Inputs are assumed to be validated already (see
    /// [`ProjectInput::validate`](crate::input::ProjectInput::validate)).
    pub fn add_item(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ItemId {
        let item = WorkItem::new(title.into(), description.into(), people);
        let id = item.id;
        debug!("event=item_added id={} people={}", id, item.people);

        self.items.borrow_mut().push(item);
        self.notify();
        id
    }

    /// Moves an item to `status`, silently ignoring unknown IDs
    ///
    /// A move onto the item's current status is a no-op and does not notify.
    pub fn move_item(&self, id: &ItemId, status: ItemStatus) -> MoveOutcome {
        match self.try_move_item(id, status) {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!("event=move_ignored id={} reason=\"{}\"", id, err);
                MoveOutcome::NotFound
            }
        }
    }

    /// Like [`move_item`](Self::move_item) but reports unknown IDs
    pub fn try_move_item(&self, id: &ItemId, status: ItemStatus) -> Result<MoveOutcome> {
        let changed = {
            let mut items = self.items.borrow_mut();
            let item = items
                .iter_mut()
                .find(|item| &item.id == id)
                .ok_or_else(|| BoardError::ItemNotFound(id.to_string()))?;

            if item.status == status {
                false
            } else {
                debug!("event=item_moved id={} from={} to={}", id, item.status, status);
                item.status = status;
                true
            }
        };

        if changed {
            self.notify();
            Ok(MoveOutcome::Moved)
        } else {
            trace!("event=move_unchanged id={} status={}", id, status);
            Ok(MoveOutcome::Unchanged)
        }
    }

    /// Registers a callback for every future snapshot
    ///
    /// Past snapshots are not replayed.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&[WorkItem]) + 'static,
    {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        self.subscribers.borrow_mut().insert(id, Rc::new(listener));
        trace!("event=subscribed subscription={}", id.0);
        id
    }

    /// Removes a subscriber; returns false if the handle was unknown
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers.borrow_mut().remove(&id).is_some()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Copy of all items in creation order
    pub fn items(&self) -> Vec<WorkItem> {
        self.items.borrow().clone()
    }

    pub fn items_with_status(&self, status: ItemStatus) -> Vec<WorkItem> {
        self.items
            .borrow()
            .iter()
            .filter(|item| item.status == status)
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &ItemId) -> Option<WorkItem> {
        self.items.borrow().iter().find(|item| &item.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Serializes the current items as a JSON array
    pub fn snapshot_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&*self.items.borrow())?)
    }

    fn notify(&self) {
        self.pending.borrow_mut().push_back(self.items());
        if self.notifying.get() {
            // Delivered by the outer fan-out loop once the current snapshot is done.
            return;
        }

        let _guard = NotifyGuard::enter(&self.notifying);
        loop {
            let Some(snapshot) = self.pending.borrow_mut().pop_front() else {
                break;
            };
            let listeners: Vec<Rc<Listener>> =
                self.subscribers.borrow().values().cloned().collect();

            trace!(
                "event=notify items={} subscribers={}",
                snapshot.len(),
                listeners.len()
            );
            for listener in listeners {
                listener(&snapshot);
            }
        }
    }
}

struct NotifyGuard<'a>(&'a Cell<bool>);

impl<'a> NotifyGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for NotifyGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
