//! Board wiring: one store, the new-project form handler, and one list view
//! per configured column.

use crate::dnd::{DragGesture, GestureOutcome};
use crate::domain::board::BoardConfig;
use crate::domain::item::{ItemId, ItemStatus};
use crate::error::{BoardError, Result};
use crate::input::ProjectInput;
use crate::store::ProjectStore;
use crate::view::list_view::ListView;
use log::debug;
use std::rc::Rc;

pub struct ProjectBoard {
    config: BoardConfig,
    store: Rc<ProjectStore>,
    lists: Vec<ListView>,
}

impl ProjectBoard {
    /// Builds a board around a fresh store
    pub fn new(config: BoardConfig) -> Result<Self> {
        Self::with_store(config, Rc::new(ProjectStore::new()))
    }

    /// Builds a board around an existing store, e.g. [`ProjectStore::shared`]
    pub fn with_store(config: BoardConfig, store: Rc<ProjectStore>) -> Result<Self> {
        config.validate()?;
        let lists = config
            .columns
            .iter()
            .map(|column| ListView::new(Rc::clone(&store), column))
            .collect();
        debug!(
            "event=board_mounted name=\"{}\" columns={}",
            config.name,
            config.columns.len()
        );

        Ok(Self {
            config,
            store,
            lists,
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn store(&self) -> &Rc<ProjectStore> {
        &self.store
    }

    pub fn lists(&self) -> &[ListView] {
        &self.lists
    }

    pub fn list(&self, status: ItemStatus) -> Option<&ListView> {
        self.lists.iter().find(|list| list.status() == status)
    }

    /// Handles a form submission: validates, then adds the item
    ///
    /// Invalid input leaves the store untouched.
    pub fn submit(&self, input: ProjectInput) -> Result<ItemId> {
        if let Err(err) = input.validate(&self.config.input) {
            debug!("event=submit_rejected reason=\"{}\"", err);
            return Err(err);
        }

        let ProjectInput {
            title,
            description,
            people,
        } = input;
        Ok(self
            .store
            .add_item(title.trim(), description.trim(), people))
    }

    /// Runs a complete drag gesture: picks `id` up from the list showing
    /// it and releases it over the list for `target`
    pub fn drag_to(&self, id: &ItemId, target: ItemStatus) -> Result<GestureOutcome> {
        let source = self
            .lists
            .iter()
            .find_map(|list| list.item_view(id))
            .ok_or_else(|| BoardError::ItemNotFound(id.to_string()))?;
        let target = self
            .list(target)
            .ok_or_else(|| BoardError::UnknownColumn(target.to_string()))?;

        let mut gesture = DragGesture::start(&source);
        gesture.drag_over(target);
        Ok(gesture.drop())
    }
}
