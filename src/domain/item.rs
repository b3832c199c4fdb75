use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Unique identifier for a work item
///
/// Generated once at creation and never reused for the lifetime of the
/// process. The string form is what travels over the drag channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Creates a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl FromStr for ItemId {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| crate::error::BoardError::InvalidItemId(s.to_string()))
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status bucket a work item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Active,
    Finished,
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Finished => write!(f, "Finished"),
        }
    }
}

impl FromStr for ItemStatus {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            _ => Err(crate::error::BoardError::InvalidStatus(s.to_string())),
        }
    }
}

/// A project tracked on the board
///
/// Only `status` changes after creation, and only through
/// [`ProjectStore::move_item`](crate::store::ProjectStore::move_item).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub people: u32,
    pub status: ItemStatus,
    pub created_at: DateTime<Utc>,
}

impl WorkItem {
    /// Creates a new active item with a freshly generated ID
    pub fn new(title: String, description: String, people: u32) -> Self {
        Self {
            id: ItemId::generate(),
            title,
            description,
            people,
            status: ItemStatus::Active,
            created_at: Utc::now(),
        }
    }

    /// Human-readable assignee count, e.g. "1 person" or "3 persons"
    pub fn people_label(&self) -> String {
        people_label(self.people)
    }
}

pub fn people_label(count: u32) -> String {
    if count == 1 {
        "1 person".to_string()
    } else {
        format!("{} persons", count)
    }
}
