use crate::domain::item::ItemStatus;
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Configuration for a board column (one list view per column)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub status: ItemStatus,
}

impl Column {
    pub fn new(name: impl Into<String>, status: ItemStatus) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }

    /// Heading shown above the list, e.g. "ACTIVE PROJECTS"
    pub fn heading(&self) -> String {
        self.name.to_uppercase()
    }
}

/// Limits applied to the new-project form before anything reaches the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputRules {
    pub title_max_length: Option<usize>,
    pub description_min_length: usize,
    pub description_max_length: Option<usize>,
    pub people_min: u32,
    pub people_max: u32,
}

impl Default for InputRules {
    fn default() -> Self {
        Self {
            title_max_length: None,
            description_min_length: 5,
            description_max_length: None,
            people_min: 1,
            people_max: 5,
        }
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub name: String,
    pub columns: Vec<Column>,
    #[serde(default)]
    pub input: InputRules,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Project Board".to_string(),
            columns: vec![
                Column::new("Active Projects", ItemStatus::Active),
                Column::new("Finished Projects", ItemStatus::Finished),
            ],
            input: InputRules::default(),
        }
    }
}

impl BoardConfig {
    /// Parses and validates a JSON board configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every column owns a distinct status and the input
    /// limits are coherent
    pub fn validate(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(BoardError::ConfigError(
                "board needs at least one column".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.status) {
                return Err(BoardError::ConfigError(format!(
                    "status {} is owned by more than one column",
                    column.status
                )));
            }
        }

        if self.input.people_min > self.input.people_max {
            return Err(BoardError::ConfigError(format!(
                "people_min {} exceeds people_max {}",
                self.input.people_min, self.input.people_max
            )));
        }
        if self.input.people_min == 0 {
            return Err(BoardError::ConfigError(
                "people_min must be positive".to_string(),
            ));
        }

        Ok(())
    }

    /// Gets the column configuration for a status
    pub fn column_for_status(&self, status: ItemStatus) -> Option<&Column> {
        self.columns.iter().find(|col| col.status == status)
    }
}
