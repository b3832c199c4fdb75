//! New-project form input and its validation rules.

use crate::domain::board::InputRules;
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};

/// Values collected from the new-project form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub people: u32,
}

impl ProjectInput {
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people,
        }
    }

    /// Checks every field against `rules`, reporting the first failure
    pub fn validate(&self, rules: &InputRules) -> Result<()> {
        TextRule {
            field: "title",
            required: true,
            min_length: None,
            max_length: rules.title_max_length,
        }
        .check(&self.title)?;

        TextRule {
            field: "description",
            required: true,
            min_length: Some(rules.description_min_length),
            max_length: rules.description_max_length,
        }
        .check(&self.description)?;

        if self.people < rules.people_min || self.people > rules.people_max {
            return Err(validation(
                "people",
                format!(
                    "must be between {} and {}, got {}",
                    rules.people_min, rules.people_max, self.people
                ),
            ));
        }

        Ok(())
    }
}

struct TextRule {
    field: &'static str,
    required: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
}

impl TextRule {
    fn check(&self, value: &str) -> Result<()> {
        let trimmed = value.trim();
        let length = trimmed.chars().count();

        if self.required && trimmed.is_empty() {
            return Err(validation(self.field, "is required".to_string()));
        }
        if let Some(min) = self.min_length {
            if length < min {
                return Err(validation(
                    self.field,
                    format!("must be at least {} characters", min),
                ));
            }
        }
        if let Some(max) = self.max_length {
            if length > max {
                return Err(validation(
                    self.field,
                    format!("must be at most {} characters", max),
                ));
            }
        }
        Ok(())
    }
}

fn validation(field: &str, reason: String) -> BoardError {
    BoardError::Validation {
        field: field.to_string(),
        reason,
    }
}
