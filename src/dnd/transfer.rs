use crate::domain::item::ItemId;
use crate::error::{BoardError, Result};
use std::fmt;

/// Declared type of one entry on the drag data channel
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PayloadFormat {
    PlainText,
    Other(String),
}

impl PayloadFormat {
    const PLAIN_TEXT_MIME: &'static str = "text/plain";

    pub fn from_mime(mime: &str) -> Self {
        if mime.trim().eq_ignore_ascii_case(Self::PLAIN_TEXT_MIME) {
            Self::PlainText
        } else {
            Self::Other(mime.to_string())
        }
    }

    pub fn mime(&self) -> &str {
        match self {
            Self::PlainText => Self::PLAIN_TEXT_MIME,
            Self::Other(mime) => mime,
        }
    }
}

impl fmt::Display for PayloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mime())
    }
}

/// A typed entry on the drag data channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub format: PayloadFormat,
    pub content: String,
}

/// Operations a drag source allows or a drop target performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    #[default]
    None,
    Copy,
    Move,
    Link,
}

/// The data carried by a single drag gesture
///
/// Entries keep the order in which they were set; the first entry is the
/// gesture's declared type.
#[derive(Debug, Clone, Default)]
pub struct DataTransfer {
    payloads: Vec<DragPayload>,
    effect_allowed: DropEffect,
    drop_effect: DropEffect,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the content for `format`, replacing any previous entry of that type
    pub fn set_data(&mut self, format: PayloadFormat, content: impl Into<String>) {
        let content = content.into();
        match self.payloads.iter_mut().find(|p| p.format == format) {
            Some(existing) => existing.content = content,
            None => self.payloads.push(DragPayload { format, content }),
        }
    }

    pub fn get_data(&self, format: &PayloadFormat) -> Option<&str> {
        self.payloads
            .iter()
            .find(|p| &p.format == format)
            .map(|p| p.content.as_str())
    }

    pub fn types(&self) -> impl Iterator<Item = &PayloadFormat> {
        self.payloads.iter().map(|p| &p.format)
    }

    pub fn declared_type(&self) -> Option<&PayloadFormat> {
        self.payloads.first().map(|p| &p.format)
    }

    /// True when the gesture's declared type is plain text
    pub fn carries_plain_text(&self) -> bool {
        self.declared_type() == Some(&PayloadFormat::PlainText)
    }

    /// Returns the plain-text content, or `InvalidDragType` if the gesture
    /// declares anything else
    pub fn plain_text(&self) -> Result<&str> {
        match self.payloads.first() {
            Some(DragPayload {
                format: PayloadFormat::PlainText,
                content,
            }) => Ok(content.as_str()),
            Some(other) => Err(BoardError::InvalidDragType(other.format.to_string())),
            None => Err(BoardError::InvalidDragType("<empty>".to_string())),
        }
    }

    /// Extracts the dragged item's ID from the plain-text entry
    pub fn item_id(&self) -> Result<ItemId> {
        self.plain_text()?.parse()
    }

    pub fn effect_allowed(&self) -> DropEffect {
        self.effect_allowed
    }

    pub fn set_effect_allowed(&mut self, effect: DropEffect) {
        self.effect_allowed = effect;
    }

    pub fn drop_effect(&self) -> DropEffect {
        self.drop_effect
    }

    pub fn set_drop_effect(&mut self, effect: DropEffect) {
        self.drop_effect = effect;
    }
}
