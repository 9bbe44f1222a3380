use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use crate::model::Item;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod export;
pub mod helpers;
pub mod list;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// An item paired with its 1-based position in the full collection.
///
/// Positions are assigned over the unfiltered sequence, so an index printed
/// by a filtered listing is still a valid argument to `edit`/`rm`.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    pub index: usize,
    pub item: Item,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_items: Vec<Item>,
    pub listed_items: Vec<DisplayItem>,
    pub export_path: Option<PathBuf>,
    pub config: Option<ShelfConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_items(mut self, items: Vec<Item>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_listed_items(mut self, items: Vec<DisplayItem>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_export_path(mut self, path: PathBuf) -> Self {
        self.export_path = Some(path);
        self
    }

    pub fn with_config(mut self, config: ShelfConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Raw field values for a new item or an edit, prior to validation.
#[derive(Debug, Clone)]
pub struct ItemDraft {
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub price: f64,
}

impl ItemDraft {
    pub fn new(name: String, category: String, quantity: i64, price: f64) -> Self {
        Self {
            name,
            category,
            quantity,
            price,
        }
    }

    /// Reject drafts the store cannot represent. Negative quantities are
    /// allowed; a non-finite price is not, since the JSON blob cannot
    /// round-trip NaN or infinity.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ShelfError::Api("Item name cannot be empty".into()));
        }
        if !self.price.is_finite() {
            return Err(ShelfError::Api("Price must be a finite number".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ItemUpdate {
    pub index: usize,
    pub draft: ItemDraft,
}

impl ItemUpdate {
    pub fn new(index: usize, draft: ItemDraft) -> Self {
        Self { index, draft }
    }
}
