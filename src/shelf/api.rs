//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for all
//! shelf operations, regardless of the UI in front of it.
//!
//! The facade dispatches to command functions, normalizes inputs (1-based
//! display positions become stable item ids inside the command layer), and
//! returns structured [`CmdResult`] values. It never prints, never touches
//! stdout/stderr, and never exits the process — those are CLI concerns.
//!
//! `ShelfApi<S: DataStore>` is generic over the storage backend:
//! `FileStore` in production, `InMemoryStore` in tests.

use crate::commands;
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::DataStore;
use std::path::{Path, PathBuf};

pub struct ShelfApi<S: DataStore> {
    inventory: Inventory<S>,
    config_dir: PathBuf,
}

impl<S: DataStore> ShelfApi<S> {
    /// Load the collection from the store; `config_dir` is where
    /// `config.json` lives.
    pub fn open(store: S, config_dir: PathBuf) -> Result<Self> {
        Ok(Self {
            inventory: Inventory::open(store)?,
            config_dir,
        })
    }

    pub fn add_item(&mut self, draft: commands::ItemDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.inventory, draft)
    }

    pub fn list_items(&self, query: &str, category: Option<&str>) -> Result<commands::CmdResult> {
        commands::list::run(&self.inventory, query, category)
    }

    pub fn update_items(&mut self, updates: &[commands::ItemUpdate]) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.inventory, updates)
    }

    pub fn delete_items(&mut self, indexes: &[usize]) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.inventory, indexes)
    }

    pub fn export(&self, output: &Path) -> Result<commands::CmdResult> {
        commands::export::run(&self.inventory, output)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    /// The item at a 1-based position, for UIs that pre-fill edit forms.
    pub fn item_at(&self, index: usize) -> Result<crate::model::Item> {
        let resolved = commands::helpers::resolve_indexes(&self.inventory, &[index])?;
        let (_, id) = resolved[0];
        self.inventory
            .get(id)
            .cloned()
            .ok_or(crate::error::ShelfError::ItemNotFound(id))
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{
    CmdMessage, CmdResult, DisplayItem, ItemDraft, ItemUpdate, MessageLevel,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> ShelfApi<InMemoryStore> {
        let dir = std::env::temp_dir();
        ShelfApi::open(InMemoryStore::new(), dir).unwrap()
    }

    #[test]
    fn add_then_list_dispatches_through_the_facade() {
        let mut api = api();
        api.add_item(ItemDraft::new("Bolt".into(), "Hardware".into(), 10, 1.5))
            .unwrap();

        let result = api.list_items("", None).unwrap();
        assert_eq!(result.listed_items.len(), 1);
        assert_eq!(result.listed_items[0].item.name, "Bolt");
    }

    #[test]
    fn item_at_resolves_positions() {
        let mut api = api();
        api.add_item(ItemDraft::new("A".into(), "X".into(), 1, 1.0))
            .unwrap();
        api.add_item(ItemDraft::new("B".into(), "X".into(), 2, 2.0))
            .unwrap();

        assert_eq!(api.item_at(2).unwrap().name, "B");
        assert!(api.item_at(3).is_err());
    }
}
