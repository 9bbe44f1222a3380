//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts where the inventory blob lives.
//!
//! The collection is persisted as a single unit: `save` re-serializes the
//! whole sequence and overwrites the blob unconditionally, and `load` reads
//! it back in one shot. There are no per-item or delta writes, which keeps
//! the on-disk state a plain snapshot of the in-memory one.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON file (`inventory.json`)
//!   under a root directory. A blob that fails to parse is set aside as
//!   `inventory.json.corrupt` rather than deleted, and loading proceeds
//!   with an empty collection.
//! - [`memory::InMemoryStore`]: in-memory storage for tests; no persistence.

use crate::error::Result;
use crate::model::Item;

pub mod fs;
pub mod memory;

/// Abstract interface for inventory persistence.
///
/// Implementations hold the serialized collection as one blob and must
/// treat `save` as a full overwrite.
pub trait DataStore {
    /// Load the full collection. A missing blob yields an empty collection.
    fn load(&self) -> Result<Vec<Item>>;

    /// Serialize and overwrite the full collection.
    fn save(&mut self, items: &[Item]) -> Result<()>;
}
