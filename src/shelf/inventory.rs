//! The core collection: an insertion-ordered sequence of [`Item`]s backed
//! by a [`DataStore`].
//!
//! The collection is loaded once when the inventory is opened and every
//! mutation re-serializes the whole sequence to the store before returning,
//! so the durable copy is never more than one mutation behind the in-memory
//! one. If a save fails the error propagates and the in-memory change is
//! already applied; callers surface the error and exit rather than retry.

use crate::error::Result;
use crate::model::Item;
use crate::store::DataStore;
use uuid::Uuid;

pub struct Inventory<S: DataStore> {
    items: Vec<Item>,
    store: S,
}

impl<S: DataStore> Inventory<S> {
    /// Load the persisted collection and take ownership of the store.
    pub fn open(store: S) -> Result<Self> {
        let items = store.load()?;
        Ok(Self { items, store })
    }

    /// Append a new item at the end of the sequence.
    pub fn add(&mut self, name: String, category: String, quantity: i64, price: f64) -> Result<Item> {
        let item = Item::new(name, category, quantity, price);
        self.items.push(item.clone());
        self.store.save(&self.items)?;
        Ok(item)
    }

    /// Overwrite the fields of the item with the given id, in place.
    ///
    /// A missing id is a silent no-op; the return value says whether
    /// anything was touched. Saves either way.
    pub fn update(
        &mut self,
        id: Uuid,
        name: String,
        category: String,
        quantity: i64,
        price: f64,
    ) -> Result<bool> {
        let found = match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.name = name;
                item.category = category;
                item.quantity = quantity;
                item.price = price;
                true
            }
            None => false,
        };
        self.store.save(&self.items)?;
        Ok(found)
    }

    /// Remove the item with the given id. Missing id is a silent no-op;
    /// saves either way.
    pub fn remove(&mut self, id: Uuid) -> Result<bool> {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        self.store.save(&self.items)?;
        Ok(removed)
    }

    /// The current sequence, in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: Uuid) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }
}
