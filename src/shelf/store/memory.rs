use super::DataStore;
use crate::error::Result;
use crate::model::Item;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    items: Vec<Item>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Item>> {
        Ok(self.items.clone())
    }

    fn save(&mut self, items: &[Item]) -> Result<()> {
        self.items = items.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_item(mut self, name: &str, category: &str, quantity: i64, price: f64) -> Self {
            let item = Item::new(name.to_string(), category.to_string(), quantity, price);
            self.store.items.push(item);
            self
        }

        pub fn with_items(mut self, count: usize) -> Self {
            for i in 0..count {
                let item = Item::new(format!("Item {}", i + 1), "Misc".to_string(), 1, 1.0);
                self.store.items.push(item);
            }
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_replaces_previous_contents() {
        let mut store = InMemoryStore::new();
        store
            .save(&[Item::new("Bolt".into(), "Hardware".into(), 10, 1.5)])
            .unwrap();
        store
            .save(&[Item::new("Washer".into(), "Hardware".into(), 5, 0.05)])
            .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Washer");
    }
}
