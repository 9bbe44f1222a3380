use crate::commands::DisplayItem;
use crate::error::{Result, ShelfError};
use crate::inventory::Inventory;
use crate::store::DataStore;
use uuid::Uuid;

pub fn indexed_items<S: DataStore>(inventory: &Inventory<S>) -> Vec<DisplayItem> {
    inventory
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| DisplayItem {
            index: i + 1,
            item: item.clone(),
        })
        .collect()
}

/// Map 1-based positions in the current collection to stable item ids.
///
/// Resolution happens before any mutation, so a batch like `rm 1 3` refers
/// to positions as the user saw them, not positions that shift mid-batch.
pub fn resolve_indexes<S: DataStore>(
    inventory: &Inventory<S>,
    indexes: &[usize],
) -> Result<Vec<(usize, Uuid)>> {
    indexes
        .iter()
        .map(|&index| {
            index
                .checked_sub(1)
                .and_then(|i| inventory.items().get(i))
                .map(|item| (index, item.id))
                .ok_or_else(|| ShelfError::Api(format!("No item at index {}", index)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn indexes_are_one_based_over_insertion_order() {
        let store = StoreFixture::new().with_items(3).store;
        let inv = Inventory::open(store).unwrap();

        let indexed = indexed_items(&inv);
        let positions: Vec<_> = indexed.iter().map(|di| di.index).collect();
        assert_eq!(positions, [1, 2, 3]);
        assert_eq!(indexed[2].item.name, "Item 3");
    }

    #[test]
    fn resolves_positions_to_ids() {
        let mut inv = Inventory::open(InMemoryStore::new()).unwrap();
        let a = inv.add("A".into(), "X".into(), 1, 1.0).unwrap();
        let b = inv.add("B".into(), "X".into(), 2, 2.0).unwrap();

        let resolved = resolve_indexes(&inv, &[2, 1]).unwrap();
        assert_eq!(resolved, vec![(2, b.id), (1, a.id)]);
    }

    #[test]
    fn rejects_out_of_range_and_zero_indexes() {
        let mut inv = Inventory::open(InMemoryStore::new()).unwrap();
        inv.add("A".into(), "X".into(), 1, 1.0).unwrap();

        assert!(resolve_indexes(&inv, &[2]).is_err());
        assert!(resolve_indexes(&inv, &[0]).is_err());
    }
}
