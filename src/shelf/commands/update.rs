use crate::commands::{CmdMessage, CmdResult, ItemUpdate};
use crate::error::{Result, ShelfError};
use crate::inventory::Inventory;
use crate::store::DataStore;

use super::helpers::resolve_indexes;

pub fn run<S: DataStore>(
    inventory: &mut Inventory<S>,
    updates: &[ItemUpdate],
) -> Result<CmdResult> {
    if updates.is_empty() {
        return Ok(CmdResult::default());
    }

    // Resolve and validate the whole batch before touching anything, so an
    // error cannot leave a partially applied batch in the store.
    let indexes: Vec<usize> = updates.iter().map(|u| u.index).collect();
    let resolved = resolve_indexes(inventory, &indexes)?;
    for update in updates {
        update.draft.validate()?;
    }
    let mut result = CmdResult::default();

    for ((index, id), update) in resolved.into_iter().zip(updates.iter()) {
        let draft = update.draft.clone();
        inventory.update(id, draft.name, draft.category, draft.quantity, draft.price)?;

        let item = inventory
            .get(id)
            .cloned()
            .ok_or(ShelfError::ItemNotFound(id))?;
        result.add_message(CmdMessage::success(format!(
            "Updated ({}): {}",
            index, item.name
        )));
        result.affected_items.push(item);
    }

    Ok(result)
}
