use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::DataStore;

use super::helpers::resolve_indexes;

pub fn run<S: DataStore>(inventory: &mut Inventory<S>, indexes: &[usize]) -> Result<CmdResult> {
    let resolved = resolve_indexes(inventory, indexes)?;
    let mut result = CmdResult::default();

    for (index, id) in resolved {
        let Some(item) = inventory.get(id).cloned() else {
            // Duplicate index in the same batch; already gone.
            continue;
        };
        inventory.remove(id)?;
        result.add_message(CmdMessage::success(format!(
            "Removed ({}): {}",
            index, item.name
        )));
        result.affected_items.push(item);
    }

    Ok(result)
}
