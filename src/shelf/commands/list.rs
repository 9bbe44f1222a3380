use crate::commands::{CmdResult, DisplayItem};
use crate::error::Result;
use crate::filter::filter_items;
use crate::inventory::Inventory;
use crate::store::DataStore;
use uuid::Uuid;

use super::helpers::indexed_items;

pub fn run<S: DataStore>(
    inventory: &Inventory<S>,
    query: &str,
    category: Option<&str>,
) -> Result<CmdResult> {
    // Index over the full collection first so filtered listings print
    // positions that are still valid for edit/rm.
    let indexed = indexed_items(inventory);
    let matched: Vec<Uuid> = filter_items(inventory.items(), query, category)
        .into_iter()
        .map(|item| item.id)
        .collect();

    let listed: Vec<DisplayItem> = indexed
        .into_iter()
        .filter(|di| matched.contains(&di.item.id))
        .collect();

    Ok(CmdResult::default().with_listed_items(listed))
}
