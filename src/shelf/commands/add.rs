use crate::commands::{CmdMessage, CmdResult, ItemDraft};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::DataStore;

pub fn run<S: DataStore>(inventory: &mut Inventory<S>, draft: ItemDraft) -> Result<CmdResult> {
    draft.validate()?;

    let item = inventory.add(draft.name, draft.category, draft.quantity, draft.price)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added {} ({} x {:.2})",
        item.name, item.quantity, item.price
    )));
    result.affected_items.push(item);
    Ok(result)
}
