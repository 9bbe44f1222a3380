use crate::commands::{CmdMessage, CmdResult};
use crate::csv;
use crate::error::{Result, ShelfError};
use crate::inventory::Inventory;
use crate::store::DataStore;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub fn run<S: DataStore>(inventory: &Inventory<S>, output: &Path) -> Result<CmdResult> {
    let items = inventory.items();
    let text = csv::encode(items);

    let mut file = File::create(output).map_err(ShelfError::Io)?;
    file.write_all(text.as_bytes()).map_err(ShelfError::Io)?;

    let mut result = CmdResult::default().with_export_path(output.to_path_buf());
    if items.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Exported empty inventory to {}",
            output.display()
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Exported {} items to {}",
            items.len(),
            output.display()
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, ItemDraft};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn writes_header_and_rows_to_the_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("inventory.csv");

        let mut inv = Inventory::open(InMemoryStore::new()).unwrap();
        add::run(
            &mut inv,
            ItemDraft::new("Bolt".into(), "Hardware".into(), 10, 1.5),
        )
        .unwrap();

        let result = run(&inv, &out).unwrap();
        assert_eq!(result.export_path.as_deref(), Some(out.as_path()));

        let written = std::fs::read_to_string(&out).unwrap();
        assert_eq!(written, "Name,Category,Quantity,Price\nBolt,Hardware,10,1.50");
    }

    #[test]
    fn empty_inventory_still_writes_the_header() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("inventory.csv");

        let inv = Inventory::open(InMemoryStore::new()).unwrap();
        run(&inv, &out).unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        assert_eq!(written, "Name,Category,Quantity,Price");
    }

    #[test]
    fn rewrites_unconditionally_even_when_nothing_changed() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("inventory.csv");

        let mut inv = Inventory::open(InMemoryStore::new()).unwrap();
        add::run(&mut inv, ItemDraft::new("A".into(), "X".into(), 1, 1.0)).unwrap();

        run(&inv, &out).unwrap();
        std::fs::write(&out, "tampered").unwrap();
        run(&inv, &out).unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        assert!(written.starts_with("Name,Category,Quantity,Price"));
    }
}
