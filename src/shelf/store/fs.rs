use super::DataStore;
use crate::error::{Result, ShelfError};
use crate::model::Item;
use std::fs;
use std::path::{Path, PathBuf};

const DATA_FILENAME: &str = "inventory.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ShelfError::Io)?;
        }
        Ok(())
    }

    /// Rename an unparseable blob so the next save cannot overwrite it.
    /// Earlier set-aside copies are kept, not clobbered.
    fn set_aside(&self, path: &Path) -> Result<PathBuf> {
        let mut aside = path.with_extension("json.corrupt");
        let mut n = 1;
        while aside.exists() {
            aside = path.with_extension(format!("json.corrupt-{}", n));
            n += 1;
        }
        fs::rename(path, &aside).map_err(ShelfError::Io)?;
        Ok(aside)
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Item>> {
        let path = self.data_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path).map_err(ShelfError::Io)?;
        match serde_json::from_str(&content) {
            Ok(items) => Ok(items),
            Err(_) => {
                // Corrupt blob: start empty, but keep the old bytes around.
                self.set_aside(&path)?;
                Ok(Vec::new())
            }
        }
    }

    fn save(&mut self, items: &[Item]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(items).map_err(ShelfError::Serialization)?;
        fs::write(self.data_path(), content).map_err(ShelfError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_without_blob_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        let items = vec![
            Item::new("Bolt".into(), "Hardware".into(), 10, 1.5),
            Item::new("Washer".into(), "Hardware".into(), -3, 0.05),
        ];
        store.save(&items).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, items);
    }

    #[test]
    fn save_overwrites_previous_blob() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        store
            .save(&[Item::new("Bolt".into(), "Hardware".into(), 10, 1.5)])
            .unwrap();
        store.save(&[]).unwrap();

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn corrupt_blob_is_set_aside_and_load_yields_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());

        fs::create_dir_all(dir.path()).unwrap();
        fs::write(store.data_path(), "not json {{{").unwrap();

        assert!(store.load().unwrap().is_empty());
        assert!(!store.data_path().exists());
        assert!(dir.path().join("inventory.json.corrupt").exists());
    }

    #[test]
    fn a_second_corruption_does_not_clobber_the_first_set_aside_copy() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        fs::create_dir_all(dir.path()).unwrap();

        fs::write(store.data_path(), "first garbage").unwrap();
        store.load().unwrap();
        fs::write(store.data_path(), "second garbage").unwrap();
        store.load().unwrap();

        let first = dir.path().join("inventory.json.corrupt");
        let second = dir.path().join("inventory.json.corrupt-1");
        assert_eq!(fs::read_to_string(first).unwrap(), "first garbage");
        assert_eq!(fs::read_to_string(second).unwrap(), "second garbage");
    }
}
