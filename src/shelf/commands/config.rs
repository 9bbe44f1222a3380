use crate::commands::{CmdMessage, CmdResult};
use crate::config::ShelfConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetExportFile(String),
    SetAutosaveInterval(u64),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = ShelfConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll | ConfigAction::ShowKey(_) => {}
        ConfigAction::SetExportFile(name) => {
            config.set_export_file(&name);
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!("export-file set to {}", name)));
        }
        ConfigAction::SetAutosaveInterval(secs) => {
            config.set_autosave_interval(secs);
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!(
                "autosave-interval set to {}s",
                secs
            )));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_returns_current_config_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();

        assert_eq!(result.config, Some(ShelfConfig::default()));
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn set_persists_and_returns_the_new_value() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::SetExportFile("stock.csv".into())).unwrap();
        assert_eq!(result.config.unwrap().export_file, "stock.csv");

        let reloaded = ShelfConfig::load(dir.path()).unwrap();
        assert_eq!(reloaded.export_file, "stock.csv");
    }
}
