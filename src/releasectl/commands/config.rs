use crate::commands::{CmdMessage, CmdResult};
use crate::config::ClientConfig;
use crate::error::Result;
use std::path::Path;

pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = ClientConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?.unwrap_or_default();
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(config_dir)?;
            let shown = config.get(&key)?.unwrap_or_default();
            result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_persists_and_show_reads_back() {
        let temp_dir = tempfile::tempdir().unwrap();

        run(
            temp_dir.path(),
            ConfigAction::Set("app".into(), "app-7".into()),
        )
        .unwrap();
        let result = run(temp_dir.path(), ConfigAction::ShowKey("app".into())).unwrap();

        assert_eq!(result.messages[0].content, "app = app-7");
        assert_eq!(result.config.unwrap().app_id.as_deref(), Some("app-7"));
    }

    #[test]
    fn show_all_returns_config_without_messages() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = run(temp_dir.path(), ConfigAction::ShowAll).unwrap();
        assert!(result.messages.is_empty());
        assert!(result.config.is_some());
    }

    #[test]
    fn setting_token_reports_masked_value() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = run(
            temp_dir.path(),
            ConfigAction::Set("api-token".into(), "very-secret-9876".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "api-token set to ****9876");
    }

    #[test]
    fn unknown_key_fails_without_writing() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(run(
            temp_dir.path(),
            ConfigAction::Set("nope".into(), "x".into())
        )
        .is_err());
        assert!(!temp_dir.path().join("config.json").exists());
    }
}
