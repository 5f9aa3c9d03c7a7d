use crate::commands::{CmdMessage, CmdResult, ProtlogPaths};
use crate::config::ProtlogConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &ProtlogPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = ProtlogConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = ProtlogConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => {
                    result.add_message(CmdMessage::info(val));
                    Ok(result)
                }
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)));
                    Ok(result)
                }
            }
        }
        ConfigAction::Set(key, value) => {
            let mut config = ProtlogConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(dir)?;
            let mut result = CmdResult::default().with_config(config.clone());
            let display_val = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn paths_in(temp: &TempDir) -> ProtlogPaths {
        ProtlogPaths::new(temp.path().to_path_buf())
    }

    #[test]
    fn show_all_returns_defaults_for_fresh_dir() {
        let temp = TempDir::new().unwrap();
        let result = run(&paths_in(&temp), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(ProtlogConfig::default()));
    }

    #[test]
    fn set_persists_across_loads() {
        let temp = TempDir::new().unwrap();
        let paths = paths_in(&temp);

        run(
            &paths,
            ConfigAction::Set("fetch-url".into(), "http://localhost:9999".into()),
        )
        .unwrap();

        let result = run(&paths, ConfigAction::ShowKey("fetch-url".into())).unwrap();
        assert_eq!(result.messages[0].content, "http://localhost:9999");
    }

    #[test]
    fn unknown_key_yields_error_message_not_failure() {
        let temp = TempDir::new().unwrap();
        let result = run(
            &paths_in(&temp),
            ConfigAction::Set("bogus".into(), "x".into()),
        )
        .unwrap();
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Error
        ));
    }
}
