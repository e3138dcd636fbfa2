use crate::commands::{ArborPaths, CmdMessage, CmdResult};
use crate::config::ArborConfig;
use crate::error::{ArborError, Result};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &ArborPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.config_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = ArborConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = ArborConfig::load(dir)?;
            let message = match config.get(&key) {
                Some(val) => CmdMessage::info(format!("{} = {}", key, val)),
                None => CmdMessage::error(format!("Unknown config key: {}", key)),
            };
            Ok(CmdResult::default().with_message(message))
        }
        ConfigAction::Set(key, value) => {
            let mut result = CmdResult::default();
            let mut config = match ArborConfig::load(dir) {
                Ok(config) => config,
                Err(ArborError::Serialization(e)) => {
                    result.add_message(CmdMessage::warning(format!(
                        "Replacing unreadable {}: {}",
                        ArborConfig::path(dir).display(),
                        e
                    )));
                    ArborConfig::default()
                }
                Err(e) => return Err(e),
            };
            match config.set(&key, &value) {
                Ok(()) => {}
                Err(ArborError::Config(e)) => {
                    return Ok(result.with_message(CmdMessage::error(e)));
                }
                Err(e) => return Err(e),
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            Ok(result
                .with_message(CmdMessage::success(format!("{} set to {}", key, display_val)))
                .with_config(config))
        }
    }
}
