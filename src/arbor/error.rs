use crate::form::FormErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArborError {
    #[error("Invalid tree: {0}")]
    Validation(#[from] FormErrors),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ArborError>;
