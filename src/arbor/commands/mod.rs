use crate::config::ArborConfig;
use crate::model::Tree;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod list;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub struct ArborPaths {
    pub config_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_trees: Vec<Tree>,
    pub listed_trees: Vec<Tree>,
    pub config: Option<ArborConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_trees(mut self, trees: Vec<Tree>) -> Self {
        self.affected_trees = trees;
        self
    }

    pub fn with_listed_trees(mut self, trees: Vec<Tree>) -> Self {
        self.listed_trees = trees;
        self
    }

    pub fn with_config(mut self, config: ArborConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}

pub(crate) fn not_found(id: &str) -> CmdMessage {
    CmdMessage::warning(format!("Tree not found: {}", id))
}
