//! # API Facade
//!
//! The single entry point for registry operations, whatever the UI. It
//! dispatches to `commands/*.rs` and returns `Result<CmdResult>`; it holds no
//! business logic and does no I/O of its own.
//!
//! `ArborApi<S: TreeStore>` owns its store. The binary builds one at start-up
//! and keeps it for the whole session; tests build their own, so no two tests
//! share a registry.

use crate::commands;
use crate::error::Result;
use crate::form::TreeForm;
use crate::model::Tree;
use crate::store::TreeStore;

pub struct ArborApi<S: TreeStore> {
    store: S,
    paths: commands::ArborPaths,
}

impl<S: TreeStore> ArborApi<S> {
    pub fn new(store: S, paths: commands::ArborPaths) -> Self {
        Self { store, paths }
    }

    pub fn create_tree(&mut self, form: &TreeForm) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, form)
    }

    pub fn list_trees(&self, search: Option<&str>) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, search)
    }

    pub fn search_trees(&self, term: &str) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, Some(term))
    }

    pub fn view_tree(&self, id: &str) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, id)
    }

    /// Raw lookup, for pre-filling edit forms.
    pub fn find_tree(&self, id: &str) -> Option<Tree> {
        self.store.find_by_id(id)
    }

    pub fn update_tree(&mut self, id: &str, form: &TreeForm) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, form)
    }

    pub fn delete_tree(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn paths(&self) -> &commands::ArborPaths {
        &self.paths
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{ArborPaths, CmdMessage, CmdResult, MessageLevel};
