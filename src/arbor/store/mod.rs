//! # Storage Layer
//!
//! The [`TreeStore`] trait is the registry's repository contract. Everything
//! above it (commands, API, CLI) reads snapshots and calls these five
//! operations; nothing else touches the collection.
//!
//! ## Contract
//!
//! - The collection is ordered. `add` appends, `update` replaces in place,
//!   `remove` deletes in place and later records shift down.
//! - Ids are caller-supplied and not required to be unique. `find_by_id`,
//!   `update` and `remove` act on the **first** record whose id matches.
//! - A missing id is not an error: `find_by_id` returns `None`, `update` and
//!   `remove` do nothing.
//! - `update` stores the given tree verbatim, so it may change the record's id.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the registry itself, a `Vec` owned for the
//!   lifetime of the process.
//! - [`shared::SharedStore`]: wraps any store in a mutex so one registry can
//!   be handed to several threads. Writes are last-write-wins.

use crate::model::Tree;

pub mod memory;
pub mod shared;

pub trait TreeStore {
    /// Every tree, in collection order.
    fn list(&self) -> Vec<Tree>;

    /// First tree whose id equals `id` exactly.
    fn find_by_id(&self, id: &str) -> Option<Tree>;

    /// Append a tree. No duplicate-id check.
    fn add(&mut self, tree: Tree);

    /// Replace the first tree with id `id` by `tree`, keeping its position.
    fn update(&mut self, id: &str, tree: Tree);

    /// Remove the first tree with id `id`.
    fn remove(&mut self, id: &str);

    /// Trees whose planter name contains `term`, ignoring case.
    ///
    /// A blank term matches every tree.
    fn search_by_planter(&self, term: &str) -> Vec<Tree> {
        filter_by_planter(self.list(), term)
    }
}

/// Keeps the trees whose planter name contains `term` (trimmed, case-folded).
///
/// Trees without a planter never match a non-blank term. Order is kept.
pub fn filter_by_planter(trees: Vec<Tree>, term: &str) -> Vec<Tree> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return trees;
    }

    trees
        .into_iter()
        .filter(|tree| {
            tree.planter_name
                .as_deref()
                .is_some_and(|planter| planter.to_lowercase().contains(&term))
        })
        .collect()
}
