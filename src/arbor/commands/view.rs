use crate::commands::{not_found, CmdResult};
use crate::error::Result;
use crate::store::TreeStore;

/// The detail view. An unknown id yields an empty listing and a warning.
pub fn run<S: TreeStore>(store: &S, id: &str) -> Result<CmdResult> {
    Ok(match store.find_by_id(id) {
        Some(tree) => CmdResult::default().with_listed_trees(vec![tree]),
        None => CmdResult::default().with_message(not_found(id)),
    })
}
