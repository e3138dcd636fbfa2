use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::TreeStore;

/// The listing view: trees matching `search` by planter, or all of them.
pub fn run<S: TreeStore>(store: &S, search: Option<&str>) -> Result<CmdResult> {
    let term = search.map(str::trim).filter(|t| !t.is_empty());

    let trees = match term {
        Some(term) => store.search_by_planter(term),
        None => store.list(),
    };

    let mut result = CmdResult::default();
    if trees.is_empty() {
        result.add_message(CmdMessage::info(if term.is_some() {
            "No trees match your search"
        } else {
            "No trees have been added yet"
        }));
    }

    Ok(result.with_listed_trees(trees))
}
