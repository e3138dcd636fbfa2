use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::form::{FormMode, TreeForm};
use crate::store::TreeStore;

pub fn run<S: TreeStore>(store: &mut S, form: &TreeForm) -> Result<CmdResult> {
    let tree = form.validate(FormMode::Create)?;
    store.add(tree.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Tree added ({}): {}",
        tree.id,
        tree.display_name()
    )));
    Ok(result.with_affected_trees(vec![tree]))
}
