use crate::commands::{not_found, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::TreeStore;

/// Removes the tree `id`. Confirmation is the caller's job.
pub fn run<S: TreeStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let Some(tree) = store.find_by_id(id) else {
        return Ok(CmdResult::default().with_message(not_found(id)));
    };

    store.remove(id);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Tree deleted ({}): {}",
        id,
        tree.display_name()
    )));
    Ok(result.with_affected_trees(vec![tree]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{list, MessageLevel};
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_in_place() {
        let mut store = StoreFixture::new().with_demo_trees().store;
        let result = run(&mut store, "2").unwrap();

        assert_eq!(result.messages[0].content, "Tree deleted (2): Manguier");
        let listed = list::run(&store, None).unwrap().listed_trees;
        let ids: Vec<_> = listed.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn second_delete_is_a_warning() {
        let mut store = StoreFixture::new().with_demo_trees().store;
        run(&mut store, "2").unwrap();
        let result = run(&mut store, "2").unwrap();

        assert_eq!(store.len(), 2);
        assert!(result.affected_trees.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }
}
