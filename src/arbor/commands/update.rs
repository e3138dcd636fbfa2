use crate::commands::{not_found, CmdMessage, CmdResult};
use crate::error::Result;
use crate::form::{FormMode, TreeForm};
use crate::store::TreeStore;

/// Replaces the tree `id` by the record the form describes.
///
/// The form's id becomes the stored id, so an edit may rename a tree.
pub fn run<S: TreeStore>(store: &mut S, id: &str, form: &TreeForm) -> Result<CmdResult> {
    let tree = form.validate(FormMode::Edit)?;

    if store.find_by_id(id).is_none() {
        return Ok(CmdResult::default().with_message(not_found(id)));
    }

    store.update(id, tree.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Tree updated ({}): {}",
        id,
        tree.display_name()
    )));
    if tree.id != id {
        result.add_message(CmdMessage::info(format!("Id changed: {} -> {}", id, tree.id)));
    }
    Ok(result.with_affected_trees(vec![tree]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn replaces_the_whole_record_in_place() {
        let mut store = StoreFixture::new().with_demo_trees().store;
        let mut form = TreeForm::from_tree(&store.find_by_id("2").unwrap());
        form.height_cm = "500".into();
        form.notes = String::new();

        run(&mut store, "2", &form).unwrap();

        let trees = store.list();
        assert_eq!(trees.len(), 3);
        assert_eq!(trees[1].id, "2");
        assert_eq!(trees[1].height_cm, Some(500.0));
        assert_eq!(trees[1].notes, None);
    }

    #[test]
    fn can_rename_a_tree() {
        let mut store = StoreFixture::new().with_demo_trees().store;
        let mut form = TreeForm::from_tree(&store.find_by_id("3").unwrap());
        form.id = "ficus-1".into();

        let result = run(&mut store, "3", &form).unwrap();

        assert!(store.find_by_id("3").is_none());
        assert_eq!(store.list()[2].id, "ficus-1");
        assert_eq!(result.messages[1].content, "Id changed: 3 -> ficus-1");
    }

    #[test]
    fn free_text_health_does_not_block_other_edits() {
        let mut tree = crate::model::Tree::new("x", "Ficus", "2024-01-10");
        tree.health_status = Some("Malade".into());
        let mut store = StoreFixture::new().store;
        store.add(tree);
        let mut form = TreeForm::from_tree(&store.find_by_id("x").unwrap());
        form.height_cm = "300".into();

        run(&mut store, "x", &form).unwrap();

        let stored = store.find_by_id("x").unwrap();
        assert_eq!(stored.height_cm, Some(300.0));
        assert_eq!(stored.health_status.as_deref(), Some("Malade"));
    }

    #[test]
    fn unknown_id_changes_nothing() {
        let mut store = StoreFixture::new().with_demo_trees().store;
        let before = store.list();
        let mut form = TreeForm::from_tree(&before[0]);
        form.id = "99".into();

        let result = run(&mut store, "99", &form).unwrap();

        assert_eq!(store.list(), before);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }
}
