use super::TreeStore;
use crate::model::{demo_trees, Tree};
use tracing::{debug, info};

/// The registry: an ordered list of trees living as long as the process.
/// Does NOT persist data.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    trees: Vec<Tree>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trees(trees: Vec<Tree>) -> Self {
        Self { trees }
    }

    /// A store holding the demo registry.
    pub fn seeded() -> Self {
        Self::with_trees(demo_trees())
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.trees.iter().position(|tree| tree.id == id)
    }
}

impl TreeStore for InMemoryStore {
    fn list(&self) -> Vec<Tree> {
        self.trees.clone()
    }

    fn find_by_id(&self, id: &str) -> Option<Tree> {
        let found = self.trees.iter().find(|tree| tree.id == id).cloned();
        debug!(id, found = found.is_some(), "find tree");
        found
    }

    fn add(&mut self, tree: Tree) {
        info!(id = %tree.id, "add tree");
        self.trees.push(tree);
    }

    fn update(&mut self, id: &str, tree: Tree) {
        match self.position(id) {
            Some(index) => {
                info!(id, new_id = %tree.id, index, "update tree");
                self.trees[index] = tree;
            }
            None => debug!(id, "update skipped, no such tree"),
        }
    }

    fn remove(&mut self, id: &str) {
        match self.position(id) {
            Some(index) => {
                info!(id, index, "remove tree");
                self.trees.remove(index);
            }
            None => debug!(id, "remove skipped, no such tree"),
        }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_trees(mut self, count: usize) -> Self {
            for i in 0..count {
                let tree = Tree::new(
                    format!("t{}", i + 1),
                    format!("Species {}", i + 1),
                    "2024-01-01",
                )
                .with_planter(format!("Planter {}", i + 1));
                self.store.add(tree);
            }
            self
        }

        pub fn with_tree(mut self, id: &str, planter: Option<&str>) -> Self {
            let mut tree = Tree::new(id, "Quercus robur", "2024-03-15");
            tree.planter_name = planter.map(str::to_string);
            self.store.add(tree);
            self
        }

        /// The three demo trees: ids "1", "2", "3".
        pub fn with_demo_trees(mut self) -> Self {
            for tree in demo_trees() {
                self.store.add(tree);
            }
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    fn ids(trees: &[Tree]) -> Vec<&str> {
        trees.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn find_unknown_id_is_none() {
        let store = StoreFixture::new().with_trees(3).store;
        assert!(store.find_by_id("nope").is_none());
        assert!(InMemoryStore::new().find_by_id("").is_none());
    }

    #[test]
    fn add_appends_and_is_findable() {
        let mut store = StoreFixture::new().with_trees(2).store;
        let tree = Tree::new("new", "Ficus benjamina", "2024-01-10").with_planter("Jean");

        store.add(tree.clone());

        assert_eq!(store.len(), 3);
        assert_eq!(store.find_by_id("new"), Some(tree));
        assert_eq!(ids(&store.list()), vec!["t1", "t2", "new"]);
    }

    #[test]
    fn add_does_not_reject_duplicate_ids() {
        let mut store = StoreFixture::new().with_tree("a", Some("First")).store;
        store.add(Tree::new("a", "Ficus", "2024-01-10").with_planter("Second"));

        assert_eq!(store.len(), 2);
        let found = store.find_by_id("a").unwrap();
        assert_eq!(found.planter_name.as_deref(), Some("First"));
    }

    #[test]
    fn update_replaces_in_place() {
        let mut store = StoreFixture::new().with_trees(3).store;
        let replacement = Tree::new("t2", "Mangifera indica", "2023-06-20");

        store.update("t2", replacement.clone());

        assert_eq!(store.len(), 3);
        assert_eq!(store.find_by_id("t2"), Some(replacement));
        assert_eq!(ids(&store.list()), vec!["t1", "t2", "t3"]);
    }

    #[test]
    fn update_can_change_the_id() {
        let mut store = StoreFixture::new().with_trees(3).store;
        store.update("t2", Tree::new("renamed", "Ficus", "2024-01-10"));

        assert!(store.find_by_id("t2").is_none());
        assert_eq!(ids(&store.list()), vec!["t1", "renamed", "t3"]);
    }

    #[test]
    fn update_unknown_id_is_a_no_op() {
        let mut store = StoreFixture::new().with_trees(2).store;
        let before = store.list();

        store.update("missing", Tree::new("missing", "Ficus", "2024-01-10"));

        assert_eq!(store.list(), before);
    }

    #[test]
    fn update_touches_first_match_only() {
        let mut store = StoreFixture::new()
            .with_tree("dup", Some("First"))
            .with_tree("dup", Some("Second"))
            .store;

        store.update("dup", Tree::new("dup", "Ficus", "2024-01-10"));

        let trees = store.list();
        assert_eq!(trees[0].species_scientific, "Ficus");
        assert_eq!(trees[1].planter_name.as_deref(), Some("Second"));
    }

    #[test]
    fn remove_deletes_once() {
        let mut store = StoreFixture::new().with_demo_trees().store;

        store.remove("2");
        assert_eq!(ids(&store.list()), vec!["1", "3"]);
        assert!(store.find_by_id("2").is_none());

        store.remove("2");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn remove_takes_first_duplicate() {
        let mut store = StoreFixture::new()
            .with_tree("dup", Some("First"))
            .with_tree("dup", Some("Second"))
            .store;

        store.remove("dup");

        let left = store.find_by_id("dup").unwrap();
        assert_eq!(left.planter_name.as_deref(), Some("Second"));
    }

    #[test]
    fn search_by_planter_on_demo_registry() {
        let store = InMemoryStore::seeded();
        assert_eq!(ids(&store.search_by_planter("rabemorasata")), vec!["1", "3"]);
        assert_eq!(ids(&store.search_by_planter("jean")), vec!["2"]);
        assert_eq!(ids(&store.search_by_planter("")), vec!["1", "2", "3"]);
    }

    #[test]
    fn search_skips_trees_without_planter() {
        let store = StoreFixture::new()
            .with_tree("a", None)
            .with_tree("b", Some("Jean Dupont"))
            .store;
        assert_eq!(ids(&store.search_by_planter("j")), vec!["b"]);
        assert_eq!(store.search_by_planter(" ").len(), 2);
    }
}
