use super::TreeStore;
use crate::model::Tree;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A cloneable handle to one store, shared between threads.
///
/// Every operation holds the lock for its whole duration. Concurrent updates
/// of the same tree resolve as last-write-wins.
pub struct SharedStore<S> {
    inner: Arc<Mutex<S>>,
}

impl<S> Clone for SharedStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: TreeStore> SharedStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, S> {
        // A panic mid-operation cannot leave the Vec half-written, so the data
        // behind a poisoned lock is still usable.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: TreeStore> TreeStore for SharedStore<S> {
    fn list(&self) -> Vec<Tree> {
        self.lock().list()
    }

    fn find_by_id(&self, id: &str) -> Option<Tree> {
        self.lock().find_by_id(id)
    }

    fn add(&mut self, tree: Tree) {
        self.lock().add(tree);
    }

    fn update(&mut self, id: &str, tree: Tree) {
        self.lock().update(id, tree);
    }

    fn remove(&mut self, id: &str) {
        self.lock().remove(id);
    }

    fn search_by_planter(&self, term: &str) -> Vec<Tree> {
        self.lock().search_by_planter(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use std::thread;

    #[test]
    fn clones_see_the_same_registry() {
        let mut a = SharedStore::new(InMemoryStore::seeded());
        let b = a.clone();

        a.remove("2");

        assert!(b.find_by_id("2").is_none());
        assert_eq!(b.list().len(), 2);
    }

    #[test]
    fn concurrent_adds_are_all_kept() {
        let store = SharedStore::new(InMemoryStore::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let mut handle = store.clone();
                thread::spawn(move || {
                    for j in 0..25 {
                        handle.add(Tree::new(format!("{i}-{j}"), "Ficus", "2024-01-10"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.list().len(), 200);
    }

    #[test]
    fn last_update_wins() {
        let mut store = SharedStore::new(InMemoryStore::seeded());
        let mut other = store.clone();

        store.update("1", Tree::new("1", "First write", "2024-03-15"));
        other.update("1", Tree::new("1", "Second write", "2024-03-15"));

        let tree = store.find_by_id("1").unwrap();
        assert_eq!(tree.species_scientific, "Second write");
    }
}
