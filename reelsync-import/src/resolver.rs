//! Run-scoped actor deduplication.

use std::sync::Arc;

use dashmap::DashMap;
use reelsync_core::Actor;

/// Hands out one shared `Actor` per upstream person id.
///
/// Many fetch workers credit the same person at once. `resolve` is an atomic
/// get-or-create on a sharded map: the first caller's factory builds the
/// actor and every later caller, concurrent or not, gets a clone of that
/// same `Arc`.
#[derive(Debug, Default)]
pub struct ActorRegistry {
    actors: DashMap<u64, Arc<Actor>>,
}

impl ActorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the actor for `source_id`, creating it with `factory` on first
    /// sighting. The factory runs at most once per id.
    pub fn resolve<F>(&self, source_id: u64, factory: F) -> Arc<Actor>
    where
        F: FnOnce() -> Actor,
    {
        self.actors
            .entry(source_id)
            .or_insert_with(|| Arc::new(factory()))
            .clone()
    }

    pub fn get(&self, source_id: u64) -> Option<Arc<Actor>> {
        self.actors.get(&source_id).map(|a| a.clone())
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// All actors, ordered by id.
    pub fn snapshot(&self) -> Vec<Arc<Actor>> {
        let mut actors: Vec<Arc<Actor>> = self.actors.iter().map(|e| e.value().clone()).collect();
        actors.sort_by_key(|a| a.source_id);
        actors
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Barrier;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn same_id_yields_same_instance() {
        let registry = ActorRegistry::new();
        let a = registry.resolve(7, || Actor::new(7, "Ana", None));
        let b = registry.resolve(7, || Actor::new(7, "Someone Else", None));
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(b.name, "Ana");
    }

    #[test]
    fn distinct_ids_yield_distinct_instances() {
        let registry = ActorRegistry::new();
        let a = registry.resolve(1, || Actor::new(1, "One", None));
        let b = registry.resolve(2, || Actor::new(2, "Two", None));
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn concurrent_first_sighting_builds_once() {
        const THREADS: usize = 16;
        let registry = Arc::new(ActorRegistry::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let barrier = Arc::new(Barrier::new(THREADS));

        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                let registry = registry.clone();
                let calls = calls.clone();
                let barrier = barrier.clone();
                std::thread::spawn(move || {
                    barrier.wait();
                    registry.resolve(42, || {
                        calls.fetch_add(1, Ordering::SeqCst);
                        Actor::new(42, format!("builder {i}"), None)
                    })
                })
            })
            .collect();

        let resolved: Vec<Arc<Actor>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(resolved.iter().all(|a| Arc::ptr_eq(a, &resolved[0])));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn snapshot_is_sorted_by_id() {
        let registry = ActorRegistry::new();
        for id in [30, 10, 20] {
            registry.resolve(id, || Actor::new(id, format!("actor {id}"), None));
        }
        let ids: Vec<u64> = registry.snapshot().iter().map(|a| a.source_id).collect();
        assert_eq!(ids, vec![10, 20, 30]);
    }
}
