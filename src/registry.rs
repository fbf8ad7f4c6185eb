//! Shared registry holding the active route table behind an atomic swap.
//!
//! Readers do a single atomic load; `publish` is a single atomic store. A
//! reader therefore sees either the fully-old or the fully-new table, never a
//! mix of generations. Old tables stay alive for in-flight requests that
//! already loaded them and are freed when the last reference drops.

use crate::table::{RouteEntry, RouteTable};
use arc_swap::ArcSwap;
use std::sync::Arc;

pub struct RouteRegistry {
    inner: ArcSwap<RouteTable>,
}

impl RouteRegistry {
    pub fn new(table: RouteTable) -> Self {
        Self {
            inner: ArcSwap::from_pointee(table),
        }
    }

    pub fn empty() -> Self {
        Self::new(RouteTable::default())
    }

    /// Atomically replace the active table. The previous table is not
    /// mutated, only dereferenced.
    pub fn publish(&self, table: RouteTable) {
        self.inner.store(Arc::new(table));
    }

    /// Lock-free point lookup; never blocks on a concurrent publish.
    pub fn lookup(&self, path: &str) -> Option<Arc<RouteEntry>> {
        self.inner.load().get(path).cloned()
    }

    /// The full active table, for introspection.
    pub fn snapshot(&self) -> Arc<RouteTable> {
        self.inner.load_full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EndpointSpec;
    use crate::table::compile;

    fn table(paths_and_queries: &[(&str, &str)]) -> RouteTable {
        compile(
            paths_and_queries
                .iter()
                .map(|(p, q)| EndpointSpec {
                    path: (*p).into(),
                    query: (*q).into(),
                    mapping: Vec::new(),
                })
                .collect(),
        )
    }

    #[test]
    fn lookup_hits_and_misses() {
        let registry = RouteRegistry::new(table(&[("/users", "SELECT 1")]));
        assert!(registry.lookup("/users").is_some());
        assert!(registry.lookup("/orders").is_none());
    }

    #[test]
    fn publish_fully_replaces_the_table() {
        let registry = RouteRegistry::new(table(&[("/old", "SELECT 1"), ("/kept", "SELECT 2")]));
        registry.publish(table(&[("/kept", "SELECT 9"), ("/new", "SELECT 3")]));

        assert!(registry.lookup("/old").is_none());
        assert!(registry.lookup("/new").is_some());
        assert_eq!(registry.lookup("/kept").unwrap().query, "SELECT 9");
    }

    #[test]
    fn captured_snapshot_survives_publish() {
        let registry = RouteRegistry::new(table(&[("/users", "SELECT 1")]));
        let before = registry.snapshot();
        registry.publish(table(&[("/orders", "SELECT 2")]));

        // In-flight reader keeps the complete old generation.
        assert!(before.contains("/users"));
        assert!(!before.contains("/orders"));
        assert!(registry.snapshot().contains("/orders"));
    }

    #[test]
    fn readers_never_observe_mixed_generations() {
        // Two generations with disjoint paths; every observed table must be
        // entirely one or the other.
        let registry = Arc::new(RouteRegistry::new(table(&[
            ("/gen1/a", "SELECT 1"),
            ("/gen1/b", "SELECT 1"),
        ])));

        let writer = {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                for i in 0..500 {
                    if i % 2 == 0 {
                        registry.publish(table(&[
                            ("/gen2/a", "SELECT 2"),
                            ("/gen2/b", "SELECT 2"),
                        ]));
                    } else {
                        registry.publish(table(&[
                            ("/gen1/a", "SELECT 1"),
                            ("/gen1/b", "SELECT 1"),
                        ]));
                    }
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    for _ in 0..2000 {
                        let snap = registry.snapshot();
                        let gen1 = snap.contains("/gen1/a");
                        assert_eq!(snap.contains("/gen1/b"), gen1);
                        assert_eq!(snap.contains("/gen2/a"), !gen1);
                        assert_eq!(snap.contains("/gen2/b"), !gen1);
                        assert_eq!(snap.len(), 2);
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for r in readers {
            r.join().unwrap();
        }
    }
}
