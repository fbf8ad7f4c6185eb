//! Compile endpoint specs into an immutable, path-keyed route table.

use crate::config::EndpointSpec;
use std::collections::HashMap;
use std::sync::Arc;

/// One compiled route. Owns its query text and field mapping outright so the
/// entry stays valid independent of the specs it was compiled from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: String,
    pub query: String,
    /// API field -> DB column, in declared order.
    pub mapping: Vec<(String, String)>,
}

/// The complete set of active routes. Built fully off to the side, then
/// published as one unit; never mutated afterwards.
#[derive(Debug, Default)]
pub struct RouteTable {
    entries: HashMap<String, Arc<RouteEntry>>,
    order: Vec<String>,
}

impl RouteTable {
    pub fn get(&self, path: &str) -> Option<&Arc<RouteEntry>> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-insertion order (stable across reloads of the same
    /// document, used by introspection output).
    pub fn iter(&self) -> impl Iterator<Item = &Arc<RouteEntry>> {
        self.order.iter().filter_map(|p| self.entries.get(p))
    }
}

/// Pure compilation pass: each spec becomes a self-contained entry. When two
/// specs share a path the later one replaces the earlier one's entry.
pub fn compile(specs: Vec<EndpointSpec>) -> RouteTable {
    let mut table = RouteTable::default();
    for spec in specs {
        let entry = Arc::new(RouteEntry {
            path: spec.path.clone(),
            query: spec.query,
            mapping: spec.mapping,
        });
        if table.entries.insert(spec.path.clone(), entry).is_none() {
            table.order.push(spec.path);
        }
    }
    table
}
