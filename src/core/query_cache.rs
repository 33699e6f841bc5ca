//! Keyed cache of fetched data with explicit invalidation.
//!
//! Every key carries a generation counter. `invalidate` marks the entry stale
//! and bumps the generation; readers that track the generation refetch when it
//! moves, while the stale value stays available in the meantime.

use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(parts.into_iter().map(Into::into).collect())
    }

    /// Project detail (with tasks) shown on the board.
    pub fn edit_project(project_id: &str) -> Self {
        Self::new(["editProject", project_id])
    }

    pub fn user() -> Self {
        Self::new(["user"])
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Entry<V> {
    value: Option<V>,
    stale: bool,
    generation: u64,
}

impl<V> Default for Entry<V> {
    fn default() -> Self {
        Self { value: None, stale: true, generation: 0 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryCache<V> {
    entries: HashMap<QueryKey, Entry<V>>,
}

impl<V> Default for QueryCache<V> {
    fn default() -> Self {
        Self { entries: HashMap::new() }
    }
}

impl<V> QueryCache<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &QueryKey) -> Option<&V> {
        self.entries.get(key).and_then(|e| e.value.as_ref())
    }

    pub fn is_stale(&self, key: &QueryKey) -> bool {
        self.entries.get(key).map_or(true, |e| e.stale)
    }

    pub fn generation(&self, key: &QueryKey) -> u64 {
        self.entries.get(key).map_or(0, |e| e.generation)
    }

    /// Stores a fetched value. A value fetched for an older generation is
    /// dropped, since an invalidation happened while it was in flight.
    pub fn set(&mut self, key: QueryKey, generation: u64, value: V) -> bool {
        let entry = self.entries.entry(key).or_default();
        if entry.generation != generation {
            return false;
        }
        entry.value = Some(value);
        entry.stale = false;
        true
    }

    pub fn invalidate(&mut self, key: &QueryKey) {
        let entry = self.entries.entry(key.clone()).or_default();
        entry.stale = true;
        entry.generation += 1;
    }
}
