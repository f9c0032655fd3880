use dashmap::DashSet;
use rustc_hash::FxBuildHasher;

/// Thread-safe set of unique records, shared by all dedup workers.
///
/// Wraps a sharded-lock [`DashSet`] so that `insert` is an atomic
/// test-and-insert: when two workers race on the same record, exactly one
/// observes "new" and the other observes "seen". Uses FxHasher since input
/// is trusted (no hash-flooding concern).
#[derive(Debug)]
pub struct DedupSet {
    records: DashSet<String, FxBuildHasher>,
}

impl DedupSet {
    pub fn new() -> Self {
        Self {
            records: DashSet::with_hasher(FxBuildHasher),
        }
    }

    /// Inserts a record, returning `true` if it was not seen before.
    pub fn insert(&self, record: &str) -> bool {
        if self.records.contains(record) {
            return false;
        }
        self.records.insert(record.to_owned())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consumes the set, yielding every record exactly once in unspecified order.
    pub fn into_records(self) -> impl Iterator<Item = String> {
        self.records.into_iter()
    }
}

impl Default for DedupSet {
    fn default() -> Self {
        Self::new()
    }
}
