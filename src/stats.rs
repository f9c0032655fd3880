use std::sync::atomic::{AtomicU64, Ordering};

/// Statistics collected during a dedup run
///
/// All counters are lock-free atomics so the reader thread and the worker
/// pool can update them concurrently without contention. The reported
/// duplicate total is derived as `lines_read - unique` after the workers
/// join rather than read from `duplicate_hits`, so blank lines and repeats
/// are accounted for exactly (see [`duplicates`](Self::duplicates)).
#[derive(Debug, Default)]
pub struct DedupStats {
    pub lines_read: AtomicU64,
    pub blank_lines: AtomicU64,
    pub duplicate_hits: AtomicU64,
}

impl DedupStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inc_lines(&self) {
        self.lines_read.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_blanks(&self) {
        self.blank_lines.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_duplicate_hits(&self) {
        self.duplicate_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Total lines read from the source, blanks and repeats included.
    pub fn total(&self) -> u64 {
        self.lines_read.load(Ordering::Relaxed)
    }

    /// Blank or whitespace-only lines discarded before dedup.
    pub fn blanks(&self) -> u64 {
        self.blank_lines.load(Ordering::Relaxed)
    }

    /// Records that hit an existing entry in the dedup set.
    pub fn hits(&self) -> u64 {
        self.duplicate_hits.load(Ordering::Relaxed)
    }

    /// Lines that did not survive dedup, given the final unique count.
    ///
    /// Derived as `total - unique` so the figure is exact even though the
    /// per-hit counter updates race with the reader; the two agree once the
    /// workers have joined (`duplicates == hits + blanks`).
    pub fn duplicates(&self, unique: u64) -> u64 {
        self.total().saturating_sub(unique)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_zero() {
        let stats = DedupStats::new();
        assert_eq!(stats.total(), 0);
        assert_eq!(stats.blanks(), 0);
        assert_eq!(stats.hits(), 0);
    }

    #[test]
    fn counters_accumulate() {
        let stats = DedupStats::new();
        stats.inc_lines();
        stats.inc_lines();
        stats.inc_lines();
        stats.inc_blanks();
        stats.inc_duplicate_hits();

        assert_eq!(stats.total(), 3);
        assert_eq!(stats.blanks(), 1);
        assert_eq!(stats.hits(), 1);
    }

    #[test]
    fn duplicates_derived_from_unique_count() {
        let stats = DedupStats::new();
        for _ in 0..6 {
            stats.inc_lines();
        }
        stats.inc_blanks();
        stats.inc_blanks();
        stats.inc_duplicate_hits();

        // 6 lines, 3 unique: the derived figure folds in blanks and hits.
        assert_eq!(stats.duplicates(3), 3);
        assert_eq!(stats.duplicates(3), stats.hits() + stats.blanks());
    }

    #[test]
    fn duplicates_never_underflows() {
        let stats = DedupStats::new();
        assert_eq!(stats.duplicates(5), 0);
    }
}
