use crate::config::WRITE_BUFFER_SIZE;
use crate::dedup::DedupSet;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Drains the dedup set into `path`, one record per line.
///
/// Must only be called after the pipeline has joined its workers; the set is
/// consumed so nothing can mutate it mid-write. Output order follows the
/// set's iteration order unless `sort` is set, in which case records are
/// written in lexicographic order for run-to-run determinism. On a write
/// failure the partially written file is left as-is.
pub fn write_unique(set: DedupSet, path: &Path, sort: bool) -> Result<u64> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, file);

    let mut written = 0u64;
    if sort {
        let mut records: Vec<String> = set.into_records().collect();
        records.sort_unstable();
        for record in &records {
            writeln!(writer, "{}", record)
                .with_context(|| format!("Failed to write to: {}", path.display()))?;
            written += 1;
        }
    } else {
        for record in set.into_records() {
            writeln!(writer, "{}", record)
                .with_context(|| format!("Failed to write to: {}", path.display()))?;
            written += 1;
        }
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush output file: {}", path.display()))?;

    info!(records = written, path = %path.display(), "Wrote unique records");
    Ok(written)
}
