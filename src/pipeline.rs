use crate::config::{PROGRESS_INTERVAL, QUEUE_CAPACITY, WORKER_COUNT};
use crate::dedup::DedupSet;
use crate::stats::DedupStats;
use anyhow::{Context, Result};
use crossbeam_channel::{bounded, Receiver, Sender};
use indicatif::ProgressBar;
use std::io::BufRead;
use std::thread;
use tracing::{debug, info};

/// Coordinator for one dedup run.
///
/// Owns the tunables; each call to [`run`](Self::run) creates fresh state (set
/// and counters), wires the reader to a fixed worker pool through a bounded
/// channel, and blocks until every worker has joined before handing the
/// populated set back. The channel bound is what caps in-flight memory: when
/// the queue is full the reader blocks until a worker frees a slot.
pub struct DedupPipeline {
    workers: usize,
    queue_capacity: usize,
}

impl DedupPipeline {
    pub fn new(workers: usize, queue_capacity: usize) -> Self {
        Self {
            workers: workers.max(1),
            queue_capacity: queue_capacity.max(1),
        }
    }

    /// Consumes `reader` line by line and dedups the records concurrently.
    ///
    /// Returns only after the reader is exhausted and all workers have
    /// terminated, so the returned set is fully populated and stable. A read
    /// failure mid-stream aborts the run: the channel closes, workers drain
    /// what was queued and exit, and the error propagates.
    pub fn run<R: BufRead + Send>(&self, reader: R) -> Result<DedupRun> {
        let set = DedupSet::new();
        let stats = DedupStats::new();
        let (sender, receiver) = bounded::<String>(self.queue_capacity);

        info!(
            workers = self.workers,
            queue_capacity = self.queue_capacity,
            "Starting dedup pipeline"
        );

        let read_result = thread::scope(|scope| {
            for worker_id in 0..self.workers {
                let receiver = receiver.clone();
                let set = &set;
                let stats = &stats;
                scope.spawn(move || worker_loop(worker_id, receiver, set, stats));
            }
            drop(receiver);

            let producer = scope.spawn(|| read_lines(reader, sender, &stats));

            // Scope exit joins the workers; this is the barrier that
            // guarantees the set is final before the writer runs.
            producer.join().expect("reader thread panicked")
        });
        read_result?;

        let unique = set.len() as u64;
        info!(
            total = stats.total(),
            unique,
            duplicates = stats.duplicates(unique),
            blanks = stats.blanks(),
            "Dedup pass complete"
        );

        Ok(DedupRun { set, stats })
    }
}

impl Default for DedupPipeline {
    fn default() -> Self {
        Self::new(WORKER_COUNT, QUEUE_CAPACITY)
    }
}

/// Result of a completed pipeline run: the unique records and the counters.
#[derive(Debug)]
pub struct DedupRun {
    pub set: DedupSet,
    pub stats: DedupStats,
}

impl DedupRun {
    pub fn total(&self) -> u64 {
        self.stats.total()
    }

    pub fn unique(&self) -> u64 {
        self.set.len() as u64
    }

    pub fn duplicates(&self) -> u64 {
        self.stats.duplicates(self.unique())
    }

    pub fn blanks(&self) -> u64 {
        self.stats.blanks()
    }
}

/// Reader loop: enqueues every line in file order and reports progress.
///
/// Dropping `sender` at return is the single termination signal the workers
/// wait on; they keep draining until the queue is both closed and empty.
fn read_lines<R: BufRead>(reader: R, sender: Sender<String>, stats: &DedupStats) -> Result<()> {
    let pb = ProgressBar::new_spinner();

    for line in reader.lines() {
        let line = line.context("Failed to read line from input file")?;
        stats.inc_lines();

        let total = stats.total();
        if total % PROGRESS_INTERVAL == 0 {
            pb.set_message(format!(
                "Processed: {} emails, Duplicates: {}",
                total,
                stats.hits()
            ));
            pb.tick();
        }

        if sender.send(line).is_err() {
            // Receivers only disappear if the worker pool panicked.
            anyhow::bail!("Dedup workers shut down unexpectedly");
        }
    }

    pb.finish_and_clear();
    Ok(())
}

/// Worker loop: trim, discard blanks, test-and-insert into the shared set.
fn worker_loop(worker_id: usize, receiver: Receiver<String>, set: &DedupSet, stats: &DedupStats) {
    let mut consumed = 0u64;

    for line in receiver.iter() {
        consumed += 1;
        let record = line.trim();
        if record.is_empty() {
            stats.inc_blanks();
            continue;
        }
        if !set.insert(record) {
            stats.inc_duplicate_hits();
        }
    }

    debug!(worker_id, consumed, "Worker finished");
}
