//! Uniqmail: concurrent deduplication of newline-delimited email lists
//!
//! This crate reads an email list, removes duplicate addresses, and writes the
//! unique set to a new file, reporting total/unique/duplicate counts. The core
//! is a bounded producer/consumer pipeline:
//!
//! 1. **Reader** -- Streams the input file line by line, in file order, and
//!    feeds a bounded queue
//! 2. **Worker pool** -- A fixed set of threads that trim each record, drop
//!    blanks, and test-and-insert into a shared concurrent set
//! 3. **Writer** -- After the pool joins, drains the set to the output file
//!    through a buffered, explicitly flushed writer
//!
//! # Architecture
//!
//! - **Bounded handoff** -- A crossbeam channel with fixed capacity; a full
//!   queue blocks the reader, capping memory independent of input size
//! - **Concurrent dedup** -- DashSet gives an atomic "insert if absent"
//!   primitive, so racing workers cannot double-insert a record
//! - **Atomic counters** -- Lock-free statistics; the duplicate total is
//!   derived from the final unique count rather than a racy shared counter
//! - **Join barrier** -- Scoped threads guarantee the set is stable before
//!   the writer touches it
//!
//! # Key Modules
//!
//! - [`pipeline`] -- Coordinator, reader loop, and worker pool
//! - [`dedup`] -- Shared concurrent set with test-and-insert semantics
//! - [`writer`] -- Unique-record output with optional sorted order
//! - [`stats`] -- Thread-safe atomic counters for run metrics
//! - [`config`] -- Tunable constants (workers, queue capacity, intervals)
//!
//! # Example Usage
//!
//! ```bash
//! # Dedup a list with the default 8 workers
//! uniqmail -i emails.txt -o unique.txt
//!
//! # Deterministic (sorted) output, verbose logging
//! uniqmail -i emails.txt -o unique.txt --sort -v
//! ```

pub mod config;
pub mod dedup;
pub mod pipeline;
pub mod stats;
pub mod writer;
