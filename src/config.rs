/// Number of concurrent dedup workers
pub const WORKER_COUNT: usize = 8;

/// Capacity of the bounded line queue between reader and workers
pub const QUEUE_CAPACITY: usize = 10_000;

/// Progress update interval (report every N lines read)
pub const PROGRESS_INTERVAL: u64 = 100_000;

/// Buffer size for the output writer
pub const WRITE_BUFFER_SIZE: usize = 256 * 1024;
