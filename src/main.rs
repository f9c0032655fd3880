use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;
use uniqmail::pipeline::DedupPipeline;
use uniqmail::writer;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "uniqmail")]
#[command(about = "Remove duplicate addresses from a newline-delimited email list")]
struct Cli {
    /// Path to the input email list
    #[arg(short, long)]
    input: PathBuf,

    /// Path for the deduplicated output file (created or truncated)
    #[arg(short, long)]
    output: PathBuf,

    /// Number of concurrent dedup workers
    #[arg(long, default_value_t = uniqmail::config::WORKER_COUNT)]
    workers: usize,

    /// Capacity of the reader-to-worker queue (bounds peak memory)
    #[arg(long, default_value_t = uniqmail::config::QUEUE_CAPACITY)]
    queue_capacity: usize,

    /// Sort the output lexicographically for run-to-run determinism
    #[arg(long)]
    sort: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(cli: Cli) -> Result<()> {
    info!("Opening file: {}", cli.input.display());
    let file = File::open(&cli.input)
        .with_context(|| format!("Failed to open input file: {}", cli.input.display()))?;
    let reader = BufReader::new(file);

    let start = Instant::now();
    let run = DedupPipeline::new(cli.workers, cli.queue_capacity).run(reader)?;
    let dedup_duration = start.elapsed();

    let total = run.total();
    let unique = run.unique();
    let duplicates = run.duplicates();
    let blanks = run.blanks();

    info!("Writing unique emails to {}", cli.output.display());
    let start_writing = Instant::now();
    writer::write_unique(run.set, &cli.output, cli.sort)?;
    let writing_duration = start_writing.elapsed();

    println!();
    println!("=== Summary ===");
    println!("Dedup time:         {:.2}s", dedup_duration.as_secs_f64());
    println!("Write time:         {:.2}s", writing_duration.as_secs_f64());
    println!(
        "Total time:         {:.2}s",
        (dedup_duration + writing_duration).as_secs_f64()
    );
    println!();
    println!("Blank lines discarded: {}", blanks);
    println!(
        "Total Emails Processed: {}, Unique Emails: {}, Duplicates Found: {}",
        total, unique, duplicates
    );

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    match run(cli) {
        Ok(()) => {
            info!("Completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error: {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
