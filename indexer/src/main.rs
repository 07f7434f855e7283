use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::{EnvFilter, fmt};
use tse_core::builder::{build_index, MIN_WORD_LEN};
use tse_core::pagedir::PageDir;
use tse_core::persist::save_index;

/// Exit status when the index file cannot be written.
const EXIT_UNWRITABLE: u8 = 4;

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Build an inverted index from a crawler page directory", long_about = None)]
struct Cli {
    /// Directory of numbered pages produced by the crawler
    page_directory: String,
    /// File to write the index to
    index_filename: String,
    /// Words shorter than this are not indexed (never below 3)
    #[arg(long, default_value_t = MIN_WORD_LEN)]
    min_word_len: usize,
}

fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("indexer: {e:#}");
            ExitCode::from(EXIT_UNWRITABLE)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let start = Instant::now();
    let pages = PageDir::new(&cli.page_directory);
    let index = build_index(&pages, cli.min_word_len);
    save_index(&index, &cli.index_filename)?;

    let finished_at = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_default();
    tracing::info!(
        output = %cli.index_filename,
        terms = index.len(),
        took_s = start.elapsed().as_secs_f64(),
        finished_at = %finished_at,
        "index build complete"
    );
    Ok(())
}
