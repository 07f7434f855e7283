//! Load an index file and write it straight back out, for checking that the
//! on-disk format survives a round trip.

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt};
use tse_core::persist::{load_index, save_index};

const EXIT_UNREADABLE: u8 = 3;
const EXIT_UNWRITABLE: u8 = 4;

#[derive(Parser)]
#[command(name = "indextest")]
#[command(about = "Load an index and save it again", long_about = None)]
struct Cli {
    old_index_filename: String,
    new_index_filename: String,
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

    let index = match load_index(&cli.old_index_filename) {
        Ok(index) => index,
        Err(e) => {
            eprintln!("indextest: {e:#}");
            return ExitCode::from(EXIT_UNREADABLE);
        }
    };
    if let Err(e) = save_index(&index, &cli.new_index_filename) {
        eprintln!("indextest: {e:#}");
        return ExitCode::from(EXIT_UNWRITABLE);
    }
    ExitCode::SUCCESS
}
