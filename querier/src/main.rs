use clap::Parser;
use querier::{OutputFormat, Querier};
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "querier")]
#[command(about = "Answer boolean keyword queries against a saved index", long_about = None)]
struct Args {
    /// Directory of numbered pages produced by the crawler
    page_directory: String,
    /// Index file written by the indexer
    index_filename: String,
    /// Output format for query results
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Never print the interactive prompt
    #[arg(long, default_value_t = false)]
    no_prompt: bool,
}

fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    let querier = match Querier::open(&args.page_directory, &args.index_filename) {
        Ok(q) => q,
        Err(e) => {
            eprintln!("querier: {e}");
            return ExitCode::from(e.exit_code());
        }
    };

    let stdin = io::stdin();
    let prompt = !args.no_prompt && stdin.is_terminal();
    let mut stdout = io::stdout().lock();
    match querier.run(stdin.lock(), &mut stdout, args.format, prompt) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("querier: {e}");
            ExitCode::FAILURE
        }
    }
}
