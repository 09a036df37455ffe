use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, error::ErrorKind};

/// Count comma-separated alphanumeric tokens and report their positions
#[derive(Parser, Debug)]
#[command(name = "tokentally", version)]
struct Cli {
    /// Comma-separated token file to read
    #[arg(allow_hyphen_values = true)]
    input: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tokentally=warn")),
        )
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => {
            eprintln!("{}", Cli::command().render_usage());
            return ExitCode::from(1);
        }
    };

    match tokentally::tally_file(&cli.input).and_then(|report| report.render()) {
        Ok(rendered) => {
            println!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(path = %cli.input.display(), "tally failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
