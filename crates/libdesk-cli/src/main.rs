//! LibDesk CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

mod commands;
mod output;

use commands::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(e) = cli.execute().await {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Initialize logging from the `[logging]` section of the chosen config.
///
/// `serve` logs at the configured level; admin commands only surface
/// warnings. Logs go to stderr so `--format json` output stays parseable.
fn init_logging(cli: &Cli) {
    let logging = commands::load_config(&cli.config)
        .map(|c| c.logging)
        .unwrap_or_default();
    let level = if cli.is_serve() {
        logging.level.as_str()
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
