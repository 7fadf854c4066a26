//! fix-sql-queries - Main entry point.
//!
//! Rewrites `OFFSET @offset ROWS FETCH NEXT @limit ROWS ONLY` pagination in
//! the stored `sqlQuery` fields of a JSON document into `SELECT TOP (@limit)`.

use fix_sql_queries::config::Config;
use fix_sql_queries::output;
use fix_sql_queries::rewriter::DocumentRewriter;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr; stdout carries the run result.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if config.json_logs {
        subscriber
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

fn main() -> ExitCode {
    let config = Config::parse_args();

    init_tracing(&config);

    info!(
        path = %config.path.display(),
        dry_run = config.dry_run,
        "Starting fix-sql-queries v{}",
        env!("CARGO_PKG_VERSION")
    );

    let rewriter = DocumentRewriter::new(&config.path).dry_run(config.dry_run);

    let summary = match rewriter.run() {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: {}", e.suggestion());
            return ExitCode::FAILURE;
        }
    };

    match output::render(&summary, config.output) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    }

    info!(
        changed = summary.changed(),
        saved = summary.saved,
        "Run complete"
    );
    ExitCode::SUCCESS
}
