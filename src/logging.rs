//! File-based logging module for lyrics-tui
//!
//! This module sets up tracing-based logging that writes to a file instead of stdout,
//! since the application uses a TUI that occupies the terminal.

use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

const LOG_DIR: &str = ".logs";
const LOG_FILE_PREFIX: &str = "lyrics-tui";
const DEFAULT_FILTER: &str = "lyrics_tui=debug,reqwest=info,warn";

/// Initialize the logging system.
///
/// Logs are written to `.logs/lyrics-tui.YYYY-MM-DD.log` with daily rotation.
/// The log level can be controlled via the `RUST_LOG` environment variable.
///
/// Default log levels:
/// - `lyrics_tui` modules: DEBUG
/// - `reqwest`: INFO
/// - Other crates: WARN
pub fn init_logging() -> anyhow::Result<()> {
    let log_dir = Path::new(LOG_DIR);
    if !log_dir.exists() {
        std::fs::create_dir_all(log_dir)?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, LOG_DIR, LOG_FILE_PREFIX);

    // Non-blocking so a slow disk never stalls the draw loop
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // The guard flushes on drop; it has to live as long as the process
    Box::leak(Box::new(guard));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false) // No ANSI colors in log files
        .with_target(true) // Include module path
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::info!(dir = LOG_DIR, filter = DEFAULT_FILTER, "Logging initialized");

    Ok(())
}

/// Logs how a catalog call ended. An optional `field = |value| ...` pair
/// records one detail of the decoded body, such as the number of items.
#[macro_export]
macro_rules! log_api_result {
    ($operation:expr, $result:expr) => {
        match &$result {
            Ok(_) => tracing::info!(operation = $operation, "Catalog request succeeded"),
            Err(e) => tracing::error!(operation = $operation, error = %e, "Catalog request failed"),
        }
    };
    ($operation:expr, $result:expr, $field:ident = $extract:expr) => {
        match &$result {
            Ok(body) => tracing::info!(
                operation = $operation,
                $field = ($extract)(body),
                "Catalog request succeeded"
            ),
            Err(e) => tracing::error!(operation = $operation, error = %e, "Catalog request failed"),
        }
    };
}

/// Logs the start of a catalog call with the URL it hits
#[macro_export]
macro_rules! log_api_request {
    ($operation:expr, $url:expr) => {
        tracing::debug!(operation = $operation, url = %$url, "Catalog request started");
    };
    ($operation:expr, $url:expr, $($field:tt)*) => {
        tracing::debug!(operation = $operation, url = %$url, $($field)*, "Catalog request started");
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn macros_accept_plain_and_detailed_results() {
        let ok: Result<Vec<u8>, std::fmt::Error> = Ok(vec![1, 2, 3]);
        let err: Result<Vec<u8>, std::fmt::Error> = Err(std::fmt::Error);
        let url = "https://api.lyrics.ovh/suggest/hello";

        crate::log_api_request!("search", url);
        crate::log_api_request!("search", url, term = "hello");
        crate::log_api_result!("search", ok);
        crate::log_api_result!("search", ok, items = |body: &Vec<u8>| body.len());
        crate::log_api_result!("search", err, items = |body: &Vec<u8>| body.len());
    }
}
