use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Installs the global `tracing` subscriber
///
/// The level is read from `LOGLEVEL` (`DEBUG`, `INFO`, `WARN`, `ERROR`, `TRACE`)
/// and defaults to `INFO`. Calling it more than once is a no-op.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = log_level_from_env();
        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Log level set to: {}", level);
        }
    });
}

/// Resolves the log level from `LOGLEVEL`
#[must_use]
pub fn log_level_from_env() -> Level {
    let log_level = env::var("LOGLEVEL")
        .unwrap_or_else(|_| "INFO".to_string())
        .to_uppercase();

    match log_level.as_str() {
        "DEBUG" => Level::DEBUG,
        "ERROR" => Level::ERROR,
        "WARN" => Level::WARN,
        "TRACE" => Level::TRACE,
        _ => Level::INFO,
    }
}
