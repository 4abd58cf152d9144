//! Logging setup for the BatePapo binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified default log level.
///
/// Both the server library crate and the binary log at `default_log_level`
/// unless `RUST_LOG` is set, in which case the environment filter wins.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "batepapo-server")
/// * `default_log_level` - The default log level (e.g., "debug", "info")
///
/// # Examples
///
/// ```no_run
/// use batepapo_shared::logger::setup_logger;
///
/// setup_logger("batepapo-server", "info");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    let crate_name = binary_name.replace('-', "_");
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "{crate_name}={level},tower_http={level}",
                    level = default_log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
