pub use tracing;

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => ($crate::logging::tracing::error!($($arg)+))
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)+) => ($crate::logging::tracing::warn!($($arg)+))
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => ($crate::logging::tracing::info!($($arg)+))
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => ($crate::logging::tracing::debug!($($arg)+))
}

#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)+) => ($crate::logging::tracing::trace!($($arg)+))
}

/// Installs a global subscriber writing to stderr, filtered by the directives
/// found in `env_var` (e.g. `UTOS_LOG=debug`). Logging is off when the
/// variable is not set.
///
/// Calling this more than once is harmless; only the first call installs.
#[cfg(feature = "logging_init")]
pub fn init_logging(env_var: &str) {
    use std::string::ToString;
    use tracing_subscriber::{
        filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::OFF.into())
        .with_env_var(env_var.to_string())
        .from_env_lossy();

    let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
