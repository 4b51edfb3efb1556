//! Logging setup for the `urlv` binary and any host program embedding the crate

use log::{debug, error, info, trace, warn, LevelFilter};
use std::sync::Once;
use tracing::Level;
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

static INIT: Once = Once::new();

/// Initialize the global logger, filtering through `RUST_LOG`.
/// Subsequent calls (to any `init_logger*` function) are no-ops.
pub fn init_logger() {
    INIT.call_once(|| {
        FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_target(false)
            .with_level(true)
            .with_writer(std::io::stderr)
            .init();

        // LogTracer must come after the subscriber
        if let Err(e) = LogTracer::init() {
            eprintln!("Warning: Failed to initialize LogTracer: {:?}", e);
        }

        log::set_max_level(LevelFilter::Debug);
    });
}

/// Initialize logger with a fixed maximum level
pub fn init_logger_with_level(level: Level) {
    INIT.call_once(|| {
        FmtSubscriber::builder()
            .with_max_level(level)
            .with_target(false)
            .with_level(true)
            .with_writer(std::io::stderr)
            .init();

        if let Err(e) = LogTracer::init() {
            eprintln!("Warning: Failed to initialize LogTracer: {:?}", e);
        }

        log::set_max_level(level_filter_for(level));
    });
}

/// Initialize logger from the `RUST_LOG` environment variable (default `info`)
pub fn init_logger_with_env() {
    INIT.call_once(|| {
        let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let level = filter.parse::<LevelFilter>().unwrap_or(LevelFilter::Info);
        log::set_max_level(level);

        FmtSubscriber::builder()
            .with_env_filter(EnvFilter::new(filter))
            .with_target(false)
            .with_level(true)
            .with_writer(std::io::stderr)
            .init();

        if let Err(e) = LogTracer::init() {
            eprintln!("Warning: Failed to initialize LogTracer: {:?}", e);
        }
    });
}

/// Initialize logger from a level name such as `debug` or `warn`.
/// Unknown names fall back to `info`.
pub fn init_logger_with_config(log_level: &str) {
    init_logger_with_level(parse_level(log_level));
}

/// Map a level name onto a tracing level
pub fn parse_level(name: &str) -> Level {
    match name.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn level_filter_for(level: Level) -> LevelFilter {
    match level {
        Level::ERROR => LevelFilter::Error,
        Level::WARN => LevelFilter::Warn,
        Level::INFO => LevelFilter::Info,
        Level::DEBUG => LevelFilter::Debug,
        Level::TRACE => LevelFilter::Trace,
    }
}

/// Log an error message
pub fn log_error(message: &str) {
    error!("{}", message);
}

/// Log an info message
pub fn log_info(message: &str) {
    info!("{}", message);
}

/// Log a warning message
pub fn log_warning(message: &str) {
    warn!("{}", message);
}

/// Log a debug message
pub fn log_debug(message: &str) {
    debug!("{}", message);
}

/// Log a trace message
pub fn log_trace(message: &str) {
    trace!("{}", message);
}

/// Convenience macro for logging errors
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logging::log_error(&format!($($arg)*));
    };
}

/// Convenience macro for logging info messages
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::logging::log_info(&format!($($arg)*));
    };
}

/// Convenience macro for logging warning messages
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {
        $crate::logging::log_warning(&format!($($arg)*));
    };
}

/// Convenience macro for logging debug messages
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logging::log_debug(&format!($($arg)*));
    };
}

/// Convenience macro for logging trace messages
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {
        $crate::logging::log_trace(&format!($($arg)*));
    };
}
