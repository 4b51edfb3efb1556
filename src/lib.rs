//! url-value - a URL value object
//!
//! Parses a URL into its eight components (scheme, user, pass, host, port,
//! path, query, fragment), lets callers edit query variables and read path
//! segments, and serializes the result back to a string. Static helpers cover
//! scheme detection for the current request, query stripping and assembling
//! URLs and paths from parts.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod utils;

// Re-export commonly used items
pub use config::RequestContext;
pub use error::{Error, Result};
pub use logging::{
    init_logger, init_logger_with_config, init_logger_with_env, init_logger_with_level, log_debug,
    log_error, log_info, log_trace, log_warning,
};
pub use models::{QueryValue, QueryVars, UrlParts, UrlValue};
pub use utils::{
    build_path, build_url, decode_query, encode_query, get_current_scheme, get_current_url,
    parse_url, parse_url_lenient, strip_query_string,
};
