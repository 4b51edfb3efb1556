//! Command-line interface for inspecting and composing URLs

pub mod compose;
pub mod current;
pub mod inspect;

pub use compose::*;
pub use current::*;
pub use inspect::*;

use anyhow::Result;
use clap::{Subcommand, ValueEnum};

#[derive(Debug, Subcommand)]
pub enum UrlCommand {
    /// Split a URL into components, query variables and path segments
    Parse(ParseArgs),

    /// Modify query variables and print the resulting URL
    Query(QueryArgs),

    /// Remove the query string, keeping any fragment
    Strip(StripArgs),

    /// Assemble a URL from components
    Build(BuildArgs),

    /// Join segments into a path
    Path(PathArgs),

    /// Show the scheme and URL of the current request
    Current(CurrentArgs),
}

impl UrlCommand {
    /// Run the command and return what should be printed
    pub fn execute(&self) -> Result<String> {
        match self {
            UrlCommand::Parse(args) => parse_command(args),
            UrlCommand::Query(args) => query_command(args),
            UrlCommand::Strip(args) => Ok(strip_command(args)),
            UrlCommand::Build(args) => Ok(build_command(args)),
            UrlCommand::Path(args) => Ok(path_command(args)),
            UrlCommand::Current(args) => current_command(args),
        }
    }
}

/// Output format for commands that report structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
