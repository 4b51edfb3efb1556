//! `strip`, `build` and `path` commands

use crate::models::UrlParts;
use crate::utils::{build_path, build_url, strip_query_string};
use clap::Args;

#[derive(Debug, Args)]
pub struct StripArgs {
    /// URL to strip the query string from
    pub url: String,
}

#[derive(Debug, Args)]
pub struct BuildArgs {
    #[arg(long)]
    pub scheme: Option<String>,

    #[arg(long)]
    pub user: Option<String>,

    #[arg(long)]
    pub pass: Option<String>,

    #[arg(long)]
    pub host: Option<String>,

    /// Port, written exactly as given
    #[arg(long)]
    pub port: Option<String>,

    #[arg(long)]
    pub path: Option<String>,

    /// Query string without the leading `?`
    #[arg(long)]
    pub query: Option<String>,

    #[arg(long)]
    pub fragment: Option<String>,
}

#[derive(Debug, Args)]
pub struct PathArgs {
    /// Path segments, in order
    pub segments: Vec<String>,

    /// Append a trailing slash
    #[arg(long, default_value = "false")]
    pub trailing_slash: bool,
}

impl From<&BuildArgs> for UrlParts {
    fn from(args: &BuildArgs) -> Self {
        UrlParts {
            scheme: args.scheme.clone(),
            user: args.user.clone(),
            pass: args.pass.clone(),
            host: args.host.clone(),
            port: args.port.clone(),
            path: args.path.clone(),
            query: args.query.clone(),
            fragment: args.fragment.clone(),
        }
    }
}

pub fn strip_command(args: &StripArgs) -> String {
    strip_query_string(&args.url)
}

pub fn build_command(args: &BuildArgs) -> String {
    build_url(&UrlParts::from(args))
}

pub fn path_command(args: &PathArgs) -> String {
    build_path(&args.segments, args.trailing_slash)
}
