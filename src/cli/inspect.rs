//! `parse` and `query` commands

use super::OutputFormat;
use crate::models::{QueryValue, QueryVars, UrlParts, UrlValue};
use anyhow::{anyhow, Context, Result};
use clap::Args;
use serde::Serialize;
use std::fmt::Write;
use tracing::debug;

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// URL to parse
    pub url: String,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Fail instead of reporting empty components when the URL is rejected
    #[arg(long, default_value = "false")]
    pub strict: bool,
}

#[derive(Debug, Args)]
pub struct QueryArgs {
    /// URL to modify
    pub url: String,

    /// Set a scalar variable (name=value); repeatable
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,

    /// Set an array variable (name=v1,v2); repeatable
    #[arg(long = "set-array", value_name = "NAME=V1,V2")]
    pub set_array: Vec<String>,

    /// Remove a variable; repeatable
    #[arg(long = "remove", value_name = "NAME")]
    pub remove: Vec<String>,
}

/// Everything `parse` reports about a URL
#[derive(Debug, Serialize)]
pub struct UrlReport {
    pub url: String,
    pub components: UrlParts,
    pub query_vars: QueryVars,
    pub segments: Vec<String>,
    pub trailing_slash: bool,
}

impl From<&UrlValue> for UrlReport {
    fn from(url: &UrlValue) -> Self {
        Self {
            url: url.to_string(),
            components: url.to_array(),
            query_vars: url.get_query_vars().clone(),
            segments: url.get_segments(),
            trailing_slash: url.has_trailing_slash(),
        }
    }
}

pub fn parse_command(args: &ParseArgs) -> Result<String> {
    let url = if args.strict {
        UrlValue::parse(&args.url).with_context(|| format!("Failed to parse '{}'", args.url))?
    } else {
        UrlValue::new(&args.url)
    };
    let report = UrlReport::from(&url);

    match args.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => Ok(render_text(&report)),
    }
}

fn render_text(report: &UrlReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "url: {}", report.url);
    for (name, value) in report.components.iter() {
        let _ = writeln!(out, "{}: {}", name, value);
    }
    for (name, value) in &report.query_vars {
        let _ = writeln!(out, "query[{}]: {}", name, value);
    }
    let _ = writeln!(out, "segments: {}", report.segments.join(", "));
    let _ = write!(out, "trailing_slash: {}", report.trailing_slash);
    out
}

pub fn query_command(args: &QueryArgs) -> Result<String> {
    let mut url = UrlValue::new(&args.url);

    for pair in &args.set {
        let (name, value) = split_assignment(pair)?;
        debug!("Setting {}={}", name, value);
        url.add_query_var(name, value);
    }

    for pair in &args.set_array {
        let (name, values) = split_assignment(pair)?;
        let values: Vec<&str> = values.split(',').filter(|v| !v.is_empty()).collect();
        debug!("Setting {}[]={:?}", name, values);
        url.add_query_var(name, QueryValue::from(values));
    }

    for name in &args.remove {
        url.remove_query_var(name);
    }

    Ok(url.to_string())
}

fn split_assignment(pair: &str) -> Result<(&str, &str)> {
    match pair.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name, value)),
        _ => Err(anyhow!("Expected NAME=VALUE, got '{}'", pair)),
    }
}
