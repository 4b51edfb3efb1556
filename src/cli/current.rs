//! `current` command

use crate::config::RequestContext;
use crate::models::UrlValue;
use crate::utils::get_current_scheme;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Args)]
pub struct CurrentArgs {
    /// YAML file describing the request; environment variables are read otherwise
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the host header
    #[arg(long)]
    pub host: Option<String>,

    /// Override the request target (path and query)
    #[arg(long)]
    pub request_uri: Option<String>,
}

impl CurrentArgs {
    /// Resolve the request context: file or environment, then overrides
    pub fn to_context(&self) -> Result<RequestContext> {
        let mut context = RequestContext::load_config(self.config.as_deref())
            .context("Failed to load request context")?;

        if let Some(host) = &self.host {
            context.host = Some(host.clone());
        }
        if let Some(request_uri) = &self.request_uri {
            context.request_uri = Some(request_uri.clone());
        }

        Ok(context)
    }
}

pub fn current_command(args: &CurrentArgs) -> Result<String> {
    let context = args.to_context()?;
    let scheme = get_current_scheme(&context);
    let url = UrlValue::from_context(&context);
    info!("Current request resolved as {} ({})", url, scheme);

    Ok(format!("scheme: {}\nurl: {}", scheme, url))
}
