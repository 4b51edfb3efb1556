//! Request context settings
//!
//! A [`RequestContext`] carries the request signals that the no-argument
//! constructor and scheme detection read: the host header, the raw request
//! target, the HTTPS flag, the server port and the forwarded protocol.

use crate::error::{Error, Result};
use hyper::Request;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Environment variable holding the host header
pub const ENV_HOST: &str = "HTTP_HOST";
/// Environment variable holding the raw request target (path + query)
pub const ENV_REQUEST_URI: &str = "REQUEST_URI";
/// Environment variable holding the HTTPS flag
pub const ENV_HTTPS: &str = "HTTPS";
/// Environment variable holding the server port
pub const ENV_SERVER_PORT: &str = "SERVER_PORT";
/// Environment variable holding the forwarded protocol header
pub const ENV_FORWARDED_PROTO: &str = "HTTP_X_FORWARDED_PROTO";

/// Ambient signals of the request currently being served
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestContext {
    /// Host header value, possibly including a port (`example.com:8080`)
    pub host: Option<String>,

    /// Raw request target, path plus optional query (`/a/b?c=d`)
    pub request_uri: Option<String>,

    /// HTTPS flag as reported by the server (`on`, `1`, `off`, ...)
    pub https: Option<String>,

    /// Port the server accepted the request on
    pub server_port: Option<String>,

    /// `X-Forwarded-Proto` header set by a reverse proxy
    pub forwarded_proto: Option<String>,
}

impl RequestContext {
    /// Empty context: no signals present
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_request_uri(mut self, request_uri: impl Into<String>) -> Self {
        self.request_uri = Some(request_uri.into());
        self
    }

    pub fn with_https(mut self, https: impl Into<String>) -> Self {
        self.https = Some(https.into());
        self
    }

    pub fn with_server_port(mut self, port: impl Into<String>) -> Self {
        self.server_port = Some(port.into());
        self
    }

    pub fn with_forwarded_proto(mut self, proto: impl Into<String>) -> Self {
        self.forwarded_proto = Some(proto.into());
        self
    }

    /// Load the context from CGI-style environment variables
    pub fn from_env_vars() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the context from any variable lookup, keyed by the CGI names
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let context = Self {
            host: lookup(ENV_HOST),
            request_uri: lookup(ENV_REQUEST_URI),
            https: lookup(ENV_HTTPS),
            server_port: lookup(ENV_SERVER_PORT),
            forwarded_proto: lookup(ENV_FORWARDED_PROTO),
        };
        debug!("Resolved request context: {:?}", context);
        context
    }

    /// Load the context from a YAML file
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let context: RequestContext = serde_yaml::from_str(&contents)?;
        debug!("Loaded request context from {}", path.display());
        Ok(context)
    }

    /// Load from the given YAML file, or from environment variables when no
    /// file is given. A file that was named but does not exist is an error.
    pub fn load_config(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::from_yaml_file(path),
            Some(path) => Err(Error::Config(format!(
                "Context file '{}' not found",
                path.display()
            ))),
            None => Ok(Self::from_env_vars()),
        }
    }

    /// Extract the context from an incoming hyper request.
    ///
    /// The host comes from the `Host` header, falling back to the authority of
    /// an absolute-form request target. An absolute `https` target sets the
    /// HTTPS flag.
    pub fn from_request<B>(req: &Request<B>, server_port: Option<u16>) -> Self {
        let headers = req.headers();
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        };

        let host = header("host").or_else(|| req.uri().authority().map(|a| a.to_string()));
        let request_uri = req.uri().path_and_query().map(|pq| pq.as_str().to_string());
        let https = match req.uri().scheme_str() {
            Some("https") => Some("on".to_string()),
            _ => None,
        };

        Self {
            host,
            request_uri,
            https,
            server_port: server_port.map(|port| port.to_string()),
            forwarded_proto: header("x-forwarded-proto"),
        }
    }
}
