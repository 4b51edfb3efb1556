//! URL utility functions

use crate::config::RequestContext;
use crate::models::UrlParts;
use ::url::Url;
use tracing::debug;

/// Parse a URL string into its eight components.
///
/// The `url` crate validates and splits the input. Scheme, host and port are
/// then taken verbatim from the input authority, so `HTTPS://Example.com:0443`
/// keeps its case and its port digits. Without an explicit path
/// (`https://example.com?x`) the path is absent rather than `/`. A URL with an
/// empty authority (`file:///tmp`) keeps an empty host so it serializes back
/// with `//`.
pub fn parse_url(url_str: &str) -> Result<UrlParts, ::url::ParseError> {
    let url = Url::parse(url_str)?;
    let mut parts = url_to_parts(&url);

    if let Some(literal) = LiteralAuthority::find(url_str) {
        parts.scheme = Some(literal.scheme.to_string());
        parts.host = Some(literal.host.to_string());
        parts.port = literal.port.map(str::to_string);
        if !literal.has_path {
            parts.path = None;
        }
    }

    Ok(parts)
}

/// Parse leniently: a relative reference (`/a/b?c#d`) yields its path, query
/// and fragment with scheme and authority absent. `None` when the parser
/// rejects the input for any other reason.
pub fn parse_url_lenient(url_str: &str) -> Option<UrlParts> {
    match parse_url(url_str) {
        Ok(parts) => Some(parts),
        Err(::url::ParseError::RelativeUrlWithoutBase) => Some(parse_relative(url_str)),
        Err(e) => {
            debug!("Could not parse URL '{}': {}", url_str, e);
            None
        }
    }
}

/// Split a relative reference into path, query and fragment
pub fn parse_relative(reference: &str) -> UrlParts {
    let (rest, fragment) = match reference.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (reference, None),
    };
    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };

    UrlParts {
        path: Some(path).filter(|path| !path.is_empty()).map(str::to_string),
        query: query.map(str::to_string),
        fragment: fragment.map(str::to_string),
        ..UrlParts::default()
    }
}

/// Scheme and authority pieces exactly as written in the input
struct LiteralAuthority<'a> {
    scheme: &'a str,
    host: &'a str,
    port: Option<&'a str>,
    has_path: bool,
}

impl<'a> LiteralAuthority<'a> {
    /// Only `scheme://authority` forms are recognized; anything else keeps the
    /// parser's own reading.
    fn find(input: &'a str) -> Option<Self> {
        let input = input.trim_matches(|c: char| c <= ' ');
        let (scheme, rest) = input.split_once(':')?;
        let rest = rest.strip_prefix("//")?;

        let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
        let (authority, after) = rest.split_at(end);
        let host_port = authority.rsplit_once('@').map_or(authority, |(_, hp)| hp);

        let (host, port) = if host_port.starts_with('[') {
            match host_port.find(']') {
                Some(close) => {
                    let (host, tail) = host_port.split_at(close + 1);
                    (host, tail.strip_prefix(':'))
                }
                None => (host_port, None),
            }
        } else {
            match host_port.rsplit_once(':') {
                Some((host, port)) => (host, Some(port)),
                None => (host_port, None),
            }
        };

        Some(Self {
            scheme,
            host,
            port: port.filter(|port| !port.is_empty()),
            has_path: after.starts_with('/'),
        })
    }
}

/// Split a parsed URL into components, as normalized by the `url` crate
pub fn url_to_parts(url: &Url) -> UrlParts {
    let host = match url.host_str() {
        Some(host) => Some(host.to_string()),
        None if url.has_authority() => Some(String::new()),
        None => None,
    };

    UrlParts {
        scheme: Some(url.scheme().to_string()),
        user: Some(url.username()).filter(|user| !user.is_empty()).map(str::to_string),
        pass: url.password().map(str::to_string),
        host,
        port: url.port().map(|port| port.to_string()),
        path: Some(url.path()).filter(|path| !path.is_empty()).map(str::to_string),
        query: url.query().map(str::to_string),
        fragment: url.fragment().map(str::to_string),
    }
}

/// Assemble a URL string from components.
///
/// Order is fixed: `scheme://`, `user[:pass]@`, host, `:port`, path,
/// `?query`, `#fragment`. Without a host the scheme is written as `scheme:`
/// and userinfo and port are dropped. Empty query and fragment are omitted.
pub fn build_url(parts: &UrlParts) -> String {
    let mut url = String::new();

    match (&parts.scheme, &parts.host) {
        (Some(scheme), Some(_)) => {
            url.push_str(scheme);
            url.push_str("://");
        }
        (Some(scheme), None) => {
            url.push_str(scheme);
            url.push(':');
        }
        _ => {}
    }

    if let Some(host) = &parts.host {
        if let Some(user) = &parts.user {
            url.push_str(user);
            if let Some(pass) = &parts.pass {
                url.push(':');
                url.push_str(pass);
            }
            url.push('@');
        }

        url.push_str(host);

        if let Some(port) = &parts.port {
            url.push(':');
            url.push_str(port);
        }
    }

    if let Some(path) = &parts.path {
        url.push_str(path);
    }

    if let Some(query) = parts.query.as_deref().filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }

    if let Some(fragment) = parts.fragment.as_deref().filter(|f| !f.is_empty()) {
        url.push('#');
        url.push_str(fragment);
    }

    url
}

/// Join path segments into a path with a leading `/`.
///
/// No segments gives `""`, or `"/"` when a trailing slash is requested.
pub fn build_path<S: AsRef<str>>(segments: &[S], trailing_slash: bool) -> String {
    if segments.is_empty() {
        return if trailing_slash { "/".to_string() } else { String::new() };
    }

    let mut path = String::new();
    for segment in segments {
        path.push('/');
        path.push_str(segment.as_ref());
    }
    if trailing_slash {
        path.push('/');
    }
    path
}

/// Remove the query from a URL, keeping the fragment.
///
/// Relative references are handled like absolute URLs. A string the URL
/// parser rejects outright has its `?...` part cut textually instead.
pub fn strip_query_string(url_str: &str) -> String {
    if let Some(mut parts) = parse_url_lenient(url_str) {
        parts.query = None;
        return build_url(&parts);
    }

    let (before_fragment, fragment) = match url_str.find('#') {
        Some(pos) => url_str.split_at(pos),
        None => (url_str, ""),
    };
    let base = match before_fragment.find('?') {
        Some(pos) => &before_fragment[..pos],
        None => before_fragment,
    };
    format!("{}{}", base, fragment)
}

/// Scheme of the current request.
///
/// First match wins: HTTPS flag `on` or `1`, then server port `443`, then a
/// forwarded protocol of `https`. Anything else is `http`.
pub fn get_current_scheme(context: &RequestContext) -> &'static str {
    if matches!(context.https.as_deref(), Some("on") | Some("1")) {
        return "https";
    }

    if context.server_port.as_deref() == Some("443") {
        return "https";
    }

    if context.forwarded_proto.as_deref() == Some("https") {
        return "https";
    }

    "http"
}

/// Full URL of the current request: scheme, host header and request target.
///
/// Without a host header only the request target is returned, since a scheme
/// with an empty authority would make the parser read the path as the host.
pub fn get_current_url(context: &RequestContext) -> String {
    let request_uri = context.request_uri.as_deref().unwrap_or_default();

    match context.host.as_deref().filter(|host| !host.is_empty()) {
        Some(host) => format!("{}://{}{}", get_current_scheme(context), host, request_uri),
        None => request_uri.to_string(),
    }
}
