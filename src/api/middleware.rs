//! API Middleware
//!
//! Path normalization, authorization pass-through and request logging.

use axum::{
    extract::{OriginalUri, Request},
    http::{header::AUTHORIZATION, uri::PathAndQuery, HeaderMap, Uri},
    middleware::Next,
    response::Response,
};
use tower_http::request_id::RequestId;

// =========================================================================
// Path normalization
// =========================================================================

/// Lowercase the request path so routing is case-insensitive.
///
/// Runs in front of the router; the query string is left untouched. The URI
/// as sent by the client stays available through [`OriginalUri`].
pub fn lowercase_path(mut request: Request) -> Request {
    let uri = request.uri();
    let path = uri.path();
    if !path.bytes().any(|b| b.is_ascii_uppercase()) {
        return request;
    }

    let lowered = match uri.query() {
        Some(query) => format!("{}?{}", path.to_ascii_lowercase(), query),
        None => path.to_ascii_lowercase(),
    };

    let mut parts = uri.clone().into_parts();
    let normalized = lowered
        .parse::<PathAndQuery>()
        .ok()
        .and_then(|path_and_query| {
            parts.path_and_query = Some(path_and_query);
            Uri::from_parts(parts).ok()
        });

    match normalized {
        Some(uri) => {
            let original = std::mem::replace(request.uri_mut(), uri);
            request.extensions_mut().insert(OriginalUri(original));
        }
        None => tracing::warn!(uri = %request.uri(), "Could not normalize request path"),
    }

    request
}

// =========================================================================
// Authorization pass-through
// =========================================================================

/// Who sent the request, as far as the Authorization header tells
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caller {
    Anonymous,
    Credentials { scheme: String },
}

impl Caller {
    /// Inspect the Authorization header without validating credentials
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let Some(value) = headers.get(AUTHORIZATION) else {
            return Caller::Anonymous;
        };

        let parsed = value
            .to_str()
            .ok()
            .and_then(|v| v.trim().split_once(' '))
            .filter(|(scheme, credentials)| !scheme.is_empty() && !credentials.trim().is_empty());

        match parsed {
            Some((scheme, _)) => Caller::Credentials {
                scheme: scheme.to_string(),
            },
            None => {
                tracing::debug!("Malformed Authorization header, treating caller as anonymous");
                Caller::Anonymous
            }
        }
    }
}

/// Attach the [`Caller`] to the request. No route requires authorization,
/// so the request is always forwarded.
pub async fn authorization_middleware(mut request: Request, next: Next) -> Response {
    let caller = Caller::from_headers(request.headers());
    request.extensions_mut().insert(caller);

    next.run(request).await
}

// =========================================================================
// mask_headers_for_logging
// =========================================================================

/// Headers that should be masked in logs
const SENSITIVE_HEADERS: &[&str] = &[
    "x-api-key",
    "authorization",
    "cookie",
    "set-cookie",
];

/// Mask sensitive headers for logging
pub fn mask_headers_for_logging(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let name_lower = name.as_str().to_lowercase();
            let masked_value = if SENSITIVE_HEADERS.contains(&name_lower.as_str()) {
                "[REDACTED]".to_string()
            } else {
                value.to_str().unwrap_or("[invalid utf8]").to_string()
            };
            (name.to_string(), masked_value)
        })
        .collect()
}

// =========================================================================
// Request Logging Middleware
// =========================================================================

/// Request logging middleware
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let version = request.version();

    let headers = mask_headers_for_logging(request.headers());

    let request_id = request
        .extensions()
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
        .map(str::to_owned);

    let caller = request.extensions().get::<Caller>().cloned();

    let start = std::time::Instant::now();

    tracing::info!(
        method = %method,
        uri = %uri,
        version = ?version,
        request_id = ?request_id,
        caller = ?caller,
        headers = ?headers,
        "Incoming request"
    );

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();

    tracing::info!(
        method = %method,
        uri = %uri,
        status = %status,
        duration_ms = %duration.as_millis(),
        request_id = ?request_id,
        "Request completed"
    );

    response
}
