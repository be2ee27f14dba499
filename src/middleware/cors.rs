//! Cross-origin resource sharing headers.
//!
//! | Header | Value |
//! |---|---|
//! | `Access-Control-Allow-Origin` | configured origins, joined with `,` |
//! | `Access-Control-Allow-Methods` | [`ALLOW_METHODS`] |
//! | `Access-Control-Allow-Headers` | [`ALLOW_HEADERS`] |
//!
//! The router stamps all three on every response to a request that matched a
//! route, preflights included. Nothing is per-route and nothing depends on the
//! request's `Origin` header.

use http::HeaderMap;
use http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    HeaderValue,
};
use tracing::warn;

/// Advertised methods. Fixed, whatever the router actually has registered.
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

/// Advertised request headers.
pub const ALLOW_HEADERS: &str = "Origin, Content-Type, Accept";

/// The CORS policy of a [`Router`](crate::Router).
#[derive(Clone, Debug)]
pub struct Cors {
    origins: Vec<String>,
    allow_origin: HeaderValue,
}

impl Cors {
    /// Stores `origins` as given. No syntax checks: an empty list produces an
    /// empty `Access-Control-Allow-Origin` value.
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let origins: Vec<String> = origins.into_iter().map(Into::into).collect();
        let joined = origins.join(",");

        // Only control characters make a header value unrepresentable.
        let allow_origin = HeaderValue::from_bytes(joined.as_bytes()).unwrap_or_else(|e| {
            warn!(origins = ?origins, "origin list is not a valid header value, sending it empty: {e}");
            HeaderValue::from_static("")
        });

        Self { origins, allow_origin }
    }

    pub fn origins(&self) -> &[String] {
        &self.origins
    }

    /// The `Access-Control-Allow-Origin` value this policy sends.
    pub fn allow_origin(&self) -> &HeaderValue {
        &self.allow_origin
    }

    /// Writes the three headers, replacing any value already present.
    ///
    /// The router calls this after the handler returns, so a handler cannot
    /// override these headers; the policy stays identical on every matched
    /// response. Routers that set CORS before the handler runs let the
    /// handler's values win instead.
    pub fn apply(&self, headers: &mut HeaderMap) {
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, self.allow_origin.clone());
        headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOW_METHODS));
        headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOW_HEADERS));
    }
}

impl Default for Cors {
    fn default() -> Self {
        Self::new(std::iter::empty::<String>())
    }
}
