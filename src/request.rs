//! Incoming HTTP request type.

use bytes::Bytes;
use http::request::Parts;
use http::{HeaderMap, Method};
use percent_encoding::percent_decode_str;

use crate::path::PathVariables;

/// An incoming HTTP request as seen by a handler.
///
/// The body arrives fully buffered and untouched. The path is percent-decoded
/// once, on construction, and that decoded form is what routes match against.
/// Path variables captured by the matched route are attached by the router
/// before the handler runs.
pub struct Request {
    parts: Parts,
    path: String,
    body: Bytes,
    params: PathVariables,
}

impl Request {
    pub fn from_parts(parts: Parts, body: Bytes) -> Self {
        let path = decode_path(parts.uri.path());
        Self { parts, path, body, params: PathVariables::default() }
    }

    pub fn method(&self) -> &Method { &self.parts.method }

    /// The percent-decoded path: `/books/a%20b` reads as `/books/a b`.
    pub fn path(&self) -> &str { &self.path }

    /// The path exactly as it appeared in the request URI.
    pub fn raw_path(&self) -> &str { self.parts.uri.path() }

    pub fn query(&self) -> Option<&str> { self.parts.uri.query() }
    pub fn headers(&self) -> &HeaderMap { &self.parts.headers }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Case-insensitive header lookup. Non-UTF-8 values read as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.parts.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/users/{id}`, `req.param("id")` on `/users/42` returns `Some("42")`.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// Every variable captured by the matched route.
    pub fn params(&self) -> &PathVariables {
        &self.params
    }

    pub(crate) fn with_params(mut self, params: PathVariables) -> Self {
        self.params = params;
        self
    }
}

// A path that does not decode to UTF-8 is kept in its raw, encoded form.
fn decode_path(raw: &str) -> String {
    match percent_decode_str(raw).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_owned(),
    }
}

impl From<http::Request<Bytes>> for Request {
    fn from(req: http::Request<Bytes>) -> Self {
        let (parts, body) = req.into_parts();
        Self::from_parts(parts, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(uri: &str) -> Request {
        http::Request::builder().uri(uri).body(Bytes::new()).unwrap().into()
    }

    #[test]
    fn path_is_percent_decoded() {
        let req = request("/books/a%20b?q=x%20y");
        assert_eq!(req.path(), "/books/a b");
        assert_eq!(req.raw_path(), "/books/a%20b");
        assert_eq!(req.query(), Some("q=x%20y"));
    }

    #[test]
    fn encoded_slash_becomes_a_separator() {
        assert_eq!(request("/books/a%2Fb").path(), "/books/a/b");
    }

    #[test]
    fn invalid_utf8_keeps_raw_path() {
        let req = request("/books/%FF");
        assert_eq!(req.path(), "/books/%FF");
        assert_eq!(req.raw_path(), "/books/%FF");
    }
}
