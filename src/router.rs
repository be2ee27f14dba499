//! Ordered request router.
//!
//! Routes live in one `Vec`, in registration order, and dispatch walks it
//! front to back. The first route whose method and whole path both match
//! wins. There is no specificity scoring: if `/{id}` was registered before
//! `/users`, then `/users` goes to `/{id}`.

use bytes::Bytes;
use http::{Method, StatusCode};
use http_body_util::Full;
use tracing::debug;

use crate::error::Error;
use crate::handler::{BoxedHandler, Handler};
use crate::middleware::cors::Cors;
use crate::path::{PathPattern, PathVariables};
use crate::request::Request;
use crate::response::Response;

struct Route {
    method: String,
    pattern: PathPattern,
    handler: BoxedHandler,
}

/// The application router.
///
/// Build it at startup, then hand it to [`Server::serve`](crate::Server::serve)
/// or call [`Router::dispatch`] from your own transport. Registration needs
/// `&mut self` (or ownership) and serving only `&self`, so routes cannot
/// change once requests are flowing.
pub struct Router {
    routes: Vec<Route>,
    cors: Cors,
}

impl Router {
    /// Creates an empty router whose matched responses allow `origins`.
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { routes: Vec::new(), cors: Cors::new(origins) }
    }

    /// Registers `handler` for `method` + `template`, after every route
    /// registered so far.
    ///
    /// `method` is compared case-sensitively with the request method, so
    /// `"get"` never serves a `GET`. Registering the same pair twice is
    /// allowed; the second entry can never be reached.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidTemplate`] if `template` has malformed `{name}` syntax.
    /// The router is left unchanged.
    pub fn add_route(
        &mut self,
        method: impl AsRef<str>,
        template: &str,
        handler: impl Handler,
    ) -> Result<(), Error> {
        let method = method.as_ref();
        let pattern = PathPattern::compile(template)?;
        debug!(method, template, params = pattern.param_count(), "route registered");

        self.routes.push(Route {
            method: method.to_owned(),
            pattern,
            handler: handler.into_boxed_handler(),
        });
        Ok(())
    }

    /// Chaining form of [`Router::add_route`].
    ///
    /// ```rust
    /// # use pathwise::{Request, Router};
    /// # async fn get_book(_: Request) -> &'static str { "" }
    /// # async fn update_user(_: Request) -> &'static str { "" }
    /// # fn main() -> Result<(), pathwise::Error> {
    /// let router = Router::new(["https://books.example"])
    ///     .on("GET", "/books/{id}", get_book)?
    ///     .on("PUT", "/users/{id}", update_user)?;
    /// assert_eq!(router.len(), 2);
    /// # Ok(())
    /// # }
    /// ```
    pub fn on(
        mut self,
        method: impl AsRef<str>,
        template: &str,
        handler: impl Handler,
    ) -> Result<Self, Error> {
        self.add_route(method, template, handler)?;
        Ok(self)
    }

    pub fn get(self, template: &str, handler: impl Handler) -> Result<Self, Error> {
        self.on(Method::GET, template, handler)
    }

    pub fn post(self, template: &str, handler: impl Handler) -> Result<Self, Error> {
        self.on(Method::POST, template, handler)
    }

    pub fn put(self, template: &str, handler: impl Handler) -> Result<Self, Error> {
        self.on(Method::PUT, template, handler)
    }

    pub fn delete(self, template: &str, handler: impl Handler) -> Result<Self, Error> {
        self.on(Method::DELETE, template, handler)
    }

    /// Registers an `OPTIONS` route. Preflights are only answered for paths
    /// that have one; see [`Router::dispatch`].
    pub fn options(self, template: &str, handler: impl Handler) -> Result<Self, Error> {
        self.on(Method::OPTIONS, template, handler)
    }

    /// The configured CORS origins, as given to [`Router::new`].
    pub fn origins(&self) -> &[String] {
        self.cors.origins()
    }

    pub fn cors(&self) -> &Cors {
        &self.cors
    }

    /// `(method, template)` for every route, in match order.
    pub fn routes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.routes.iter().map(|r| (r.method.as_str(), r.pattern.as_str()))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    fn resolve(&self, method: &str, path: &str) -> Option<(&Route, PathVariables)> {
        self.routes
            .iter()
            .filter(|route| route.method == method)
            .find_map(|route| route.pattern.matches(path).map(|vars| (route, vars)))
    }

    /// Routes one request and produces one response.
    ///
    /// 1. The first route with an equal method and a matching path is chosen.
    /// 2. Its response gets the CORS headers.
    /// 3. An `OPTIONS` request is answered `200 OK` with no body and the
    ///    handler is not called. Because the method filter runs first, this
    ///    only happens when an `OPTIONS` route matches the path; a path
    ///    registered only for `GET` answers `OPTIONS` with `404`.
    /// 4. Anything else is passed to the handler with its path variables.
    ///
    /// No match at all yields `404 Not Found` without CORS headers.
    pub async fn dispatch(&self, req: Request) -> Response {
        let Some((route, params)) = self.resolve(req.method().as_str(), req.path()) else {
            debug!(method = %req.method(), path = req.path(), "no route matched");
            return not_found();
        };

        debug!(
            method = %req.method(),
            path = req.path(),
            route = route.pattern.as_str(),
            "route matched"
        );

        let mut response = if *req.method() == Method::OPTIONS {
            Response::status(StatusCode::OK)
        } else {
            route.handler.call(req.with_params(params)).await
        };

        self.cors.apply(response.headers_mut());
        response
    }

    /// [`Router::dispatch`] in terms of plain `http` types, for transports
    /// other than the bundled [`Server`](crate::Server).
    pub async fn handle(&self, req: http::Request<Bytes>) -> http::Response<Full<Bytes>> {
        self.dispatch(Request::from(req)).await.into_inner()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(std::iter::empty::<String>())
    }
}

fn not_found() -> Response {
    Response::builder().status(StatusCode::NOT_FOUND).text("404 page not found")
}
