//! # pathwise
//!
//! An HTTP request router that does one thing plainly: map a method and a
//! path to a handler, in the order you registered them.
//!
//! ## The contract
//!
//! - **Templates**: `/books/{id}` captures one non-empty path segment per
//!   placeholder. Everything else is literal. Matching is anchored at both
//!   ends: no prefixes, no trailing-slash leniency.
//! - **Order**: routes are scanned in registration order and the first
//!   whole match wins. There is no specificity scoring.
//! - **Variables**: captured values arrive on the handler's [`Request`]
//!   (`req.param("id")`), nowhere else.
//! - **CORS**: every matched response carries the same three
//!   `Access-Control-Allow-*` headers. See [`middleware::cors`].
//! - **Not found**: anything unmatched gets `404`. That is an answer, not
//!   an error.
//!
//! Malformed templates are rejected when the route is registered, never
//! while serving.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use pathwise::{Request, Response, Router, Server};
//! use http::StatusCode;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pathwise::Error> {
//!     let app = Router::new(["https://books.example"])
//!         .get("/books/{id}", get_book)?
//!         .put("/users/{id}", update_user)?
//!         .options("/users/{id}", |_: Request| async { StatusCode::OK })?;
//!
//!     Server::bind("0.0.0.0:3000")?.serve(app).await
//! }
//!
//! async fn get_book(req: Request) -> String {
//!     format!("Book {}", req.param("id").unwrap_or_default())
//! }
//!
//! async fn update_user(req: Request) -> Response {
//!     if req.body().is_empty() {
//!         return Response::status(StatusCode::BAD_REQUEST);
//!     }
//!     Response::text(format!("Updating user {}", req.param("id").unwrap_or_default()))
//! }
//! ```

mod error;
mod handler;
mod path;
mod request;
mod response;
mod router;
mod server;

pub mod middleware;

pub use error::{Error, TemplateError};
pub use handler::Handler;
pub use path::{PathPattern, PathVariables};
pub use request::Request;
pub use response::{IntoResponse, Response, ResponseBuilder};
pub use router::Router;
pub use server::{Server, serve_listener};
