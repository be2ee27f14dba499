//! Handler trait and type erasure.
//!
//! # How handlers of different types share one route list
//!
//! Every route stores its handler as the same concrete type,
//! [`BoxedHandler`], so the router can keep them in one ordered `Vec`. The
//! path from user code to the call at dispatch time:
//!
//! ```text
//! async fn get_book(req: Request) -> String { … }   ← user writes this
//!        ↓ router.add_route("GET", "/books/{id}", get_book)
//! get_book.into_boxed_handler()                     ← blanket Handler impl
//!        ↓
//! Arc::new(FnHandler(get_book))                     ← one allocation, at startup
//!        ↓  stored in Route as Arc<dyn ErasedHandler>
//! route.handler.call(req)                           ← one virtual call per request
//!        ↓
//! Box::pin(async { get_book(req).await.into_response() })
//! ```

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};

// ── Internal types ────────────────────────────────────────────────────────────

/// A boxed handler future. `Send + 'static` so the server can drive it on
/// any tokio worker.
pub(crate) type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// Object-safe call interface behind every stored handler.
///
/// `#[doc(hidden)] pub` because it is named by [`Handler::into_boxed_handler`].
#[doc(hidden)]
pub trait ErasedHandler {
    fn call(&self, req: Request) -> BoxFuture;
}

/// A type-erased handler, shared by every in-flight request on its route.
#[doc(hidden)]
pub type BoxedHandler = Arc<dyn ErasedHandler + Send + Sync + 'static>;

// ── Public Handler trait ──────────────────────────────────────────────────────

/// Implemented for every valid route handler.
///
/// Satisfied automatically by any `async fn` or closure of the shape
///
/// ```text
/// Fn(Request) -> impl Future<Output = impl IntoResponse>
/// ```
///
/// that is `Send + Sync + 'static`. The handler receives the request with
/// its path variables attached and owns the response it returns; the router
/// never looks inside. Sealed: only the blanket impl can satisfy it.
pub trait Handler: private::Sealed + Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_handler(self) -> BoxedHandler;
}

mod private {
    pub trait Sealed {}
}

// ── Blanket implementations ───────────────────────────────────────────────────

impl<F, Fut, R> private::Sealed for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
}

impl<F, Fut, R> Handler for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn into_boxed_handler(self) -> BoxedHandler {
        Arc::new(FnHandler(self))
    }
}

// ── Concrete wrapper ──────────────────────────────────────────────────────────

/// Bridges a concrete `F` to [`ErasedHandler`].
struct FnHandler<F>(F);

impl<F, Fut, R> ErasedHandler for FnHandler<F>
where
    F: Fn(Request) -> Fut + Send + Sync,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn call(&self, req: Request) -> BoxFuture {
        let fut = (self.0)(req);
        Box::pin(async move { fut.await.into_response() })
    }
}
