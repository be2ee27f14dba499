//! Cross-cutting response policies.
//!
//! Middleware here runs on the router's dispatch path and is static:
//! configured once when the [`Router`](crate::Router) is built, then
//! applied identically to every request that reaches a route.
//!
//! - [`cors`]: the fixed cross-origin header set stamped on matched responses

pub mod cors;
