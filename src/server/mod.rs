//! HTTP server adapters
//!
//! Adapters translate between an HTTP framework and the HTTP-agnostic API
//! layer. The only one today is `tiny_http`, a lightweight server handling
//! requests sequentially, which is plenty for a single Slack workspace.

mod tiny_http;

pub use self::tiny_http::serve;
