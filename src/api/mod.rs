//! HTTP-agnostic API layer
//!
//! Typed response components, pure handlers, and the failure-to-descriptor
//! mapping, usable from any HTTP server implementation (`tiny_http`, axum,
//! etc.) without pulling framework types into the business logic.
//!
//! ## Design
//!
//! - **Handlers are pure functions**: typed input in, `Result<T, Failure>` out
//! - **One renderer for every body**: [`render`] camel-cases keys and prunes
//!   nulls, success and error alike
//! - **Failures carry their HTTP semantics**: [`Failure`] derives status,
//!   code, message, and data, so the server layer only converts

mod error;
mod handlers;
mod types;

pub use error::{ErrorResponse, Failure, FieldError, PathSegment};
pub use handlers::{get_livez, get_readyz, slack_command, slack_event};
pub use types::{CommandReply, HealthCheck, HealthResponse, SlackAck, render};
