//! API components and response rendering
//!
//! Components are the typed bodies of API responses. They reach the wire
//! through [`render`], which forces every field name to camelCase via the
//! case engine and drops null members, so payloads never carry snake_case
//! keys or explicit nulls.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::casing::{self, Case};
use crate::config::Config;
use crate::health::{Check, Status};

// =============================================================================
// COMPONENTS
// =============================================================================

/// API component representing one health check
#[derive(Debug, Serialize)]
pub struct HealthCheck {
    /// Check identifier
    pub name: String,
    /// When the check was taken
    pub time: DateTime<Utc>,
    /// Whether the check passed
    pub status: Status,
    /// Value observed at check time
    pub observed_value: String,
    /// Unit of the observed value
    pub observed_unit: String,
}

impl From<Check> for HealthCheck {
    fn from(check: Check) -> Self {
        Self {
            name: check.name,
            time: check.time,
            status: check.status,
            observed_value: check.observed_value,
            observed_unit: check.observed_unit,
        }
    }
}

/// API component aggregating health checks
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Aggregated status over all checks
    pub status: Status,
    /// Individual check results
    pub checks: Vec<HealthCheck>,
    /// Service version
    pub version: String,
    /// Service name
    pub service: String,
}

impl HealthResponse {
    /// Aggregate domain checks into a response component
    #[must_use]
    pub fn from_checks(checks: Vec<Check>, config: &Config) -> Self {
        Self {
            status: Status::all(checks.iter().map(|check| check.status)),
            checks: checks.into_iter().map(HealthCheck::from).collect(),
            version: config.version.clone(),
            service: config.service.clone(),
        }
    }
}

/// Acknowledgement returned from the Slack events endpoint
#[derive(Debug, Serialize)]
pub struct SlackAck {
    /// Echoed URL-verification challenge, when one was received
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenge: Option<String>,
}

impl SlackAck {
    /// Empty acknowledgement
    #[must_use]
    pub const fn empty() -> Self {
        Self { challenge: None }
    }

    /// Acknowledgement echoing a URL-verification challenge
    #[must_use]
    pub fn challenge(challenge: impl Into<String>) -> Self {
        Self { challenge: Some(challenge.into()) }
    }
}

/// Reply to a slash command
#[derive(Debug, Serialize)]
pub struct CommandReply {
    /// Text shown to the user who invoked the command
    pub text: String,
}

// =============================================================================
// RENDERING
// =============================================================================

/// Render a component to its wire JSON value
///
/// Object keys are forced to camelCase through the case engine and null
/// members are dropped, recursively. Lists of components render element by
/// element.
pub fn render<T: Serialize>(component: &T) -> serde_json::Result<Value> {
    serde_json::to_value(component).map(alias_fields)
}

/// Camel-case object keys and drop null members, recursively
fn alias_fields(value: Value) -> Value {
    match value {
        Value::Object(members) => Value::Object(
            members
                .into_iter()
                .filter(|(_, member)| !member.is_null())
                .map(|(name, member)| {
                    (casing::force_case(&name, Case::Camel), alias_fields(member))
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(alias_fields).collect()),
        other => other,
    }
}
