//! Application health reporting
//!
//! Health is reported as point-in-time checks taken by indicators. The
//! server exposes the aggregated result on its `/readyz` and `/livez`
//! endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Outcome of a health check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The checked aspect is healthy
    Pass,
    /// The checked aspect is unhealthy
    Fail,
}

impl Status {
    /// Aggregate multiple statuses into one
    ///
    /// Fails if any input fails; an empty input passes.
    #[must_use]
    pub fn all<I: IntoIterator<Item = Self>>(statuses: I) -> Self {
        if statuses.into_iter().any(|status| status == Self::Fail) {
            Self::Fail
        } else {
            Self::Pass
        }
    }
}

/// One point-in-time health check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    /// Check identifier, conventionally `<service>:<aspect>`
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

/// Implemented by anything that can report a health check
pub trait HealthIndicator {
    /// Take a point-in-time health check
    fn check(&self) -> Check;
}

/// Reports whether the application is ready to serve requests
#[derive(Debug, Clone)]
pub struct ApplicationReadiness {
    service: String,
}

impl ApplicationReadiness {
    /// Create an indicator reporting readiness of the named service
    #[must_use]
    pub fn new(service: &str) -> Self {
        Self { service: service.to_string() }
    }
}

impl HealthIndicator for ApplicationReadiness {
    fn check(&self) -> Check {
        Check {
            name: format!("{}:ready", self.service),
            time: Utc::now(),
            status: Status::Pass,
            observed_value: "true".to_string(),
            observed_unit: "boolean".to_string(),
        }
    }
}
