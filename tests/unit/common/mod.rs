//! Shared test fixtures and helpers
//!
//! This module provides mock implementations of the health and Slack ports,
//! recording calls without real I/O, plus a canned configuration.

use std::cell::RefCell;

use chrono::{TimeZone, Utc};
use slackbox::config::Config;
use slackbox::health::{Check, HealthIndicator, Status};
use slackbox::slack::{SlackError, View, ViewPublisher};

/// A configuration with known values, never read from the environment
pub fn test_config() -> Config {
    Config {
        service: "slackbox".to_string(),
        version: "1.2.3".to_string(),
        port: 3000,
        slack_bot_token: String::new(),
        slack_signing_secret: String::new(),
    }
}

/// Mock health indicator reporting a fixed status
pub struct MockIndicator {
    status: Status,
}

impl MockIndicator {
    pub fn passing() -> Self {
        Self { status: Status::Pass }
    }

    pub fn failing() -> Self {
        Self { status: Status::Fail }
    }
}

impl HealthIndicator for MockIndicator {
    fn check(&self) -> Check {
        Check {
            name: "mock:ready".to_string(),
            time: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            status: self.status,
            observed_value: "true".to_string(),
            observed_unit: "boolean".to_string(),
        }
    }
}

/// Mock view publisher recording every published view
pub struct MockPublisher {
    published: RefCell<Vec<(String, View)>>,
    fail: bool,
}

impl MockPublisher {
    pub fn new() -> Self {
        Self { published: RefCell::new(Vec::new()), fail: false }
    }

    /// A publisher whose every publish attempt fails
    pub fn failing() -> Self {
        Self { published: RefCell::new(Vec::new()), fail: true }
    }

    pub fn published(&self) -> Vec<(String, View)> {
        self.published.borrow().clone()
    }
}

impl Default for MockPublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewPublisher for MockPublisher {
    fn publish_view(&self, user_id: &str, view: &View) -> Result<(), SlackError> {
        if self.fail {
            return Err(SlackError::Api("account_inactive".to_string()));
        }
        self.published.borrow_mut().push((user_id.to_string(), view.clone()));
        Ok(())
    }
}
