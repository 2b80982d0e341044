//! Slack Web API client
//!
//! A minimal blocking client for the one Web API method this service
//! calls, `views.publish`. The [`ViewPublisher`] trait is the seam the API
//! handlers depend on, so tests can substitute their own publisher.

use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use super::blocks::View;

/// Errors from Slack Web API calls
#[derive(Debug, Error)]
pub enum SlackError {
    /// Slack answered with `ok: false`
    #[error("slack api error: {0}")]
    Api(String),

    /// Transport-level failure
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Implemented by anything able to publish a view to a user's app home
pub trait ViewPublisher {
    /// Publish the view for the given user
    fn publish_view(&self, user_id: &str, view: &View) -> Result<(), SlackError>;
}

/// Blocking Slack Web API client
#[derive(Debug)]
pub struct SlackClient {
    token: String,
    client: reqwest::blocking::Client,
}

impl SlackClient {
    /// Create a client authenticating with the given bot token
    #[must_use]
    pub fn new(token: &str) -> Self {
        Self { token: token.to_string(), client: reqwest::blocking::Client::new() }
    }

    /// Call one Web API method with a JSON payload
    fn api_call(&self, method: &str, payload: &serde_json::Value) -> Result<(), SlackError> {
        let url = format!("https://slack.com/api/{method}");
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/json; charset=utf-8")
            .json(payload)
            .send()?;

        let result: ApiCallResponse = response.json()?;
        if result.ok {
            Ok(())
        } else {
            Err(SlackError::Api(result.error.unwrap_or_else(|| "unknown".to_string())))
        }
    }
}

impl ViewPublisher for SlackClient {
    fn publish_view(&self, user_id: &str, view: &View) -> Result<(), SlackError> {
        self.api_call("views.publish", &json!({"user_id": user_id, "view": view}))
    }
}

/// Minimal shape of a Web API method response
#[derive(Debug, Deserialize)]
struct ApiCallResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}
