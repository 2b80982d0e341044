//! Runtime configuration
//!
//! Every setting comes from the environment with a sensible default, so the
//! service starts with no configuration at all and picks up deployment
//! values from its process environment.

use std::env;

use anyhow::Context;

/// Service configuration resolved from the environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Service name, used to label health checks
    pub service: String,
    /// Version reported by health endpoints and the CLI
    pub version: String,
    /// TCP port the HTTP server listens on
    pub port: u16,
    /// Bearer token for Slack Web API calls
    pub slack_bot_token: String,
    /// Secret for verifying Slack request signatures
    pub slack_signing_secret: String,
}

impl Config {
    /// Read configuration from the environment
    ///
    /// Unset variables fall back to defaults. A `PORT` value that is set but
    /// not a valid port number is an error rather than a silent fallback.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = get_string("PORT", "3000");
        let port = port.parse::<u16>().with_context(|| format!("invalid PORT value '{port}'"))?;

        Ok(Self {
            service: get_string("SERVICE", "slackbox"),
            version: get_string("VERSION", "dev"),
            port,
            slack_bot_token: get_string("SLACK_BOT_TOKEN", ""),
            slack_signing_secret: get_string("SLACK_SIGNING_SECRET", ""),
        })
    }
}

/// Read one environment variable with a fallback
fn get_string(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
