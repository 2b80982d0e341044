//! Inbound Slack payloads
//!
//! The events endpoint receives two payload families on a single path:
//! JSON event envelopes (URL verification handshakes and event callbacks)
//! and form-encoded slash commands.

use serde::Deserialize;

/// Envelope delivered to the events endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventEnvelope {
    /// Endpoint ownership handshake; the challenge must be echoed back
    UrlVerification {
        /// Opaque string to echo
        challenge: String,
    },
    /// Wrapper around a delivered event
    EventCallback {
        /// The inner event
        event: Event,
    },
    /// Any envelope type this service does not handle
    #[serde(other)]
    Unknown,
}

/// Events this service reacts to
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// A user opened the app home
    AppHomeOpened(AppHomeOpenedEvent),
    /// Any event type this service does not handle
    #[serde(other)]
    Unknown,
}

/// Payload of an `app_home_opened` event
#[derive(Debug, Clone, Deserialize)]
pub struct AppHomeOpenedEvent {
    /// User who opened the home
    pub user: String,
    /// Which tab was opened, usually `home`
    #[serde(default)]
    pub tab: Option<String>,
}

/// A slash command invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlashCommandPayload {
    /// The command, e.g. `/beerbox`
    pub command: String,
    /// Text after the command
    pub text: String,
    /// User who invoked the command
    pub user_id: String,
    /// Channel the command was invoked in
    pub channel_id: String,
    /// URL for delayed responses
    pub response_url: String,
}

impl SlashCommandPayload {
    /// Parse a form-encoded request body
    ///
    /// Unknown fields are ignored and missing fields stay empty, so parsing
    /// is total. `+` decodes as a space per form encoding.
    #[must_use]
    pub fn from_form(body: &str) -> Self {
        let mut payload = Self::default();
        for pair in body.split('&') {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode(value);
            match decode(name).as_str() {
                "command" => payload.command = value,
                "text" => payload.text = value,
                "user_id" => payload.user_id = value,
                "channel_id" => payload.channel_id = value,
                "response_url" => payload.response_url = value,
                _ => {}
            }
        }
        payload
    }
}

/// Percent-decode one form value, treating `+` as a space
fn decode(value: &str) -> String {
    let spaced = value.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}
