//! Pure API handlers
//!
//! Business logic with no HTTP types in sight: handlers take parsed input
//! and return `Result<T, Failure>` for the server layer to convert.

use log::error;

use crate::config::Config;
use crate::health::HealthIndicator;
use crate::slack::{Event, EventEnvelope, SlashCommandPayload, ViewPublisher, home_view};

use super::error::Failure;
use super::types::{CommandReply, HealthResponse, SlackAck};

// =============================================================================
// HEALTH
// =============================================================================

/// Report whether the service is ready to accept traffic
pub fn get_readyz(
    readiness: &dyn HealthIndicator,
    config: &Config,
) -> Result<HealthResponse, Failure> {
    Ok(HealthResponse::from_checks(vec![readiness.check()], config))
}

/// Report whether the service is alive
pub fn get_livez(
    readiness: &dyn HealthIndicator,
    config: &Config,
) -> Result<HealthResponse, Failure> {
    Ok(HealthResponse::from_checks(vec![readiness.check()], config))
}

// =============================================================================
// SLACK
// =============================================================================

/// Answer an Events API envelope
///
/// URL verification echoes the challenge back. An `app_home_opened` event
/// publishes the home view for the opening user; a publish failure is logged
/// and still acknowledged, since a non-2xx answer makes Slack retry the
/// whole delivery.
pub fn slack_event(
    envelope: EventEnvelope,
    publisher: &dyn ViewPublisher,
) -> Result<SlackAck, Failure> {
    match envelope {
        EventEnvelope::UrlVerification { challenge } => Ok(SlackAck::challenge(challenge)),
        EventEnvelope::EventCallback { event } => {
            if let Event::AppHomeOpened(opened) = event {
                if let Err(error) = publisher.publish_view(&opened.user, &home_view()) {
                    error!("Error publishing home tab: {error}");
                }
            }
            Ok(SlackAck::empty())
        }
        EventEnvelope::Unknown => Ok(SlackAck::empty()),
    }
}

/// Answer a slash command
pub fn slack_command(payload: &SlashCommandPayload) -> Result<CommandReply, Failure> {
    match payload.command.as_str() {
        "/beerbox" => Ok(CommandReply {
            text: format!("you requested '{}' from beerbox", payload.text),
        }),
        _ => Err(Failure::http(404, "Not Found")),
    }
}
