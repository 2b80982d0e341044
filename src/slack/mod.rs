//! Slack domain
//!
//! Typed Block Kit payloads, the home tab view, inbound event and command
//! parsing, request signature verification, and a small Web API client for
//! publishing views.

mod blocks;
mod client;
mod events;
mod home;
mod signature;

pub use blocks::{Block, TextObject, View, ViewBuilder};
pub use client::{SlackClient, SlackError, ViewPublisher};
pub use events::{AppHomeOpenedEvent, Event, EventEnvelope, SlashCommandPayload};
pub use home::home_view;
pub use signature::{is_stale, sign, verify};
