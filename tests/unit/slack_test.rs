//! Tests for the Slack domain
//!
//! Tests Block Kit serialization, the home view, inbound payload parsing,
//! and request signature verification.

use serde_json::json;
use slackbox::slack::{
    self, AppHomeOpenedEvent, Block, Event, EventEnvelope, SlashCommandPayload, ViewBuilder,
    home_view,
};

// =============================================================================
// BLOCK KIT
// =============================================================================

mod block_tests {
    use super::*;

    #[test]
    fn test_divider_serialization() {
        assert_eq!(serde_json::to_value(Block::Divider).unwrap(), json!({"type": "divider"}));
    }

    #[test]
    fn test_markdown_section_serialization() {
        assert_eq!(
            serde_json::to_value(Block::markdown("*hello*")).unwrap(),
            json!({"type": "section", "text": {"type": "mrkdwn", "text": "*hello*"}})
        );
    }

    #[test]
    fn test_view_builder_aggregates_blocks() {
        let view = ViewBuilder::new("home", "my_view")
            .block(Block::markdown("first"))
            .block(Block::Divider)
            .build();

        assert_eq!(view.kind, "home");
        assert_eq!(view.callback_id, "my_view");
        assert_eq!(view.blocks, vec![Block::markdown("first"), Block::Divider]);
    }

    #[test]
    fn test_view_serializes_surface_type() {
        let view = ViewBuilder::new("home", "my_view").block(Block::Divider).build();
        assert_eq!(
            serde_json::to_value(view).unwrap(),
            json!({"type": "home", "callback_id": "my_view", "blocks": [{"type": "divider"}]})
        );
    }

    #[test]
    fn test_home_view_contents() {
        let view = home_view();

        assert_eq!(view.kind, "home");
        assert_eq!(view.callback_id, "home_view");
        assert_eq!(
            view.blocks,
            vec![
                Block::markdown("*Welcome to your beerbox's home page*"),
                Block::Divider,
                Block::markdown(
                    "There is nothing fancy here yet, but much more is coming soon."
                ),
            ]
        );
    }
}

// =============================================================================
// INBOUND PAYLOADS
// =============================================================================

mod envelope_tests {
    use super::*;

    #[test]
    fn test_parses_url_verification() {
        let body = json!({
            "token": "Jhj5dZrVaK7ZwHHjRyZWjbDl",
            "challenge": "3eZbrw1aBm2rZgRNFdxV2595E9CY3gmdALWMmHkvFXO7tYXAYM8P",
            "type": "url_verification",
        });

        let envelope: EventEnvelope = serde_json::from_value(body).unwrap();

        match envelope {
            EventEnvelope::UrlVerification { challenge } => {
                assert_eq!(challenge, "3eZbrw1aBm2rZgRNFdxV2595E9CY3gmdALWMmHkvFXO7tYXAYM8P");
            }
            other => panic!("unexpected envelope: {other:?}"),
        }
    }

    #[test]
    fn test_parses_app_home_opened() {
        let body = json!({
            "token": "XXYYZZ",
            "team_id": "T123ABC456",
            "type": "event_callback",
            "event": {
                "type": "app_home_opened",
                "user": "U061F7AUR",
                "channel": "D0LAN2Q65",
                "tab": "home",
                "event_ts": "1515449522000016",
            },
        });

        let envelope: EventEnvelope = serde_json::from_value(body).unwrap();

        match envelope {
            EventEnvelope::EventCallback { event: Event::AppHomeOpened(opened) } => {
                assert_eq!(opened.user, "U061F7AUR");
                assert_eq!(opened.tab.as_deref(), Some("home"));
            }
            other => panic!("unexpected envelope: {other:?}"),
        }
    }

    #[test]
    fn test_tab_is_optional() {
        let body = json!({"type": "app_home_opened", "user": "U1"});
        let opened: AppHomeOpenedEvent = serde_json::from_value(body).unwrap();
        assert_eq!(opened.user, "U1");
        assert_eq!(opened.tab, None);
    }

    #[test]
    fn test_unknown_envelope_type_parses() {
        let body = json!({"type": "app_rate_limited", "minute_rate_limited": 1518467820});
        let envelope: EventEnvelope = serde_json::from_value(body).unwrap();
        assert!(matches!(envelope, EventEnvelope::Unknown));
    }

    #[test]
    fn test_unknown_event_type_parses() {
        let body = json!({
            "type": "event_callback",
            "event": {"type": "reaction_added", "user": "U024BE7LH"},
        });

        let envelope: EventEnvelope = serde_json::from_value(body).unwrap();

        assert!(matches!(envelope, EventEnvelope::EventCallback { event: Event::Unknown }));
    }
}

mod command_tests {
    use super::*;

    #[test]
    fn test_parses_form_body() {
        let body = "token=gIkuvaNzQIHg97ATvDxqgjtO&team_id=T0001&channel_id=C2147483705\
                    &channel_name=test&user_id=U2147483697&user_name=Steve\
                    &command=%2Fbeerbox&text=two+pints\
                    &response_url=https%3A%2F%2Fhooks.slack.com%2Fcommands%2F1234%2F5678";

        let payload = SlashCommandPayload::from_form(body);

        assert_eq!(payload.command, "/beerbox");
        assert_eq!(payload.text, "two pints");
        assert_eq!(payload.user_id, "U2147483697");
        assert_eq!(payload.channel_id, "C2147483705");
        assert_eq!(payload.response_url, "https://hooks.slack.com/commands/1234/5678");
    }

    #[test]
    fn test_plus_decodes_as_space() {
        let payload = SlashCommandPayload::from_form("command=%2Fbeerbox&text=a+cold+one");
        assert_eq!(payload.text, "a cold one");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let payload = SlashCommandPayload::from_form("command=%2Fbeerbox&api_app_id=A123");
        assert_eq!(payload.command, "/beerbox");
    }

    #[test]
    fn test_missing_fields_stay_empty() {
        let payload = SlashCommandPayload::from_form("command=%2Fbeerbox");
        assert_eq!(payload.text, "");
        assert_eq!(payload.user_id, "");
        assert_eq!(payload.channel_id, "");
        assert_eq!(payload.response_url, "");
    }

    #[test]
    fn test_empty_body_parses() {
        assert_eq!(SlashCommandPayload::from_form(""), SlashCommandPayload::default());
    }
}

// =============================================================================
// SIGNATURES
// =============================================================================

mod signature_tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    const SECRET: &str = "8f742231b10e8888abcd99yyyzzz85a5";

    #[test]
    fn test_sign_known_request() {
        let signature = slack::sign(SECRET, "1531420618", "command=%2Fbeerbox&text=two+pints");
        assert_eq!(
            signature,
            "v0=77107b9265b5d82198a18d662b2f03942ac78386acf90a718b8abb107a84bf17"
        );
    }

    #[test]
    fn test_verify_accepts_own_signature() {
        let signature = slack::sign(SECRET, "1531420618", "payload");
        assert!(slack::verify(SECRET, "1531420618", "payload", &signature));
    }

    #[test]
    fn test_verify_rejects_tampered_body() {
        let signature = slack::sign(SECRET, "1531420618", "payload");
        assert!(!slack::verify(SECRET, "1531420618", "tampered", &signature));
    }

    #[test]
    fn test_verify_rejects_tampered_timestamp() {
        let signature = slack::sign(SECRET, "1531420618", "payload");
        assert!(!slack::verify(SECRET, "1531420619", "payload", &signature));
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let signature = slack::sign(SECRET, "1531420618", "payload");
        assert!(!slack::verify("other secret", "1531420618", "payload", &signature));
    }

    #[test]
    fn test_verify_rejects_missing_prefix() {
        let signature = slack::sign(SECRET, "1531420618", "payload");
        assert!(!slack::verify(SECRET, "1531420618", "payload", &signature[3..]));
    }

    #[test]
    fn test_verify_rejects_invalid_hex() {
        assert!(!slack::verify(SECRET, "1531420618", "payload", "v0=not hex at all"));
    }

    #[test]
    fn test_staleness_window() {
        let now = Utc.timestamp_opt(1_531_420_618, 0).unwrap();

        assert!(!slack::is_stale("1531420618", now));
        assert!(!slack::is_stale("1531420318", now), "exactly five minutes old is accepted");
        assert!(slack::is_stale("1531420317", now), "over five minutes old is rejected");
        assert!(!slack::is_stale("1531420918", now), "five minutes of clock skew is accepted");
        assert!(slack::is_stale("1531420919", now), "excessive clock skew is rejected");
    }

    #[test]
    fn test_unparsable_timestamp_is_stale() {
        let now = Utc::now();
        assert!(slack::is_stale("not a number", now));
        assert!(slack::is_stale("", now));
    }
}
