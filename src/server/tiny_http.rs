//! tiny_http server adapter
//!
//! Handles routing, body parsing, signature verification, and response
//! conversion for tiny_http. Responses travel with their status code so the
//! request loop can log it.

use std::io::Cursor;
use std::io::Read as _;

use chrono::Utc;
use log::info;
use serde::Serialize;
use tiny_http::{Header, Method, Request, Response, Server};

use crate::api::{self, ErrorResponse, Failure, FieldError};
use crate::config::Config;
use crate::health::ApplicationReadiness;
use crate::identifiers;
use crate::slack::{self, EventEnvelope, SlackClient, SlashCommandPayload};

/// A response paired with the status code it carries
type Reply = (u16, Response<Cursor<Vec<u8>>>);

/// Long-lived state shared by every request
struct AppContext {
    config: Config,
    readiness: ApplicationReadiness,
    slack: SlackClient,
}

// =============================================================================
// SERVER LOOP
// =============================================================================

/// Start the HTTP server and handle requests until the process is stopped
pub fn serve(config: Config) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{}", config.port);
    let server = Server::http(&addr).map_err(|e| anyhow::anyhow!("Failed to start server: {e}"))?;

    info!("{} {} listening on {addr}", config.service, config.version);

    let context = AppContext {
        readiness: ApplicationReadiness::new(&config.service),
        slack: SlackClient::new(&config.slack_bot_token),
        config,
    };

    for mut request in server.incoming_requests() {
        let id = identifiers::generate();
        let method = request.method().clone();
        let path = request.url().to_string();

        let (status, response) = handle_request(&mut request, &context);
        info!("[{id}] {method} {path} {status}");

        let _ = request.respond(response);
    }

    Ok(())
}

// =============================================================================
// REQUEST HANDLING
// =============================================================================

/// Route one request to its handler and return the reply
fn handle_request(request: &mut Request, context: &AppContext) -> Reply {
    let path = request.url().to_string();
    let method = request.method().clone();

    match (&method, path.as_str()) {
        (&Method::Get, "/readyz") => {
            handle_result(api::get_readyz(&context.readiness, &context.config))
        }
        (&Method::Get, "/livez") => {
            handle_result(api::get_livez(&context.readiness, &context.config))
        }

        (&Method::Post, "/slack/events") => slack_events(request, context),

        // CORS preflight
        (&Method::Options, _) => preflight_response(),

        _ => error_response(&Failure::http(404, "Not Found")),
    }
}

/// Verify, parse, and dispatch one Slack delivery
///
/// The raw body is read before anything else because the signature covers
/// its exact bytes. Verification is skipped when no signing secret is
/// configured, so a local instance can be poked without signed requests.
fn slack_events(request: &mut Request, context: &AppContext) -> Reply {
    let mut body = String::new();
    if request.as_reader().read_to_string(&mut body).is_err() {
        return error_response(&Failure::http(400, "Bad Request"));
    }

    let secret = &context.config.slack_signing_secret;
    if !secret.is_empty() && !authorized(request, secret, &body) {
        return error_response(&Failure::http(401, "Unauthorized"));
    }

    if is_form_encoded(request) {
        let payload = SlashCommandPayload::from_form(&body);
        handle_result(api::slack_command(&payload))
    } else {
        match serde_json::from_str::<EventEnvelope>(&body) {
            Ok(envelope) => handle_result(api::slack_event(envelope, &context.slack)),
            Err(error) => error_response(&Failure::validation(vec![FieldError::new(
                vec!["body".into()],
                error.to_string(),
            )])),
        }
    }
}

/// Check the request's signature headers against the signing secret
fn authorized(request: &Request, secret: &str, body: &str) -> bool {
    let Some(timestamp) = header_value(request, "X-Slack-Request-Timestamp") else {
        return false;
    };
    let Some(signature) = header_value(request, "X-Slack-Signature") else {
        return false;
    };

    !slack::is_stale(&timestamp, Utc::now()) && slack::verify(secret, &timestamp, body, &signature)
}

/// Look up one header value, case-insensitively
fn header_value(request: &Request, name: &'static str) -> Option<String> {
    request
        .headers()
        .iter()
        .find(|header| header.field.equiv(name))
        .map(|header| header.value.to_string())
}

/// Check whether the request body is form-encoded rather than JSON
fn is_form_encoded(request: &Request) -> bool {
    header_value(request, "Content-Type")
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

/// Convert a handler result to an HTTP response
fn handle_result<T: Serialize>(result: Result<T, Failure>) -> Reply {
    match result {
        Ok(component) => success_response(&component),
        Err(failure) => error_response(&failure),
    }
}

/// Create a successful JSON response from a rendered component
fn success_response<T: Serialize>(component: &T) -> Reply {
    match api::render(component) {
        Ok(body) => json_response(&body, 200),
        Err(error) => error_response(&Failure::from(anyhow::Error::new(error))),
    }
}

/// Create an error JSON response with the failure's status code
fn error_response(failure: &Failure) -> Reply {
    let body = api::render(&ErrorResponse::from(failure)).unwrap_or_else(|_| {
        serde_json::json!({"code": "internal-error", "message": "unknown error"})
    });
    json_response(&body, failure.status_code())
}

/// Create an empty preflight response
fn preflight_response() -> Reply {
    let response = Response::from_data(Vec::new())
        .with_header(Header::from_bytes("Content-Type", "application/json").unwrap())
        .with_status_code(204);
    (204, with_cors(response))
}

/// Serialize a rendered body to a JSON response with a status code
fn json_response(body: &serde_json::Value, status: u16) -> Reply {
    let response = Response::from_data(body.to_string().into_bytes())
        .with_header(Header::from_bytes("Content-Type", "application/json").unwrap())
        .with_status_code(status);
    (status, with_cors(response))
}

/// Attach permissive CORS headers, the same on every response
fn with_cors(response: Response<Cursor<Vec<u8>>>) -> Response<Cursor<Vec<u8>>> {
    response
        .with_header(Header::from_bytes("Access-Control-Allow-Origin", "*").unwrap())
        .with_header(Header::from_bytes("Access-Control-Allow-Credentials", "true").unwrap())
        .with_header(Header::from_bytes("Access-Control-Allow-Methods", "*").unwrap())
        .with_header(Header::from_bytes("Access-Control-Allow-Headers", "*").unwrap())
}
