//! Request signature verification
//!
//! Slack signs every request with the v0 scheme: an HMAC-SHA256 over
//! `v0:{timestamp}:{body}` keyed by the app's signing secret, sent
//! hex-encoded with a `v0=` prefix next to the request timestamp.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Maximum accepted distance between a request timestamp and now
const TOLERANCE_SECONDS: i64 = 60 * 5;

/// Compute the `v0=` signature for a request
#[must_use]
pub fn sign(secret: &str, timestamp: &str, body: &str) -> String {
    format!("v0={}", hex::encode(mac_for(secret, timestamp, body).finalize().into_bytes()))
}

/// Verify a request signature against the signing secret
///
/// The comparison goes through the MAC verification primitive, which is
/// constant-time. Signatures without the `v0=` prefix or with invalid hex
/// never verify.
#[must_use]
pub fn verify(secret: &str, timestamp: &str, body: &str, signature: &str) -> bool {
    let Some(tag) = signature.strip_prefix("v0=") else {
        return false;
    };
    let Ok(tag) = hex::decode(tag) else {
        return false;
    };
    mac_for(secret, timestamp, body).verify_slice(&tag).is_ok()
}

/// Whether a request timestamp is too old or too far ahead to accept
///
/// Timestamps further than five minutes from now are rejected; an absent or
/// unparsable timestamp counts as stale.
#[must_use]
pub fn is_stale(timestamp: &str, now: DateTime<Utc>) -> bool {
    timestamp
        .parse::<i64>()
        .map_or(true, |seconds| (now.timestamp() - seconds).abs() > TOLERANCE_SECONDS)
}

/// Keyed MAC over the v0 base string
fn mac_for(secret: &str, timestamp: &str, body: &str) -> HmacSha256 {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("hmac accepts keys of any length");
    mac.update(format!("v0:{timestamp}:{body}").as_bytes());
    mac
}
