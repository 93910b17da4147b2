//! Webhook authentication.
//!
//! Telegram echoes the `secret_token` registered with `setWebhook` in a header
//! on every delivery; `server::webhook` calls [`webhook_secret_matches`] before
//! reading the request body.

use axum::http::HeaderMap;
use subtle::ConstantTimeEq;

/// Header Telegram sets to the secret registered with `setWebhook`.
pub const SECRET_HEADER: &str = "X-Telegram-Bot-Api-Secret-Token";

/// True when the request carries the configured webhook secret.
///
/// A missing or non-ASCII header never matches, and neither does anything
/// when no secret is configured. The byte comparison runs in constant time.
pub fn webhook_secret_matches(headers: &HeaderMap, expected: &str) -> bool {
    if expected.is_empty() {
        return false;
    }

    let Some(provided) = headers.get(SECRET_HEADER).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    if provided.len() != expected.len() {
        return false;
    }
    provided.as_bytes().ct_eq(expected.as_bytes()).into()
}
