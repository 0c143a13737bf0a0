//! Echo demo vocabulary.
//!
//! This module maps received payloads to responses. The vocabulary is fixed:
//! 1. **"ping"** answers `Pong!`.
//! 2. **"time"** answers the current UTC time in RFC 3339 form.
//! 3. Anything else answers `Unknown command`; undecodable payloads answer
//!    `Error: Invalid data`.

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Computes the response for one received payload.
///
/// Input is trimmed and matched case-insensitively.
///
/// # Arguments
///
/// * `data` - The raw received bytes.
///
/// # Returns
///
/// The response payload to send back.
pub fn respond(data: &[u8]) -> Vec<u8> {
    let Ok(text) = std::str::from_utf8(data) else {
        return b"Error: Invalid data".to_vec();
    };
    match text.trim().to_ascii_lowercase().as_str() {
        "ping" => b"Pong!".to_vec(),
        "time" => now_utc_string().into_bytes(),
        _ => b"Unknown command".to_vec(),
    }
}

/// Returns the current UTC time as an RFC 3339 string.
///
/// Falls back to the raw UNIX timestamp if formatting fails.
pub fn now_utc_string() -> String {
    let now = OffsetDateTime::now_utc();
    now.format(&Rfc3339)
        .unwrap_or_else(|_| now.unix_timestamp().to_string())
}

/// Returns the current wall-clock time as `HH:MM:SS`, used to timestamp
/// replies printed by the clients.
pub fn now_clock_string() -> String {
    let now = OffsetDateTime::now_utc();
    format!("{:02}:{:02}:{:02}", now.hour(), now.minute(), now.second())
}
