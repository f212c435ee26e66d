//! Callback signature verification.
//!
//! The IM platform signs each callback with `sha256(token + RequestTime)`,
//! hex encoded, and passes both values as query parameters.
//!
//! Verification only runs when a token is configured for the application.
//! Without a token every request is accepted at this stage and the
//! deployment relies on network-level controls instead.

use std::time::{SystemTime, UNIX_EPOCH};

use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::warn;

/// Maximum distance in seconds between `RequestTime` and the local clock.
pub const MAX_REQUEST_SKEW_SECS: u64 = 60;

/// Reasons a signature check can fail. All of them are hard rejections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("request time expired")]
    Expired,
    #[error("invalid signature")]
    Mismatch,
}

/// Compute the signature the platform attaches for `request_time`.
pub fn sign_request(token: &str, request_time: i64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hasher.update(request_time.to_string().as_bytes());
    hex::encode(hasher.finalize())
}

/// Verify a callback signature against the current system time.
pub fn verify_signature(token: &str, sign: &str, request_time: i64) -> Result<(), SignatureError> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64;

    verify_signature_at(token, sign, request_time, now)
}

/// Verify a callback signature against an explicit `now` (Unix seconds).
///
/// The request is authentic when the digest matches exactly (case-sensitive)
/// and `|now - request_time| < 60`.
pub fn verify_signature_at(
    token: &str,
    sign: &str,
    request_time: i64,
    now: i64,
) -> Result<(), SignatureError> {
    let skew = now.abs_diff(request_time);
    if skew >= MAX_REQUEST_SKEW_SECS {
        warn!(
            request_time = request_time,
            current_time = now,
            skew_seconds = skew,
            max_skew_seconds = MAX_REQUEST_SKEW_SECS,
            "callback_signature_stale"
        );
        return Err(SignatureError::Expired);
    }

    let expected = sign_request(token, request_time);

    if !constant_time_compare(&expected, sign) {
        warn!(
            expected_length = expected.len(),
            actual_length = sign.len(),
            "callback_signature_mismatch"
        );
        return Err(SignatureError::Mismatch);
    }

    Ok(())
}

/// Constant-time string comparison to prevent timing attacks.
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}

/// Check if signature verification is enabled.
///
/// Any non-empty token enables it, whitespace included.
pub fn is_signature_verification_enabled(token: &Option<String>) -> bool {
    token.as_ref().map(|t| !t.is_empty()).unwrap_or(false)
}
