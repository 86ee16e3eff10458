//! GitHub webhook signature verification.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Verifies a GitHub-style HMAC signature header.
///
/// Computes HMAC-SHA256 over the exact raw request body bytes with the shared
/// webhook secret and compares it against the `sha256=<hex>` header value in
/// constant time. Verification must run against the raw bytes as received;
/// re-serializing the JSON body would break signatures for payloads with
/// different key ordering or whitespace.
///
/// # Arguments
/// - `secret` - Shared webhook secret configured on the GitHub repository
/// - `body` - Raw request body bytes, unparsed
/// - `signature_header` - Value of the `x-hub-signature-256` header, if present
///
/// # Returns
/// - `true` - Signature matches
/// - `false` - Missing header, missing secret, malformed header, or mismatch.
///   Never panics.
pub fn verify_signature(secret: &str, body: &[u8], signature_header: Option<&str>) -> bool {
    let Some(header) = signature_header else {
        return false;
    };

    let Some(hex_digest) = header.strip_prefix("sha256=") else {
        return false;
    };

    let Ok(expected) = hex::decode(hex_digest) else {
        return false;
    };

    if secret.is_empty() {
        return false;
    }

    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(body);

    // verify_slice is constant-time
    mac.verify_slice(&expected).is_ok()
}
