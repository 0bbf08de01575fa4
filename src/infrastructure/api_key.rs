//! Shared-secret credential for the predict route
//!
//! One secret for the whole process, resolved once at startup and never
//! rotated. There is no per-user identity here; restart the process to change
//! the key.

use rand::Rng;
use rand::distributions::Alphanumeric;
use sha2::{Digest, Sha256};
use tracing::warn;

const API_KEY_ENV: &str = "API_KEY";
const EPHEMERAL_KEY_LEN: usize = 32;

/// Resolve the predict-route credential from the environment.
pub fn resolve_api_key() -> String {
    resolve_from(std::env::var(API_KEY_ENV).ok())
}

fn resolve_from(configured: Option<String>) -> String {
    match configured {
        Some(key) if !key.is_empty() => key,
        _ => {
            let key = generate_ephemeral_key();
            warn!(
                api_key = %key,
                "API_KEY not set; generated an ephemeral key for this process. \
                 This is a development convenience, not a security control"
            );
            key
        }
    }
}

fn generate_ephemeral_key() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(EPHEMERAL_KEY_LEN)
        .map(char::from)
        .collect()
}

/// Compare a presented key against the configured secret.
///
/// Compares fixed-size digests rather than the raw strings, so the check does
/// not short-circuit on the first differing byte.
pub fn verify_api_key(presented: &str, expected: &str) -> bool {
    Sha256::digest(presented.as_bytes()) == Sha256::digest(expected.as_bytes())
}
