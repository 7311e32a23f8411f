//! Ingest secret generation and hashing.
//!
//! Every project carries one ingest secret that authenticates event
//! submissions. The plaintext is shown to the project owner exactly once;
//! only its SHA-256 hash is stored, so a database leak does not let anyone
//! write events into foreign projects.

use rand::Rng;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Length of the generated ingest secret (alphanumeric characters).
pub const SECRET_LENGTH: usize = 48;

/// Number of leading characters stored as a human-visible prefix.
pub const SECRET_PREFIX_LENGTH: usize = 8;

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// The result of generating a new ingest secret.
pub struct GeneratedIngestSecret {
    /// The plaintext secret (shown to the owner exactly once, never stored).
    pub plaintext: String,
    /// The first [`SECRET_PREFIX_LENGTH`] characters, kept for display.
    pub prefix: String,
    /// The SHA-256 hex digest of the plaintext (stored in the database).
    pub hash: String,
}

/// Generate a new random ingest secret.
pub fn generate_ingest_secret() -> GeneratedIngestSecret {
    let secret: String = rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(SECRET_LENGTH)
        .map(char::from)
        .collect();

    let prefix = extract_prefix(&secret).to_string();
    let hash = hash_ingest_secret(&secret);

    GeneratedIngestSecret {
        plaintext: secret,
        prefix,
        hash,
    }
}

// ---------------------------------------------------------------------------
// Hashing
// ---------------------------------------------------------------------------

/// Compute the SHA-256 hex digest of an ingest secret.
///
/// Used both during project creation (to store the hash) and during event
/// submission (to resolve the submitting project by hash).
pub fn hash_ingest_secret(secret: &str) -> String {
    crate::hashing::sha256_hex(secret.as_bytes())
}

/// Extract the display prefix from a plaintext secret.
pub fn extract_prefix(secret: &str) -> &str {
    &secret[..SECRET_PREFIX_LENGTH.min(secret.len())]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
