//! Error types for JWT signing and verification
//!
//! This module defines the error taxonomy for both pipelines. All errors
//! implement `std::error::Error` and carry enough context to distinguish
//! the failure kind; callers never receive a bare boolean.

/// Errors that can occur during JWT signing or verification
///
/// The variants cover:
/// - Structural errors (token format, Base64URL, UTF-8, JSON)
/// - Algorithm errors (unsupported tag, caller/token algorithm disagreement)
/// - Key errors (capability mismatch, provider-rejected key material)
/// - Signing-side errors (non-positive durations, reserved claim names)
/// - Verification errors (bad signature, temporal claim violations)
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Token does not consist of exactly three validly-encoded segments
    MalformedToken,

    /// A segment failed Base64URL, UTF-8, or JSON decoding
    MalformedSegment(String),

    /// Algorithm tag is not present in the signature scheme table
    ///
    /// The unsigned `"none"` algorithm is always rejected per
    /// [RFC 8725](https://datatracker.ietf.org/doc/html/rfc8725).
    UnsupportedAlgorithm(String),

    /// Token's declared algorithm disagrees with the caller-expected one
    ///
    /// The verifier never trusts the token's own `alg` field to select the
    /// key or algorithm; the caller supplies the expected algorithm
    /// out-of-band.
    AlgorithmMismatch { expected: String, found: String },

    /// Key capability does not match the algorithm family
    ///
    /// Raised before any cryptographic provider call is made.
    IncompatibleKeyType {
        algorithm: String,
        expected_key_type: String,
        actual_key_type: String,
    },

    /// A supplied expiry/not-before duration is not strictly positive
    InvalidDuration(i64),

    /// A custom claim collides with a registered claim name
    ReservedClaim(String),

    /// Key material was rejected by the cryptography provider
    InvalidKey(String),

    /// The cryptography provider failed to produce a signature
    SigningFailed,

    /// Cryptographic signature verification failed
    InvalidSignature,

    /// Token has expired (exp claim)
    TokenExpired { expired_at: i64, now: i64, skew: u64 },

    /// Token not yet valid (nbf claim)
    TokenNotYetValid { not_before: i64, now: i64, skew: u64 },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MalformedToken => write!(
                f,
                "Malformed token: expected three Base64URL segments separated by '.'"
            ),
            Error::MalformedSegment(msg) => write!(f, "Malformed segment: {msg}"),
            Error::UnsupportedAlgorithm(alg) => {
                write!(f, "Algorithm '{alg}' is not supported")
            }
            Error::AlgorithmMismatch { expected, found } => {
                write!(
                    f,
                    "Algorithm mismatch: expected '{expected}', token declares '{found}'"
                )
            }
            Error::IncompatibleKeyType {
                algorithm,
                expected_key_type,
                actual_key_type,
            } => {
                write!(
                    f,
                    "Incompatible key type for algorithm '{algorithm}': expected {expected_key_type} key, got {actual_key_type} key"
                )
            }
            Error::InvalidDuration(secs) => {
                write!(f, "Duration must be a positive number of seconds: {secs}")
            }
            Error::ReservedClaim(name) => {
                write!(
                    f,
                    "Custom claim '{name}' collides with a registered claim name"
                )
            }
            Error::InvalidKey(msg) => write!(f, "Key material rejected: {msg}"),
            Error::SigningFailed => write!(f, "Signature generation failed"),
            Error::InvalidSignature => write!(f, "Signature verification failed"),
            Error::TokenExpired {
                expired_at,
                now,
                skew,
            } => {
                write!(
                    f,
                    "Token expired at {expired_at} (now: {now}, skew: {skew}s)"
                )
            }
            Error::TokenNotYetValid {
                not_before,
                now,
                skew,
            } => {
                write!(
                    f,
                    "Token not valid until {not_before} (now: {now}, skew: {skew}s)"
                )
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result type alias for jwtmint operations
pub type Result<T> = std::result::Result<T, Error>;
