//! Verify pipeline
//!
//! Reverses the sign pipeline: structural checks, algorithm comparison, key
//! capability check, signature verification, then temporal claims. The
//! caller supplies the expected algorithm out-of-band; the token's own
//! `alg` field is never trusted to select the key or algorithm.
//!
//! Ordering: structural and algorithm checks run before any cryptographic
//! work, and the signature gate runs before the temporal checks so a
//! forged-but-unexpired token is rejected as forged.

use crate::algorithm::{get_scheme, AlgorithmId};
use crate::claims::{is_registered_claim, validate_temporal, RegisteredClaims};
use crate::error::{Error, Result};
use crate::keys::Key;
use crate::time::{Clock, SystemClock};
use crate::token::{self, TokenHeader};
use crate::utils::base64url;

use miniserde::json::{self, Object, Value};

/// Options for the verify pipeline
pub struct VerifyOptions {
    /// Clock-skew tolerance in seconds applied to `exp` and `nbf`
    /// (default: 0)
    pub clock_skew_seconds: u64,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            clock_skew_seconds: 0,
        }
    }
}

impl VerifyOptions {
    /// Create options with the default zero skew
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the clock-skew tolerance
    pub fn clock_skew(mut self, seconds: u64) -> Self {
        self.clock_skew_seconds = seconds;
        self
    }
}

/// The decoded claim set of a token that passed signature and temporal
/// checks
///
/// Carries no reference to the raw token.
#[derive(Debug, Clone)]
pub struct VerifiedPayload {
    registered: RegisteredClaims,
    custom: Object,
}

impl VerifiedPayload {
    /// The registered claims
    pub fn registered(&self) -> &RegisteredClaims {
        &self.registered
    }

    /// Subject (sub) claim
    pub fn subject(&self) -> Option<&str> {
        self.registered.subject.as_deref()
    }

    /// Audience (aud) claim
    pub fn audience(&self) -> Option<&str> {
        self.registered.audience.as_deref()
    }

    /// Expiration (exp) claim
    pub fn expiration(&self) -> Option<i64> {
        self.registered.expiration
    }

    /// Not-before (nbf) claim
    pub fn not_before(&self) -> Option<i64> {
        self.registered.not_before
    }

    /// Issued-at (iat) claim
    pub fn issued_at(&self) -> Option<i64> {
        self.registered.issued_at
    }

    /// JWT ID (jti) claim
    pub fn jwt_id(&self) -> Option<&str> {
        self.registered.jwt_id.as_deref()
    }

    /// The custom (non-registered) claims
    pub fn custom_claims(&self) -> &Object {
        &self.custom
    }

    /// Look up a custom claim by name
    pub fn claim(&self, name: &str) -> Option<&Value> {
        self.custom.get(name)
    }
}

/// Verify a token using the system clock
pub fn verify(
    token: &str,
    key: &Key,
    expected_algorithm: AlgorithmId,
    options: &VerifyOptions,
) -> Result<VerifiedPayload> {
    verify_with_clock(token, key, expected_algorithm, options, &SystemClock)
}

/// Verify a token reading the current time from an explicit clock
pub fn verify_with_clock(
    token: &str,
    key: &Key,
    expected_algorithm: AlgorithmId,
    options: &VerifyOptions,
    clock: &dyn Clock,
) -> Result<VerifiedPayload> {
    // 1. Structural check
    let (header_b64, payload_b64, signature_b64) = token::split_segments(token)?;

    // 2. The token's declared algorithm must match the caller's expectation
    let header_json = base64url::decode(header_b64)?;
    let header: TokenHeader = json::from_str(&header_json)
        .map_err(|_| Error::MalformedSegment("header is not a valid JSON object".to_string()))?;

    if header.algorithm != expected_algorithm.as_str() {
        return Err(Error::AlgorithmMismatch {
            expected: expected_algorithm.as_str().to_string(),
            found: header.algorithm,
        });
    }

    let payload_json = base64url::decode(payload_b64)?;
    let signature = base64url::decode_bytes(signature_b64)?;

    // 3 + 4. Capability check, then signature verification, both inside the
    // scheme selected by the expected algorithm
    let scheme = get_scheme(&expected_algorithm);
    let signing_input = format!("{header_b64}.{payload_b64}");
    scheme.verify(&signing_input, &signature, key)?;

    // The payload is untrusted until the signature gate has passed; it is
    // parsed once and the registered subset extracted from the object
    let full: Object = json::from_str(&payload_json)
        .map_err(|_| Error::MalformedSegment("payload is not a valid JSON object".to_string()))?;
    let registered = RegisteredClaims::from_object(&full)?;

    // 5. Temporal checks
    validate_temporal(&registered, clock.now(), options.clock_skew_seconds)?;

    let mut custom = Object::new();
    for (name, value) in full.iter() {
        if !is_registered_claim(name) {
            custom.insert(name.clone(), value.clone());
        }
    }

    Ok(VerifiedPayload { registered, custom })
}
