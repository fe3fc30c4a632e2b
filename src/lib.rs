//! # jwtmint - Minimal, Type-Safe JWT Signing and Verification
//!
//! > Minimal, type-safe JSON Web Token (JWT) issuance and verification for Rust.
//!
//! **jwtmint** covers the full sign/verify pipeline: header and payload
//! assembly, algorithm-to-key-shape binding, canonical encoding, signature
//! generation and verification, and registered-claim validation. The
//! cryptographic primitives themselves are delegated to trusted providers
//! (`hmac`/`sha2` for HMAC, `ring` for RSA); key storage, JWKS discovery,
//! and transport concerns are out of scope.
//!
//! ## Quick Start
//!
//! ```ignore
//! use jwtmint::*;
//!
//! let signed = sign(
//!     SignRequest::new(Key::secret(b"s3cret".to_vec()))
//!         .subject("user-1")
//!         .expires_in(Duration::from_secs(60)?),
//! )?;
//!
//! let payload = verify(
//!     &signed.token,
//!     &Key::secret(b"s3cret".to_vec()),
//!     AlgorithmId::HS256,
//!     &VerifyOptions::default(),
//! )?;
//!
//! println!("Subject: {:?}", payload.subject());
//! ```
//!
//! ## Pipelines
//!
//! Issuance assembles the token left to right:
//!
//! ```text
//! SignRequest ──► payload (registered + custom claims, iat injected)
//!             ──► base64url(header) "." base64url(payload)
//!             ──► signature over that exact ASCII string
//!             ──► header.payload.signature
//! ```
//!
//! Verification reverses it: structural check, algorithm comparison, key
//! capability check, signature verification, then temporal claims. The
//! signature gate runs before the expiry check so a forged-but-unexpired
//! token is rejected as forged.
//!
//! ## Algorithm Support
//!
//! All algorithms implement a common `Algorithm` trait and are dispatched
//! through a single scheme table:
//!
//! - **HS256**: HMAC with SHA-256, bound to [`SecretKey`]
//! - **RS256**: RSA PKCS#1 v1.5 with SHA-256, bound to [`PrivateKey`]
//!   (sign) and [`PublicKey`] (verify)
//!
//! Adding an algorithm means adding one table entry; the pipelines never
//! branch on algorithm names themselves.
//!
//! ## Security
//!
//! ### Algorithm Confusion Prevention
//!
//! The verifier requires the expected algorithm as an argument and compares
//! it against the token's `alg` header. The token's own declaration is
//! never used to select the key or algorithm.
//!
//! ### Key/Algorithm Binding
//!
//! Each algorithm family is bound to exactly one key shape. Signing HS256
//! with an RSA key, or RS256 with a secret key, fails with
//! `IncompatibleKeyType` before any cryptographic provider call.
//!
//! ### "none" Algorithm Rejection
//!
//! The `"none"` algorithm (unsigned tokens) is always rejected per
//! [RFC 8725](https://datatracker.ietf.org/doc/html/rfc8725).
//!
//! ### Timing Attack Protection
//!
//! HMAC signature verification uses constant-time comparison via the
//! [`constant_time_eq`](https://crates.io/crates/constant_time_eq) crate,
//! preventing timing-based key recovery attacks.
//!
//! ## References
//!
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519) — JSON Web Token (JWT)
//! - [RFC 4648](https://datatracker.ietf.org/doc/html/rfc4648) — Base64URL encoding
//! - [RFC 8725](https://datatracker.ietf.org/doc/html/rfc8725) — JSON Web Signature Best Practices

// Core modules
pub mod error;
pub mod time;
pub mod utils;

// Algorithm system
pub mod algorithm;
pub mod keys;

// Claims and token structure
pub mod claims;
pub mod token;

// Pipelines (main public API)
pub mod sign;
pub mod verify;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use sign::{sign, sign_with_clock, Payload, SignRequest, SignedToken};
pub use verify::{verify, verify_with_clock, VerifiedPayload, VerifyOptions};

pub use algorithm::AlgorithmId;
pub use claims::RegisteredClaims;
pub use error::{Error, Result};
pub use keys::{Key, PrivateKey, PublicKey, SecretKey};
pub use time::{Clock, Duration, FixedClock, NumericDate, SystemClock};
pub use token::{Header, TokenHeader};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use miniserde::json::{Number, Value};

    const NOW: i64 = 1_700_000_000;

    // The concrete scenario from the crate contract: HS256, secret
    // "s3cret", subject "user-1", 60 second expiry
    #[test]
    fn test_hs256_issuance_scenario() {
        let request = SignRequest::new(Key::secret(b"s3cret".to_vec()))
            .algorithm(AlgorithmId::HS256)
            .subject("user-1")
            .expires_in(Duration::from_secs(60).unwrap());
        let signed = sign_with_clock(request, &FixedClock(NOW)).unwrap();

        assert_eq!(signed.header.algorithm, "HS256");
        assert_eq!(signed.header.token_type, "JWT");

        let header_b64 = signed.token.split('.').next().unwrap();
        assert_eq!(
            utils::base64url::decode(header_b64).unwrap(),
            r#"{"alg":"HS256","typ":"JWT"}"#
        );

        assert!(matches!(
            signed.payload.get("sub"),
            Some(Value::String(sub)) if sub == "user-1"
        ));
        assert!(matches!(
            signed.payload.get("iat"),
            Some(Value::Number(Number::I64(iat))) if *iat == NOW
        ));
        assert!(matches!(
            signed.payload.get("exp"),
            Some(Value::Number(Number::I64(exp))) if *exp == NOW + 60
        ));

        // The right key returns the same payload
        let payload = verify_with_clock(
            &signed.token,
            &Key::secret(b"s3cret".to_vec()),
            AlgorithmId::HS256,
            &VerifyOptions::default(),
            &FixedClock(NOW),
        )
        .unwrap();
        assert_eq!(payload.subject(), Some("user-1"));
        assert_eq!(payload.issued_at(), Some(NOW));
        assert_eq!(payload.expiration(), Some(NOW + 60));

        // The wrong key fails with InvalidSignature
        let result = verify_with_clock(
            &signed.token,
            &Key::secret(b"wrong".to_vec()),
            AlgorithmId::HS256,
            &VerifyOptions::default(),
            &FixedClock(NOW),
        );
        assert!(matches!(result, Err(Error::InvalidSignature)));
    }

    #[test]
    fn test_tampered_payload_fails() {
        let request = SignRequest::new(Key::secret(b"s3cret".to_vec())).subject("user-1");
        let signed = sign_with_clock(request, &FixedClock(NOW)).unwrap();

        // Swap the payload for one claiming a different subject
        let parts: Vec<&str> = signed.token.split('.').collect();
        let forged_payload = utils::base64url::encode(r#"{"sub":"admin"}"#);
        let forged = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);

        let result = verify_with_clock(
            &forged,
            &Key::secret(b"s3cret".to_vec()),
            AlgorithmId::HS256,
            &VerifyOptions::default(),
            &FixedClock(NOW),
        );
        assert!(matches!(result, Err(Error::InvalidSignature)));
    }

    #[test]
    fn test_round_trip_preserves_claim_presence() {
        let request = SignRequest::new(Key::secret(b"s3cret".to_vec()))
            .subject("user-1")
            .audience("api.example.com")
            .jwt_id("token-42")
            .claim("role", Value::String("admin".to_string()));
        let signed = sign_with_clock(request, &FixedClock(NOW)).unwrap();

        let payload = verify_with_clock(
            &signed.token,
            &Key::secret(b"s3cret".to_vec()),
            AlgorithmId::HS256,
            &VerifyOptions::default(),
            &FixedClock(NOW),
        )
        .unwrap();

        assert_eq!(payload.subject(), Some("user-1"));
        assert_eq!(payload.audience(), Some("api.example.com"));
        assert_eq!(payload.jwt_id(), Some("token-42"));
        assert_eq!(payload.issued_at(), Some(NOW));
        // Claims that were never set stay absent
        assert_eq!(payload.expiration(), None);
        assert_eq!(payload.not_before(), None);
    }
}
