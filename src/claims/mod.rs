//! Registered claims and temporal validation
//!
//! Claims are the named facts carried in the token payload. This module
//! defines the registered subset from
//! [RFC 7519 Section 4.1](https://datatracker.ietf.org/doc/html/rfc7519#section-4.1)
//! that the pipelines understand, and the temporal checks the verifier
//! applies to them.

use crate::error::{Error, Result};
use crate::time::NumericDate;

use miniserde::json::{Number, Object, Value};

/// Claim names reserved for the registered claims
///
/// Custom claims must not use any of these; the sign pipeline rejects the
/// collision with [`Error::ReservedClaim`].
pub const REGISTERED_CLAIM_NAMES: [&str; 6] = ["sub", "aud", "exp", "nbf", "iat", "jti"];

/// Check whether a claim name is a registered claim name
pub fn is_registered_claim(name: &str) -> bool {
    REGISTERED_CLAIM_NAMES.contains(&name)
}

/// Registered JWT claims
///
/// Each field is optional; a claim that is absent from the payload stays
/// `None` and is never serialized as `null`.
#[derive(Debug, Clone, Default)]
pub struct RegisteredClaims {
    /// Subject (sub) - identifies the principal that is the subject of the JWT
    pub subject: Option<String>,

    /// Audience (aud) - identifies the recipients that the JWT is intended for
    pub audience: Option<String>,

    /// Expiration Time (exp) - seconds since the Unix epoch
    pub expiration: Option<i64>,

    /// Not Before (nbf) - the time before which the JWT MUST NOT be accepted
    pub not_before: Option<i64>,

    /// Issued At (iat) - always set by the sign pipeline, never caller-supplied
    pub issued_at: Option<i64>,

    /// JWT ID (jti) - a unique identifier for the JWT
    pub jwt_id: Option<String>,
}

impl RegisteredClaims {
    /// Extract the registered subset from a decoded payload object
    ///
    /// A registered claim carrying the wrong JSON type is rejected as a
    /// malformed segment, the same as invalid payload JSON.
    pub(crate) fn from_object(payload: &Object) -> Result<Self> {
        Ok(Self {
            subject: string_claim(payload, "sub")?,
            audience: string_claim(payload, "aud")?,
            expiration: numeric_claim(payload, "exp")?,
            not_before: numeric_claim(payload, "nbf")?,
            issued_at: numeric_claim(payload, "iat")?,
            jwt_id: string_claim(payload, "jti")?,
        })
    }
}

fn string_claim(payload: &Object, name: &str) -> Result<Option<String>> {
    match payload.get(name) {
        None => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(Error::MalformedSegment(format!(
            "claim '{name}' must be a string"
        ))),
    }
}

fn numeric_claim(payload: &Object, name: &str) -> Result<Option<i64>> {
    match payload.get(name) {
        None => Ok(None),
        Some(Value::Number(Number::I64(value))) => Ok(Some(*value)),
        Some(Value::Number(Number::U64(value))) if *value <= i64::MAX as u64 => {
            Ok(Some(*value as i64))
        }
        Some(_) => Err(Error::MalformedSegment(format!(
            "claim '{name}' must be an integer number of seconds"
        ))),
    }
}

/// Check the temporal claims against the current time
///
/// Applied only after the signature gate: a forged token must be rejected
/// as forged, not as expired. The skew widens the acceptance window in both
/// directions; the default is zero.
pub(crate) fn validate_temporal(
    claims: &RegisteredClaims,
    now: NumericDate,
    skew: u64,
) -> Result<()> {
    let now = now.as_secs();
    let skew_secs = skew as i64;

    if let Some(exp) = claims.expiration {
        if now >= exp.saturating_add(skew_secs) {
            return Err(Error::TokenExpired {
                expired_at: exp,
                now,
                skew,
            });
        }
    }

    if let Some(nbf) = claims.not_before {
        if now < nbf.saturating_sub(skew_secs) {
            return Err(Error::TokenNotYetValid {
                not_before: nbf,
                now,
                skew,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    fn make_claims(exp: Option<i64>, nbf: Option<i64>) -> RegisteredClaims {
        RegisteredClaims {
            expiration: exp,
            not_before: nbf,
            ..Default::default()
        }
    }

    fn check(claims: &RegisteredClaims, skew: u64) -> Result<()> {
        validate_temporal(claims, NumericDate::from_secs(NOW), skew)
    }

    #[test]
    fn test_no_temporal_claims_is_valid() {
        assert!(check(&make_claims(None, None), 0).is_ok());
    }

    #[test]
    fn test_exp_boundaries() {
        // exp strictly in the future is valid
        assert!(check(&make_claims(Some(NOW + 1), None), 0).is_ok());

        // exp equal to now is already expired
        let result = check(&make_claims(Some(NOW), None), 0);
        assert!(matches!(result, Err(Error::TokenExpired { .. })));

        let result = check(&make_claims(Some(NOW - 1), None), 0);
        assert!(matches!(
            result,
            Err(Error::TokenExpired {
                expired_at,
                now,
                skew: 0,
            }) if expired_at == NOW - 1 && now == NOW
        ));
    }

    #[test]
    fn test_nbf_boundaries() {
        // nbf equal to now is valid
        assert!(check(&make_claims(None, Some(NOW)), 0).is_ok());
        assert!(check(&make_claims(None, Some(NOW - 1)), 0).is_ok());

        let result = check(&make_claims(None, Some(NOW + 1)), 0);
        assert!(matches!(result, Err(Error::TokenNotYetValid { .. })));
    }

    #[test]
    fn test_clock_skew_widens_both_windows() {
        // Expired 30 seconds ago, tolerated under 60 seconds of skew
        assert!(check(&make_claims(Some(NOW - 30), None), 60).is_ok());
        assert!(check(&make_claims(Some(NOW - 90), None), 60).is_err());

        // Active in 30 seconds, tolerated under 60 seconds of skew
        assert!(check(&make_claims(None, Some(NOW + 30)), 60).is_ok());
        assert!(check(&make_claims(None, Some(NOW + 90)), 60).is_err());
    }

    #[test]
    fn test_expiry_checked_before_not_before() {
        let result = check(&make_claims(Some(NOW - 10), Some(NOW + 10)), 0);
        assert!(matches!(result, Err(Error::TokenExpired { .. })));
    }

    #[test]
    fn test_from_object_extracts_registered_claims() {
        let payload: Object = miniserde::json::from_str(
            r#"{"sub":"user-1","aud":"api","exp":1700000060,"nbf":1699999990,"iat":1700000000,"jti":"id-1","role":"admin"}"#,
        )
        .unwrap();

        let claims = RegisteredClaims::from_object(&payload).unwrap();
        assert_eq!(claims.subject.as_deref(), Some("user-1"));
        assert_eq!(claims.audience.as_deref(), Some("api"));
        assert_eq!(claims.expiration, Some(1_700_000_060));
        assert_eq!(claims.not_before, Some(1_699_999_990));
        assert_eq!(claims.issued_at, Some(1_700_000_000));
        assert_eq!(claims.jwt_id.as_deref(), Some("id-1"));
    }

    #[test]
    fn test_from_object_ignores_unregistered_claims() {
        let payload: Object = miniserde::json::from_str(r#"{"role":"admin"}"#).unwrap();
        let claims = RegisteredClaims::from_object(&payload).unwrap();
        assert!(claims.subject.is_none());
        assert!(claims.expiration.is_none());
    }

    #[test]
    fn test_from_object_rejects_wrong_typed_claims() {
        let payload: Object = miniserde::json::from_str(r#"{"exp":"soon"}"#).unwrap();
        assert!(matches!(
            RegisteredClaims::from_object(&payload),
            Err(Error::MalformedSegment(_))
        ));

        let payload: Object = miniserde::json::from_str(r#"{"sub":42}"#).unwrap();
        assert!(matches!(
            RegisteredClaims::from_object(&payload),
            Err(Error::MalformedSegment(_))
        ));
    }

    #[test]
    fn test_registered_claim_names() {
        for name in ["sub", "aud", "exp", "nbf", "iat", "jti"] {
            assert!(is_registered_claim(name));
        }
        assert!(!is_registered_claim("iss"));
        assert!(!is_registered_claim("role"));
    }
}
