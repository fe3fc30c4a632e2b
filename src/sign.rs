//! Sign pipeline
//!
//! Assembles header, payload, and signature into a token. The payload holds
//! only the claims actually present (absent claims are omitted, never
//! serialized as `null`), with `iat` injected unconditionally from the
//! clock, and emits the registered claims in their RFC 7519 order followed
//! by the custom claims.

use crate::algorithm::{get_scheme, AlgorithmId};
use crate::claims::is_registered_claim;
use crate::error::{Error, Result};
use crate::keys::Key;
use crate::time::{Clock, Duration, NumericDate, SystemClock};
use crate::token::Header;
use crate::utils::base64url;

use miniserde::json::{self, Number, Object, Value};
use miniserde::ser::{Fragment, Map};
use miniserde::Serialize;
use std::borrow::Cow;

/// Configuration for a signing call
///
/// # Example
/// ```ignore
/// let signed = sign(
///     SignRequest::new(Key::secret(b"s3cret".to_vec()))
///         .subject("user-1")
///         .expires_in(Duration::from_secs(60)?),
/// )?;
/// ```
pub struct SignRequest {
    algorithm: AlgorithmId,
    key: Key,
    subject: Option<String>,
    audience: Option<String>,
    jwt_id: Option<String>,
    expires_in: Option<Duration>,
    active_after: Option<Duration>,
    custom_claims: Object,
}

impl SignRequest {
    /// Create a signing request with the default algorithm (HS256)
    pub fn new(key: Key) -> Self {
        Self {
            algorithm: AlgorithmId::default(),
            key,
            subject: None,
            audience: None,
            jwt_id: None,
            expires_in: None,
            active_after: None,
            custom_claims: Object::new(),
        }
    }

    /// Select the signing algorithm
    pub fn algorithm(mut self, algorithm: AlgorithmId) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the subject (sub) claim
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the audience (aud) claim
    pub fn audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// Set the JWT ID (jti) claim
    pub fn jwt_id(mut self, jwt_id: impl Into<String>) -> Self {
        self.jwt_id = Some(jwt_id.into());
        self
    }

    /// Derive the expiration (exp) claim as `now + duration`
    pub fn expires_in(mut self, duration: Duration) -> Self {
        self.expires_in = Some(duration);
        self
    }

    /// Derive the not-before (nbf) claim as `now + duration`
    pub fn active_after(mut self, duration: Duration) -> Self {
        self.active_after = Some(duration);
        self
    }

    /// Add a single custom claim
    ///
    /// Names colliding with registered claim names are rejected when the
    /// request is signed.
    pub fn claim(mut self, name: impl Into<String>, value: Value) -> Self {
        self.custom_claims.insert(name.into(), value);
        self
    }

    /// Replace the custom claims with a whole object
    pub fn custom_claims(mut self, claims: Object) -> Self {
        self.custom_claims = claims;
        self
    }
}

/// The claim set encoded into a token's payload segment
///
/// Serializes in insertion order: registered claims first (`sub`, `aud`,
/// `exp`, `nbf`, `iat`, `jti`), then custom claims.
#[derive(Debug, Clone, Default)]
pub struct Payload {
    entries: Vec<(String, Value)>,
}

impl Payload {
    fn push(&mut self, name: &str, value: Value) {
        self.entries.push((name.to_string(), value));
    }

    /// Look up a claim by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, value)| value)
    }

    /// Number of claims in the payload
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the payload carries no claims
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Payload {
    fn begin(&self) -> Fragment {
        struct Entries<'a> {
            entries: &'a [(String, Value)],
            pos: usize,
        }

        impl<'a> Map for Entries<'a> {
            fn next(&mut self) -> Option<(Cow<str>, &dyn Serialize)> {
                let (name, value) = self.entries.get(self.pos)?;
                self.pos += 1;
                Some((Cow::Borrowed(name.as_str()), value as &dyn Serialize))
            }
        }

        Fragment::Map(Box::new(Entries {
            entries: &self.entries,
            pos: 0,
        }))
    }
}

/// A signed token together with the header and payload that produced it
#[derive(Debug, Clone)]
pub struct SignedToken {
    /// The three Base64URL segments joined by `.`
    pub token: String,

    /// The header that was encoded into the first segment
    pub header: Header,

    /// The full claim set that was encoded into the second segment
    pub payload: Payload,
}

/// Sign a token using the system clock
pub fn sign(request: SignRequest) -> Result<SignedToken> {
    sign_with_clock(request, &SystemClock)
}

/// Sign a token reading the current time from an explicit clock
pub fn sign_with_clock(request: SignRequest, clock: &dyn Clock) -> Result<SignedToken> {
    for name in request.custom_claims.keys() {
        if is_registered_claim(name) {
            return Err(Error::ReservedClaim(name.clone()));
        }
    }

    let header = Header::new(request.algorithm);
    let now = clock.now();
    let payload = build_payload(&request, now);

    let encoded_header = base64url::encode(&json::to_string(&header));
    let encoded_payload = base64url::encode(&json::to_string(&payload));
    let signing_input = format!("{encoded_header}.{encoded_payload}");

    // Key capability is checked by the scheme before any provider call
    let scheme = get_scheme(&request.algorithm);
    let signature = scheme.sign(&signing_input, &request.key)?;
    let encoded_signature = base64url::encode_bytes(&signature);

    Ok(SignedToken {
        token: format!("{signing_input}.{encoded_signature}"),
        header,
        payload,
    })
}

fn build_payload(request: &SignRequest, now: NumericDate) -> Payload {
    let mut payload = Payload::default();

    if let Some(subject) = &request.subject {
        payload.push("sub", Value::String(subject.clone()));
    }
    if let Some(audience) = &request.audience {
        payload.push("aud", Value::String(audience.clone()));
    }
    if let Some(expires_in) = request.expires_in {
        let exp = now.add(expires_in).as_secs();
        payload.push("exp", Value::Number(Number::I64(exp)));
    }
    if let Some(active_after) = request.active_after {
        let nbf = now.add(active_after).as_secs();
        payload.push("nbf", Value::Number(Number::I64(nbf)));
    }
    payload.push("iat", Value::Number(Number::I64(now.as_secs())));
    if let Some(jwt_id) = &request.jwt_id {
        payload.push("jti", Value::String(jwt_id.clone()));
    }

    for (name, value) in request.custom_claims.iter() {
        payload.push(name, value.clone());
    }

    payload
}
