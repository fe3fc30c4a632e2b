//! Key types for JWT signing and verification
//!
//! This module provides a type-safe abstraction over the three key shapes:
//! - Symmetric secret keys (for HMAC algorithms)
//! - Asymmetric private keys (sign only, for RSA algorithms)
//! - Asymmetric public keys (verify only, for RSA algorithms)
//!
//! The capability accessors fail before any cryptographic provider call is
//! made, so an HMAC algorithm handed an RSA key (or vice versa) is rejected
//! without touching the key material.

use crate::error::{Error, Result};

/// A key that can be used for JWT signing or verification
#[derive(Debug, Clone)]
pub enum Key {
    /// Symmetric secret key for HMAC algorithms
    Secret(SecretKey),

    /// RSA private key (signs only)
    RsaPrivate(PrivateKey),

    /// RSA public key (verifies only)
    RsaPublic(PublicKey),
}

impl Key {
    /// Create a symmetric secret key from bytes
    pub fn secret(secret: impl Into<Vec<u8>>) -> Self {
        Key::Secret(SecretKey::new(secret.into()))
    }

    /// Create an RSA private key from PKCS#8 DER bytes
    pub fn rsa_private(pkcs8: impl Into<Vec<u8>>) -> Self {
        Key::RsaPrivate(PrivateKey::new(pkcs8.into()))
    }

    /// Create an RSA public key from DER-encoded public key bytes
    pub fn rsa_public(der: impl Into<Vec<u8>>) -> Self {
        Key::RsaPublic(PublicKey::new(der.into()))
    }

    /// Get key type name for error messages
    pub fn key_type(&self) -> &'static str {
        match self {
            Key::Secret(_) => "symmetric secret",
            Key::RsaPrivate(_) => "RSA private",
            Key::RsaPublic(_) => "RSA public",
        }
    }

    /// Get as symmetric secret key or return an error
    pub fn as_secret(&self) -> Result<&SecretKey> {
        match self {
            Key::Secret(key) => Ok(key),
            _ => Err(Error::IncompatibleKeyType {
                algorithm: "HMAC".to_string(),
                expected_key_type: "symmetric secret".to_string(),
                actual_key_type: self.key_type().to_string(),
            }),
        }
    }

    /// Get as RSA private key or return an error
    pub fn as_rsa_private(&self) -> Result<&PrivateKey> {
        match self {
            Key::RsaPrivate(key) => Ok(key),
            _ => Err(Error::IncompatibleKeyType {
                algorithm: "RSA".to_string(),
                expected_key_type: "RSA private".to_string(),
                actual_key_type: self.key_type().to_string(),
            }),
        }
    }

    /// Get as RSA public key or return an error
    pub fn as_rsa_public(&self) -> Result<&PublicKey> {
        match self {
            Key::RsaPublic(key) => Ok(key),
            _ => Err(Error::IncompatibleKeyType {
                algorithm: "RSA".to_string(),
                expected_key_type: "RSA public".to_string(),
                actual_key_type: self.key_type().to_string(),
            }),
        }
    }
}

/// Symmetric secret key for HMAC algorithms
///
/// Immutable after construction; the core never persists it.
#[derive(Debug, Clone)]
pub struct SecretKey {
    secret: Vec<u8>,
}

impl SecretKey {
    /// Create a new secret key
    pub fn new(secret: Vec<u8>) -> Self {
        Self { secret }
    }

    /// Get the secret bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.secret
    }
}

impl From<Vec<u8>> for SecretKey {
    fn from(secret: Vec<u8>) -> Self {
        Self::new(secret)
    }
}

impl From<&[u8]> for SecretKey {
    fn from(secret: &[u8]) -> Self {
        Self::new(secret.to_vec())
    }
}

impl From<String> for SecretKey {
    fn from(secret: String) -> Self {
        Self::new(secret.into_bytes())
    }
}

impl From<&str> for SecretKey {
    fn from(secret: &str) -> Self {
        Self::new(secret.as_bytes().to_vec())
    }
}

/// RSA private key (PKCS#8 DER)
///
/// Carries sign capability only; never convertible into a public or secret
/// key.
#[derive(Debug, Clone)]
pub struct PrivateKey {
    pkcs8: Vec<u8>,
}

impl PrivateKey {
    /// Create a new RSA private key from PKCS#8 DER bytes
    pub fn new(pkcs8: Vec<u8>) -> Self {
        Self { pkcs8 }
    }

    /// Get the PKCS#8 DER bytes
    pub fn as_pkcs8(&self) -> &[u8] {
        &self.pkcs8
    }
}

/// RSA public key (DER-encoded, provider-native format)
///
/// Carries verify capability only.
#[derive(Debug, Clone)]
pub struct PublicKey {
    der: Vec<u8>,
}

impl PublicKey {
    /// Create a new RSA public key from DER bytes
    pub fn new(der: Vec<u8>) -> Self {
        Self { der }
    }

    /// Get the DER-encoded key bytes
    pub fn as_der(&self) -> &[u8] {
        &self.der
    }
}
