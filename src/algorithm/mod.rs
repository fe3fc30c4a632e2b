mod traits;

pub mod hmac;
pub mod rsa;

pub use traits::{get_scheme, Algorithm, SignatureScheme};

use crate::error::{Error, Result};

/// Algorithm identifier for the JWT header `alg` field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmId {
    /// HMAC with SHA-256
    HS256,

    /// RSA (PKCS#1 v1.5) with SHA-256
    RS256,
}

impl AlgorithmId {
    /// Parse an algorithm tag
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Err(Error::UnsupportedAlgorithm(
                "the unsigned 'none' algorithm is rejected (RFC 8725)".to_string(),
            )),

            "HS256" => Ok(AlgorithmId::HS256),
            "RS256" => Ok(AlgorithmId::RS256),

            _ => Err(Error::UnsupportedAlgorithm(s.to_string())),
        }
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmId::HS256 => "HS256",
            AlgorithmId::RS256 => "RS256",
        }
    }

    /// Check if algorithm is HMAC-based (symmetric)
    pub fn is_symmetric(&self) -> bool {
        matches!(self, AlgorithmId::HS256)
    }

    /// Check if algorithm is asymmetric (RSA)
    pub fn is_asymmetric(&self) -> bool {
        !self.is_symmetric()
    }
}

impl Default for AlgorithmId {
    fn default() -> Self {
        AlgorithmId::HS256
    }
}

impl std::fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(AlgorithmId::from_str("HS256").unwrap(), AlgorithmId::HS256);
        assert_eq!(AlgorithmId::from_str("RS256").unwrap(), AlgorithmId::RS256);

        assert!(matches!(
            AlgorithmId::from_str("none"),
            Err(Error::UnsupportedAlgorithm(_))
        ));
        assert!(matches!(
            AlgorithmId::from_str("ES256"),
            Err(Error::UnsupportedAlgorithm(_))
        ));
        assert!(matches!(
            AlgorithmId::from_str("hs256"),
            Err(Error::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn test_symmetry() {
        assert!(AlgorithmId::HS256.is_symmetric());
        assert!(!AlgorithmId::HS256.is_asymmetric());
        assert!(AlgorithmId::RS256.is_asymmetric());
        assert!(!AlgorithmId::RS256.is_symmetric());
    }

    #[test]
    fn test_default_is_hs256() {
        assert_eq!(AlgorithmId::default(), AlgorithmId::HS256);
    }
}
