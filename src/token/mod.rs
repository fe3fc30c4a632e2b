//! Token wire structure
//!
//! A token is three Base64URL segments joined by `.`:
//! `header.payload.signature`. This module holds the header types for both
//! directions and the structural segment split.

use crate::algorithm::AlgorithmId;
use crate::error::{Error, Result};
use crate::utils::base64url;

use miniserde::{Deserialize, Serialize};

/// JWT header produced by the sign pipeline
///
/// Produced fresh per signing call and never mutated. Serializes in
/// declaration order as `{"alg":...,"typ":"JWT"}`.
#[derive(Debug, Clone, Serialize)]
pub struct Header {
    /// Algorithm used for signing
    #[serde(rename = "alg")]
    pub algorithm: String,

    /// Token type, always "JWT"
    #[serde(rename = "typ")]
    pub token_type: String,
}

impl Header {
    pub(crate) fn new(algorithm: AlgorithmId) -> Self {
        Self {
            algorithm: algorithm.as_str().to_string(),
            token_type: "JWT".to_string(),
        }
    }
}

/// JWT header as parsed by the verify pipeline
///
/// Only `alg` is required; the verifier compares it against the
/// caller-expected algorithm and otherwise ignores the header.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenHeader {
    /// Algorithm declared by the token (untrusted until compared)
    #[serde(rename = "alg")]
    pub algorithm: String,

    /// Token type (typically "JWT")
    #[serde(rename = "typ")]
    pub token_type: Option<String>,
}

/// Split a token into its three segments
///
/// Fails with [`Error::MalformedToken`] unless the token has exactly three
/// `.`-delimited segments, each non-empty and composed solely of the
/// Base64URL alphabet.
pub(crate) fn split_segments(token: &str) -> Result<(&str, &str, &str)> {
    let mut parts = token.split('.');

    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(header), Some(payload), Some(signature), None)
            if base64url::is_valid_format(header)
                && base64url::is_valid_format(payload)
                && base64url::is_valid_format(signature) =>
        {
            Ok((header, payload, signature))
        }
        _ => Err(Error::MalformedToken),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_serializes_canonically() {
        let header = Header::new(AlgorithmId::HS256);
        assert_eq!(
            miniserde::json::to_string(&header),
            r#"{"alg":"HS256","typ":"JWT"}"#
        );

        let header = Header::new(AlgorithmId::RS256);
        assert_eq!(
            miniserde::json::to_string(&header),
            r#"{"alg":"RS256","typ":"JWT"}"#
        );
    }

    #[test]
    fn test_token_header_parses_without_typ() {
        let header: TokenHeader = miniserde::json::from_str(r#"{"alg":"HS256"}"#).unwrap();
        assert_eq!(header.algorithm, "HS256");
        assert!(header.token_type.is_none());
    }

    #[test]
    fn test_split_segments() {
        let (h, p, s) = split_segments("aaa.bbb.ccc").unwrap();
        assert_eq!((h, p, s), ("aaa", "bbb", "ccc"));
    }

    #[test]
    fn test_split_rejects_wrong_segment_count() {
        assert!(matches!(
            split_segments("aaa.bbb"),
            Err(Error::MalformedToken)
        ));
        assert!(matches!(
            split_segments("aaa.bbb.ccc.ddd"),
            Err(Error::MalformedToken)
        ));
        assert!(matches!(split_segments(""), Err(Error::MalformedToken)));
    }

    #[test]
    fn test_split_rejects_empty_or_invalid_segments() {
        assert!(matches!(
            split_segments("aaa..ccc"),
            Err(Error::MalformedToken)
        ));
        assert!(matches!(
            split_segments("aaa.bbb."),
            Err(Error::MalformedToken)
        ));
        assert!(matches!(
            split_segments("a!a.bbb.ccc"),
            Err(Error::MalformedToken)
        ));
        assert!(matches!(
            split_segments("aaa.b b.ccc"),
            Err(Error::MalformedToken)
        ));
    }
}
