use crate::error::Result;
use crate::keys::Key;

/// Core trait that all JWT signature algorithms implement
///
/// Each algorithm family is bound to exactly one key shape: the `sign` and
/// `verify` operations check the key's capability through the [`Key`]
/// accessors before any cryptographic work happens.
///
/// The signing input is always the ASCII string
/// `encodedHeader + "." + encodedPayload`, never the raw header or payload
/// objects.
pub trait Algorithm {
    /// The algorithm identifier (e.g., "HS256", "RS256")
    fn name(&self) -> &'static str;

    /// Generate a signature over the signing input
    ///
    /// Returns raw signature bytes; Base64URL encoding is the pipeline's
    /// concern.
    fn sign(&self, signing_input: &str, key: &Key) -> Result<Vec<u8>>;

    /// Verify a signature over the signing input
    ///
    /// # Arguments
    /// * `signing_input` - The data that was signed (header.payload)
    /// * `signature` - The raw signature bytes
    /// * `key` - The key to use for verification
    fn verify(&self, signing_input: &str, signature: &[u8], key: &Key) -> Result<()>;
}

/// Type alias for boxed algorithm trait objects
pub type SignatureScheme = Box<dyn Algorithm + Send + Sync>;

/// Get the signature scheme for the given algorithm ID
///
/// This table is the only place algorithms are dispatched; adding an
/// algorithm means adding one entry here plus its `Algorithm` impl.
pub fn get_scheme(algorithm: &super::AlgorithmId) -> SignatureScheme {
    match algorithm {
        super::AlgorithmId::HS256 => Box::new(super::hmac::HS256),
        super::AlgorithmId::RS256 => Box::new(super::rsa::RS256),
    }
}
