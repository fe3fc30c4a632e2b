use crate::algorithm::Algorithm;
use crate::error::{Error, Result};
use crate::keys::Key;

use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::Sha256;

/// HS256 algorithm (HMAC with SHA-256)
pub struct HS256;

impl Algorithm for HS256 {
    fn name(&self) -> &'static str {
        "HS256"
    }

    fn sign(&self, signing_input: &str, key: &Key) -> Result<Vec<u8>> {
        let secret = key.as_secret()?;
        let mac = compute_hs256(signing_input, secret.as_bytes())?;
        Ok(mac.to_vec())
    }

    fn verify(&self, signing_input: &str, signature: &[u8], key: &Key) -> Result<()> {
        let secret = key.as_secret()?;
        let expected = compute_hs256(signing_input, secret.as_bytes())?;

        if signature.len() != expected.len() {
            return Err(Error::InvalidSignature);
        }

        if constant_time_eq(signature, &expected) {
            Ok(())
        } else {
            Err(Error::InvalidSignature)
        }
    }
}

fn compute_hs256(signing_input: &str, secret: &[u8]) -> Result<[u8; 32]> {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret).map_err(|e| Error::InvalidKey(e.to_string()))?;
    mac.update(signing_input.as_bytes());
    Ok(mac.finalize().into_bytes().into())
}
