use crate::algorithm::Algorithm;
use crate::error::{Error, Result};
use crate::keys::Key;

use ring::rand::SystemRandom;
use ring::signature::{self, UnparsedPublicKey};

/// RS256 algorithm (RSA PKCS#1 v1.5 with SHA-256)
pub struct RS256;

impl Algorithm for RS256 {
    fn name(&self) -> &'static str {
        "RS256"
    }

    fn sign(&self, signing_input: &str, key: &Key) -> Result<Vec<u8>> {
        let private = key.as_rsa_private()?;

        let keypair = signature::RsaKeyPair::from_pkcs8(private.as_pkcs8())
            .map_err(|e| Error::InvalidKey(e.to_string()))?;

        let rng = SystemRandom::new();
        let mut sig = vec![0u8; keypair.public().modulus_len()];
        keypair
            .sign(
                &signature::RSA_PKCS1_SHA256,
                &rng,
                signing_input.as_bytes(),
                &mut sig,
            )
            .map_err(|_| Error::SigningFailed)?;

        Ok(sig)
    }

    fn verify(&self, signing_input: &str, signature: &[u8], key: &Key) -> Result<()> {
        let public = key.as_rsa_public()?;

        let public_key =
            UnparsedPublicKey::new(&signature::RSA_PKCS1_2048_8192_SHA256, public.as_der());

        public_key
            .verify(signing_input.as_bytes(), signature)
            .map_err(|_| Error::InvalidSignature)
    }
}
