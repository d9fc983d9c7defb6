//! ECDSA verification.

use super::{Signature, with_curve_digest};
use crate::{Error, PublicKey, Result};
use digest::Digest;
use signature::{DigestVerifier, Verifier, hazmat::PrehashVerifier};

/// ECDSA verifying key.
///
/// Any [`PublicKey`] verifies signatures; this alias names it for use with
/// the [`signature`] traits.
pub type VerifyingKey = PublicKey;

impl PublicKey {
    /// Verify a signature over a message hash.
    ///
    /// ```text
    /// w  = s^-1 mod n
    /// u1 = e * w mod n
    /// u2 = r * w mod n
    /// R  = u1 * G + u2 * Q
    /// ```
    ///
    /// succeeds when `R` is finite and `R.x mod n == r`. Runs in variable
    /// time; every input is public.
    pub fn verify_prehash(&self, prehash: &[u8], signature: &Signature) -> Result<()> {
        let curve = self.curve();
        if curve != signature.curve() {
            return Err(Error::CurveMismatch);
        }
        if prehash.is_empty() {
            return Err(Error::InvalidLength);
        }

        let (r, s) = (signature.r(), signature.s());
        if !curve.is_scalar_in_range_vartime(r) || !curve.is_scalar_in_range_vartime(s) {
            return Err(Error::SignatureRange);
        }
        if !curve.is_valid_point(self.as_affine()) {
            return Err(Error::InvalidPublicKey);
        }

        let e = curve.bits2int_reduced(prehash);
        let w = curve.scalar_inv(s);
        let u1 = curve.scalar_mul(&e, &w);
        let u2 = curve.scalar_mul(r, &w);

        let Some(point) = curve.double_mul_vartime(&u1, &u2, self.as_affine()) else {
            log::debug!("{} signature rejected: R is the identity", curve.name());
            return Err(Error::Verify);
        };

        if curve
            .field_to_scalar(point.x())
            .eq_vartime(r, curve.n_words())
        {
            Ok(())
        } else {
            log::debug!("{} signature rejected: r mismatch", curve.name());
            Err(Error::Verify)
        }
    }

    /// Verify a signature over the hash accumulated in `digest`.
    pub fn verify_digest<D>(&self, digest: D, signature: &Signature) -> Result<()>
    where
        D: Digest,
    {
        self.verify_prehash(&digest.finalize(), signature)
    }
}

impl PrehashVerifier<Signature> for VerifyingKey {
    fn verify_prehash(&self, prehash: &[u8], signature: &Signature) -> signature::Result<()> {
        PublicKey::verify_prehash(self, prehash, signature)?;
        Ok(())
    }
}

impl<D> DigestVerifier<D, Signature> for VerifyingKey
where
    D: Digest,
{
    fn verify_digest(&self, digest: D, signature: &Signature) -> signature::Result<()> {
        PublicKey::verify_digest(self, digest, signature)?;
        Ok(())
    }
}

/// Hashes `msg` with SHA-384 on secp384r1, SHA-512 on secp521r1 and
/// SHA-256 on the other curves.
impl Verifier<Signature> for VerifyingKey {
    fn verify(&self, msg: &[u8], signature: &Signature) -> signature::Result<()> {
        with_curve_digest!(self.curve(), D => {
            PublicKey::verify_prehash(self, &D::digest(msg), signature)?;
        });
        Ok(())
    }
}
