//! Ed25519 verifying keys.

use super::{
    PUBLIC_KEY_LENGTH, Signature,
    point::{CompressedPoint, EdwardsPoint},
    scalar::Scalar,
};
use crate::{Error, Result};
use core::{
    fmt::{self, Debug, Formatter},
    hash::{Hash, Hasher},
};
use signature::Verifier;
use subtle::ConstantTimeEq;

/// Full-width scalars are below `2^253`.
const SCALAR_BITS: usize = 253;

/// Ed25519 public key `A`, kept both encoded and decoded.
#[derive(Clone, Copy)]
pub struct VerifyingKey {
    compressed: CompressedPoint,
    point: EdwardsPoint,
}

impl VerifyingKey {
    pub(super) fn from_point(point: EdwardsPoint) -> Self {
        Self {
            compressed: point.compress(),
            point,
        }
    }

    /// Decode a 32-byte public key. Invalid encodings and the identity are
    /// rejected.
    pub fn from_bytes(bytes: &[u8; PUBLIC_KEY_LENGTH]) -> Result<Self> {
        let point = EdwardsPoint::decompress_vartime(bytes).ok_or(Error::InvalidPublicKey)?;
        if bool::from(point.is_identity()) {
            return Err(Error::InvalidPublicKey);
        }
        Ok(Self {
            compressed: *bytes,
            point,
        })
    }

    /// The encoded point.
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.compressed
    }

    /// Borrow the encoded point.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.compressed
    }

    pub(super) fn point(&self) -> &EdwardsPoint {
        &self.point
    }

    /// Verify a PureEdDSA signature: `[S]B == R + [k]A` with
    /// `k = SHA-512(R || A || M) mod ℓ`.
    ///
    /// The check is cofactorless, matching RFC 8032 § 5.1.7 without the
    /// optional multiplication by 8.
    pub fn verify_raw(&self, msg: &[u8], signature: &Signature) -> Result<()> {
        let s = Scalar::from_canonical_bytes(signature.s_bytes()).ok_or(Error::SignatureRange)?;
        let r = EdwardsPoint::decompress_vartime(signature.r_bytes()).ok_or_else(|| {
            log::debug!("Ed25519 signature commitment is not a curve point");
            Error::InvalidSignature
        })?;

        let k = super::challenge(signature.r_bytes(), &self.compressed, msg);
        let lhs = EdwardsPoint::mul_base(s.as_vli(), SCALAR_BITS);
        let rhs = r + self.point.mul(k.as_vli(), SCALAR_BITS);

        if bool::from(lhs.ct_eq(&rhs)) {
            Ok(())
        } else {
            log::debug!("Ed25519 signature verification failed");
            Err(Error::Verify)
        }
    }
}

impl TryFrom<&[u8]> for VerifyingKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let bytes = bytes.try_into().map_err(|_| Error::InvalidPublicKey)?;
        Self::from_bytes(bytes)
    }
}

impl AsRef<[u8]> for VerifyingKey {
    fn as_ref(&self) -> &[u8] {
        &self.compressed
    }
}

impl Debug for VerifyingKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "VerifyingKey(")?;
        for byte in &self.compressed {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

impl Eq for VerifyingKey {}

impl PartialEq for VerifyingKey {
    fn eq(&self, other: &Self) -> bool {
        self.compressed == other.compressed
    }
}

impl Hash for VerifyingKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.compressed.hash(state);
    }
}

impl Verifier<Signature> for VerifyingKey {
    fn verify(&self, msg: &[u8], signature: &Signature) -> signature::Result<()> {
        self.verify_raw(msg, signature).map_err(Into::into)
    }
}
