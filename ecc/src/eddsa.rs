//! Ed25519 signatures ([RFC 8032](https://www.rfc-editor.org/rfc/rfc8032)).
//!
//! ```
//! # fn main() -> ecc::Result<()> {
//! use ecc::eddsa::SigningKey;
//! use rand_core::OsRng;
//!
//! let signing_key = SigningKey::generate(&mut OsRng)?;
//! let signature = signing_key.sign_raw(b"Hello, world!");
//! let verifying_key = signing_key.verifying_key();
//!
//! verifying_key.verify_raw(b"Hello, world!", &signature)?;
//! # Ok(())
//! # }
//! ```
//!
//! Besides [`SigningKey::from_seed`], signing keys can be derived with the
//! iterated HMAC construction used for ECDSA keys, see
//! [`SigningKey::derive_deterministic`].

mod field;
mod point;
mod scalar;
mod signing;
mod verifying;

pub use self::{
    signing::{SecretKey, SigningKey},
    verifying::VerifyingKey,
};

use self::{point::CompressedPoint, scalar::Scalar};
use crate::{Error, Result};
use sha2::{Digest, Sha512};

/// Length of a secret key seed.
pub const SECRET_KEY_LENGTH: usize = 32;

/// Length of a compressed public key.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Length of a signature.
pub const SIGNATURE_LENGTH: usize = 64;

/// Ed25519 signature: the compressed point `R` followed by the scalar `S`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Signature {
    r: [u8; 32],
    s: [u8; 32],
}

impl Signature {
    /// Parse `R || S`, checking that `S` is below the group order.
    ///
    /// `R` is decoded during verification.
    pub fn from_bytes(bytes: &[u8; SIGNATURE_LENGTH]) -> Result<Self> {
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);

        if Scalar::from_canonical_bytes(&s).is_none() {
            return Err(Error::SignatureRange);
        }
        Ok(Self { r, s })
    }

    /// Serialize as `R || S`.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut out = [0u8; SIGNATURE_LENGTH];
        out[..32].copy_from_slice(&self.r);
        out[32..].copy_from_slice(&self.s);
        out
    }

    /// The encoded commitment `R`.
    pub fn r_bytes(&self) -> &[u8; 32] {
        &self.r
    }

    /// The encoded scalar `S`.
    pub fn s_bytes(&self) -> &[u8; 32] {
        &self.s
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        let bytes = value.try_into().map_err(|_| Error::InvalidSignature)?;
        Self::from_bytes(bytes)
    }
}

impl From<Signature> for [u8; SIGNATURE_LENGTH] {
    fn from(signature: Signature) -> Self {
        signature.to_bytes()
    }
}

/// `SHA-512(R || A || M) mod ℓ`
fn challenge(r: &CompressedPoint, a: &CompressedPoint, msg: &[u8]) -> Scalar {
    let digest = Sha512::new()
        .chain_update(r)
        .chain_update(a)
        .chain_update(msg)
        .finalize();
    let mut wide = [0u8; 64];
    wide.copy_from_slice(&digest);
    Scalar::from_bytes_mod_order_wide(&wide)
}
