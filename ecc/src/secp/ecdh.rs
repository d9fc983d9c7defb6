//! Elliptic Curve Diffie-Hellman.
//!
//! The shared secret is the raw affine `x` coordinate of `d * Q`. It is not
//! uniformly distributed and must be passed through a KDF (e.g. HKDF) or
//! at least a hash before being used as key material.
//!
//! ```
//! # fn main() -> ecc::Result<()> {
//! use ecc::{PrivateKey, SECP256R1};
//! use rand_core::OsRng;
//!
//! let alice = PrivateKey::random(&SECP256R1, &mut OsRng)?;
//! let bob = PrivateKey::random(&SECP256R1, &mut OsRng)?;
//!
//! let alice_shared = alice.diffie_hellman(&bob.public_key()?)?;
//! let bob_shared = bob.diffie_hellman(&alice.public_key()?)?;
//! assert_eq!(alice_shared.raw_secret_bytes(), bob_shared.raw_secret_bytes());
//! # Ok(())
//! # }
//! ```

use super::{PrivateKey, PublicKey};
use crate::{Error, FieldBytes, Result, rng::random_below};
use core::fmt;
use rand_core::CryptoRngCore;
use subtle::{Choice, ConstantTimeEq};
use vli::Vli;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Shared secret produced by ECDH: the unhashed `x` coordinate.
///
/// Wiped on drop.
pub struct SharedSecret {
    secret_bytes: FieldBytes,
}

impl SharedSecret {
    /// The raw `x` coordinate, [`Curve::field_bytes`](super::Curve::field_bytes)
    /// wide. Hash this before use.
    pub fn raw_secret_bytes(&self) -> &[u8] {
        &self.secret_bytes
    }
}

impl ConstantTimeEq for SharedSecret {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.secret_bytes.as_ref().ct_eq(other.secret_bytes.as_ref())
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSecret").finish_non_exhaustive()
    }
}

impl Drop for SharedSecret {
    fn drop(&mut self) {
        self.secret_bytes.zeroize();
    }
}

impl ZeroizeOnDrop for SharedSecret {}

impl PrivateKey {
    /// Compute the ECDH shared secret with `peer`, blinding the ladder with
    /// a random `Z` coordinate from the system RNG.
    #[cfg(feature = "getrandom")]
    pub fn diffie_hellman(&self, peer: &PublicKey) -> Result<SharedSecret> {
        self.diffie_hellman_with_rng(peer, &mut rand_core::OsRng)
    }

    /// Compute the ECDH shared secret with `peer`.
    #[cfg(not(feature = "getrandom"))]
    pub fn diffie_hellman(&self, peer: &PublicKey) -> Result<SharedSecret> {
        self.diffie_hellman_with_z(peer, &Vli::ONE)
    }

    /// Compute the ECDH shared secret with `peer`, blinding the ladder with
    /// a random `Z` coordinate from `rng`.
    pub fn diffie_hellman_with_rng<R>(&self, peer: &PublicKey, rng: &mut R) -> Result<SharedSecret>
    where
        R: CryptoRngCore + ?Sized,
    {
        let curve = self.curve();
        let z = Zeroizing::new(random_below(rng, curve.modulus(), curve.words())?);
        self.diffie_hellman_with_z(peer, &z)
    }

    fn diffie_hellman_with_z(&self, peer: &PublicKey, z: &Vli) -> Result<SharedSecret> {
        let curve = self.curve();
        if curve != peer.curve() {
            return Err(Error::CurveMismatch);
        }

        let mut point = curve
            .mul_point(peer.as_affine(), self.scalar(), z)
            .ok_or(Error::DegenerateScalar)?;

        let mut secret_bytes = FieldBytes::zeroed(curve.field_bytes());
        point.x.write_be_bytes(secret_bytes.as_mut_slice());
        point.zeroize();

        Ok(SharedSecret { secret_bytes })
    }
}
