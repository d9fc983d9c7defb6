//! Private keys.

use super::{Curve, PublicKey};
use crate::{
    DerivationParams, Error, FieldBytes, RNG_MAX_TRIES, Result, derive::derive_material,
    rng::random_below,
};
use core::fmt;
use digest::{Digest, core_api::BlockSizeUser};
use rand_core::CryptoRngCore;
use subtle::{Choice, ConstantTimeEq};
use vli::Vli;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Private scalar in `[1, n - 1]` on a given curve.
///
/// The scalar is wiped when the key is dropped.
#[derive(Clone)]
pub struct PrivateKey {
    curve: &'static Curve,
    secret: Vli,
}

impl PrivateKey {
    /// Generate a uniformly random key.
    pub fn random<R>(curve: &'static Curve, rng: &mut R) -> Result<Self>
    where
        R: CryptoRngCore + ?Sized,
    {
        let secret = random_below(rng, curve.order(), curve.n_words())?;
        Ok(Self { curve, secret })
    }

    /// Derive a key from `seed` by iterated HMAC:
    ///
    /// ```text
    /// K_0     = seed
    /// K_{i+1} = HMAC(key = K_i, seed || personalization || BE32(index))
    /// ```
    ///
    /// run for `params.rounds()` rounds. The final round's output is
    /// truncated to the order's bit length and reduced once modulo `n`. A
    /// zero result moves on to `index + 1`, for at most [`RNG_MAX_TRIES`]
    /// indices.
    ///
    /// This construction is kept for compatibility with existing derived
    /// keys. It is not a vetted KDF.
    pub fn derive_deterministic<D>(
        curve: &'static Curve,
        seed: &[u8],
        personalization: &[u8],
        index: u32,
        params: &DerivationParams,
    ) -> Result<Self>
    where
        D: Digest + BlockSizeUser,
    {
        let mut index = index;
        for _ in 0..RNG_MAX_TRIES {
            let material = derive_material::<D>(seed, personalization, index, params)?;
            let secret = curve.bits2int_reduced(&material);

            if bool::from(curve.is_scalar_in_range(&secret)) {
                return Ok(Self { curve, secret });
            }

            log::debug!("derived {} scalar is zero, trying the next index", curve.name());
            index = index.checked_add(1).ok_or(Error::RetriesExhausted)?;
        }

        Err(Error::RetriesExhausted)
    }

    /// Parse a big-endian scalar of exactly [`Curve::scalar_bytes`] bytes.
    pub fn from_bytes(curve: &'static Curve, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != curve.scalar_bytes() {
            return Err(Error::InvalidPrivateKey);
        }

        let secret = Vli::from_be_bytes(bytes);
        if !bool::from(curve.is_scalar_in_range(&secret)) {
            return Err(Error::InvalidPrivateKey);
        }

        Ok(Self { curve, secret })
    }

    /// Serialize as big-endian bytes of [`Curve::scalar_bytes`] width.
    pub fn to_bytes(&self) -> Zeroizing<FieldBytes> {
        let mut out = Zeroizing::new(FieldBytes::zeroed(self.curve.scalar_bytes()));
        self.secret.write_be_bytes(out.as_mut_slice());
        out
    }

    /// Curve this key belongs to.
    pub fn curve(&self) -> &'static Curve {
        self.curve
    }

    /// Compute the public key, blinding the ladder with a random `Z`
    /// coordinate drawn from the system RNG.
    #[cfg(feature = "getrandom")]
    pub fn public_key(&self) -> Result<PublicKey> {
        self.public_key_with_rng(&mut rand_core::OsRng)
    }

    /// Compute the public key without projective blinding.
    #[cfg(not(feature = "getrandom"))]
    pub fn public_key(&self) -> Result<PublicKey> {
        self.public_key_with_z(&Vli::ONE)
    }

    /// Compute the public key, blinding the ladder with a random `Z`
    /// coordinate drawn from `rng`.
    pub fn public_key_with_rng<R>(&self, rng: &mut R) -> Result<PublicKey>
    where
        R: CryptoRngCore + ?Sized,
    {
        let z = Zeroizing::new(random_below(rng, self.curve.modulus(), self.curve.words())?);
        self.public_key_with_z(&z)
    }

    fn public_key_with_z(&self, z: &Vli) -> Result<PublicKey> {
        let point = self
            .curve
            .compute_public_point(&self.secret, z)
            .ok_or(Error::DegenerateScalar)?;
        Ok(PublicKey::from_trusted_point(self.curve, point))
    }

    pub(crate) fn scalar(&self) -> &Vli {
        &self.secret
    }
}

impl ConstantTimeEq for PrivateKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        Choice::from(u8::from(self.curve == other.curve)) & self.secret.ct_eq(&other.secret)
    }
}

/// Constant-time comparison
impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("curve", &self.curve.id())
            .finish_non_exhaustive()
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.secret.zeroize();
    }
}

impl ZeroizeOnDrop for PrivateKey {}
