//! Ed25519 signing keys.

use super::{
    PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH, Signature, VerifyingKey,
    point::EdwardsPoint,
    scalar::Scalar,
};
use crate::{DerivationParams, Error, Result, derive::derive_material};
use core::fmt::{self, Debug, Formatter};
use digest::{Digest, core_api::BlockSizeUser};
use rand_core::CryptoRngCore;
use sha2::Sha512;
use signature::{Keypair, Signer};
use subtle::{Choice, ConstantTimeEq};
use vli::Vli;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Ed25519 secret key: the 32-byte seed of RFC 8032 § 5.1.5.
pub type SecretKey = [u8; SECRET_KEY_LENGTH];

/// Bits iterated by scalar multiplication. Clamped scalars are below
/// `2^255`.
const SCALAR_BITS: usize = 255;

/// Signing key for Ed25519.
///
/// Holds the seed together with its expansion: the clamped scalar `a`, the
/// nonce prefix and the public key. Secret parts are wiped on drop.
#[derive(Clone)]
pub struct SigningKey {
    seed: SecretKey,
    /// Clamped, unreduced `a`.
    clamped: Vli,
    /// `a mod ℓ`
    scalar: Scalar,
    prefix: [u8; 32],
    verifying_key: VerifyingKey,
}

impl SigningKey {
    /// Expand a seed: `h = SHA-512(seed)`, `a = clamp(h[..32])` and the
    /// nonce prefix is `h[32..]`.
    pub fn from_seed(seed: &SecretKey) -> Self {
        let mut h = Zeroizing::new([0u8; 64]);
        h.copy_from_slice(&Sha512::digest(seed));

        let mut a = Zeroizing::new([0u8; 32]);
        a.copy_from_slice(&h[..32]);
        a[0] &= 0xf8;
        a[31] &= 0x7f;
        a[31] |= 0x40;

        let clamped = Vli::from_le_bytes(&a[..]);
        let scalar = Scalar::from_vli_mod_order(&clamped);
        let mut prefix = [0u8; 32];
        prefix.copy_from_slice(&h[32..]);

        let point = EdwardsPoint::mul_base(&clamped, SCALAR_BITS);
        let verifying_key = VerifyingKey::from_point(point);

        Self {
            seed: *seed,
            clamped,
            scalar,
            prefix,
            verifying_key,
        }
    }

    /// Generate a key from a random seed.
    pub fn generate<R>(rng: &mut R) -> Result<Self>
    where
        R: CryptoRngCore + ?Sized,
    {
        let mut seed = Zeroizing::new(SecretKey::default());
        rng.try_fill_bytes(&mut seed[..]).map_err(|_| Error::Rng)?;
        Ok(Self::from_seed(&seed))
    }

    /// Derive the seed with the iterated HMAC construction of
    /// [`PrivateKey::derive_deterministic`](crate::PrivateKey::derive_deterministic),
    /// taking the first 32 bytes of the final round.
    ///
    /// `D` must produce at least 32 bytes; shorter digests are rejected with
    /// [`Error::InvalidLength`].
    pub fn derive_deterministic<D>(
        seed: &[u8],
        personalization: &[u8],
        index: u32,
        params: &DerivationParams,
    ) -> Result<Self>
    where
        D: Digest + BlockSizeUser,
    {
        let material = derive_material::<D>(seed, personalization, index, params)?;
        if material.len() < SECRET_KEY_LENGTH {
            return Err(Error::InvalidLength);
        }

        let mut secret = Zeroizing::new(SecretKey::default());
        secret.copy_from_slice(&material[..SECRET_KEY_LENGTH]);
        Ok(Self::from_seed(&secret))
    }

    /// Parse a 32-byte seed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let seed: &SecretKey = bytes.try_into().map_err(|_| Error::InvalidPrivateKey)?;
        Ok(Self::from_seed(seed))
    }

    /// The seed.
    pub fn to_bytes(&self) -> Zeroizing<SecretKey> {
        Zeroizing::new(self.seed)
    }

    /// The public key.
    pub fn verifying_key(&self) -> VerifyingKey {
        self.verifying_key
    }

    /// Sign a message (PureEdDSA, no context).
    ///
    /// ```text
    /// r = SHA-512(prefix || M) mod ℓ
    /// R = r * B
    /// k = SHA-512(R || A || M) mod ℓ
    /// S = r + k * a mod ℓ
    /// ```
    pub fn sign_raw(&self, msg: &[u8]) -> Signature {
        let mut wide = Zeroizing::new([0u8; 64]);
        wide.copy_from_slice(&Sha512::new().chain_update(self.prefix).chain_update(msg).finalize());
        let mut r = Scalar::from_bytes_mod_order_wide(&wide);

        let big_r = EdwardsPoint::mul_base(r.as_vli(), SCALAR_BITS).compress();
        let k = super::challenge(&big_r, self.verifying_key.as_bytes(), msg);
        let s = k.mul_add(&self.scalar, &r);
        r.zeroize();

        Signature {
            r: big_r,
            s: s.to_bytes(),
        }
    }

    /// Diffie-Hellman with the clamped scalar: returns the encoding of
    /// `a * peer`.
    ///
    /// Clamping clears the cofactor, so small-order components of `peer`
    /// drop out; if nothing else is left the result is the identity and
    /// [`Error::DegenerateScalar`] is returned. Hash the output before
    /// using it as a key.
    pub fn diffie_hellman(&self, peer: &VerifyingKey) -> Result<Zeroizing<[u8; PUBLIC_KEY_LENGTH]>> {
        let mut shared = peer.point().mul(&self.clamped, SCALAR_BITS);
        if bool::from(shared.is_identity()) {
            return Err(Error::DegenerateScalar);
        }
        let bytes = Zeroizing::new(shared.compress());
        shared.zeroize();
        Ok(bytes)
    }
}

impl From<&SecretKey> for SigningKey {
    fn from(seed: &SecretKey) -> Self {
        Self::from_seed(seed)
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

impl Zeroize for SigningKey {
    fn zeroize(&mut self) {
        self.seed.zeroize();
        self.clamped.zeroize();
        self.scalar.zeroize();
        self.prefix.zeroize();
    }
}

impl Drop for SigningKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for SigningKey {}

impl ConstantTimeEq for SigningKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.seed.ct_eq(&other.seed)
    }
}

/// Constant-time comparison
impl PartialEq for SigningKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SigningKey {}

impl Keypair for SigningKey {
    type VerifyingKey = VerifyingKey;

    fn verifying_key(&self) -> VerifyingKey {
        self.verifying_key
    }
}

impl Signer<Signature> for SigningKey {
    fn try_sign(&self, msg: &[u8]) -> signature::Result<Signature> {
        Ok(self.sign_raw(msg))
    }
}
