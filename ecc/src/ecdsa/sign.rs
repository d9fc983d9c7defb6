//! ECDSA signing.

use super::{Signature, VerifyingKey, rfc6979::HmacDrbg, with_curve_digest};
use crate::{Curve, Error, FieldBytes, PrivateKey, RNG_MAX_TRIES, Result, rng::random_below};
use digest::{Digest, FixedOutputReset, core_api::BlockSizeUser};
use rand_core::CryptoRngCore;
use signature::{
    DigestSigner, Keypair, RandomizedDigestSigner, RandomizedSigner, Signer,
    hazmat::{PrehashSigner, RandomizedPrehashSigner},
};
use vli::Vli;
use zeroize::Zeroizing;

/// Options for signature generation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SignOptions {
    /// Replace `s` with `n - s` when it is above `n / 2`. On by default.
    pub low_s: bool,
}

impl Default for SignOptions {
    fn default() -> Self {
        Self { low_s: true }
    }
}

impl PrivateKey {
    /// Sign a message hash with an RFC 6979 nonce derived using `D`.
    ///
    /// The same key, hash and `D` always give the same signature. With the
    /// `getrandom` feature the nonce inversion and the ladder are still
    /// blinded with fresh randomness, which does not affect the output.
    pub fn sign_prehash_deterministic<D>(
        &self,
        prehash: &[u8],
        options: SignOptions,
    ) -> Result<Signature>
    where
        D: Digest + BlockSizeUser + FixedOutputReset,
    {
        check_prehash(prehash)?;
        let mut drbg = HmacDrbg::<D>::new(self.curve(), self.scalar(), prehash, &[]);

        #[cfg(feature = "getrandom")]
        let mut os_rng = rand_core::OsRng;
        #[cfg(feature = "getrandom")]
        let rng = Some(&mut os_rng as &mut dyn CryptoRngCore);
        #[cfg(not(feature = "getrandom"))]
        let rng = None;

        self.sign_with_nonces(prehash, options, rng, |_| Ok(drbg.next_nonce()))
    }

    /// Sign a message hash with a nonce drawn uniformly from `rng`.
    pub fn sign_prehash_random<R>(
        &self,
        rng: &mut R,
        prehash: &[u8],
        options: SignOptions,
    ) -> Result<Signature>
    where
        R: CryptoRngCore,
    {
        check_prehash(prehash)?;
        let curve = self.curve();
        let rng: &mut dyn CryptoRngCore = rng;
        self.sign_with_nonces(prehash, options, Some(rng), |rng| {
            let rng = rng.ok_or(Error::Rng)?;
            Ok(Zeroizing::new(random_below(rng, curve.order(), curve.n_words())?))
        })
    }

    /// Sign a message hash with an RFC 6979 nonce whose derivation also
    /// mixes in fresh randomness from `rng` (RFC 6979 § 3.6).
    ///
    /// Stays secure when either the RNG or the hash misbehaves.
    pub fn sign_prehash_hedged<D, R>(
        &self,
        rng: &mut R,
        prehash: &[u8],
        options: SignOptions,
    ) -> Result<Signature>
    where
        D: Digest + BlockSizeUser + FixedOutputReset,
        R: CryptoRngCore,
    {
        check_prehash(prehash)?;
        let curve = self.curve();

        let mut extra = Zeroizing::new(FieldBytes::zeroed(curve.scalar_bytes()));
        rng.try_fill_bytes(extra.as_mut_slice())
            .map_err(|_| Error::Rng)?;

        let mut drbg = HmacDrbg::<D>::new(curve, self.scalar(), prehash, &extra);
        let rng: &mut dyn CryptoRngCore = rng;
        self.sign_with_nonces(prehash, options, Some(rng), |_| Ok(drbg.next_nonce()))
    }

    /// Sign a message hash with the caller's nonce `k`, given big-endian.
    ///
    /// # ⚠️ Warning
    ///
    /// Reusing `k` for two different messages, or letting any of its bits
    /// become known, reveals the private key. This exists for known-answer
    /// testing; use [`PrivateKey::sign_prehash_deterministic`] otherwise.
    pub fn sign_prehash_with_k(
        &self,
        prehash: &[u8],
        k: &[u8],
        options: SignOptions,
    ) -> Result<Signature> {
        check_prehash(prehash)?;
        let curve = self.curve();
        if k.len() > curve.scalar_bytes() {
            return Err(Error::InvalidLength);
        }

        let k = Zeroizing::new(Vli::from_be_bytes(k));
        let e = curve.bits2int_reduced(prehash);
        self.try_sign_with_k(&e, &k, options, &Vli::ONE, &Vli::ONE)
            .ok_or(Error::DegenerateScalar)
    }

    /// Draw nonces from `next_nonce` until one lies in `[1, n - 1]` and
    /// yields non-zero `r` and `s`.
    ///
    /// When `rng` is present it also supplies the projective `Z` of the
    /// ladder and a multiplier that masks the inversion of `k`.
    fn sign_with_nonces<'a, F>(
        &self,
        prehash: &[u8],
        options: SignOptions,
        mut rng: Option<&mut (dyn CryptoRngCore + 'a)>,
        mut next_nonce: F,
    ) -> Result<Signature>
    where
        F: FnMut(Option<&mut (dyn CryptoRngCore + 'a)>) -> Result<Zeroizing<Vli>>,
    {
        let curve = self.curve();
        let e = curve.bits2int_reduced(prehash);

        for _ in 0..RNG_MAX_TRIES {
            let k = next_nonce(rng.as_deref_mut())?;
            let (z, b) = blinding(curve, rng.as_deref_mut())?;

            if let Some(signature) = self.try_sign_with_k(&e, &k, options, &z, &b) {
                return Ok(signature);
            }
            log::debug!("{} nonce rejected, retrying", curve.name());
        }

        Err(Error::RetriesExhausted)
    }

    /// One signing attempt:
    ///
    /// ```text
    /// R = k * G
    /// r = R.x mod n
    /// s = k^-1 * (e + r * d) mod n
    /// ```
    ///
    /// `k^-1` is computed as `(k * b)^-1 * b`. Returns `None` when `k` is out
    /// of range or `r` or `s` is zero.
    fn try_sign_with_k(
        &self,
        e: &Vli,
        k: &Vli,
        options: SignOptions,
        z: &Vli,
        b: &Vli,
    ) -> Option<Signature> {
        let curve = self.curve();
        if !bool::from(curve.is_scalar_in_range(k)) {
            return None;
        }

        let point = curve.mul_point(curve.generator(), k, z)?;
        let r = curve.field_to_scalar(point.x());
        if r.is_zero_vartime(curve.n_words()) {
            return None;
        }

        let kb = Zeroizing::new(curve.scalar_mul(k, b));
        let k_inv = Zeroizing::new(curve.scalar_mul(&curve.scalar_inv(&kb), b));
        let rd = Zeroizing::new(curve.scalar_mul(&r, self.scalar()));
        let s = curve.scalar_mul(&k_inv, &curve.scalar_add(e, &rd));
        if s.is_zero_vartime(curve.n_words()) {
            return None;
        }

        let signature = Signature { curve, r, s };
        Some(if options.low_s {
            signature.normalize_s()
        } else {
            signature
        })
    }
}

fn check_prehash(prehash: &[u8]) -> Result<()> {
    if prehash.is_empty() {
        return Err(Error::InvalidLength);
    }
    Ok(())
}

/// Ladder `Z` and inversion multiplier, both one without an RNG.
fn blinding(
    curve: &Curve,
    rng: Option<&mut (dyn CryptoRngCore + '_)>,
) -> Result<(Zeroizing<Vli>, Zeroizing<Vli>)> {
    match rng {
        Some(rng) => {
            let z = random_below(rng, curve.modulus(), curve.words())?;
            let b = random_below(rng, curve.order(), curve.n_words())?;
            Ok((Zeroizing::new(z), Zeroizing::new(b)))
        }
        None => Ok((Zeroizing::new(Vli::ONE), Zeroizing::new(Vli::ONE))),
    }
}

/// ECDSA signing key: a private key together with its public key.
///
/// Implements the [`signature`] traits. Messages are hashed with SHA-384
/// on secp384r1, SHA-512 on secp521r1 and SHA-256 on the other curves, and
/// the same hash drives RFC 6979.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SigningKey {
    private_key: PrivateKey,
    verifying_key: VerifyingKey,
}

impl SigningKey {
    /// Compute the public half of `private_key`.
    pub fn new(private_key: PrivateKey) -> Result<Self> {
        let verifying_key = private_key.public_key()?;
        Ok(Self {
            private_key,
            verifying_key,
        })
    }

    /// Generate a random signing key.
    pub fn random<R>(curve: &'static Curve, rng: &mut R) -> Result<Self>
    where
        R: CryptoRngCore + ?Sized,
    {
        let private_key = PrivateKey::random(curve, rng)?;
        let verifying_key = private_key.public_key_with_rng(rng)?;
        Ok(Self {
            private_key,
            verifying_key,
        })
    }

    /// Parse a big-endian private scalar; see [`PrivateKey::from_bytes`].
    pub fn from_bytes(curve: &'static Curve, bytes: &[u8]) -> Result<Self> {
        Self::new(PrivateKey::from_bytes(curve, bytes)?)
    }

    /// The private key.
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// The public key.
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// Curve this key belongs to.
    pub fn curve(&self) -> &'static Curve {
        self.private_key.curve()
    }
}

impl From<SigningKey> for PrivateKey {
    fn from(signing_key: SigningKey) -> PrivateKey {
        signing_key.private_key
    }
}

impl Keypair for SigningKey {
    type VerifyingKey = VerifyingKey;

    fn verifying_key(&self) -> VerifyingKey {
        self.verifying_key
    }
}

impl PrehashSigner<Signature> for SigningKey {
    fn sign_prehash(&self, prehash: &[u8]) -> signature::Result<Signature> {
        let signature = with_curve_digest!(self.curve(), D => {
            self.private_key
                .sign_prehash_deterministic::<D>(prehash, SignOptions::default())
        })?;
        Ok(signature)
    }
}

impl RandomizedPrehashSigner<Signature> for SigningKey {
    fn sign_prehash_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        prehash: &[u8],
    ) -> signature::Result<Signature> {
        let signature = with_curve_digest!(self.curve(), D => {
            self.private_key
                .sign_prehash_hedged::<D, _>(rng, prehash, SignOptions::default())
        })?;
        Ok(signature)
    }
}

impl Signer<Signature> for SigningKey {
    fn try_sign(&self, msg: &[u8]) -> signature::Result<Signature> {
        with_curve_digest!(self.curve(), D => self.sign_prehash(&D::digest(msg)))
    }
}

impl RandomizedSigner<Signature> for SigningKey {
    fn try_sign_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        msg: &[u8],
    ) -> signature::Result<Signature> {
        with_curve_digest!(self.curve(), D => self.sign_prehash_with_rng(rng, &D::digest(msg)))
    }
}

impl<D> DigestSigner<D, Signature> for SigningKey
where
    D: Digest + BlockSizeUser + FixedOutputReset,
{
    fn try_sign_digest(&self, digest: D) -> signature::Result<Signature> {
        let signature = self
            .private_key
            .sign_prehash_deterministic::<D>(&digest.finalize(), SignOptions::default())?;
        Ok(signature)
    }
}

impl<D> RandomizedDigestSigner<D, Signature> for SigningKey
where
    D: Digest + BlockSizeUser + FixedOutputReset,
{
    fn try_sign_digest_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        digest: D,
    ) -> signature::Result<Signature> {
        let signature = self.private_key.sign_prehash_hedged::<D, _>(
            rng,
            &digest.finalize(),
            SignOptions::default(),
        )?;
        Ok(signature)
    }
}
