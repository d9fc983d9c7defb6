//! Elliptic Curve Digital Signature Algorithm (ECDSA)
//!
//! Signing is exposed two ways: inherent methods on [`PrivateKey`] taking a
//! message hash (`sign_prehash_*`), and a [`SigningKey`] implementing the
//! [`signature`] traits, which hashes messages with the curve's customary
//! digest (SHA-384 for secp384r1, SHA-512 for secp521r1, SHA-256 otherwise).
//!
//! Signatures are canonicalized to low-S unless [`SignOptions::low_s`] is
//! cleared. Verification accepts either form.

mod der;
mod rfc6979;
mod sign;
mod verify;

pub use self::{
    der::DecodeMode,
    sign::{SignOptions, SigningKey},
    verify::VerifyingKey,
};

use crate::{CompactBytes, Curve, DerBytes, Error, FieldBytes, PrivateKey, Result};
use core::fmt;
use vli::Vli;

/// ECDSA signature `(r, s)` with both components in `[1, n - 1]`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Signature {
    curve: &'static Curve,
    r: Vli,
    s: Vli,
}

impl Signature {
    /// Create a signature from its components, checking that both lie in
    /// `[1, n - 1]`.
    pub fn new(curve: &'static Curve, r: Vli, s: Vli) -> Result<Self> {
        if !curve.is_scalar_in_range_vartime(&r) || !curve.is_scalar_in_range_vartime(&s) {
            return Err(Error::SignatureRange);
        }
        Ok(Self { curve, r, s })
    }

    /// Create a signature from big-endian `r` and `s` of any length.
    pub fn from_scalars(curve: &'static Curve, r: &[u8], s: &[u8]) -> Result<Self> {
        Self::new(curve, scalar_from_be(curve, r)?, scalar_from_be(curve, s)?)
    }

    /// Parse the fixed-width `r || s` encoding.
    pub fn from_compact(curve: &'static Curve, bytes: &[u8]) -> Result<Self> {
        let width = curve.scalar_bytes();
        if bytes.len() != 2 * width {
            return Err(Error::InvalidSignature);
        }
        let (r, s) = bytes.split_at(width);
        Self::from_scalars(curve, r, s)
    }

    /// Serialize as fixed-width `r || s`, each [`Curve::scalar_bytes`] wide.
    pub fn to_compact(&self) -> CompactBytes {
        let width = self.curve.scalar_bytes();
        let mut out = CompactBytes::zeroed(0);
        self.r.write_be_bytes(out.extend_zeroed(width));
        self.s.write_be_bytes(out.extend_zeroed(width));
        out
    }

    /// Parse an ASN.1 DER `SEQUENCE { r INTEGER, s INTEGER }`.
    pub fn from_der(curve: &'static Curve, bytes: &[u8], mode: DecodeMode) -> Result<Self> {
        let (r, s) = der::decode(bytes, mode)?;
        Self::from_scalars(curve, r, s)
    }

    /// Serialize as ASN.1 DER.
    pub fn to_der(&self) -> Result<DerBytes> {
        der::encode(&self.r_bytes(), &self.s_bytes())
    }

    /// Curve this signature was made on.
    pub fn curve(&self) -> &'static Curve {
        self.curve
    }

    /// The `r` component.
    pub fn r(&self) -> &Vli {
        &self.r
    }

    /// The `s` component.
    pub fn s(&self) -> &Vli {
        &self.s
    }

    /// `r` as big-endian bytes of [`Curve::scalar_bytes`] width.
    pub fn r_bytes(&self) -> FieldBytes {
        self.scalar_bytes(&self.r)
    }

    /// `s` as big-endian bytes of [`Curve::scalar_bytes`] width.
    pub fn s_bytes(&self) -> FieldBytes {
        self.scalar_bytes(&self.s)
    }

    /// Is `s <= n / 2`?
    pub fn is_low_s(&self) -> bool {
        let half = self.curve.half_order();
        self.s.cmp_vartime(&half, self.curve.n_words()).is_le()
    }

    /// The low-S form of this signature: `s` is replaced by `n - s` when it
    /// is above `n / 2`.
    pub fn normalize_s(&self) -> Self {
        if self.is_low_s() {
            *self
        } else {
            Self {
                s: self.curve.scalar_neg(&self.s),
                ..*self
            }
        }
    }

    fn scalar_bytes(&self, value: &Vli) -> FieldBytes {
        let mut out = FieldBytes::zeroed(self.curve.scalar_bytes());
        value.write_be_bytes(out.as_mut_slice());
        out
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signature")
            .field("curve", &self.curve.id())
            .field("r", &self.r_bytes())
            .field("s", &self.s_bytes())
            .finish()
    }
}

/// Big-endian integer of arbitrary length, leading zeros allowed, as a value
/// below `2^(8 * scalar_bytes)`.
fn scalar_from_be(curve: &Curve, bytes: &[u8]) -> Result<Vli> {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let bytes = &bytes[start..];
    if bytes.len() > curve.scalar_bytes() {
        return Err(Error::SignatureRange);
    }
    Ok(Vli::from_be_bytes(bytes))
}

/// Evaluate `$body` with `$digest` naming the hash conventionally paired
/// with `$curve`.
macro_rules! with_curve_digest {
    ($curve:expr, $digest:ident => $body:expr) => {
        match $curve.id() {
            $crate::CurveId::Secp384r1 => {
                type $digest = sha2::Sha384;
                $body
            }
            $crate::CurveId::Secp521r1 => {
                type $digest = sha2::Sha512;
                $body
            }
            _ => {
                type $digest = sha2::Sha256;
                $body
            }
        }
    };
}

pub(crate) use with_curve_digest;

impl PrivateKey {
    /// Wrap this key for use with the [`signature`] traits.
    pub fn signing_key(&self) -> Result<SigningKey> {
        SigningKey::new(self.clone())
    }
}
