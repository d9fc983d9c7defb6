//! Field arithmetic modulo `p = 2^255 - 19`.

use core::ops::{Add, Mul, Neg, Sub};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use vli::{PseudoMersenne, Vli};
use zeroize::Zeroize;

/// Limbs in a field element.
const WORDS: usize = 4;

/// Folding `2^255 = 19` three times brings any product below `2p`.
static FIELD: PseudoMersenne = PseudoMersenne::new(
    Vli::from_be_hex("7FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFED"),
    255,
    Vli::from_word(19),
    WORDS,
    3,
);

/// `(p - 5) / 8`, the exponent used for square roots of ratios.
const SQRT_RATIO_EXP: Vli =
    Vli::from_be_hex("0FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFD");

/// Element of GF(2^255 - 19), always fully reduced.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct FieldElement(Vli);

impl FieldElement {
    pub(crate) const ZERO: Self = Self(Vli::ZERO);
    pub(crate) const ONE: Self = Self(Vli::ONE);

    /// Edwards curve constant `d = -121665 / 121666`.
    pub(crate) const EDWARDS_D: Self = Self(Vli::from_be_hex(
        "52036CEE2B6FFE738CC740797779E89800700A4D4141D8AB75EB4DCA135978A3",
    ));

    /// `2 * d`
    pub(crate) const EDWARDS_D2: Self = Self(Vli::from_be_hex(
        "2406D9DC56DFFCE7198E80F2EEF3D13000E0149A8283B156EBD69B9426B2F159",
    ));

    /// `sqrt(-1) = 2^((p - 1) / 4)`
    pub(crate) const SQRT_M1: Self = Self(Vli::from_be_hex(
        "2B8324804FC1DF0B2B4D00993DFBD7A72F431806AD2FE478C4EE1B274A0EA0B0",
    ));

    pub(crate) const fn from_vli_unchecked(value: Vli) -> Self {
        Self(value)
    }

    /// Decode 32 little-endian bytes, ignoring the top bit. `None` if the
    /// value is not below `p`.
    pub(crate) fn from_bytes(bytes: &[u8; 32]) -> Option<Self> {
        let mut bytes = *bytes;
        bytes[31] &= 0x7f;
        let value = Vli::from_le_bytes(&bytes);
        FIELD.is_reduced_vartime(&value).then_some(Self(value))
    }

    /// Encode as 32 little-endian bytes; the top bit is clear.
    pub(crate) fn to_bytes(self) -> [u8; 32] {
        let mut out = [0u8; 32];
        self.0.write_le_bytes(&mut out);
        out
    }

    /// The low bit, which RFC 8032 calls the sign of `x`.
    pub(crate) fn is_negative(&self) -> Choice {
        self.0.bit(0)
    }

    pub(crate) fn is_zero(&self) -> Choice {
        self.0.ct_is_zero(WORDS)
    }

    pub(crate) fn square(&self) -> Self {
        Self(FIELD.square(&self.0))
    }

    pub(crate) fn invert(&self) -> Self {
        Self(FIELD.invert(&self.0))
    }

    /// `sqrt(u / v)` for public inputs, per RFC 8032 § 5.1.3:
    ///
    /// ```text
    /// x = u * v^3 * (u * v^7)^((p - 5) / 8)
    /// ```
    ///
    /// corrected by `sqrt(-1)` when `v * x^2 = -u`. `None` when `u / v` is
    /// not a square.
    pub(crate) fn sqrt_ratio_vartime(u: &Self, v: &Self) -> Option<Self> {
        let v3 = v.square() * *v;
        let v7 = v3.square() * *v;
        let x = *u * v3 * Self(FIELD.pow_vartime(&(*u * v7).0, &SQRT_RATIO_EXP));

        let vx2 = *v * x.square();
        if bool::from(vx2.ct_eq(u)) {
            Some(x)
        } else if bool::from(vx2.ct_eq(&-*u)) {
            Some(x * Self::SQRT_M1)
        } else {
            None
        }
    }
}

impl Add for FieldElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(FIELD.add(&self.0, &rhs.0))
    }
}

impl Sub for FieldElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(FIELD.sub(&self.0, &rhs.0))
    }
}

impl Mul for FieldElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(FIELD.mul(&self.0, &rhs.0))
    }
}

impl Neg for FieldElement {
    type Output = Self;

    fn neg(self) -> Self {
        Self(FIELD.neg(&self.0))
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(Vli::conditional_select(&a.0, &b.0, choice))
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl Zeroize for FieldElement {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}
