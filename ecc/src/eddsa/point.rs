//! Points on edwards25519, `-x^2 + y^2 = 1 + d x^2 y^2`, in extended
//! coordinates `(X : Y : Z : T)` with `x = X / Z`, `y = Y / Z` and
//! `T = X * Y / Z`.

use super::field::FieldElement;
use core::ops::{Add, Neg};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use vli::Vli;
use zeroize::Zeroize;

/// Compressed point: `y` little-endian with the sign of `x` in the top bit.
pub(crate) type CompressedPoint = [u8; 32];

#[derive(Clone, Copy, Debug)]
pub(crate) struct EdwardsPoint {
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
    t: FieldElement,
}

impl EdwardsPoint {
    pub(crate) const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ONE,
        t: FieldElement::ZERO,
    };

    /// The base point `B` of RFC 8032, with `y = 4 / 5`.
    pub(crate) const GENERATOR: Self = Self {
        x: FieldElement::from_vli_unchecked(Vli::from_be_hex(
            "216936D3CD6E53FEC0A4E231FDD6DC5C692CC7609525A7B2C9562D608F25D51A",
        )),
        y: FieldElement::from_vli_unchecked(Vli::from_be_hex(
            "6666666666666666666666666666666666666666666666666666666666666658",
        )),
        z: FieldElement::ONE,
        t: FieldElement::from_vli_unchecked(Vli::from_be_hex(
            "67875F0FD78B766566EA4E8E64ABE37D20F09F80775152F56DDE8AB3A5B7DDA3",
        )),
    };

    /// Unified addition (RFC 8032 § 5.1.4). Complete on this curve, so it
    /// also doubles and handles the identity.
    fn add_extended(&self, other: &Self) -> Self {
        let a = (self.y - self.x) * (other.y - other.x);
        let b = (self.y + self.x) * (other.y + other.x);
        let c = self.t * FieldElement::EDWARDS_D2 * other.t;
        let zz = self.z * other.z;
        let d = zz + zz;

        let e = b - a;
        let f = d - c;
        let g = d + c;
        let h = b + a;

        Self {
            x: e * f,
            y: g * h,
            z: f * g,
            t: e * h,
        }
    }

    pub(crate) fn double(&self) -> Self {
        self.add_extended(self)
    }

    /// `k * self` over the low `bits` bits of `k`, in constant time:
    /// every bit costs one doubling, one addition and a masked select.
    pub(crate) fn mul(&self, k: &Vli, bits: usize) -> Self {
        let mut acc = Self::IDENTITY;
        for i in (0..bits).rev() {
            acc = acc.double();
            let sum = acc.add_extended(self);
            acc.conditional_assign(&sum, k.bit(i));
        }
        acc
    }

    pub(crate) fn mul_base(k: &Vli, bits: usize) -> Self {
        Self::GENERATOR.mul(k, bits)
    }

    pub(crate) fn is_identity(&self) -> Choice {
        self.ct_eq(&Self::IDENTITY)
    }

    pub(crate) fn compress(&self) -> CompressedPoint {
        let z_inv = self.z.invert();
        let x = self.x * z_inv;
        let y = self.y * z_inv;

        let mut bytes = y.to_bytes();
        bytes[31] |= x.is_negative().unwrap_u8() << 7;
        bytes
    }

    /// Decode a compressed point (RFC 8032 § 5.1.3). Input is public.
    pub(crate) fn decompress_vartime(bytes: &CompressedPoint) -> Option<Self> {
        let sign = Choice::from(bytes[31] >> 7);
        let y = FieldElement::from_bytes(bytes)?;

        let yy = y.square();
        let u = yy - FieldElement::ONE;
        let v = FieldElement::EDWARDS_D * yy + FieldElement::ONE;
        let mut x = FieldElement::sqrt_ratio_vartime(&u, &v)?;

        if bool::from(x.is_zero() & sign) {
            return None;
        }
        if bool::from(x.is_negative() ^ sign) {
            x = -x;
        }

        Some(Self {
            x,
            y,
            z: FieldElement::ONE,
            t: x * y,
        })
    }
}

impl Add for EdwardsPoint {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.add_extended(&rhs)
    }
}

impl Neg for EdwardsPoint {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            t: -self.t,
            ..self
        }
    }
}

impl ConditionallySelectable for EdwardsPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
            t: FieldElement::conditional_select(&a.t, &b.t, choice),
        }
    }
}

/// Projective equality: `X1 * Z2 == X2 * Z1` and `Y1 * Z2 == Y2 * Z1`.
impl ConstantTimeEq for EdwardsPoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        (self.x * other.z).ct_eq(&(other.x * self.z)) & (self.y * other.z).ct_eq(&(other.y * self.z))
    }
}

impl Zeroize for EdwardsPoint {
    fn zeroize(&mut self) {
        self.x.zeroize();
        self.y.zeroize();
        self.z.zeroize();
        self.t.zeroize();
    }
}
