//! Scalars modulo the prime subgroup order `ℓ = 2^252 + 27742317777372353535851937790883648493`.

use subtle::{Choice, ConstantTimeEq};
use vli::{Vli, WideVli};
use zeroize::Zeroize;

const WORDS: usize = 4;

/// `ℓ`
const ORDER: Vli =
    Vli::from_be_hex("1000000000000000000000000000000014DEF9DEA2F79CD65812631A5CF5D3ED");

/// Integer modulo `ℓ`, always fully reduced.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Scalar(Vli);

impl Scalar {
    /// Reduce 64 little-endian bytes, as produced by SHA-512.
    pub(crate) fn from_bytes_mod_order_wide(bytes: &[u8; 64]) -> Self {
        Self(WideVli::from_le_bytes(bytes).rem(&ORDER, WORDS))
    }

    /// Reduce an integer below `2^256`.
    pub(crate) fn from_vli_mod_order(value: &Vli) -> Self {
        Self(value.rem(&ORDER, WORDS))
    }

    /// Decode 32 little-endian bytes, rejecting values not below `ℓ`.
    pub(crate) fn from_canonical_bytes(bytes: &[u8; 32]) -> Option<Self> {
        let value = Vli::from_le_bytes(bytes);
        value
            .cmp_vartime(&ORDER, WORDS)
            .is_lt()
            .then_some(Self(value))
    }

    pub(crate) fn to_bytes(self) -> [u8; 32] {
        let mut out = [0u8; 32];
        self.0.write_le_bytes(&mut out);
        out
    }

    pub(crate) fn as_vli(&self) -> &Vli {
        &self.0
    }

    /// `self * a + b`
    pub(crate) fn mul_add(&self, a: &Self, b: &Self) -> Self {
        let product = self.0.mul_mod(&a.0, &ORDER, WORDS);
        Self(product.add_mod(&b.0, &ORDER, WORDS))
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}
