//! Modular arithmetic over a generic modulus.
//!
//! All operands are expected to be reduced (`< m`). Corrections are masked
//! selections, so none of these branch on operand values.

use crate::{Vli, WORD_BITS, WideVli, Word};
use subtle::{Choice, ConditionallySelectable};

impl Vli {
    /// Computes `self + rhs mod m`.
    pub fn add_mod(&self, rhs: &Self, m: &Self, words: usize) -> Self {
        let (sum, carry) = self.add(rhs, words);
        let (diff, borrow) = sum.sub(m, words);
        // Keep the difference if the sum overflowed or did not underflow.
        Self::conditional_select(&sum, &diff, Choice::from((carry | (borrow ^ 1)) as u8))
    }

    /// Computes `self - rhs mod m`.
    pub fn sub_mod(&self, rhs: &Self, m: &Self, words: usize) -> Self {
        let (diff, borrow) = self.sub(rhs, words);
        let (wrapped, _) = diff.add(m, words);
        Self::conditional_select(&diff, &wrapped, Choice::from(borrow as u8))
    }

    /// Computes `-self mod m`.
    pub fn neg_mod(&self, m: &Self, words: usize) -> Self {
        Self::ZERO.sub_mod(self, m, words)
    }

    /// Computes `self / 2 mod m` for odd `m`.
    pub fn half_mod(&self, m: &Self, words: usize) -> Self {
        let odd = self.bit(0);
        let (sum, carry) = self.add(m, words);
        let carry = carry & Word::from(odd.unwrap_u8());
        let mut out = Self::conditional_select(self, &sum, odd).shr1(words);
        out.0[words - 1] |= carry << (WORD_BITS - 1);
        out
    }

    /// Computes `self * rhs mod m` by generic reduction.
    pub fn mul_mod(&self, rhs: &Self, m: &Self, words: usize) -> Self {
        self.mul_wide(rhs, words).rem(m, words)
    }

    /// Computes `self^2 mod m` by generic reduction.
    pub fn square_mod(&self, m: &Self, words: usize) -> Self {
        self.square_wide(words).rem(m, words)
    }

    /// Reduce a value of `words` limbs modulo `m`.
    pub fn rem(&self, m: &Self, words: usize) -> Self {
        WideVli::from(self).rem(m, words)
    }

    /// Computes `self^-1 mod m` for odd `m`. Zero maps to zero.
    ///
    /// Binary extended Euclid with masked updates and a fixed iteration
    /// count of `2 * words * 64`. Invariants, with `x` the input:
    ///
    /// ```text
    /// a = u * x (mod m)
    /// b = v * x (mod m)
    /// b odd
    /// ```
    ///
    /// Each round makes `a` even and halves it; when `a` reaches zero, `b`
    /// holds `gcd(x, m) = 1` and `v` the inverse.
    pub fn inv_mod(&self, m: &Self, words: usize) -> Self {
        let mut a = *self;
        let mut b = *m;
        let mut u = Self::ONE;
        let mut v = Self::ZERO;

        for _ in 0..(2 * words * WORD_BITS) {
            let odd = a.bit(0);

            // A1: if a is odd, a = a - b
            let (diff, borrow) = a.sub(&b, words);
            a.conditional_assign(&diff, odd);

            // A2: if that underflowed, b = old a and a = old b - old a
            let swap = odd & Choice::from(borrow as u8);
            let (restored, _) = b.add(&a, words);
            b.conditional_assign(&restored, swap);
            let (negated, _) = Self::ZERO.sub(&a, words);
            a.conditional_assign(&negated, swap);
            Self::conditional_swap(&mut u, &mut v, swap);

            // A3: mirror the subtraction on the coefficients
            let u_minus_v = u.sub_mod(&v, m, words);
            u.conditional_assign(&u_minus_v, odd);

            // A4: a is even now
            a = a.shr1(words);
            u = u.half_mod(m, words);
        }

        v
    }
}

impl WideVli {
    /// Reduce modulo `m` (of `words` limbs) by shift-and-subtract.
    ///
    /// The modulus is shifted so that its top bit sits at the top of the
    /// `2 * words` limb window, then conditionally subtracted once per bit
    /// position. The iteration count depends only on the bit length of `m`.
    pub fn rem(&self, m: &Vli, words: usize) -> Vli {
        let wide_words = 2 * words;
        let shift = wide_words * WORD_BITS - m.num_bits_vartime(words);

        let mut multiple = Self::from(m).shl_vartime(shift, wide_words);
        let mut rem = *self;

        for _ in 0..=shift {
            let (diff, borrow) = rem.sub(&multiple, wide_words);
            rem.conditional_assign(&diff, Choice::from((borrow ^ 1) as u8));
            multiple = multiple.shr1(wide_words);
        }

        rem.low(words)
    }
}
