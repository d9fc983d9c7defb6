//! Carry-propagating limb arithmetic.
//!
//! Loop bounds depend only on limb counts, never on limb values.

use crate::{Vli, WORD_BITS, WideVli, WideWord, Word};

/// Computes `a + b + carry`, returning the result along with the new carry.
#[inline(always)]
pub(crate) const fn adc(a: Word, b: Word, carry: Word) -> (Word, Word) {
    let t = (a as WideWord) + (b as WideWord) + (carry as WideWord);
    (t as Word, (t >> WORD_BITS) as Word)
}

/// Computes `a - (b + borrow)`, returning the result along with the new borrow.
#[inline(always)]
pub(crate) const fn sbb(a: Word, b: Word, borrow: Word) -> (Word, Word) {
    let t = (a as WideWord).wrapping_sub((b as WideWord) + (borrow as WideWord));
    (t as Word, (t >> (2 * WORD_BITS - 1)) as Word)
}

/// Computes `acc + (a * b) + carry`, returning the result along with the new carry.
#[inline(always)]
pub(crate) const fn mac(acc: Word, a: Word, b: Word, carry: Word) -> (Word, Word) {
    let t = (acc as WideWord) + (a as WideWord) * (b as WideWord) + (carry as WideWord);
    (t as Word, (t >> WORD_BITS) as Word)
}

fn add_words(out: &mut [Word], a: &[Word], b: &[Word]) -> Word {
    let mut carry = 0;
    for ((o, &a), &b) in out.iter_mut().zip(a).zip(b) {
        (*o, carry) = adc(a, b, carry);
    }
    carry
}

fn sub_words(out: &mut [Word], a: &[Word], b: &[Word]) -> Word {
    let mut borrow = 0;
    for ((o, &a), &b) in out.iter_mut().zip(a).zip(b) {
        (*o, borrow) = sbb(a, b, borrow);
    }
    borrow
}

/// Schoolbook product; `out` must be zeroed and hold `a.len() + b.len()` limbs.
fn mul_words(out: &mut [Word], a: &[Word], b: &[Word]) {
    for (i, &ai) in a.iter().enumerate() {
        let mut carry = 0;
        for (j, &bj) in b.iter().enumerate() {
            (out[i + j], carry) = mac(out[i + j], ai, bj, carry);
        }
        out[i + b.len()] = carry;
    }
}

/// Square computing each cross product once; `out` must be zeroed and hold
/// `2 * a.len()` limbs.
fn square_words(out: &mut [Word], a: &[Word]) {
    let n = a.len();

    for i in 0..n {
        let mut carry = 0;
        for j in (i + 1)..n {
            (out[i + j], carry) = mac(out[i + j], a[i], a[j], carry);
        }
        out[i + n] = carry;
    }

    shl1_words(&mut out[..2 * n]);

    let mut carry = 0;
    for (i, &ai) in a.iter().enumerate() {
        let (lo, hi) = mac(0, ai, ai, 0);
        (out[2 * i], carry) = adc(out[2 * i], lo, carry);
        (out[2 * i + 1], carry) = adc(out[2 * i + 1], hi, carry);
    }
}

fn shl1_words(words: &mut [Word]) {
    let mut carry = 0;
    for w in words.iter_mut() {
        let next = *w >> (WORD_BITS - 1);
        *w = (*w << 1) | carry;
        carry = next;
    }
}

fn shr1_words(words: &mut [Word]) {
    let mut carry = 0;
    for w in words.iter_mut().rev() {
        let next = *w << (WORD_BITS - 1);
        *w = (*w >> 1) | carry;
        carry = next;
    }
}

fn shl_words_vartime(words: &mut [Word], shift: usize) {
    let (word_shift, bit_shift) = (shift / WORD_BITS, shift % WORD_BITS);
    for i in (0..words.len()).rev() {
        let hi = match i.checked_sub(word_shift) {
            Some(src) => words[src] << bit_shift,
            None => 0,
        };
        let lo = match i.checked_sub(word_shift + 1) {
            Some(src) if bit_shift > 0 => words[src] >> (WORD_BITS - bit_shift),
            _ => 0,
        };
        words[i] = hi | lo;
    }
}

fn shr_words_vartime(words: &mut [Word], shift: usize) {
    let (word_shift, bit_shift) = (shift / WORD_BITS, shift % WORD_BITS);
    let len = words.len();
    for i in 0..len {
        let src = i + word_shift;
        let lo = if src < len { words[src] >> bit_shift } else { 0 };
        let hi = if bit_shift > 0 && src + 1 < len {
            words[src + 1] << (WORD_BITS - bit_shift)
        } else {
            0
        };
        words[i] = lo | hi;
    }
}

/// Clear every bit at or above `bits`.
pub(crate) fn mask_words(words: &mut [Word], bits: usize) {
    for (i, w) in words.iter_mut().enumerate() {
        let base = i * WORD_BITS;
        if base >= bits {
            *w = 0;
        } else if bits - base < WORD_BITS {
            *w &= Word::MAX >> (WORD_BITS - (bits - base));
        }
    }
}

impl Vli {
    /// Computes `self + rhs` over the low `words` limbs, returning the sum
    /// and the carry out (0 or 1).
    pub fn add(&self, rhs: &Self, words: usize) -> (Self, Word) {
        let mut out = Self::ZERO;
        let carry = add_words(&mut out.0[..words], &self.0[..words], &rhs.0[..words]);
        (out, carry)
    }

    /// Computes `self - rhs` over the low `words` limbs, returning the
    /// wrapped difference and the borrow out (0 or 1).
    pub fn sub(&self, rhs: &Self, words: usize) -> (Self, Word) {
        let mut out = Self::ZERO;
        let borrow = sub_words(&mut out.0[..words], &self.0[..words], &rhs.0[..words]);
        (out, borrow)
    }

    /// Full double-width product of the low `words` limbs.
    pub fn mul_wide(&self, rhs: &Self, words: usize) -> WideVli {
        let mut out = WideVli::ZERO;
        mul_words(&mut out.0[..2 * words], &self.0[..words], &rhs.0[..words]);
        out
    }

    /// Product of operands with different limb counts.
    pub(crate) fn mul_wide_uneven(&self, words: usize, rhs: &Self, rhs_words: usize) -> WideVli {
        let mut out = WideVli::ZERO;
        mul_words(
            &mut out.0[..words + rhs_words],
            &self.0[..words],
            &rhs.0[..rhs_words],
        );
        out
    }

    /// Full double-width square of the low `words` limbs.
    pub fn square_wide(&self, words: usize) -> WideVli {
        let mut out = WideVli::ZERO;
        square_words(&mut out.0[..2 * words], &self.0[..words]);
        out
    }

    /// Shift right by one bit.
    pub fn shr1(&self, words: usize) -> Self {
        let mut out = *self;
        shr1_words(&mut out.0[..words]);
        out
    }

    /// Shift left by a public amount; bits moved past `words` limbs are lost.
    pub fn shl_vartime(&self, shift: usize, words: usize) -> Self {
        let mut out = *self;
        shl_words_vartime(&mut out.0[..words], shift);
        out
    }

    /// Shift right by a public amount.
    pub fn shr_vartime(&self, shift: usize, words: usize) -> Self {
        let mut out = *self;
        shr_words_vartime(&mut out.0[..words], shift);
        out
    }
}

impl WideVli {
    /// Computes `self + rhs` over the low `words` limbs.
    pub fn add(&self, rhs: &Self, words: usize) -> (Self, Word) {
        let mut out = Self::ZERO;
        let carry = add_words(&mut out.0[..words], &self.0[..words], &rhs.0[..words]);
        (out, carry)
    }

    /// Computes `self - rhs` over the low `words` limbs.
    pub fn sub(&self, rhs: &Self, words: usize) -> (Self, Word) {
        let mut out = Self::ZERO;
        let borrow = sub_words(&mut out.0[..words], &self.0[..words], &rhs.0[..words]);
        (out, borrow)
    }

    /// Shift right by one bit.
    pub fn shr1(&self, words: usize) -> Self {
        let mut out = *self;
        shr1_words(&mut out.0[..words]);
        out
    }

    /// Shift left by a public amount.
    pub fn shl_vartime(&self, shift: usize, words: usize) -> Self {
        let mut out = *self;
        shl_words_vartime(&mut out.0[..words], shift);
        out
    }

    /// Shift right by a public amount.
    pub fn shr_vartime(&self, shift: usize, words: usize) -> Self {
        let mut out = *self;
        shr_words_vartime(&mut out.0[..words], shift);
        out
    }

    /// Keep only the low `bits` bits.
    pub fn mask_bits(&self, bits: usize) -> Self {
        let mut out = *self;
        mask_words(&mut out.0, bits);
        out
    }
}
