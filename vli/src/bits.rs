//! Bit access and bit-length queries.

use crate::{Vli, WORD_BITS, Word, arith::mask_words};
use subtle::Choice;

impl Vli {
    /// Bit at a public `index`, without branching on its value.
    pub fn bit(&self, index: usize) -> Choice {
        Choice::from(((self.0[index / WORD_BITS] >> (index % WORD_BITS)) & 1) as u8)
    }

    /// Bit at `index` as a `bool`, for public values only.
    pub fn bit_vartime(&self, index: usize) -> bool {
        (self.0[index / WORD_BITS] >> (index % WORD_BITS)) & 1 == 1
    }

    /// Set the bit at `index`.
    pub fn set_bit(&mut self, index: usize) {
        self.0[index / WORD_BITS] |= 1 << (index % WORD_BITS);
    }

    /// Number of limbs up to and including the highest nonzero one.
    pub fn num_words_vartime(&self, words: usize) -> usize {
        self.0[..words]
            .iter()
            .rposition(|&w| w != 0)
            .map_or(0, |i| i + 1)
    }

    /// Position of the highest set bit plus one; zero for zero.
    pub fn num_bits_vartime(&self, words: usize) -> usize {
        match self.num_words_vartime(words) {
            0 => 0,
            n => (n - 1) * WORD_BITS + (WORD_BITS - self.0[n - 1].leading_zeros() as usize),
        }
    }

    /// Keep only the low `bits` bits.
    pub fn mask_bits(&self, bits: usize) -> Self {
        let mut out = *self;
        mask_words(&mut out.0, bits);
        out
    }

    /// Low limb, for parity and small-constant checks.
    pub const fn low_word(&self) -> Word {
        self.0[0]
    }
}
