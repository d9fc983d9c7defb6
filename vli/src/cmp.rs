//! Comparisons.
//!
//! Methods ending in `_vartime` may return early and must only see public
//! data. The `ct_` methods run in time independent of the values compared.

use crate::Vli;
use core::cmp::Ordering;
use subtle::{Choice, ConstantTimeEq};

impl Vli {
    /// Compare the low `words` limbs, returning as soon as they differ.
    pub fn cmp_vartime(&self, rhs: &Self, words: usize) -> Ordering {
        for i in (0..words).rev() {
            match self.0[i].cmp(&rhs.0[i]) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }

    /// Equality of the low `words` limbs.
    pub fn eq_vartime(&self, rhs: &Self, words: usize) -> bool {
        self.0[..words] == rhs.0[..words]
    }

    /// Is the value zero?
    pub fn is_zero_vartime(&self, words: usize) -> bool {
        self.0[..words].iter().all(|&w| w == 0)
    }

    /// Is the value zero? Constant time.
    pub fn ct_is_zero(&self, words: usize) -> Choice {
        self.0[..words].iter().fold(0, |acc, w| acc | w).ct_eq(&0)
    }

    /// Is `self < rhs`? Constant time.
    pub fn ct_lt(&self, rhs: &Self, words: usize) -> Choice {
        let (_, borrow) = self.sub(rhs, words);
        Choice::from(borrow as u8)
    }
}
