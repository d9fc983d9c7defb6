//! Fast reduction modulo primes of the form `2^k - c`.

use crate::{MAX_WORDS, Vli, WideVli};
use subtle::{Choice, ConditionallySelectable};

/// Prime modulus `p = 2^k - c` with a small-ish `c`, reduced by folding.
///
/// Since `2^k = c (mod p)`, a value `hi * 2^k + lo` is congruent to
/// `lo + hi * c`. Each fold shrinks the value by roughly `k - bits(c)` bits.
/// The number of folds is fixed per modulus (enough for the worst-case
/// product of two reduced operands) and followed by one masked subtraction
/// of `p`, so reduction time does not depend on the operands.
///
/// The secp256k1 "omega" reduction (`c = 2^32 + 977`) and the Curve25519
/// reduction (`c = 19`) are both instances of this.
#[derive(Clone, Copy, Debug)]
pub struct PseudoMersenne {
    modulus: Vli,
    c: Vli,
    k: usize,
    words: usize,
    c_words: usize,
    passes: usize,
}

impl PseudoMersenne {
    /// Create a reducer for `modulus = 2^k - c`, occupying `words` limbs and
    /// folding `passes` times.
    ///
    /// Panics (at compile time in a `const`) if the parameters are
    /// inconsistent.
    pub const fn new(modulus: Vli, k: usize, c: Vli, words: usize, passes: usize) -> Self {
        assert!(words <= MAX_WORDS, "modulus too large");
        assert!(k <= words * 64 && k > (words - 1) * 64, "k does not match limb count");

        let mut c_words = words;
        while c_words > 1 && c.0[c_words - 1] == 0 {
            c_words -= 1;
        }

        Self {
            modulus,
            c,
            k,
            words,
            c_words,
            passes,
        }
    }

    /// The modulus `p`.
    pub const fn modulus(&self) -> &Vli {
        &self.modulus
    }

    /// Limb count of the modulus.
    pub const fn words(&self) -> usize {
        self.words
    }

    /// Bit length `k` of the modulus.
    pub const fn bits(&self) -> usize {
        self.k
    }

    /// Reduce a product of two reduced operands.
    pub fn reduce(&self, wide: &WideVli) -> Vli {
        let wide_words = 2 * self.words;
        let mut t = *wide;

        for _ in 0..self.passes {
            let hi = t.shr_vartime(self.k, wide_words).low(self.words);
            let lo = t.mask_bits(self.k);
            let folded = hi.mul_wide_uneven(self.words, &self.c, self.c_words);
            t = lo.add(&folded, wide_words).0;
        }

        // t < 2p now, and may carry one bit past `words` limbs.
        let low = t.low(self.words);
        let top = t.0[self.words];
        let (reduced, borrow) = low.sub(&self.modulus, self.words);
        Vli::conditional_select(&low, &reduced, Choice::from((top | (borrow ^ 1)) as u8))
    }

    /// Computes `a * b mod p`.
    pub fn mul(&self, a: &Vli, b: &Vli) -> Vli {
        self.reduce(&a.mul_wide(b, self.words))
    }

    /// Computes `a^2 mod p`.
    pub fn square(&self, a: &Vli) -> Vli {
        self.reduce(&a.square_wide(self.words))
    }

    /// Computes `a + b mod p`.
    pub fn add(&self, a: &Vli, b: &Vli) -> Vli {
        a.add_mod(b, &self.modulus, self.words)
    }

    /// Computes `a - b mod p`.
    pub fn sub(&self, a: &Vli, b: &Vli) -> Vli {
        a.sub_mod(b, &self.modulus, self.words)
    }

    /// Computes `-a mod p`.
    pub fn neg(&self, a: &Vli) -> Vli {
        a.neg_mod(&self.modulus, self.words)
    }

    /// Computes `a / 2 mod p`.
    pub fn half(&self, a: &Vli) -> Vli {
        a.half_mod(&self.modulus, self.words)
    }

    /// Computes `a^-1 mod p` in constant time. Zero maps to zero.
    pub fn invert(&self, a: &Vli) -> Vli {
        a.inv_mod(&self.modulus, self.words)
    }

    /// Computes `a^exp mod p` by square-and-multiply over a public exponent.
    pub fn pow_vartime(&self, a: &Vli, exp: &Vli) -> Vli {
        let mut acc = Vli::ONE;
        for i in (0..exp.num_bits_vartime(self.words)).rev() {
            acc = self.square(&acc);
            if exp.bit_vartime(i) {
                acc = self.mul(&acc, a);
            }
        }
        acc
    }

    /// Is `a` a valid field element (`a < p`)?
    pub fn is_reduced_vartime(&self, a: &Vli) -> bool {
        a.cmp_vartime(&self.modulus, self.words).is_lt()
    }
}
