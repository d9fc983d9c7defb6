//! Square roots in the base field, used by point decompression.
//!
//! Decompression only ever handles public data, so these run in variable
//! time.

use super::Curve;
use vli::Vli;

/// Smallest quadratic non-residue modulo the secp224r1 prime.
const P224_NON_RESIDUE: u64 = 11;

impl Curve {
    /// Square root of `a` modulo `p`, if `a` is a quadratic residue.
    ///
    /// Either root may be returned; callers fix the sign.
    pub(crate) fn sqrt_vartime(&self, a: &Vli) -> Option<Vli> {
        let words = self.words();
        let p = self.modulus();

        let root = if p.low_word() & 3 == 3 {
            // p = 3 (mod 4): a^((p + 1) / 4)
            let (p_plus_one, _) = p.add(&Vli::ONE, words);
            let exp = p_plus_one.shr_vartime(2, words);
            self.field.pow_vartime(a, &exp)
        } else {
            self.tonelli_shanks_vartime(a)?
        };

        self.mod_square(&root).eq_vartime(a, words).then_some(root)
    }

    /// Tonelli-Shanks for `p = 1 (mod 4)`.
    fn tonelli_shanks_vartime(&self, a: &Vli) -> Option<Vli> {
        let words = self.words();
        let p = self.modulus();

        if a.is_zero_vartime(words) {
            return Some(Vli::ZERO);
        }

        // p - 1 = q * 2^s with q odd
        let (p_minus_one, _) = p.sub(&Vli::ONE, words);
        let mut s = 0;
        while !p_minus_one.bit_vartime(s) {
            s += 1;
        }
        let q = p_minus_one.shr_vartime(s, words);
        let (q_plus_one, _) = q.add(&Vli::ONE, words);

        let mut m = s;
        let mut c = self
            .field
            .pow_vartime(&Vli::from_word(P224_NON_RESIDUE), &q);
        let mut t = self.field.pow_vartime(a, &q);
        let mut r = self.field.pow_vartime(a, &q_plus_one.shr1(words));

        loop {
            if t.eq_vartime(&Vli::ONE, words) {
                return Some(r);
            }

            // Least i with t^(2^i) = 1
            let mut i = 0;
            let mut t2i = t;
            while !t2i.eq_vartime(&Vli::ONE, words) {
                t2i = self.mod_square(&t2i);
                i += 1;
                if i == m {
                    return None;
                }
            }

            let mut b = c;
            for _ in 0..(m - i - 1) {
                b = self.mod_square(&b);
            }
            m = i;
            c = self.mod_square(&b);
            t = self.mod_mult(&t, &c);
            r = self.mod_mult(&r, &b);
        }
    }
}
