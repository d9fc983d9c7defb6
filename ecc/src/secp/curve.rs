//! Curve descriptors.

use super::AffinePoint;
use core::fmt;
use subtle::{Choice, ConditionallySelectable};
use vli::{PseudoMersenne, Vli, bytes_for_bits, words_for_bits};

/// Supported SECG curves.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum CurveId {
    /// secp160r1
    Secp160r1,
    /// secp192r1, also known as NIST P-192
    Secp192r1,
    /// secp224r1, also known as NIST P-224
    Secp224r1,
    /// secp256r1, also known as NIST P-256
    Secp256r1,
    /// secp256k1
    Secp256k1,
    /// secp384r1, also known as NIST P-384
    Secp384r1,
    /// secp521r1, also known as NIST P-521
    Secp521r1,
}

impl CurveId {
    /// Every supported curve, smallest first.
    pub const ALL: [CurveId; 7] = [
        CurveId::Secp160r1,
        CurveId::Secp192r1,
        CurveId::Secp224r1,
        CurveId::Secp256r1,
        CurveId::Secp256k1,
        CurveId::Secp384r1,
        CurveId::Secp521r1,
    ];

    /// SECG name of the curve.
    pub const fn name(self) -> &'static str {
        match self {
            CurveId::Secp160r1 => "secp160r1",
            CurveId::Secp192r1 => "secp192r1",
            CurveId::Secp224r1 => "secp224r1",
            CurveId::Secp256r1 => "secp256r1",
            CurveId::Secp256k1 => "secp256k1",
            CurveId::Secp384r1 => "secp384r1",
            CurveId::Secp521r1 => "secp521r1",
        }
    }

    /// Look a curve up by its SECG or NIST name.
    pub fn from_name(name: &str) -> Option<Self> {
        let id = match name {
            "secp160r1" => CurveId::Secp160r1,
            "secp192r1" | "P-192" | "prime192v1" => CurveId::Secp192r1,
            "secp224r1" | "P-224" => CurveId::Secp224r1,
            "secp256r1" | "P-256" | "prime256v1" => CurveId::Secp256r1,
            "secp256k1" => CurveId::Secp256k1,
            "secp384r1" | "P-384" => CurveId::Secp384r1,
            "secp521r1" | "P-521" => CurveId::Secp521r1,
            _ => return None,
        };
        Some(id)
    }

    /// Domain parameters of this curve.
    pub fn curve(self) -> &'static Curve {
        use super::curves::*;

        match self {
            CurveId::Secp160r1 => &SECP160R1,
            CurveId::Secp192r1 => &SECP192R1,
            CurveId::Secp224r1 => &SECP224R1,
            CurveId::Secp256r1 => &SECP256R1,
            CurveId::Secp256k1 => &SECP256K1,
            CurveId::Secp384r1 => &SECP384R1,
            CurveId::Secp521r1 => &SECP521R1,
        }
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coefficient `a` of the curve equation `y² = x³ + ax + b`.
///
/// Selects the doubling formula and the right-hand side evaluation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EquationA {
    /// `a = -3`, the NIST and SECG random curves
    MinusThree,
    /// `a = 0`, the Koblitz curve secp256k1
    Zero,
}

/// Domain parameters of a short Weierstrass curve over a prime field.
///
/// Descriptors are `'static` and compared by [`CurveId`].
pub struct Curve {
    pub(crate) id: CurveId,
    pub(crate) field: PseudoMersenne,
    pub(crate) a: EquationA,
    pub(crate) b: Vli,
    pub(crate) g: AffinePoint,
    pub(crate) n: Vli,
    pub(crate) n_bits: usize,
}

impl Curve {
    /// Descriptor for `id`.
    pub fn from_id(id: CurveId) -> &'static Self {
        id.curve()
    }

    /// Curve identifier.
    pub fn id(&self) -> CurveId {
        self.id
    }

    /// SECG name of the curve.
    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    /// Field prime `p`.
    pub fn modulus(&self) -> &Vli {
        self.field.modulus()
    }

    /// Group order `n`.
    pub fn order(&self) -> &Vli {
        &self.n
    }

    /// `floor(n / 2)`, the largest canonical (low) `s`.
    pub fn half_order(&self) -> Vli {
        self.n.shr1(self.n_words())
    }

    /// Base point `G`.
    pub fn generator(&self) -> &AffinePoint {
        &self.g
    }

    /// Coefficient `a` of the curve equation.
    pub fn equation_a(&self) -> EquationA {
        self.a
    }

    /// Coefficient `b` of the curve equation.
    pub fn b(&self) -> &Vli {
        &self.b
    }

    /// Bit length of `p`.
    pub fn field_bits(&self) -> usize {
        self.field.bits()
    }

    /// Bit length of `n`.
    pub fn order_bits(&self) -> usize {
        self.n_bits
    }

    /// Width of an encoded field element.
    pub fn field_bytes(&self) -> usize {
        bytes_for_bits(self.field.bits())
    }

    /// Width of an encoded scalar (private key, `r`, `s`).
    pub fn scalar_bytes(&self) -> usize {
        bytes_for_bits(self.n_bits)
    }

    pub(crate) fn words(&self) -> usize {
        self.field.words()
    }

    pub(crate) fn n_words(&self) -> usize {
        words_for_bits(self.n_bits)
    }

    //
    // Field arithmetic
    //

    pub(crate) fn mod_add(&self, a: &Vli, b: &Vli) -> Vli {
        self.field.add(a, b)
    }

    pub(crate) fn mod_sub(&self, a: &Vli, b: &Vli) -> Vli {
        self.field.sub(a, b)
    }

    pub(crate) fn mod_mult(&self, a: &Vli, b: &Vli) -> Vli {
        self.field.mul(a, b)
    }

    pub(crate) fn mod_square(&self, a: &Vli) -> Vli {
        self.field.square(a)
    }

    pub(crate) fn mod_half(&self, a: &Vli) -> Vli {
        self.field.half(a)
    }

    pub(crate) fn mod_inv(&self, a: &Vli) -> Vli {
        self.field.invert(a)
    }

    /// Right-hand side of the curve equation, `x³ + ax + b`.
    pub(crate) fn x_side(&self, x: &Vli) -> Vli {
        let x3 = self.mod_mult(&self.mod_square(x), x);
        let rhs = match self.a {
            EquationA::MinusThree => {
                let three_x = self.mod_add(&self.mod_add(x, x), x);
                self.mod_sub(&x3, &three_x)
            }
            EquationA::Zero => x3,
        };
        self.mod_add(&rhs, &self.b)
    }

    /// Double the Jacobian point `(x, y, z)`.
    ///
    /// Total: a point with `z = 0` or `y = 0` doubles to `z = 0`.
    pub(crate) fn double_jacobian(&self, x1: &Vli, y1: &Vli, z1: &Vli) -> (Vli, Vli, Vli) {
        match self.a {
            EquationA::MinusThree => {
                let t4 = self.mod_square(y1);
                let t5 = self.mod_mult(x1, &t4); // A = x1*y1^2
                let t4 = self.mod_square(&t4); // y1^4
                let z3 = self.mod_mult(y1, z1);
                let z = self.mod_square(z1);
                let x = self.mod_add(x1, &z); // x1 + z1^2
                let z = self.mod_add(&z, &z);
                let z = self.mod_sub(&x, &z); // x1 - z1^2
                let x = self.mod_mult(&x, &z); // x1^2 - z1^4
                let z = self.mod_add(&x, &x);
                let x = self.mod_add(&x, &z);
                let x = self.mod_half(&x); // B = 3/2 (x1^2 - z1^4)

                let x3 = self.mod_square(&x);
                let x3 = self.mod_sub(&x3, &t5);
                let x3 = self.mod_sub(&x3, &t5); // B^2 - 2A
                let t5 = self.mod_sub(&t5, &x3);
                let y3 = self.mod_mult(&x, &t5);
                let y3 = self.mod_sub(&y3, &t4); // B(A - x3) - y1^4
                (x3, y3, z3)
            }
            EquationA::Zero => {
                let t5 = self.mod_square(y1);
                let t4 = self.mod_mult(x1, &t5); // A = x1*y1^2
                let x = self.mod_square(x1);
                let t5 = self.mod_square(&t5); // y1^4
                let z3 = self.mod_mult(y1, z1);
                let y = self.mod_add(&x, &x);
                let y = self.mod_add(&y, &x);
                let y = self.mod_half(&y); // B = 3/2 x1^2

                let x3 = self.mod_square(&y);
                let x3 = self.mod_sub(&x3, &t4);
                let x3 = self.mod_sub(&x3, &t4); // B^2 - 2A
                let t4 = self.mod_sub(&t4, &x3);
                let y3 = self.mod_mult(&y, &t4);
                let y3 = self.mod_sub(&y3, &t5); // B(A - x3) - y1^4
                (x3, y3, z3)
            }
        }
    }

    //
    // Scalar arithmetic modulo n
    //

    pub(crate) fn scalar_add(&self, a: &Vli, b: &Vli) -> Vli {
        a.add_mod(b, &self.n, self.n_words())
    }

    pub(crate) fn scalar_mul(&self, a: &Vli, b: &Vli) -> Vli {
        a.mul_mod(b, &self.n, self.n_words())
    }

    pub(crate) fn scalar_inv(&self, a: &Vli) -> Vli {
        a.inv_mod(&self.n, self.n_words())
    }

    pub(crate) fn scalar_neg(&self, a: &Vli) -> Vli {
        a.neg_mod(&self.n, self.n_words())
    }

    /// Is `0 < k < n`? Constant time.
    pub(crate) fn is_scalar_in_range(&self, k: &Vli) -> Choice {
        let words = self.n_words();
        !k.ct_is_zero(words) & k.ct_lt(&self.n, words)
    }

    /// Is `0 < k < n`? For public values.
    pub(crate) fn is_scalar_in_range_vartime(&self, k: &Vli) -> bool {
        let words = self.n_words();
        !k.is_zero_vartime(words) && k.cmp_vartime(&self.n, words).is_lt()
    }

    /// Reduce a value below `2^n_bits` into `[0, n)` with one masked
    /// subtraction.
    pub(crate) fn reduce_once(&self, k: &Vli) -> Vli {
        let words = self.n_words();
        let (reduced, borrow) = k.sub(&self.n, words);
        Vli::conditional_select(&reduced, k, Choice::from(borrow as u8))
    }

    /// Reduce a field element into `[0, n)`.
    ///
    /// Every supported `p` satisfies `p < 2n`, so one subtraction suffices.
    pub(crate) fn field_to_scalar(&self, x: &Vli) -> Vli {
        let words = self.words().max(self.n_words());
        let (reduced, borrow) = x.sub(&self.n, words);
        Vli::conditional_select(&reduced, x, Choice::from(borrow as u8))
    }

    /// Leftmost `n_bits` bits of a big-endian string (RFC 6979 §2.3.2).
    pub(crate) fn bits2int(&self, bytes: &[u8]) -> Vli {
        let n_bytes = self.scalar_bytes();
        let bytes = &bytes[..bytes.len().min(n_bytes)];
        let value = Vli::from_be_bytes(bytes);
        let excess = bytes.len() * 8;
        if excess > self.n_bits {
            value.shr_vartime(excess - self.n_bits, self.n_words())
        } else {
            value
        }
    }

    /// [`Curve::bits2int`] followed by one masked subtraction of `n`.
    pub(crate) fn bits2int_reduced(&self, bytes: &[u8]) -> Vli {
        self.reduce_once(&self.bits2int(bytes))
    }
}

impl PartialEq for Curve {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Curve {}

impl fmt::Debug for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curve").field("id", &self.id).finish_non_exhaustive()
    }
}
