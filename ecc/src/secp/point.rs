//! Point arithmetic on short Weierstrass curves.
//!
//! Scalar multiplication follows Rivain, "Fast and Regular Algorithms for
//! Scalar Multiplication over Elliptic Curves" (<https://eprint.iacr.org/2011/338>):
//! a Montgomery ladder built from co-Z additions, where both ladder registers
//! share one implicit `Z` coordinate.

use super::Curve;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use vli::{Vli, WORD_BITS};
use zeroize::Zeroize;

/// Point in affine coordinates.
///
/// The point at infinity is represented by `x = y = 0`, which is not on any
/// supported curve since `b != 0`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AffinePoint {
    pub(crate) x: Vli,
    pub(crate) y: Vli,
}

impl AffinePoint {
    /// The point at infinity.
    pub const IDENTITY: Self = Self::new(Vli::ZERO, Vli::ZERO);

    /// Point with the given coordinates. Not checked against any curve.
    pub const fn new(x: Vli, y: Vli) -> Self {
        Self { x, y }
    }

    /// Affine `x` coordinate.
    pub fn x(&self) -> &Vli {
        &self.x
    }

    /// Affine `y` coordinate.
    pub fn y(&self) -> &Vli {
        &self.y
    }

    /// Is this the point at infinity?
    pub fn is_identity(&self) -> Choice {
        self.ct_eq(&Self::IDENTITY)
    }
}

impl ConditionallySelectable for AffinePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: Vli::conditional_select(&a.x, &b.x, choice),
            y: Vli::conditional_select(&a.y, &b.y, choice),
        }
    }
}

impl ConstantTimeEq for AffinePoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y)
    }
}

impl Zeroize for AffinePoint {
    fn zeroize(&mut self) {
        self.x.zeroize();
        self.y.zeroize();
    }
}

/// `(X, Y)` of a Jacobian point whose `Z` is shared with another register.
#[derive(Clone, Copy)]
struct CoZ {
    x: Vli,
    y: Vli,
}

impl ConditionallySelectable for CoZ {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: Vli::conditional_select(&a.x, &b.x, choice),
            y: Vli::conditional_select(&a.y, &b.y, choice),
        }
    }
}

impl Zeroize for CoZ {
    fn zeroize(&mut self) {
        self.x.zeroize();
        self.y.zeroize();
    }
}

/// Jacobian point used by the variable-time verification path.
#[derive(Clone, Copy)]
struct Jacobian {
    x: Vli,
    y: Vli,
    z: Vli,
}

impl Curve {
    /// Is `point` a finite point on this curve with reduced coordinates?
    pub fn is_valid_point(&self, point: &AffinePoint) -> bool {
        let words = self.words();

        if bool::from(point.is_identity()) {
            return false;
        }
        if !self.field.is_reduced_vartime(&point.x) || !self.field.is_reduced_vartime(&point.y) {
            return false;
        }

        self.mod_square(&point.y).eq_vartime(&self.x_side(&point.x), words)
    }

    /// `(X, Y) <- (X * z^2, Y * z^3)`
    fn apply_z(&self, point: &mut CoZ, z: &Vli) {
        let z2 = self.mod_square(z);
        point.x = self.mod_mult(&point.x, &z2);
        let z3 = self.mod_mult(&z2, z);
        point.y = self.mod_mult(&point.y, &z3);
    }

    /// Returns `(2P, P)` sharing one `Z`, starting from `Z = initial_z`.
    fn xycz_initial_double(&self, point: &AffinePoint, initial_z: &Vli) -> (CoZ, CoZ) {
        let mut p = CoZ {
            x: point.x,
            y: point.y,
        };
        let mut doubled = p;
        self.apply_z(&mut doubled, initial_z);
        let (x, y, z) = self.double_jacobian(&doubled.x, &doubled.y, initial_z);
        self.apply_z(&mut p, &z);
        (CoZ { x, y }, p)
    }

    /// Co-Z addition: `(P, Q) <- (P', P + Q)` where `P'` is `P` rescaled to
    /// the new shared `Z`, which is `Z * (x2 - x1)`.
    ///
    /// Requires `P != ±Q`.
    fn xycz_add(&self, p: &mut CoZ, q: &mut CoZ) {
        let t5 = self.mod_sub(&q.x, &p.x);
        let t5 = self.mod_square(&t5); // A = (x2 - x1)^2
        let x1 = self.mod_mult(&p.x, &t5); // B = x1 * A
        let x2 = self.mod_mult(&q.x, &t5); // C = x2 * A
        let y2 = self.mod_sub(&q.y, &p.y);
        let t5 = self.mod_square(&y2); // D = (y2 - y1)^2

        let x3 = self.mod_sub(&t5, &x1);
        let x3 = self.mod_sub(&x3, &x2); // D - B - C
        let c_minus_b = self.mod_sub(&x2, &x1);
        let y1 = self.mod_mult(&p.y, &c_minus_b); // y1 * (C - B)
        let b_minus_x3 = self.mod_sub(&x1, &x3);
        let y3 = self.mod_mult(&y2, &b_minus_x3);
        let y3 = self.mod_sub(&y3, &y1); // (y2 - y1)(B - x3) - y1(C - B)

        *p = CoZ { x: x1, y: y1 };
        *q = CoZ { x: x3, y: y3 };
    }

    /// Conjugate co-Z addition: `(P, Q) <- (P - Q, P + Q)`, both on the new
    /// shared `Z`.
    fn xycz_add_c(&self, p: &mut CoZ, q: &mut CoZ) {
        let t5 = self.mod_sub(&q.x, &p.x);
        let t5 = self.mod_square(&t5); // A = (x2 - x1)^2
        let x1 = self.mod_mult(&p.x, &t5); // B = x1 * A
        let x2 = self.mod_mult(&q.x, &t5); // C = x2 * A
        let y_sum = self.mod_add(&q.y, &p.y);
        let y_diff = self.mod_sub(&q.y, &p.y);

        let c_minus_b = self.mod_sub(&x2, &x1);
        let e = self.mod_mult(&p.y, &c_minus_b); // E = y1 * (C - B)
        let b_plus_c = self.mod_add(&x1, &x2);

        // P + Q
        let x3 = self.mod_square(&y_diff);
        let x3 = self.mod_sub(&x3, &b_plus_c); // D - (B + C)
        let b_minus_x3 = self.mod_sub(&x1, &x3);
        let y3 = self.mod_mult(&y_diff, &b_minus_x3);
        let y3 = self.mod_sub(&y3, &e);

        // P - Q
        let x3c = self.mod_square(&y_sum);
        let x3c = self.mod_sub(&x3c, &b_plus_c); // F - (B + C)
        let t = self.mod_sub(&x3c, &x1);
        let y3c = self.mod_mult(&t, &y_sum);
        let y3c = self.mod_sub(&y3c, &e);

        *p = CoZ { x: x3c, y: y3c };
        *q = CoZ { x: x3, y: y3 };
    }

    /// Montgomery ladder over the low `num_bits` bits of `scalar`, whose top
    /// bit (`num_bits - 1`) must be set.
    ///
    /// Every iteration performs the same operations; the scalar bit only
    /// drives masked register swaps.
    fn ladder(
        &self,
        point: &AffinePoint,
        scalar: &Vli,
        initial_z: &Vli,
        num_bits: usize,
    ) -> AffinePoint {
        let (mut r1, mut r0) = self.xycz_initial_double(point, initial_z);

        for i in (1..num_bits - 1).rev() {
            let swap = !scalar.bit(i);
            CoZ::conditional_swap(&mut r0, &mut r1, swap);
            self.xycz_add_c(&mut r1, &mut r0);
            self.xycz_add(&mut r0, &mut r1);
            CoZ::conditional_swap(&mut r0, &mut r1, swap);
        }

        let swap = !scalar.bit(0);
        CoZ::conditional_swap(&mut r0, &mut r1, swap);
        self.xycz_add_c(&mut r1, &mut r0);
        CoZ::conditional_swap(&mut r0, &mut r1, swap);

        // r[1 - b] now holds +-P in the current frame, which pins down the
        // final 1/Z, including the (X1 - X0) factor of the last addition.
        let other = CoZ::conditional_select(&r1, &r0, swap);
        let z = self.mod_sub(&r1.x, &r0.x);
        let z = self.mod_mult(&z, &other.y);
        let z = self.mod_mult(&z, &point.x);
        let z = self.mod_inv(&z);
        let z = self.mod_mult(&z, &point.y);
        let mut z = self.mod_mult(&z, &other.x);

        CoZ::conditional_swap(&mut r0, &mut r1, swap);
        self.xycz_add(&mut r0, &mut r1);
        CoZ::conditional_swap(&mut r0, &mut r1, swap);

        self.apply_z(&mut r0, &z);
        let result = AffinePoint::new(r0.x, r0.y);

        z.zeroize();
        r0.zeroize();
        r1.zeroize();
        result
    }

    /// Returns `k + n` or `k + 2n`, whichever has bit `n_bits` set, so the
    /// ladder always runs over `n_bits + 1` bits.
    pub(crate) fn regularize(&self, k: &Vli) -> Vli {
        let words = self.n_words();
        let (k0, carry) = k.add(&self.n, words);
        let mut high = Choice::from(carry as u8);
        if self.n_bits < words * WORD_BITS {
            high |= k0.bit(self.n_bits);
        }
        let (k1, _) = k0.add(&self.n, words);
        Vli::conditional_select(&k1, &k0, high)
    }

    /// Computes `k * point` in constant time, or `None` for the point at
    /// infinity.
    ///
    /// `k` must be in `[1, n - 1]` and `point` must have order `n`.
    /// `initial_z` randomizes the projective representation; pass
    /// [`Vli::ONE`] when no randomness is available.
    pub(crate) fn mul_point(
        &self,
        point: &AffinePoint,
        k: &Vli,
        initial_z: &Vli,
    ) -> Option<AffinePoint> {
        let words = self.n_words();
        let mut scalar = self.regularize(k);
        let mut result = self.ladder(point, &scalar, initial_z, self.n_bits + 1);
        scalar.zeroize();

        // The regularized ladder passes through the identity, which co-Z
        // coordinates cannot represent, for k in {1, n - 2, n - 1}.
        let (n_minus_one, _) = self.n.sub(&Vli::ONE, words);
        let (n_minus_two, _) = self.n.sub(&Vli::from_word(2), words);
        let doubled = self.double_affine(point);
        result.conditional_assign(point, k.ct_eq(&Vli::ONE));
        result.conditional_assign(&self.negate(point), k.ct_eq(&n_minus_one));
        result.conditional_assign(&self.negate(&doubled), k.ct_eq(&n_minus_two));

        if bool::from(result.is_identity()) {
            None
        } else {
            Some(result)
        }
    }

    /// Computes `k * G`, or `None` if `k` is not in `[1, n - 1]`.
    pub(crate) fn compute_public_point(&self, k: &Vli, initial_z: &Vli) -> Option<AffinePoint> {
        if !bool::from(self.is_scalar_in_range(k)) {
            return None;
        }
        self.mul_point(&self.g, k, initial_z)
    }

    /// Affine point addition for public inputs.
    ///
    /// Handles doubling, inverses and the identity.
    pub fn point_add(&self, p: &AffinePoint, q: &AffinePoint) -> AffinePoint {
        let words = self.words();

        if bool::from(p.is_identity()) {
            return *q;
        }
        if bool::from(q.is_identity()) {
            return *p;
        }

        if p.x.eq_vartime(&q.x, words) {
            if !p.y.eq_vartime(&q.y, words) {
                return AffinePoint::IDENTITY;
            }
            return self.double_affine(p);
        }

        // Both inputs have Z = 1, so they are already co-Z.
        let mut a = CoZ { x: p.x, y: p.y };
        let mut b = CoZ { x: q.x, y: q.y };
        let z = self.mod_sub(&q.x, &p.x);
        self.xycz_add(&mut a, &mut b);
        self.to_affine(&Jacobian { x: b.x, y: b.y, z })
    }

    /// `2 * point`, in constant time.
    fn double_affine(&self, point: &AffinePoint) -> AffinePoint {
        let (x, y, z) = self.double_jacobian(&point.x, &point.y, &Vli::ONE);
        self.to_affine(&Jacobian { x, y, z })
    }

    /// `-point`
    pub(crate) fn negate(&self, point: &AffinePoint) -> AffinePoint {
        AffinePoint::new(point.x, self.field.neg(&point.y))
    }

    /// Normalize to `Z = 1`. `Z = 0` yields the identity since the inverse
    /// of zero is zero.
    fn to_affine(&self, point: &Jacobian) -> AffinePoint {
        let mut coz = CoZ {
            x: point.x,
            y: point.y,
        };
        self.apply_z(&mut coz, &self.mod_inv(&point.z));
        AffinePoint::new(coz.x, coz.y)
    }

    /// `acc + point` for the verification path. Inputs are public.
    fn add_mixed_vartime(&self, acc: &Jacobian, point: &AffinePoint) -> Option<Jacobian> {
        let words = self.words();

        // Bring `point` onto the accumulator's Z.
        let mut t = CoZ {
            x: point.x,
            y: point.y,
        };
        self.apply_z(&mut t, &acc.z);

        if t.x.eq_vartime(&acc.x, words) {
            if t.y.eq_vartime(&acc.y, words) {
                let (x, y, z) = self.double_jacobian(&acc.x, &acc.y, &acc.z);
                return Some(Jacobian { x, y, z });
            }
            return None;
        }

        let mut r = CoZ {
            x: acc.x,
            y: acc.y,
        };
        let dz = self.mod_sub(&r.x, &t.x);
        self.xycz_add(&mut t, &mut r);
        Some(Jacobian {
            x: r.x,
            y: r.y,
            z: self.mod_mult(&acc.z, &dz),
        })
    }

    /// Computes `u1 * G + u2 * q` with Shamir's trick. Variable time; only
    /// for signature verification, where every input is public.
    pub(crate) fn double_mul_vartime(
        &self,
        u1: &Vli,
        u2: &Vli,
        q: &AffinePoint,
    ) -> Option<AffinePoint> {
        let n_words = self.n_words();
        let sum = self.point_add(&self.g, q);
        let table = [AffinePoint::IDENTITY, self.g, *q, sum];

        let bits = u1
            .num_bits_vartime(n_words)
            .max(u2.num_bits_vartime(n_words));

        let mut acc: Option<Jacobian> = None;
        for i in (0..bits).rev() {
            if let Some(j) = acc {
                let (x, y, z) = self.double_jacobian(&j.x, &j.y, &j.z);
                acc = Some(Jacobian { x, y, z });
            }

            let index = usize::from(u1.bit_vartime(i)) | (usize::from(u2.bit_vartime(i)) << 1);
            let addend = &table[index];
            if bool::from(addend.is_identity()) {
                continue;
            }

            acc = match acc {
                None => Some(Jacobian {
                    x: addend.x,
                    y: addend.y,
                    z: Vli::ONE,
                }),
                Some(j) => self.add_mixed_vartime(&j, addend),
            };
        }

        let result = self.to_affine(&acc?);
        if bool::from(result.is_identity()) {
            None
        } else {
            Some(result)
        }
    }
}
