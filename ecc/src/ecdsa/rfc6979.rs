//! Deterministic nonces per [RFC 6979 § 3.2](https://www.rfc-editor.org/rfc/rfc6979#section-3.2).
//!
//! The HMAC-DRBG itself comes from the [`rfc6979`] crate; this module feeds
//! it the curve-width octet strings and turns its output into candidates.
//! `extra` carries the additional data of § 3.6; the hedged signer fills it
//! with fresh randomness.

use crate::{Curve, FieldBytes};
use digest::{Digest, FixedOutputReset, core_api::BlockSizeUser};
use vli::Vli;
use zeroize::Zeroizing;

/// HMAC-DRBG instantiated with the private key and message hash.
pub(crate) struct HmacDrbg<D>
where
    D: Digest + BlockSizeUser + FixedOutputReset,
{
    curve: &'static Curve,
    drbg: rfc6979::HmacDrbg<D>,
}

impl<D> HmacDrbg<D>
where
    D: Digest + BlockSizeUser + FixedOutputReset,
{
    /// Steps (a) through (g): seed from `int2octets(x)`, `bits2octets(h)` and
    /// `extra`.
    pub(crate) fn new(curve: &'static Curve, x: &Vli, prehash: &[u8], extra: &[u8]) -> Self {
        let width = curve.scalar_bytes();
        let mut x_octets = Zeroizing::new(FieldBytes::zeroed(width));
        x.write_be_bytes(x_octets.as_mut_slice());
        let mut h_octets = FieldBytes::zeroed(width);
        curve
            .bits2int_reduced(prehash)
            .write_be_bytes(h_octets.as_mut_slice());

        Self {
            curve,
            drbg: rfc6979::HmacDrbg::new(&x_octets, &h_octets, extra),
        }
    }

    /// Step (h): the next candidate, `bits2int(T)`.
    ///
    /// The candidate is not range checked; the signer rejects values outside
    /// `[1, n - 1]` and calls again, which continues from step (h.3).
    pub(crate) fn next_nonce(&mut self) -> Zeroizing<Vli> {
        let mut t = Zeroizing::new(FieldBytes::zeroed(self.curve.scalar_bytes()));
        self.drbg.fill_bytes(t.as_mut_slice());
        Zeroizing::new(self.curve.bits2int(&t))
    }
}
