//! Public keys and their SEC1 encodings.

use super::{AffinePoint, Curve};
use crate::{Error, PointBytes, Result};
use core::fmt;
use vli::Vli;

/// SEC1 tag of an uncompressed point.
const TAG_UNCOMPRESSED: u8 = 0x04;
/// SEC1 tag of a compressed point with even `y`.
const TAG_COMPRESSED_EVEN: u8 = 0x02;
/// SEC1 tag of a compressed point with odd `y`.
const TAG_COMPRESSED_ODD: u8 = 0x03;

/// Public key: a validated point on a given curve.
///
/// Every constructor checks that the point lies on the curve and is not the
/// identity.
#[derive(Clone, Copy)]
pub struct PublicKey {
    curve: &'static Curve,
    point: AffinePoint,
}

impl PublicKey {
    /// Wrap an affine point after checking it is on `curve`.
    pub fn from_affine(curve: &'static Curve, point: AffinePoint) -> Result<Self> {
        if !curve.is_valid_point(&point) {
            log::debug!("rejecting {} public key: point not on curve", curve.name());
            return Err(Error::InvalidPublicKey);
        }
        Ok(Self { curve, point })
    }

    /// Points computed by this crate from a valid scalar.
    pub(crate) fn from_trusted_point(curve: &'static Curve, point: AffinePoint) -> Self {
        debug_assert!(curve.is_valid_point(&point));
        Self { curve, point }
    }

    /// Parse `x || y` without a prefix byte, each coordinate
    /// [`Curve::field_bytes`] wide.
    pub fn from_uncompressed_bytes(curve: &'static Curve, bytes: &[u8]) -> Result<Self> {
        let width = curve.field_bytes();
        if bytes.len() != 2 * width {
            return Err(Error::InvalidPublicKey);
        }

        let (x, y) = bytes.split_at(width);
        Self::from_affine(
            curve,
            AffinePoint::new(Vli::from_be_bytes(x), Vli::from_be_bytes(y)),
        )
    }

    /// Serialize as `x || y` without a prefix byte.
    pub fn to_uncompressed_bytes(&self) -> PointBytes {
        let width = self.curve.field_bytes();
        let mut out = PointBytes::zeroed(0);
        self.point.x.write_be_bytes(out.extend_zeroed(width));
        self.point.y.write_be_bytes(out.extend_zeroed(width));
        out
    }

    /// SEC1 compressed form: `0x02 | parity(y)` followed by `x`.
    pub fn compress(&self) -> PointBytes {
        let width = self.curve.field_bytes();
        let mut out = PointBytes::zeroed(0);
        out.push(TAG_COMPRESSED_EVEN | (self.point.y.low_word() & 1) as u8);
        self.point.x.write_be_bytes(out.extend_zeroed(width));
        out
    }

    /// Parse the SEC1 compressed form, recovering `y` from the curve
    /// equation.
    pub fn decompress(curve: &'static Curve, bytes: &[u8]) -> Result<Self> {
        let width = curve.field_bytes();
        let (&tag, x) = bytes.split_first().ok_or(Error::InvalidPublicKey)?;
        if x.len() != width || !matches!(tag, TAG_COMPRESSED_EVEN | TAG_COMPRESSED_ODD) {
            return Err(Error::InvalidPublicKey);
        }

        let x = Vli::from_be_bytes(x);
        if !curve.field.is_reduced_vartime(&x) {
            return Err(Error::InvalidPublicKey);
        }

        let y = curve
            .sqrt_vartime(&curve.x_side(&x))
            .ok_or(Error::InvalidPublicKey)?;
        let y = if (y.low_word() & 1) as u8 == tag & 1 {
            y
        } else {
            curve.field.neg(&y)
        };

        Self::from_affine(curve, AffinePoint::new(x, y))
    }

    /// Parse any SEC1 encoding: `0x04 || x || y`, `0x02 || x` or `0x03 || x`.
    pub fn from_sec1_bytes(curve: &'static Curve, bytes: &[u8]) -> Result<Self> {
        match bytes.first() {
            Some(&TAG_UNCOMPRESSED) => Self::from_uncompressed_bytes(curve, &bytes[1..]),
            Some(&TAG_COMPRESSED_EVEN | &TAG_COMPRESSED_ODD) => Self::decompress(curve, bytes),
            _ => Err(Error::InvalidPublicKey),
        }
    }

    /// SEC1 encoding, with the `0x04` prefix when uncompressed.
    pub fn to_sec1_bytes(&self, compress: bool) -> PointBytes {
        if compress {
            return self.compress();
        }

        let mut out = PointBytes::zeroed(0);
        out.push(TAG_UNCOMPRESSED);
        out.extend_zeroed(2 * self.curve.field_bytes())
            .copy_from_slice(&self.to_uncompressed_bytes());
        out
    }

    /// Curve this key belongs to.
    pub fn curve(&self) -> &'static Curve {
        self.curve
    }

    /// The underlying point.
    pub fn as_affine(&self) -> &AffinePoint {
        &self.point
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.curve == other.curve && self.point == other.point
    }
}

impl Eq for PublicKey {}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("curve", &self.curve.id())
            .field("sec1", &self.to_sec1_bytes(true))
            .finish()
    }
}
