//! Fixed-capacity byte buffers for variable-width encodings.

use core::{fmt, ops::Deref};
use zeroize::Zeroize;

/// Largest field element or scalar encoding (secp521r1).
pub const MAX_FIELD_BYTES: usize = 66;

/// Largest SEC1 point encoding: prefix byte plus two coordinates.
pub const MAX_POINT_BYTES: usize = 1 + 2 * MAX_FIELD_BYTES;

/// Largest compact signature encoding.
pub const MAX_SIGNATURE_BYTES: usize = 2 * MAX_FIELD_BYTES;

/// Largest DER signature encoding: a long-form SEQUENCE header and two
/// INTEGERs with a sign byte each.
pub const MAX_DER_BYTES: usize = 3 + 2 * (2 + 1 + MAX_FIELD_BYTES);

/// Field element or scalar serialized as big-endian bytes.
pub type FieldBytes = EncodedBytes<MAX_FIELD_BYTES>;

/// Serialized curve point.
pub type PointBytes = EncodedBytes<MAX_POINT_BYTES>;

/// Compact `r || s` signature.
pub type CompactBytes = EncodedBytes<MAX_SIGNATURE_BYTES>;

/// ASN.1 DER signature.
pub type DerBytes = EncodedBytes<MAX_DER_BYTES>;

/// Byte string of up to `N` bytes stored inline.
#[derive(Clone, Copy)]
pub struct EncodedBytes<const N: usize> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> EncodedBytes<N> {
    /// Zero-filled buffer of `len` bytes.
    pub(crate) fn zeroed(len: usize) -> Self {
        assert!(len <= N, "encoding exceeds buffer capacity");
        Self { bytes: [0; N], len }
    }

    /// Copy `bytes` into a new buffer.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        if bytes.len() > N {
            return None;
        }
        let mut out = Self::zeroed(bytes.len());
        out.bytes[..bytes.len()].copy_from_slice(bytes);
        Some(out)
    }

    /// Mutable access to the used bytes.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes[..self.len]
    }

    /// Append a single byte.
    pub(crate) fn push(&mut self, byte: u8) {
        self.bytes[self.len] = byte;
        self.len += 1;
    }

    /// Append `len` zero bytes and return them for filling.
    pub(crate) fn extend_zeroed(&mut self, len: usize) -> &mut [u8] {
        let start = self.len;
        self.len += len;
        &mut self.bytes[start..self.len]
    }
}

impl<const N: usize> AsRef<[u8]> for EncodedBytes<N> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl<const N: usize> Deref for EncodedBytes<N> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_ref()
    }
}

impl<const N: usize> fmt::Debug for EncodedBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.as_ref() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl<const N: usize> PartialEq for EncodedBytes<N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_ref() == other.as_ref()
    }
}

impl<const N: usize> Eq for EncodedBytes<N> {}

impl<const N: usize> PartialEq<[u8]> for EncodedBytes<N> {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_ref() == other
    }
}

impl<const N: usize> Zeroize for EncodedBytes<N> {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
        self.len.zeroize();
    }
}
