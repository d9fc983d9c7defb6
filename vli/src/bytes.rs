//! Conversions between limbs and byte strings.

use crate::{MAX_BYTES, Vli, WORD_BYTES, WideVli, Word};

impl Vli {
    /// Decode a big-endian byte string of at most [`MAX_BYTES`] bytes.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        assert!(bytes.len() <= MAX_BYTES, "input exceeds Vli capacity");
        let mut out = Self::ZERO;
        for (i, &b) in bytes.iter().rev().enumerate() {
            out.0[i / WORD_BYTES] |= (b as Word) << (8 * (i % WORD_BYTES));
        }
        out
    }

    /// Decode a little-endian byte string of at most [`MAX_BYTES`] bytes.
    pub fn from_le_bytes(bytes: &[u8]) -> Self {
        assert!(bytes.len() <= MAX_BYTES, "input exceeds Vli capacity");
        let mut out = Self::ZERO;
        for (i, &b) in bytes.iter().enumerate() {
            out.0[i / WORD_BYTES] |= (b as Word) << (8 * (i % WORD_BYTES));
        }
        out
    }

    /// Encode as big-endian into `out`, zero padded on the left. Bits that
    /// do not fit are dropped.
    pub fn write_be_bytes(&self, out: &mut [u8]) {
        assert!(out.len() <= MAX_BYTES, "output exceeds Vli capacity");
        for (i, b) in out.iter_mut().rev().enumerate() {
            *b = (self.0[i / WORD_BYTES] >> (8 * (i % WORD_BYTES))) as u8;
        }
    }

    /// Encode as little-endian into `out`.
    pub fn write_le_bytes(&self, out: &mut [u8]) {
        assert!(out.len() <= MAX_BYTES, "output exceeds Vli capacity");
        for (i, b) in out.iter_mut().enumerate() {
            *b = (self.0[i / WORD_BYTES] >> (8 * (i % WORD_BYTES))) as u8;
        }
    }
}

impl WideVli {
    /// Decode a little-endian byte string of at most `2 * MAX_BYTES` bytes.
    pub fn from_le_bytes(bytes: &[u8]) -> Self {
        assert!(bytes.len() <= 2 * MAX_BYTES, "input exceeds WideVli capacity");
        let mut out = Self::ZERO;
        for (i, &b) in bytes.iter().enumerate() {
            out.0[i / WORD_BYTES] |= (b as Word) << (8 * (i % WORD_BYTES));
        }
        out
    }
}
