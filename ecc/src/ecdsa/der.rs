//! ASN.1 DER encoding of ECDSA signatures.
//!
//! ```text
//! Ecdsa-Sig-Value ::= SEQUENCE {
//!     r INTEGER,
//!     s INTEGER
//! }
//! ```

use crate::{DerBytes, Error, MAX_DER_BYTES, Result};
use der::{Decode, Encode, Header, Reader as _, SliceReader, SliceWriter, Tag, asn1::UintRef};

const TAG_SEQUENCE: u8 = 0x30;
const TAG_INTEGER: u8 = 0x02;

/// Long-form length with one length byte.
const LENGTH_ONE_BYTE: u8 = 0x81;
/// Long-form length with two length bytes.
const LENGTH_TWO_BYTES: u8 = 0x82;

/// How strictly [`Signature::from_der`](super::Signature::from_der) checks
/// its input.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DecodeMode {
    /// Only canonical DER is accepted.
    #[default]
    Strict,
    /// Also accept encodings produced by some non-conforming signers:
    /// integers with the high bit set and no `0x00` sign byte (read as
    /// unsigned), redundant leading zeros, and non-minimal lengths.
    ///
    /// Both integers must still fill the sequence exactly, and nothing may
    /// follow it.
    Lenient,
}

/// Encode fixed-width big-endian `r` and `s`.
pub(crate) fn encode(r: &[u8], s: &[u8]) -> Result<DerBytes> {
    let r = UintRef::new(r)?;
    let s = UintRef::new(s)?;

    let mut buf = [0u8; MAX_DER_BYTES];
    let mut writer = SliceWriter::new(&mut buf);
    writer.sequence((r.encoded_len()? + s.encoded_len()?)?, |seq| {
        seq.encode(&r)?;
        seq.encode(&s)
    })?;

    DerBytes::from_slice(writer.finish()?).ok_or(Error::InvalidSignature)
}

/// Decode into the magnitudes of `r` and `s`, leading zeros stripped.
pub(crate) fn decode(bytes: &[u8], mode: DecodeMode) -> Result<(&[u8], &[u8])> {
    match mode {
        DecodeMode::Strict => decode_strict(bytes).map_err(|err| {
            log::debug!("rejecting DER signature: {err}");
            Error::InvalidSignature
        }),
        DecodeMode::Lenient => decode_lenient(bytes),
    }
}

fn decode_strict(bytes: &[u8]) -> der::Result<(&[u8], &[u8])> {
    let mut reader = SliceReader::new(bytes)?;
    let header = Header::decode(&mut reader)?;
    header.tag.assert_eq(Tag::Sequence)?;

    let (r, s) = reader.read_nested(header.length, |seq| {
        let r = UintRef::decode(seq)?;
        let s = UintRef::decode(seq)?;
        Ok((r, s))
    })?;
    let (r, s) = reader.finish((r, s))?;

    Ok((strip_leading_zeros(r.as_bytes()), strip_leading_zeros(s.as_bytes())))
}

fn decode_lenient(bytes: &[u8]) -> Result<(&[u8], &[u8])> {
    let mut reader = Reader { bytes };
    let mut body = reader.read_tlv(TAG_SEQUENCE)?;
    if !reader.is_empty() {
        log::debug!("rejecting DER signature: trailing data");
        return Err(Error::InvalidSignature);
    }

    let r = body.read_integer()?;
    let s = body.read_integer()?;
    if !body.is_empty() {
        log::debug!("rejecting DER signature: trailing data inside sequence");
        return Err(Error::InvalidSignature);
    }

    Ok((r, s))
}

fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

/// Reader for the non-canonical forms [`DecodeMode::Lenient`] accepts.
struct Reader<'a> {
    bytes: &'a [u8],
}

impl<'a> Reader<'a> {
    fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    fn read_byte(&mut self) -> Result<u8> {
        let (&byte, rest) = self.bytes.split_first().ok_or(Error::InvalidSignature)?;
        self.bytes = rest;
        Ok(byte)
    }

    /// Short form, or long form with one or two length bytes, minimal or not.
    fn read_length(&mut self) -> Result<usize> {
        let len = match self.read_byte()? {
            len if len < 0x80 => usize::from(len),
            LENGTH_ONE_BYTE => usize::from(self.read_byte()?),
            LENGTH_TWO_BYTES => {
                let hi = self.read_byte()?;
                let lo = self.read_byte()?;
                usize::from(u16::from_be_bytes([hi, lo]))
            }
            _ => return Err(Error::InvalidSignature),
        };
        Ok(len)
    }

    /// Read a TLV with the given tag and return a reader over its contents.
    fn read_tlv(&mut self, tag: u8) -> Result<Reader<'a>> {
        if self.read_byte()? != tag {
            return Err(Error::InvalidSignature);
        }
        let len = self.read_length()?;
        if len > self.bytes.len() {
            return Err(Error::InvalidSignature);
        }
        let (contents, rest) = self.bytes.split_at(len);
        self.bytes = rest;
        Ok(Reader { bytes: contents })
    }

    /// Read an INTEGER as unsigned and return its magnitude.
    fn read_integer(&mut self) -> Result<&'a [u8]> {
        let contents = self.read_tlv(TAG_INTEGER)?.bytes;
        if contents.is_empty() {
            return Err(Error::InvalidSignature);
        }
        Ok(strip_leading_zeros(contents))
    }
}
