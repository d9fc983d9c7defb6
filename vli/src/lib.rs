#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

mod arith;
mod bits;
mod bytes;
mod cmp;
mod modular;
mod reduce;
mod uint;

pub use crate::{
    reduce::PseudoMersenne,
    uint::{Vli, WideVli},
};
pub use subtle;

/// Machine word used as a limb.
pub type Word = u64;

/// Double-width word holding the full product of two limbs.
pub(crate) type WideWord = u128;

/// Size of a [`Word`] in bits.
pub const WORD_BITS: usize = Word::BITS as usize;

/// Size of a [`Word`] in bytes.
pub const WORD_BYTES: usize = WORD_BITS / 8;

/// Limb capacity of a [`Vli`]: 576 bits, enough for secp521r1.
pub const MAX_WORDS: usize = 9;

/// Byte capacity of a [`Vli`].
pub const MAX_BYTES: usize = MAX_WORDS * WORD_BYTES;

/// Number of limbs needed to hold `bits` bits.
pub const fn words_for_bits(bits: usize) -> usize {
    bits.div_ceil(WORD_BITS)
}

/// Number of bytes needed to hold `bits` bits.
pub const fn bytes_for_bits(bits: usize) -> usize {
    bits.div_ceil(8)
}
