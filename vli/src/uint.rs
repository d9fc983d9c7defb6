//! Fixed-capacity integer types.

use crate::{MAX_WORDS, WORD_BITS, Word};
use core::fmt;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

/// Unsigned integer of up to [`MAX_WORDS`] limbs, least-significant limb
/// first.
///
/// Operations take the number of significant limbs as an argument. Limbs at
/// and above that count are kept zero, so equality and selection may look at
/// the whole array.
#[derive(Clone, Copy, Default)]
pub struct Vli(pub(crate) [Word; MAX_WORDS]);

/// Double-capacity integer holding an unreduced product of two [`Vli`]s.
#[derive(Clone, Copy)]
pub struct WideVli(pub(crate) [Word; 2 * MAX_WORDS]);

impl Vli {
    /// Zero.
    pub const ZERO: Self = Self([0; MAX_WORDS]);

    /// One.
    pub const ONE: Self = Self::from_word(1);

    /// Create a value from a single limb.
    pub const fn from_word(word: Word) -> Self {
        let mut words = [0; MAX_WORDS];
        words[0] = word;
        Self(words)
    }

    /// Create a value from its limbs.
    pub const fn from_words(words: [Word; MAX_WORDS]) -> Self {
        Self(words)
    }

    /// Parse a big-endian hexadecimal string.
    ///
    /// Intended for constant tables; panics (at compile time when used in a
    /// `const`) on a non-hex digit or an oversized string.
    pub const fn from_be_hex(hex: &str) -> Self {
        let bytes = hex.as_bytes();
        assert!(bytes.len() <= MAX_WORDS * WORD_BITS / 4, "hex string too long");

        let mut words = [0; MAX_WORDS];
        let mut i = 0;
        while i < bytes.len() {
            let digit = bytes[bytes.len() - 1 - i];
            let nibble = match digit {
                b'0'..=b'9' => digit - b'0',
                b'a'..=b'f' => digit - b'a' + 10,
                b'A'..=b'F' => digit - b'A' + 10,
                _ => panic!("invalid hex digit"),
            };
            words[i / 16] |= (nibble as Word) << ((i % 16) * 4);
            i += 1;
        }
        Self(words)
    }

    /// Borrow the limbs.
    pub const fn as_words(&self) -> &[Word; MAX_WORDS] {
        &self.0
    }

    /// Mutably borrow the limbs.
    pub fn as_words_mut(&mut self) -> &mut [Word; MAX_WORDS] {
        &mut self.0
    }
}

impl WideVli {
    /// Zero.
    pub const ZERO: Self = Self([0; 2 * MAX_WORDS]);

    /// Borrow the limbs.
    pub const fn as_words(&self) -> &[Word; 2 * MAX_WORDS] {
        &self.0
    }

    /// Low `words` limbs as a [`Vli`]. Higher limbs are discarded.
    pub fn low(&self, words: usize) -> Vli {
        let mut out = Vli::ZERO;
        out.0[..words].copy_from_slice(&self.0[..words]);
        out
    }
}

impl From<&Vli> for WideVli {
    fn from(value: &Vli) -> Self {
        let mut out = Self::ZERO;
        out.0[..MAX_WORDS].copy_from_slice(&value.0);
        out
    }
}

impl fmt::Debug for Vli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vli(0x")?;
        for word in self.0.iter().rev() {
            write!(f, "{word:016X}")?;
        }
        write!(f, ")")
    }
}

impl fmt::Debug for WideVli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WideVli(0x")?;
        for word in self.0.iter().rev() {
            write!(f, "{word:016X}")?;
        }
        write!(f, ")")
    }
}

impl ConditionallySelectable for Vli {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut out = Self::ZERO;
        for ((o, a), b) in out.0.iter_mut().zip(&a.0).zip(&b.0) {
            *o = Word::conditional_select(a, b, choice);
        }
        out
    }
}

impl ConditionallySelectable for WideVli {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut out = Self::ZERO;
        for ((o, a), b) in out.0.iter_mut().zip(&a.0).zip(&b.0) {
            *o = Word::conditional_select(a, b, choice);
        }
        out
    }
}

impl ConstantTimeEq for Vli {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

/// Constant-time comparison
impl PartialEq for Vli {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Vli {}

impl Zeroize for Vli {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Zeroize for WideVli {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}
