//! Uniform sampling of secret integers.

use crate::{Error, Result};
use rand_core::CryptoRngCore;
use subtle::Choice;
use vli::{Vli, WORD_BYTES, Word};

/// Attempts made before a rejection-sampling loop gives up.
pub const RNG_MAX_TRIES: usize = 64;

/// Draw a uniform integer in `[1, top)` where `top` occupies `words` limbs.
///
/// Candidates are masked to the bit length of `top` and rejected when zero
/// or out of range, so each attempt succeeds with probability above 1/2.
pub(crate) fn random_below<R>(rng: &mut R, top: &Vli, words: usize) -> Result<Vli>
where
    R: CryptoRngCore + ?Sized,
{
    let bits = top.num_bits_vartime(words);
    let mut buf = [0u8; vli::MAX_BYTES];

    for _ in 0..RNG_MAX_TRIES {
        rng.try_fill_bytes(&mut buf[..words * WORD_BYTES])
            .map_err(|_| Error::Rng)?;

        let mut candidate = Vli::ZERO;
        for (word, chunk) in candidate
            .as_words_mut()
            .iter_mut()
            .zip(buf[..words * WORD_BYTES].chunks_exact(WORD_BYTES))
        {
            let mut limb = [0u8; WORD_BYTES];
            limb.copy_from_slice(chunk);
            *word = Word::from_le_bytes(limb);
        }
        let candidate = candidate.mask_bits(bits);

        let in_range: Choice = !candidate.ct_is_zero(words) & candidate.ct_lt(top, words);
        if bool::from(in_range) {
            zeroize::Zeroize::zeroize(&mut buf);
            return Ok(candidate);
        }
        log::trace!("random integer rejected, drawing again");
    }

    zeroize::Zeroize::zeroize(&mut buf);
    Err(Error::RetriesExhausted)
}
