//! Deterministic secret derivation from a seed.
//!
//! This is a bespoke HMAC construction kept for compatibility with existing
//! derived keys. It has not been analysed as a general-purpose KDF; prefer
//! HKDF for new designs.
//!
//! ```text
//! K_0     = seed
//! K_{i+1} = HMAC(key = K_i, seed || personalization || BE32(index))
//! output  = K_rounds
//! ```

use crate::{EncodedBytes, Error, Result};
use digest::{Digest, KeyInit, core_api::BlockSizeUser};
use hmac::{Mac, SimpleHmac};
use zeroize::{Zeroize, Zeroizing};

/// Largest supported MAC output (SHA-512).
pub(crate) const MAX_MAC_BYTES: usize = 64;

/// Output of a MAC computation.
pub(crate) type MacBytes = EncodedBytes<MAX_MAC_BYTES>;

/// Parameters for deterministic secret derivation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct DerivationParams {
    rounds: u32,
}

impl DerivationParams {
    /// Iterate the MAC `rounds` times. Zero is treated as one.
    pub const fn new(rounds: u32) -> Self {
        Self {
            rounds: if rounds == 0 { 1 } else { rounds },
        }
    }

    /// Number of MAC rounds.
    pub const fn rounds(&self) -> u32 {
        self.rounds
    }
}

impl Default for DerivationParams {
    fn default() -> Self {
        Self::new(1)
    }
}

/// HMAC instance keyed with `key`.
///
/// Keys longer than a block are hashed first and shorter ones zero padded,
/// which is exactly how HMAC treats them; doing it here keeps key setup
/// infallible.
pub(crate) fn hmac_with_key<D>(key: &[u8]) -> SimpleHmac<D>
where
    D: Digest + BlockSizeUser,
{
    let mut block = digest::core_api::Block::<D>::default();
    if key.len() <= block.len() {
        block[..key.len()].copy_from_slice(key);
    } else {
        let hashed = D::digest(key);
        let len = hashed.len().min(block.len());
        block[..len].copy_from_slice(&hashed[..len]);
    }
    let mac = <SimpleHmac<D> as KeyInit>::new(&block);
    block.as_mut_slice().zeroize();
    mac
}

/// Finish a MAC computation into an inline buffer.
pub(crate) fn finalize<D>(mac: SimpleHmac<D>) -> Result<MacBytes>
where
    D: Digest + BlockSizeUser,
{
    MacBytes::from_slice(&mac.finalize().into_bytes()).ok_or(Error::InvalidLength)
}

/// Run the derivation and return the final round's output.
pub(crate) fn derive_material<D>(
    seed: &[u8],
    personalization: &[u8],
    index: u32,
    params: &DerivationParams,
) -> Result<Zeroizing<MacBytes>>
where
    D: Digest + BlockSizeUser,
{
    let round = |key: &[u8]| {
        let mut mac = hmac_with_key::<D>(key);
        mac.update(seed);
        mac.update(personalization);
        mac.update(&index.to_be_bytes());
        finalize(mac)
    };

    let mut material = Zeroizing::new(round(seed)?);
    for _ in 1..params.rounds() {
        let next = round(&material)?;
        *material = next;
    }

    Ok(material)
}
