//! Error types.

use core::fmt::{self, Display, Formatter};

#[cfg(feature = "std")]
use std::error;

/// Errors surfaced at key, signature and encoding boundaries.
///
/// Arithmetic below these boundaries is total and never fails.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// Private key is zero, not below the group order, or has the wrong length
    InvalidPrivateKey,
    /// Public key encoding is malformed or the point is not on the curve
    InvalidPublicKey,
    /// Signature encoding is malformed
    InvalidSignature,
    /// Signature component `r` or `s` is outside `[1, n - 1]`
    SignatureRange,
    /// Signature does not verify
    Verify,
    /// Input has the wrong length
    InvalidLength,
    /// Operands belong to different curves
    CurveMismatch,
    /// Random number generator failed
    Rng,
    /// A retry loop ran out of attempts
    RetriesExhausted,
    /// Scalar multiplication produced the point at infinity
    DegenerateScalar,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPrivateKey => write!(f, "private key is invalid"),
            Error::InvalidPublicKey => write!(f, "public key is invalid"),
            Error::InvalidSignature => write!(f, "signature encoding is invalid"),
            Error::SignatureRange => write!(f, "signature component out of range"),
            Error::Verify => write!(f, "signature verification failed"),
            Error::InvalidLength => write!(f, "input length is invalid"),
            Error::CurveMismatch => write!(f, "operands belong to different curves"),
            Error::Rng => write!(f, "random number generator failure"),
            Error::RetriesExhausted => write!(f, "retry limit exhausted"),
            Error::DegenerateScalar => write!(f, "scalar multiplication yielded the identity"),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for Error {}

#[cfg(feature = "ecdsa")]
impl From<der::Error> for Error {
    fn from(_: der::Error) -> Error {
        Error::InvalidSignature
    }
}

impl From<Error> for signature::Error {
    #[cfg(feature = "std")]
    fn from(err: Error) -> Self {
        signature::Error::from_source(err)
    }

    #[cfg(not(feature = "std"))]
    fn from(_err: Error) -> Self {
        signature::Error::new()
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
