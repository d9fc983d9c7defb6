#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

#[cfg(any(feature = "std", test))]
extern crate std;

mod bytes;
mod derive;
mod error;
mod rng;

#[cfg(feature = "ecdsa")]
#[cfg_attr(docsrs, doc(cfg(feature = "ecdsa")))]
pub mod ecdsa;
#[cfg(feature = "eddsa")]
#[cfg_attr(docsrs, doc(cfg(feature = "eddsa")))]
pub mod eddsa;
#[cfg(feature = "ecdsa")]
mod secp;

pub use crate::{
    bytes::{
        CompactBytes, DerBytes, EncodedBytes, FieldBytes, MAX_DER_BYTES, MAX_FIELD_BYTES,
        MAX_POINT_BYTES, MAX_SIGNATURE_BYTES, PointBytes,
    },
    derive::DerivationParams,
    error::{Error, Result},
    rng::RNG_MAX_TRIES,
};
pub use rand_core;
pub use signature;
pub use vli;

#[cfg(feature = "ecdsa")]
pub use crate::secp::{
    AffinePoint, Curve, CurveId, EquationA, PrivateKey, PublicKey, SECP160R1, SECP192R1,
    SECP224R1, SECP256K1, SECP256R1, SECP384R1, SECP521R1, SharedSecret,
};
