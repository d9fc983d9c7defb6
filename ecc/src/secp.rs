//! SECG prime curves: domain parameters, point arithmetic and keys.

mod curve;
mod curves;
mod ecdh;
mod point;
mod private_key;
mod public_key;
mod sqrt;

pub use self::{
    curve::{Curve, CurveId, EquationA},
    curves::{SECP160R1, SECP192R1, SECP224R1, SECP256K1, SECP256R1, SECP384R1, SECP521R1},
    ecdh::SharedSecret,
    point::AffinePoint,
    private_key::PrivateKey,
    public_key::PublicKey,
};
