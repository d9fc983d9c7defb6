//! Domain parameters from SEC 2: Recommended Elliptic Curve Domain Parameters.
//!
//! <https://www.secg.org/sec2-v2.pdf>, with secp160r1 from version 1.0 of the same document.

use super::{AffinePoint, Curve, CurveId, EquationA};
use vli::{PseudoMersenne, Vli};

/// secp160r1.
pub static SECP160R1: Curve = Curve {
    id: CurveId::Secp160r1,
    field: PseudoMersenne::new(
        Vli::from_be_hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF7FFFFFFF"),
        160,
        Vli::from_be_hex("80000001"),
        3,
        4,
    ),
    a: EquationA::MinusThree,
    b: Vli::from_be_hex("1C97BEFC54BD7A8B65ACF89F81D4D4ADC565FA45"),
    g: AffinePoint::new(
        Vli::from_be_hex("4A96B5688EF573284664698968C38BB913CBFC82"),
        Vli::from_be_hex("23A628553168947D59DCC912042351377AC5FB32"),
    ),
    n: Vli::from_be_hex("100000000000000000001F4C8F927AED3CA752257"),
    n_bits: 161,
};

/// secp192r1 / NIST P-192.
pub static SECP192R1: Curve = Curve {
    id: CurveId::Secp192r1,
    field: PseudoMersenne::new(
        Vli::from_be_hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFF"),
        192,
        Vli::from_be_hex("10000000000000001"),
        3,
        4,
    ),
    a: EquationA::MinusThree,
    b: Vli::from_be_hex("64210519E59C80E70FA7E9AB72243049FEB8DEECC146B9B1"),
    g: AffinePoint::new(
        Vli::from_be_hex("188DA80EB03090F67CBF20EB43A18800F4FF0AFD82FF1012"),
        Vli::from_be_hex("7192B95FFC8DA78631011ED6B24CDD573F977A11E794811"),
    ),
    n: Vli::from_be_hex("FFFFFFFFFFFFFFFFFFFFFFFF99DEF836146BC9B1B4D22831"),
    n_bits: 192,
};

/// secp224r1 / NIST P-224.
pub static SECP224R1: Curve = Curve {
    id: CurveId::Secp224r1,
    field: PseudoMersenne::new(
        Vli::from_be_hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000001"),
        224,
        Vli::from_be_hex("FFFFFFFFFFFFFFFFFFFFFFFF"),
        4,
        4,
    ),
    a: EquationA::MinusThree,
    b: Vli::from_be_hex("B4050A850C04B3ABF54132565044B0B7D7BFD8BA270B39432355FFB4"),
    g: AffinePoint::new(
        Vli::from_be_hex("B70E0CBD6BB4BF7F321390B94A03C1D356C21122343280D6115C1D21"),
        Vli::from_be_hex("BD376388B5F723FB4C22DFE6CD4375A05A07476444D5819985007E34"),
    ),
    n: Vli::from_be_hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFF16A2E0B8F03E13DD29455C5C2A3D"),
    n_bits: 224,
};

/// secp256r1 / NIST P-256.
pub static SECP256R1: Curve = Curve {
    id: CurveId::Secp256r1,
    field: PseudoMersenne::new(
        Vli::from_be_hex("FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF"),
        256,
        Vli::from_be_hex("FFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000001"),
        4,
        10,
    ),
    a: EquationA::MinusThree,
    b: Vli::from_be_hex("5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B"),
    g: AffinePoint::new(
        Vli::from_be_hex("6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296"),
        Vli::from_be_hex("4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5"),
    ),
    n: Vli::from_be_hex("FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551"),
    n_bits: 256,
};

/// secp256k1, `y² = x³ + 7`.
pub static SECP256K1: Curve = Curve {
    id: CurveId::Secp256k1,
    field: PseudoMersenne::new(
        Vli::from_be_hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F"),
        256,
        Vli::from_be_hex("1000003D1"),
        4,
        4,
    ),
    a: EquationA::Zero,
    b: Vli::from_be_hex("7"),
    g: AffinePoint::new(
        Vli::from_be_hex("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798"),
        Vli::from_be_hex("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8"),
    ),
    n: Vli::from_be_hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141"),
    n_bits: 256,
};

/// secp384r1 / NIST P-384.
pub static SECP384R1: Curve = Curve {
    id: CurveId::Secp384r1,
    field: PseudoMersenne::new(
        Vli::from_be_hex(
            "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFE\
             FFFFFFFF0000000000000000FFFFFFFF",
        ),
        384,
        Vli::from_be_hex("100000000FFFFFFFFFFFFFFFF00000001"),
        6,
        4,
    ),
    a: EquationA::MinusThree,
    b: Vli::from_be_hex(
            "B3312FA7E23EE7E4988E056BE3F82D19181D9C6EFE8141120314088F5013875A\
             C656398D8A2ED19D2A85C8EDD3EC2AEF",
        ),
    g: AffinePoint::new(
        Vli::from_be_hex(
            "AA87CA22BE8B05378EB1C71EF320AD746E1D3B628BA79B9859F741E082542A38\
             5502F25DBF55296C3A545E3872760AB7",
        ),
        Vli::from_be_hex(
            "3617DE4A96262C6F5D9E98BF9292DC29F8F41DBD289A147CE9DA3113B5F0B8C0\
             0A60B1CE1D7E819D7A431D7C90EA0E5F",
        ),
    ),
    n: Vli::from_be_hex(
            "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFC7634D81F4372DDF\
             581A0DB248B0A77AECEC196ACCC52973",
        ),
    n_bits: 384,
};

/// secp521r1 / NIST P-521.
pub static SECP521R1: Curve = Curve {
    id: CurveId::Secp521r1,
    field: PseudoMersenne::new(
        Vli::from_be_hex(
            "1FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF\
             FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF\
             FFF",
        ),
        521,
        Vli::ONE,
        9,
        3,
    ),
    a: EquationA::MinusThree,
    b: Vli::from_be_hex(
            "51953EB9618E1C9A1F929A21A0B68540EEA2DA725B99B315F3B8B489918EF109\
             E156193951EC7E937B1652C0BD3BB1BF073573DF883D2C34F1EF451FD46B503F\
             00",
        ),
    g: AffinePoint::new(
        Vli::from_be_hex(
            "C6858E06B70404E9CD9E3ECB662395B4429C648139053FB521F828AF606B4D3D\
             BAA14B5E77EFE75928FE1DC127A2FFA8DE3348B3C1856A429BF97E7E31C2E5BD\
             66",
        ),
        Vli::from_be_hex(
            "11839296A789A3BC0045C8A5FB42C7D1BD998F54449579B446817AFBD17273E6\
             62C97EE72995EF42640C550B9013FAD0761353C7086A272C24088BE94769FD16\
             650",
        ),
    ),
    n: Vli::from_be_hex(
            "1FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF\
             FFA51868783BF2F966B7FCC0148F709A5D03BB5C9B8899C47AEBB6FB71E91386\
             409",
        ),
    n_bits: 521,
};
