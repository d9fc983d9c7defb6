//! Known-answer vectors for every supported curve.
//!
//! Each curve has a key `d = SHA-256(curve name) mod n`, a peer key
//! `SHA-256(curve name || "/peer") mod n`, and the low-S signature over
//! `SHA-256("sample")` with an RFC 6979 HMAC-SHA-256 nonce.

use ecc::{Curve, SECP160R1, SECP192R1, SECP224R1, SECP256K1, SECP256R1, SECP384R1, SECP521R1};
use hex_literal::hex;

pub struct CurveVector {
    pub curve: &'static Curve,
    pub d: &'static [u8],
    /// `x || y`
    pub q: &'static [u8],
    pub q_compressed: &'static [u8],
    pub k: &'static [u8],
    /// Low-S `r || s`
    pub signature: &'static [u8],
    pub der: &'static [u8],
    pub peer_d: &'static [u8],
    /// `x` of `d * peer_d * G`
    pub shared: &'static [u8],
}

pub static CURVE_VECTORS: &[CurveVector] = &[
    CurveVector {
        curve: &SECP160R1,
        d: &hex!("00c03b3795ad56e68f07c65c5247f315973cbe59ed"),
        q: &hex!("08db51f722762282143a1c2f96f51eb5d7528a9cd03bfb60a4474f9fabc4ed94acf2ff7f29f58b9f"),
        q_compressed: &hex!("0308db51f722762282143a1c2f96f51eb5d7528a9c"),
        k: &hex!("000829e501513ce336628f8075640e84af34a0ab83"),
        signature: &hex!("005b0958db6135b721a92a9d3306e2fafc6a017bbf001ce997a87939bac06f5d38503ddb04f5121b051f"),
        der: &hex!("302c02145b0958db6135b721a92a9d3306e2fafc6a017bbf02141ce997a87939bac06f5d38503ddb04f5121b051f"),
        peer_d: &hex!("00bafac5d3fbe3e0f67a409549e1f670dd97d0afad"),
        shared: &hex!("2a77ef5a03b6af827aa567b0d2e52ebd2d222b18"),
    },
    CurveVector {
        curve: &SECP192R1,
        d: &hex!("a14987c1c10e96f416e54589a25efaa8747eca2e8a52d77d"),
        q: &hex!("31845c556abfe65dc6578e0810e90c3ee9c60e7c557d713cd3c5b0bb92b2989d3a9665b86c71d930fbfe6f3bd1ff910d"),
        q_compressed: &hex!("0331845c556abfe65dc6578e0810e90c3ee9c60e7c557d713c"),
        k: &hex!("38c7eab3fbf81ee9fcd5a84f476be726e98fcae4edf2c5ce"),
        signature: &hex!("a63288340dc815b3f83a79d2db1d574051efd0c586d201236280309d78367201b3f57855cacd2d6ef2a9bf4e85d0c307"),
        der: &hex!("3035021900a63288340dc815b3f83a79d2db1d574051efd0c586d2012302186280309d78367201b3f57855cacd2d6ef2a9bf4e85d0c307"),
        peer_d: &hex!("521b7ccf92455abe4997ac9e94029ea27b8c2c741c6f0e21"),
        shared: &hex!("478463eb5b8ef876b00c558a29b1fda51c3c135a90246ce6"),
    },
    CurveVector {
        curve: &SECP224R1,
        d: &hex!("0d10d35699b6cba4ae79f63940a8479886c9129d287283f983fc414f"),
        q: &hex!("2836ce8123fed5effbdbcb8856049f94d2c901dc8848e85913f9997afbaed90fcb2146791d0ff96a57079833f691c7a06d6167e4c9b0dfc2"),
        q_compressed: &hex!("022836ce8123fed5effbdbcb8856049f94d2c901dc8848e85913f9997a"),
        k: &hex!("f12fda54adb6cbe7b814d7db824c21d012c83ab2c9a357bb97541d5e"),
        signature: &hex!("7d00f5e910c21b02a8406ba6004e99ca8f41124f36ca12c676d8f387173f7302ecf0c9ff06c9440b30fa679d3d4f361cdb5055394f3a98e0"),
        der: &hex!("303c021c7d00f5e910c21b02a8406ba6004e99ca8f41124f36ca12c676d8f387021c173f7302ecf0c9ff06c9440b30fa679d3d4f361cdb5055394f3a98e0"),
        peer_d: &hex!("41eb07b634067b8b297a5028b1b9224a8d8ee8f89d41cc7308fba072"),
        shared: &hex!("2fa3c29599af6eb9505d19715706748bae29a3ae0a90de4422d12f3d"),
    },
    CurveVector {
        curve: &SECP256R1,
        d: &hex!("eabd2839f9e57cf2c372e686e5856cf651d7f07d0d396b3699d1d228b5931945"),
        q: &hex!("06320270583db63e3221a8c34550f32b972c50688a9b000c5a4029b68decf2dc78821c901770ea713224f0277fb3d8ece904239fa08b9ef55e018baba1cfb6a0"),
        q_compressed: &hex!("0206320270583db63e3221a8c34550f32b972c50688a9b000c5a4029b68decf2dc"),
        k: &hex!("4e6706a80879064c3d6cc48cea01ea18de71d76ab266171911bd548d71fc08f4"),
        signature: &hex!("2b3bb8260b132d6ea61ff74658bdb65d1411e59ad6dfac87db9217cab2251552345c6f251a57505128044c703a74278ea916cbe7286e10598a345895c6f60709"),
        der: &hex!("304402202b3bb8260b132d6ea61ff74658bdb65d1411e59ad6dfac87db9217cab22515520220345c6f251a57505128044c703a74278ea916cbe7286e10598a345895c6f60709"),
        peer_d: &hex!("df2bd0c574720a7803c6e9c6bba6920a5e6b397d50f74d76d976f1b93c50c4a2"),
        shared: &hex!("ed546060348f8578b7af5fa2bddb388348e9b848965939663531d4b31555fdbc"),
    },
    CurveVector {
        curve: &SECP256K1,
        d: &hex!("383b27532153f353fa4cc689239f7365dfe924ebcf67807eb6916307a4e2701e"),
        q: &hex!("2a7ddb7bf7ab537fad07b734932cab3457ee4ca85ebd9c1907e5e3f1d5262c29a08c14f3a43fedc1c7c78a63708c874d0e78d8e0e88a5bd0519dd777df7cd26e"),
        q_compressed: &hex!("022a7ddb7bf7ab537fad07b734932cab3457ee4ca85ebd9c1907e5e3f1d5262c29"),
        k: &hex!("25cd9e75b7e1b6899709031f5c4042f72fe794ed90a0f32054e45b3975c31b7d"),
        signature: &hex!("ccfa7f8df09c0937615b3b762d2962fa370c68d18ca186bf67c624307eba581a7a9eba4535c8dbb36a15585ce4ea6aea8312f56cb47c7d0da23ce320a46410eb"),
        der: &hex!("3045022100ccfa7f8df09c0937615b3b762d2962fa370c68d18ca186bf67c624307eba581a02207a9eba4535c8dbb36a15585ce4ea6aea8312f56cb47c7d0da23ce320a46410eb"),
        peer_d: &hex!("e6aa184d4bb3d4b29930a07a124defa9b8261b2131d2c45821a7ffa0f3502cdb"),
        shared: &hex!("c3a6a447de1218fab7448144bf63fc12ab8f39be17a64ec99286327ab9a3fb82"),
    },
    CurveVector {
        curve: &SECP384R1,
        d: &hex!("00000000000000000000000000000000bab1292f46afdcfc9425b529bf108e58aab39321ed5601f432ace7c5800d667c"),
        q: &hex!("90e7edcf4184faaefee78a4ab4efc78b794a2e3a6237b59dcd6f64eb2c1c6d932d3c763d808abac6807da746c605c564122ccff883f825dbe604439f919afeb57d5cc6798405ab10a2efe21c923774f03d5df54758f8cd977906e80c160bb0da"),
        q_compressed: &hex!("0290e7edcf4184faaefee78a4ab4efc78b794a2e3a6237b59dcd6f64eb2c1c6d932d3c763d808abac6807da746c605c564"),
        k: &hex!("6182e06f3339ce9a053705138088481b16e3610bf8fec8c8706ebb8f39141ccd29b11e98a76adaa731e67464edde805f"),
        signature: &hex!("83f51b4e29ca3a0f189a5c0cf4b3b8c03a49e1598234985c8313666170cccecdcba435c78eec1dfe63dd96d42e172580190a5a330280028c9770c9bfcdfa18c4ddccf74f0398be62da9482e78761880fbf481692bb5517f6871a21fcede49bc3"),
        der: &hex!("306502310083f51b4e29ca3a0f189a5c0cf4b3b8c03a49e1598234985c8313666170cccecdcba435c78eec1dfe63dd96d42e1725800230190a5a330280028c9770c9bfcdfa18c4ddccf74f0398be62da9482e78761880fbf481692bb5517f6871a21fcede49bc3"),
        peer_d: &hex!("00000000000000000000000000000000afc94dea8c88ce696c88fbffa0249959d78f4ee59a903dfdb0ca8bb251045d02"),
        shared: &hex!("015c19cd040931f4dd08f9bdf3ac80a49cb626db274f256bffc0d142e6b6849b52fed7f964c755ae3e3fa68913daf8b4"),
    },
    CurveVector {
        curve: &SECP521R1,
        d: &hex!("000000000000000000000000000000000000000000000000000000000000000000005ac72d0a5c1a44ca4d7c0efbe056bb823e710542fc65327853fe670732126966"),
        q: &hex!("000a763b89a9e9a76fde1c0c757dc417f1cde0e103af08ba8e3c185c4945298e1dee4ac5383b5625826d6ad64d7e518b83d009cf6a69fa5f9428798e5f07200ad6e4008addedb5edc50e0bd1a72be3753ec9595809e8c9843842f69e8ba6e6d0df1003837384fbba20595e6989eb71203f94341936482040ec603c2900e16bddfdc0d571"),
        q_compressed: &hex!("03000a763b89a9e9a76fde1c0c757dc417f1cde0e103af08ba8e3c185c4945298e1dee4ac5383b5625826d6ad64d7e518b83d009cf6a69fa5f9428798e5f07200ad6e4"),
        k: &hex!("00a326747e55ac1b6f5f98c9576c43db1ebaa3ba5e082352b6c6da7da9e4fea091e002bd91a745121a7f95414cbb9cfb90c31dc5312ffd9c4af1c0220aa30691b69d"),
        signature: &hex!("018869b5875f235627755b339a09f7881a950ff8007b9704b11621339b016e2dad2f29daef695f355885ee5649a7845c3d13b85a50e9acda8eeb1efe4aaa3a47833100b83403463055baefb7798650749cffb4308a0c4c2235ed451bbf61521ab35e103eda3fa83fa54ade3f08224c456e2a26947d28d3270b0531e7943ceeed991e0965"),
        der: &hex!("3081880242018869b5875f235627755b339a09f7881a950ff8007b9704b11621339b016e2dad2f29daef695f355885ee5649a7845c3d13b85a50e9acda8eeb1efe4aaa3a478331024200b83403463055baefb7798650749cffb4308a0c4c2235ed451bbf61521ab35e103eda3fa83fa54ade3f08224c456e2a26947d28d3270b0531e7943ceeed991e0965"),
        peer_d: &hex!("00000000000000000000000000000000000000000000000000000000000000000000033e4038519f93c094899e50a90077bb72e2aa67b37819e55b90cf59171c5f20"),
        shared: &hex!("017be0c0436b5fdf42f5a164c1b72026ab8b409ad3746583513d7d86fabde8e2bbce5b9a84f414a83ad36e514cb1864267f8aa3bc23c2432d0c8906a980cff7f6663"),
    },
];
