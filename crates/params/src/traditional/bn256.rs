//! Constants for the BN256 (alt_bn128) pairing-friendly curve

/// BN parameter u; p and n are polynomials in u
pub const BN_U: u64 = 4_965_661_367_192_848_881;

/// Byte length of an encoded base-field element
pub const FP_SIZE: usize = 32;

/// Byte length of an encoded G1 point (x ‖ y)
pub const G1_SIZE: usize = 2 * FP_SIZE;

/// Byte length of an encoded G2 point (x.im ‖ x.re ‖ y.im ‖ y.re)
pub const G2_SIZE: usize = 4 * FP_SIZE;

/// Byte length of an encoded GT element
pub const GT_SIZE: usize = 12 * FP_SIZE;

/// Byte length of a sampled scalar
pub const SCALAR_SIZE: usize = 32;

/// Mask applied to the top byte of a sampled scalar (the order is 254 bits)
pub const SCALAR_TOP_BYTE_MASK: u8 = 0x3f;

/// Base field modulus p, big-endian
pub const FIELD_MODULUS: [u8; FP_SIZE] = [
    0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29,
    0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58, 0x5d,
    0x97, 0x81, 0x6a, 0x91, 0x68, 0x71, 0xca, 0x8d,
    0x3c, 0x20, 0x8c, 0x16, 0xd8, 0x7c, 0xfd, 0x47,
];

/// Prime order n of G1, G2 and GT, big-endian
pub const GROUP_ORDER: [u8; SCALAR_SIZE] = [
    0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29,
    0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58, 0x5d,
    0x28, 0x33, 0xe8, 0x48, 0x79, 0xb9, 0x70, 0x91,
    0x43, 0xe1, 0xf5, 0x93, 0xf0, 0x00, 0x00, 0x01,
];

/// Cofactor of G1 in E(Fp). Validation skips the order check while this is 1.
pub const G1_COFACTOR: u64 = 1;

/// Coefficient b of the base curve y² = x³ + b
pub const CURVE_B: u64 = 3;

/// Signed binary (NAF) expansion of 6u + 2, least significant digit first
pub const SIX_U_PLUS_2_NAF: [i8; 65] = [
    0, 0, 0, 1, 0, 1, 0, -1, 0, 0, 1, -1, 0, 0, 1, 0,
    0, 1, 1, 0, -1, 0, 0, 1, 0, -1, 0, 0, 0, 0, 1, 1,
    1, 0, 0, -1, 0, 0, 1, 0, 0, 0, 0, 0, -1, 0, 0, 1,
    1, 0, 0, -1, 0, 0, 0, 1, 1, 0, -1, 0, 0, 1, 0, 1,
    1,
];
