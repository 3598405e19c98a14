//! Serialization and deserialization tests for BN256

use super::super::{order, random_g1, random_g2, Gt, G1, G2};
use crate::error::Error;

use bnpair_api::{Error as CoreError, Serialize};
use bnpair_params::traditional::bn256::{FIELD_MODULUS, G1_SIZE, G2_SIZE, GT_SIZE};
use core::num::NonZeroU32;
use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rand_core::{CryptoRng, RngCore};

/// G2 generator as x.im ‖ x.re ‖ y.im ‖ y.re
const G2_GENERATOR_HEX: &str = "198e9393920d483a7260bfb731fb5d25f1aa493335a9e71297e485b7aef312c21800deef121f1e76426a00665e5c4479674322d4f75edadd46debd5cd992f6ed090689d0585ff075ec9e99ad690c3395bc4b313370b38ef355acdadcd122975b12c85ea5db8c6deb4aab71808dcb408fe3d1e7690c43d37b4ce6cc0166fa7daa";

/// A point with x = 1 on the twist that lies outside the order-n subgroup
const G2_NON_SUBGROUP_HEX: &str = "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000010d1271953ed9ea0836846e70a1934187998c7f790cb4d7511b7f8da82de048a42869111d5381f072f8e2728fdb825a51aadd70e52c9830e9ab4b871c0531f1bb";

fn big(v: u64) -> BigUint {
    BigUint::from(v)
}

// ============================================================================
// G1 Serialization Tests
// ============================================================================

#[test]
fn test_g1_generator_encoding() {
    let bytes = G1::generator().marshal();
    let mut expected = [0u8; G1_SIZE];
    expected[31] = 1;
    expected[63] = 2;
    assert_eq!(bytes, expected);
}

#[test]
fn test_g1_round_trip() {
    for i in 1..=10u64 {
        let original = G1::scalar_base_mult(&big(i * 7919));
        let encoded = original.marshal();
        let (decoded, rest) = G1::unmarshal(&encoded).unwrap();
        assert_eq!(decoded, original);
        assert!(rest.is_empty());
    }

    let special = [G1::identity(), G1::generator(), G1::generator().neg()];
    for point in special.iter() {
        let encoded = point.marshal();
        let (decoded, _) = G1::unmarshal(&encoded).unwrap();
        assert_eq!(&decoded, point);
    }
}

#[test]
fn test_g1_infinity_is_all_zero() {
    let bytes = G1::identity().marshal();
    assert_eq!(bytes, [0u8; G1_SIZE]);
    let (decoded, _) = G1::unmarshal(&bytes).unwrap();
    assert!(decoded.is_infinity());
    assert_eq!(decoded.marshal(), bytes);
}

#[test]
fn test_g1_unmarshal_returns_remainder() {
    let p = G1::scalar_base_mult(&big(5));
    let q = G1::scalar_base_mult(&big(6));
    let mut stream = p.marshal().to_vec();
    stream.extend_from_slice(&q.marshal());
    stream.push(0xaa);

    let (first, rest) = G1::unmarshal(&stream).unwrap();
    let (second, rest) = G1::unmarshal(rest).unwrap();
    assert_eq!(first, p);
    assert_eq!(second, q);
    assert_eq!(rest, &[0xaa]);
}

#[test]
fn test_g1_short_input() {
    let bytes = G1::generator().marshal();
    assert_eq!(
        G1::unmarshal(&bytes[..G1_SIZE - 1]),
        Err(Error::Length { context: "G1", expected: G1_SIZE, actual: G1_SIZE - 1 })
    );
}

#[test]
fn test_g1_off_curve_rejected() {
    let mut bytes = [0u8; G1_SIZE];
    bytes[31] = 1;
    bytes[63] = 3;
    match G1::unmarshal(&bytes) {
        Err(Error::MalformedPoint { group, .. }) => assert_eq!(group, "G1"),
        other => panic!("expected malformed point, got {:?}", other),
    }
}

#[test]
fn test_g1_coordinate_out_of_range() {
    let mut bytes = G1::generator().marshal();
    bytes[..32].copy_from_slice(&FIELD_MODULUS);
    assert_eq!(G1::unmarshal(&bytes), Err(Error::Coordinate { context: "G1" }));
}

// ============================================================================
// G2 Serialization Tests
// ============================================================================

#[test]
fn test_g2_generator_encoding() {
    let bytes = G2::generator().marshal();
    assert_eq!(hex::encode(bytes), G2_GENERATOR_HEX);
}

#[test]
fn test_g2_round_trip() {
    for i in 1..=4u64 {
        let original = G2::scalar_base_mult(&big(i * 104_729));
        let encoded = original.marshal();
        let (decoded, rest) = G2::unmarshal(&encoded).unwrap();
        assert_eq!(decoded, original);
        assert!(rest.is_empty());
    }

    let bytes = G2::identity().marshal();
    assert_eq!(bytes, [0u8; G2_SIZE]);
    let (decoded, _) = G2::unmarshal(&bytes).unwrap();
    assert!(decoded.is_infinity());
}

#[test]
fn test_g2_non_subgroup_rejected() {
    let bytes = hex::decode(G2_NON_SUBGROUP_HEX).unwrap();
    assert_eq!(bytes.len(), G2_SIZE);
    assert_eq!(
        G2::unmarshal(&bytes),
        Err(Error::MalformedPoint { group: "G2", reason: "not in subgroup" })
    );
}

#[test]
fn test_g2_off_curve_rejected() {
    let mut bytes = G2::generator().marshal();
    bytes[G2_SIZE - 1] ^= 1;
    assert_eq!(
        G2::unmarshal(&bytes),
        Err(Error::MalformedPoint { group: "G2", reason: "not on curve" })
    );
}

#[test]
fn test_g2_short_input() {
    let bytes = G2::generator().marshal();
    assert_eq!(
        G2::unmarshal(&bytes[..G2_SIZE - 1]),
        Err(Error::Length { context: "G2", expected: G2_SIZE, actual: G2_SIZE - 1 })
    );
}

// ============================================================================
// GT Serialization Tests
// ============================================================================

#[test]
fn test_gt_round_trip() {
    let e = Gt::scalar_base_mult(&big(12));
    let mut stream = e.marshal().to_vec();
    stream.extend_from_slice(&[1, 2, 3]);

    let (decoded, rest) = Gt::unmarshal(&stream).unwrap();
    assert_eq!(decoded, e);
    assert_eq!(rest, &[1, 2, 3]);
}

#[test]
fn test_gt_accepts_any_field_element() {
    // no subgroup check is applied to GT encodings
    let mut bytes = [0u8; GT_SIZE];
    bytes[GT_SIZE - 1] = 2;
    let (decoded, _) = Gt::unmarshal(&bytes).unwrap();
    assert!(!decoded.is_one());
    assert_eq!(decoded.marshal(), bytes);
}

#[test]
fn test_gt_short_input() {
    let bytes = Gt::one().marshal();
    assert_eq!(
        Gt::unmarshal(&bytes[..GT_SIZE - 1]),
        Err(Error::Length { context: "GT", expected: GT_SIZE, actual: GT_SIZE - 1 })
    );
}

// ============================================================================
// Serialize Trait and Display
// ============================================================================

#[test]
fn test_serialize_trait_requires_exact_length() {
    let p = G1::scalar_base_mult(&big(3));
    let bytes = p.to_bytes();
    assert_eq!(G1::from_bytes(&bytes).unwrap(), p);

    let mut long = bytes.clone();
    long.push(0);
    assert!(matches!(
        G1::from_bytes(&long),
        Err(CoreError::InvalidLength { expected: 64, actual: 65, .. })
    ));

    let q = G2::generator();
    assert_eq!(G2::from_bytes(&q.to_bytes()).unwrap(), q);

    let e = Gt::generator();
    assert_eq!(Gt::from_bytes(&e.to_bytes()).unwrap(), e);

    let bad = hex::decode(G2_NON_SUBGROUP_HEX).unwrap();
    assert!(matches!(G2::from_bytes(&bad), Err(CoreError::InvalidPoint { .. })));
}

#[test]
fn test_display_format() {
    let s = G1::generator().to_string();
    assert!(s.starts_with("bn256.G1(0x"));
    assert!(s.ends_with("02)"));

    assert!(G2::generator().to_string().starts_with("bn256.G2((0x198e9393"));
    assert!(Gt::one().to_string().starts_with("bn256.GT(0x"));
}

// ============================================================================
// Random Generation
// ============================================================================

#[test]
fn test_random_elements() {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let n = order();

    for _ in 0..4 {
        let (k, p) = random_g1(&mut rng).unwrap();
        assert!(k > big(0) && k < n);
        assert_eq!(p, G1::scalar_base_mult(&k));
    }

    let (k, q) = random_g2(&mut rng).unwrap();
    assert!(k > big(0) && k < n);
    assert_eq!(q, G2::scalar_base_mult(&k));
}

struct FailingRng;

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand_core::Error> {
        Err(NonZeroU32::new(rand_core::Error::CUSTOM_START).unwrap().into())
    }
}

impl CryptoRng for FailingRng {}

#[test]
fn test_random_reports_entropy_failure() {
    assert_eq!(
        random_g1(&mut FailingRng).unwrap_err(),
        Error::Random { context: "random scalar" }
    );
    assert!(random_g2(&mut FailingRng).is_err());
}
