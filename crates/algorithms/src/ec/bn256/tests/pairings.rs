//! Pairing tests for BN256

use super::super::field::fp12::Fp12;
use super::super::g1::CurvePoint;
use super::super::g2::TwistPoint;
use super::super::pairings::{final_exponentiation, miller as raw_miller};
use super::super::{miller, order, pair, pairing_check, Gt, G1, G2};

use num_bigint::BigUint;
use proptest::prelude::*;

fn big(v: u64) -> BigUint {
    BigUint::from(v)
}

// ============================================================================
// Basic Pairing Tests
// ============================================================================

#[test]
fn test_pairing_bilinearity() {
    let a = pair(&G1::scalar_base_mult(&big(3)), &G2::scalar_base_mult(&big(5)));
    let b = pair(&G1::scalar_base_mult(&big(1)), &G2::scalar_base_mult(&big(15)));
    assert_eq!(a, b);

    let c = pair(&G1::scalar_base_mult(&big(15)), &G2::generator());
    assert_eq!(a, c);
}

#[test]
fn test_pairing_linear_in_each_argument() {
    let g1 = G1::generator();
    let g2 = G2::generator();
    let p1 = G1::scalar_base_mult(&big(2));
    let p2 = G1::scalar_base_mult(&big(3));
    let q1 = G2::scalar_base_mult(&big(5));
    let q2 = G2::scalar_base_mult(&big(7));

    // e(P1 + P2, Q) == e(P1, Q) · e(P2, Q)
    let left = pair(&p1.add(&p2), &q1);
    let right = pair(&p1, &q1).add(&pair(&p2, &q1));
    assert_eq!(left, right);

    // e(P, Q1 + Q2) == e(P, Q1) · e(P, Q2)
    let left = pair(&p1, &q1.add(&q2));
    let right = pair(&p1, &q1).add(&pair(&p1, &q2));
    assert_eq!(left, right);

    // e(-P, Q) is the inverse of e(P, Q)
    assert_eq!(pair(&g1.neg(), &g2), pair(&g1, &g2).neg());
}

#[test]
fn test_pairing_non_degeneracy() {
    let e = pair(&G1::generator(), &G2::generator());
    assert!(!e.is_one());
    assert_eq!(e, Gt::generator());
}

#[test]
fn test_pairing_has_order_n() {
    let e = Gt::generator();
    assert!(e.scalar_mult(&order()).is_one());
    assert_eq!(e.scalar_mult(&(order() + 1u32)), e);
}

#[test]
fn test_pairing_with_identity() {
    let p = G1::scalar_base_mult(&big(42));
    let q = G2::scalar_base_mult(&big(69));

    assert!(pair(&G1::identity(), &q).is_one());
    assert!(pair(&p, &G2::identity()).is_one());
    assert!(pair(&G1::identity(), &G2::identity()).is_one());
    assert_eq!(raw_miller(&TwistPoint::identity(), &CurvePoint::generator()), Fp12::one());
}

#[test]
fn test_squared_pairing_scenario() {
    let e1 = pair(&G1::scalar_base_mult(&big(1)), &G2::scalar_base_mult(&big(1)));
    let e2 = pair(&G1::scalar_base_mult(&big(2)), &G2::scalar_base_mult(&big(1)));

    assert_eq!(e2, e1.scalar_mult(&big(2)));
    assert_eq!(e2, e1.add(&e1));
    assert_ne!(e1, e2);
}

// ============================================================================
// Miller Loop and Final Exponentiation
// ============================================================================

#[test]
fn test_miller_then_finalize_matches_pair() {
    let p = G1::scalar_base_mult(&big(7));
    let q = G2::scalar_base_mult(&big(11));

    let raw = miller(&p, &q);
    assert_ne!(raw, pair(&p, &q));
    assert_eq!(raw.finalize(), pair(&p, &q));
}

#[test]
fn test_miller_is_bilinear_only_after_finalize() {
    let g1 = CurvePoint::generator();
    let g2 = TwistPoint::generator();
    let two_g1 = g1.double();

    let m1 = raw_miller(&g2, &g1);
    let m2 = raw_miller(&g2, &two_g1);
    assert_eq!(final_exponentiation(&(m1 * m1)), final_exponentiation(&m2));
}

#[test]
fn test_final_exponentiation_of_one() {
    assert_eq!(final_exponentiation(&Fp12::one()), Fp12::one());
}

#[test]
fn test_scalar_base_mult_matches_pairing() {
    let k = big(0xabcd);
    let expected = pair(&G1::scalar_base_mult(&k), &G2::generator());
    assert_eq!(Gt::scalar_base_mult(&k), expected);
}

#[test]
fn test_gt_inverse() {
    let e = Gt::scalar_base_mult(&big(99));
    assert!(e.add(&e.neg()).is_one());
    assert_eq!(Gt::default(), Gt::one());
}

// ============================================================================
// Pairing Check Tests
// ============================================================================

#[test]
fn test_pairing_check_balanced() {
    let a = G1::scalar_base_mult(&big(3));
    let b = G2::scalar_base_mult(&big(5));
    // 3·5 + (n - 15)·1 ≡ 0 mod n
    let c = G1::scalar_base_mult(&(order() - 15u32));
    let d = G2::generator();

    assert!(pairing_check(&[a, c], &[b, d]));

    let c_off = G1::scalar_base_mult(&(order() - 14u32));
    assert!(!pairing_check(&[a, c_off], &[b, d]));
}

#[test]
fn test_pairing_check_skips_infinity() {
    let p = G1::scalar_base_mult(&big(8));
    let q = G2::generator();

    assert!(pairing_check(&[], &[]));
    assert!(pairing_check(&[G1::identity()], &[q]));
    assert!(pairing_check(&[p, G1::identity(), p.neg()], &[q, q, q]));
    assert!(!pairing_check(&[p, G1::identity()], &[q, q]));
}

#[test]
fn test_pairing_check_rejects_mismatched_lists() {
    let p = G1::generator();
    let q = G2::generator();
    assert!(!pairing_check(&[p, p.neg()], &[q]));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4))]

    #[test]
    fn prop_pairing_check_consistency(x in 1u64..1000, y in 1u64..1000, z in 1u64..1000) {
        // x·y + (n - x·y)·1 ≡ 0, while swapping 1 for z + 1 leaves -x·y·z
        let a = [
            G1::scalar_base_mult(&big(x)),
            G1::scalar_base_mult(&((order() - (big(x) * big(y)) % order()) % order())),
        ];
        let b = [G2::scalar_base_mult(&big(y)), G2::generator()];
        prop_assert!(pairing_check(&a, &b));

        let b_off = [G2::scalar_base_mult(&big(y)), G2::scalar_base_mult(&big(z + 1))];
        prop_assert!(!pairing_check(&a, &b_off));
    }
}
