//! Integration tests for the BN256 pairing through the public facade

use bnpair::prelude::*;
use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn big(v: u64) -> BigUint {
    BigUint::from(v)
}

#[test]
fn test_squared_pairing() {
    let e1 = pair(&G1::scalar_base_mult(&big(1)), &G2::scalar_base_mult(&big(1)));
    let e2 = pair(&G1::scalar_base_mult(&big(2)), &G2::scalar_base_mult(&big(1)));

    let mut squared = Gt::default();
    squared.set(&e1).set(&e1.add(&e1));
    assert_eq!(e2, squared);
}

#[test]
fn test_tripartite_key_agreement() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);

    let (a, pa1) = random_g1(&mut rng).unwrap();
    let (b, pb1) = random_g1(&mut rng).unwrap();
    let (c, pc1) = random_g1(&mut rng).unwrap();
    let pb2 = G2::scalar_base_mult(&b);
    let pc2 = G2::scalar_base_mult(&c);

    // Each party sends its public points over the wire
    let mut wire = Vec::new();
    wire.extend_from_slice(&pb1.marshal());
    wire.extend_from_slice(&pc1.marshal());
    wire.extend_from_slice(&pb2.marshal());
    wire.extend_from_slice(&pc2.marshal());

    let (pb1, rest) = G1::unmarshal(&wire).unwrap();
    let (pc1, rest) = G1::unmarshal(rest).unwrap();
    let (pb2, rest) = G2::unmarshal(rest).unwrap();
    let (pc2, rest) = G2::unmarshal(rest).unwrap();
    assert!(rest.is_empty());

    let k1 = pair(&pb1, &pc2).scalar_mult(&a);
    let k2 = pair(&pc1, &G2::scalar_base_mult(&a)).scalar_mult(&b);
    let k3 = pair(&pa1, &pb2).scalar_mult(&c);

    assert_eq!(k1, k2);
    assert_eq!(k2, k3);
    assert_eq!(k1.marshal(), k3.marshal());
}

#[test]
fn test_pairing_check_verifies_product() {
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    let (x, p) = random_g1(&mut rng).unwrap();
    let (_, q) = random_g2(&mut rng).unwrap();

    // e(x·G1, Q) · e(-G1, x·Q) == 1
    let xq = q.scalar_mult(&x);
    assert!(pairing_check(&[p, G1::generator().neg()], &[q, xq]));
    assert!(!pairing_check(&[p, G1::generator()], &[q, xq]));
}

#[test]
fn test_miller_loop_is_deferred_pairing() {
    let p = G1::scalar_base_mult(&big(5));
    let q = G2::scalar_base_mult(&big(6));
    let m = miller(&p, &q);
    assert_eq!(m.finalize(), pair(&p, &q));
    assert_eq!(m.finalize(), Gt::scalar_base_mult(&big(30)));
}

#[test]
fn test_wire_stream_decoding() {
    let p = G1::scalar_base_mult(&big(12345));
    let q = G2::scalar_base_mult(&big(67890));
    let e = pair(&p, &q);

    let mut stream = Vec::new();
    stream.extend_from_slice(&p.marshal());
    stream.extend_from_slice(&q.marshal());
    stream.extend_from_slice(&e.marshal());

    let (p2, rest) = G1::unmarshal(&stream).unwrap();
    let (q2, rest) = G2::unmarshal(rest).unwrap();
    let (e2, rest) = Gt::unmarshal(rest).unwrap();

    assert!(rest.is_empty());
    assert_eq!(p2, p);
    assert_eq!(q2, q);
    assert_eq!(e2, e);
}

#[test]
fn test_rejects_malformed_input() {
    // Truncated G1 encoding
    let bytes = G1::generator().marshal();
    assert!(matches!(G1::unmarshal(&bytes[..63]), Err(Error::Length { .. })));

    // (1, 1) is not on y² = x³ + 3
    let mut off_curve = [0u8; 64];
    off_curve[31] = 1;
    off_curve[63] = 1;
    assert!(matches!(G1::unmarshal(&off_curve), Err(Error::MalformedPoint { .. })));

    // Twist point outside the order-n subgroup
    let non_subgroup = hex::decode(
        "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000010d1271953ed9ea0836846e70a1934187998c7f790cb4d7511b7f8da82de048a42869111d5381f072f8e2728fdb825a51aadd70e52c9830e9ab4b871c0531f1bb",
    )
    .unwrap();
    assert_eq!(
        G2::unmarshal(&non_subgroup),
        Err(Error::MalformedPoint { group: "G2", reason: "not in subgroup" })
    );
}

#[test]
fn test_serialize_trait() {
    let q = G2::scalar_base_mult(&big(3));
    let bytes = q.to_bytes();
    assert_eq!(bytes.len(), 128);
    assert_eq!(G2::from_bytes(&bytes).unwrap(), q);
    assert!(G2::from_bytes(&bytes[..127]).is_err());
}
