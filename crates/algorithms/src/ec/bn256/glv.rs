//! Lattice decomposition of G1 scalars for the GLV endomorphism.
//!
//! The endomorphism (x, y) ↦ (β·x, y) acts on G1 as multiplication by a cube
//! root of unity λ mod n. A scalar k is rewritten as k₀ + k₁·λ with k₀, k₁ of
//! roughly half the bit length, so two interleaved half-length chains replace
//! one full-length chain.

use alloc::vec;
use alloc::vec::Vec;

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;

use super::order;

/// Short basis of the lattice {(a, b) : a + b·λ ≡ 0 mod n}
const VECTORS: [[i128; 2]; 2] = [
    [
        147_946_756_881_789_319_000_765_030_803_803_410_728,
        147_946_756_881_789_319_010_696_353_538_189_108_491,
    ],
    [
        147_946_756_881_789_319_020_627_676_272_574_806_254,
        -147_946_756_881_789_318_990_833_708_069_417_712_965,
    ],
];

/// First column of the adjugate of `VECTORS`
const INVERSE: [i128; 2] = [
    147_946_756_881_789_318_990_833_708_069_417_712_965,
    147_946_756_881_789_319_010_696_353_538_189_108_491,
];

/// Round num/den to an integer, breaking at n/2 rather than den/2
fn round(num: &BigInt, den: &BigInt, half: &BigInt) -> BigInt {
    let (q, r) = num.div_mod_floor(den);
    if &r > half {
        q + 1
    } else {
        q
    }
}

/// Split k into two non-negative components
///
/// Each output is 2·v₀ᵢ - Σⱼ cⱼ·vⱼᵢ (+ k for the first), where cⱼ rounds
/// k·inverseⱼ / det. The 2·v₀ offset keeps both components positive for every
/// k ≥ 0.
pub(crate) fn decompose(k: &BigUint) -> [BigInt; 2] {
    let n = BigInt::from_biguint(Sign::Plus, order());
    // det = 2n for this basis
    let det: BigInt = &n << 1;
    let half: BigInt = &n >> 1;
    let k = BigInt::from_biguint(Sign::Plus, k.clone());

    let c: Vec<BigInt> = INVERSE
        .iter()
        .map(|inv| round(&(&k * BigInt::from(*inv)), &det, &half))
        .collect();

    let mut out = [BigInt::from(0), BigInt::from(0)];
    for (i, slot) in out.iter_mut().enumerate() {
        let mut acc = BigInt::from(VECTORS[0][i]) << 1;
        for (j, cj) in c.iter().enumerate() {
            acc -= cj * BigInt::from(VECTORS[j][i]);
        }
        *slot = acc;
    }
    out[0] += k;
    out
}

/// Interleave the bits of the decomposition into 2-bit table indices,
/// least significant first: digit i = bitᵢ(k₀) + 2·bitᵢ(k₁)
pub(crate) fn multi_scalar(k: &BigUint) -> Vec<u8> {
    let decomp = decompose(k);
    let max_len = decomp.iter().map(|x| x.bits()).max().unwrap_or(0);

    let mut out = vec![0u8; max_len as usize];
    for (j, x) in decomp.iter().enumerate() {
        for (i, digit) in out.iter_mut().enumerate() {
            *digit += (x.bit(i as u64) as u8) << j;
        }
    }
    out
}
