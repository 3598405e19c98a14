//! BN256 (alt_bn128) pairing-friendly elliptic curve.
//!
//! The base curve is y² = x³ + 3 over a 254-bit prime field, G2 lives on the
//! sextic twist y² = x³ + 3/ξ over Fp2 with ξ = 9 + i, and the optimal Ate
//! pairing maps G1 × G2 into the order-n subgroup of Fp12.
//!
//! **Warning:** Unaudited implementation without constant-time guarantees.

use num_bigint::BigUint;

use bnpair_params::traditional::bn256::GROUP_ORDER;

// Module declarations
pub mod field;
#[macro_use]
mod jacobian;
mod g1;
mod g2;
mod glv;
mod group;
mod pairings;

#[cfg(test)]
mod tests;

// Public API exports
pub use field::{fp::Fp, fp12::Fp12, fp2::Fp2, fp6::Fp6};
pub use g1::CurvePoint;
pub use g2::TwistPoint;
pub use group::{miller, pair, pairing_check, random_g1, random_g2, Gt, G1, G2};
pub use pairings::final_exponentiation;

/// The prime order n shared by G1, G2 and GT
pub fn order() -> BigUint {
    BigUint::from_bytes_be(&GROUP_ORDER)
}
