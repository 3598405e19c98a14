//! Elliptic Curve Primitives
//!
//! This module provides the BN256 pairing-friendly curve: its field tower,
//! the two source groups, the target group and the optimal Ate pairing.

pub mod bn256;

pub use bn256::{
    Gt as Bn256Gt, G1 as Bn256G1, G2 as Bn256G2,
    pair as bn256_pair, pairing_check as bn256_pairing_check,
};
