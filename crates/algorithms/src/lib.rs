//! Pairing-based cryptographic primitives on the BN256 curve
//!
//! This crate provides the arithmetic behind the bnpair library: the
//! Fp → Fp2 → Fp6 → Fp12 field tower in Montgomery form, the groups G1 and
//! G2, the optimal Ate pairing into GT, and a fixed-width byte encoding for
//! every group element.
//!
//! The library is usable in `no_std` environments with an allocator.
//!
//! # Security
//!
//! Arithmetic is written with `subtle` selections where cheap, but scalar
//! multiplication and exponentiation branch on secret bits. The crate makes
//! no constant-time claims.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Elliptic curve and pairing primitives
pub mod ec;
pub use ec::bn256::{
    miller, order, pair, pairing_check, random_g1, random_g2, Gt, G1, G2,
};
