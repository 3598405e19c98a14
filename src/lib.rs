//! # bnpair
//!
//! Pairing-based cryptography on the BN256 (alt_bn128) curve.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! bnpair = "0.1"
//! ```
//!
//! ```
//! use bnpair::prelude::*;
//! use num_bigint::BigUint;
//!
//! let a = G1::scalar_base_mult(&BigUint::from(3u32));
//! let b = G2::scalar_base_mult(&BigUint::from(5u32));
//! let e = pair(&a, &b);
//! assert_eq!(e, Gt::scalar_base_mult(&BigUint::from(15u32)));
//!
//! let bytes = a.marshal();
//! let (decoded, rest) = G1::unmarshal(&bytes).unwrap();
//! assert!(rest.is_empty());
//! assert_eq!(decoded, a);
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` impls and std support in dependencies
//! - `zeroize` (default): zeroize support for field elements, points and sampled scalars
//! - `g1-subgroup-check`: always verify n·P = ∞ when decoding G1 points
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`bnpair-api`]: Public error type and the `Serialize` trait
//! - [`bnpair-params`]: Curve constants and encoding sizes
//! - [`bnpair-algorithms`]: Field tower, curve groups and the pairing

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use bnpair_algorithms as algorithms;
pub use bnpair_api as api;
pub use bnpair_params as params;

pub use bnpair_algorithms::ec::bn256;

/// Common imports for working with the pairing groups
pub mod prelude {
    pub use bnpair_algorithms::ec::bn256::{
        miller, pair, pairing_check, random_g1, random_g2, Gt, G1, G2,
    };
    pub use bnpair_algorithms::{Error, Result};
    pub use bnpair_api::Serialize;
}
