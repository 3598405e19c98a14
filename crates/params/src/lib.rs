//! Constant values for the bnpair library
//!
//! Curve parameters, encoding sizes and loop constants shared by the
//! arithmetic crate and the facade. Everything here is `const` and no_std.

#![no_std]

pub mod traditional;
