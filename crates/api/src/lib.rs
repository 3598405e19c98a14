//! Public API traits and types for the bnpair library
//!
//! This crate provides the public error type shared by every bnpair crate and
//! the byte-serialization trait implemented by the group element types.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use traits::Serialize;

// Re-export trait modules for direct access
pub use traits::serialize;
