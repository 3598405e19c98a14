//! Traits for byte serialization of group elements.

use crate::Result;
use alloc::vec::Vec;

/// A trait for public types with a fixed-length byte encoding.
pub trait Serialize: Sized {
    /// Creates an object from a byte slice of exactly the encoded length.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// Converts the object to a byte vector.
    fn to_bytes(&self) -> Vec<u8>;
}
