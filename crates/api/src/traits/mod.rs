//! Traits implemented by bnpair types

pub mod serialize;

pub use serialize::Serialize;
