//! Constants for pairing-friendly curves

pub mod bn256;
