//! BN256 test suite
//!
//! Tests are organized into focused modules for better maintainability.



#[cfg(test)]
mod pairings;

#[cfg(test)]
mod serialization;
