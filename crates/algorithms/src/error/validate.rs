//! Validation utilities for pairing primitives

use super::{Error, Result};

/// Validate an exact length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a minimum length
#[inline(always)]
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::Length {
            context,
            expected: min,
            actual,
        });
    }
    Ok(())
}

/// Validate a group membership check
#[inline(always)]
pub fn point(is_valid: bool, group: &'static str, reason: &'static str) -> Result<()> {
    if !is_valid {
        return Err(Error::MalformedPoint { group, reason });
    }
    Ok(())
}
