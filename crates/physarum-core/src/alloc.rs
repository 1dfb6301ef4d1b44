//! Fallible buffer allocation.

use crate::error::ResourceError;

/// Allocate a `len`-element buffer filled with `fill`, reporting failure
/// as [`ResourceError::AllocationFailed`] instead of aborting.
pub fn try_filled<T: Clone>(
    len: usize,
    fill: T,
    what: &'static str,
) -> Result<Vec<T>, ResourceError> {
    let bytes = len.saturating_mul(std::mem::size_of::<T>());
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| ResourceError::AllocationFailed { what, bytes })?;
    buf.resize(len, fill);
    Ok(buf)
}

/// An empty buffer with room for exactly `len` elements.
pub fn try_with_capacity<T>(len: usize, what: &'static str) -> Result<Vec<T>, ResourceError> {
    let bytes = len.saturating_mul(std::mem::size_of::<T>());
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| ResourceError::AllocationFailed { what, bytes })?;
    Ok(buf)
}
