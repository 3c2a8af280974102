use crate::{
  constants::{GROWTH_FACTOR, SIZED_CAPACITY_FACTOR},
  ArrayError, ArrayResult,
};
use std::{alloc::Layout, mem};

/// Create a rust `Layout` for a buffer of `cap` items. A layout
/// that would overflow `isize` is reported as an allocation failure
pub fn make_buffer_layout<T>(cap: usize) -> ArrayResult<Layout> {
  Layout::array::<T>(cap).map_err(|_| ArrayError::AllocationFailure { cap })
}

/// Number of bytes a buffer of `cap` items spans
pub const fn buffer_bytes<T>(cap: usize) -> usize {
  mem::size_of::<T>().saturating_mul(cap)
}

/// The capacity an array moves to when it grows from `cap`
pub const fn grown_cap(cap: usize) -> usize {
  cap.saturating_mul(GROWTH_FACTOR)
}

/// The capacity reserved for a requested initial size. Zero is
/// rejected rather than producing an unusable array
pub fn sized_cap(size: usize) -> ArrayResult<usize> {
  if size == 0 {
    return Err(ArrayError::InvalidInitialSize { size });
  }

  Ok(size.saturating_mul(SIZED_CAPACITY_FACTOR))
}
