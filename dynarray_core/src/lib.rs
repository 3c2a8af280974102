#![deny(clippy::all)]
mod collections;
pub mod constants;
pub mod hooks;
pub mod utils;

pub use collections::{ArrayBuilder, DynamicArray};
pub use hooks::{ArrayHooks, NoHooks, StdioHooks};

pub type ArrayResult<T> = Result<T, ArrayError>;

/// The ways an operation on a `DynamicArray` can fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArrayError {
  /// A sized constructor was asked for zero elements
  #[error("initial size must be positive, got {size}")]
  InvalidInitialSize { size: usize },

  /// An index was at or past the end of the live elements
  #[error("index {index} out of range for array of length {len}")]
  IndexOutOfRange { index: usize, len: usize },

  /// The allocator could not provide a buffer of `cap` slots
  #[error("unable to allocate storage for {cap} items")]
  AllocationFailure { cap: usize },
}
