/// The seed of a `DynamicArray`: items to clone into the new buffer
/// and the exact capacity of that buffer.
///
/// `DynamicArray::from_builder` consumes it. Deep copies go through
/// here too, `try_clone` and `assign` seed a builder with the live
/// items and capacity of their source so the copy keeps the same
/// headroom. A capacity of zero is rejected when the array is built,
/// not here.
///
/// ## Example
/// ```
/// use dynarray_core::{ArrayBuilder, DynamicArray, NoHooks};
///
/// let array = DynamicArray::from_builder(ArrayBuilder::new(&[1, 2], 5), NoHooks).unwrap();
/// assert_eq!(&*array, &[1, 2]);
/// assert_eq!(array.cap(), 5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ArrayBuilder<'a, T> {
  /// The source slice from which the array is copied from
  slice: &'a [T],

  /// The requested capacity of the array
  cap: usize,
}

impl<'a, T> ArrayBuilder<'a, T> {
  /// Create an array builder for an empty array of `cap` slots
  pub fn cap_only(cap: usize) -> Self {
    let empty_slice: &'a [T] = &[];

    Self {
      slice: empty_slice,
      cap,
    }
  }

  /// Create an array builder cloning `slice` into `cap` slots.
  /// Panics if `slice` does not fit
  pub fn new(slice: &'a [T], cap: usize) -> Self {
    assert!(slice.len() <= cap);

    Self { slice, cap }
  }

  /// The underlying slice for the builder
  pub fn slice(&self) -> &'a [T] {
    self.slice
  }

  /// The requested capacity
  pub fn cap(&self) -> usize {
    self.cap
  }
}

impl<'a, T> From<&'a [T]> for ArrayBuilder<'a, T> {
  /// Seed from a slice, leaving the same headroom a sized
  /// constructor would. An empty slice gets the default capacity
  fn from(slice: &'a [T]) -> Self {
    let cap = crate::utils::sized_cap(slice.len()).unwrap_or(crate::constants::DEFAULT_CAPACITY);
    Self { slice, cap }
  }
}
