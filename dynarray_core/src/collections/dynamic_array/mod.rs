mod array_builder;
mod raw_buffer;

use crate::{
  constants::DEFAULT_CAPACITY,
  hooks::{ArrayHooks, NoHooks},
  utils::{grown_cap, sized_cap},
  ArrayError, ArrayResult,
};
pub use array_builder::ArrayBuilder;
use raw_buffer::{handle_alloc_failure, RawBuffer};
use std::{
  fmt::{self, Debug, Display},
  mem,
  ops::{Deref, DerefMut},
  ptr, slice,
};

/// A growable array owning a single contiguous buffer. The first
/// `len` slots of the buffer hold live items in insertion order, the
/// remaining slots up to `cap` are unreachable.
///
/// ## Example
/// ```
/// use dynarray_core::DynamicArray;
///
/// let mut array = DynamicArray::new().unwrap();
/// assert_eq!(array.cap(), 8);
///
/// for i in 1..=10 {
///   array.push(i).unwrap();
/// }
///
/// array.reverse().unwrap();
/// assert_eq!(array.len(), 10);
/// assert_eq!(array.cap(), 16);
/// assert_eq!(*array.at(0).unwrap(), 10);
/// ```
pub struct DynamicArray<T, H: ArrayHooks = NoHooks> {
  /// The backing buffer
  buf: RawBuffer<T>,

  /// Number of live items at the front of `buf`
  len: usize,

  /// Observer of buffer events
  hooks: H,
}

impl<T> DynamicArray<T> {
  /// Create an empty array with the default capacity
  pub fn new() -> ArrayResult<Self> {
    Self::new_in(NoHooks)
  }

  /// Create an empty array with room for `size` items and as much
  /// again for growth
  pub fn with_size(size: usize) -> ArrayResult<Self> {
    Self::with_size_in(size, NoHooks)
  }

  /// Create an array reserved for `size` items holding only `value`.
  /// See `with_size_and_value_in`
  pub fn with_size_and_value(size: usize, value: T) -> ArrayResult<Self> {
    Self::with_size_and_value_in(size, value, NoHooks)
  }
}

impl<T: Clone> DynamicArray<T> {
  /// Create an array of `size` clones of `value`
  pub fn filled(size: usize, value: T) -> ArrayResult<Self> {
    Self::filled_in(size, value, NoHooks)
  }
}

impl<T, H: ArrayHooks> DynamicArray<T, H> {
  /// Create an empty array with the default capacity reporting to `hooks`
  pub fn new_in(hooks: H) -> ArrayResult<Self> {
    Self::allocate(DEFAULT_CAPACITY, hooks)
  }

  /// Create an empty array with a capacity of twice `size`. No items
  /// are populated, `size` only reserves room
  pub fn with_size_in(size: usize, hooks: H) -> ArrayResult<Self> {
    Self::allocate(sized_cap(size)?, hooks)
  }

  /// Create an array with a capacity of twice `size` whose only live
  /// item is `value`. Use `filled_in` for `size` copies of `value`
  pub fn with_size_and_value_in(size: usize, value: T, hooks: H) -> ArrayResult<Self> {
    let mut array = Self::with_size_in(size, hooks)?;
    unsafe { array.push_unchecked(value) };
    Ok(array)
  }

  /// Create an array from the slice and capacity in `builder`
  pub fn from_builder(builder: ArrayBuilder<'_, T>, hooks: H) -> ArrayResult<Self>
  where
    T: Clone,
  {
    if builder.cap() == 0 {
      return Err(ArrayError::InvalidInitialSize { size: 0 });
    }

    let mut array = Self::allocate(builder.cap(), hooks)?;
    for item in builder.slice() {
      unsafe { array.push_unchecked(item.clone()) };
    }

    Ok(array)
  }

  /// Create an array with a capacity of twice `size` holding `size`
  /// clones of `value`
  pub fn filled_in(size: usize, value: T, hooks: H) -> ArrayResult<Self>
  where
    T: Clone,
  {
    let mut array = Self::with_size_in(size, hooks)?;
    for _ in 1..size {
      unsafe { array.push_unchecked(value.clone()) };
    }
    unsafe { array.push_unchecked(value) };

    Ok(array)
  }

  /// Allocate an empty array of exactly `cap` slots
  fn allocate(cap: usize, hooks: H) -> ArrayResult<Self> {
    let buf = RawBuffer::try_allocate(cap)?;
    hooks.on_alloc(buf.cap(), buf.size());

    Ok(Self { buf, len: 0, hooks })
  }

  /// Retrieve the number of live items
  #[inline]
  pub fn len(&self) -> usize {
    self.len
  }

  /// Retrieve the capacity of the backing buffer
  #[inline]
  pub fn cap(&self) -> usize {
    self.buf.cap()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Get a reference to the item at `index`
  pub fn at(&self, index: usize) -> ArrayResult<&T> {
    let len = self.len;
    self
      .get(index)
      .ok_or(ArrayError::IndexOutOfRange { index, len })
  }

  /// Get a mutable reference to the item at `index`
  pub fn at_mut(&mut self, index: usize) -> ArrayResult<&mut T> {
    let len = self.len;
    self
      .get_mut(index)
      .ok_or(ArrayError::IndexOutOfRange { index, len })
  }

  /// Push a new item onto the end of this array. The buffer grows
  /// once the push would leave it with no spare slot. If growing
  /// fails `value` is dropped and the array is left unchanged
  pub fn push(&mut self, value: T) -> ArrayResult<()> {
    if self.len + 1 >= self.cap() {
      self.grow()?;
    }

    unsafe { self.push_unchecked(value) };
    Ok(())
  }

  /// Pop the last item off the array. Capacity is unchanged
  pub fn pop(&mut self) -> Option<T> {
    if self.len == 0 {
      return None;
    }

    self.len -= 1;
    Some(unsafe { self.buf.read_value(self.len) })
  }

  /// Drop every live item. The buffer is kept
  pub fn clear(&mut self) {
    let len = self.len;

    // zero first so a panicking drop can only leak
    self.len = 0;
    unsafe { ptr::drop_in_place(self.buf.slice_mut(len)) };
  }

  /// Reverse the order of the live items by moving them into a fresh
  /// buffer of the same capacity
  pub fn reverse(&mut self) -> ArrayResult<()> {
    if self.len <= 1 {
      return Ok(());
    }

    let mut reversed = RawBuffer::try_allocate(self.cap())?;
    self.hooks.on_alloc(reversed.cap(), reversed.size());

    unsafe { reversed.move_reversed_from(&self.buf, self.len) };
    self.replace_buffer(reversed);

    Ok(())
  }

  /// Replace the contents and capacity of this array with a deep copy
  /// of `other`. The copy is complete before the current buffer is
  /// released, on failure this array is untouched
  pub fn assign(&mut self, other: &Self) -> ArrayResult<()>
  where
    T: Clone,
    H: Clone,
  {
    let copy = Self::from_builder(ArrayBuilder::new(other, other.cap()), self.hooks.clone())?;
    *self = copy;

    Ok(())
  }

  /// Create an independent deep copy of this array with a matching
  /// capacity
  pub fn try_clone(&self) -> ArrayResult<Self>
  where
    T: Clone,
    H: Clone,
  {
    Self::from_builder(ArrayBuilder::new(self, self.cap()), self.hooks.clone())
  }

  /// Move every live item into a buffer `GROWTH_FACTOR` times larger
  fn grow(&mut self) -> ArrayResult<()> {
    let from = self.cap();
    let mut grown = RawBuffer::try_allocate(grown_cap(from))?;
    self.hooks.on_alloc(grown.cap(), grown.size());

    unsafe { grown.move_from(&self.buf, self.len) };
    self.replace_buffer(grown);

    self.hooks.on_grow(from, self.cap());
    Ok(())
  }

  /// Adopt `buf`, whose live items must already be in place, and
  /// release the old buffer without dropping any items
  fn replace_buffer(&mut self, buf: RawBuffer<T>) {
    let old = mem::replace(&mut self.buf, buf);
    self.hooks.on_free(old.cap(), old.size());
  }

  /// Write `value` to the first free slot
  ///
  /// ## Safety
  /// There must be a free slot, `len < cap`
  #[inline]
  unsafe fn push_unchecked(&mut self, value: T) {
    debug_assert!(self.len < self.cap());
    self.buf.write_value(value, self.len);
    self.len += 1;
  }
}

impl<T, H: ArrayHooks + Default> Default for DynamicArray<T, H> {
  fn default() -> Self {
    Self::new_in(H::default()).unwrap_or_else(|_| handle_alloc_failure::<T>(DEFAULT_CAPACITY))
  }
}

impl<T: Clone, H: ArrayHooks + Clone> Clone for DynamicArray<T, H> {
  fn clone(&self) -> Self {
    self
      .try_clone()
      .unwrap_or_else(|_| handle_alloc_failure::<T>(self.cap()))
  }

  fn clone_from(&mut self, source: &Self) {
    if self.assign(source).is_err() {
      handle_alloc_failure::<T>(source.cap())
    }
  }
}

impl<T, H: ArrayHooks> Drop for DynamicArray<T, H> {
  fn drop(&mut self) {
    self.clear();
    self.hooks.on_free(self.buf.cap(), self.buf.size());
  }
}

impl<T, H: ArrayHooks> Deref for DynamicArray<T, H> {
  type Target = [T];

  #[inline]
  fn deref(&self) -> &Self::Target {
    unsafe { self.buf.slice(self.len) }
  }
}

impl<T, H: ArrayHooks> DerefMut for DynamicArray<T, H> {
  #[inline]
  fn deref_mut(&mut self) -> &mut Self::Target {
    unsafe { self.buf.slice_mut(self.len) }
  }
}

impl<'a, T, H: ArrayHooks> IntoIterator for &'a DynamicArray<T, H> {
  type Item = &'a T;
  type IntoIter = slice::Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<'a, T, H: ArrayHooks> IntoIterator for &'a mut DynamicArray<T, H> {
  type Item = &'a mut T;
  type IntoIter = slice::IterMut<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter_mut()
  }
}

impl<T: PartialEq, H: ArrayHooks> PartialEq for DynamicArray<T, H> {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    **self == **other
  }
}
impl<T: Eq, H: ArrayHooks> Eq for DynamicArray<T, H> {}

impl<T: Display, H: ArrayHooks> Display for DynamicArray<T, H> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[")?;

    if let Some((last, rest)) = self.split_last() {
      for item in rest.iter() {
        write!(f, "{item}, ")?;
      }

      write!(f, "{last}")?;
    }

    write!(f, "]")
  }
}

impl<T: Debug, H: ArrayHooks> Debug for DynamicArray<T, H> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}
