use crate::{
  utils::{buffer_bytes, make_buffer_layout},
  ArrayError, ArrayResult,
};
use ptr::NonNull;
use std::{
  alloc::{alloc, dealloc, handle_alloc_error, Layout},
  fmt,
  marker::PhantomData,
  ptr,
  slice::{self},
};

/// An exclusively owned, uninitialized allocation of `cap` slots.
/// The buffer never reads, writes or drops items on its own, the
/// owner tracks which slots are live.
pub(crate) struct RawBuffer<T> {
  /// Pointer to the first slot
  ptr: NonNull<T>,

  /// Number of slots in the allocation
  cap: usize,

  /// Phantom data to hold the item type
  data: PhantomData<T>,
}

impl<T> RawBuffer<T> {
  /// Allocate a buffer of `cap` slots. Zero sized layouts never reach
  /// the allocator and use a dangling pointer instead
  pub fn try_allocate(cap: usize) -> ArrayResult<Self> {
    let layout = make_buffer_layout::<T>(cap)?;

    if layout.size() == 0 {
      return Ok(Self {
        ptr: NonNull::dangling(),
        cap,
        data: PhantomData,
      });
    }

    let buf = unsafe { alloc(layout) };

    match NonNull::new(buf as *mut T) {
      Some(ptr) => Ok(Self {
        ptr,
        cap,
        data: PhantomData,
      }),
      None => Err(ArrayError::AllocationFailure { cap }),
    }
  }

  /// Retrieve the capacity of this buffer
  #[inline]
  pub fn cap(&self) -> usize {
    self.cap
  }

  /// Determine the size in bytes of the allocation
  #[inline]
  pub fn size(&self) -> usize {
    buffer_bytes::<T>(self.cap)
  }

  #[inline]
  pub fn as_ptr(&self) -> *const T {
    self.ptr.as_ptr()
  }

  #[inline]
  pub fn as_mut_ptr(&mut self) -> *mut T {
    self.ptr.as_ptr()
  }

  /// Write a value at the provided index
  ///
  /// ## Safety
  /// `index` must be below `cap` and the slot must not hold a live
  /// value, otherwise that value is leaked
  #[inline]
  pub unsafe fn write_value(&mut self, value: T, index: usize) {
    debug_assert!(index < self.cap);
    ptr::write(self.as_mut_ptr().add(index), value);
  }

  /// Move the value at the provided index out of the buffer
  ///
  /// ## Safety
  /// `index` must be below `cap` and the slot must hold a live value.
  /// Afterwards the slot is considered uninitialized
  #[inline]
  pub unsafe fn read_value(&mut self, index: usize) -> T {
    debug_assert!(index < self.cap);
    ptr::read(self.as_ptr().add(index))
  }

  /// View the first `len` slots as a slice
  ///
  /// ## Safety
  /// The first `len` slots must be initialized and `len <= cap`
  #[inline]
  pub unsafe fn slice(&self, len: usize) -> &[T] {
    debug_assert!(len <= self.cap);
    slice::from_raw_parts(self.as_ptr(), len)
  }

  /// View the first `len` slots as a mutable slice
  ///
  /// ## Safety
  /// The first `len` slots must be initialized and `len <= cap`
  #[inline]
  pub unsafe fn slice_mut(&mut self, len: usize) -> &mut [T] {
    debug_assert!(len <= self.cap);
    slice::from_raw_parts_mut(self.as_mut_ptr(), len)
  }

  /// Move the first `len` items of `src` into the front of this buffer
  /// keeping their order
  ///
  /// ## Safety
  /// `len` must fit in both buffers, the first `len` slots of `src` must be
  /// live and are treated as uninitialized afterwards
  pub unsafe fn move_from(&mut self, src: &RawBuffer<T>, len: usize) {
    debug_assert!(len <= src.cap && len <= self.cap);
    ptr::copy_nonoverlapping(src.as_ptr(), self.as_mut_ptr(), len);
  }

  /// Move the first `len` items of `src` into the front of this buffer
  /// in reverse order
  ///
  /// ## Safety
  /// Same contract as `move_from`
  pub unsafe fn move_reversed_from(&mut self, src: &RawBuffer<T>, len: usize) {
    debug_assert!(len <= src.cap && len <= self.cap);
    let dst = self.as_mut_ptr();

    for (to, from) in (0..len).rev().enumerate() {
      ptr::copy_nonoverlapping(src.as_ptr().add(from), dst.add(to), 1);
    }
  }

  fn layout(&self) -> Option<Layout> {
    make_buffer_layout::<T>(self.cap)
      .ok()
      .filter(|layout| layout.size() != 0)
  }
}

/// Divert a failed allocation of `cap` items to the global allocation
/// error handler. Used where an infallible signature is required
pub(crate) fn handle_alloc_failure<T>(cap: usize) -> ! {
  match make_buffer_layout::<T>(cap) {
    Ok(layout) => handle_alloc_error(layout),
    Err(_) => panic!("capacity overflow"),
  }
}

impl<T> fmt::Debug for RawBuffer<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("RawBuffer")
      .field("ptr", &self.ptr)
      .field("cap", &self.cap)
      .finish()
  }
}

impl<T> Drop for RawBuffer<T> {
  fn drop(&mut self) {
    if let Some(layout) = self.layout() {
      unsafe { dealloc(self.ptr.as_ptr() as *mut u8, layout) };
    }
  }
}

unsafe impl<T: Send> Send for RawBuffer<T> {}
unsafe impl<T: Sync> Sync for RawBuffer<T> {}
