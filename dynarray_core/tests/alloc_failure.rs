mod support;

use dynarray_core::{ArrayBuilder, ArrayError, DynamicArray, NoHooks};
use std::{
  alloc::{GlobalAlloc, Layout, System},
  cell::Cell,
  ptr,
};
use support::{CountingHooks, DropCounter, Tracked};

/// The system allocator, except that a request of exactly the armed
/// size on the arming thread returns null
struct RefusingAlloc;

thread_local! {
  static REFUSED_SIZE: Cell<usize> = const { Cell::new(0) };
}

unsafe impl GlobalAlloc for RefusingAlloc {
  unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
    let refused = REFUSED_SIZE.try_with(Cell::get).unwrap_or(0);

    if refused != 0 && layout.size() == refused {
      return ptr::null_mut();
    }

    System.alloc(layout)
  }

  unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
    System.dealloc(ptr, layout)
  }
}

#[global_allocator]
static GLOBAL: RefusingAlloc = RefusingAlloc;

/// Refuse allocations of `bytes` on this thread while `action` runs
fn refusing<R>(bytes: usize, action: impl FnOnce() -> R) -> R {
  REFUSED_SIZE.with(|refused| refused.set(bytes));
  let result = action();
  REFUSED_SIZE.with(|refused| refused.set(0));

  result
}

fn counted(count: u64) -> DynamicArray<u64> {
  let mut array = DynamicArray::new().expect("allocation");
  for i in 0..count {
    array.push(i).expect("push");
  }
  array
}

mod construct {
  use super::*;

  #[test]
  fn new() {
    let result = refusing(64, DynamicArray::<u64>::new);

    assert_eq!(result.err(), Some(ArrayError::AllocationFailure { cap: 8 }));
  }

  #[test]
  fn with_size() {
    let result = refusing(80, || DynamicArray::<u64>::with_size(5));

    assert_eq!(result.err(), Some(ArrayError::AllocationFailure { cap: 10 }));
  }

  #[test]
  fn no_hook_events() {
    let hooks = CountingHooks::default();
    let result = refusing(64, || DynamicArray::<u64, _>::new_in(&hooks));

    assert!(result.is_err());
    assert_eq!(hooks.allocs.get(), 0);
    assert_eq!(hooks.frees.get(), 0);
  }
}

mod push {
  use super::*;

  #[test]
  fn leaves_array_unchanged() {
    let mut array = counted(7);

    let result = refusing(128, || array.push(7));

    assert_eq!(result, Err(ArrayError::AllocationFailure { cap: 16 }));
    assert_eq!(array.len(), 7);
    assert_eq!(array.cap(), 8);
    assert_eq!(&*array, &[0, 1, 2, 3, 4, 5, 6]);

    array.push(7).expect("push");
    assert_eq!(array.cap(), 16);
    assert_eq!(&*array, &[0, 1, 2, 3, 4, 5, 6, 7]);
  }

  #[test]
  fn drops_rejected_value() {
    let counter = DropCounter::default();
    let mut array = DynamicArray::new().expect("allocation");
    for id in 0..7 {
      array.push(counter.track(id)).expect("push");
    }

    let bytes = 16 * std::mem::size_of::<Tracked>();
    let result = refusing(bytes, || array.push(counter.track(7)));

    assert_eq!(result, Err(ArrayError::AllocationFailure { cap: 16 }));
    assert_eq!(counter.drops(), 1);
    assert_eq!(array.len(), 7);
    assert!(array.iter().map(|item| item.id).eq(0..7));
  }

  #[test]
  fn no_grow_event() {
    let hooks = CountingHooks::default();
    let mut array = DynamicArray::new_in(&hooks).expect("allocation");
    for i in 0..7u64 {
      array.push(i).expect("push");
    }

    let result = refusing(128, || array.push(7));

    assert!(result.is_err());
    assert_eq!(hooks.grows.get(), 0);
    assert_eq!(hooks.allocs.get(), 1);
    assert_eq!(hooks.frees.get(), 0);
  }
}

#[test]
fn reverse() {
  let mut array = counted(5);

  let result = refusing(64, || array.reverse());

  assert_eq!(result, Err(ArrayError::AllocationFailure { cap: 8 }));
  assert_eq!(array.len(), 5);
  assert_eq!(array.cap(), 8);
  assert_eq!(&*array, &[0, 1, 2, 3, 4]);
}

mod copy {
  use super::*;

  #[test]
  fn assign() {
    let mut left = DynamicArray::with_size_and_value(3, 1u64).expect("allocation");
    let right = DynamicArray::from_builder(ArrayBuilder::new(&[2u64, 3, 4], 40), NoHooks)
      .expect("allocation");

    let result = refusing(320, || left.assign(&right));

    assert_eq!(result, Err(ArrayError::AllocationFailure { cap: 40 }));
    assert_eq!(&*left, &[1]);
    assert_eq!(left.cap(), 6);
    assert_eq!(&*right, &[2, 3, 4]);
    assert_eq!(right.cap(), 40);
  }

  #[test]
  fn try_clone() {
    let array = counted(3);

    let result = refusing(64, || array.try_clone());

    assert_eq!(result.err(), Some(ArrayError::AllocationFailure { cap: 8 }));
    assert_eq!(&*array, &[0, 1, 2]);
  }
}
