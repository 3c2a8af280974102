use dynarray_core::ArrayHooks;
use std::{cell::Cell, rc::Rc};

/// Counts how many times any `Tracked` sharing this counter was dropped
#[derive(Debug, Default, Clone)]
pub struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
  pub fn track(&self, id: usize) -> Tracked {
    Tracked {
      id,
      drops: Rc::clone(&self.0),
    }
  }

  pub fn drops(&self) -> usize {
    self.0.get()
  }
}

/// An item that reports its own drop
#[derive(Debug)]
pub struct Tracked {
  pub id: usize,
  drops: Rc<Cell<usize>>,
}

impl Clone for Tracked {
  fn clone(&self) -> Self {
    Self {
      id: self.id,
      drops: Rc::clone(&self.drops),
    }
  }
}

impl PartialEq for Tracked {
  fn eq(&self, other: &Self) -> bool {
    self.id == other.id
  }
}

impl Drop for Tracked {
  fn drop(&mut self) {
    self.drops.set(self.drops.get() + 1);
  }
}

/// Hooks tallying buffer events
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct CountingHooks {
  pub allocs: Cell<usize>,
  pub frees: Cell<usize>,
  pub bytes_live: Cell<isize>,
  pub grows: Cell<usize>,
  pub last_grow: Cell<Option<(usize, usize)>>,
}

impl ArrayHooks for CountingHooks {
  fn on_alloc(&self, _cap: usize, bytes: usize) {
    self.allocs.set(self.allocs.get() + 1);
    self.bytes_live.set(self.bytes_live.get() + bytes as isize);
  }

  fn on_free(&self, _cap: usize, bytes: usize) {
    self.frees.set(self.frees.get() + 1);
    self.bytes_live.set(self.bytes_live.get() - bytes as isize);
  }

  fn on_grow(&self, from: usize, to: usize) {
    self.grows.set(self.grows.get() + 1);
    self.last_grow.set(Some((from, to)));
  }
}
