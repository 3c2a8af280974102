use dynarray_env::stdio::Stdio;
use std::{cell::RefCell, rc::Rc};
use termcolor::{Color, ColorSpec};

/// Observer of the buffer lifecycle of a `DynamicArray`. Every
/// method defaults to doing nothing
pub trait ArrayHooks {
  /// A buffer of `cap` slots spanning `bytes` was allocated
  fn on_alloc(&self, _cap: usize, _bytes: usize) {}

  /// A buffer of `cap` slots spanning `bytes` was released
  fn on_free(&self, _cap: usize, _bytes: usize) {}

  /// The array moved its elements from a buffer of `from` slots
  /// into one of `to` slots
  fn on_grow(&self, _from: usize, _to: usize) {}
}

/// Hooks that ignore every event
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoHooks;

impl ArrayHooks for NoHooks {}

impl<H: ArrayHooks + ?Sized> ArrayHooks for &H {
  #[inline]
  fn on_alloc(&self, cap: usize, bytes: usize) {
    (**self).on_alloc(cap, bytes)
  }

  #[inline]
  fn on_free(&self, cap: usize, bytes: usize) {
    (**self).on_free(cap, bytes)
  }

  #[inline]
  fn on_grow(&self, from: usize, to: usize) {
    (**self).on_grow(from, to)
  }
}

/// Hooks that log array events to the stdout of a shared `Stdio`.
/// Growth is always reported, allocation and release only when
/// the `log_alloc` and `log_free` features are on
#[derive(Clone)]
pub struct StdioHooks {
  stdio: Rc<RefCell<Stdio>>,
}

impl StdioHooks {
  pub fn new(stdio: Stdio) -> Self {
    Self {
      stdio: Rc::new(RefCell::new(stdio)),
    }
  }

  /// Run `action` against the shared stdio. Panics if called
  /// from inside another `with_stdio`
  pub fn with_stdio<R>(&self, action: impl FnOnce(&mut Stdio) -> R) -> R {
    action(&mut self.stdio.borrow_mut())
  }

  fn write_tagged(&self, tag: &str, color: Color, message: std::fmt::Arguments) {
    let mut stdio = self.stdio.borrow_mut();
    let stdout = stdio.stdout();

    stdout
      .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))
      .expect("unable to write to stdout");
    write!(stdout, "{tag}").expect("unable to write to stdout");
    stdout.reset().expect("unable to write to stdout");
    writeln!(stdout, " {message}").expect("unable to write to stdout");
  }
}

impl ArrayHooks for StdioHooks {
  #[cfg(feature = "log_alloc")]
  fn on_alloc(&self, cap: usize, bytes: usize) {
    self.write_tagged(
      "ALLOC",
      Color::Cyan,
      format_args!("{cap} slots ({bytes} bytes)"),
    );
  }

  #[cfg(feature = "log_free")]
  fn on_free(&self, cap: usize, bytes: usize) {
    self.write_tagged(
      "FREE",
      Color::Magenta,
      format_args!("{cap} slots ({bytes} bytes)"),
    );
  }

  fn on_grow(&self, from: usize, to: usize) {
    self.write_tagged("GROW", Color::Yellow, format_args!("{from} -> {to}"));
  }
}
