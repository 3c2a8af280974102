use dynarray_core::{ArrayError, DynamicArray, StdioHooks};
use std::{fmt, io};
use termcolor::{Color, ColorSpec};

/// How many items the demo appends when no count is given
pub const DEFAULT_COUNT: usize = 10;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
  #[error("Array error: {0}")]
  Array(#[from] ArrayError),

  #[error("IO error: {0}")]
  Io(#[from] io::Error),
}

fn say(hooks: &StdioHooks, line: fmt::Arguments) -> io::Result<()> {
  hooks.with_stdio(|stdio| writeln!(stdio.stdout(), "{line}"))
}

/// Write `err` to the stderr shared with `hooks`
pub fn report_error(hooks: &StdioHooks, err: &DemoError) -> io::Result<()> {
  hooks.with_stdio(|stdio| -> io::Result<()> {
    let stderr = stdio.stderr();

    stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(stderr, "error")?;
    stderr.reset()?;
    writeln!(stderr, ": {err}")
  })
}

/// Append `1..=count` to a fresh array, reverse it and print every item.
/// Capacity is printed along the way and growth is logged by `hooks`
pub fn run_demo(hooks: &StdioHooks, count: usize) -> Result<(), DemoError> {
  say(hooks, format_args!("[Hello DynamicArray!]"))?;

  let mut array = DynamicArray::new_in(hooks.clone())?;
  say(hooks, format_args!("{}", array.cap()))?;

  for i in 1..=count {
    array.push(i)?;
  }
  say(hooks, format_args!("{}", array.cap()))?;

  array.reverse()?;
  say(hooks, format_args!("Reversed capacity is: {}", array.cap()))?;

  for i in 0..array.len() {
    say(hooks, format_args!("{}", array.at(i)?))?;
  }

  Ok(())
}
