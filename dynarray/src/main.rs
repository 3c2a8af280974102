#![deny(clippy::all)]
mod demo;

use demo::{report_error, run_demo, DEFAULT_COUNT};
use dynarray_core::StdioHooks;
use dynarray_env::stdio::Stdio;
use dynarray_native::stdio::NativeStdio;
use std::{env, process};

#[cfg(feature = "jemalloc")]
use jemallocator::Jemalloc;

#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

fn main() {
  let args: Vec<String> = env::args().collect();

  let count = match args.as_slice() {
    [_] => DEFAULT_COUNT,
    [_, count] => match count.parse() {
      Ok(count) => count,
      Err(e) => {
        eprintln!("invalid element count {count:?}: {e}");
        process::exit(2)
      },
    },
    _ => {
      eprintln!("usage: dynarray [count]");
      process::exit(2)
    },
  };

  let hooks = StdioHooks::new(Stdio::new(Box::new(NativeStdio::default())));

  if let Err(e) = run_demo(&hooks, count) {
    if report_error(&hooks, &e).is_err() {
      eprintln!("{}", e);
    }
    process::exit(1)
  }
}
