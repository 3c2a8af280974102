use dynarray_env::stdio::StdioImpl;
use termcolor::{ColorChoice, StandardStream, WriteColor};

/// Terminal backed stdio. Colors are emitted only when the
/// attached stream is a tty
pub struct NativeStdio {
  stdout: StandardStream,
  stderr: StandardStream,
}

impl Default for NativeStdio {
  fn default() -> Self {
    Self::new(ColorChoice::Auto)
  }
}

impl NativeStdio {
  pub fn new(choice: ColorChoice) -> Self {
    Self {
      stdout: StandardStream::stdout(choice),
      stderr: StandardStream::stderr(choice),
    }
  }
}

impl StdioImpl for NativeStdio {
  fn stdout(&mut self) -> &mut dyn WriteColor {
    &mut self.stdout
  }

  fn stderr(&mut self) -> &mut dyn WriteColor {
    &mut self.stderr
  }
}
