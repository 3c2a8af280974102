use termcolor::WriteColor;

/// A wrapper the provided facilities around standard output and err
pub struct Stdio {
  stdio: Box<dyn StdioImpl>,
}

impl Stdio {
  /// Create a new wrapper from the provided stdio facilities
  pub fn new(stdio: Box<dyn StdioImpl>) -> Self {
    Self { stdio }
  }

  /// Get a color aware Write to stdout
  pub fn stdout(&mut self) -> &mut dyn WriteColor {
    self.stdio.stdout()
  }

  /// Get a color aware Write to stderr
  pub fn stderr(&mut self) -> &mut dyn WriteColor {
    self.stdio.stderr()
  }
}

pub trait StdioImpl {
  fn stdout(&mut self) -> &mut dyn WriteColor;
  fn stderr(&mut self) -> &mut dyn WriteColor;
}

pub mod support {
  use super::StdioImpl;
  use std::{
    cell::RefCell,
    io::{self, Write},
    rc::Rc,
  };
  use termcolor::{ColorSpec, WriteColor};

  /// Holds the captured output of a `StdioTest` so a test can
  /// inspect it after the fact
  #[derive(Debug, Default)]
  pub struct StdioTestContainer {
    pub stdout: Rc<RefCell<Vec<u8>>>,
    pub stderr: Rc<RefCell<Vec<u8>>>,
  }

  impl StdioTestContainer {
    pub fn make_stdio(&self) -> StdioTest {
      StdioTest {
        stdout: TestWriter(Rc::clone(&self.stdout)),
        stderr: TestWriter(Rc::clone(&self.stderr)),
      }
    }

    /// Everything written to stdout so far
    pub fn stdout_string(&self) -> String {
      String::from_utf8_lossy(&self.stdout.borrow()).into_owned()
    }

    /// Everything written to stderr so far
    pub fn stderr_string(&self) -> String {
      String::from_utf8_lossy(&self.stderr.borrow()).into_owned()
    }

    pub fn log_stdio(&self) {
      eprintln!("{}", self.stdout_string());
      eprintln!("{}", self.stderr_string());
    }
  }

  #[derive(Debug, Clone)]
  pub struct StdioTest {
    stdout: TestWriter,
    stderr: TestWriter,
  }

  impl StdioImpl for StdioTest {
    fn stdout(&mut self) -> &mut dyn WriteColor {
      &mut self.stdout
    }
    fn stderr(&mut self) -> &mut dyn WriteColor {
      &mut self.stderr
    }
  }

  /// A writer appending into a shared buffer. Colors are dropped
  #[derive(Debug, Clone)]
  pub struct TestWriter(Rc<RefCell<Vec<u8>>>);

  impl Write for TestWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
      self.0.borrow_mut().extend_from_slice(buf);
      Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  impl WriteColor for TestWriter {
    fn supports_color(&self) -> bool {
      false
    }
    fn set_color(&mut self, _: &ColorSpec) -> io::Result<()> {
      Ok(())
    }
    fn reset(&mut self) -> io::Result<()> {
      Ok(())
    }
  }
}
