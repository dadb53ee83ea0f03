use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Debug)]
pub enum Error {
  /// A sampling parameter or graph-construction argument was out of range.
  InvalidInput(String),
  /// A fixture file did not match the expected flat-text format.
  Parse(String),
  Io(std::io::Error),
}

impl Display for Error {
  fn fmt(&self, f: &mut Formatter) -> FmtResult {
    use Error::*;
    match self {
      InvalidInput(msg) => write!(f, "invalid input: {}", msg),
      Parse(msg) => write!(f, "parse error: {}", msg),
      Io(e) => write!(f, "io error: {}", e),
    }
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Error::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<std::io::Error> for Error {
  fn from(e: std::io::Error) -> Self {
    Error::Io(e)
  }
}

pub type Result<T> = std::result::Result<T, Error>;
