use std::error::Error;
use std::fmt::{Display, Formatter};
#[cfg(not(feature = "log"))]
use crate::logger::error;
#[cfg(feature = "log")]
use log::error;

/// Failure while handing rendered text to the output sink.
///
/// Unsupported types and mixed tuples never get this far: they are rejected
/// by the compiler.
#[derive(Debug)]
pub enum PrintError {
    IOError(std::io::Error),
}

impl PrintError {
    #[cfg_attr(not(feature = "log"), allow(unused_variables))]
    pub fn print_error(&self) {
        match self {
            PrintError::IOError(e) => error!("cannot write to output: {}", e),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            PrintError::IOError(..) => 3,
        }
    }
}

impl Display for PrintError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PrintError::IOError(e) => write!(f, "cannot write to output: {}", e),
        }
    }
}

impl Error for PrintError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PrintError::IOError(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for PrintError {
    fn from(value: std::io::Error) -> Self {
        PrintError::IOError(value)
    }
}
