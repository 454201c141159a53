//! Error types for instance loading.
//!
//! The search loops themselves are pure computation over validated in-memory
//! structures and have no failure modes; the only fallible surface is reading
//! problem instances from external data. Contract violations inside the
//! engine (reading an unset fitness, crossover points out of range) are
//! programming errors and panic instead.

use std::fmt;
use std::io;

/// Failure while reading a problem instance.
///
/// Returned by the `from_reader`/`from_file` constructors in
/// [`crate::problems`]. A failed load is fatal to the run: it happens before
/// any generation or iteration begins and is propagated unchanged.
#[derive(Debug)]
pub enum InstanceError {
    /// The instance source could not be read.
    Io(io::Error),
    /// The instance data was read but is malformed.
    Parse(String),
}

impl fmt::Display for InstanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstanceError::Io(err) => write!(f, "cannot read instance: {err}"),
            InstanceError::Parse(msg) => write!(f, "malformed instance: {msg}"),
        }
    }
}

impl std::error::Error for InstanceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InstanceError::Io(err) => Some(err),
            InstanceError::Parse(_) => None,
        }
    }
}

impl From<io::Error> for InstanceError {
    fn from(err: io::Error) -> Self {
        InstanceError::Io(err)
    }
}
