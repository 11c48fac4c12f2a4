//! Interactive console layer: record controllers and the command loop.
//!
//! # Responsibility
//! - Prompt for record fields and render stored rows as text lines.
//! - Dispatch `add`/`print`/`stop` commands to the active controller.
//!
//! # Invariants
//! - Console I/O goes through caller-provided `BufRead`/`Write` handles.
//! - Errors are returned to the caller unchanged; nothing is retried here.

use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead};

mod command_loop;
mod controller;

pub use command_loop::{Command, CommandLoop, LoopState};
pub use controller::{Controller, RecordController, RecordForm};

pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Error surfaced by controllers and the command loop.
#[derive(Debug)]
pub enum ConsoleError {
    Io(io::Error),
    Repo(RepoError),
}

impl Display for ConsoleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConsoleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<io::Error> for ConsoleError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<RepoError> for ConsoleError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Reads one line without its trailing newline; `None` at end of input.
///
/// Invalid UTF-8 is replaced with `U+FFFD` instead of failing the read.
fn read_line(input: &mut dyn BufRead) -> io::Result<Option<String>> {
    let mut bytes = Vec::new();
    if input.read_until(b'\n', &mut bytes)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&bytes);
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}
