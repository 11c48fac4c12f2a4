//! SQLite storage handle and table bootstrap.
//!
//! # Responsibility
//! - Own the database location used by every record table.
//! - Ensure a table exists before any read/write touches it.
//! - Open one short-lived connection per storage operation.
//!
//! # Invariants
//! - A `Storage` value is only handed out after its table DDL succeeded.
//! - No connection outlives the operation that opened it.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod schema;
mod storage;

pub use storage::Storage;

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
