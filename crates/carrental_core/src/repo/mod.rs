//! Repository contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define the `{insert, list_all}` capability shared by every record table.
//! - Keep SQL text and column mapping out of the console layer.
//!
//! # Invariants
//! - Repositories are only constructed after their table exists.
//! - Draft-to-parameter mapping follows the table's column order.

use crate::db::DbError;
use crate::model::fields::FieldError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod car_repo;
pub mod client_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for record persistence and coercion.
#[derive(Debug)]
pub enum RepoError {
    Field(FieldError),
    Db(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Field(err) => Some(err),
            Self::Db(err) => Some(err),
        }
    }
}

impl From<FieldError> for RepoError {
    fn from(value: FieldError) -> Self {
        Self::Field(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Insert/list capability implemented by every record table.
pub trait RecordRepository {
    /// Caller-supplied fields, without an id.
    type Draft;
    /// Persisted row, including the store-assigned id.
    type Record;

    /// Inserts one row and returns its store-assigned id.
    fn insert(&self, draft: &Self::Draft) -> RepoResult<i64>;
    /// Returns every row in ascending id order.
    fn list_all(&self) -> RepoResult<Vec<Self::Record>>;
}
