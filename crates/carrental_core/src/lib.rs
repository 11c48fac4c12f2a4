//! Core record storage and console logic for the car rental tool.
//! Owns the SQLite tables, typed records and the interactive command loop.

pub mod console;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use console::{
    Command, CommandLoop, ConsoleError, ConsoleResult, Controller, LoopState, RecordController,
    RecordForm,
};
pub use db::{DbError, DbResult, Storage};
pub use logging::{default_log_level, flush_logging, init_logging, logging_status};
pub use model::car::{Car, CarId, NewCar};
pub use model::client::{Client, ClientId, NewClient};
pub use model::fields::{FieldError, FromFields};
pub use repo::car_repo::SqliteCarRepository;
pub use repo::client_repo::SqliteClientRepository;
pub use repo::{RecordRepository, RepoError, RepoResult};

/// Controller for the `Cars` table.
pub type CarController = RecordController<SqliteCarRepository>;

/// Controller for the `Clients` table.
pub type ClientController = RecordController<SqliteClientRepository>;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
