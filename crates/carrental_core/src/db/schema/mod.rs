//! Table definitions for the record store.
//!
//! # Invariants
//! - Every statement is `CREATE TABLE IF NOT EXISTS`, so replaying it on an
//!   initialized database is a no-op.
//! - `Id` columns use `AUTOINCREMENT`; ids are assigned by SQLite and never
//!   reused.

/// Table holding rentable cars.
pub const CARS_TABLE: &str = "Cars";

/// Table holding registered clients.
pub const CLIENTS_TABLE: &str = "Clients";

pub const CARS_TABLE_SQL: &str = include_str!("cars.sql");

pub const CLIENTS_TABLE_SQL: &str = include_str!("clients.sql");
