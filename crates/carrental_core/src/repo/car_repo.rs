//! Car repository over the `Cars` table.
//!
//! # Invariants
//! - Insert binds `Model, HourlyPrice, KmPrice` in that order.
//! - Read paths map columns by name, never by position.

use super::{RecordRepository, RepoResult};
use crate::db::schema::{CARS_TABLE, CARS_TABLE_SQL};
use crate::db::Storage;
use crate::model::car::{Car, CarId, NewCar};
use rusqlite::types::Value;
use rusqlite::Row;
use std::path::Path;

const CAR_INSERT_SQL: &str = "INSERT INTO Cars (
    Model,
    HourlyPrice,
    KmPrice
) VALUES (?1, ?2, ?3);";

/// SQLite-backed car repository.
#[derive(Debug, Clone)]
pub struct SqliteCarRepository {
    storage: Storage,
}

impl SqliteCarRepository {
    /// Opens the database at `path`, creating the `Cars` table if needed.
    pub fn open(path: impl AsRef<Path>) -> RepoResult<Self> {
        let storage = Storage::open(path, CARS_TABLE, CARS_TABLE_SQL)?;
        Ok(Self { storage })
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }
}

impl RecordRepository for SqliteCarRepository {
    type Draft = NewCar;
    type Record = Car;

    fn insert(&self, draft: &NewCar) -> RepoResult<CarId> {
        let id = self.storage.insert(CAR_INSERT_SQL, car_params(draft))?;
        Ok(id)
    }

    fn list_all(&self) -> RepoResult<Vec<Car>> {
        let cars = self.storage.fetch_all(parse_car_row)?;
        Ok(cars)
    }
}

fn car_params(car: &NewCar) -> Vec<Value> {
    vec![
        Value::Text(car.model.clone()),
        Value::Real(car.hourly_price),
        Value::Real(car.km_price),
    ]
}

fn parse_car_row(row: &Row<'_>) -> rusqlite::Result<Car> {
    Ok(Car {
        id: row.get("Id")?,
        model: row.get("Model")?,
        hourly_price: row.get("HourlyPrice")?,
        km_price: row.get("KmPrice")?,
    })
}
