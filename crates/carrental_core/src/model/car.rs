//! Car record model.
//!
//! # Invariants
//! - `id` is assigned by the store and never set by callers.
//! - Prices are finite decimals; sign is not checked.

use super::fields::{expect_field_count, parse_decimal, FieldError, FromFields};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Store-assigned car identifier.
pub type CarId = i64;

/// Car fields supplied by the caller before insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCar {
    pub model: String,
    pub hourly_price: f64,
    pub km_price: f64,
}

/// Persisted car row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: CarId,
    pub model: String,
    pub hourly_price: f64,
    pub km_price: f64,
}

impl NewCar {
    pub fn new(model: impl Into<String>, hourly_price: f64, km_price: f64) -> Self {
        Self {
            model: model.into(),
            hourly_price,
            km_price,
        }
    }
}

impl FromFields for NewCar {
    const FIELD_COUNT: usize = 3;

    /// Fields are `[model, hourly_price, km_price]`.
    fn from_fields(fields: &[String]) -> Result<Self, FieldError> {
        expect_field_count(fields, Self::FIELD_COUNT)?;
        Ok(Self {
            model: fields[0].clone(),
            hourly_price: parse_decimal("hourly price", &fields[1])?,
            km_price: parse_decimal("kilometer price", &fields[2])?,
        })
    }
}

impl Display for Car {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Id: {}, Model: {}, Hourly Price: {}, Km Price: {}",
            self.id, self.model, self.hourly_price, self.km_price
        )
    }
}
