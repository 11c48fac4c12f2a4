//! Record controller shared by every table.
//!
//! # Responsibility
//! - Prompt for a record's fields in fixed order and insert the result.
//! - Print every stored row, one line each.
//!
//! # Invariants
//! - A coercion failure is returned before any SQL runs.
//! - Field values typed by the user are never written to logs.

use super::{read_line, ConsoleResult};
use crate::model::car::NewCar;
use crate::model::client::NewClient;
use crate::model::fields::FromFields;
use crate::repo::{RecordRepository, RepoError};
use log::info;
use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Console metadata for a record draft.
pub trait RecordForm: FromFields {
    /// Singular name used in headings and confirmations (`Car`, `Client`).
    const LABEL: &'static str;
    /// One prompt per field, in `from_fields` order.
    const PROMPTS: &'static [&'static str];
}

impl RecordForm for NewCar {
    const LABEL: &'static str = "Car";
    const PROMPTS: &'static [&'static str] = &[
        "Enter car model: ",
        "Enter hourly price: ",
        "Enter kilometer price: ",
    ];
}

impl RecordForm for NewClient {
    const LABEL: &'static str = "Client";
    const PROMPTS: &'static [&'static str] = &[
        "Enter client name: ",
        "Enter client surname: ",
        "Enter client email: ",
    ];
}

/// Command targets reachable from the command loop.
pub trait Controller {
    /// Prompts for every field, then inserts the record.
    fn add_item(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> ConsoleResult<()>;
    /// Prints a heading followed by one line per stored record.
    fn print_items(&self, output: &mut dyn Write) -> ConsoleResult<()>;
}

/// Controller for one record table backed by repository `R`.
pub struct RecordController<R: RecordRepository> {
    repo: R,
}

impl<R> RecordController<R>
where
    R: RecordRepository,
    R::Draft: RecordForm,
    R::Record: Display,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Coerces raw `fields` into a draft and inserts it.
    ///
    /// # Errors
    /// - `RepoError::Field` when a field count or number is wrong; the table
    ///   is left untouched.
    /// - `RepoError::Db` when the store rejects the statement.
    pub fn insert(&self, fields: &[String]) -> ConsoleResult<i64> {
        let draft = <R::Draft as FromFields>::from_fields(fields).map_err(RepoError::from)?;
        let id = self.repo.insert(&draft)?;
        info!(
            "event=record_add module=console status=ok record={} id={}",
            <R::Draft as RecordForm>::LABEL,
            id
        );
        Ok(id)
    }

    /// Returns all stored records in id order.
    pub fn list_items(&self) -> ConsoleResult<Vec<R::Record>> {
        Ok(self.repo.list_all()?)
    }
}

impl<R> Controller for RecordController<R>
where
    R: RecordRepository,
    R::Draft: RecordForm,
    R::Record: Display,
{
    fn add_item(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> ConsoleResult<()> {
        let mut fields = Vec::with_capacity(<R::Draft as RecordForm>::PROMPTS.len());
        for prompt in <R::Draft as RecordForm>::PROMPTS {
            write!(output, "{prompt}")?;
            output.flush()?;
            let value = read_line(input)?.ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input ended while reading record fields",
                )
            })?;
            fields.push(value);
        }

        self.insert(&fields)?;
        writeln!(output, "{} added successfully.", <R::Draft as RecordForm>::LABEL)?;
        Ok(())
    }

    fn print_items(&self, output: &mut dyn Write) -> ConsoleResult<()> {
        let items = self.list_items()?;
        writeln!(output, "{} List:", <R::Draft as RecordForm>::LABEL)?;
        for item in &items {
            writeln!(output, "{item}")?;
        }
        Ok(())
    }
}
