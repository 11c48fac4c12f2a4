//! Per-table storage handle over a SQLite database file.
//!
//! # Responsibility
//! - Run the table creation statement once, at construction.
//! - Provide scoped connections for single-statement reads and writes.
//!
//! # Invariants
//! - Each public operation opens its own connection and drops it before
//!   returning, on success and on error alike.
//! - Rows are returned in ascending `Id` order.

use super::DbResult;
use log::{debug, error, info};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, Row};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to one table inside a SQLite database file.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
    table: &'static str,
}

impl Storage {
    /// Opens the database at `path` and makes sure `table` exists.
    ///
    /// `creation_sql` must be idempotent (`CREATE TABLE IF NOT EXISTS`), so
    /// calling this repeatedly against the same file is safe.
    ///
    /// # Side effects
    /// - Creates the database file when it does not exist yet.
    /// - Emits `table_init` logging events with duration and status.
    pub fn open(
        path: impl AsRef<Path>,
        table: &'static str,
        creation_sql: &str,
    ) -> DbResult<Self> {
        let storage = Self {
            path: path.as_ref().to_path_buf(),
            table,
        };

        let started_at = Instant::now();
        info!("event=table_init module=db status=start table={table}");

        match storage.initialize_table(creation_sql) {
            Ok(()) => {
                info!(
                    "event=table_init module=db status=ok table={} duration_ms={}",
                    table,
                    started_at.elapsed().as_millis()
                );
                Ok(storage)
            }
            Err(err) => {
                error!(
                    "event=table_init module=db status=error table={} duration_ms={} error_code=table_init_failed error={}",
                    table,
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Database file this handle points at.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Table this handle was initialized for.
    pub fn table(&self) -> &'static str {
        self.table
    }

    /// Opens a dedicated connection to the database file.
    ///
    /// Callers own the connection; dropping it closes the file handle.
    pub fn connect(&self) -> DbResult<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }

    /// Executes one parameterized INSERT and returns the assigned rowid.
    ///
    /// Values are bound positionally (`?1`, `?2`, ...) in slice order.
    pub fn insert(&self, sql: &str, values: Vec<Value>) -> DbResult<i64> {
        let started_at = Instant::now();
        let result = self.connect().and_then(|conn| {
            conn.execute(sql, params_from_iter(values))?;
            Ok(conn.last_insert_rowid())
        });

        match &result {
            Ok(id) => debug!(
                "event=row_insert module=db status=ok table={} id={} duration_ms={}",
                self.table,
                id,
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=row_insert module=db status=error table={} duration_ms={} error={}",
                self.table,
                started_at.elapsed().as_millis(),
                err
            ),
        }

        result
    }

    /// Reads every row of this table, mapping each through `map_row`.
    ///
    /// `map_row` reads columns by name, so the result is a typed record per
    /// row instead of a loose column dictionary.
    pub fn fetch_all<T, F>(&self, map_row: F) -> DbResult<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let started_at = Instant::now();
        let result = self.select_all(map_row);

        match &result {
            Ok(rows) => debug!(
                "event=table_fetch module=db status=ok table={} rows={} duration_ms={}",
                self.table,
                rows.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=table_fetch module=db status=error table={} duration_ms={} error={}",
                self.table,
                started_at.elapsed().as_millis(),
                err
            ),
        }

        result
    }

    fn select_all<T, F>(&self, map_row: F) -> DbResult<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!("SELECT * FROM {} ORDER BY Id ASC;", self.table))?;
        let rows = stmt
            .query_map([], map_row)?
            .collect::<rusqlite::Result<Vec<T>>>()?;
        Ok(rows)
    }

    fn initialize_table(&self, creation_sql: &str) -> DbResult<()> {
        let conn = self.connect()?;
        conn.execute_batch(creation_sql)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Storage;
    use rusqlite::types::Value;

    const NOTES_SQL: &str =
        "CREATE TABLE IF NOT EXISTS Notes (Id INTEGER PRIMARY KEY AUTOINCREMENT, Body TEXT NOT NULL);";

    #[test]
    fn fetch_all_returns_rows_in_id_order() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open(dir.path().join("t.db"), "Notes", NOTES_SQL).unwrap();

        for body in ["a", "b", "c"] {
            storage
                .insert(
                    "INSERT INTO Notes (Body) VALUES (?1);",
                    vec![Value::Text(body.to_string())],
                )
                .unwrap();
        }

        let rows = storage
            .fetch_all(|row| Ok((row.get::<_, i64>("Id")?, row.get::<_, String>("Body")?)))
            .unwrap();
        let bodies: Vec<_> = rows.iter().map(|(_, body)| body.as_str()).collect();
        assert_eq!(bodies, ["a", "b", "c"]);
        assert!(rows.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn malformed_creation_sql_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Storage::open(dir.path().join("t.db"), "Notes", "CREATE TABLE (");
        assert!(result.is_err());
    }

    #[test]
    fn unreachable_database_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-dir").join("t.db");
        assert!(Storage::open(missing, "Notes", NOTES_SQL).is_err());
    }
}
