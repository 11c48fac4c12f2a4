//! Client repository over the `Clients` table.

use super::{RecordRepository, RepoResult};
use crate::db::schema::{CLIENTS_TABLE, CLIENTS_TABLE_SQL};
use crate::db::Storage;
use crate::model::client::{Client, ClientId, NewClient};
use rusqlite::types::Value;
use rusqlite::Row;
use std::path::Path;

const CLIENT_INSERT_SQL: &str = "INSERT INTO Clients (
    Name,
    Surname,
    Email
) VALUES (?1, ?2, ?3);";

/// SQLite-backed client repository.
#[derive(Debug, Clone)]
pub struct SqliteClientRepository {
    storage: Storage,
}

impl SqliteClientRepository {
    /// Opens the database at `path`, creating the `Clients` table if needed.
    pub fn open(path: impl AsRef<Path>) -> RepoResult<Self> {
        let storage = Storage::open(path, CLIENTS_TABLE, CLIENTS_TABLE_SQL)?;
        Ok(Self { storage })
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }
}

impl RecordRepository for SqliteClientRepository {
    type Draft = NewClient;
    type Record = Client;

    fn insert(&self, draft: &NewClient) -> RepoResult<ClientId> {
        let id = self
            .storage
            .insert(CLIENT_INSERT_SQL, client_params(draft))?;
        Ok(id)
    }

    fn list_all(&self) -> RepoResult<Vec<Client>> {
        let clients = self.storage.fetch_all(parse_client_row)?;
        Ok(clients)
    }
}

fn client_params(client: &NewClient) -> Vec<Value> {
    vec![
        Value::Text(client.name.clone()),
        Value::Text(client.surname.clone()),
        Value::Text(client.email.clone()),
    ]
}

fn parse_client_row(row: &Row<'_>) -> rusqlite::Result<Client> {
    Ok(Client {
        id: row.get("Id")?,
        name: row.get("Name")?,
        surname: row.get("Surname")?,
        email: row.get("Email")?,
    })
}
