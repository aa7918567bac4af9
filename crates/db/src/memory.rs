//! `InMemoryClientStore` — a test double for `ClientStore`.
//!
//! Mirrors what Postgres does for the `clients` table closely enough for
//! handler tests: serial ids, `created_at` defaults, the unique email
//! constraint, `NOT NULL` columns and integer casting of identifiers all
//! report the same SQLSTATE codes the real database would.

use std::num::{IntErrorKind, ParseIntError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    error::{
        INVALID_TEXT_REPRESENTATION, NOT_NULL_VIOLATION, NUMERIC_VALUE_OUT_OF_RANGE,
        UNIQUE_VIOLATION,
    },
    models::{ClientFields, ClientRow},
    ClientStore, DbError,
};

#[derive(Debug, Default)]
struct Table {
    rows: Vec<ClientRow>,
    next_id: i32,
}

/// An in-process `clients` table that records every call it receives.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClientStore {
    table: Arc<Mutex<Table>>,
    /// Names of the store methods invoked, in call order.
    pub calls: Arc<Mutex<Vec<&'static str>>>,
    closed: bool,
}

impl InMemoryClientStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails as if the pool had been shut down.
    pub fn closed() -> Self {
        Self {
            closed: true,
            ..Self::default()
        }
    }

    /// Number of store methods invoked so far.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Number of persisted rows.
    pub fn len(&self) -> usize {
        lock(&self.table).rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn enter(&self, op: &'static str) -> Result<MutexGuard<'_, Table>, DbError> {
        lock(&self.calls).push(op);
        if self.closed {
            return Err(DbError::Sqlx(sqlx::Error::PoolClosed));
        }
        Ok(lock(&self.table))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn parse_id(id: &str) -> Result<i32, DbError> {
    id.trim().parse().map_err(|err: ParseIntError| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => DbError::database(
            NUMERIC_VALUE_OUT_OF_RANGE,
            format!("value \"{id}\" is out of range for type integer"),
        ),
        _ => DbError::database(
            INVALID_TEXT_REPRESENTATION,
            format!("invalid input syntax for type integer: \"{id}\""),
        ),
    })
}

fn required(column: &str, value: &Option<String>) -> Result<String, DbError> {
    value.clone().ok_or_else(|| {
        DbError::database(
            NOT_NULL_VIOLATION,
            format!(
                "null value in column \"{column}\" of relation \"clients\" \
                 violates not-null constraint"
            ),
        )
    })
}

fn email_taken(table: &Table, email: &str, except: Option<i32>) -> Result<(), DbError> {
    let clash = table
        .rows
        .iter()
        .any(|r| r.email == email && Some(r.client_id) != except);
    if clash {
        return Err(DbError::database(
            UNIQUE_VIOLATION,
            "duplicate key value violates unique constraint \"clients_email_key\"",
        ));
    }
    Ok(())
}

#[async_trait]
impl ClientStore for InMemoryClientStore {
    async fn list(&self) -> Result<Vec<ClientRow>, DbError> {
        let table = self.enter("list")?;
        let mut rows = table.rows.clone();
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.client_id.cmp(&a.client_id))
        });
        Ok(rows)
    }

    async fn get(&self, id: &str) -> Result<ClientRow, DbError> {
        let table = self.enter("get")?;
        let id = parse_id(id)?;
        table
            .rows
            .iter()
            .find(|r| r.client_id == id)
            .cloned()
            .ok_or(DbError::NotFound)
    }

    async fn create(&self, fields: &ClientFields) -> Result<i32, DbError> {
        let mut table = self.enter("create")?;
        // The serial default is drawn before any constraint is checked, so a
        // rejected insert still consumes an id.
        table.next_id += 1;
        let client_id = table.next_id;

        let name = required("name", &fields.name)?;
        let email = required("email", &fields.email)?;
        email_taken(&table, &email, None)?;

        table.rows.push(ClientRow {
            client_id,
            name,
            email,
            address: fields.address.clone(),
            created_at: Utc::now(),
        });
        Ok(client_id)
    }

    async fn update(&self, id: &str, fields: &ClientFields) -> Result<(), DbError> {
        let mut table = self.enter("update")?;
        let id = parse_id(id)?;
        let Some(index) = table.rows.iter().position(|r| r.client_id == id) else {
            return Err(DbError::NotFound);
        };
        let name = required("name", &fields.name)?;
        let email = required("email", &fields.email)?;
        email_taken(&table, &email, Some(id))?;

        let row = &mut table.rows[index];
        row.name = name;
        row.email = email;
        row.address = fields.address.clone();
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), DbError> {
        let mut table = self.enter("delete")?;
        let id = parse_id(id)?;
        let before = table.rows.len();
        table.rows.retain(|r| r.client_id != id);
        if table.rows.len() == before {
            return Err(DbError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> ClientFields {
        ClientFields::new("Ana", "ana@x.com", None)
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let store = InMemoryClientStore::new();
        let first = store.create(&ana()).await.unwrap();
        let second = store
            .create(&ClientFields::new("Bia", "bia@x.com", Some("Rua 1".into())))
            .await
            .unwrap();
        assert_eq!((first, second), (1, 2));

        let bia = store.get("2").await.unwrap();
        assert_eq!(bia.address.as_deref(), Some("Rua 1"));
    }

    #[tokio::test]
    async fn duplicate_email_is_a_unique_violation() {
        let store = InMemoryClientStore::new();
        store.create(&ana()).await.unwrap();

        let err = store.create(&ana()).await.unwrap_err();
        assert!(err.is_unique_violation());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let store = InMemoryClientStore::new();
        store.create(&ana()).await.unwrap();
        store
            .create(&ClientFields::new("Bia", "bia@x.com", None))
            .await
            .unwrap();

        let rows = store.list().await.unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Bia", "Ana"]);
    }

    #[tokio::test]
    async fn missing_rows_are_not_found() {
        let store = InMemoryClientStore::new();
        assert!(matches!(store.get("42").await, Err(DbError::NotFound)));
        assert!(matches!(store.update("42", &ana()).await, Err(DbError::NotFound)));
        assert!(matches!(store.delete("42").await, Err(DbError::NotFound)));
    }

    #[tokio::test]
    async fn malformed_id_is_a_database_error() {
        let store = InMemoryClientStore::new();
        let err = store.get("abc").await.unwrap_err();
        assert_eq!(err.code(), Some(INVALID_TEXT_REPRESENTATION));
        assert_eq!(err.to_string(), "invalid input syntax for type integer: \"abc\"");
    }

    #[tokio::test]
    async fn out_of_range_id_is_a_range_error() {
        let store = InMemoryClientStore::new();
        let err = store.delete("99999999999").await.unwrap_err();
        assert_eq!(err.code(), Some(NUMERIC_VALUE_OUT_OF_RANGE));
        assert_eq!(err.to_string(), "value \"99999999999\" is out of range for type integer");
    }

    #[tokio::test]
    async fn rejected_insert_still_consumes_an_id() {
        let store = InMemoryClientStore::new();
        assert_eq!(store.create(&ana()).await.unwrap(), 1);
        assert!(store.create(&ana()).await.is_err());

        let bia = ClientFields::new("Bia", "bia@x.com", None);
        assert_eq!(store.create(&bia).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn update_with_missing_name_violates_not_null() {
        let store = InMemoryClientStore::new();
        store.create(&ana()).await.unwrap();

        let fields = ClientFields {
            name: None,
            email: Some("ana@x.com".into()),
            address: None,
        };
        let err = store.update("1", &fields).await.unwrap_err();
        assert_eq!(err.code(), Some(NOT_NULL_VIOLATION));
        assert_eq!(store.get("1").await.unwrap().name, "Ana");
    }

    #[tokio::test]
    async fn update_keeps_id_and_created_at() {
        let store = InMemoryClientStore::new();
        store.create(&ana()).await.unwrap();
        let before = store.get("1").await.unwrap();

        let fields = ClientFields::new("Ana Maria", "ana.maria@x.com", Some("Rua 2".into()));
        store.update("1", &fields).await.unwrap();

        let after = store.get("1").await.unwrap();
        assert_eq!(after.client_id, before.client_id);
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(after.email, "ana.maria@x.com");
        assert_eq!(after.address.as_deref(), Some("Rua 2"));
    }

    #[tokio::test]
    async fn closed_store_fails_every_call() {
        let store = InMemoryClientStore::closed();
        assert!(matches!(store.list().await, Err(DbError::Sqlx(_))));
        assert!(matches!(store.create(&ana()).await, Err(DbError::Sqlx(_))));
        assert_eq!(store.call_count(), 2);
    }
}
