//! The `ClientStore` trait — the gateway every handler talks to.

use async_trait::async_trait;

use crate::{
    models::{ClientFields, ClientRow},
    repository::clients as client_repo,
    DbError, DbPool,
};

/// One method per statement against the `clients` table.
///
/// Implementations must report `DbError::NotFound` when a lookup, update or
/// delete matches no row, and a `DbError::Database` carrying
/// [`UNIQUE_VIOLATION`](crate::error::UNIQUE_VIOLATION) when an email is
/// already taken.
#[async_trait]
pub trait ClientStore: Send + Sync {
    async fn list(&self) -> Result<Vec<ClientRow>, DbError>;

    async fn get(&self, id: &str) -> Result<ClientRow, DbError>;

    /// Insert a client and return its new `client_id`.
    async fn create(&self, fields: &ClientFields) -> Result<i32, DbError>;

    async fn update(&self, id: &str, fields: &ClientFields) -> Result<(), DbError>;

    async fn delete(&self, id: &str) -> Result<(), DbError>;
}

/// `ClientStore` backed by the shared Postgres pool.
#[derive(Debug, Clone)]
pub struct PgClientStore {
    pool: DbPool,
}

impl PgClientStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientStore for PgClientStore {
    async fn list(&self) -> Result<Vec<ClientRow>, DbError> {
        client_repo::list_clients(&self.pool).await
    }

    async fn get(&self, id: &str) -> Result<ClientRow, DbError> {
        client_repo::get_client(&self.pool, id).await
    }

    async fn create(&self, fields: &ClientFields) -> Result<i32, DbError> {
        client_repo::create_client(&self.pool, fields).await
    }

    async fn update(&self, id: &str, fields: &ClientFields) -> Result<(), DbError> {
        client_repo::update_client(&self.pool, id, fields).await
    }

    async fn delete(&self, id: &str) -> Result<(), DbError> {
        client_repo::delete_client(&self.pool, id).await
    }
}
