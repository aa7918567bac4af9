//! Client CRUD operations.
//!
//! Identifiers arrive as opaque strings and are cast by Postgres, so a
//! malformed id surfaces as a `22P02` database error rather than a miss.

use sqlx::PgPool;
use tracing::debug;

use crate::{
    models::{ClientFields, ClientRow},
    DbError,
};

/// Return all clients ordered by creation time (newest first).
pub async fn list_clients(pool: &PgPool) -> Result<Vec<ClientRow>, DbError> {
    let rows = sqlx::query_as::<_, ClientRow>(
        r#"
        SELECT client_id, name, email, address, created_at
        FROM clients
        ORDER BY created_at DESC, client_id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Fetch a single client by its primary key.
pub async fn get_client(pool: &PgPool, id: &str) -> Result<ClientRow, DbError> {
    let row = sqlx::query_as::<_, ClientRow>(
        r#"
        SELECT client_id, name, email, address, created_at
        FROM clients
        WHERE client_id = CAST($1 AS INTEGER)
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(DbError::NotFound)?;

    Ok(row)
}

/// Insert a new client and return the `client_id` assigned by the database.
///
/// `created_at` is filled in by the column default.
pub async fn create_client(pool: &PgPool, fields: &ClientFields) -> Result<i32, DbError> {
    let client_id = sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO clients (name, email, address)
        VALUES ($1, $2, $3)
        RETURNING client_id
        "#,
    )
    .bind(fields.name.as_deref())
    .bind(fields.email.as_deref())
    .bind(fields.address.as_deref())
    .fetch_one(pool)
    .await?;

    debug!(client_id, "client inserted");
    Ok(client_id)
}

/// Overwrite `name`, `email` and `address` of an existing client.
///
/// Returns `DbError::NotFound` if no row was updated.
pub async fn update_client(
    pool: &PgPool,
    id: &str,
    fields: &ClientFields,
) -> Result<(), DbError> {
    let result = sqlx::query(
        r#"
        UPDATE clients
        SET name = $1, email = $2, address = $3
        WHERE client_id = CAST($4 AS INTEGER)
        "#,
    )
    .bind(fields.name.as_deref())
    .bind(fields.email.as_deref())
    .bind(fields.address.as_deref())
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound);
    }

    Ok(())
}

/// Permanently delete a client by its primary key.
///
/// Returns `DbError::NotFound` if no row was deleted.
pub async fn delete_client(pool: &PgPool, id: &str) -> Result<(), DbError> {
    let result = sqlx::query("DELETE FROM clients WHERE client_id = CAST($1 AS INTEGER)")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound);
    }

    Ok(())
}
