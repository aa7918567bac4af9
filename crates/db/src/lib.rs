//! `db` crate — pure persistence layer.
//!
//! Provides a connection pool, the `clients` row struct, repository functions
//! for every statement the API issues, and the [`ClientStore`] trait with a
//! Postgres and an in-memory implementation. No business logic lives here.

pub mod error;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repository;
pub mod store;

pub use error::DbError;
pub use memory::InMemoryClientStore;
pub use models::{ClientFields, ClientRow};
pub use pool::DbPool;
pub use store::{ClientStore, PgClientStore};
