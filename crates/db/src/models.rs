//! Row structs that map 1-to-1 onto database tables.
//!
//! These are *persistence* models — they carry no behaviour.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// clients
// ---------------------------------------------------------------------------

/// A persisted client row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ClientRow {
    pub client_id: i32,
    pub name: String,
    pub email: String,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The writable columns of a client, as received from a request body.
///
/// Every field is optional on the wire. Inserts and updates always write all
/// three columns, so an absent field is stored as `NULL`.
///
/// Numbers and booleans are accepted and stored as their text form, the way
/// Postgres coerces an untyped parameter into a `TEXT` column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientFields {
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub address: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl From<Scalar> for String {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Text(s) => s,
            Scalar::Int(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

fn scalar_as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(String::from))
}

impl ClientFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        address: Option<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            address,
        }
    }

    /// `true` when both `name` and `email` are present and non-empty.
    pub fn has_required(&self) -> bool {
        let filled = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        filled(&self.name) && filled(&self.email)
    }
}
