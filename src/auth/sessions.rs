// src/auth/sessions.rs
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

/// Key the signed-in user is stored under.
pub const SESSION_KEY: &str = "rentease_user";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Renter,
    Landlord,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Renter => "renter",
            Role::Landlord => "landlord",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
}

/// The cached user, if any. A record that no longer parses counts as signed out.
pub fn get_current_user(conn: &Connection) -> Result<Option<User>, ServerError> {
    let raw: Option<String> = conn
        .query_row(
            "select value from kv_store where key = ?",
            params![SESSION_KEY],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("session lookup failed: {e}")))?;

    Ok(raw.and_then(|json| match serde_json::from_str(&json) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!(error = %e, "discarding unreadable session record");
            None
        }
    }))
}

pub fn set_current_user(conn: &Connection, user: &User) -> Result<(), ServerError> {
    let json = serde_json::to_string(user)
        .map_err(|e| ServerError::BadRequest(format!("cannot encode user: {e}")))?;

    conn.execute(
        r#"
        insert into kv_store (key, value) values (?, ?)
        on conflict(key) do update set value = excluded.value
        "#,
        params![SESSION_KEY, json],
    )
    .map_err(|e| ServerError::DbError(format!("save session failed: {e}")))?;

    Ok(())
}

pub fn clear_current_user(conn: &Connection) -> Result<(), ServerError> {
    conn.execute("delete from kv_store where key = ?", params![SESSION_KEY])
        .map_err(|e| ServerError::DbError(format!("clear session failed: {e}")))?;
    Ok(())
}
