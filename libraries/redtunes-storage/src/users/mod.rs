//! User directory and credential queries

use crate::now_millis;
use redtunes_core::{error::Result, types::*, CoreError};
use sqlx::{Row, SqlitePool};

/// Create a new user account
///
/// Usernames are unique; a second create with the same name fails.
pub async fn create(pool: &SqlitePool, username: &str) -> Result<User> {
    let id = UserId::generate();
    let created_at = now_millis();

    let result = sqlx::query("INSERT INTO users (id, username, created_at) VALUES (?, ?, ?)")
        .bind(&id)
        .bind(username)
        .bind(created_at)
        .execute(pool)
        .await;

    match result {
        Ok(_) => Ok(User {
            id,
            username: username.to_string(),
            created_at,
        }),
        Err(sqlx::Error::Database(db)) if db.is_unique_violation() => Err(
            CoreError::invalid_input(format!("username already taken: {username}")),
        ),
        Err(e) => Err(e.into()),
    }
}

/// Look up a user by username
pub async fn get_by_username(pool: &SqlitePool, username: &str) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, username, created_at FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(row_to_user))
}

/// Look up a user by ID
pub async fn get_by_id(pool: &SqlitePool, id: &UserId) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, username, created_at FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(row_to_user))
}

/// List all user accounts
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query("SELECT id, username, created_at FROM users ORDER BY rowid")
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(row_to_user).collect())
}

/// Get a user's password hash, or None if they have no credentials
pub async fn get_password_hash(pool: &SqlitePool, user_id: &UserId) -> Result<Option<String>> {
    let row = sqlx::query("SELECT password_hash FROM user_credentials WHERE user_id = ?")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|r| r.get("password_hash")))
}

/// Create or replace a user's credentials
///
/// `password_hash` must already be hashed; plaintext never reaches storage.
pub async fn set_password_hash(
    pool: &SqlitePool,
    user_id: &UserId,
    password_hash: &str,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO user_credentials (user_id, password_hash, updated_at)
        VALUES (?, ?, ?)
        ON CONFLICT(user_id)
        DO UPDATE SET password_hash = excluded.password_hash, updated_at = excluded.updated_at
        "#,
    )
    .bind(user_id)
    .bind(password_hash)
    .bind(now_millis())
    .execute(pool)
    .await?;

    Ok(())
}

fn row_to_user(row: sqlx::sqlite::SqliteRow) -> User {
    User {
        id: row.get("id"),
        username: row.get("username"),
        created_at: row.get("created_at"),
    }
}
