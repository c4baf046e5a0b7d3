/// User domain type
use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// User account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Login name (unique)
    pub username: String,

    /// Account creation timestamp (unix epoch milliseconds)
    pub created_at: i64,
}
