/// Per-user preference record
use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// User preferences, one row per user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Owning user
    pub user_id: UserId,

    /// Favorite genre tags
    pub favorite_genres: Vec<String>,

    /// Dark mode toggle
    pub dark_mode: bool,
}

impl UserPreferences {
    /// Default preferences for a user with no stored row
    pub fn default_for(user_id: UserId) -> Self {
        Self {
            user_id,
            favorite_genres: Vec::new(),
            dark_mode: false,
        }
    }
}
