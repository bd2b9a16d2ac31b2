use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A stored recipe. `id` and `created_at` are assigned by SQLite.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    /// One ingredient per line.
    pub ingredients: String,
    /// One step per line.
    pub instructions: String,
    /// Minutes; a NULL column reads back as 0.
    pub prep_time: i64,
    pub created_at: NaiveDateTime,
}

/// Caller-supplied recipe fields, used for both insert and full update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewRecipe {
    pub name: String,
    pub ingredients: String,
    pub instructions: String,
    pub prep_time: i64,
}
