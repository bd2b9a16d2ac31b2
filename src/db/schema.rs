//! SQL DDL for the recipe table.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT, never reused after delete
/// - `prep_time` nullable minutes
/// - `created_at` filled by SQLite on insert (`YYYY-MM-DD HH:MM:SS`, UTC)
/// - `idx_recipes_created_at`, backing the newest-first listing; not part of
///   the row layout, so dropping it changes no stored data
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS recipes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    ingredients TEXT NOT NULL,
    instructions TEXT NOT NULL,
    prep_time INTEGER,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);

CREATE INDEX IF NOT EXISTS idx_recipes_created_at ON recipes(created_at);
"#;
