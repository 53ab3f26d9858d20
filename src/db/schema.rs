//! SQL DDL for initializing the todo storage.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT (ids are never reused)
/// - `done` BOOLEAN (stored as INTEGER 0/1)
/// - `created_at` fixed-width RFC3339 text, so text order is time order
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL CHECK (length(title) > 0),
    done INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_todos_created_at ON todos(created_at);
"#;
