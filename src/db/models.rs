use chrono::{DateTime, Utc};
use std::fmt;

/// A single entry of the to-do list as stored in the `todos` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: i64,
    pub title: String,
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for TodoItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<todo id="{}" title="{}" done="{}" created_at="{}">"#,
            self.id, self.title, self.done, self.created_at
        )
    }
}

/// Non-empty todo title. The only way into [`crate::db::TodoStore::insert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    /// Returns `None` for the empty string. Whitespace is kept as given.
    pub fn new(title: impl Into<String>) -> Option<Self> {
        let title = title.into();
        (!title.is_empty()).then_some(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
