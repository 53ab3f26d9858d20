use crate::db::models::{Title, TodoItem};
use crate::db::schema::SQLITE_INIT;
use crate::error::TodoError;
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

const LIST_SQL: &str =
    "SELECT id, title, done, created_at FROM todos ORDER BY created_at DESC, id DESC";
const GET_SQL: &str = "SELECT id, title, done, created_at FROM todos WHERE id = ?";
const TOGGLE_SQL: &str =
    "UPDATE todos SET done = NOT done WHERE id = ? RETURNING id, title, done, created_at";

#[derive(Clone)]
pub struct TodoStore {
    pool: SqlitePool,
}

impl TodoStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if needed) the database at `database_url` and make sure
    /// the `todos` table exists.
    pub async fn connect(database_url: &str) -> Result<Self, TodoError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        let store = Self::new(pool);
        store.init_schema().await?;
        Ok(store)
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), TodoError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Insert a new, not yet done item stamped with the current time.
    pub async fn insert(&self, title: Title) -> Result<TodoItem, TodoError> {
        let created_at = Utc::now().trunc_subsecs(6);
        let title = title.into_inner();
        let rec: (i64,) = sqlx::query_as(
            "INSERT INTO todos (title, done, created_at) VALUES (?, 0, ?) RETURNING id",
        )
        .bind(&title)
        .bind(encode_timestamp(&created_at))
        .fetch_one(&self.pool)
        .await?;

        Ok(TodoItem {
            id: rec.0,
            title,
            done: false,
            created_at,
        })
    }

    /// All items, newest first. Equal timestamps fall back to the higher id.
    pub async fn list_all_by_created_at_desc(&self) -> Result<Vec<TodoItem>, TodoError> {
        let rows = sqlx::query(LIST_SQL)
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(Self::row_to_model).collect()
    }

    pub async fn get_by_id(&self, id: i64) -> Result<TodoItem, TodoError> {
        let row = sqlx::query(GET_SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(TodoError::NotFound { id })?;
        Self::row_to_model(row)
    }

    /// Flip `done` in a single statement and return the updated row.
    pub async fn toggle_done(&self, id: i64) -> Result<TodoItem, TodoError> {
        let row = sqlx::query(TOGGLE_SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(TodoError::NotFound { id })?;
        Self::row_to_model(row)
    }

    pub async fn delete(&self, id: i64) -> Result<(), TodoError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(TodoError::NotFound { id });
        }
        Ok(())
    }

    fn row_to_model(row: SqliteRow) -> Result<TodoItem, TodoError> {
        let id: i64 = row.try_get("id")?;
        let title: String = row.try_get("title")?;
        let done_i: i64 = row.try_get("done")?;
        let created_at_str: String = row.try_get("created_at")?;

        let created_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
            .with_timezone(&Utc);

        Ok(TodoItem {
            id,
            title,
            done: done_i != 0,
            created_at,
        })
    }
}

fn encode_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}
