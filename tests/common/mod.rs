use std::{
    fs,
    path::PathBuf,
    sync::atomic::{AtomicUsize, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

use todo_list::TodoStore;

static NEXT_DB: AtomicUsize = AtomicUsize::new(0);

/// A store backed by a fresh SQLite file in the temp dir.
pub struct TempStore {
    pub store: TodoStore,
    path: PathBuf,
}

impl TempStore {
    pub async fn new(tag: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();

        let mut path = std::env::temp_dir();
        path.push(format!(
            "todo-list-{tag}-{}-{}-{}.sqlite",
            std::process::id(),
            nanos,
            NEXT_DB.fetch_add(1, Ordering::Relaxed)
        ));

        let database_url = format!("sqlite:{}", path.display());
        let store = TodoStore::connect(&database_url)
            .await
            .expect("failed to open test database");
        Self { store, path }
    }

    pub async fn cleanup(self) {
        self.store.close().await;
        for suffix in ["", "-wal", "-shm"] {
            let mut p = self.path.clone().into_os_string();
            p.push(suffix);
            let _ = fs::remove_file(p);
        }
    }
}
