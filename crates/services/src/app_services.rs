use std::sync::Arc;

use lingo_core::model::{Language, Library};
use lingo_core::stats::ProgressReport;
use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::progress_store::ProgressStore;
use crate::sessions::SessionController;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    library: Arc<Library>,
    progress: ProgressStore,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, clock))
    }

    /// Build services over a process-local store. Nothing survives exit.
    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self::from_storage(&Storage::in_memory(), clock)
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock) -> Self {
        Self {
            clock,
            library: Arc::new(Library::builtin()),
            progress: ProgressStore::new(Arc::clone(&storage.kv)),
        }
    }

    /// A fresh controller in the `Loading` state; call `startup` next.
    #[must_use]
    pub fn controller(&self) -> SessionController {
        SessionController::new(self.progress.clone(), Arc::clone(&self.library), self.clock)
    }

    /// Dashboard for a stored record, without logging in.
    ///
    /// `None` if the library has no deck for `language`.
    pub async fn report(&self, username: &str, language: Language) -> Option<ProgressReport> {
        let deck = self.library.deck(language)?;
        let record = self.progress.load(username.trim(), language).await;
        Some(ProgressReport::build(deck, &record))
    }
}
