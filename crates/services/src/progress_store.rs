use std::sync::Arc;

use lingo_core::model::{Language, ProgressRecord};
use storage::repository::KeyValueStore;

use crate::error::ProgressStoreError;

pub const CURRENT_USER_KEY: &str = "current-user";
pub const CURRENT_LANGUAGE_KEY: &str = "current-language";

/// Storage key of the record for one (user, language) pair.
#[must_use]
pub fn progress_key(username: &str, language: Language) -> String {
    format!("progress-{username}-{}", language.key())
}

/// Key used before progress was tracked per language. Those records were
/// always Spanish.
#[must_use]
pub fn legacy_progress_key(username: &str) -> String {
    format!("progress-{username}")
}

/// True when `username`'s legacy key is also the per-language key of another
/// user (`ana-german` vs. `ana` in German).
fn legacy_key_is_ambiguous(username: &str) -> bool {
    Language::ALL.into_iter().any(|language| {
        username
            .strip_suffix(language.key())
            .is_some_and(|rest| rest.ends_with('-'))
    })
}

/// Persists `ProgressRecord`s and the resume pointers in a key-value store.
///
/// Every method touches one key per underlying call; there are no
/// cross-key transactions.
#[derive(Clone)]
pub struct ProgressStore {
    kv: Arc<dyn KeyValueStore>,
}

impl ProgressStore {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Load the record for `username` in `language`.
    ///
    /// Missing, unreadable or malformed data yields a default record.
    pub async fn load(&self, username: &str, language: Language) -> ProgressRecord {
        let key = progress_key(username, language);
        match self.kv.get(&key).await {
            Ok(Some(raw)) => decode(&key, &raw).unwrap_or_default(),
            Ok(None) => {
                log::debug!("no saved progress under {key}, starting fresh");
                ProgressRecord::default()
            }
            Err(err) => {
                log::warn!("failed to read {key}, starting fresh: {err}");
                ProgressRecord::default()
            }
        }
    }

    /// Write `record` unconditionally (last write wins).
    ///
    /// # Errors
    ///
    /// Returns `ProgressStoreError` if encoding or the storage write fails.
    pub async fn save(
        &self,
        username: &str,
        language: Language,
        record: &ProgressRecord,
    ) -> Result<(), ProgressStoreError> {
        let key = progress_key(username, language);
        let json = serde_json::to_string(record)?;
        self.kv.set(&key, &json).await?;
        log::debug!("saved {key} ({} known)", record.known_cards.len());
        Ok(())
    }

    /// Delete the record. Session pointers are left alone.
    ///
    /// # Errors
    ///
    /// Returns `ProgressStoreError` if the storage delete fails.
    pub async fn clear(&self, username: &str, language: Language) -> Result<(), ProgressStoreError> {
        self.kv.delete(&progress_key(username, language)).await?;
        Ok(())
    }

    /// The (user, language) pair to resume, if one was saved.
    ///
    /// A stored user with a missing or unknown language resumes in the
    /// default language.
    pub async fn current_session(&self) -> Option<(String, Language)> {
        let username = match self.kv.get(CURRENT_USER_KEY).await {
            Ok(Some(user)) if !user.trim().is_empty() => user,
            Ok(_) => return None,
            Err(err) => {
                log::warn!("failed to read {CURRENT_USER_KEY}: {err}");
                return None;
            }
        };

        let language = match self.kv.get(CURRENT_LANGUAGE_KEY).await {
            Ok(Some(raw)) => raw.parse::<Language>().unwrap_or_else(|err| {
                log::warn!("{err}, resuming in {}", Language::default());
                Language::default()
            }),
            Ok(None) => Language::default(),
            Err(err) => {
                log::warn!("failed to read {CURRENT_LANGUAGE_KEY}: {err}");
                Language::default()
            }
        };

        Some((username, language))
    }

    /// # Errors
    ///
    /// Returns `ProgressStoreError` if either pointer cannot be written.
    pub async fn set_current_session(
        &self,
        username: &str,
        language: Language,
    ) -> Result<(), ProgressStoreError> {
        self.kv.set(CURRENT_USER_KEY, username).await?;
        self.kv.set(CURRENT_LANGUAGE_KEY, language.key()).await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ProgressStoreError` if either pointer cannot be deleted.
    pub async fn clear_current_session(&self) -> Result<(), ProgressStoreError> {
        self.kv.delete(CURRENT_USER_KEY).await?;
        self.kv.delete(CURRENT_LANGUAGE_KEY).await?;
        Ok(())
    }

    /// Move a pre-language record (`progress-{user}`) to the Spanish key.
    ///
    /// Runs only when the Spanish record does not exist yet. A legacy value
    /// that fails to parse is kept in place, and so is any key that could be
    /// another user's per-language record. Returns whether a record moved.
    ///
    /// # Errors
    ///
    /// Returns `ProgressStoreError` if storage reads or writes fail.
    pub async fn migrate_legacy(&self, username: &str) -> Result<bool, ProgressStoreError> {
        let legacy_key = legacy_progress_key(username);
        if legacy_key_is_ambiguous(username) {
            log::debug!("{legacy_key} may belong to another user, not migrating");
            return Ok(false);
        }
        let Some(raw) = self.kv.get(&legacy_key).await? else {
            return Ok(false);
        };

        let target = Language::Spanish;
        if self.kv.get(&progress_key(username, target)).await?.is_some() {
            log::debug!("{legacy_key} left in place, {target} record already exists");
            return Ok(false);
        }

        let Some(record) = decode(&legacy_key, &raw) else {
            return Ok(false);
        };

        self.save(username, target, &record).await?;
        self.kv.delete(&legacy_key).await?;
        log::info!("migrated {legacy_key} to {}", progress_key(username, target));
        Ok(true)
    }
}

fn decode(key: &str, raw: &str) -> Option<ProgressRecord> {
    match serde_json::from_str(raw) {
        Ok(record) => Some(record),
        Err(err) => {
            log::warn!("malformed progress under {key}, treating as absent: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingo_core::model::{CardId, CategoryFilter};
    use lingo_core::time::fixed_now;
    use storage::repository::InMemoryStore;

    fn store() -> (ProgressStore, InMemoryStore) {
        let kv = InMemoryStore::new();
        (ProgressStore::new(Arc::new(kv.clone())), kv)
    }

    fn sample_record() -> ProgressRecord {
        let mut record = ProgressRecord {
            current_card: 2,
            filter: CategoryFilter::category("Food"),
            last_accessed: Some(fixed_now()),
            ..ProgressRecord::default()
        };
        record.known_cards.extend([CardId::new(7), CardId::new(1), CardId::new(30)]);
        record.add_category_time("Food", 65);
        record.add_category_time("Verbs", 12);
        record
    }

    #[test]
    fn key_scheme() {
        assert_eq!(progress_key("ana", Language::German), "progress-ana-german");
        assert_eq!(legacy_progress_key("ana"), "progress-ana");
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let (store, _) = store();
        let record = sample_record();
        store.save("ana", Language::Spanish, &record).await.unwrap();
        assert_eq!(store.load("ana", Language::Spanish).await, record);
    }

    #[tokio::test]
    async fn records_are_per_language() {
        let (store, _) = store();
        store
            .save("ana", Language::Spanish, &sample_record())
            .await
            .unwrap();
        assert_eq!(
            store.load("ana", Language::Italian).await,
            ProgressRecord::default()
        );
        assert_eq!(
            store.load("luis", Language::Spanish).await,
            ProgressRecord::default()
        );
    }

    #[tokio::test]
    async fn malformed_json_loads_defaults() {
        let (store, kv) = store();
        kv.set("progress-ana-spanish", "{not json").await.unwrap();
        assert_eq!(
            store.load("ana", Language::Spanish).await,
            ProgressRecord::default()
        );
        kv.set("progress-ana-spanish", r#"{"knownCards":[-1]}"#)
            .await
            .unwrap();
        assert_eq!(
            store.load("ana", Language::Spanish).await,
            ProgressRecord::default()
        );
    }

    #[tokio::test]
    async fn clear_keeps_session_pointers() {
        let (store, kv) = store();
        store.set_current_session("ana", Language::German).await.unwrap();
        store
            .save("ana", Language::German, &sample_record())
            .await
            .unwrap();

        store.clear("ana", Language::German).await.unwrap();

        assert_eq!(kv.get("progress-ana-german").await.unwrap(), None);
        assert_eq!(
            store.current_session().await,
            Some(("ana".to_owned(), Language::German))
        );
    }

    #[tokio::test]
    async fn session_pointers_round_trip() {
        let (store, kv) = store();
        assert_eq!(store.current_session().await, None);

        store.set_current_session("ana", Language::Canadian).await.unwrap();
        assert_eq!(kv.get(CURRENT_LANGUAGE_KEY).await.unwrap().as_deref(), Some("canadian"));
        assert_eq!(
            store.current_session().await,
            Some(("ana".to_owned(), Language::Canadian))
        );

        store.clear_current_session().await.unwrap();
        assert_eq!(store.current_session().await, None);
        assert!(kv.is_empty().unwrap());
    }

    #[tokio::test]
    async fn user_without_language_resumes_in_default() {
        let (store, kv) = store();
        kv.set(CURRENT_USER_KEY, "ana").await.unwrap();
        assert_eq!(
            store.current_session().await,
            Some(("ana".to_owned(), Language::Spanish))
        );
        kv.set(CURRENT_LANGUAGE_KEY, "klingon").await.unwrap();
        assert_eq!(
            store.current_session().await,
            Some(("ana".to_owned(), Language::Spanish))
        );
    }

    #[tokio::test]
    async fn legacy_record_moves_to_spanish_key() {
        let (store, kv) = store();
        kv.set(
            "progress-ana",
            r#"{"currentCard":3,"knownCards":[0,4],"filterCategory":"Verbs","lastAccessed":"2023-11-14T22:13:20Z"}"#,
        )
        .await
        .unwrap();

        assert!(store.migrate_legacy("ana").await.unwrap());

        let record = store.load("ana", Language::Spanish).await;
        assert_eq!(record.current_card, 3);
        assert_eq!(record.known_cards.len(), 2);
        assert_eq!(record.filter, CategoryFilter::category("Verbs"));
        assert_eq!(kv.get("progress-ana").await.unwrap(), None);

        assert!(!store.migrate_legacy("ana").await.unwrap());
    }

    #[tokio::test]
    async fn legacy_record_never_overwrites_new_record() {
        let (store, kv) = store();
        kv.set("progress-ana", r#"{"knownCards":[0]}"#).await.unwrap();
        store
            .save("ana", Language::Spanish, &sample_record())
            .await
            .unwrap();

        assert!(!store.migrate_legacy("ana").await.unwrap());
        assert_eq!(store.load("ana", Language::Spanish).await, sample_record());
        assert!(kv.get("progress-ana").await.unwrap().is_some());
    }

    #[test]
    fn ambiguous_legacy_keys() {
        assert!(legacy_key_is_ambiguous("ana-german"));
        assert!(legacy_key_is_ambiguous("a-b-spanish"));
        assert!(!legacy_key_is_ambiguous("ana"));
        assert!(!legacy_key_is_ambiguous("german"));
        assert!(!legacy_key_is_ambiguous("anagerman"));
    }

    #[tokio::test]
    async fn legacy_migration_leaves_other_users_records() {
        let (store, kv) = store();
        store
            .save("ana", Language::German, &sample_record())
            .await
            .unwrap();

        assert!(!store.migrate_legacy("ana-german").await.unwrap());

        assert_eq!(store.load("ana", Language::German).await, sample_record());
        assert_eq!(kv.get("progress-ana-german-spanish").await.unwrap(), None);
    }

    #[tokio::test]
    async fn malformed_legacy_record_is_kept() {
        let (store, kv) = store();
        kv.set("progress-ana", "garbage").await.unwrap();
        assert!(!store.migrate_legacy("ana").await.unwrap());
        assert_eq!(kv.get("progress-ana").await.unwrap().as_deref(), Some("garbage"));
    }
}
