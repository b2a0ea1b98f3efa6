use std::sync::Arc;

use lingo_core::model::{Deck, Language, Library};
use lingo_core::stats::ProgressReport;

use super::state::{Effect, Screen, SessionState};
use super::view::CardView;
use crate::Clock;
use crate::error::SessionError;
use crate::progress_store::ProgressStore;

/// Drives a `SessionState` and persists it through a `ProgressStore`.
///
/// Storage failures never surface from here: they are logged and the
/// in-memory state stays authoritative.
pub struct SessionController {
    store: ProgressStore,
    library: Arc<Library>,
    clock: Clock,
    state: SessionState,
}

impl SessionController {
    #[must_use]
    pub fn new(store: ProgressStore, library: Arc<Library>, clock: Clock) -> Self {
        Self {
            store,
            library,
            clock,
            state: SessionState::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Mutable access to the clock, for advancing fixed test clocks.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    //
    // ─── LIFECYCLE ─────────────────────────────────────────────────────────────
    //

    /// Resume the saved session, or show the login screen.
    ///
    /// Only acts while the state is still `Loading`.
    pub async fn startup(&mut self) {
        if self.state.screen() != Screen::Loading {
            return;
        }

        match self.store.current_session().await {
            Some((username, language)) if self.library.deck(language).is_some() => {
                log::debug!("resuming session for {username} in {language}");
                self.load(username, language).await;
            }
            Some((username, language)) => {
                log::warn!("cannot resume {username}: no deck for {language}");
                self.state.logged_out();
            }
            None => self.state.logged_out(),
        }
    }

    /// # Errors
    ///
    /// Returns `SessionError::AlreadyLoggedIn`, `SessionError::EmptyUsername`
    /// or `SessionError::UnsupportedLanguage`.
    pub async fn login(&mut self, username: &str, language: Language) -> Result<(), SessionError> {
        if let Some(current) = self.state.username() {
            return Err(SessionError::AlreadyLoggedIn(current.to_owned()));
        }
        let username = SessionState::validate_username(username)?;
        if self.library.deck(language).is_none() {
            return Err(SessionError::UnsupportedLanguage(language));
        }

        if let Err(err) = self.store.set_current_session(&username, language).await {
            log::error!("failed to store session pointers for {username}: {err}");
        }
        self.load(username, language).await;
        Ok(())
    }

    /// Save once more, forget the session pointers and return to the login screen.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotLoggedIn`.
    pub async fn logout(&mut self) -> Result<(), SessionError> {
        if !self.state.is_logged_in() {
            return Err(SessionError::NotLoggedIn);
        }
        let _ = self.state.flush_timer(self.clock.now());
        self.persist(Effect::Save).await;

        if let Err(err) = self.store.clear_current_session().await {
            log::error!("failed to clear session pointers: {err}");
        }
        self.state.logged_out();
        log::debug!("logged out");
        Ok(())
    }

    /// Bank the running category span and save, staying logged in.
    ///
    /// For front ends that exit without logging out; the next `startup`
    /// resumes from what is saved here. A no-op when logged out.
    pub async fn suspend(&mut self) {
        if !self.state.is_logged_in() {
            return;
        }
        let _ = self.state.flush_timer(self.clock.now());
        self.persist(Effect::Save).await;
        log::debug!("session suspended");
    }

    /// Save under the current language, then load the record for `language`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotLoggedIn` or `SessionError::UnsupportedLanguage`.
    pub async fn switch_language(&mut self, language: Language) -> Result<(), SessionError> {
        let Some(username) = self.state.username().map(str::to_owned) else {
            return Err(SessionError::NotLoggedIn);
        };
        if language == self.state.language() {
            return Ok(());
        }
        if self.library.deck(language).is_none() {
            return Err(SessionError::UnsupportedLanguage(language));
        }

        let _ = self.state.flush_timer(self.clock.now());
        self.persist(Effect::Save).await;

        self.state.begin_language_switch(language);
        if let Err(err) = self.store.set_current_session(&username, language).await {
            log::error!("failed to store session pointers for {username}: {err}");
        }
        self.load(username, language).await;
        Ok(())
    }

    //
    // ─── STUDY ─────────────────────────────────────────────────────────────────
    //

    /// Filter the deck to `category`, or to every card with `"All"`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotLoggedIn` or `SessionError::UnknownCategory`.
    pub async fn set_category(&mut self, category: &str) -> Result<(), SessionError> {
        let now = self.clock.now();
        let deck = active_deck(&self.library, &self.state)?;
        let effect = self.state.set_category(deck, category, now)?;
        self.persist(effect).await;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotLoggedIn`.
    pub async fn next(&mut self) -> Result<(), SessionError> {
        let deck = active_deck(&self.library, &self.state)?;
        let effect = self.state.next(deck)?;
        self.persist(effect).await;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotLoggedIn`.
    pub async fn previous(&mut self) -> Result<(), SessionError> {
        let deck = active_deck(&self.library, &self.state)?;
        let effect = self.state.previous(deck)?;
        self.persist(effect).await;
        Ok(())
    }

    /// Flip is view-only and never saved.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotLoggedIn`.
    pub fn flip(&mut self) -> Result<(), SessionError> {
        self.state.flip()
    }

    /// Returns the displayed card's new known state, `None` on an empty view.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotLoggedIn`.
    pub async fn toggle_known(&mut self) -> Result<Option<bool>, SessionError> {
        let deck = active_deck(&self.library, &self.state)?;
        let toggled = self.state.toggle_known(deck)?;
        if toggled.is_some() {
            self.persist(Effect::Save).await;
        }
        Ok(toggled)
    }

    /// Clear progress for the current user and language and delete the stored record.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotLoggedIn`.
    pub async fn reset_progress(&mut self) -> Result<(), SessionError> {
        self.state.reset_progress()?;
        if let Some(username) = self.state.username() {
            let language = self.state.language();
            match self.store.clear(username, language).await {
                Ok(()) => log::info!("reset {language} progress for {username}"),
                Err(err) => log::error!("failed to delete progress for {username}: {err}"),
            }
        }
        Ok(())
    }

    /// Switch to the dashboard and return its report.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotLoggedIn` or `SessionError::UnsupportedLanguage`.
    pub async fn show_dashboard(&mut self) -> Result<ProgressReport, SessionError> {
        let deck = active_deck(&self.library, &self.state)?;
        let effect = self.state.show_dashboard(self.clock.now())?;
        let report = ProgressReport::build(deck, self.state.progress());
        self.persist(effect).await;
        Ok(report)
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotLoggedIn`.
    pub fn show_cards(&mut self) -> Result<(), SessionError> {
        self.state.show_cards()
    }

    //
    // ─── READ MODELS ───────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn card_view(&self) -> Option<CardView> {
        let deck = self.library.deck(self.state.language())?;
        CardView::build(&self.state, deck)
    }

    /// Statistics for the active deck and record. `None` unless logged in.
    #[must_use]
    pub fn dashboard(&self) -> Option<ProgressReport> {
        if !self.state.is_logged_in() {
            return None;
        }
        let deck = self.library.deck(self.state.language())?;
        Some(ProgressReport::build(deck, self.state.progress()))
    }

    //
    // ─── PERSISTENCE ───────────────────────────────────────────────────────────
    //

    async fn load(&mut self, username: String, language: Language) {
        self.state.begin_load(username.clone(), language);

        if language == Language::Spanish {
            if let Err(err) = self.store.migrate_legacy(&username).await {
                log::error!("legacy progress migration failed for {username}: {err}");
            }
        }
        let record = self.store.load(&username, language).await;

        let Some(deck) = self.library.deck(language) else {
            log::error!("no deck for {language}, staying logged out");
            self.state.logged_out();
            return;
        };
        self.state.finish_load(record, deck, self.clock.now());
        log::debug!("loaded {language} progress for {username}");

        self.persist(Effect::Save).await;
    }

    async fn persist(&mut self, effect: Effect) {
        if !effect.needs_save() || self.state.is_loading_progress() || !self.state.is_logged_in() {
            return;
        }
        let record = self.state.record_for_save(self.clock.now());
        let Some(username) = self.state.username() else {
            return;
        };
        if let Err(err) = self
            .store
            .save(username, self.state.language(), &record)
            .await
        {
            log::error!("failed to save progress for {username}: {err}");
        }
    }
}

fn active_deck<'a>(library: &'a Library, state: &SessionState) -> Result<&'a Deck, SessionError> {
    if !state.is_logged_in() {
        return Err(SessionError::NotLoggedIn);
    }
    library
        .deck(state.language())
        .ok_or(SessionError::UnsupportedLanguage(state.language()))
}
