use chrono::{DateTime, Utc};

use lingo_core::model::{CategoryFilter, Deck, Flashcard, Language, ProgressRecord};

use super::timer::CategoryTimer;
use crate::error::SessionError;

//
// ─── SCREENS ───────────────────────────────────────────────────────────────────
//

/// The two mutually exclusive views of a logged-in session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Cards,
    Dashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Loading,
    LoggedOut,
    LoggedIn(View),
}

/// What the effectful shell must do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Effect {
    None,
    Save,
}

impl Effect {
    #[must_use]
    pub fn needs_save(self) -> bool {
        matches!(self, Effect::Save)
    }

    pub fn or(self, other: Effect) -> Effect {
        if self.needs_save() || other.needs_save() {
            Effect::Save
        } else {
            Effect::None
        }
    }
}

//
// ─── SESSION STATE ─────────────────────────────────────────────────────────────
//

/// The whole in-memory session.
///
/// Transitions are plain methods over the active deck and the current instant;
/// storage is handled by `SessionController`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    screen: Screen,
    username: String,
    language: Language,
    is_loading_progress: bool,
    is_flipped: bool,
    progress: ProgressRecord,
    timer: CategoryTimer,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// A fresh state waiting for the startup load.
    #[must_use]
    pub fn new() -> Self {
        Self {
            screen: Screen::Loading,
            username: String::new(),
            language: Language::default(),
            is_loading_progress: true,
            is_flipped: false,
            progress: ProgressRecord::default(),
            timer: CategoryTimer::default(),
        }
    }

    /// Trim and validate a login name.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyUsername` for empty or whitespace-only input.
    pub fn validate_username(raw: &str) -> Result<String, SessionError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SessionError::EmptyUsername);
        }
        Ok(trimmed.to_owned())
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        matches!(self.screen, Screen::LoggedIn(_))
    }

    /// Active user, if logged in.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.is_logged_in().then_some(self.username.as_str())
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn is_loading_progress(&self) -> bool {
        self.is_loading_progress
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.is_flipped
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressRecord {
        &self.progress
    }

    #[must_use]
    pub fn filter(&self) -> &CategoryFilter {
        &self.progress.filter
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.progress.current_card
    }

    #[must_use]
    pub fn timer(&self) -> &CategoryTimer {
        &self.timer
    }

    /// The card shown at the current position of the filtered view.
    #[must_use]
    pub fn current_card<'d>(&self, deck: &'d Deck) -> Option<&'d Flashcard> {
        deck.filtered(&self.progress.filter)
            .get(self.progress.current_card)
            .copied()
    }

    fn require_logged_in(&self) -> Result<(), SessionError> {
        if self.is_logged_in() {
            Ok(())
        } else {
            Err(SessionError::NotLoggedIn)
        }
    }

    //
    // ─── LOADING ───────────────────────────────────────────────────────────────
    //

    /// Arm the loading guard for `username`/`language` ahead of a record load.
    pub fn begin_load(&mut self, username: String, language: Language) {
        self.username = username;
        self.language = language;
        self.is_loading_progress = true;
        self.is_flipped = false;
    }

    /// Install a loaded record and enter the card view.
    ///
    /// Known ids outside `deck` are dropped and an out-of-range position
    /// restarts at the first card.
    pub fn finish_load(&mut self, mut record: ProgressRecord, deck: &Deck, now: DateTime<Utc>) {
        let dropped = record.retain_cards_in(deck);
        if dropped > 0 {
            log::warn!(
                "dropped {dropped} known card ids outside the {} deck",
                deck.language()
            );
        }
        let view_len = deck.filtered(&record.filter).len();
        if view_len > 0 && record.current_card >= view_len {
            record.current_card = 0;
        }

        if deck.accepts_filter(&record.filter) {
            self.timer.start(&record.filter, now);
        } else {
            log::warn!("saved filter {} matches no {} cards", record.filter, deck.language());
            self.timer.stop();
        }
        self.progress = record;
        self.is_flipped = false;
        self.is_loading_progress = false;
        self.screen = Screen::LoggedIn(View::Cards);
    }

    /// Return to the login screen with every field at its default.
    pub fn logged_out(&mut self) {
        *self = Self {
            screen: Screen::LoggedOut,
            is_loading_progress: false,
            ..Self::new()
        };
    }

    /// Reset position, filter and flip for a new language and arm the loading guard.
    ///
    /// Known cards and category time are not carried over; they come from the
    /// record loaded next.
    pub fn begin_language_switch(&mut self, language: Language) {
        self.timer.stop();
        self.progress = ProgressRecord::default();
        self.is_flipped = false;
        self.language = language;
        self.is_loading_progress = true;
    }

    //
    // ─── CATEGORY TIME ─────────────────────────────────────────────────────────
    //

    /// Stop the category timer and add its span to the record.
    pub fn flush_timer(&mut self, now: DateTime<Utc>) -> Effect {
        match self.timer.flush(now) {
            Some((category, secs)) if secs > 0 => {
                self.progress.add_category_time(&category, secs);
                Effect::Save
            }
            _ => Effect::None,
        }
    }

    /// Bank the running span and keep timing the same category.
    pub fn checkpoint_timer(&mut self, now: DateTime<Utc>) -> Effect {
        let was_running = self.timer.running_category().is_some();
        let effect = self.flush_timer(now);
        if was_running {
            self.timer.start(&self.progress.filter, now);
        }
        effect
    }

    //
    // ─── TRANSITIONS ───────────────────────────────────────────────────────────
    //

    /// Select `All` or a category of `deck`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotLoggedIn` or `SessionError::UnknownCategory`.
    pub fn set_category(
        &mut self,
        deck: &Deck,
        category: &str,
        now: DateTime<Utc>,
    ) -> Result<Effect, SessionError> {
        self.require_logged_in()?;
        let filter = CategoryFilter::category(category);
        if !deck.accepts_filter(&filter) {
            return Err(SessionError::UnknownCategory(category.to_owned()));
        }

        let _ = self.flush_timer(now);
        self.timer.start(&filter, now);
        self.progress.filter = filter;
        self.progress.current_card = 0;
        self.is_flipped = false;
        Ok(Effect::Save)
    }

    /// Advance with wraparound. A no-op on an empty view.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotLoggedIn`.
    pub fn next(&mut self, deck: &Deck) -> Result<Effect, SessionError> {
        self.require_logged_in()?;
        self.is_flipped = false;
        let n = deck.filtered(&self.progress.filter).len();
        if n == 0 {
            return Ok(Effect::None);
        }
        self.progress.current_card = (self.progress.current_card % n + 1) % n;
        Ok(Effect::Save)
    }

    /// Retreat with wraparound. A no-op on an empty view.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotLoggedIn`.
    pub fn previous(&mut self, deck: &Deck) -> Result<Effect, SessionError> {
        self.require_logged_in()?;
        self.is_flipped = false;
        let n = deck.filtered(&self.progress.filter).len();
        if n == 0 {
            return Ok(Effect::None);
        }
        self.progress.current_card = (self.progress.current_card % n + n - 1) % n;
        Ok(Effect::Save)
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotLoggedIn`.
    pub fn flip(&mut self) -> Result<(), SessionError> {
        self.require_logged_in()?;
        self.is_flipped = !self.is_flipped;
        Ok(())
    }

    /// Toggle the displayed card's id in the known set.
    ///
    /// Returns the card's new known state, or `None` on an empty view.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotLoggedIn`.
    pub fn toggle_known(&mut self, deck: &Deck) -> Result<Option<bool>, SessionError> {
        self.require_logged_in()?;
        let Some(id) = self.current_card(deck).map(Flashcard::id) else {
            return Ok(None);
        };
        Ok(Some(self.progress.toggle_known(id)))
    }

    /// Clear known cards, time, position and filter.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotLoggedIn`.
    pub fn reset_progress(&mut self) -> Result<(), SessionError> {
        self.require_logged_in()?;
        self.timer.stop();
        self.progress = ProgressRecord::default();
        self.is_flipped = false;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotLoggedIn`.
    pub fn show_dashboard(&mut self, now: DateTime<Utc>) -> Result<Effect, SessionError> {
        self.require_logged_in()?;
        self.screen = Screen::LoggedIn(View::Dashboard);
        Ok(self.checkpoint_timer(now))
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotLoggedIn`.
    pub fn show_cards(&mut self) -> Result<(), SessionError> {
        self.require_logged_in()?;
        self.screen = Screen::LoggedIn(View::Cards);
        Ok(())
    }

    /// Stamp the access time and return the record to persist.
    pub fn record_for_save(&mut self, now: DateTime<Utc>) -> ProgressRecord {
        self.progress.last_accessed = Some(now);
        self.progress.clone()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
