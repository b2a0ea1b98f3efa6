use chrono::{DateTime, Utc};

use lingo_core::model::CategoryFilter;
use lingo_core::time::elapsed_secs;

/// Start/stop accumulator for time spent with a category filter selected.
///
/// At most one category runs at a time; `All` runs nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTimer {
    running: Option<(String, DateTime<Utc>)>,
}

impl CategoryTimer {
    /// Start timing `filter` (a no-op for `All`), discarding any running span.
    pub fn start(&mut self, filter: &CategoryFilter, now: DateTime<Utc>) {
        self.running = filter
            .as_category()
            .map(|category| (category.to_owned(), now));
    }

    /// Stop the running span and return its category and whole elapsed seconds.
    pub fn flush(&mut self, now: DateTime<Utc>) -> Option<(String, u64)> {
        self.running
            .take()
            .map(|(category, started)| (category, elapsed_secs(started, now)))
    }

    /// Drop the running span without reporting it.
    pub fn stop(&mut self) {
        self.running = None;
    }

    #[must_use]
    pub fn running_category(&self) -> Option<&str> {
        self.running.as_ref().map(|(category, _)| category.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use lingo_core::time::fixed_now;

    #[test]
    fn all_filter_does_not_run() {
        let mut timer = CategoryTimer::default();
        timer.start(&CategoryFilter::All, fixed_now());
        assert_eq!(timer.running_category(), None);
        assert_eq!(timer.flush(fixed_now() + Duration::seconds(30)), None);
    }

    #[test]
    fn flush_reports_elapsed_and_stops() {
        let mut timer = CategoryTimer::default();
        let t0 = fixed_now();
        timer.start(&CategoryFilter::category("Food"), t0);
        assert_eq!(timer.running_category(), Some("Food"));
        assert_eq!(
            timer.flush(t0 + Duration::seconds(65)),
            Some(("Food".to_owned(), 65))
        );
        assert_eq!(timer.flush(t0 + Duration::seconds(90)), None);
    }

    #[test]
    fn restarting_replaces_running_span() {
        let mut timer = CategoryTimer::default();
        let t0 = fixed_now();
        timer.start(&CategoryFilter::category("Food"), t0);
        timer.start(&CategoryFilter::category("Verbs"), t0 + Duration::seconds(10));
        assert_eq!(
            timer.flush(t0 + Duration::seconds(15)),
            Some(("Verbs".to_owned(), 5))
        );
    }

    #[test]
    fn stop_discards() {
        let mut timer = CategoryTimer::default();
        timer.start(&CategoryFilter::category("Food"), fixed_now());
        timer.stop();
        assert_eq!(timer.flush(fixed_now() + Duration::seconds(5)), None);
    }
}
