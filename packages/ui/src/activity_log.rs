//! Session history of every notice, kept in a context signal.
//!
//! Toasts disappear after a few seconds; the log keeps each notice with the
//! time it was raised so earlier failures can still be read. Entries can be
//! narrowed to one [`Action`].

use dioxus::prelude::*;
use store::{now_millis, Action, Notice};

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    /// Milliseconds since the Unix epoch.
    pub at_millis: u64,
    pub notice: Notice,
}

impl LogEntry {
    pub fn clock(&self) -> String {
        clock_time(self.at_millis)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivityLog {
    entries: Vec<LogEntry>,
    /// Only show entries for this action.
    pub filter: Option<Action>,
    pub visible: bool,
}

impl ActivityLog {
    pub fn record(&mut self, at_millis: u64, notice: Notice) {
        self.entries.push(LogEntry { at_millis, notice });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.filter = None;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn failures(&self) -> usize {
        self.entries.iter().filter(|e| e.notice.is_error()).count()
    }

    pub fn count(&self, action: Action) -> usize {
        self.entries
            .iter()
            .filter(|e| e.notice.action == action)
            .count()
    }

    /// Entries passing the filter, newest first.
    pub fn shown(&self) -> Vec<LogEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|e| self.filter.is_none_or(|action| e.notice.action == action))
            .cloned()
            .collect()
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

pub fn log_notice(log: &mut Signal<ActivityLog>, notice: &Notice) {
    log.write().record(now_millis(), notice.clone());
}

/// `HH:MM:SS` (UTC) of a millisecond timestamp.
fn clock_time(millis: u64) -> String {
    let secs = (millis / 1000) % 86_400;
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::ValidationError;

    fn log_of(notices: Vec<Notice>) -> ActivityLog {
        let mut log = ActivityLog::default();
        for (i, notice) in notices.into_iter().enumerate() {
            log.record(i as u64 * 1000, notice);
        }
        log
    }

    #[test]
    fn test_clock_time() {
        assert_eq!(clock_time(0), "00:00:00");
        assert_eq!(clock_time(86_400_000 + 3_723_999), "01:02:03");
    }

    #[test]
    fn test_filter_by_action_newest_first() {
        let mut log = log_of(vec![
            Notice::success(Action::Fetch),
            Notice::success(Action::Create),
            Notice::failure(Action::Delete),
            Notice::rejected(Action::Create, ValidationError::InvalidEmail),
        ]);
        assert_eq!(log.len(), 4);
        assert_eq!(log.failures(), 2);
        assert_eq!(log.count(Action::Create), 2);

        log.filter = Some(Action::Create);
        let shown = log.shown();
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[0].notice.message, "Please enter a valid email address.");
        assert_eq!(shown[1].notice.message, "User added successfully!");
        assert_eq!(shown[1].clock(), "00:00:01");
    }

    #[test]
    fn test_clear_resets_filter() {
        let mut log = log_of(vec![Notice::failure(Action::Fetch)]);
        log.filter = Some(Action::Update);
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.filter, None);
        assert!(log.shown().is_empty());
    }
}
