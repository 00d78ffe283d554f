//! Ordered sequence of pending notifications.

use std::fmt;
use std::time::Duration;

/// Stable identity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlertId(pub u64);

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A pending notification.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertEntry {
    pub id: AlertId,
    /// Title.
    pub message: String,
    /// Body text.
    pub description: String,
    /// Display time; `None` stays until dismissed.
    pub duration: Option<Duration>,
}

impl AlertEntry {
    /// Build an entry. Non-positive or non-finite seconds mean "sticky";
    /// lengths beyond `Duration::MAX` saturate.
    pub fn new(
        id: AlertId,
        message: impl Into<String>,
        description: impl Into<String>,
        duration_secs: f64,
    ) -> Self {
        let duration = (duration_secs.is_finite() && duration_secs > 0.0)
            .then(|| Duration::try_from_secs_f64(duration_secs).unwrap_or(Duration::MAX));
        Self {
            id,
            message: message.into(),
            description: description.into(),
            duration,
        }
    }

    /// Whether this entry dismisses itself.
    pub fn is_timed(&self) -> bool {
        self.duration.is_some()
    }
}

/// Notifications in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertQueue {
    entries: Vec<AlertEntry>,
}

impl AlertQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entry` at the end.
    pub fn push(&mut self, entry: AlertEntry) {
        self.entries.push(entry);
    }

    /// Remove the entry with `id`.
    pub fn remove(&mut self, id: AlertId) -> Option<AlertEntry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Remove the entry at `index`; out of bounds is a no-op.
    pub fn remove_at(&mut self, index: usize) -> Option<AlertEntry> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    pub fn get(&self, id: AlertId) -> Option<&AlertEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: AlertId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AlertEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64, message: &str) -> AlertEntry {
        AlertEntry::new(AlertId(id), message, "", 5.0)
    }

    fn messages(queue: &AlertQueue) -> Vec<&str> {
        queue.iter().map(|e| e.message.as_str()).collect()
    }

    #[test]
    fn test_push_preserves_order() {
        let mut queue = AlertQueue::new();
        queue.push(entry(1, "a"));
        queue.push(entry(2, "c"));
        assert_eq!(messages(&queue), vec!["a", "c"]);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_remove_at_out_of_bounds_is_noop() {
        let mut queue = AlertQueue::new();
        queue.push(entry(1, "a"));
        assert!(queue.remove_at(1).is_none());
        assert!(queue.remove_at(usize::MAX).is_none());
        assert_eq!(messages(&queue), vec!["a"]);

        assert_eq!(queue.remove_at(0).unwrap().message, "a");
        assert!(queue.is_empty());
        assert!(queue.remove_at(0).is_none());
    }

    #[test]
    fn test_remove_by_id_targets_entry() {
        let mut queue = AlertQueue::new();
        queue.push(entry(1, "a"));
        queue.push(entry(2, "b"));
        queue.push(entry(3, "c"));

        assert_eq!(queue.remove(AlertId(2)).unwrap().message, "b");
        assert!(queue.remove(AlertId(2)).is_none());
        assert_eq!(messages(&queue), vec!["a", "c"]);
    }

    #[test]
    fn test_positional_removal_after_earlier_removal_hits_neighbour() {
        let mut queue = AlertQueue::new();
        queue.push(entry(1, "first"));
        queue.push(entry(2, "second"));
        queue.push(entry(3, "third"));

        // A handler that captured index 2 for "third" fires after "first" left.
        queue.remove_at(0);
        assert!(queue.remove_at(2).is_none());
        assert_eq!(messages(&queue), vec!["second", "third"]);

        // The same handler with index 1 would remove the wrong entry.
        assert_eq!(queue.remove_at(1).unwrap().message, "third");
    }

    #[test]
    fn test_duration_normalisation() {
        assert_eq!(entry(1, "a").duration, Some(Duration::from_secs(5)));
        for secs in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            assert!(!AlertEntry::new(AlertId(1), "a", "", secs).is_timed());
        }
    }

    #[test]
    fn test_oversized_duration_saturates() {
        let huge = AlertEntry::new(AlertId(1), "a", "", 1e20);
        assert_eq!(huge.duration, Some(Duration::MAX));
        let max = AlertEntry::new(AlertId(2), "a", "", f64::MAX);
        assert_eq!(max.duration, Some(Duration::MAX));
    }
}
