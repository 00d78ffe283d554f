//! Terminal notification surface.

use std::collections::HashSet;

use backoffice_state::{AlertEntry, AlertId, AlertSurface};

/// Prints notifications to stderr.
///
/// A terminal cannot take lines back, so `clear` only resets what is
/// considered visible and `show` prints entries not printed before.
#[derive(Debug, Default)]
pub struct ConsoleSurface {
    visible: Vec<AlertId>,
    printed: HashSet<AlertId>,
}

impl ConsoleSurface {
    pub fn visible(&self) -> &[AlertId] {
        &self.visible
    }
}

impl AlertSurface for ConsoleSurface {
    fn clear(&mut self) {
        self.visible.clear();
    }

    fn show(&mut self, entry: &AlertEntry) {
        self.visible.push(entry.id);
        if self.printed.insert(entry.id) {
            if entry.description.is_empty() {
                eprintln!("\n  ▌ {}\n", entry.message);
            } else {
                eprintln!("\n  ▌ {}: {}\n", entry.message, entry.description);
            }
        }
    }
}
