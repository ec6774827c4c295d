//! Bounded in-session password history.
//!
//! Owned by the interactive layer; the synthesis core never sees it.
//! Entries live only in memory and are zeroized as they leave.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use zeroize::Zeroize;

/// Most recent passwords kept.
pub const CAPACITY: usize = 10;

pub struct Entry {
    password: String,
    created: Instant,
}

impl Entry {
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn age(&self) -> Duration {
        self.created.elapsed()
    }
}

impl Drop for Entry {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

/// Newest-first ordered sequence, capped at [`CAPACITY`].
#[derive(Default)]
pub struct History {
    entries: VecDeque<Entry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of the password; the oldest entry is dropped (and
    /// zeroized) once the cap is exceeded.
    pub fn push(&mut self, password: String) {
        self.entries.push_front(Entry {
            password,
            created: Instant::now(),
        });
        self.entries.truncate(CAPACITY);
    }

    pub fn latest(&self) -> Option<&Entry> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        // Entry::drop zeroizes each password.
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_first_ordering() {
        let mut history = History::new();
        history.push("first".into());
        history.push("second".into());
        assert_eq!(history.latest().unwrap().password(), "second");
        let all: Vec<&str> = history.iter().map(|e| e.password()).collect();
        assert_eq!(all, vec!["second", "first"]);
    }

    #[test]
    fn capacity_is_enforced() {
        let mut history = History::new();
        for i in 0..25 {
            history.push(format!("pass-{i}"));
        }
        assert_eq!(history.len(), CAPACITY);
        assert_eq!(history.latest().unwrap().password(), "pass-24");
        // Oldest kept entry is 24 - (CAPACITY - 1).
        let oldest = history.iter().last().unwrap();
        assert_eq!(oldest.password(), "pass-15");
    }

    #[test]
    fn clear_empties() {
        let mut history = History::new();
        history.push("secret".into());
        assert!(!history.is_empty());
        history.clear();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }
}
