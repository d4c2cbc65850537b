//! Completed-run history
//!
//! Persisted to LocalStorage, newest first, capped to a small number of
//! entries. Purely informational - the server keeps the real records.

use serde::{Deserialize, Serialize};

/// Maximum number of past runs to keep
pub const MAX_HISTORY_ENTRIES: usize = 20;

/// A single completed run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub run_id: String,
    pub solved: u32,
    pub len: u32,
    pub time_seconds: u64,
    /// Unix timestamp (ms) when the run finished
    pub timestamp: f64,
}

/// Past runs, newest first
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RunHistory {
    pub entries: Vec<HistoryEntry>,
}

impl RunHistory {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "geochessr_history";

    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a finished run, trimming the oldest entries
    pub fn add(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_HISTORY_ENTRIES);
    }

    /// Best solved count over any past run of the same length
    pub fn best_solved(&self, len: u32) -> Option<u32> {
        self.entries
            .iter()
            .filter(|e| e.len == len)
            .map(|e| e.solved)
            .max()
    }

    /// Most recent finished run
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load history from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(history) = serde_json::from_str::<RunHistory>(&json) {
                    log::info!("Loaded {} past runs", history.entries.len());
                    return history;
                }
            }
        }

        log::info!("No run history found, starting fresh");
        Self::new()
    }

    /// Save history to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Run history saved ({} entries)", self.entries.len());
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

/// Format a timestamp as a relative date string
#[cfg(target_arch = "wasm32")]
pub fn format_date(timestamp: f64) -> String {
    let now = js_sys::Date::now();
    let diff_secs = (now - timestamp) / 1000.0;
    let diff_mins = diff_secs / 60.0;
    let diff_hours = diff_mins / 60.0;
    let diff_days = diff_hours / 24.0;

    if diff_days >= 1.0 {
        let days = diff_days.floor() as i32;
        if days == 1 {
            "Yesterday".to_string()
        } else if days < 7 {
            format!("{} days ago", days)
        } else {
            let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp));
            format!(
                "{}/{}/{}",
                date.get_month() + 1,
                date.get_date(),
                date.get_full_year() % 100
            )
        }
    } else if diff_hours >= 1.0 {
        let hours = diff_hours.floor() as i32;
        if hours == 1 {
            "1 hour ago".to_string()
        } else {
            format!("{} hours ago", hours)
        }
    } else if diff_mins >= 1.0 {
        let mins = diff_mins.floor() as i32;
        if mins == 1 {
            "1 min ago".to_string()
        } else {
            format!("{} mins ago", mins)
        }
    } else {
        "Just now".to_string()
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn format_date(_timestamp: f64) -> String {
    "N/A".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(solved: u32, len: u32, ts: f64) -> HistoryEntry {
        HistoryEntry {
            run_id: "ABCDEFGH".into(),
            solved,
            len,
            time_seconds: 120,
            timestamp: ts,
        }
    }

    #[test]
    fn test_add_keeps_newest_first() {
        let mut history = RunHistory::new();
        history.add(entry(2, 5, 1.0));
        history.add(entry(4, 5, 2.0));
        assert_eq!(history.last().unwrap().solved, 4);
        assert_eq!(history.entries.len(), 2);
    }

    #[test]
    fn test_add_truncates() {
        let mut history = RunHistory::new();
        for i in 0..(MAX_HISTORY_ENTRIES + 5) {
            history.add(entry(i as u32, 5, i as f64));
        }
        assert_eq!(history.entries.len(), MAX_HISTORY_ENTRIES);
        // Newest entry survived
        assert_eq!(
            history.last().unwrap().solved,
            (MAX_HISTORY_ENTRIES + 4) as u32
        );
    }

    #[test]
    fn test_best_solved_filters_by_length() {
        let mut history = RunHistory::new();
        history.add(entry(3, 5, 1.0));
        history.add(entry(4, 5, 2.0));
        history.add(entry(9, 10, 3.0));
        assert_eq!(history.best_solved(5), Some(4));
        assert_eq!(history.best_solved(10), Some(9));
        assert_eq!(history.best_solved(3), None);
    }
}
