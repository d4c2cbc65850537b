//! Run bookkeeping
//!
//! Client-side mirror of the server's puzzle sequence. The server owns the
//! run; this state is synchronized opportunistically from API replies and
//! only exists for the lifetime of the page.

use serde::{Deserialize, Serialize};

/// Where the app currently stands in the puzzle flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Fetching the next puzzle
    Loading,
    /// Pointer/touch moves update the candidate placement
    Aiming,
    /// Guess submitted, waiting on the server verdict
    Checking,
    /// Verdict shown; waiting for the player to advance
    Revealed,
    /// All puzzles answered, summary on screen
    Summary,
}

/// Outcome of a single answered puzzle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleRecord {
    pub puzzle_id: i64,
    pub success: bool,
    /// Submitted fragment origin (x, y)
    pub guess: (u8, u8),
    /// Correct fragment origin (x, y)
    pub answer: (u8, u8),
    /// Time from puzzle shown to verdict received
    pub time_ms: f64,
}

/// Client-side state of a multi-puzzle run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunState {
    pub run_id: String,
    /// Index of the next puzzle to fetch (0-based)
    pub index: u32,
    /// Puzzles in the run, per the server
    pub len: u32,
    pub records: Vec<PuzzleRecord>,
    /// Page clock (ms) when the run started
    pub started_at_ms: f64,
}

impl RunState {
    pub fn new(run_id: String, len: u32, now_ms: f64) -> Self {
        Self {
            run_id,
            index: 0,
            len,
            records: Vec::new(),
            started_at_ms: now_ms,
        }
    }

    /// Adopt the server's view of progress; replies are authoritative
    pub fn sync_progress(&mut self, index: u32, len: u32) {
        self.index = index;
        self.len = len;
    }

    /// Store a verdict and advance to the next puzzle
    pub fn record(&mut self, record: PuzzleRecord) {
        self.records.push(record);
        self.index += 1;
    }

    pub fn is_complete(&self) -> bool {
        self.records.len() as u32 >= self.len
    }

    pub fn solved_count(&self) -> u32 {
        self.records.iter().filter(|r| r.success).count() as u32
    }

    pub fn elapsed_seconds(&self, now_ms: f64) -> u64 {
        ((now_ms - self.started_at_ms) / 1000.0).max(0.0) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(success: bool) -> PuzzleRecord {
        PuzzleRecord {
            puzzle_id: 42,
            success,
            guess: (1, 2),
            answer: (3, 4),
            time_ms: 1500.0,
        }
    }

    #[test]
    fn test_record_advances_index() {
        let mut run = RunState::new("ABCDEFGH".into(), 3, 0.0);
        assert_eq!(run.index, 0);
        assert!(!run.is_complete());

        run.record(record(true));
        run.record(record(false));
        assert_eq!(run.index, 2);
        assert_eq!(run.solved_count(), 1);
        assert!(!run.is_complete());

        run.record(record(true));
        assert!(run.is_complete());
        assert_eq!(run.solved_count(), 2);
    }

    #[test]
    fn test_sync_progress_is_authoritative() {
        let mut run = RunState::new("ABCDEFGH".into(), 3, 0.0);
        run.sync_progress(2, 5);
        assert_eq!(run.index, 2);
        assert_eq!(run.len, 5);
    }

    #[test]
    fn test_elapsed_seconds() {
        let run = RunState::new("ABCDEFGH".into(), 3, 10_000.0);
        assert_eq!(run.elapsed_seconds(95_500.0), 85);
        // Clock going backwards clamps to zero
        assert_eq!(run.elapsed_seconds(0.0), 0);
    }
}
