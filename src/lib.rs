//! GeoChessr - a chess geoguessing client
//!
//! The player is shown a small fragment of a chessboard and has to locate
//! where it sits on the full board. Core modules:
//! - `fen`: Mock-FEN parsing/encoding for arbitrary board fragments
//! - `placement`: Candidate placement geometry on the target board
//! - `run`: Multi-puzzle run bookkeeping
//! - `api`: JSON client for the puzzle backend
//! - `board` / `feedback`: DOM board rendering and reveal graphics
//! - `audio`: Web Audio sound effects
//! - `settings` / `history`: LocalStorage-backed preferences and past runs

pub mod api;
#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod board;
pub mod feedback;
pub mod fen;
pub mod history;
pub mod placement;
pub mod run;
pub mod settings;

pub use fen::SubBoard;
pub use placement::Placement;
pub use run::RunState;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Files (columns) on the full target board
    pub const BOARD_FILES: u8 = 8;
    /// Ranks (rows) on the full target board
    pub const BOARD_RANKS: u8 = 8;

    /// Where the backend serves piece sprites from
    pub const PIECE_ASSET_BASE: &str = "/assets/cburnett";

    /// Run creation defaults (mirror the server's daily-run settings)
    pub const DEFAULT_RUN_LENGTH: u32 = 5;
    pub const DEFAULT_MIN_MOVE: u32 = 4;
    pub const DEFAULT_MAX_MOVE: u32 = 20;
    pub const DEFAULT_DIFFICULTY: &str = "medium";
    pub const DEFAULT_SOURCE: &str = "lichess";
}

/// Row-major cell index for square (x, y) on a board `width` files wide
#[inline]
pub fn square_index(x: usize, y: usize, width: usize) -> usize {
    y * width + x
}

/// Checkering for square (x, y); the top-left square is light
#[inline]
pub fn is_light_square(x: usize, y: usize) -> bool {
    (x + y) % 2 == 0
}

/// Algebraic name of a target-board square, e.g. (4, 4) -> "e4"
pub fn square_name(x: u8, y: u8) -> String {
    let file = (b'a' + x) as char;
    let rank = consts::BOARD_RANKS - y;
    format!("{file}{rank}")
}
