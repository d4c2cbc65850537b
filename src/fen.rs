//! Mock-FEN parsing and encoding
//!
//! Puzzle fragments use the board field of FEN notation generalized to
//! arbitrary rectangles: ranks separated by `/` (topmost first), digits for
//! runs of empty squares, letters for pieces. The full 8x8 positions the
//! server sends back parse through the same path; anything after the board
//! field (side to move, castling rights, ...) is ignored.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::square_index;

/// Piece color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

/// Piece kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A piece on a board square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    /// Decode a FEN letter; uppercase is white, lowercase is black
    pub fn from_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(Self { color, kind })
    }

    /// Encode back to the FEN letter
    pub fn to_char(self) -> char {
        let ch = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            Color::White => ch.to_ascii_uppercase(),
            Color::Black => ch,
        }
    }
}

/// Parse failure for mock-FEN input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Input was empty or whitespace only
    Empty,
    /// A rank between slashes had no squares at all
    EmptyRank { rank: usize },
    /// Character is neither a piece letter nor a digit 1-9
    InvalidChar { rank: usize, ch: char },
    /// Rank width differs from the first rank's width
    WidthMismatch {
        rank: usize,
        expected: usize,
        got: usize,
    },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::Empty => write!(f, "board notation is empty"),
            FenError::EmptyRank { rank } => write!(f, "rank {rank} has no squares"),
            FenError::InvalidChar { rank, ch } => {
                write!(f, "invalid character '{ch}' in rank {rank}")
            }
            FenError::WidthMismatch {
                rank,
                expected,
                got,
            } => write!(
                f,
                "rank {rank} has {got} squares, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for FenError {}

/// A parsed rectangular board fragment
///
/// Cells are stored row-major, topmost rank first, matching the notation
/// order and the (x, y) coordinates the backend uses for placements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubBoard {
    width: usize,
    height: usize,
    cells: Vec<Option<Piece>>,
}

impl SubBoard {
    /// Build a board from pre-laid-out cells; `None` if the lengths disagree
    pub fn from_cells(width: usize, height: usize, cells: Vec<Option<Piece>>) -> Option<Self> {
        if width == 0 || height == 0 || cells.len() != width * height {
            return None;
        }
        Some(Self {
            width,
            height,
            cells,
        })
    }

    /// Parse a mock-FEN string; trailing FEN metadata after a space is ignored
    pub fn parse(input: &str) -> Result<Self, FenError> {
        let board_field = input.trim().split_whitespace().next().ok_or(FenError::Empty)?;

        let mut cells = Vec::new();
        let mut width: Option<usize> = None;
        let mut height = 0usize;

        for (r, rank) in board_field.split('/').enumerate() {
            let rank_no = r + 1;
            let mut file_count = 0usize;

            for ch in rank.chars() {
                if let Some(d) = ch.to_digit(10) {
                    if d == 0 {
                        return Err(FenError::InvalidChar { rank: rank_no, ch });
                    }
                    for _ in 0..d {
                        cells.push(None);
                    }
                    file_count += d as usize;
                } else if let Some(piece) = Piece::from_char(ch) {
                    cells.push(Some(piece));
                    file_count += 1;
                } else {
                    return Err(FenError::InvalidChar { rank: rank_no, ch });
                }
                // Fail fast once a rank runs past the established width
                if let Some(w) = width {
                    if file_count > w {
                        return Err(FenError::WidthMismatch {
                            rank: rank_no,
                            expected: w,
                            got: file_count,
                        });
                    }
                }
            }

            if file_count == 0 {
                return Err(FenError::EmptyRank { rank: rank_no });
            }
            match width {
                None => width = Some(file_count),
                Some(w) if file_count != w => {
                    return Err(FenError::WidthMismatch {
                        rank: rank_no,
                        expected: w,
                        got: file_count,
                    });
                }
                _ => {}
            }
            height += 1;
        }

        let width = width.ok_or(FenError::Empty)?;
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Files in this fragment
    pub fn width(&self) -> usize {
        self.width
    }

    /// Ranks in this fragment
    pub fn height(&self) -> usize {
        self.height
    }

    /// Piece at (x, y), x from the left, y from the top
    pub fn cell(&self, x: usize, y: usize) -> Option<Piece> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[square_index(x, y, self.width)]
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[Option<Piece>] {
        &self.cells
    }

    /// Number of pieces on the fragment
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Re-encode with maximal digit runs (runs cap at 9 to stay parseable)
    pub fn to_fen(&self) -> String {
        let mut out = String::new();
        for y in 0..self.height {
            if y > 0 {
                out.push('/');
            }
            let mut empties = 0u32;
            for x in 0..self.width {
                match self.cells[square_index(x, y, self.width)] {
                    None => {
                        empties += 1;
                        if empties == 9 {
                            out.push('9');
                            empties = 0;
                        }
                    }
                    Some(piece) => {
                        if empties > 0 {
                            out.push(char::from_digit(empties, 10).unwrap_or('0'));
                            empties = 0;
                        }
                        out.push(piece.to_char());
                    }
                }
            }
            if empties > 0 {
                out.push(char::from_digit(empties, 10).unwrap_or('0'));
            }
        }
        out
    }

    /// Digit-free encoding: every empty square becomes a '1'
    pub fn expanded(&self) -> String {
        let mut out = String::new();
        for y in 0..self.height {
            if y > 0 {
                out.push('/');
            }
            for x in 0..self.width {
                match self.cells[square_index(x, y, self.width)] {
                    None => out.push('1'),
                    Some(piece) => out.push(piece.to_char()),
                }
            }
        }
        out
    }
}

impl FromStr for SubBoard {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SubBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_small_fragment() {
        let board = SubBoard::parse("r2/bb1/B2").unwrap();
        assert_eq!(board.width(), 3);
        assert_eq!(board.height(), 3);
        assert_eq!(board.cells().len(), 9);
        assert_eq!(
            board.cell(0, 0),
            Some(Piece {
                color: Color::Black,
                kind: PieceKind::Rook
            })
        );
        assert_eq!(board.cell(2, 0), None);
        assert_eq!(
            board.cell(0, 2),
            Some(Piece {
                color: Color::White,
                kind: PieceKind::Bishop
            })
        );
        assert_eq!(board.piece_count(), 4);
    }

    #[test]
    fn test_parse_rectangular_fragment() {
        let board = SubBoard::parse("2q1/4").unwrap();
        assert_eq!(board.width(), 4);
        assert_eq!(board.height(), 2);
        assert_eq!(board.piece_count(), 1);
    }

    #[test]
    fn test_parse_full_fen_ignores_metadata() {
        let board =
            SubBoard::parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
        assert_eq!(board.width(), 8);
        assert_eq!(board.height(), 8);
        assert_eq!(board.piece_count(), 32);
        assert_eq!(
            board.cell(4, 7),
            Some(Piece {
                color: Color::White,
                kind: PieceKind::King
            })
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(SubBoard::parse(""), Err(FenError::Empty));
        assert_eq!(SubBoard::parse("   "), Err(FenError::Empty));
    }

    #[test]
    fn test_parse_empty_rank() {
        assert_eq!(
            SubBoard::parse("3//3"),
            Err(FenError::EmptyRank { rank: 2 })
        );
    }

    #[test]
    fn test_parse_invalid_character() {
        assert_eq!(
            SubBoard::parse("r2/bx1/B2"),
            Err(FenError::InvalidChar { rank: 2, ch: 'x' })
        );
        assert_eq!(
            SubBoard::parse("r0"),
            Err(FenError::InvalidChar { rank: 1, ch: '0' })
        );
    }

    #[test]
    fn test_parse_width_mismatch() {
        assert_eq!(
            SubBoard::parse("r2/bb/B2"),
            Err(FenError::WidthMismatch {
                rank: 2,
                expected: 3,
                got: 2
            })
        );
        // Overflow is reported as soon as the rank runs past the first rank's width
        assert!(matches!(
            SubBoard::parse("r2/bbqqq/B2"),
            Err(FenError::WidthMismatch { rank: 2, .. })
        ));
    }

    #[test]
    fn test_to_fen_roundtrip() {
        for fen in ["r2/bb1/B2", "3/3/3", "2q1/4", "8/8", "k7/8/8/8/8/8/8/7K"] {
            let board = SubBoard::parse(fen).unwrap();
            assert_eq!(board.to_fen(), fen);
        }
    }

    #[test]
    fn test_expanded() {
        let board = SubBoard::parse("r2/bb1/B2").unwrap();
        assert_eq!(board.expanded(), "r11/bb1/B11");
        assert_eq!(SubBoard::parse(&board.expanded()).unwrap(), board);
    }

    #[test]
    fn test_piece_char_roundtrip() {
        for ch in "pnbrqkPNBRQK".chars() {
            assert_eq!(Piece::from_char(ch).unwrap().to_char(), ch);
        }
        assert!(Piece::from_char('x').is_none());
        assert!(Piece::from_char('1').is_none());
    }

    fn arb_piece() -> impl Strategy<Value = Piece> {
        (any::<bool>(), 0u8..6).prop_map(|(white, k)| Piece {
            color: if white { Color::White } else { Color::Black },
            kind: match k {
                0 => PieceKind::Pawn,
                1 => PieceKind::Knight,
                2 => PieceKind::Bishop,
                3 => PieceKind::Rook,
                4 => PieceKind::Queen,
                _ => PieceKind::King,
            },
        })
    }

    fn arb_board() -> impl Strategy<Value = SubBoard> {
        (1usize..=8, 1usize..=8).prop_flat_map(|(w, h)| {
            prop::collection::vec(prop::option::of(arb_piece()), w * h)
                .prop_map(move |cells| SubBoard::from_cells(w, h, cells).unwrap())
        })
    }

    proptest! {
        #[test]
        fn prop_encode_parse_roundtrip(board in arb_board()) {
            let parsed = SubBoard::parse(&board.to_fen()).unwrap();
            prop_assert_eq!(parsed, board);
        }

        #[test]
        fn prop_parsed_cells_match_dims(board in arb_board()) {
            let parsed = SubBoard::parse(&board.expanded()).unwrap();
            prop_assert_eq!(parsed.cells().len(), parsed.width() * parsed.height());
        }
    }
}
