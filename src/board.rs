//! Board rendering
//!
//! Boards are plain DOM grids: one div per square, checkered by class, with
//! piece images appended into the squares. The same grid builder renders the
//! puzzle fragment (at its own dimensions) and the 8x8 target board; reveal
//! ghosts and placement highlights are class toggles on the target squares.

use crate::consts::PIECE_ASSET_BASE;
use crate::fen::{Color, Piece};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{Document, Element, HtmlImageElement};

#[cfg(target_arch = "wasm32")]
use crate::consts::{BOARD_FILES, BOARD_RANKS};
#[cfg(target_arch = "wasm32")]
use crate::fen::SubBoard;
#[cfg(target_arch = "wasm32")]
use crate::placement::Placement;
#[cfg(target_arch = "wasm32")]
use crate::{is_light_square, square_name};

/// Square id prefix for the puzzle fragment board
pub const FRAGMENT_PREFIX: &str = "sq";
/// Square id prefix for the 8x8 target board
pub const TARGET_PREFIX: &str = "tsq";

/// Sprite path for a piece (cburnett set, served by the backend)
pub fn piece_asset_path(piece: Piece) -> String {
    let color = match piece.color {
        Color::White => 'w',
        Color::Black => 'b',
    };
    let letter = piece.to_char().to_ascii_uppercase();
    format!("{PIECE_ASSET_BASE}/{color}{letter}.svg")
}

/// DOM id of a board square
pub fn square_dom_id(prefix: &str, col: usize, row: usize) -> String {
    format!("{prefix}-{row}-{col}")
}

/// Rebuild a container as a width x height grid of checkered squares
///
/// `coordinates` adds the algebraic square name as a tooltip (only sensible
/// for the 8x8 target board).
#[cfg(target_arch = "wasm32")]
pub fn build_board_squares(
    document: &Document,
    container: &Element,
    prefix: &str,
    width: usize,
    height: usize,
    coordinates: bool,
) -> Result<(), JsValue> {
    container.set_inner_html("");
    let _ = container.set_attribute(
        "style",
        &format!("--board-cols: {width}; --board-rows: {height};"),
    );
    for row in 0..height {
        for col in 0..width {
            let square = document.create_element("div")?;
            let shade = if is_light_square(col, row) {
                "light"
            } else {
                "dark"
            };
            square.set_class_name(&format!("square {shade}"));
            square.set_id(&square_dom_id(prefix, col, row));
            if coordinates {
                let _ = square.set_attribute("title", &square_name(col as u8, row as u8));
            }
            container.append_child(&square)?;
        }
    }
    Ok(())
}

/// Append a piece image to an element
#[cfg(target_arch = "wasm32")]
fn append_piece_img(
    document: &Document,
    parent: &Element,
    piece: Piece,
    ghost: bool,
) -> Result<(), JsValue> {
    let img: HtmlImageElement = document.create_element("img")?.dyn_into()?;
    img.set_alt(&format!("Piece {}", piece.to_char()));
    img.set_src(&piece_asset_path(piece));
    if ghost {
        img.set_class_name("piece ghost");
    } else {
        img.set_class_name("piece");
    }
    parent.append_child(&img)?;
    Ok(())
}

/// Render a parsed fragment into its board's squares
#[cfg(target_arch = "wasm32")]
pub fn render_pieces(
    document: &Document,
    prefix: &str,
    board: &SubBoard,
) -> Result<(), JsValue> {
    for row in 0..board.height() {
        for col in 0..board.width() {
            let Some(square) = document.get_element_by_id(&square_dom_id(prefix, col, row))
            else {
                continue;
            };
            square.set_inner_html("");
            if let Some(piece) = board.cell(col, row) {
                append_piece_img(document, &square, piece, false)?;
            }
        }
    }
    Ok(())
}

/// Overlay a full-board position as translucent ghost pieces on the target
#[cfg(target_arch = "wasm32")]
pub fn render_ghost_position(document: &Document, board: &SubBoard) -> Result<(), JsValue> {
    for row in 0..board.height().min(BOARD_RANKS as usize) {
        for col in 0..board.width().min(BOARD_FILES as usize) {
            if let Some(piece) = board.cell(col, row) {
                if let Some(square) =
                    document.get_element_by_id(&square_dom_id(TARGET_PREFIX, col, row))
                {
                    append_piece_img(document, &square, piece, true)?;
                }
            }
        }
    }
    Ok(())
}

/// Remove every piece image from the target board
#[cfg(target_arch = "wasm32")]
pub fn clear_target_board(document: &Document) {
    for row in 0..BOARD_RANKS as usize {
        for col in 0..BOARD_FILES as usize {
            if let Some(square) = document.get_element_by_id(&square_dom_id(TARGET_PREFIX, col, row))
            {
                square.set_inner_html("");
            }
        }
    }
}

/// Toggle `class` on exactly the target squares a placement covers
///
/// Passing `None` strips the class from the whole board.
#[cfg(target_arch = "wasm32")]
pub fn apply_placement_class(document: &Document, placement: Option<&Placement>, class: &str) {
    for row in 0..BOARD_RANKS {
        for col in 0..BOARD_FILES {
            let Some(square) =
                document.get_element_by_id(&square_dom_id(TARGET_PREFIX, col as usize, row as usize))
            else {
                continue;
            };
            let covered = placement.is_some_and(|p| p.contains(col, row));
            let list = square.class_list();
            if covered {
                let _ = list.add_1(class);
            } else {
                let _ = list.remove_1(class);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen::PieceKind;

    #[test]
    fn test_piece_asset_paths() {
        let wk = Piece {
            color: Color::White,
            kind: PieceKind::King,
        };
        let bp = Piece {
            color: Color::Black,
            kind: PieceKind::Pawn,
        };
        assert_eq!(piece_asset_path(wk), "/assets/cburnett/wK.svg");
        assert_eq!(piece_asset_path(bp), "/assets/cburnett/bP.svg");
    }

    #[test]
    fn test_square_dom_ids_are_row_major() {
        assert_eq!(square_dom_id(FRAGMENT_PREFIX, 2, 0), "sq-0-2");
        assert_eq!(square_dom_id(TARGET_PREFIX, 0, 7), "tsq-7-0");
    }
}
