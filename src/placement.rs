//! Candidate placement geometry on the target board
//!
//! Converts cursor/touch positions into clamped fragment placements and maps
//! placements back to pixel rectangles for overlays and feedback drawing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{BOARD_FILES, BOARD_RANKS};

/// A candidate location of the puzzle fragment on the target board
///
/// `x` is the file of the fragment's left edge, `y` the rank of its top edge
/// counted from the top, matching the backend's (posx, posy) convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub x: u8,
    pub y: u8,
    pub w: u8,
    pub h: u8,
}

impl Placement {
    /// Place a w x h fragment at a fixed origin
    pub fn at(x: u8, y: u8, w: u8, h: u8) -> Self {
        Self { x, y, w, h }
    }

    /// Placement centered on the hovered square, clamped to board bounds
    ///
    /// Returns `None` when the fragment cannot fit on the board at all.
    pub fn centered_on(col: u8, row: u8, w: u8, h: u8) -> Option<Self> {
        if w == 0 || h == 0 || w > BOARD_FILES || h > BOARD_RANKS {
            return None;
        }
        let max_x = (BOARD_FILES - w) as i32;
        let max_y = (BOARD_RANKS - h) as i32;
        let x = (col as i32 - w as i32 / 2).clamp(0, max_x);
        let y = (row as i32 - h as i32 / 2).clamp(0, max_y);
        Some(Self {
            x: x as u8,
            y: y as u8,
            w,
            h,
        })
    }

    /// Whether the placement covers square (col, row)
    pub fn contains(&self, col: u8, row: u8) -> bool {
        col >= self.x && col < self.x + self.w && row >= self.y && row < self.y + self.h
    }

    /// Center of the placement in fractional square coordinates
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.x as f32 + self.w as f32 / 2.0,
            self.y as f32 + self.h as f32 / 2.0,
        )
    }
}

/// Pixel geometry of the rendered target board
///
/// `origin` is the top-left corner in the same coordinate space as the
/// points passed to [`BoardMetrics::square_at`] (client px against a
/// `DomRect`, or zero for canvas-local drawing).
#[derive(Debug, Clone, Copy)]
pub struct BoardMetrics {
    origin: Vec2,
    square: Vec2,
}

impl BoardMetrics {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self {
            origin,
            square: size / Vec2::new(BOARD_FILES as f32, BOARD_RANKS as f32),
        }
    }

    /// Square under a pixel position, or `None` outside the board
    pub fn square_at(&self, point: Vec2) -> Option<(u8, u8)> {
        let rel = point - self.origin;
        if rel.x < 0.0 || rel.y < 0.0 {
            return None;
        }
        let col = (rel.x / self.square.x).floor() as i32;
        let row = (rel.y / self.square.y).floor() as i32;
        if col >= BOARD_FILES as i32 || row >= BOARD_RANKS as i32 {
            return None;
        }
        Some((col as u8, row as u8))
    }

    /// Pixel center of square (col, row)
    pub fn square_center(&self, col: u8, row: u8) -> Vec2 {
        self.origin + self.square * Vec2::new(col as f32 + 0.5, row as f32 + 0.5)
    }

    /// Pixel rectangle (top-left, size) covered by a placement
    pub fn placement_rect(&self, placement: &Placement) -> (Vec2, Vec2) {
        let top_left =
            self.origin + self.square * Vec2::new(placement.x as f32, placement.y as f32);
        let size = self.square * Vec2::new(placement.w as f32, placement.h as f32);
        (top_left, size)
    }

    /// Pixel center of a placement (arrow endpoint)
    pub fn placement_center(&self, placement: &Placement) -> Vec2 {
        self.origin + self.square * placement.center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_centered_on_interior() {
        let p = Placement::centered_on(4, 4, 3, 3).unwrap();
        assert_eq!(p, Placement::at(3, 3, 3, 3));
        assert!(p.contains(4, 4));
    }

    #[test]
    fn test_centered_on_clamps_to_edges() {
        // Top-left corner
        assert_eq!(
            Placement::centered_on(0, 0, 3, 3).unwrap(),
            Placement::at(0, 0, 3, 3)
        );
        // Bottom-right corner
        assert_eq!(
            Placement::centered_on(7, 7, 3, 3).unwrap(),
            Placement::at(5, 5, 3, 3)
        );
        // Rectangular fragment against the right edge
        assert_eq!(
            Placement::centered_on(7, 3, 4, 2).unwrap(),
            Placement::at(4, 2, 4, 2)
        );
    }

    #[test]
    fn test_centered_on_rejects_oversized() {
        assert!(Placement::centered_on(0, 0, 9, 3).is_none());
        assert!(Placement::centered_on(0, 0, 3, 9).is_none());
        assert!(Placement::centered_on(0, 0, 0, 3).is_none());
    }

    #[test]
    fn test_full_board_fragment_pins_to_origin() {
        assert_eq!(
            Placement::centered_on(5, 2, 8, 8).unwrap(),
            Placement::at(0, 0, 8, 8)
        );
    }

    #[test]
    fn test_square_at_maps_pixels() {
        let metrics = BoardMetrics::new(Vec2::new(10.0, 20.0), Vec2::new(400.0, 400.0));
        assert_eq!(metrics.square_at(Vec2::new(10.0, 20.0)), Some((0, 0)));
        assert_eq!(metrics.square_at(Vec2::new(60.0, 20.0)), Some((1, 0)));
        assert_eq!(metrics.square_at(Vec2::new(409.0, 419.0)), Some((7, 7)));
        assert_eq!(metrics.square_at(Vec2::new(9.0, 20.0)), None);
        assert_eq!(metrics.square_at(Vec2::new(411.0, 20.0)), None);
    }

    #[test]
    fn test_placement_rect() {
        let metrics = BoardMetrics::new(Vec2::ZERO, Vec2::new(400.0, 400.0));
        let (top_left, size) = metrics.placement_rect(&Placement::at(2, 1, 3, 2));
        assert_eq!(top_left, Vec2::new(100.0, 50.0));
        assert_eq!(size, Vec2::new(150.0, 100.0));
        assert_eq!(
            metrics.placement_center(&Placement::at(2, 1, 3, 2)),
            Vec2::new(175.0, 100.0)
        );
    }

    proptest! {
        #[test]
        fn prop_centered_on_stays_in_bounds(
            col in 0u8..8, row in 0u8..8, w in 1u8..=8, h in 1u8..=8,
        ) {
            let p = Placement::centered_on(col, row, w, h).unwrap();
            prop_assert!(p.x + p.w <= BOARD_FILES);
            prop_assert!(p.y + p.h <= BOARD_RANKS);
        }

        #[test]
        fn prop_centered_on_covers_anchor(
            col in 0u8..8, row in 0u8..8, w in 1u8..=8, h in 1u8..=8,
        ) {
            let p = Placement::centered_on(col, row, w, h).unwrap();
            prop_assert!(p.contains(col, row));
        }

        #[test]
        fn prop_square_center_inverts_square_at(col in 0u8..8, row in 0u8..8) {
            let metrics = BoardMetrics::new(Vec2::new(3.0, 7.0), Vec2::new(512.0, 512.0));
            let center = metrics.square_center(col, row);
            prop_assert_eq!(metrics.square_at(center), Some((col, row)));
        }
    }
}
