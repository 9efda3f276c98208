//! Board (placement area) type.

use crate::geometry::{Point, Rect};
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default board width.
pub const DEFAULT_BOARD_WIDTH: i32 = 50;

/// Default board height.
pub const DEFAULT_BOARD_HEIGHT: i32 = 50;

/// A rectangular board on an integer grid.
///
/// The board is an immutable value that is passed explicitly to every
/// strategy and to the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    width: i32,
    height: i32,
}

impl Board {
    /// Creates a board, rejecting non-positive dimensions.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidBoard(format!(
                "dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        Ok(Self { width, height })
    }

    /// Returns the board width.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Returns the board height.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Returns the exact geometric center.
    pub fn center(&self) -> Point {
        Point::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    /// Returns the board outline as a rectangle at the origin.
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f64, self.height as f64)
    }

    /// Returns true if `rect` lies inside `[0, width] x [0, height]`.
    pub fn contains(&self, rect: &Rect) -> bool {
        rect.x >= 0.0
            && rect.y >= 0.0
            && rect.max_x() <= self.width as f64
            && rect.max_y() <= self.height as f64
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_board() {
        let board = Board::default();
        assert_eq!(board.width(), 50);
        assert_eq!(board.height(), 50);
        assert_relative_eq!(board.center().x, 25.0);
        assert_relative_eq!(board.center().y, 25.0);
    }

    #[test]
    fn test_odd_board_center() {
        let board = Board::new(11, 7).unwrap();
        assert_relative_eq!(board.center().x, 5.5);
        assert_relative_eq!(board.center().y, 3.5);
    }

    #[test]
    fn test_invalid_board() {
        assert!(matches!(Board::new(0, 10), Err(Error::InvalidBoard(_))));
        assert!(matches!(Board::new(10, -1), Err(Error::InvalidBoard(_))));
    }

    #[test]
    fn test_contains() {
        let board = Board::new(50, 50).unwrap();
        assert!(board.contains(&Rect::new(0.0, 0.0, 5.0, 15.0)));
        assert!(board.contains(&Rect::new(45.0, 35.0, 5.0, 15.0)));
        assert!(!board.contains(&Rect::new(46.0, 0.0, 5.0, 5.0)));
        assert!(!board.contains(&Rect::new(-1.0, 0.0, 5.0, 5.0)));
        assert!(!board.contains(&Rect::new(0.0, 36.0, 5.0, 15.0)));
    }
}
