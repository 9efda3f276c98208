//! Anchor placement near the board center.

use u_placement_core::{within_board, Board, Component};

/// Places the anchor component in the 2x2 block of top-left positions
/// around the board's integer center.
///
/// Candidates are `x` in `{W/2 - 1, W/2}` and `y` in `{H/2 - 1, H/2}`, with
/// `x` in the outer loop. The first in-bounds candidate wins.
///
/// Returns false, leaving the component unplaced, if none fits.
pub fn place_anchor(component: &mut Component, board: &Board) -> bool {
    let cx = board.width() / 2;
    let cy = board.height() / 2;

    for x in (cx - 1)..=cx {
        for y in (cy - 1)..=cy {
            component.set_position(x, y);
            if within_board(component, board) {
                return true;
            }
        }
    }

    component.clear_position();
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_on_default_board() {
        let mut uc = Component::new("μC", 5, 5);
        assert!(place_anchor(&mut uc, &Board::default()));
        assert_eq!(uc.position(), Some((24, 24)));
    }

    #[test]
    fn test_anchor_on_small_board() {
        let mut uc = Component::new("μC", 5, 5);
        assert!(place_anchor(&mut uc, &Board::new(10, 10).unwrap()));
        assert_eq!(uc.position(), Some((4, 4)));
    }

    #[test]
    fn test_anchor_falls_through_to_later_candidate() {
        // On a 1x1 board only the last of the four candidates is in bounds.
        let mut dot = Component::new("U", 1, 1);
        assert!(place_anchor(&mut dot, &Board::new(1, 1).unwrap()));
        assert_eq!(dot.position(), Some((0, 0)));
    }

    #[test]
    fn test_anchor_too_large() {
        let mut uc = Component::new("μC", 5, 5);
        assert!(!place_anchor(&mut uc, &Board::new(4, 4).unwrap()));
        assert!(!uc.is_placed());
    }
}
