//! Edge-mounted placement.
//!
//! Anchors a component flush against one board edge and scans along that
//! edge for the first in-bounds slot.

use u_placement_core::{within_board, Board, Component};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Board edge a component can be mounted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Edge {
    /// `x = 0`, scanning rows.
    Left,
    /// `x = width - w`, scanning rows.
    Right,
    /// `y = height - h`, scanning columns.
    Bottom,
}

impl Edge {
    /// Returns `(extent, size)` along the scan axis.
    fn scan_span(self, component: &Component, board: &Board) -> (i32, i32) {
        match self {
            Self::Left | Self::Right => (board.height(), component.height()),
            Self::Bottom => (board.width(), component.width()),
        }
    }

    /// Maps a scan coordinate to a top-left position flush with this edge.
    fn position(self, scan: i32, component: &Component, board: &Board) -> (i32, i32) {
        match self {
            Self::Left => (0, scan),
            Self::Right => (board.width() - component.width(), scan),
            Self::Bottom => (scan, board.height() - component.height()),
        }
    }
}

/// Places `component` flush against `edge`.
///
/// Scan coordinates run from 0 to `extent - size` in ascending order. With a
/// hint, coordinates more than `window` away from it are skipped. The first
/// in-bounds candidate wins.
///
/// Returns false, leaving the component unplaced, if no candidate fits.
pub fn place_on_edge(
    component: &mut Component,
    edge: Edge,
    hint: Option<i32>,
    board: &Board,
    window: i32,
) -> bool {
    let (extent, size) = edge.scan_span(component, board);

    for scan in 0..=(extent - size) {
        if let Some(hint) = hint {
            if window < 0 || scan.abs_diff(hint) > window.unsigned_abs() {
                continue;
            }
        }

        let (x, y) = edge.position(scan, component, board);
        component.set_position(x, y);
        if within_board(component, board) {
            return true;
        }
    }

    component.clear_position();
    false
}

/// Places `component` flush against `edge`, centered along it.
///
/// Returns false, leaving the component unplaced, if it does not fit.
pub fn place_centered_on_edge(component: &mut Component, edge: Edge, board: &Board) -> bool {
    let (extent, size) = edge.scan_span(component, board);
    let (x, y) = edge.position((extent - size) / 2, component, board);

    component.set_position(x, y);
    if within_board(component, board) {
        return true;
    }

    component.clear_position();
    false
}
