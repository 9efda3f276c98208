//! Layout: an ordered set of components on a board.

use crate::board::Board;
use crate::component::{within_board, Component};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Components placed on a board, in placement order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Layout {
    board: Board,
    components: Vec<Component>,
}

impl Layout {
    /// Creates an empty layout.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            components: Vec::new(),
        }
    }

    /// Creates a layout from existing components.
    pub fn with_components(board: Board, components: Vec<Component>) -> Self {
        Self { board, components }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the components in insertion order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Consumes the layout and returns its components.
    pub fn into_components(self) -> Vec<Component> {
        self.components
    }

    /// Appends a component.
    pub fn push(&mut self, component: Component) {
        self.components.push(component);
    }

    /// Looks up a component by name.
    pub fn get(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name() == name)
    }

    /// Returns the number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns true if the layout has no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns true if every component is placed.
    pub fn all_placed(&self) -> bool {
        self.components.iter().all(Component::is_placed)
    }

    /// Returns true if every component lies inside the board.
    pub fn all_within_board(&self) -> bool {
        self.components.iter().all(|c| within_board(c, &self.board))
    }

    /// Returns the index pairs of overlapping components.
    pub fn overlapping_pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for i in 0..self.components.len() {
            for j in (i + 1)..self.components.len() {
                if self.components[i].overlaps(&self.components[j]) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }
}
