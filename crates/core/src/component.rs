//! Rectangular component model.

use crate::board::Board;
use crate::geometry::{Point, Rect};
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique identifier for a component.
pub type ComponentId = String;

/// Allowed component orientations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rotation {
    /// Nominal orientation.
    #[default]
    Deg0,
    /// Quarter turn; effective width and height swap.
    Deg90,
}

impl Rotation {
    /// Returns true if width and height are swapped.
    pub fn is_rotated(&self) -> bool {
        matches!(self, Self::Deg90)
    }

    /// Returns the rotation in degrees.
    pub fn degrees(&self) -> u32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
        }
    }
}

/// Template describing a component before placement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComponentSpec {
    /// Unique name.
    pub name: ComponentId,
    /// Nominal width.
    pub width: i32,
    /// Nominal height.
    pub height: i32,
    /// Orientation used when instantiated.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rotation: Rotation,
}

impl ComponentSpec {
    /// Creates an unrotated component template.
    pub fn new(name: impl Into<ComponentId>, width: i32, height: i32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            rotation: Rotation::Deg0,
        }
    }

    /// Sets the orientation.
    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Checks that both dimensions are positive.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::InvalidConfig("component name is empty".into()));
        }
        if self.width <= 0 || self.height <= 0 {
            return Err(Error::InvalidConfig(format!(
                "component '{}' must have positive dimensions, got {}x{}",
                self.name, self.width, self.height
            )));
        }
        Ok(())
    }

    /// Creates a fresh, unplaced component from this template.
    pub fn instantiate(&self) -> Component {
        Component::new(self.name.clone(), self.width, self.height).with_rotation(self.rotation)
    }
}

/// A rectangular component, placed or not.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Component {
    name: ComponentId,
    nominal_width: i32,
    nominal_height: i32,
    rotation: Rotation,
    position: Option<(i32, i32)>,
}

impl Component {
    /// Creates an unplaced component.
    pub fn new(name: impl Into<ComponentId>, width: i32, height: i32) -> Self {
        Self {
            name: name.into(),
            nominal_width: width,
            nominal_height: height,
            rotation: Rotation::Deg0,
            position: None,
        }
    }

    /// Sets the orientation.
    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Returns the component name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the nominal (unrotated) width.
    pub fn nominal_width(&self) -> i32 {
        self.nominal_width
    }

    /// Returns the nominal (unrotated) height.
    pub fn nominal_height(&self) -> i32 {
        self.nominal_height
    }

    /// Returns the orientation.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Returns the width after rotation.
    pub fn width(&self) -> i32 {
        if self.rotation.is_rotated() {
            self.nominal_height
        } else {
            self.nominal_width
        }
    }

    /// Returns the height after rotation.
    pub fn height(&self) -> i32 {
        if self.rotation.is_rotated() {
            self.nominal_width
        } else {
            self.nominal_height
        }
    }

    /// Returns the top-left corner, if placed.
    pub fn position(&self) -> Option<(i32, i32)> {
        self.position
    }

    /// Returns true once a position has been assigned.
    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    /// Moves the component. The orientation is left untouched.
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.position = Some((x, y));
    }

    /// Forgets the position.
    pub fn clear_position(&mut self) {
        self.position = None;
    }

    /// Returns `(x, y, effective_w, effective_h)`, if placed.
    pub fn bounds(&self) -> Option<Rect> {
        self.position.map(|(x, y)| {
            Rect::new(
                x as f64,
                y as f64,
                self.width() as f64,
                self.height() as f64,
            )
        })
    }

    /// Returns the center of the effective bounds, if placed.
    pub fn center(&self) -> Option<Point> {
        self.bounds().map(|b| b.center())
    }

    /// Returns true if both components are placed and overlap with positive area.
    pub fn overlaps(&self, other: &Component) -> bool {
        match (self.bounds(), other.bounds()) {
            (Some(a), Some(b)) => a.overlaps(&b),
            _ => false,
        }
    }
}

/// Returns true if the component is placed and fully inside the board.
pub fn within_board(component: &Component, board: &Board) -> bool {
    component
        .bounds()
        .is_some_and(|bounds| board.contains(&bounds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unplaced_component() {
        let c = Component::new("U1", 5, 15);
        assert!(!c.is_placed());
        assert!(c.bounds().is_none());
        assert!(c.center().is_none());
        assert!(!within_board(&c, &Board::default()));
    }

    #[test]
    fn test_bounds_and_center() {
        let mut c = Component::new("MB1", 5, 15);
        c.set_position(0, 10);
        assert_eq!(c.bounds(), Some(Rect::new(0.0, 10.0, 5.0, 15.0)));
        let center = c.center().unwrap();
        assert_relative_eq!(center.x, 2.5);
        assert_relative_eq!(center.y, 17.5);
    }

    #[test]
    fn test_rotation_swaps_dimensions() {
        let mut c = Component::new("MB1", 5, 15).with_rotation(Rotation::Deg90);
        assert_eq!(c.width(), 15);
        assert_eq!(c.height(), 5);
        assert_eq!(c.nominal_width(), 5);

        c.set_position(1, 2);
        assert_eq!(c.rotation(), Rotation::Deg90);
        assert_eq!(c.bounds(), Some(Rect::new(1.0, 2.0, 15.0, 5.0)));
    }

    #[test]
    fn test_overlap_requires_placement() {
        let mut a = Component::new("A", 5, 5);
        let mut b = Component::new("B", 5, 5);
        a.set_position(0, 0);
        assert!(!a.overlaps(&b));

        b.set_position(4, 4);
        assert!(a.overlaps(&b));

        b.set_position(5, 0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_within_board() {
        let board = Board::default();
        let mut c = Component::new("MB2", 5, 15);
        c.set_position(45, 35);
        assert!(within_board(&c, &board));
        c.set_position(46, 35);
        assert!(!within_board(&c, &board));
        c.set_position(0, -1);
        assert!(!within_board(&c, &board));
    }

    #[test]
    fn test_spec_instantiate_is_fresh() {
        let spec = ComponentSpec::new("XTAL", 5, 5).with_rotation(Rotation::Deg90);
        let mut first = spec.instantiate();
        first.set_position(3, 3);
        let second = spec.instantiate();
        assert!(!second.is_placed());
        assert_eq!(second.rotation(), Rotation::Deg90);
    }

    #[test]
    fn test_spec_validation() {
        assert!(ComponentSpec::new("A", 5, 5).validate().is_ok());
        assert!(ComponentSpec::new("A", 0, 5).validate().is_err());
        assert!(ComponentSpec::new("", 5, 5).validate().is_err());
    }
}
