//! The component set to lay out.

use std::collections::HashSet;
use u_placement_core::constraints::{DEFAULT_ANCHOR, DEFAULT_DEPENDENT, DEFAULT_INTERFACE};
use u_placement_core::{ComponentSpec, Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The five components of a layout, by role.
///
/// `edge_a` is mounted on the left edge, `edge_b` on the right edge and
/// `interface` on the bottom edge. `anchor` goes near the board center and
/// `dependent` is placed relative to it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProblemInstance {
    pub edge_a: ComponentSpec,
    pub edge_b: ComponentSpec,
    pub interface: ComponentSpec,
    pub anchor: ComponentSpec,
    pub dependent: ComponentSpec,
}

impl Default for ProblemInstance {
    /// Two 5x15 mounting blocks, a 5x5 USB connector, a 5x5 microcontroller
    /// and a 5x5 crystal.
    fn default() -> Self {
        Self {
            edge_a: ComponentSpec::new("MB1", 5, 15),
            edge_b: ComponentSpec::new("MB2", 5, 15),
            interface: ComponentSpec::new(DEFAULT_INTERFACE, 5, 5),
            anchor: ComponentSpec::new(DEFAULT_ANCHOR, 5, 5),
            dependent: ComponentSpec::new(DEFAULT_DEPENDENT, 5, 5),
        }
    }
}

impl ProblemInstance {
    /// Returns the specs in placement order.
    pub fn specs(&self) -> [&ComponentSpec; 5] {
        [
            &self.edge_a,
            &self.edge_b,
            &self.interface,
            &self.anchor,
            &self.dependent,
        ]
    }

    /// Checks dimensions and name uniqueness.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for spec in self.specs() {
            spec.validate()?;
            if !seen.insert(spec.name.as_str()) {
                return Err(Error::InvalidConfig(format!(
                    "duplicate component name '{}'",
                    spec.name
                )));
            }
        }
        Ok(())
    }
}
