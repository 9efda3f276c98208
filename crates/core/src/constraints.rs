//! Layout constraint configuration.

use crate::component::ComponentId;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default anchor component name.
pub const DEFAULT_ANCHOR: &str = "μC";

/// Default dependent component name.
pub const DEFAULT_DEPENDENT: &str = "XTAL";

/// Default interface component name.
pub const DEFAULT_INTERFACE: &str = "USB";

/// Tolerances and component roles checked by the validator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Constraints {
    /// Maximum anchor-to-dependent center distance.
    pub proximity_cap: f64,

    /// Maximum distance of the layout's center of mass from the board center.
    pub center_of_mass_tolerance: f64,

    /// Keep-out zone width, centered horizontally on the interface component.
    pub keepout_width: f64,

    /// Keep-out zone height, the band immediately above the interface component.
    pub keepout_height: f64,

    /// Name of the anchor component.
    pub anchor: ComponentId,

    /// Name of the component constrained relative to the anchor.
    pub dependent: ComponentId,

    /// Name of the component the keep-out zone is attached to.
    pub interface: ComponentId,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            proximity_cap: 10.0,
            center_of_mass_tolerance: 2.0,
            keepout_width: 10.0,
            keepout_height: 15.0,
            anchor: DEFAULT_ANCHOR.to_string(),
            dependent: DEFAULT_DEPENDENT.to_string(),
            interface: DEFAULT_INTERFACE.to_string(),
        }
    }
}

impl Constraints {
    /// Creates constraints with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the proximity cap.
    pub fn with_proximity_cap(mut self, cap: f64) -> Self {
        self.proximity_cap = cap;
        self
    }

    /// Sets the center-of-mass tolerance.
    pub fn with_center_of_mass_tolerance(mut self, tolerance: f64) -> Self {
        self.center_of_mass_tolerance = tolerance;
        self
    }

    /// Sets the keep-out zone size.
    pub fn with_keepout(mut self, width: f64, height: f64) -> Self {
        self.keepout_width = width;
        self.keepout_height = height;
        self
    }

    /// Sets the anchor, dependent and interface component names.
    pub fn with_roles(
        mut self,
        anchor: impl Into<ComponentId>,
        dependent: impl Into<ComponentId>,
        interface: impl Into<ComponentId>,
    ) -> Self {
        self.anchor = anchor.into();
        self.dependent = dependent.into();
        self.interface = interface.into();
        self
    }

    /// Rejects negative or non-finite tolerances.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("proximity_cap", self.proximity_cap),
            ("center_of_mass_tolerance", self.center_of_mass_tolerance),
            ("keepout_width", self.keepout_width),
            ("keepout_height", self.keepout_height),
        ];
        for (field, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{} must be a finite non-negative number, got {}",
                    field, value
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = Constraints::default();
        assert_eq!(c.proximity_cap, 10.0);
        assert_eq!(c.center_of_mass_tolerance, 2.0);
        assert_eq!(c.anchor, "μC");
        assert_eq!(c.dependent, "XTAL");
        assert_eq!(c.interface, "USB");
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let c = Constraints::new()
            .with_proximity_cap(0.0)
            .with_keepout(4.0, 6.0)
            .with_roles("U1", "Y1", "J1");
        assert_eq!(c.proximity_cap, 0.0);
        assert_eq!(c.keepout_width, 4.0);
        assert_eq!(c.interface, "J1");
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_tolerance() {
        let c = Constraints::new().with_center_of_mass_tolerance(-1.0);
        assert!(matches!(c.validate(), Err(Error::InvalidConfig(_))));

        let c = Constraints::new().with_proximity_cap(f64::NAN);
        assert!(c.validate().is_err());
    }
}
