//! Constraint validation over a completed layout.

use crate::component::Component;
use crate::constraints::Constraints;
use crate::geometry::{distance, segment_intersects_rect, Point, Rect};
use crate::layout::Layout;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of one validation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationReport {
    /// Anchor-to-dependent distance is within the proximity cap.
    pub proximity_ok: bool,
    /// Center of mass is within tolerance of the board center.
    pub center_of_mass_ok: bool,
    /// The anchor-dependent segment stays clear of the keep-out zone.
    pub keepout_ok: bool,
    /// No two components overlap.
    pub overlap_ok: bool,
    /// Anchor-to-dependent center distance.
    pub anchor_distance: f64,
    /// Distance of the center of mass from the board center.
    pub center_of_mass_deviation: f64,
    /// Mean of all component centers.
    pub center_of_mass: Point,
    /// Keep-out rectangle derived from the interface component.
    pub keepout_zone: Rect,
}

impl ValidationReport {
    /// Returns true if every constraint holds.
    pub fn is_valid(&self) -> bool {
        self.proximity_ok && self.center_of_mass_ok && self.keepout_ok && self.overlap_ok
    }

    /// Returns the names of the constraints that failed.
    pub fn failed_constraints(&self) -> Vec<&'static str> {
        let mut failed = Vec::new();
        if !self.proximity_ok {
            failed.push("proximity");
        }
        if !self.center_of_mass_ok {
            failed.push("center_of_mass");
        }
        if !self.keepout_ok {
            failed.push("keepout");
        }
        if !self.overlap_ok {
            failed.push("overlap");
        }
        failed
    }
}

/// Validates a layout against the default constraints.
pub fn validate(layout: &Layout) -> Result<ValidationReport> {
    validate_with(layout, &Constraints::default())
}

/// Validates a layout against the given constraints.
///
/// Returns [`Error::MissingComponent`] or [`Error::Unplaced`] if the layout is
/// not complete; callers must treat these as contract violations rather than
/// search failures.
pub fn validate_with(layout: &Layout, constraints: &Constraints) -> Result<ValidationReport> {
    let anchor = placed_center(layout, &constraints.anchor)?;
    let dependent = placed_center(layout, &constraints.dependent)?;
    let interface = required(layout, &constraints.interface)?;
    let interface_bounds = interface
        .bounds()
        .ok_or_else(|| Error::Unplaced(interface.name().to_string()))?;

    let anchor_distance = distance(anchor, dependent);
    let proximity_ok = anchor_distance <= constraints.proximity_cap;

    let center_of_mass = center_of_mass(layout)?;
    let center_of_mass_deviation = distance(layout.board().center(), center_of_mass);
    let center_of_mass_ok = center_of_mass_deviation <= constraints.center_of_mass_tolerance;

    let keepout_zone = keepout_zone(&interface_bounds, constraints);
    let keepout_ok = !segment_intersects_rect(anchor, dependent, &keepout_zone);

    let components = layout.components();
    let mut overlap_ok = true;
    for i in 0..components.len() {
        for j in (i + 1)..components.len() {
            if components[i].overlaps(&components[j]) {
                overlap_ok = false;
            }
        }
    }

    Ok(ValidationReport {
        proximity_ok,
        center_of_mass_ok,
        keepout_ok,
        overlap_ok,
        anchor_distance,
        center_of_mass_deviation,
        center_of_mass,
        keepout_zone,
    })
}

/// Computes the keep-out rectangle for an interface component.
///
/// The zone is horizontally centered on the interface and spans the band of
/// `keepout_height` units directly above its top edge.
pub fn keepout_zone(interface: &Rect, constraints: &Constraints) -> Rect {
    let center = interface.center();
    Rect::new(
        center.x - constraints.keepout_width / 2.0,
        interface.y - constraints.keepout_height,
        constraints.keepout_width,
        constraints.keepout_height,
    )
}

/// Arithmetic mean of all component centers.
pub fn center_of_mass(layout: &Layout) -> Result<Point> {
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    for component in layout.components() {
        let center = component
            .center()
            .ok_or_else(|| Error::Unplaced(component.name().to_string()))?;
        sum_x += center.x;
        sum_y += center.y;
    }
    let n = layout.len().max(1) as f64;
    Ok(Point::new(sum_x / n, sum_y / n))
}

fn required<'a>(layout: &'a Layout, name: &str) -> Result<&'a Component> {
    layout
        .get(name)
        .ok_or_else(|| Error::MissingComponent(name.to_string()))
}

fn placed_center(layout: &Layout, name: &str) -> Result<Point> {
    required(layout, name)?
        .center()
        .ok_or_else(|| Error::Unplaced(name.to_string()))
}
