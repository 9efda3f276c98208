//! Proximity placement of a dependent component around the anchor.
//!
//! Candidates come from a square grid of integer offsets around the anchor's
//! center. Each candidate must be on the board, within the proximity cap and
//! clear of every placed component; survivors are scored by validating the
//! hypothetical full layout.
//!
//! Selection runs in two passes over the same candidate sequence:
//!
//! 1. **Strict**: among candidates that keep the anchor-dependent segment out
//!    of the keep-out zone, take the one with the smallest center-of-mass
//!    deviation (earliest wins ties).
//! 2. **Relaxed**: only if the strict pass found nothing, take the first
//!    candidate that clears the keep-out zone, ignoring the center of mass.

use u_placement_core::{
    distance, validate_with, within_board, Board, Component, Constraints, Layout, Point, Result,
    ValidationReport,
};

/// Searches the neighborhood of an anchor for a dependent component position.
#[derive(Debug, Clone)]
pub struct ProximityPlacer<'a> {
    constraints: &'a Constraints,
    radius: i32,
}

impl<'a> ProximityPlacer<'a> {
    /// Creates a placer searching offsets in `[-radius, radius]` on both axes.
    pub fn new(constraints: &'a Constraints, radius: i32) -> Self {
        Self {
            constraints,
            radius: radius.max(0),
        }
    }

    /// Returns the search radius.
    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Finds a position for `dependent` near `anchor`.
    ///
    /// `others` holds every component placed so far, the anchor included.
    /// Returns a freshly placed copy of `dependent`, or `None` if neither pass
    /// finds a candidate. Errors only if a hypothetical layout cannot be
    /// validated, which means the component roles are misconfigured.
    pub fn place(
        &self,
        anchor: &Component,
        dependent: &Component,
        others: &[Component],
        board: &Board,
    ) -> Result<Option<Component>> {
        let Some(anchor_center) = anchor.center() else {
            return Ok(None);
        };

        if let Some(found) = self.best_candidate(anchor_center, dependent, others, board)? {
            return Ok(Some(found));
        }

        let fallback = self.first_candidate(anchor_center, dependent, others, board)?;
        if fallback.is_some() {
            log::debug!(
                "{} placed without center-of-mass scoring",
                dependent.name()
            );
        }
        Ok(fallback)
    }

    /// Strict pass: the keep-out-clear candidate with the lowest deviation.
    fn best_candidate(
        &self,
        anchor_center: Point,
        dependent: &Component,
        others: &[Component],
        board: &Board,
    ) -> Result<Option<Component>> {
        let mut best: Option<Component> = None;
        let mut best_score = f64::INFINITY;

        for (x, y) in self.candidates(anchor_center, dependent) {
            let mut candidate = dependent.clone();
            candidate.set_position(x, y);

            let Some(report) = self.evaluate(anchor_center, &candidate, others, board)? else {
                continue;
            };
            if report.keepout_ok && report.center_of_mass_deviation < best_score {
                best_score = report.center_of_mass_deviation;
                best = Some(candidate);
            }
        }

        Ok(best)
    }

    /// Relaxed pass: the first keep-out-clear candidate.
    ///
    /// Both passes share one filter, so this only finds something the strict
    /// pass missed when every surviving deviation is non-finite.
    fn first_candidate(
        &self,
        anchor_center: Point,
        dependent: &Component,
        others: &[Component],
        board: &Board,
    ) -> Result<Option<Component>> {
        for (x, y) in self.candidates(anchor_center, dependent) {
            let mut candidate = dependent.clone();
            candidate.set_position(x, y);

            let Some(report) = self.evaluate(anchor_center, &candidate, others, board)? else {
                continue;
            };
            if report.keepout_ok {
                return Ok(Some(candidate));
            }
        }

        Ok(None)
    }

    /// Top-left positions that put the dependent's center at
    /// `anchor_center + (dx, dy)`, `dx` in the outer loop.
    ///
    /// Coordinates are truncated toward zero onto the integer grid.
    fn candidates(
        &self,
        anchor_center: Point,
        dependent: &Component,
    ) -> impl Iterator<Item = (i32, i32)> {
        let half_w = dependent.width() as f64 / 2.0;
        let half_h = dependent.height() as f64 / 2.0;
        let r = self.radius;

        (-r..=r).flat_map(move |dx| {
            (-r..=r).map(move |dy| {
                (
                    (anchor_center.x + dx as f64 - half_w) as i32,
                    (anchor_center.y + dy as f64 - half_h) as i32,
                )
            })
        })
    }

    /// Applies the hard filters and, for survivors, validates the layout
    /// `others + candidate`.
    fn evaluate(
        &self,
        anchor_center: Point,
        candidate: &Component,
        others: &[Component],
        board: &Board,
    ) -> Result<Option<ValidationReport>> {
        if !within_board(candidate, board) {
            return Ok(None);
        }

        let Some(center) = candidate.center() else {
            return Ok(None);
        };
        if distance(anchor_center, center) > self.constraints.proximity_cap {
            return Ok(None);
        }

        if others.iter().any(|placed| candidate.overlaps(placed)) {
            return Ok(None);
        }

        let mut components = others.to_vec();
        components.push(candidate.clone());
        let layout = Layout::with_components(*board, components);
        validate_with(&layout, self.constraints).map(Some)
    }
}
