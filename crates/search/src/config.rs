//! Search configuration.

use crate::problem::ProblemInstance;
use u_placement_core::{Board, Constraints, Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for [`LayoutSearch`](crate::LayoutSearch).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// Placement area.
    pub board: Board,

    /// Tolerances checked by the validator.
    pub constraints: Constraints,

    /// Components to place.
    pub problem: ProblemInstance,

    /// Maximum number of whole-layout attempts.
    pub max_attempts: usize,

    /// First row hint for the edge-mounted blocks.
    pub hint_base: i32,

    /// Number of distinct row hints before the sequence repeats.
    pub hint_cycle: usize,

    /// Rows further than this from the hint are skipped.
    pub hint_window: i32,

    /// Half-size of the offset grid searched around the anchor.
    pub proximity_radius: i32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            board: Board::default(),
            constraints: Constraints::default(),
            problem: ProblemInstance::default(),
            max_attempts: 500,
            hint_base: 15,
            hint_cycle: 10,
            hint_window: 5,
            proximity_radius: 10,
        }
    }
}

impl SearchConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the board.
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Sets the constraints.
    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Sets the component set and points the constraint roles at its
    /// anchor, dependent and interface components.
    pub fn with_problem(mut self, problem: ProblemInstance) -> Self {
        self.constraints = self.constraints.with_roles(
            problem.anchor.name.clone(),
            problem.dependent.name.clone(),
            problem.interface.name.clone(),
        );
        self.problem = problem;
        self
    }

    /// Sets the attempt budget.
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Sets the proximity cap.
    pub fn with_proximity_cap(mut self, cap: f64) -> Self {
        self.constraints.proximity_cap = cap;
        self
    }

    /// Sets the center-of-mass tolerance.
    pub fn with_center_of_mass_tolerance(mut self, tolerance: f64) -> Self {
        self.constraints.center_of_mass_tolerance = tolerance;
        self
    }

    /// Sets the row hint sequence `base, base + 1, ..., base + cycle - 1`.
    pub fn with_hints(mut self, base: i32, cycle: usize) -> Self {
        self.hint_base = base;
        self.hint_cycle = cycle;
        self
    }

    /// Sets the hint window.
    pub fn with_hint_window(mut self, window: i32) -> Self {
        self.hint_window = window;
        self
    }

    /// Sets the proximity search radius.
    pub fn with_proximity_radius(mut self, radius: i32) -> Self {
        self.proximity_radius = radius;
        self
    }

    /// Returns the row hint for an attempt.
    ///
    /// Fails if the hint cycle is zero or the hint does not fit in `i32`.
    pub fn row_hint(&self, attempt: usize) -> Result<i32> {
        row_hint(attempt, self.hint_base, self.hint_cycle).ok_or_else(|| {
            Error::InvalidConfig(format!(
                "no row hint for attempt {} (base {}, cycle {})",
                attempt, self.hint_base, self.hint_cycle
            ))
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        self.constraints.validate()?;
        self.problem.validate()?;

        if self.max_attempts == 0 {
            return Err(Error::InvalidConfig(
                "max_attempts must be at least 1".into(),
            ));
        }
        if self.hint_cycle == 0 {
            return Err(Error::InvalidConfig("hint_cycle must be at least 1".into()));
        }
        let last_offset = i32::try_from(self.hint_cycle - 1).map_err(|_| {
            Error::InvalidConfig(format!("hint_cycle {} is too large", self.hint_cycle))
        })?;
        if self.hint_base.checked_add(last_offset).is_none() {
            return Err(Error::InvalidConfig(format!(
                "hint_base {} overflows over a cycle of {}",
                self.hint_base, self.hint_cycle
            )));
        }
        if self.hint_window < 0 {
            return Err(Error::InvalidConfig(
                "hint_window must not be negative".into(),
            ));
        }
        if self.proximity_radius < 0 {
            return Err(Error::InvalidConfig(
                "proximity_radius must not be negative".into(),
            ));
        }

        let roles = [
            ("anchor", &self.constraints.anchor, &self.problem.anchor.name),
            (
                "dependent",
                &self.constraints.dependent,
                &self.problem.dependent.name,
            ),
            (
                "interface",
                &self.constraints.interface,
                &self.problem.interface.name,
            ),
        ];
        for (role, expected, actual) in roles {
            if expected != actual {
                return Err(Error::InvalidConfig(format!(
                    "{} role names '{}' but the component set has '{}'",
                    role, expected, actual
                )));
            }
        }
        Ok(())
    }
}

/// Row hint for an attempt: `base + attempt % cycle`.
///
/// A pure function of the attempt index, so any subset of attempts can be
/// evaluated in any order and still see the same hints.
///
/// Returns `None` if `cycle` is zero or the sum overflows `i32`.
pub fn row_hint(attempt: usize, base: i32, cycle: usize) -> Option<i32> {
    let offset = attempt.checked_rem(cycle)?;
    base.checked_add(i32::try_from(offset).ok()?)
}
