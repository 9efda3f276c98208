//! Search result representation.

use crate::layout::Layout;
use crate::validate::ValidationReport;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pipeline stage of a layout attempt.
///
/// An attempt advances through the stages in declaration order; a failure
/// at any stage abandons the attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Stage {
    /// First edge-mounted block.
    EdgeA,
    /// Second edge-mounted block.
    EdgeB,
    /// Edge-mounted interface component.
    Interface,
    /// Central anchor component.
    Anchor,
    /// Component placed relative to the anchor.
    Dependent,
    /// Final constraint check.
    Validation,
}

impl Stage {
    /// All stages in pipeline order.
    pub const ALL: [Stage; 6] = [
        Stage::EdgeA,
        Stage::EdgeB,
        Stage::Interface,
        Stage::Anchor,
        Stage::Dependent,
        Stage::Validation,
    ];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EdgeA => write!(f, "edge A placement"),
            Self::EdgeB => write!(f, "edge B placement"),
            Self::Interface => write!(f, "interface placement"),
            Self::Anchor => write!(f, "anchor placement"),
            Self::Dependent => write!(f, "dependent placement"),
            Self::Validation => write!(f, "validation"),
        }
    }
}

/// Why a single attempt was abandoned.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AttemptFailure {
    /// Zero-based attempt index.
    pub attempt: usize,
    /// Stage that failed.
    pub stage: Stage,
    /// Report of the final check, if the attempt got that far.
    pub report: Option<ValidationReport>,
}

/// Terminal failure after the attempt budget is spent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchFailure {
    /// Number of attempts made.
    pub attempts: usize,
    /// The last attempt's failure, if any attempt ran.
    pub last: Option<AttemptFailure>,
}

impl SearchFailure {
    /// Returns the stage at which the last attempt failed.
    pub fn last_stage(&self) -> Option<Stage> {
        self.last.map(|f| f.stage)
    }

    /// Returns the last attempt's validation report, if it reached validation.
    pub fn last_report(&self) -> Option<&ValidationReport> {
        self.last.as_ref().and_then(|f| f.report.as_ref())
    }
}

impl fmt::Display for SearchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no valid layout found after {} attempts",
            self.attempts
        )?;
        if let Some(last) = &self.last {
            write!(f, " (last attempt failed at {}", last.stage)?;
            if let Some(report) = &last.report {
                write!(
                    f,
                    ": distance {:.2}, center-of-mass deviation {:.2}",
                    report.anchor_distance, report.center_of_mass_deviation
                )?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

/// A successful search.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchOutcome {
    /// The valid layout.
    pub layout: Layout,
    /// Its validation report; every constraint holds.
    pub report: ValidationReport,
    /// Zero-based index of the successful attempt.
    pub attempt: usize,
    /// Computation time in milliseconds.
    pub computation_time_ms: u64,
}

impl SearchOutcome {
    /// Returns the number of attempts consumed, including the successful one.
    pub fn attempts_used(&self) -> usize {
        self.attempt + 1
    }

    /// Splits the outcome into layout and report.
    pub fn into_parts(self) -> (Layout, ValidationReport) {
        (self.layout, self.report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Rect};

    fn report(deviation: f64) -> ValidationReport {
        ValidationReport {
            proximity_ok: true,
            center_of_mass_ok: false,
            keepout_ok: true,
            overlap_ok: true,
            anchor_distance: 9.2195,
            center_of_mass_deviation: deviation,
            center_of_mass: Point::new(25.0, 27.5),
            keepout_zone: Rect::new(19.5, 30.0, 10.0, 15.0),
        }
    }

    #[test]
    fn test_stage_order() {
        assert_eq!(Stage::ALL.first(), Some(&Stage::EdgeA));
        assert_eq!(Stage::ALL.last(), Some(&Stage::Validation));
    }

    #[test]
    fn test_failure_display_without_attempts() {
        let failure = SearchFailure {
            attempts: 0,
            last: None,
        };
        assert_eq!(failure.to_string(), "no valid layout found after 0 attempts");
        assert!(failure.last_stage().is_none());
    }

    #[test]
    fn test_failure_display_with_report() {
        let failure = SearchFailure {
            attempts: 500,
            last: Some(AttemptFailure {
                attempt: 499,
                stage: Stage::Validation,
                report: Some(report(2.5)),
            }),
        };
        let msg = failure.to_string();
        assert!(msg.contains("500 attempts"));
        assert!(msg.contains("validation"));
        assert!(msg.contains("deviation 2.50"));
        assert_eq!(failure.last_stage(), Some(Stage::Validation));
        assert!(failure.last_report().is_some());
    }

    #[test]
    fn test_failure_display_edge_stage() {
        let failure = SearchFailure {
            attempts: 3,
            last: Some(AttemptFailure {
                attempt: 2,
                stage: Stage::EdgeA,
                report: None,
            }),
        };
        assert_eq!(
            failure.to_string(),
            "no valid layout found after 3 attempts (last attempt failed at edge A placement)"
        );
    }
}
