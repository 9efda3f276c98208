//! Layout search driver.
//!
//! Each attempt runs a fixed pipeline over freshly created components:
//!
//! | Stage | Strategy |
//! |-------|----------|
//! | `EdgeA` | [`place_on_edge`] on the left edge with the attempt's row hint |
//! | `EdgeB` | [`place_on_edge`] on the right edge with the same hint |
//! | `Interface` | [`place_centered_on_edge`] on the bottom edge |
//! | `Anchor` | [`place_anchor`] |
//! | `Dependent` | [`ProximityPlacer`] |
//! | `Validation` | [`validate_with`]; all four checks must pass |
//!
//! A failed stage abandons the whole attempt and the next attempt starts from
//! scratch with the next row hint. There is no backtracking within an attempt.

use crate::anchor::place_anchor;
use crate::config::SearchConfig;
use crate::edge::{place_centered_on_edge, place_on_edge, Edge};
use crate::proximity::ProximityPlacer;
use std::time::Instant;
use u_placement_core::{
    validate_with, AttemptFailure, Board, Error, Layout, Result, SearchFailure, SearchOutcome,
    Stage, ValidationReport,
};

/// Outcome of a single attempt: a valid layout, or the stage that failed.
pub type AttemptResult = std::result::Result<(Layout, ValidationReport), AttemptFailure>;

/// Restarting layout search.
#[derive(Debug, Clone)]
pub struct LayoutSearch {
    config: SearchConfig,
}

impl LayoutSearch {
    /// Creates a search with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Creates a search with default configuration.
    pub fn default_config() -> Self {
        Self::new(SearchConfig::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs attempts in index order until one produces a valid layout.
    ///
    /// Returns [`Error::SearchExhausted`] once the attempt budget is spent.
    /// Contract violations reported by the validator are returned as soon as
    /// they occur and are never retried.
    pub fn run(&self) -> Result<SearchOutcome> {
        self.config.validate()?;
        let start = Instant::now();
        let mut last = None;

        for attempt in 0..self.config.max_attempts {
            match self.run_attempt(attempt)? {
                Ok((layout, report)) => return Ok(self.success(attempt, layout, report, start)),
                Err(failure) => {
                    log::debug!("attempt {} failed at {}", attempt, failure.stage);
                    last = Some(failure);
                }
            }
        }

        Err(self.exhausted(last))
    }

    /// Runs attempts in parallel and returns the lowest-index success.
    ///
    /// Produces the same outcome as [`run`](Self::run): hints depend only on
    /// the attempt index and the earliest successful index wins.
    #[cfg(feature = "parallel")]
    pub fn run_parallel(&self) -> Result<SearchOutcome> {
        use rayon::prelude::*;

        self.config.validate()?;
        let start = Instant::now();

        let first = (0..self.config.max_attempts)
            .into_par_iter()
            .find_map_first(|attempt| match self.run_attempt(attempt) {
                Ok(Ok(found)) => Some(Ok((attempt, found))),
                Ok(Err(_)) => None,
                Err(e) => Some(Err(e)),
            });

        match first {
            Some(Ok((attempt, (layout, report)))) => {
                Ok(self.success(attempt, layout, report, start))
            }
            Some(Err(e)) => Err(e),
            None => {
                // Re-run the final attempt sequentially for the failure context.
                let last = self.run_attempt(self.config.max_attempts - 1)?.err();
                Err(self.exhausted(last))
            }
        }
    }

    /// Runs a single attempt with fresh components.
    ///
    /// The outer `Result` carries configuration errors and contract
    /// violations; the inner one says whether the attempt produced a valid
    /// layout.
    pub fn attempt(&self, attempt: usize) -> Result<AttemptResult> {
        self.config.validate()?;
        self.run_attempt(attempt)
    }

    /// Attempt body; the configuration has already been validated.
    fn run_attempt(&self, attempt: usize) -> Result<AttemptResult> {
        let config = &self.config;
        let board = &config.board;
        let problem = &config.problem;
        let hint = Some(config.row_hint(attempt)?);

        let mut edge_a = problem.edge_a.instantiate();
        if !place_on_edge(&mut edge_a, Edge::Left, hint, board, config.hint_window) {
            return Ok(Err(abandon(attempt, Stage::EdgeA)));
        }

        let mut edge_b = problem.edge_b.instantiate();
        if !place_on_edge(&mut edge_b, Edge::Right, hint, board, config.hint_window) {
            return Ok(Err(abandon(attempt, Stage::EdgeB)));
        }

        let mut interface = problem.interface.instantiate();
        if !place_centered_on_edge(&mut interface, Edge::Bottom, board) {
            return Ok(Err(abandon(attempt, Stage::Interface)));
        }

        let mut anchor = problem.anchor.instantiate();
        if !place_anchor(&mut anchor, board) {
            return Ok(Err(abandon(attempt, Stage::Anchor)));
        }

        let mut components = vec![edge_a, edge_b, interface, anchor];
        let placer = ProximityPlacer::new(&config.constraints, config.proximity_radius);
        let dependent = problem.dependent.instantiate();
        let Some(dependent) = placer.place(&components[3], &dependent, &components, board)? else {
            return Ok(Err(abandon(attempt, Stage::Dependent)));
        };
        components.push(dependent);

        let layout = Layout::with_components(*board, components);
        let report = validate_with(&layout, &config.constraints)?;
        if !report.is_valid() {
            return Ok(Err(AttemptFailure {
                attempt,
                stage: Stage::Validation,
                report: Some(report),
            }));
        }

        Ok(Ok((layout, report)))
    }

    fn success(
        &self,
        attempt: usize,
        layout: Layout,
        report: ValidationReport,
        start: Instant,
    ) -> SearchOutcome {
        log::info!(
            "valid layout found on attempt {} (distance {:.2}, center-of-mass deviation {:.2})",
            attempt,
            report.anchor_distance,
            report.center_of_mass_deviation
        );
        SearchOutcome {
            layout,
            report,
            attempt,
            computation_time_ms: start.elapsed().as_millis() as u64,
        }
    }

    fn exhausted(&self, last: Option<AttemptFailure>) -> Error {
        let failure = SearchFailure {
            attempts: self.config.max_attempts,
            last,
        };

        match failure.last_report() {
            Some(report) => log::warn!(
                "search exhausted after {} attempts; last attempt failed {:?} \
                 (distance {:.2}, center-of-mass deviation {:.2})",
                failure.attempts,
                report.failed_constraints(),
                report.anchor_distance,
                report.center_of_mass_deviation
            ),
            None => log::warn!(
                "search exhausted after {} attempts; last attempt failed at {}",
                failure.attempts,
                failure
                    .last_stage()
                    .map_or_else(|| "no stage".to_string(), |s| s.to_string())
            ),
        }

        Error::SearchExhausted(failure)
    }
}

fn abandon(attempt: usize, stage: Stage) -> AttemptFailure {
    AttemptFailure {
        attempt,
        stage,
        report: None,
    }
}

/// Searches for a valid layout of the default component set.
///
/// Convenience wrapper around [`LayoutSearch`] for a `board_width` x
/// `board_height` board and the given attempt budget.
pub fn search_layout(
    board_width: i32,
    board_height: i32,
    max_attempts: usize,
) -> Result<(Layout, ValidationReport)> {
    let config = SearchConfig::new()
        .with_board(Board::new(board_width, board_height)?)
        .with_max_attempts(max_attempts);
    LayoutSearch::new(config)
        .run()
        .map(SearchOutcome::into_parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::ProblemInstance;
    use u_placement_core::{within_board, Component};

    #[test]
    fn test_first_attempt_succeeds_on_default_board() {
        let outcome = LayoutSearch::default_config().run().unwrap();
        assert_eq!(outcome.attempt, 0);
        assert_eq!(outcome.attempts_used(), 1);
        assert!(outcome.report.is_valid());
        assert_eq!(outcome.layout.len(), 5);
    }

    #[test]
    fn test_reference_positions() {
        let (layout, _) = search_layout(50, 50, 500).unwrap();
        let pos = |name: &str| layout.get(name).and_then(Component::position);
        assert_eq!(pos("MB1"), Some((0, 10)));
        assert_eq!(pos("MB2"), Some((45, 10)));
        assert_eq!(pos("USB"), Some((22, 45)));
        assert_eq!(pos("μC"), Some((24, 24)));
        assert_eq!(pos("XTAL"), Some((21, 15)));
    }

    #[test]
    fn test_attempt_uses_hint_for_edges() {
        let search = LayoutSearch::default_config();
        let (layout, report) = search.attempt(2).unwrap().unwrap();
        // Hint 17 -> first row within 5 is 12.
        assert_eq!(layout.get("MB1").and_then(Component::position), Some((0, 12)));
        assert_eq!(layout.get("MB2").and_then(Component::position), Some((45, 12)));
        assert!(report.is_valid());
    }

    #[test]
    fn test_low_hint_rows_unbalance_the_layout() {
        // Hint 22 puts both blocks at row 17; no dependent position can pull
        // the center of mass back within 2.0.
        let search = LayoutSearch::default_config();
        let failure = search.attempt(7).unwrap().unwrap_err();
        assert_eq!(failure.stage, Stage::Validation);
        let report = failure.report.unwrap();
        assert!(!report.center_of_mass_ok);
        assert!(report.center_of_mass_deviation > 2.0);
    }

    #[test]
    fn test_attempts_are_independent() {
        let search = LayoutSearch::default_config();
        let first = search.attempt(3).unwrap();
        let _ = search.attempt(4).unwrap();
        let again = search.attempt(3).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn test_small_board_fails_at_edge_stage() {
        let config = SearchConfig::new()
            .with_board(Board::new(10, 10).unwrap())
            .with_max_attempts(20);
        let err = LayoutSearch::new(config).run().unwrap_err();
        match err {
            Error::SearchExhausted(failure) => {
                assert_eq!(failure.attempts, 20);
                assert_eq!(failure.last_stage(), Some(Stage::EdgeA));
                assert!(failure.last_report().is_none());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_zero_proximity_cap_fails_at_dependent_stage() {
        let config = SearchConfig::new()
            .with_proximity_cap(0.0)
            .with_max_attempts(12);
        let err = LayoutSearch::new(config).run().unwrap_err();
        match err {
            Error::SearchExhausted(failure) => {
                assert_eq!(failure.last_stage(), Some(Stage::Dependent));
                assert_eq!(failure.last.map(|f| f.attempt), Some(11));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_tight_tolerance_fails_at_validation() {
        let config = SearchConfig::new()
            .with_center_of_mass_tolerance(0.1)
            .with_max_attempts(3);
        let err = LayoutSearch::new(config).run().unwrap_err();
        match err {
            Error::SearchExhausted(failure) => {
                assert_eq!(failure.last_stage(), Some(Stage::Validation));
                let report = failure.last_report().unwrap();
                assert!(!report.center_of_mass_ok);
                assert!(report.proximity_ok && report.keepout_ok && report.overlap_ok);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_config_is_rejected_before_search() {
        let err = LayoutSearch::new(SearchConfig::new().with_max_attempts(0))
            .run()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_overflowing_hint_base_is_rejected() {
        let search = LayoutSearch::new(
            SearchConfig::new()
                .with_hints(i32::MAX, 10)
                .with_max_attempts(3),
        );
        assert!(matches!(search.run(), Err(Error::InvalidConfig(_))));
        assert!(matches!(search.attempt(1), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_single_attempt_rejects_zero_hint_cycle() {
        let search = LayoutSearch::new(SearchConfig::new().with_hints(15, 0));
        assert!(matches!(search.attempt(0), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_invalid_board_dimensions() {
        assert!(matches!(
            search_layout(0, 50, 10),
            Err(Error::InvalidBoard(_))
        ));
    }

    #[test]
    fn test_custom_component_names() {
        let mut problem = ProblemInstance::default();
        problem.anchor.name = "U1".into();
        problem.dependent.name = "Y1".into();
        problem.interface.name = "J1".into();

        let outcome = LayoutSearch::new(SearchConfig::new().with_problem(problem))
            .run()
            .unwrap();
        assert!(outcome.layout.get("Y1").is_some());
        assert!(outcome
            .layout
            .components()
            .iter()
            .all(|c| within_board(c, outcome.layout.board())));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let search = LayoutSearch::default_config();
        let seq = search.run().unwrap();
        let par = search.run_parallel().unwrap();
        assert_eq!(seq.attempt, par.attempt);
        assert_eq!(seq.layout, par.layout);
        assert_eq!(seq.report, par.report);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_exhaustion_reports_last_attempt() {
        let search = LayoutSearch::new(
            SearchConfig::new()
                .with_proximity_cap(0.0)
                .with_max_attempts(8),
        );
        match search.run_parallel().unwrap_err() {
            Error::SearchExhausted(failure) => {
                assert_eq!(failure.attempts, 8);
                assert_eq!(failure.last.map(|f| f.attempt), Some(7));
                assert_eq!(failure.last_stage(), Some(Stage::Dependent));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
