//! # U-Placement Search
//!
//! Placement strategies and the restarting layout search for the U-Placement
//! engine.
//!
//! ## Strategies
//!
//! | Strategy | Module | Description |
//! |----------|--------|-------------|
//! | Edge | [`edge`] | Flush against a board edge, first row near a hint |
//! | Anchor | [`anchor`] | 2x2 block of positions around the board center |
//! | Proximity | [`proximity`] | Neighborhood search around the anchor, scored by center-of-mass deviation |
//!
//! [`LayoutSearch`] chains them into a fixed per-attempt pipeline and restarts
//! the whole attempt with a new row hint whenever a stage fails.
//!
//! ## Quick Start
//!
//! ```rust
//! use u_placement_search::search_layout;
//!
//! let (layout, report) = search_layout(50, 50, 500).unwrap();
//! assert!(report.is_valid());
//! assert_eq!(layout.len(), 5);
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use u_placement_search::{LayoutSearch, SearchConfig};
//!
//! let config = SearchConfig::new()
//!     .with_max_attempts(100)
//!     .with_proximity_cap(8.0)
//!     .with_center_of_mass_tolerance(2.5);
//!
//! let outcome = LayoutSearch::new(config).run().unwrap();
//! println!("found on attempt {}", outcome.attempt);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support
//! - `parallel`: Evaluate attempts in parallel with rayon

pub mod anchor;
pub mod config;
pub mod driver;
pub mod edge;
pub mod problem;
pub mod proximity;

// Re-exports
pub use anchor::place_anchor;
pub use config::{row_hint, SearchConfig};
pub use driver::{search_layout, AttemptResult, LayoutSearch};
pub use edge::{place_centered_on_edge, place_on_edge, Edge};
pub use problem::ProblemInstance;
pub use proximity::ProximityPlacer;
pub use u_placement_core::{
    validate, validate_with, Board, Component, ComponentSpec, Constraints, Error, Layout, Result,
    Rotation, SearchFailure, SearchOutcome, Stage, ValidationReport,
};
