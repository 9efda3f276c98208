//! # U-Placement Core
//!
//! Core types for the U-Placement component layout engine.
//!
//! This crate holds everything the placement strategies and the search driver
//! share: geometry primitives, the board, the component model, layouts, the
//! constraint configuration and the validator.
//!
//! ## Core Components
//!
//! - **Geometry**: [`Point`], [`Rect`], [`distance`], [`overlaps`],
//!   [`segment_intersects_rect`]
//! - **Model**: [`Board`], [`Component`], [`ComponentSpec`], [`Rotation`], [`Layout`]
//! - **Validation**: [`Constraints`], [`validate`], [`validate_with`], [`ValidationReport`]
//! - **Results**: [`SearchOutcome`], [`SearchFailure`], [`Stage`]
//!
//! ## Coordinates
//!
//! Positions live on an integer grid with the origin at the board's top-left
//! corner. The "bottom" edge is at `y = height`.
//!
//! ## Example
//!
//! ```rust
//! use u_placement_core::{validate, Board, Component, Layout};
//!
//! let mut layout = Layout::new(Board::default());
//! for (name, w, h, x, y) in [
//!     ("MB1", 5, 15, 0, 10),
//!     ("MB2", 5, 15, 45, 10),
//!     ("USB", 5, 5, 22, 45),
//!     ("μC", 5, 5, 24, 24),
//!     ("XTAL", 5, 5, 22, 15),
//! ] {
//!     let mut c = Component::new(name, w, h);
//!     c.set_position(x, y);
//!     layout.push(c);
//! }
//!
//! let report = validate(&layout).unwrap();
//! assert!(report.is_valid());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod board;
pub mod component;
pub mod constraints;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod result;
pub mod validate;

// Re-exports
pub use board::{Board, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};
pub use component::{within_board, Component, ComponentId, ComponentSpec, Rotation};
pub use constraints::Constraints;
pub use error::{Error, Result};
pub use geometry::{distance, overlaps, segment_intersects_rect, Point, Rect};
pub use layout::Layout;
pub use result::{AttemptFailure, SearchFailure, SearchOutcome, Stage};
pub use validate::{center_of_mass, keepout_zone, validate, validate_with, ValidationReport};
