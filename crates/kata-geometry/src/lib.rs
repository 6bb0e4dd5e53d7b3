//! Geometric predicates and serializable shapes for the kata exercises.
//!
//! # Scope
//!
//! - **Predicates**: triangle inequality, axis-aligned rectangle overlap,
//!   point-in-circle containment
//! - **Shapes**: a [`Rectangle`] value type with its area
//! - **JSON**: generic [`to_json`]/[`from_json`] helpers that produce and
//!   populate fixed-shape value types

/// Generic JSON round trip for serde value types.
pub mod json;
/// Pure geometric predicates.
pub mod predicates;
/// Plain shape value types.
pub mod shapes;

pub use json::{JsonError, from_json, to_json};
pub use predicates::{Bounds, do_rectangles_overlap, is_inside_circle, is_triangle};
pub use shapes::{Circle, Point, Rectangle};
