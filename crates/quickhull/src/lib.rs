//! QuickHull convex hulls over mutable 2D point sets.
//!
//! Purpose
//! - Compute the convex hull of a fixed, caller-owned set of 2D points by
//!   divide and conquer, tagging hull members in place and returning the
//!   ordered boundary edges.
//! - Keep the working state to two reusable index buffers (ping-pong
//!   partitioning) so no allocation happens per divide step.
//!
//! Layout
//! - `hull`: the algorithm, its data model, and numerical predicates.
//! - `sample`: deterministic point scatters (uniform square, circle worst
//!   case) used by the driver, benches, and tests.

pub mod hull;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::{
        compute_hull, reset_hull_flags, EdgeKind, HullCfg, HullEdge, HullError, Point, PointId,
    };
    pub use crate::sample::{scatter_circle, scatter_uniform, ReplayToken, Scatter};
    pub use nalgebra::Vector2 as Vec2;
}
