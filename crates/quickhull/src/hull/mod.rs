//! QuickHull over an index arena with ping-pong partition buffers.
//!
//! Purpose
//! - Provide a single, strict hull computation: points in, ordered boundary
//!   edges out, hull members flagged in place.
//! - Keep the divide-and-conquer state explicit: two index buffers swapped
//!   per level, inclusive ranges, a `None` sentinel for empty sides.
//!
//! Why this design
//! - The classic formulation recurses with two pointer arrays; indices into
//!   the caller's slice keep the zero-allocation-per-level property without
//!   aliasing hazards, and an explicit work stack bounds memory instead of
//!   the call stack on adversarial (all-extreme) inputs.
//!
//! Code cross-refs: `types::{Point, HullEdge, HullCfg}`, `buffers::PingPong`,
//! `predicates::{strictly_left, dist_from_line}`.

mod buffers;
mod compute;
mod predicates;
mod types;

pub use compute::{compute_hull, reset_hull_flags};
pub use predicates::strictly_left;
pub use types::{EdgeKind, HullCfg, HullEdge, HullError, Point, PointId};
