//! Data model for the hull computation.
//!
//! Kept small and explicit to make `buffers` and `compute` easy to read.

use nalgebra::Vector2;
use thiserror::Error;

/// Index of a point in the caller's slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointId(pub usize);

/// A 2D point plus its hull marker.
///
/// The position never moves during a computation; only `on_hull` is written.
/// Callers must clear the flags between runs (see `reset_hull_flags`), the
/// algorithm itself never does.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub pos: Vector2<f64>,
    pub on_hull: bool,
}

impl Point {
    #[inline]
    pub fn new(pos: Vector2<f64>) -> Self {
        Self {
            pos,
            on_hull: false,
        }
    }
}

/// Kind of emitted segment.
///
/// `Boundary` edges are the hull; `Seed` and `Probe` are the construction
/// chords (seed chord A-B, probe chords A-C and C-B) recorded only when
/// `HullCfg::record_probes` is set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeKind {
    Boundary,
    Seed,
    Probe,
}

/// A segment between two points of the input set, by id.
///
/// Edges hold no ownership; they are only valid against the slice the
/// computation ran on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HullEdge {
    pub a: PointId,
    pub b: PointId,
    pub kind: EdgeKind,
}

impl HullEdge {
    #[inline]
    pub(crate) fn boundary(a: PointId, b: PointId) -> Self {
        Self {
            a,
            b,
            kind: EdgeKind::Boundary,
        }
    }
}

/// Hull computation configuration.
#[derive(Clone, Copy, Debug)]
pub struct HullCfg {
    /// Also emit `Seed`/`Probe` construction chords in encounter order.
    pub record_probes: bool,
    /// Safety cutoff on divide depth; `None` means the input length, which
    /// a well-formed run can never exceed (each level flags one new point).
    pub max_depth: Option<usize>,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            record_probes: false,
            max_depth: None,
        }
    }
}

/// Failures of the hull computation.
///
/// `EmptyInput` is the only caller-facing condition; the other two signal a
/// broken internal invariant and are surfaced instead of producing a wrong
/// hull silently.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum HullError {
    #[error("empty input point set")]
    EmptyInput,
    #[error("partition cursors crossed in range {lo}..={hi}")]
    RangeInvariant { lo: usize, hi: usize },
    #[error("divide depth {depth} exceeded cutoff {cutoff}")]
    DepthExceeded { depth: usize, cutoff: usize },
}
