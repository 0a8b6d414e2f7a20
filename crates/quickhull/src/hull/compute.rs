//! Hull computation: seed scan, work-stack divide loop, edge emission.

use nalgebra::Vector2;

use super::buffers::PingPong;
use super::predicates::{dist_from_line, line_coeffs};
use super::types::{EdgeKind, HullCfg, HullEdge, HullError, Point, PointId};

/// Compute the convex hull of `points`.
///
/// Flags every hull vertex in place and returns the boundary edges as one
/// closed, consistently oriented cycle (plus construction chords when
/// `cfg.record_probes` is set). Degenerate inputs are handled, not raised:
/// a single point (or all-identical points) yields zero edges and one
/// flagged point, two points yield the segment as both directed edges, a
/// collinear set yields its two extremes.
///
/// Preconditions
/// - `points` must be non-empty (`HullError::EmptyInput` otherwise).
/// - All on-hull flags must be clear; stale flags from a previous run are
///   never reset here (call [`reset_hull_flags`] between runs).
///
/// Tie policies (deterministic, implementation-defined)
/// - Seed scan: lexicographic min/max by (x, y), first occurrence wins on
///   exact ties.
/// - Farthest-point scan: first encountered maximum wins.
pub fn compute_hull(points: &mut [Point], cfg: HullCfg) -> Result<Vec<HullEdge>, HullError> {
    Runner::new(points, cfg)?.run()
}

/// Clear every on-hull flag.
///
/// The driver-side reset contract: call between runs over the same set,
/// together with discarding the previous edge list.
pub fn reset_hull_flags(points: &mut [Point]) {
    for p in points.iter_mut() {
        p.on_hull = false;
    }
}

/// One pending sub-problem: anchors, inclusive range, source buffer, depth.
struct Task {
    a: PointId,
    b: PointId,
    lo: usize,
    hi: usize,
    src: usize,
    depth: usize,
}

/// Work-stack runner carrying the shared buffers and accumulators.
///
/// The stack replaces the textbook recursion: divide depth on all-extreme
/// inputs (points on a circle) grows linearly with the set, which an
/// explicit stack absorbs on the heap. Children are pushed right-then-left
/// so pop order matches the recursion order and boundary edges come out
/// chained.
struct Runner<'a> {
    points: &'a mut [Point],
    bufs: PingPong,
    edges: Vec<HullEdge>,
    stack: Vec<Task>,
    cutoff: usize,
    record_probes: bool,
}

impl<'a> Runner<'a> {
    fn new(points: &'a mut [Point], cfg: HullCfg) -> Result<Self, HullError> {
        if points.is_empty() {
            return Err(HullError::EmptyInput);
        }
        let n = points.len();
        Ok(Self {
            points,
            bufs: PingPong::new(n),
            edges: Vec::new(),
            stack: Vec::new(),
            cutoff: cfg.max_depth.unwrap_or(n),
            record_probes: cfg.record_probes,
        })
    }

    fn run(mut self) -> Result<Vec<HullEdge>, HullError> {
        let n = self.points.len();
        let (a, b) = self.seed_pair();
        self.points[a.0].on_hull = true;
        self.points[b.0].on_hull = true;
        if self.record_probes {
            self.edges.push(HullEdge {
                a,
                b,
                kind: EdgeKind::Seed,
            });
        }

        let out = self.bufs.split_seed(self.points, a, b)?;
        self.stack.push(Task {
            a: b,
            b: a,
            lo: out.first_right,
            hi: n - 1,
            src: 0,
            depth: 1,
        });
        self.stack.push(Task {
            a,
            b,
            lo: 0,
            hi: out.last_left,
            src: 0,
            depth: 1,
        });
        while let Some(task) = self.stack.pop() {
            self.step(task)?;
        }
        Ok(self.edges)
    }

    /// Process one sub-problem: base case or divide.
    fn step(&mut self, t: Task) -> Result<(), HullError> {
        if t.depth > self.cutoff {
            return Err(HullError::DepthExceeded {
                depth: t.depth,
                cutoff: self.cutoff,
            });
        }
        if t.lo > t.hi {
            return Err(HullError::RangeInvariant { lo: t.lo, hi: t.hi });
        }
        // Empty side: the partition pass left its sentinel at a boundary
        // slot. The chord a→b is a final hull segment.
        if self.bufs.slot(t.src, t.lo).is_none() || self.bufs.slot(t.src, t.hi).is_none() {
            if t.a != t.b {
                self.edges.push(HullEdge::boundary(t.a, t.b));
            }
            return Ok(());
        }

        let c = self.farthest_from_chord(t.a, t.b, t.src, t.lo, t.hi);
        self.points[c.0].on_hull = true;
        if self.record_probes {
            self.edges.push(HullEdge {
                a: t.a,
                b: c,
                kind: EdgeKind::Probe,
            });
            self.edges.push(HullEdge {
                a: c,
                b: t.b,
                kind: EdgeKind::Probe,
            });
        }

        let out = self
            .bufs
            .split_range(self.points, t.a, c, t.b, t.src, t.lo, t.hi)?;
        let dst = 1 - t.src;
        self.stack.push(Task {
            a: c,
            b: t.b,
            lo: out.first_right,
            hi: t.hi,
            src: dst,
            depth: t.depth + 1,
        });
        self.stack.push(Task {
            a: t.a,
            b: c,
            lo: t.lo,
            hi: out.last_left,
            src: dst,
            depth: t.depth + 1,
        });
        Ok(())
    }

    /// Lexicographic extremes of the whole set, first occurrence wins.
    fn seed_pair(&self) -> (PointId, PointId) {
        let mut min = 0usize;
        let mut max = 0usize;
        for (i, p) in self.points.iter().enumerate().skip(1) {
            if lex_less(p.pos, self.points[min].pos) {
                min = i;
            }
            if lex_less(self.points[max].pos, p.pos) {
                max = i;
            }
        }
        (PointId(min), PointId(max))
    }

    /// Point of the range with maximum distance from the chord a-b; the
    /// range is non-empty and holds no flagged points when this runs.
    fn farthest_from_chord(
        &self,
        a: PointId,
        b: PointId,
        src: usize,
        lo: usize,
        hi: usize,
    ) -> PointId {
        let coeffs = line_coeffs(self.points[a.0].pos, self.points[b.0].pos);
        let mut best = self
            .bufs
            .slot(src, lo)
            .expect("non-empty range starts with a point");
        let mut best_dist = dist_from_line(coeffs, self.points[best.0].pos);
        for i in lo + 1..=hi {
            let id = self
                .bufs
                .slot(src, i)
                .expect("interior of a non-empty range is fully populated");
            let d = dist_from_line(coeffs, self.points[id.0].pos);
            if d > best_dist {
                best_dist = d;
                best = id;
            }
        }
        best
    }
}

#[inline]
fn lex_less(a: Vector2<f64>, b: Vector2<f64>) -> bool {
    a.x < b.x || (a.x == b.x && a.y < b.y)
}
