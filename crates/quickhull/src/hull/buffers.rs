//! Ping-pong index buffers and the two partition passes.
//!
//! Purpose
//! - Hold the two working arrays the divide steps alternate between, so no
//!   level of the divide allocates.
//! - Implement the cursor mechanics: one cursor grows from the low end of
//!   the destination range (left-of-first-chord points), the other retreats
//!   from the high end (left-of-second-chord points). Both stay inside the
//!   same sub-range, so the two results are disjoint and together never
//!   exceed the input range's capacity.
//!
//! Sentinel encoding
//! - A side that receives zero points gets an explicit `None` written at its
//!   boundary slot and a degenerate one-slot range. The consumer
//!   distinguishes "empty side" (boundary slot is `None`) from "exactly one
//!   point" (boundary slot is `Some`). Getting this wrong either drops hull
//!   points or loops forever, hence the in-file tests below.

use super::predicates::strictly_left;
use super::types::{HullError, Point, PointId};

/// One working-buffer cell: a point index, or the empty-side sentinel.
pub(crate) type Slot = Option<PointId>;

/// Boundaries of the two inclusive sub-ranges written by a partition pass:
/// left side occupies `lo..=last_left`, right side `first_right..=hi`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SplitOut {
    pub last_left: usize,
    pub first_right: usize,
}

/// The two alternating working buffers, both sized to the input.
pub(crate) struct PingPong {
    bufs: [Vec<Slot>; 2],
}

impl PingPong {
    pub fn new(n: usize) -> Self {
        Self {
            bufs: [vec![None; n], vec![None; n]],
        }
    }

    #[inline]
    pub fn slot(&self, side: usize, i: usize) -> Slot {
        self.bufs[side][i]
    }

    /// Initial partition of the whole set about the seed chord a→b,
    /// written into buffer 0 over the full range.
    ///
    /// Points exactly on the chord, and points already flagged on-hull
    /// (the two anchors), land on neither side.
    pub fn split_seed(
        &mut self,
        points: &[Point],
        a: PointId,
        b: PointId,
    ) -> Result<SplitOut, HullError> {
        let (lo, hi) = (0usize, points.len() - 1);
        let pa = points[a.0].pos;
        let pb = points[b.0].pos;
        let dst = &mut self.bufs[0];

        let mut n_left = 0usize;
        let mut n_right = 0usize;
        for (i, p) in points.iter().enumerate() {
            if p.on_hull {
                continue;
            }
            if strictly_left(pa, pb, p.pos) {
                if lo + n_left + n_right > hi {
                    return Err(HullError::RangeInvariant { lo, hi });
                }
                dst[lo + n_left] = Some(PointId(i));
                n_left += 1;
            } else if strictly_left(pb, pa, p.pos) {
                if lo + n_left + n_right > hi {
                    return Err(HullError::RangeInvariant { lo, hi });
                }
                dst[hi - n_right] = Some(PointId(i));
                n_right += 1;
            }
        }
        Ok(seal(dst, lo, hi, n_left, n_right))
    }

    /// Partition the source sub-range `lo..=hi` about the probe chords a→c
    /// and c→b, written into the other buffer over the same sub-range.
    ///
    /// Points left of neither chord lie inside the triangle a-b-c and are
    /// discarded; `c` itself is skipped via its fresh on-hull flag.
    pub fn split_range(
        &mut self,
        points: &[Point],
        a: PointId,
        c: PointId,
        b: PointId,
        src: usize,
        lo: usize,
        hi: usize,
    ) -> Result<SplitOut, HullError> {
        debug_assert!(lo <= hi && hi < points.len());
        let pa = points[a.0].pos;
        let pc = points[c.0].pos;
        let pb = points[b.0].pos;
        let (src_buf, dst) = self.pair_mut(src);

        let mut n_left = 0usize;
        let mut n_right = 0usize;
        for slot in &src_buf[lo..=hi] {
            let id = match slot {
                Some(id) => *id,
                None => continue,
            };
            let p = &points[id.0];
            if p.on_hull {
                continue;
            }
            if strictly_left(pa, pc, p.pos) {
                if lo + n_left + n_right > hi {
                    return Err(HullError::RangeInvariant { lo, hi });
                }
                dst[lo + n_left] = Some(id);
                n_left += 1;
            } else if strictly_left(pc, pb, p.pos) {
                if lo + n_left + n_right > hi {
                    return Err(HullError::RangeInvariant { lo, hi });
                }
                dst[hi - n_right] = Some(id);
                n_right += 1;
            }
        }
        Ok(seal(dst, lo, hi, n_left, n_right))
    }

    /// Borrow `src` immutably and the other buffer mutably.
    fn pair_mut(&mut self, src: usize) -> (&[Slot], &mut [Slot]) {
        let [first, second] = &mut self.bufs;
        if src == 0 {
            (first.as_slice(), second.as_mut_slice())
        } else {
            (second.as_slice(), first.as_mut_slice())
        }
    }
}

/// Finalize a partition pass: write the empty-side sentinels and return the
/// sub-range boundaries.
///
/// The capacity checks in the write loops guarantee the sentinel slot of an
/// empty side was not claimed by the other cursor: the anchors (or `c`) are
/// flagged and skipped, so at least one slot of the range stays free.
fn seal(dst: &mut [Slot], lo: usize, hi: usize, n_left: usize, n_right: usize) -> SplitOut {
    let last_left = if n_left == 0 {
        dst[lo] = None;
        lo
    } else {
        lo + n_left - 1
    };
    let first_right = if n_right == 0 {
        dst[hi] = None;
        hi
    } else {
        hi - n_right + 1
    };
    SplitOut {
        last_left,
        first_right,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords
            .iter()
            .map(|&(x, y)| Point::new(Vector2::new(x, y)))
            .collect()
    }

    #[test]
    fn seed_split_partitions_both_sides_and_drops_on_line() {
        // Chord (0,0)→(4,0); one point above, one below, one on the chord.
        let mut points = pts(&[(0.0, 0.0), (4.0, 0.0), (1.0, 1.0), (3.0, -1.0), (2.0, 0.0)]);
        points[0].on_hull = true;
        points[1].on_hull = true;
        let mut bufs = PingPong::new(points.len());
        let out = bufs.split_seed(&points, PointId(0), PointId(1)).unwrap();
        // Left side: exactly (1,1).
        assert_eq!(out.last_left, 0);
        assert_eq!(bufs.slot(0, 0), Some(PointId(2)));
        // Right side: exactly (3,-1); the on-chord point is on neither side.
        assert_eq!(out.first_right, 4);
        assert_eq!(bufs.slot(0, 4), Some(PointId(3)));
    }

    #[test]
    fn seed_split_writes_sentinels_for_empty_sides() {
        let mut points = pts(&[(0.0, 0.0), (4.0, 0.0), (2.0, 0.0)]);
        points[0].on_hull = true;
        points[1].on_hull = true;
        let mut bufs = PingPong::new(points.len());
        let out = bufs.split_seed(&points, PointId(0), PointId(1)).unwrap();
        assert_eq!(out.last_left, 0);
        assert_eq!(out.first_right, 2);
        assert_eq!(bufs.slot(0, 0), None);
        assert_eq!(bufs.slot(0, 2), None);
    }

    #[test]
    fn range_split_skips_fresh_hull_point_and_preserves_count() {
        // Anchors (0,0) and (4,0); apex c = (2,2); two survivors, one
        // triangle-interior point to discard.
        let mut points = pts(&[
            (0.0, 0.0), // a, on hull
            (4.0, 0.0), // b, on hull
            (2.0, 2.0), // c, flagged below
            (0.5, 1.0), // left of a→c
            (3.5, 1.0), // left of c→b
            (2.0, 0.5), // inside the triangle
        ]);
        points[0].on_hull = true;
        points[1].on_hull = true;
        let mut bufs = PingPong::new(points.len());
        let out = bufs.split_seed(&points, PointId(0), PointId(1)).unwrap();
        // All four candidates sit above the chord.
        assert_eq!(out.last_left, 3);

        points[2].on_hull = true;
        let sub = bufs
            .split_range(&points, PointId(0), PointId(2), PointId(1), 0, 0, 3)
            .unwrap();
        assert_eq!(bufs.slot(1, sub.last_left), Some(PointId(3)));
        assert_eq!(bufs.slot(1, sub.first_right), Some(PointId(4)));
        // One survivor per side, interior point gone.
        assert_eq!(sub.last_left, 0);
        assert_eq!(sub.first_right, 3);
    }

    #[test]
    fn range_split_empty_sides_signal_base_case() {
        // Apex is the only candidate above the chord; both child ranges
        // must come back empty with sentinels at their boundary slots.
        let mut points = pts(&[(0.0, 0.0), (4.0, 0.0), (2.0, 2.0)]);
        points[0].on_hull = true;
        points[1].on_hull = true;
        let mut bufs = PingPong::new(points.len());
        let out = bufs.split_seed(&points, PointId(0), PointId(1)).unwrap();
        assert_eq!((out.last_left, out.first_right), (0, 2));

        points[2].on_hull = true;
        let sub = bufs
            .split_range(&points, PointId(0), PointId(2), PointId(1), 0, 0, 0)
            .unwrap();
        assert_eq!(sub.last_left, 0);
        assert_eq!(sub.first_right, 0);
        assert_eq!(bufs.slot(1, 0), None);
    }
}
