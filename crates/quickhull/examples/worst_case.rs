//! Timing probe for the all-extreme input.
//!
//! Purpose
//! - Provide a reproducible data point for "how long does a hull over n
//!   circle points take?", the arrangement where every point is a hull
//!   vertex and the divide gets no pruning benefit.

use std::time::Instant;

use quickhull::prelude::*;

fn main() {
    for n in [1_000usize, 10_000, 100_000] {
        let mut points = scatter_circle(n);
        let start = Instant::now();
        let edges = compute_hull(&mut points, HullCfg::default()).expect("non-empty input");
        let elapsed = start.elapsed().as_secs_f64() * 1e3;
        let hull = points.iter().filter(|p| p.on_hull).count();
        println!("n={n} hull={hull} edges={} ms={elapsed:.3}", edges.len());
    }
}
