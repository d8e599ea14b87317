//! Weighted A* over the dig cost model.
//!
//! Step cost is the Euclidean length of the move plus the entry cost of the
//! destination cell (see [`DigPather::entry_cost`]). Tile HP is read once per
//! query and never decremented during the search.
//!
//! The heuristic is the straight-line distance to the goal. Every step costs
//! at least its own length, so the estimate never overshoots and returned
//! paths are cheapest under the cost model.
//!
//! [`DigPather::entry_cost`]: crate::DigPather::entry_cost

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use digbots_core::{GridWorld, Point, Range};
use log::debug;

use crate::Navigator;
use crate::error::{PathError, fail_soft};
use crate::traits::{AstarPather, WeightedPather};

/// Open-set entry. Ordered so the `BinaryHeap` pops the lowest `f` first,
/// and among equal `f` the entry pushed first.
#[derive(Clone, Copy)]
struct OpenEntry {
    idx: usize,
    f: f64,
    seq: u64,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest path from `from` to `to`, both endpoints included.
pub(crate) fn astar<P: AstarPather>(
    pather: &P,
    bounds: Range,
    from: Point,
    to: Point,
) -> Result<Vec<Point>, PathError> {
    let start_idx = bounds
        .index_of(from)
        .ok_or(PathError::OutOfBounds { cell: from, bounds })?;
    let goal_idx = bounds
        .index_of(to)
        .ok_or(PathError::OutOfBounds { cell: to, bounds })?;

    if start_idx == goal_idx {
        return Ok(vec![from]);
    }

    let len = bounds.len();
    let mut g = vec![f64::INFINITY; len];
    let mut came_from: Vec<Option<usize>> = vec![None; len];
    let mut closed = vec![false; len];
    let mut open = BinaryHeap::new();
    let mut seq = 0u64;
    let mut nbuf = Vec::with_capacity(4);
    let mut expanded = 0usize;

    g[start_idx] = 0.0;
    open.push(OpenEntry {
        idx: start_idx,
        f: pather.estimate(from, to),
        seq,
    });

    let found = 'search: loop {
        let Some(current) = open.pop() else {
            break 'search false;
        };
        let ci = current.idx;

        // Stale entry for a cell already finalized through a cheaper route.
        if closed[ci] {
            continue;
        }
        if ci == goal_idx {
            break 'search true;
        }
        closed[ci] = true;
        expanded += 1;

        let cp = bounds.point_at(ci);
        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = bounds.index_of(np) else {
                continue;
            };
            if closed[ni] {
                continue;
            }
            let tentative = g[ci] + pather.cost(cp, np);
            if tentative >= g[ni] {
                continue;
            }
            g[ni] = tentative;
            came_from[ni] = Some(ci);
            seq += 1;
            open.push(OpenEntry {
                idx: ni,
                f: tentative + pather.estimate(np, to),
                seq,
            });
        }
    };

    if !found {
        debug!("astar {from} -> {to}: exhausted after {expanded} expansions");
        return Err(PathError::Unreachable { from, to });
    }

    let mut path = Vec::new();
    let mut cursor = Some(goal_idx);
    while let Some(ci) = cursor {
        path.push(bounds.point_at(ci));
        cursor = came_from[ci];
    }
    path.reverse();
    debug!(
        "astar {from} -> {to}: {} cells, cost {:.1}, {expanded} expansions",
        path.len(),
        g[goal_idx]
    );
    Ok(path)
}

impl<W: GridWorld> Navigator<'_, W> {
    /// Cheapest path from `start` to `goal`, both included.
    ///
    /// With `can_dig` the path may run through breakable tiles, priced by
    /// their current HP. `start` itself may hold a tile.
    pub fn try_find_path(
        &self,
        start: Point,
        goal: Point,
        can_dig: bool,
    ) -> Result<Vec<Point>, PathError> {
        astar(&self.pather(can_dig), self.bounds(), start, goal)
    }

    /// Fail-soft [`try_find_path`](Self::try_find_path): logs and returns an
    /// empty path on error.
    pub fn find_path(&self, start: Point, goal: Point, can_dig: bool) -> Vec<Point> {
        fail_soft("find path", self.try_find_path(start, goal, can_dig))
    }

    /// Cost of entering `to` from `from` under the search's cost model.
    pub fn step_cost(&self, from: Point, to: Point) -> f64 {
        self.pather(true).cost(from, to)
    }

    /// Total cost of walking `path`. The starting cell is free.
    pub fn path_cost(&self, path: &[Point]) -> f64 {
        path.windows(2).map(|w| self.step_cost(w[0], w[1])).sum()
    }
}
