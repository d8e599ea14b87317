//! Patrol route synthesis.
//!
//! A scanner bot patrols the open cavity around it. The route is a greedy
//! walk over the reachable cells that touch at least one tile: each step
//! moves to the least visited neighbor, preferring cells close to the
//! previous position and penalising an immediate step back. The walk stops
//! as soon as every cell has been visited once.

use digbots_core::{GridWorld, Point, Range};
use log::debug;

use crate::Navigator;
use crate::error::{PathError, fail_soft};
use crate::neighbors::Neighbors;

/// Per-cell visit counters over a bounded grid. Cells outside the patrolled
/// region have no counter.
struct VisitMap {
    bounds: Range,
    counts: Vec<Option<u32>>,
    uncovered: usize,
}

impl VisitMap {
    fn new(bounds: Range, cells: impl IntoIterator<Item = Point>) -> Self {
        let mut counts = vec![None; bounds.len()];
        let mut uncovered = 0;
        for p in cells {
            if let Some(i) = bounds.index_of(p) {
                if counts[i].is_none() {
                    counts[i] = Some(0);
                    uncovered += 1;
                }
            }
        }
        Self {
            bounds,
            counts,
            uncovered,
        }
    }

    #[inline]
    fn get(&self, p: Point) -> Option<u32> {
        self.bounds.index_of(p).and_then(|i| self.counts[i])
    }

    fn contains(&self, p: Point) -> bool {
        self.get(p).is_some()
    }

    fn visit(&mut self, p: Point) {
        let Some(i) = self.bounds.index_of(p) else {
            return;
        };
        if let Some(count) = self.counts[i].as_mut() {
            if *count == 0 {
                self.uncovered -= 1;
            }
            *count += 1;
        }
    }

    fn len(&self) -> usize {
        self.counts.iter().flatten().count()
    }
}

/// Greedy least-visited walk from `first` until every cell in `visits` has
/// been entered at least once.
fn cover(
    mut visits: VisitMap,
    first: Point,
    backtrack_penalty: f64,
    limit: usize,
) -> Result<Vec<Point>, PathError> {
    let mut nb = Neighbors::new();
    let mut route = Vec::new();
    let mut previous = first;
    let mut current = first;

    loop {
        if route.len() >= limit {
            return Err(PathError::StepLimitExceeded {
                steps: route.len(),
                remaining: visits.uncovered,
            });
        }
        visits.visit(current);
        route.push(current);
        if visits.uncovered == 0 {
            return Ok(route);
        }

        let candidates = nb.cardinal(current, |n| visits.contains(n));
        let fewest = candidates.iter().filter_map(|&n| visits.get(n)).min();
        let score = |n: Point| {
            let d = n.distance(previous);
            if n == previous { d + backtrack_penalty } else { d }
        };
        let next = candidates
            .iter()
            .copied()
            .filter(|&n| fewest.is_some() && visits.get(n) == fewest)
            .min_by(|a, b| score(*a).total_cmp(&score(*b)));
        let Some(next) = next else {
            return Err(PathError::DeadEnd {
                at: current,
                remaining: visits.uncovered,
            });
        };

        previous = current;
        current = next;
    }
}

impl<W: GridWorld> Navigator<'_, W> {
    /// Visiting order covering every non-orphaned cell reachable from
    /// `start` without digging.
    ///
    /// The route begins at the covered cell closest to the top-left corner
    /// of the grid, not necessarily at `start`. An empty route means the
    /// cavity has no cell worth patrolling.
    pub fn try_patrol_route(&self, start: Point) -> Result<Vec<Point>, PathError> {
        let bounds = self.bounds();
        if !bounds.contains(start) {
            return Err(PathError::OutOfBounds { cell: start, bounds });
        }

        let region: Vec<Point> = self
            .try_flood_reachable(start, false)?
            .into_iter()
            .filter(|p| !self.is_orphaned(*p))
            .collect();

        let anchor = bounds.top_left();
        let Some(first) = region.iter().copied().min_by(|a, b| {
            a.distance(anchor)
                .total_cmp(&b.distance(anchor))
                .then(a.cmp(b))
        }) else {
            debug!("patrol from {start}: no cell touches a tile");
            return Ok(Vec::new());
        };

        let visits = VisitMap::new(bounds, region);
        let cells = visits.len();
        let limit = self.config.patrol_limit(cells);
        let route = cover(visits, first, self.config.backtrack_penalty, limit)?;
        debug!("patrol from {start}: {} steps over {cells} cells", route.len());
        Ok(route)
    }

    /// Fail-soft [`try_patrol_route`](Self::try_patrol_route): logs and
    /// returns an empty route on error.
    pub fn patrol_route(&self, start: Point) -> Vec<Point> {
        fail_soft("patrol route", self.try_patrol_route(start))
    }
}
