//! Reachability flood fill.

use std::collections::HashSet;

use digbots_core::{GridWorld, Point, Range};
use log::debug;

use crate::Navigator;
use crate::error::{PathError, fail_soft};
use crate::traits::Pather;

/// Collect every cell reachable from `seed` through `pather`'s neighbors.
///
/// Iterative DFS with an explicit stack. Cells are marked when pushed, so
/// the stack never holds duplicates and each reachable cell is emitted
/// exactly once, seed first.
pub(crate) fn flood<P: Pather>(pather: &P, bounds: Range, seed: Point) -> Vec<Point> {
    let mut result = Vec::new();
    let Some(si) = bounds.index_of(seed) else {
        return result;
    };

    let mut seen = vec![false; bounds.len()];
    let mut stack = vec![seed];
    let mut nbuf = Vec::with_capacity(4);
    seen[si] = true;
    result.push(seed);

    while let Some(cp) = stack.pop() {
        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);
        for &np in nbuf.iter() {
            let Some(ni) = bounds.index_of(np) else {
                continue;
            };
            if !seen[ni] {
                seen[ni] = true;
                stack.push(np);
                result.push(np);
            }
        }
    }
    result
}

impl<W: GridWorld> Navigator<'_, W> {
    /// Every cell reachable from `seed` by orthogonal steps, seed included.
    ///
    /// `seed` must be an in-bounds empty cell.
    pub fn try_flood_reachable(
        &self,
        seed: Point,
        can_dig: bool,
    ) -> Result<Vec<Point>, PathError> {
        let bounds = self.bounds();
        if !bounds.contains(seed) {
            return Err(PathError::OutOfBounds { cell: seed, bounds });
        }
        if !self.world.is_empty_at(seed) {
            return Err(PathError::PreconditionViolation { cell: seed });
        }
        let cells = flood(&self.pather(can_dig), bounds, seed);
        debug!("flood from {seed}: {} cells", cells.len());
        Ok(cells)
    }

    /// Fail-soft [`try_flood_reachable`](Self::try_flood_reachable): logs
    /// and returns an empty list on error.
    pub fn flood_reachable(&self, seed: Point, can_dig: bool) -> Vec<Point> {
        fail_soft("flood fill", self.try_flood_reachable(seed, can_dig))
    }

    /// [`flood_reachable`](Self::flood_reachable) as a set.
    pub fn reachable_set(&self, seed: Point, can_dig: bool) -> HashSet<Point> {
        self.flood_reachable(seed, can_dig).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use digbots_core::{LevelMap, TileKind};
    use proptest::prelude::*;

    use super::*;

    const POCKETS: &str = "
        ..#...
        ..#.%.
        ###.%.
        ....%*
    ";

    #[test]
    fn fills_connected_empty_cells() {
        let m = LevelMap::parse(POCKETS).unwrap();
        let nav = Navigator::new(&m);
        let cells = nav.flood_reachable(Point::new(0, 3), false);
        assert_eq!(cells[0], Point::new(0, 3));
        let set: HashSet<Point> = cells.iter().copied().collect();
        assert_eq!(set.len(), cells.len());
        assert_eq!(
            set,
            HashSet::from([
                Point::new(0, 3),
                Point::new(1, 3),
                Point::new(0, 2),
                Point::new(1, 2)
            ])
        );
    }

    #[test]
    fn digging_joins_pockets_but_never_enters_bedrock() {
        let m = LevelMap::parse(POCKETS).unwrap();
        let nav = Navigator::new(&m);
        let set = nav.reachable_set(Point::new(0, 3), true);
        assert!(set.contains(&Point::new(3, 0)));
        assert!(set.contains(&Point::new(2, 1)));
        assert!(set.contains(&Point::new(5, 0)));
        for y in 0..3 {
            assert!(!set.contains(&Point::new(4, y)));
        }
        assert_eq!(set.len(), 24 - 3);
    }

    #[test]
    fn occupied_seed_is_rejected() {
        let m = LevelMap::parse(POCKETS).unwrap();
        let nav = Navigator::new(&m);
        let seed = Point::new(2, 3);
        assert_eq!(
            nav.try_flood_reachable(seed, false),
            Err(PathError::PreconditionViolation { cell: seed })
        );
        assert!(nav.flood_reachable(seed, true).is_empty());
    }

    #[test]
    fn out_of_bounds_seed_is_rejected() {
        let m = LevelMap::parse(POCKETS).unwrap();
        let nav = Navigator::new(&m);
        let seed = Point::new(6, 0);
        assert!(matches!(
            nav.try_flood_reachable(seed, false),
            Err(PathError::OutOfBounds { cell, .. }) if cell == seed
        ));
    }

    #[test]
    fn sees_tiles_destroyed_between_calls() {
        let mut m = LevelMap::parse(POCKETS).unwrap();
        let before = Navigator::new(&m).reachable_set(Point::new(0, 3), false).len();
        m.destroy_tile(Point::new(2, 3));
        let after = Navigator::new(&m).reachable_set(Point::new(0, 3), false);
        assert!(after.len() > before);
        assert!(after.contains(&Point::new(5, 3)));
    }

    proptest! {
        #[test]
        fn every_cell_connects_back_to_seed(cells in prop::collection::vec(any::<bool>(), 49), can_dig in any::<bool>()) {
            let mut m = LevelMap::new(Range::sized(7, 7));
            for (i, solid) in cells.iter().enumerate() {
                let p = Point::new(i as i32 % 7, i as i32 / 7);
                if *solid && p != Point::new(3, 3) {
                    if i % 3 == 0 { m.place_bedrock(p) } else { m.place(p, TileKind::Ground) }
                }
            }
            let nav = Navigator::new(&m);
            let found = nav.flood_reachable(Point::new(3, 3), can_dig);
            let set: HashSet<Point> = found.iter().copied().collect();
            prop_assert_eq!(set.len(), found.len());
            for &c in &found {
                prop_assert!(nav.is_traversable(c, can_dig));
                // no traversable neighbor is left out
                for n in nav.neighbors(c, can_dig) {
                    prop_assert!(set.contains(&n));
                }
            }
        }
    }
}
