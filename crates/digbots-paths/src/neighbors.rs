use digbots_core::{GridWorld, Point};

use crate::Navigator;

/// Cached neighbor computation helper.
///
/// Enumerates orthogonal (4-way) or all (8-way) neighbors of a cell,
/// filtered by a predicate, reusing one buffer across calls.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Orthogonal neighbors of `p` in up, right, down, left order, keeping
    /// only those for which `keep` returns `true`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        self.buf.extend(p.neighbors_4().into_iter().filter(|&n| keep(n)));
        &self.buf
    }

    /// All 8 neighbors of `p`, keeping only those for which `keep` returns
    /// `true`.
    pub fn all(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        self.buf.extend(p.neighbors_8().into_iter().filter(|&n| keep(n)));
        &self.buf
    }
}

/// Whether a search may step into `p`: the cell is empty, or `can_dig` is
/// set and its tile is breakable. Bounds are not checked.
#[inline]
pub fn traversable<W: GridWorld + ?Sized>(world: &W, p: Point, can_dig: bool) -> bool {
    world.tile_at(p).is_none_or(|t| t.diggable(can_dig))
}

impl<W: GridWorld> Navigator<'_, W> {
    /// In-bounds orthogonal neighbors of `p` a search may step into.
    ///
    /// At most 4 cells, in up, right, down, left order.
    pub fn neighbors(&self, p: Point, can_dig: bool) -> Vec<Point> {
        let bounds = self.bounds();
        Neighbors::new()
            .cardinal(p, |n| bounds.contains(n) && traversable(self.world, n, can_dig))
            .to_vec()
    }

    /// In-bounds cells among the 8 surrounding `p` that hold a tile of any
    /// kind.
    pub fn neighbor_blocks(&self, p: Point) -> Vec<Point> {
        let bounds = self.bounds();
        Neighbors::new()
            .all(p, |n| bounds.contains(n) && !self.world.is_empty_at(n))
            .to_vec()
    }

    /// A cell is orphaned when none of its 8 neighbors holds a tile.
    pub fn is_orphaned(&self, p: Point) -> bool {
        self.neighbor_blocks(p).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use digbots_core::{LevelMap, Range, TileKind};
    use proptest::prelude::*;

    use super::*;

    const LAYOUT: &str = "
        .#..
        .%*.
        ....
    ";

    #[test]
    fn helper_filters_in_order() {
        let mut nb = Neighbors::new();
        let p = Point::new(0, 0);
        assert_eq!(
            nb.cardinal(p, |n| n.x >= 0),
            &[Point::new(0, 1), Point::new(1, 0), Point::new(0, -1)]
        );
        assert_eq!(nb.all(p, |n| n.x > 0 && n.y > 0), &[Point::new(1, 1)]);
    }

    #[test]
    fn digging_opens_breakable_tiles_only() {
        let m = LevelMap::parse(LAYOUT).unwrap();
        let nav = Navigator::new(&m);
        // (1, 2) is ground above (1, 1) bedrock; (2, 1) is ore.
        let p = Point::new(2, 2);
        assert_eq!(nav.neighbors(p, false), vec![Point::new(3, 2)]);
        assert_eq!(
            nav.neighbors(p, true),
            vec![Point::new(3, 2), Point::new(2, 1), Point::new(1, 2)]
        );
        // bedrock stays closed even when digging
        assert!(!nav.neighbors(Point::new(1, 0), true).contains(&Point::new(1, 1)));
    }

    #[test]
    fn bounds_are_min_inclusive_max_exclusive() {
        let m = LevelMap::new(Range::new(0, 0, 3, 3));
        let nav = Navigator::new(&m);
        assert_eq!(
            nav.neighbors(Point::new(0, 0), false),
            vec![Point::new(0, 1), Point::new(1, 0)]
        );
        assert_eq!(
            nav.neighbors(Point::new(2, 2), false),
            vec![Point::new(2, 1), Point::new(1, 2)]
        );
    }

    #[test]
    fn blocks_include_diagonals_and_bedrock() {
        let m = LevelMap::parse(LAYOUT).unwrap();
        let nav = Navigator::new(&m);
        let mut blocks = nav.neighbor_blocks(Point::new(2, 2));
        blocks.sort();
        assert_eq!(
            blocks,
            vec![Point::new(1, 1), Point::new(2, 1), Point::new(1, 2)]
        );
        assert!(!nav.is_orphaned(Point::new(3, 0)));
        assert!(!nav.is_orphaned(Point::new(3, 2)));
    }

    #[test]
    fn open_cell_is_orphaned() {
        let mut m = LevelMap::new(Range::sized(5, 5));
        m.place(Point::new(0, 0), TileKind::Ground);
        let nav = Navigator::new(&m);
        assert!(nav.is_orphaned(Point::new(3, 3)));
        assert!(!nav.is_orphaned(Point::new(1, 1)));
    }

    fn arb_level() -> impl Strategy<Value = LevelMap> {
        prop::collection::vec(0u8..4, 36).prop_map(|cells| {
            let mut m = LevelMap::new(Range::sized(6, 6));
            for (i, c) in cells.into_iter().enumerate() {
                let p = Point::new(i as i32 % 6, i as i32 / 6);
                match c {
                    1 => m.place(p, TileKind::Ground),
                    2 => m.place(p, TileKind::Ore),
                    3 => m.place_bedrock(p),
                    _ => {}
                }
            }
            m
        })
    }

    proptest! {
        #[test]
        fn neighbors_stay_in_bounds(m in arb_level(), x in -1i32..7, y in -1i32..7, can_dig in any::<bool>()) {
            let nav = Navigator::new(&m);
            let p = Point::new(x, y);
            let ns = nav.neighbors(p, can_dig);
            prop_assert!(ns.len() <= 4);
            for n in &ns {
                prop_assert!(m.bounds().contains(*n));
                prop_assert!(n.is_adjacent_4(p));
            }
            let blocks = nav.neighbor_blocks(p);
            prop_assert!(blocks.len() <= 8);
            for b in &blocks {
                prop_assert!(m.bounds().contains(*b));
                prop_assert!(m.tile_at(*b).is_some());
            }
        }
    }
}
