use digbots_core::Point;

/// Minimal pathfinding interface: neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> f64;
}

/// Full A* pather.
pub trait AstarPather: WeightedPather {
    /// Estimated remaining cost from `from` to `to`.
    fn estimate(&self, from: Point, to: Point) -> f64;
}
