use opgrid_core::Point;

/// Minimal search interface — provides neighbor enumeration.
pub trait Pather {
    /// Append enterable neighbors of `p` into `buf`, in search order.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Estimate of remaining effort from `from` to `to`.
pub trait Heuristic {
    fn estimate(&self, from: Point, to: Point) -> u64;
}
