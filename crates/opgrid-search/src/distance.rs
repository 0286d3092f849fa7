use opgrid_core::Point;

use crate::traits::Heuristic;

/// Straight-line distance, rounded down.
#[inline]
pub fn euclidean(a: Point, b: Point) -> u64 {
    let dx = (a.x - b.x).unsigned_abs() as u64;
    let dy = (a.y - b.y).unsigned_abs() as u64;
    (dx * dx + dy * dy).isqrt()
}

/// Squared distance with rows weighted three times as heavily as columns:
/// `dx² + 3·dy²`.
#[inline]
pub fn weighted_squares(a: Point, b: Point) -> u64 {
    let dx = (a.x - b.x).unsigned_abs() as u64;
    let dy = (a.y - b.y).unsigned_abs() as u64;
    dx * dx + 3 * dy * dy
}

/// [`euclidean`] as a [`Heuristic`]. Used by value-maximizing search.
#[derive(Copy, Clone, Debug, Default)]
pub struct Euclidean;

impl Heuristic for Euclidean {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> u64 {
        euclidean(from, to)
    }
}

/// [`weighted_squares`] as a [`Heuristic`]. Used by cost-minimizing search.
#[derive(Copy, Clone, Debug, Default)]
pub struct WeightedSquares;

impl Heuristic for WeightedSquares {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> u64 {
        weighted_squares(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_rounds_down() {
        let o = Point::ZERO;
        assert_eq!(euclidean(o, o), 0);
        assert_eq!(euclidean(o, Point::new(3, 4)), 5);
        assert_eq!(euclidean(o, Point::new(1, 1)), 1);
        assert_eq!(euclidean(Point::new(2, 2), Point::new(0, 0)), 2);
        assert_eq!(euclidean(o, Point::new(5, 5)), 7);
    }

    #[test]
    fn weighted_squares_favours_columns() {
        let o = Point::ZERO;
        assert_eq!(weighted_squares(o, Point::new(2, 0)), 4);
        assert_eq!(weighted_squares(o, Point::new(0, 2)), 12);
        assert_eq!(weighted_squares(Point::new(1, 3), Point::new(2, 1)), 1 + 12);
    }

    #[test]
    fn heuristics_are_symmetric() {
        let a = Point::new(1, 7);
        let b = Point::new(4, 2);
        assert_eq!(Euclidean.estimate(a, b), Euclidean.estimate(b, a));
        assert_eq!(WeightedSquares.estimate(a, b), WeightedSquares.estimate(b, a));
    }
}
