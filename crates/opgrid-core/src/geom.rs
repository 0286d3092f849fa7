//! Board coordinates.

use std::fmt;
use std::ops::Sub;

/// A board cell. `x` is the column and `y` the row, both zero-based.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point at zero-based `row` and `col`.
    #[inline]
    pub const fn at(row: i32, col: i32) -> Self {
        Self { x: col, y: row }
    }

    #[inline]
    pub const fn row(self) -> i32 {
        self.y
    }

    #[inline]
    pub const fn col(self) -> i32 {
        self.x
    }

    /// The four cardinal neighbours in search order: up, left, down, right.
    /// Some may lie off the board.
    #[inline]
    pub const fn neighbors_4(self) -> [Point; 4] {
        let Self { x, y } = self;
        [
            Self { x, y: y - 1 },
            Self { x: x - 1, y },
            Self { x, y: y + 1 },
            Self { x: x + 1, y },
        ]
    }
}

/// Row-major: rows first, then columns.
impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    /// One-based `(row, col)`, as cells are numbered in solutions.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row() + 1, self.col() + 1)
    }
}

/// Component-wise difference, used to measure moves between cells.
impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// The cells of a `rows × cols` board, anchored at the origin.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    rows: i32,
    cols: i32,
}

impl Range {
    /// Negative sizes are clamped to zero.
    #[inline]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows: if rows > 0 { rows } else { 0 },
            cols: if cols > 0 { cols } else { 0 },
        }
    }

    #[inline]
    pub const fn rows(self) -> i32 {
        self.rows
    }

    #[inline]
    pub const fn cols(self) -> i32 {
        self.cols
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.rows as usize * self.cols as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub const fn contains(self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.cols && p.y < self.rows
    }

    /// Row-major flat index of `p`, or `None` off the board.
    #[inline]
    pub fn index(self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| p.y as usize * self.cols as usize + p.x as usize)
    }

    /// The cell at flat index `i`; the inverse of [`index`](Self::index).
    #[inline]
    pub fn point(self, i: usize) -> Option<Point> {
        (i < self.len()).then(|| {
            let cols = self.cols as usize;
            Point::new((i % cols) as i32, (i / cols) as i32)
        })
    }

    /// Every cell in row-major order.
    pub fn iter(self) -> impl ExactSizeIterator<Item = Point> + Clone {
        let cols = self.cols as usize;
        (0..self.len()).map(move |i| Point::new((i % cols) as i32, (i / cols) as i32))
    }
}
