//! Read-only access to a [`Board`] for the search engine.

use std::fmt;

use opgrid_core::{Board, Operator, Point, Tile};

use crate::traits::Pather;

/// A board together with its unique start and goal cells.
#[derive(Debug, Clone, Copy)]
pub struct GridView<'b> {
    board: &'b Board,
    start: Point,
    goal: Point,
}

impl<'b> GridView<'b> {
    /// Wrap `board`, locating its start (`s`) and goal (`g`) cells.
    ///
    /// Fails with [`SearchError::MalformedBoard`] unless the board holds
    /// exactly one of each.
    pub fn new(board: &'b Board) -> Result<Self, SearchError> {
        let start = find_cell(board, "start", |t| t.op == Operator::Start)?;
        let goal = find_cell(board, "goal", |t| t.op == Operator::Goal)?;
        Ok(Self { board, start, goal })
    }

    /// `(rows, cols)` of the board.
    #[inline]
    pub fn dimensions(&self) -> (i32, i32) {
        let r = self.board.range();
        (r.rows(), r.cols())
    }

    /// Number of cells on the board.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.board.range().len()
    }

    /// Position of the start cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Position of the goal cell.
    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    #[inline]
    pub fn tile(&self, p: Point) -> Option<Tile> {
        self.board.get(p)
    }

    #[inline]
    pub fn operator_at(&self, p: Point) -> Option<Operator> {
        self.board.get(p).map(|t| t.op)
    }

    #[inline]
    pub fn operand_at(&self, p: Point) -> Option<u32> {
        self.board.get(p).map(|t| t.operand)
    }

    /// Whether `p` is on the board and not a wall.
    #[inline]
    pub fn passable(&self, p: Point) -> bool {
        self.operator_at(p).is_some_and(Operator::is_passable)
    }

    /// Row-major flat index of `p`.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        self.board.range().index(p)
    }
}

impl Pather for GridView<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.passable(n) {
                buf.push(n);
            }
        }
    }
}

/// The single cell whose tile satisfies `pred`; `what` names it in errors.
pub fn find_cell(
    board: &Board,
    what: &str,
    pred: impl FnMut(Tile) -> bool,
) -> Result<Point, SearchError> {
    match board.find(pred).as_slice() {
        [p] => Ok(*p),
        [] => Err(SearchError::MalformedBoard {
            reason: format!("no {what} cell"),
        }),
        found => Err(SearchError::MalformedBoard {
            reason: format!(
                "{} {what} cells, first at {} and {}",
                found.len(),
                found[0],
                found[1]
            ),
        }),
    }
}

/// Errors that abort a search before it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The board lacks a unique start or goal.
    MalformedBoard { reason: String },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedBoard { reason } => write!(f, "malformed board: {reason}"),
        }
    }
}

impl std::error::Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn locates_start_and_goal() {
        let b = board("2 3\n+1 s0 w0\ng4 -2 *3");
        let v = GridView::new(&b).unwrap();
        assert_eq!(v.start(), Point::at(0, 1));
        assert_eq!(v.goal(), Point::at(1, 0));
        assert_eq!(v.dimensions(), (2, 3));
        assert_eq!(v.len(), 6);
        assert_eq!(v.operator_at(Point::at(1, 2)), Some(Operator::Mul));
        assert_eq!(v.operand_at(Point::at(1, 0)), Some(4));
        assert_eq!(v.operand_at(Point::at(2, 0)), None);
    }

    #[test]
    fn rejects_missing_or_duplicate_endpoints() {
        let no_start = board("1 2\n+1 g0");
        assert_eq!(
            GridView::new(&no_start).unwrap_err(),
            SearchError::MalformedBoard {
                reason: "no start cell".into()
            }
        );
        let no_goal = board("1 2\ns0 +1");
        assert!(GridView::new(&no_goal).is_err());
        let two_goals = board("1 3\ng0 s0 g1");
        let err = GridView::new(&two_goals).unwrap_err();
        assert_eq!(err.to_string(), "malformed board: 2 goal cells, first at (1, 1) and (1, 3)");
    }

    #[test]
    fn neighbors_skip_walls_and_edges() {
        let b = board("3 3\nw0 +1 +1\n+1 s0 w0\n+1 g0 +1");
        let v = GridView::new(&b).unwrap();
        let mut buf = Vec::new();
        v.neighbors(Point::at(1, 1), &mut buf);
        // up, left, down; right is a wall
        assert_eq!(buf, vec![Point::at(0, 1), Point::at(1, 0), Point::at(2, 1)]);
        buf.clear();
        v.neighbors(Point::at(0, 1), &mut buf);
        assert_eq!(buf, vec![Point::at(1, 1), Point::at(0, 2)]);
    }

    #[test]
    fn find_cell_requires_uniqueness() {
        let b = board("1 4\ns0 *2 *2 g1");
        assert_eq!(find_cell(&b, "goal", |t| t.op == Operator::Goal), Ok(Point::at(0, 3)));
        assert_eq!(
            find_cell(&b, "product", |t| t.op == Operator::Mul)
                .unwrap_err()
                .to_string(),
            "malformed board: 2 product cells, first at (1, 2) and (1, 3)"
        );
        assert_eq!(
            find_cell(&b, "power", |t| t.op == Operator::Pow),
            Err(SearchError::MalformedBoard {
                reason: "no power cell".into()
            })
        );
    }
}
