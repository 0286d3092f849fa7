//! Random board generation.
//!
//! [`BoardGen`] fills a board with operator tiles drawn from a palette,
//! sprinkles walls, and places exactly one start and one goal.

use std::ops::RangeInclusive;

use rand::{Rng, RngExt};

use crate::board::{Board, BoardError, Operator, Tile};

/// Random board generator.
pub struct BoardGen<R: Rng> {
    pub rng: R,
    /// Operators for ordinary tiles. `s`, `g` and `w` entries are ignored.
    pub palette: Vec<Operator>,
    /// Operand range for every tile, start and goal included.
    pub operands: RangeInclusive<u32>,
    /// Chance, in percent, that an ordinary tile is a wall.
    pub wall_pct: u32,
}

impl<R: Rng> BoardGen<R> {
    /// Create a generator with the arithmetic palette `+ - * a b`, operands
    /// in `0..=9` and 15% walls.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            palette: vec![
                Operator::Add,
                Operator::Sub,
                Operator::Mul,
                Operator::GoalAdd,
                Operator::GoalSub,
            ],
            operands: 0..=9,
            wall_pct: 15,
        }
    }

    /// Generate a `rows × cols` board.
    ///
    /// Fails with [`BoardError::EmptyBoard`] if the board has fewer than two
    /// cells, since start and goal must be distinct.
    pub fn generate(&mut self, rows: i32, cols: i32) -> Result<Board, BoardError> {
        if rows <= 0 || cols <= 0 || (rows as usize) * (cols as usize) < 2 {
            return Err(BoardError::EmptyBoard);
        }
        let palette: Vec<Operator> = self
            .palette
            .iter()
            .copied()
            .filter(|op| !matches!(op, Operator::Start | Operator::Goal | Operator::Wall))
            .collect();

        let mut board = Board::new(rows, cols, Tile::new(Operator::Add, 0));
        for p in board.range().iter() {
            let tile = if self.rng.random_range(0..100) < self.wall_pct {
                Tile::WALL
            } else {
                let op = if palette.is_empty() {
                    Operator::Add
                } else {
                    palette[self.rng.random_range(0..palette.len())]
                };
                Tile::new(op, self.operand())
            };
            board.set(p, tile);
        }

        let range = board.range();
        let si = self.rng.random_range(0..range.len());
        let mut gi = self.rng.random_range(0..range.len() - 1);
        if gi >= si {
            gi += 1;
        }
        let (Some(sp), Some(gp)) = (range.point(si), range.point(gi)) else {
            return Err(BoardError::EmptyBoard);
        };
        let start = Tile::new(Operator::Start, self.operand());
        let goal = Tile::new(Operator::Goal, self.operand());
        board.set(sp, start);
        board.set(gp, goal);
        Ok(board)
    }

    fn operand(&mut self) -> u32 {
        let (lo, hi) = (*self.operands.start(), *self.operands.end());
        if lo >= hi {
            lo
        } else {
            self.rng.random_range(lo..=hi)
        }
    }
}
