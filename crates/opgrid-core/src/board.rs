//! Operator boards.
//!
//! A [`Board`] is a rectangle of [`Tile`]s, each an [`Operator`] with a
//! non-negative operand. The text form is the one read from input:
//!
//! ```text
//! 3 3
//! s0 +2 w0
//! +1 *3 -1
//! w0 g5 +1
//! ```
//!
//! The first line holds the number of rows and columns, followed by one line
//! per row with one token per column.

use std::fmt;
use std::str::FromStr;

use crate::geom::{Point, Range};

/// What a tile does to the running values when a path enters it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    /// `+n`: path value plus `n`.
    Add,
    /// `-n`: path value minus `n`.
    Sub,
    /// `*n`: path value times `n`.
    Mul,
    /// `^n`: path value to the power `n`.
    Pow,
    /// `an`: goal value plus `n`.
    GoalAdd,
    /// `bn`: goal value minus `n`.
    GoalSub,
    /// `s`: the start tile.
    Start,
    /// `g`: the goal tile.
    Goal,
    /// `w`: impassable.
    Wall,
}

impl Operator {
    /// All operators, in symbol order `+ - * ^ a b s g w`.
    pub const ALL: [Operator; 9] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Pow,
        Operator::GoalAdd,
        Operator::GoalSub,
        Operator::Start,
        Operator::Goal,
        Operator::Wall,
    ];

    /// Parse an operator symbol. Letters are case-insensitive.
    pub fn from_symbol(ch: char) -> Option<Self> {
        let op = match ch.to_ascii_lowercase() {
            '+' => Self::Add,
            '-' => Self::Sub,
            '*' => Self::Mul,
            '^' => Self::Pow,
            'a' => Self::GoalAdd,
            'b' => Self::GoalSub,
            's' => Self::Start,
            'g' => Self::Goal,
            'w' => Self::Wall,
            _ => return None,
        };
        Some(op)
    }

    /// The operator's symbol in the text format.
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Pow => '^',
            Self::GoalAdd => 'a',
            Self::GoalSub => 'b',
            Self::Start => 's',
            Self::Goal => 'g',
            Self::Wall => 'w',
        }
    }

    /// Whether a path may enter a tile with this operator.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single board cell: operator plus operand.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub op: Operator,
    pub operand: u32,
}

impl Tile {
    /// Create a new tile.
    #[inline]
    pub const fn new(op: Operator, operand: u32) -> Self {
        Self { op, operand }
    }

    /// A wall tile (`w0`).
    pub const WALL: Self = Self::new(Operator::Wall, 0);
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op.symbol(), self.operand)
    }
}

impl FromStr for Tile {
    type Err = ();

    /// Parse a `<op><operand>` token such as `+3`, `w0` or `G12`.
    fn from_str(s: &str) -> Result<Self, ()> {
        let mut chars = s.chars();
        let op = chars.next().and_then(Operator::from_symbol).ok_or(())?;
        let rest = chars.as_str();
        if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(());
        }
        let operand = rest.parse::<u32>().map_err(|_| ())?;
        Ok(Tile::new(op, operand))
    }
}

/// A rectangular grid of tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    range: Range,
    tiles: Vec<Tile>,
}

impl Board {
    /// Create a board of `rows × cols` tiles, all equal to `fill`.
    pub fn new(rows: i32, cols: i32, fill: Tile) -> Self {
        let range = Range::new(rows, cols);
        Self {
            range,
            tiles: vec![fill; range.len()],
        }
    }

    /// Build a board from row-major tiles.
    pub fn from_tiles(rows: i32, cols: i32, tiles: Vec<Tile>) -> Result<Self, BoardError> {
        if rows <= 0 || cols <= 0 {
            return Err(BoardError::EmptyBoard);
        }
        let range = Range::new(rows, cols);
        if tiles.len() != range.len() {
            return Err(BoardError::TileCount {
                expected: range.len(),
                found: tiles.len(),
            });
        }
        Ok(Self { range, tiles })
    }

    /// Number of rows (`m`).
    #[inline]
    pub fn rows(&self) -> i32 {
        self.range.rows()
    }

    /// Number of columns (`n`).
    #[inline]
    pub fn cols(&self) -> i32 {
        self.range.cols()
    }

    /// The board rectangle, anchored at the origin.
    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    /// The tile at `p`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, p: Point) -> Option<Tile> {
        self.range.index(p).map(|i| self.tiles[i])
    }

    /// Replace the tile at `p`. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, tile: Tile) {
        if let Some(i) = self.range.index(p) {
            self.tiles[i] = tile;
        }
    }

    /// Iterate over `(Point, Tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.range.iter().zip(self.tiles.iter().copied())
    }

    /// Every position whose tile satisfies `pred`, in row-major order.
    pub fn find(&self, mut pred: impl FnMut(Tile) -> bool) -> Vec<Point> {
        self.iter()
            .filter_map(|(p, t)| if pred(t) { Some(p) } else { None })
            .collect()
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, BoardError> {
        let mut lines = s.lines().map(str::trim).filter(|l| !l.is_empty());

        let header = lines.next().ok_or(BoardError::EmptyBoard)?;
        let dims: Vec<&str> = header.split_whitespace().collect();
        let (rows, cols) = match dims.as_slice() {
            [m, n] => match (m.parse::<i32>(), n.parse::<i32>()) {
                (Ok(m), Ok(n)) => (m, n),
                _ => return Err(BoardError::Header(header.to_string())),
            },
            _ => return Err(BoardError::Header(header.to_string())),
        };
        if rows <= 0 || cols <= 0 {
            return Err(BoardError::EmptyBoard);
        }

        let mut tiles = Vec::new();
        for row in 0..rows {
            let line = lines.next().ok_or(BoardError::MissingRow { row })?;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != cols as usize {
                return Err(BoardError::RowWidth {
                    row,
                    expected: cols as usize,
                    found: tokens.len(),
                });
            }
            for (col, token) in tokens.into_iter().enumerate() {
                let tile = token.parse::<Tile>().map_err(|_| BoardError::Token {
                    row,
                    col: col as i32,
                    token: token.to_string(),
                })?;
                tiles.push(tile);
            }
        }

        Board::from_tiles(rows, cols, tiles)
    }
}

impl fmt::Display for Board {
    /// Writes the board back in its input format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.rows(), self.cols())?;
        for (i, tile) in self.tiles.iter().enumerate() {
            let col = i % self.cols() as usize;
            if col > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{tile}")?;
            if col + 1 == self.cols() as usize {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Board {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Board {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when loading a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The input has no header, or a dimension is zero.
    EmptyBoard,
    /// The header line is not two integers.
    Header(String),
    /// The input ended before row `row`.
    MissingRow { row: i32 },
    /// Row `row` has the wrong number of tokens.
    RowWidth {
        row: i32,
        expected: usize,
        found: usize,
    },
    /// A token is not `<op><operand>`.
    Token { row: i32, col: i32, token: String },
    /// The tile vector does not match the dimensions.
    TileCount { expected: usize, found: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBoard => write!(f, "board: no cells"),
            Self::Header(line) => write!(f, "board: bad header \u{201c}{line}\u{201d}"),
            Self::MissingRow { row } => write!(f, "board: missing row {}", row + 1),
            Self::RowWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "board: row {} has {found} tokens, expected {expected}",
                row + 1
            ),
            Self::Token { row, col, token } => write!(
                f,
                "board: invalid token \u{201c}{token}\u{201d} at ({}, {})",
                row + 1,
                col + 1
            ),
            Self::TileCount { expected, found } => {
                write!(f, "board: {found} tiles for {expected} cells")
            }
        }
    }
}

impl std::error::Error for BoardError {}
