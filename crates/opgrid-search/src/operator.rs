//! Operator algebra: how entering a tile changes the running values.

use std::fmt;

use opgrid_core::{Operator, Tile};

/// Direction of traversal.
///
/// `Backward` walks from the goal toward the start and applies the inverse
/// of every operator it crosses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Forward,
    Backward,
}

/// The two running scalars carried along a path.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Values {
    pub path: f64,
    pub goal: f64,
}

impl Values {
    #[inline]
    pub const fn new(path: f64, goal: f64) -> Self {
        Self { path, goal }
    }
}

/// Fixed cost of entering a tile, charged by cost-aware strategies.
pub const fn step_cost(op: Operator) -> u64 {
    match op {
        Operator::Add => 2,
        Operator::Sub => 1,
        Operator::Mul => 5,
        Operator::Pow => 11,
        Operator::GoalAdd => 1,
        Operator::GoalSub => 2,
        Operator::Start | Operator::Goal => 1,
        Operator::Wall => 0,
    }
}

/// Apply the tile's operator to `values`.
///
/// Backward application is the exact inverse of forward application, except
/// that `*0` and `^0` have no inverse and even roots of negative values are
/// undefined. Forward values may overflow to infinity, which still compares
/// above any finite goal, and `*0` sends even an infinite value to zero.
/// Backward results must stay finite, and NaN is rejected in both directions.
pub fn apply(tile: Tile, values: Values, direction: Direction) -> Result<Values, OperatorError> {
    let n = f64::from(tile.operand);
    let Values { mut path, mut goal } = values;
    match (tile.op, direction) {
        (Operator::Add, Direction::Forward) | (Operator::Sub, Direction::Backward) => path += n,
        (Operator::Sub, Direction::Forward) | (Operator::Add, Direction::Backward) => path -= n,
        (Operator::Mul, Direction::Forward) => {
            path = if tile.operand == 0 { 0.0 } else { path * n }
        }
        (Operator::Mul, Direction::Backward) => {
            if tile.operand == 0 {
                return Err(OperatorError::DivisionByZero { operator: tile.op });
            }
            path /= n;
        }
        (Operator::Pow, Direction::Forward) => path = power(path, tile.operand),
        (Operator::Pow, Direction::Backward) => {
            if tile.operand == 0 {
                return Err(OperatorError::DivisionByZero { operator: tile.op });
            }
            path = root(path, tile.operand);
        }
        (Operator::GoalAdd, Direction::Forward) | (Operator::GoalSub, Direction::Backward) => {
            goal += n
        }
        (Operator::GoalSub, Direction::Forward) | (Operator::GoalAdd, Direction::Backward) => {
            goal -= n
        }
        (Operator::Start | Operator::Goal | Operator::Wall, _) => {}
    }

    let valid = |v: f64| match direction {
        Direction::Forward => !v.is_nan(),
        Direction::Backward => v.is_finite(),
    };
    for value in [path, goal] {
        if !valid(value) {
            return Err(OperatorError::InvalidOperator {
                operator: tile.op,
                value,
            });
        }
    }
    Ok(Values::new(path, goal))
}

fn power(base: f64, exp: u32) -> f64 {
    match i32::try_from(exp) {
        Ok(e) => base.powi(e),
        Err(_) => base.powf(f64::from(exp)),
    }
}

/// Real `n`th root. Odd roots of negative values stay negative; even roots
/// of negative values are NaN.
fn root(value: f64, n: u32) -> f64 {
    let inv = 1.0 / f64::from(n);
    if value < 0.0 && n % 2 == 1 {
        -(-value).powf(inv)
    } else {
        value.powf(inv)
    }
}

/// Why a single successor could not be produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OperatorError {
    /// Inverting `*0` or `^0`.
    DivisionByZero { operator: Operator },
    /// The result is NaN, or infinite in backward application.
    InvalidOperator { operator: Operator, value: f64 },
}

impl fmt::Display for OperatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero { operator } => {
                write!(f, "operator {operator}0 has no inverse")
            }
            Self::InvalidOperator { operator, value } => {
                write!(f, "operator {operator} produced {value}")
            }
        }
    }
}

impl std::error::Error for OperatorError {}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn fwd(op: Operator, n: u32, v: Values) -> Values {
        apply(Tile::new(op, n), v, Direction::Forward).unwrap()
    }

    fn bwd(op: Operator, n: u32, v: Values) -> Values {
        apply(Tile::new(op, n), v, Direction::Backward).unwrap()
    }

    #[test]
    fn forward_effects() {
        let v = Values::new(3.0, 10.0);
        assert_eq!(fwd(Operator::Add, 4, v), Values::new(7.0, 10.0));
        assert_eq!(fwd(Operator::Sub, 4, v), Values::new(-1.0, 10.0));
        assert_eq!(fwd(Operator::Mul, 4, v), Values::new(12.0, 10.0));
        assert_eq!(fwd(Operator::Pow, 3, v), Values::new(27.0, 10.0));
        assert_eq!(fwd(Operator::GoalAdd, 4, v), Values::new(3.0, 14.0));
        assert_eq!(fwd(Operator::GoalSub, 4, v), Values::new(3.0, 6.0));
        assert_eq!(fwd(Operator::Start, 9, v), v);
        assert_eq!(fwd(Operator::Goal, 9, v), v);
    }

    #[test]
    fn backward_effects() {
        let v = Values::new(27.0, 10.0);
        assert_eq!(bwd(Operator::Add, 4, v), Values::new(23.0, 10.0));
        assert_eq!(bwd(Operator::Sub, 4, v), Values::new(31.0, 10.0));
        assert_eq!(bwd(Operator::Mul, 3, v), Values::new(9.0, 10.0));
        assert!((bwd(Operator::Pow, 3, v).path - 3.0).abs() < EPS);
        assert_eq!(bwd(Operator::GoalAdd, 4, v), Values::new(27.0, 6.0));
        assert_eq!(bwd(Operator::GoalSub, 4, v), Values::new(27.0, 14.0));
    }

    #[test]
    fn forward_then_backward_round_trips() {
        let starts = [
            Values::new(0.0, 0.0),
            Values::new(5.0, -3.0),
            Values::new(-7.0, 12.0),
            Values::new(2.5, 1.0),
        ];
        for op in Operator::ALL {
            for n in 0..6 {
                if n == 0 && matches!(op, Operator::Mul | Operator::Pow) {
                    continue;
                }
                for v in starts {
                    // even powers lose the sign
                    if op == Operator::Pow && n % 2 == 0 && v.path < 0.0 {
                        continue;
                    }
                    let there = fwd(op, n, v);
                    let back = bwd(op, n, there);
                    assert!(
                        (back.path - v.path).abs() < EPS && (back.goal - v.goal).abs() < EPS,
                        "{op}{n} on {v:?} came back as {back:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn zero_operand_has_no_inverse() {
        let v = Values::new(4.0, 0.0);
        for op in [Operator::Mul, Operator::Pow] {
            assert_eq!(
                apply(Tile::new(op, 0), v, Direction::Backward),
                Err(OperatorError::DivisionByZero { operator: op })
            );
            assert!(apply(Tile::new(op, 0), v, Direction::Forward).is_ok());
        }
    }

    #[test]
    fn even_root_of_negative_is_rejected() {
        let err = apply(
            Tile::new(Operator::Pow, 2),
            Values::new(-4.0, 0.0),
            Direction::Backward,
        )
        .unwrap_err();
        assert!(matches!(err, OperatorError::InvalidOperator { operator: Operator::Pow, .. }));
        let odd = bwd(Operator::Pow, 3, Values::new(-8.0, 0.0));
        assert!((odd.path + 2.0).abs() < EPS);
    }

    #[test]
    fn forward_overflow_saturates() {
        let big = fwd(Operator::Pow, 400, Values::new(10.0, 5.0));
        assert_eq!(big.path, f64::INFINITY);
        assert_eq!(fwd(Operator::Add, 3, big).path, f64::INFINITY);
        assert_eq!(fwd(Operator::Sub, 3, big).path, f64::INFINITY);
        assert_eq!(fwd(Operator::Pow, 2, Values::new(f64::NEG_INFINITY, 0.0)).path, f64::INFINITY);
        assert_eq!(fwd(Operator::Pow, 0, big).path, 1.0);
        assert_eq!(fwd(Operator::Mul, 0, big), Values::new(0.0, 5.0));
    }

    #[test]
    fn backward_overflow_is_rejected() {
        let err = apply(
            Tile::new(Operator::Mul, 2),
            Values::new(f64::INFINITY, 0.0),
            Direction::Backward,
        )
        .unwrap_err();
        assert!(matches!(err, OperatorError::InvalidOperator { operator: Operator::Mul, .. }));
        assert!(
            apply(Tile::new(Operator::Add, 1), Values::new(f64::MAX, 0.0), Direction::Backward)
                .is_ok()
        );
    }

    #[test]
    fn step_costs() {
        let costs: Vec<u64> = Operator::ALL.iter().map(|&op| step_cost(op)).collect();
        assert_eq!(costs, vec![2, 1, 5, 11, 1, 2, 1, 1, 0]);
    }
}
