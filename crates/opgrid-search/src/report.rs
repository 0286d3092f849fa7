//! Search results.

use opgrid_core::Point;

use crate::operator::Direction;
use crate::state::PathState;

/// A path that satisfies the goal test.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Cells from start to goal, inclusive, zero-based.
    pub path: Vec<Point>,
    /// Search direction that produced `path_value` and `goal_value`.
    /// Backward values are the inverse walk's values at the start cell, not
    /// forward values at the goal.
    pub direction: Direction,
    /// Path value of the final state, in `direction`'s frame.
    pub path_value: f64,
    /// Goal value of the final state, in `direction`'s frame.
    pub goal_value: f64,
    /// Accumulated step cost. Zero for strategies that do not accrue cost.
    pub cost: u64,
    /// Where the two frontiers met, for bidirectional search.
    pub meeting: Option<Point>,
}

impl Solution {
    pub(crate) fn from_state(state: &PathState) -> Self {
        Self {
            path: state.path(),
            direction: Direction::Forward,
            path_value: state.path_value(),
            goal_value: state.goal_value(),
            cost: state.cost(),
            meeting: None,
        }
    }

    /// A backward path, turned around to run from start to goal.
    pub(crate) fn from_backward(state: &PathState) -> Self {
        let mut sol = Self::from_state(state);
        sol.path.reverse();
        sol.direction = Direction::Backward;
        sol
    }

    /// Forward path to the meeting cell, then the backward path from the
    /// meeting cell out to the goal. The meeting cell appears once.
    pub(crate) fn merged(forward: &PathState, backward: &PathState) -> Self {
        let mut path = forward.path();
        path.extend(backward.path().into_iter().rev().skip(1));
        Self {
            path,
            direction: Direction::Forward,
            path_value: forward.path_value(),
            goal_value: forward.goal_value(),
            cost: forward.cost() + backward.cost(),
            meeting: Some(forward.pos()),
        }
    }

    /// Number of moves along the path.
    #[inline]
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// The path as one-based `(row, col)` pairs.
    pub fn one_based(&self) -> Vec<(i32, i32)> {
        self.path.iter().map(|p| (p.row() + 1, p.col() + 1)).collect()
    }
}

/// How a search ended.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// A goal-satisfying path was found.
    Found(Solution),
    /// The search space was exhausted without satisfying the goal test.
    NoPath,
    /// The step budget ran out first.
    OutOfBudget,
}

impl Outcome {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Whether the search ended without a solution, for whatever reason.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        !self.is_found()
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Self::Found(sol) => Some(sol),
            _ => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution> {
        match self {
            Self::Found(sol) => Some(sol),
            _ => None,
        }
    }
}

/// Counters gathered during one search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// States expanded.
    pub expanded: u64,
    /// Successors produced by expansion.
    pub generated: u64,
    /// Outer iterations (deepening rounds); 1 for single-pass strategies.
    pub iterations: u32,
    /// Bound used by each deepening round: depth for IDDFS, f-value
    /// threshold for IDA*.
    pub thresholds: Vec<u64>,
}

/// Outcome plus statistics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    pub outcome: Outcome,
    pub stats: SearchStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operator::Values;

    fn walk(cells: &[(i32, i32)], len: usize, values: Values) -> PathState {
        let (r, c) = cells[0];
        let mut s = PathState::root(Point::at(r, c), 0, len, values);
        for (i, &(r, c)) in cells.iter().enumerate().skip(1) {
            s = s.successor(Point::at(r, c), i, values, s.cost() + 1);
        }
        s
    }

    #[test]
    fn one_based_rows_and_cols() {
        let s = walk(&[(0, 0), (0, 1), (1, 1)], 4, Values::new(1.0, 0.0));
        let sol = Solution::from_state(&s);
        assert_eq!(sol.steps(), 2);
        assert_eq!(sol.one_based(), vec![(1, 1), (1, 2), (2, 2)]);
        assert_eq!(sol.cost, 2);
        assert_eq!(sol.meeting, None);
        assert_eq!(sol.direction, Direction::Forward);
    }

    #[test]
    fn backward_solution_runs_start_to_goal() {
        let s = walk(&[(0, 2), (0, 1), (0, 0)], 3, Values::new(1.5, 4.0));
        let sol = Solution::from_backward(&s);
        assert_eq!(sol.path, vec![Point::at(0, 0), Point::at(0, 1), Point::at(0, 2)]);
        assert_eq!(sol.direction, Direction::Backward);
        assert_eq!((sol.path_value, sol.goal_value), (1.5, 4.0));
    }

    #[test]
    fn merged_path_keeps_meeting_cell_once() {
        let f = walk(&[(0, 0), (0, 1), (0, 2)], 5, Values::new(2.0, 0.0));
        let b = walk(&[(0, 4), (0, 3), (0, 2)], 5, Values::new(-2.0, 0.0));
        let sol = Solution::merged(&f, &b);
        assert_eq!(
            sol.path,
            (0..5).map(|c| Point::at(0, c)).collect::<Vec<_>>()
        );
        assert_eq!(sol.meeting, Some(Point::at(0, 2)));
        assert_eq!(sol.direction, Direction::Forward);
        assert_eq!(sol.path_value, 2.0);
        assert_eq!(sol.cost, 4);
    }

    #[test]
    fn outcome_accessors() {
        assert!(Outcome::NoPath.is_exhausted());
        assert!(Outcome::OutOfBudget.is_exhausted());
        assert_eq!(Outcome::NoPath.solution(), None);
        let s = walk(&[(0, 0)], 1, Values::new(0.0, 0.0));
        let found = Outcome::Found(Solution::from_state(&s));
        assert!(found.is_found());
        assert_eq!(found.into_solution().map(|s| s.path.len()), Some(1));
    }
}
