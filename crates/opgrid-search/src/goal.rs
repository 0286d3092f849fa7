//! The success condition.

use opgrid_core::Point;

use crate::operator::{Direction, Values};
use crate::state::PathState;

/// Whether the running values satisfy the threshold relation.
///
/// Forward search must push the path value above the goal value; backward
/// search, running the operators in reverse, must bring it down to or below.
#[inline]
pub fn threshold_holds(values: Values, direction: Direction) -> bool {
    match direction {
        Direction::Forward => values.path > values.goal,
        Direction::Backward => values.path <= values.goal,
    }
}

/// Goal test for one traversal direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GoalTest {
    pub target: Point,
    pub direction: Direction,
}

impl GoalTest {
    /// Whether `state` stands on the target cell.
    #[inline]
    pub fn at_target(&self, state: &PathState) -> bool {
        state.pos() == self.target
    }

    /// Whether `state` stands on the target cell with the threshold met.
    #[inline]
    pub fn is_goal(&self, state: &PathState) -> bool {
        self.at_target(state) && threshold_holds(state.values(), self.direction)
    }
}
