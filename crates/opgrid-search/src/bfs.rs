//! Breadth-first search, exposed as a steppable driver.

use std::collections::VecDeque;

use log::{trace, warn};

use crate::Solver;
use crate::budget::StepBudget;
use crate::goal::GoalTest;
use crate::operator::Direction;
use crate::report::{Outcome, SearchReport, SearchStats, Solution};
use crate::solver::report;
use crate::state::{Explored, PathState};
use crate::transition::Expander;

/// Result of one [`BfsDriver::step`].
#[derive(Debug, Clone, PartialEq)]
pub enum StepResult {
    /// One state was taken off the queue; the search goes on.
    Continue,
    /// A successor satisfied the goal test.
    Found(PathState),
    /// The queue is empty.
    Exhausted,
}

/// Level-order search that advances one dequeued state per [`step`](Self::step).
///
/// Successors are goal-tested as they are generated. A successor standing on
/// the target without meeting the threshold is dropped: it cannot step back
/// onto the target along the same path.
pub struct BfsDriver<'v, 'b> {
    expander: Expander<'v, 'b>,
    goal: GoalTest,
    queue: VecDeque<PathState>,
    explored: Explored,
    expanded: Vec<PathState>,
    succ: Vec<PathState>,
    generated: u64,
}

impl<'v, 'b> BfsDriver<'v, 'b> {
    /// A driver seeded with the root for `direction`.
    pub fn new(solver: &'v Solver<'b>, direction: Direction) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(solver.root(direction));
        Self {
            expander: Expander::new(&solver.view, direction, false),
            goal: solver.goal_test(direction),
            queue,
            explored: Explored::default(),
            expanded: Vec::new(),
            succ: Vec::with_capacity(4),
            generated: 0,
        }
    }

    pub fn direction(&self) -> Direction {
        self.goal.direction
    }

    /// States expanded so far, in expansion order.
    pub fn expanded(&self) -> &[PathState] {
        &self.expanded
    }

    /// Successors produced so far.
    pub fn generated(&self) -> u64 {
        self.generated
    }

    /// States waiting in the queue.
    pub fn frontier(&self) -> usize {
        self.queue.len()
    }

    /// Dequeue and expand one state.
    pub fn step(&mut self) -> StepResult {
        let Some(state) = self.queue.pop_front() else {
            return StepResult::Exhausted;
        };
        if !self.explored.insert(&state) {
            return StepResult::Continue;
        }
        trace!(
            "bfs {:?}: expand {} path={} goal={} queue={}",
            self.goal.direction,
            state.pos(),
            state.path_value(),
            state.goal_value(),
            self.queue.len()
        );

        self.succ.clear();
        self.expander.expand(&state, &self.explored, &mut self.succ);
        self.expanded.push(state);

        for next in self.succ.drain(..) {
            self.generated += 1;
            if self.goal.at_target(&next) {
                if self.goal.is_goal(&next) {
                    return StepResult::Found(next);
                }
                continue;
            }
            self.queue.push_back(next);
        }
        StepResult::Continue
    }
}

impl Solver<'_> {
    /// Breadth-first search from the start.
    ///
    /// The returned path has the fewest moves among all paths that reach a
    /// goal-satisfying state.
    pub fn bfs(&self) -> SearchReport {
        let mut budget = StepBudget::new(self.config.max_steps);
        let mut driver = BfsDriver::new(self, Direction::Forward);

        let outcome = loop {
            if !budget.charge() {
                warn!("bfs: step budget of {} spent", budget.spent());
                break Outcome::OutOfBudget;
            }
            match driver.step() {
                StepResult::Continue => {}
                StepResult::Found(state) => break Outcome::Found(Solution::from_state(&state)),
                StepResult::Exhausted => break Outcome::NoPath,
            }
        };

        let stats = SearchStats {
            expanded: driver.expanded().len() as u64,
            generated: driver.generated(),
            iterations: 1,
            thresholds: Vec::new(),
        };
        report(outcome, stats)
    }
}
