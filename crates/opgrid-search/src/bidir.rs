//! Bidirectional breadth-first search.

use log::{debug, warn};

use crate::Solver;
use crate::bfs::{BfsDriver, StepResult};
use crate::budget::StepBudget;
use crate::operator::Direction;
use crate::report::{Outcome, SearchReport, SearchStats, Solution};
use crate::solver::report;
use crate::state::PathState;

impl Solver<'_> {
    /// Run a forward search from the start and a backward search from the
    /// goal in lockstep, one step each, until they meet.
    ///
    /// After every joint step each expanded forward state is compared with
    /// each expanded backward state. They meet when they stand on the same
    /// cell and the forward path value is at least the backward one. The
    /// result is the forward path followed by the reversed backward path.
    ///
    /// If one direction satisfies its own goal test first, its path is the
    /// result. If one direction runs dry, the other keeps going alone.
    pub fn bidirectional(&self) -> SearchReport {
        let mut budget = StepBudget::new(self.config.max_steps);
        let mut fwd = BfsDriver::new(self, Direction::Forward);
        let mut bwd = BfsDriver::new(self, Direction::Backward);
        let mut fwd_done = false;
        let mut bwd_done = false;
        let mut rounds = 0u32;

        let outcome = loop {
            if fwd_done && bwd_done {
                break Outcome::NoPath;
            }
            rounds += 1;

            if !fwd_done {
                if !budget.charge() {
                    warn!("bds: step budget of {} spent", budget.spent());
                    break Outcome::OutOfBudget;
                }
                match fwd.step() {
                    StepResult::Continue => {}
                    StepResult::Found(state) => {
                        debug!("bds: forward search reached the goal alone");
                        break Outcome::Found(Solution::from_state(&state));
                    }
                    StepResult::Exhausted => fwd_done = true,
                }
            }
            if !bwd_done {
                if !budget.charge() {
                    warn!("bds: step budget of {} spent", budget.spent());
                    break Outcome::OutOfBudget;
                }
                match bwd.step() {
                    StepResult::Continue => {}
                    StepResult::Found(state) => {
                        debug!("bds: backward search reached the start alone");
                        break Outcome::Found(Solution::from_backward(&state));
                    }
                    StepResult::Exhausted => bwd_done = true,
                }
            }

            if let Some((f, b)) = meet(fwd.expanded(), bwd.expanded()) {
                debug!("bds: frontiers meet at {} after {rounds} rounds", f.pos());
                break Outcome::Found(Solution::merged(f, b));
            }
        };

        let stats = SearchStats {
            expanded: (fwd.expanded().len() + bwd.expanded().len()) as u64,
            generated: fwd.generated() + bwd.generated(),
            iterations: rounds,
            thresholds: Vec::new(),
        };
        report(outcome, stats)
    }
}

/// First forward/backward pair on the same cell with the forward path value
/// at least the backward one, scanning forward states in the outer loop.
fn meet<'s>(
    forward: &'s [PathState],
    backward: &'s [PathState],
) -> Option<(&'s PathState, &'s PathState)> {
    for f in forward {
        for b in backward {
            if f.pos() == b.pos() && f.path_value() >= b.path_value() {
                return Some((f, b));
            }
        }
    }
    None
}
