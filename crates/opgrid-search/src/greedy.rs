//! Greedy best-first search.

use log::{trace, warn};
use opgrid_core::Point;

use crate::Solver;
use crate::budget::StepBudget;
use crate::config::Scoring;
use crate::operator::Direction;
use crate::report::{Outcome, SearchReport, SearchStats, Solution};
use crate::solver::report;
use crate::state::{Explored, PathState};
use crate::transition::Expander;

impl Solver<'_> {
    /// Best-first search over an unordered open list.
    ///
    /// Each round scans the whole list for the best f-value under
    /// [`SearchConfig::scoring`](crate::SearchConfig::scoring), removes it,
    /// and appends its successors. Ties go to the state that has been on the
    /// list longest. Successors are goal-tested as they are generated.
    pub fn greedy(&self) -> SearchReport {
        let scoring = self.config.scoring;
        let goal = self.goal_test(Direction::Forward);
        let mut expander = Expander::new(&self.view, Direction::Forward, scoring.accrues_cost());
        let mut budget = StepBudget::new(self.config.max_steps);
        let mut stats = SearchStats {
            iterations: 1,
            ..SearchStats::default()
        };

        let mut open: Vec<PathState> = vec![self.root(Direction::Forward)];
        let mut explored = Explored::default();
        let mut succ = Vec::with_capacity(4);

        let outcome = 'search: loop {
            let Some(i) = best_index(&open, scoring, goal.target) else {
                break Outcome::NoPath;
            };
            // `remove` keeps the scan order of the remaining states
            let state = open.remove(i);
            if !explored.insert(&state) {
                continue;
            }
            if !budget.expand(&mut stats) {
                warn!("astar: step budget of {} spent", budget.spent());
                break Outcome::OutOfBudget;
            }
            trace!(
                "astar: expand {} f={} open={}",
                state.pos(),
                scoring.f_value(&state, goal.target),
                open.len()
            );

            succ.clear();
            expander.expand(&state, &explored, &mut succ);
            for next in succ.drain(..) {
                stats.generated += 1;
                if goal.at_target(&next) {
                    if goal.is_goal(&next) {
                        break 'search Outcome::Found(Solution::from_state(&next));
                    }
                    continue;
                }
                open.push(next);
            }
        };
        report(outcome, stats)
    }
}

/// Index of the first state with the best f-value.
fn best_index(open: &[PathState], scoring: Scoring, target: Point) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, s) in open.iter().enumerate() {
        let f = scoring.f_value(s, target);
        match best {
            Some((_, bf)) if !scoring.prefers(f, bf) => {}
            _ => best = Some((i, f)),
        }
    }
    best.map(|(i, _)| i)
}
