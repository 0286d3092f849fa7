//! Iterative-deepening A* over accumulated step cost.

use log::{debug, trace, warn};

use crate::Solver;
use crate::budget::StepBudget;
use crate::distance::WeightedSquares;
use crate::goal::GoalTest;
use crate::operator::Direction;
use crate::report::{Outcome, SearchReport, SearchStats, Solution};
use crate::solver::report;
use crate::state::{Explored, PathState};
use crate::traits::Heuristic;
use crate::transition::Expander;

/// Sentinel for "nothing was pruned".
const NO_BOUND: u64 = u64::MAX;

/// Result of one bounded pass.
enum Pass {
    Found(PathState),
    /// Smallest f-value that exceeded the bound, or [`NO_BOUND`].
    Bound(u64),
    OutOfBudget,
}

impl Solver<'_> {
    /// Cost-bounded depth-first passes with `f = cost + dx² + 3·dy²`.
    ///
    /// The first bound is the root's f-value. Each pass prunes states whose
    /// f exceeds the bound and the next bound is the smallest pruned f, so
    /// the bounds in [`SearchStats::thresholds`] strictly increase. When a
    /// pass prunes nothing the search space is exhausted.
    pub fn ida_star(&self) -> SearchReport {
        let goal = self.goal_test(Direction::Forward);
        let mut expander = Expander::new(&self.view, Direction::Forward, true);
        let mut budget = StepBudget::new(self.config.max_steps);
        let mut stats = SearchStats::default();

        let root = self.root(Direction::Forward);
        let mut bound = f_cost(&root, &goal);

        let outcome = loop {
            stats.iterations += 1;
            stats.thresholds.push(bound);
            debug!("idastar: bound {bound}");

            match self.bounded_pass(&root, bound, &goal, &mut expander, &mut budget, &mut stats) {
                Pass::Found(state) => break Outcome::Found(Solution::from_state(&state)),
                Pass::Bound(NO_BOUND) => break Outcome::NoPath,
                Pass::Bound(next) => bound = next,
                Pass::OutOfBudget => {
                    warn!("idastar: step budget of {} spent", budget.spent());
                    break Outcome::OutOfBudget;
                }
            }
        };
        report(outcome, stats)
    }

    fn bounded_pass(
        &self,
        root: &PathState,
        bound: u64,
        goal: &GoalTest,
        expander: &mut Expander<'_, '_>,
        budget: &mut StepBudget,
        stats: &mut SearchStats,
    ) -> Pass {
        let mut explored = Explored::default();
        let mut stack = vec![root.clone()];
        let mut succ = Vec::with_capacity(4);
        let mut min_pruned = NO_BOUND;

        while let Some(state) = stack.pop() {
            let f = f_cost(&state, goal);
            if f > bound {
                min_pruned = min_pruned.min(f);
                continue;
            }
            if goal.is_goal(&state) {
                return Pass::Found(state);
            }
            if goal.at_target(&state) {
                continue;
            }
            if !explored.insert(&state) {
                continue;
            }
            if !budget.expand(stats) {
                return Pass::OutOfBudget;
            }
            trace!("idastar: expand {} f={f} stack={}", state.pos(), stack.len());

            succ.clear();
            expander.expand(&state, &explored, &mut succ);
            stats.generated += succ.len() as u64;
            stack.extend(succ.drain(..).rev());
        }
        Pass::Bound(min_pruned)
    }
}

fn f_cost(state: &PathState, goal: &GoalTest) -> u64 {
    state
        .cost()
        .saturating_add(WeightedSquares.estimate(state.pos(), goal.target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchConfig;
    use opgrid_core::{Board, Point};

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn sample_board_raises_bound_once() {
        let b = board("3 3\ns0 +2 w0\n+1 *3 -1\nw0 g5 +1");
        let rep = Solver::new(&b).unwrap().ida_star();
        // root: 0 + 1² + 3·2² = 13; the +2 branch starts at 2 + 0 + 12 = 14
        assert_eq!(rep.stats.thresholds, vec![13, 14]);
        let sol = rep.outcome.into_solution().unwrap();
        assert_eq!(
            sol.path,
            vec![Point::at(0, 0), Point::at(0, 1), Point::at(1, 1), Point::at(2, 1)]
        );
        // +2, *3, g
        assert_eq!(sol.cost, 8);
        assert_eq!(sol.path_value, 6.0);
    }

    #[test]
    fn thresholds_strictly_increase() {
        let b = board("3 4\ns1 -1 +1 +1\n+1 w0 *2 +1\n+1 +1 +1 g9");
        let rep = Solver::new(&b).unwrap().ida_star();
        assert!(rep.outcome.is_found());
        assert!(rep.stats.thresholds.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(rep.stats.iterations as usize, rep.stats.thresholds.len());
    }

    #[test]
    fn walled_off_goal_has_no_path() {
        let b = board("3 3\ns0 +1 +1\n+1 w0 +1\nw0 g0 w0");
        let rep = Solver::new(&b).unwrap().ida_star();
        assert_eq!(rep.outcome, Outcome::NoPath);
    }

    #[test]
    fn budget_stops_probing() {
        let b = board("1 5\ns0 +1 +1 +1 g9");
        let cfg = SearchConfig {
            max_steps: Some(1),
            ..SearchConfig::default()
        };
        let rep = Solver::with_config(&b, cfg).unwrap().ida_star();
        assert_eq!(rep.outcome, Outcome::OutOfBudget);
        assert_eq!(rep.stats.expanded, 1);
    }
}
