//! Iterative-deepening depth-first search.

use log::{debug, trace, warn};

use crate::Solver;
use crate::budget::StepBudget;
use crate::goal::GoalTest;
use crate::operator::Direction;
use crate::report::{Outcome, SearchReport, SearchStats, Solution};
use crate::solver::report;
use crate::state::{Explored, PathState};
use crate::transition::Expander;

/// Result of one depth-limited pass.
enum Pass {
    Found(PathState),
    /// Some state was cut off by the depth bound.
    Cutoff,
    /// The whole space fit under the bound.
    Exhausted,
    OutOfBudget,
}

impl Solver<'_> {
    /// Depth-limited search with bounds `0, 1, …, max_depth`.
    ///
    /// Returns at the first bound that admits a solution, so the path has
    /// exactly that many moves. A pass in which nothing was cut off has seen
    /// every path, and deepening stops there.
    pub fn iddfs(&self) -> SearchReport {
        let goal = self.goal_test(Direction::Forward);
        let mut expander = Expander::new(&self.view, Direction::Forward, false);
        let mut budget = StepBudget::new(self.config.max_steps);
        let mut stats = SearchStats::default();

        let mut outcome = Outcome::NoPath;
        for depth in 0..=self.config.max_depth {
            stats.iterations += 1;
            stats.thresholds.push(depth as u64);
            debug!("ids: depth {depth}");

            match self.depth_limited(depth, &goal, &mut expander, &mut budget, &mut stats) {
                Pass::Found(state) => {
                    outcome = Outcome::Found(Solution::from_state(&state));
                    break;
                }
                Pass::Cutoff => {}
                Pass::Exhausted => break,
                Pass::OutOfBudget => {
                    warn!("ids: step budget of {} spent", budget.spent());
                    outcome = Outcome::OutOfBudget;
                    break;
                }
            }
        }
        report(outcome, stats)
    }

    fn depth_limited(
        &self,
        depth: usize,
        goal: &GoalTest,
        expander: &mut Expander<'_, '_>,
        budget: &mut StepBudget,
        stats: &mut SearchStats,
    ) -> Pass {
        let mut explored = Explored::default();
        let mut stack: Vec<(PathState, usize)> = vec![(self.root(Direction::Forward), depth)];
        let mut succ = Vec::with_capacity(4);
        let mut cut = false;

        while let Some((state, remaining)) = stack.pop() {
            if goal.is_goal(&state) {
                return Pass::Found(state);
            }
            if goal.at_target(&state) {
                continue;
            }
            if remaining == 0 {
                cut = true;
                continue;
            }
            if !explored.insert(&state) {
                continue;
            }
            if !budget.expand(stats) {
                return Pass::OutOfBudget;
            }
            trace!(
                "ids: expand {} path={} remaining={remaining} stack={}",
                state.pos(),
                state.path_value(),
                stack.len()
            );

            succ.clear();
            expander.expand(&state, &explored, &mut succ);
            stats.generated += succ.len() as u64;
            // reversed so that the first successor is popped first
            stack.extend(succ.drain(..).rev().map(|s| (s, remaining - 1)));
        }

        trace!("ids: pass {depth} explored {} states", explored.len());
        if cut { Pass::Cutoff } else { Pass::Exhausted }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchConfig;
    use opgrid_core::{Board, Point};

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn solver(b: &Board, max_depth: usize) -> Solver<'_> {
        let cfg = SearchConfig {
            max_depth,
            ..SearchConfig::default()
        };
        Solver::with_config(b, cfg).unwrap()
    }

    #[test]
    fn finds_sample_solution_at_smallest_depth() {
        let b = board("3 3\ns0 +2 w0\n+1 *3 -1\nw0 g5 +1");
        let s = Solver::new(&b).unwrap();
        let rep = s.iddfs();
        let sol = rep.outcome.solution().unwrap();
        assert_eq!(sol.steps(), 3);
        assert_eq!(
            sol.path,
            vec![Point::at(0, 0), Point::at(0, 1), Point::at(1, 1), Point::at(2, 1)]
        );
        assert_eq!(rep.stats.thresholds, vec![0, 1, 2, 3]);
    }

    #[test]
    fn matches_bfs_length() {
        let b = board("3 4\ns1 -1 +1 +1\n+1 w0 *2 +1\n+1 +1 +1 g9");
        let s = Solver::new(&b).unwrap();
        let bfs = s.bfs().outcome.into_solution().unwrap();
        let ids = s.iddfs().outcome.into_solution().unwrap();
        assert_eq!(ids.steps(), bfs.steps());
    }

    #[test]
    fn raising_the_ceiling_keeps_the_solution() {
        let b = board("3 4\ns1 -1 +1 +1\n+1 w0 *2 +1\n+1 +1 +1 g9");
        let low = solver(&b, 8).iddfs().outcome.into_solution().unwrap();
        let high = solver(&b, 40).iddfs().outcome.into_solution().unwrap();
        assert!(low.steps() <= 8);
        assert_eq!(low, high);
    }

    #[test]
    fn ceiling_too_low_reports_no_path() {
        let b = board("1 5\ns0 +1 +1 +1 g0");
        let rep = solver(&b, 3).iddfs();
        assert_eq!(rep.outcome, Outcome::NoPath);
        assert_eq!(rep.stats.iterations, 4);
        assert!(solver(&b, 4).iddfs().outcome.is_found());
    }

    #[test]
    fn exhausted_space_stops_deepening() {
        let b = board("3 3\ns0 +1 +1\n+1 w0 +1\nw0 g0 w0");
        let rep = Solver::new(&b).unwrap().iddfs();
        assert_eq!(rep.outcome, Outcome::NoPath);
        assert!(rep.stats.iterations < 100);
    }
}
