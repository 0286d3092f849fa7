use log::debug;
use opgrid_core::{Board, Point};

use crate::config::{SearchConfig, Strategy};
use crate::goal::GoalTest;
use crate::operator::{Direction, Values};
use crate::report::{Outcome, SearchReport, SearchStats};
use crate::state::PathState;
use crate::view::{GridView, SearchError};

/// Central coordinator for searches on one board.
///
/// `Solver` validates the board once and then runs any number of searches.
/// Every search builds its own frontier and explored set, so repeated runs
/// are independent and reproducible.
#[derive(Debug, Clone)]
pub struct Solver<'b> {
    pub(crate) view: GridView<'b>,
    pub(crate) config: SearchConfig,
}

impl<'b> Solver<'b> {
    /// Create a solver with the default configuration.
    pub fn new(board: &'b Board) -> Result<Self, SearchError> {
        Self::with_config(board, SearchConfig::default())
    }

    /// Create a solver with an explicit configuration.
    pub fn with_config(board: &'b Board, config: SearchConfig) -> Result<Self, SearchError> {
        let view = GridView::new(board)?;
        Ok(Self { view, config })
    }

    #[inline]
    pub fn view(&self) -> &GridView<'b> {
        &self.view
    }

    /// Run `strategy` to completion.
    pub fn run(&self, strategy: Strategy) -> SearchReport {
        let (rows, cols) = self.view.dimensions();
        debug!(
            "{strategy}: {rows}x{cols} board, start {} goal {} ({:?})",
            self.view.start(),
            self.view.goal(),
            self.config
        );
        let report = match strategy {
            Strategy::Bfs => self.bfs(),
            Strategy::Bidirectional => self.bidirectional(),
            Strategy::Iddfs => self.iddfs(),
            Strategy::Greedy => self.greedy(),
            Strategy::IdaStar => self.ida_star(),
        };
        debug!(
            "{strategy}: {} after {} expansions, {} successors",
            match &report.outcome {
                Outcome::Found(sol) => format!("found {} steps", sol.steps()),
                Outcome::NoPath => "no path".to_string(),
                Outcome::OutOfBudget => "out of budget".to_string(),
            },
            report.stats.expanded,
            report.stats.generated
        );
        report
    }

    /// The root state for a traversal in `direction`.
    ///
    /// Forward search starts on the start cell with its operand as path value
    /// and the goal's operand as goal value; backward search swaps the roles.
    pub(crate) fn root(&self, direction: Direction) -> PathState {
        let (from, to) = match direction {
            Direction::Forward => (self.view.start(), self.view.goal()),
            Direction::Backward => (self.view.goal(), self.view.start()),
        };
        // start and goal are on the board by construction
        let operand = |p: Point| f64::from(self.view.operand_at(p).unwrap_or(0));
        let index = self.view.index(from).unwrap_or(0);
        PathState::root(
            from,
            index,
            self.view.len(),
            Values::new(operand(from), operand(to)),
        )
    }

    pub(crate) fn goal_test(&self, direction: Direction) -> GoalTest {
        let target = match direction {
            Direction::Forward => self.view.goal(),
            Direction::Backward => self.view.start(),
        };
        GoalTest { target, direction }
    }
}

pub(crate) fn report(outcome: Outcome, stats: SearchStats) -> SearchReport {
    SearchReport { outcome, stats }
}
