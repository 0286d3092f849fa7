//! Threshold path search over operator grids.
//!
//! A path starts on the `s` cell with the start operand as its running
//! value. Every cell it enters applies that cell's operator, either to the
//! running value (`+ - * ^`) or to the goal value (`a b`). A path succeeds
//! when it enters the `g` cell with a running value strictly above the goal
//! value. Paths never revisit a cell.
//!
//! All searches run through [`Solver`], which validates the board once:
//!
//! | Strategy | Method | Finds |
//! |---|---|---|
//! | [`Strategy::Bfs`] | [`Solver::bfs`] | fewest moves |
//! | [`Strategy::Bidirectional`] | [`Solver::bidirectional`] | meeting forward and backward frontiers |
//! | [`Strategy::Iddfs`] | [`Solver::iddfs`] | fewest moves, bounded by [`SearchConfig::max_depth`] |
//! | [`Strategy::Greedy`] | [`Solver::greedy`] | first goal under [`Scoring`] |
//! | [`Strategy::IdaStar`] | [`Solver::ida_star`] | cost-bounded, `f = cost + dx² + 3·dy²` |
//!
//! Backward search walks from the goal and applies each operator's inverse,
//! see [`apply`].

mod bfs;
mod bidir;
mod budget;
mod config;
mod distance;
mod goal;
mod greedy;
mod idastar;
mod iddfs;
mod operator;
mod report;
mod solver;
mod state;
mod traits;
mod transition;
mod view;

pub use bfs::{BfsDriver, StepResult};
pub use config::{Scoring, SearchConfig, Strategy, UnknownStrategy};
pub use distance::{Euclidean, WeightedSquares, euclidean, weighted_squares};
pub use goal::{GoalTest, threshold_holds};
pub use operator::{Direction, OperatorError, Values, apply, step_cost};
pub use report::{Outcome, SearchReport, SearchStats, Solution};
pub use solver::Solver;
pub use state::{PathState, SearchKey, VisitMask};
pub use traits::{Heuristic, Pather};
pub use view::{GridView, SearchError, find_cell};
