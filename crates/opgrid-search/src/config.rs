//! Search configuration.

use std::fmt;
use std::str::FromStr;

use opgrid_core::Point;

use crate::distance::{Euclidean, WeightedSquares};
use crate::state::PathState;
use crate::traits::Heuristic;

/// Which search algorithm to run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Breadth-first search from the start.
    Bfs,
    /// Breadth-first searches from both ends, meeting in the middle.
    Bidirectional,
    /// Iterative-deepening depth-first search.
    Iddfs,
    /// Greedy best-first search over an unordered open list.
    Greedy,
    /// Iterative-deepening A* over step cost.
    IdaStar,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Bfs,
        Strategy::Bidirectional,
        Strategy::Iddfs,
        Strategy::Greedy,
        Strategy::IdaStar,
    ];

    /// Short name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Bidirectional => "bds",
            Self::Iddfs => "ids",
            Self::Greedy => "astar",
            Self::IdaStar => "idastar",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, UnknownStrategy> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "bds" | "bidirectional" => Ok(Self::Bidirectional),
            "ids" | "iddfs" => Ok(Self::Iddfs),
            "astar" | "a*" | "greedy" => Ok(Self::Greedy),
            "idastar" | "ida*" | "ida" => Ok(Self::IdaStar),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

/// Returned when parsing an unrecognised strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown strategy \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for UnknownStrategy {}

/// How greedy best-first search ranks its open list.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scoring {
    /// Maximize `path value − ⌊euclidean distance⌋`.
    Value,
    /// Minimize `cost + dx² + 3·dy²`. Cost accrues per step.
    #[default]
    Cost,
}

impl Scoring {
    /// The f-value of `state` with the goal at `target`.
    pub fn f_value(self, state: &PathState, target: Point) -> f64 {
        match self {
            Self::Value => state.path_value() - Euclidean.estimate(state.pos(), target) as f64,
            Self::Cost => (state.cost() + WeightedSquares.estimate(state.pos(), target)) as f64,
        }
    }

    /// Whether f-value `a` ranks strictly ahead of `b`.
    #[inline]
    pub fn prefers(self, a: f64, b: f64) -> bool {
        match self {
            Self::Value => a > b,
            Self::Cost => a < b,
        }
    }

    /// Whether states under this scoring carry step cost.
    #[inline]
    pub fn accrues_cost(self) -> bool {
        matches!(self, Self::Cost)
    }
}

/// Tunables shared by every strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Deepest bound tried by IDDFS, inclusive.
    pub max_depth: usize,
    /// Maximum number of driver steps before giving up. Each step expands at
    /// most one state; bidirectional search counts both directions.
    pub max_steps: Option<u64>,
    /// Ranking used by greedy best-first search.
    pub scoring: Scoring,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 100,
            max_steps: None,
            scoring: Scoring::Cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operator::Values;

    #[test]
    fn strategy_names_round_trip() {
        for s in Strategy::ALL {
            assert_eq!(s.name().parse::<Strategy>(), Ok(s));
        }
        assert_eq!("IDA*".parse::<Strategy>(), Ok(Strategy::IdaStar));
        assert_eq!("greedy".parse::<Strategy>(), Ok(Strategy::Greedy));
        assert_eq!(
            "dfs".parse::<Strategy>().unwrap_err().to_string(),
            "unknown strategy \u{201c}dfs\u{201d}"
        );
    }

    #[test]
    fn scoring_f_values() {
        let target = Point::new(3, 4);
        let s = PathState::root(Point::ZERO, 0, 25, Values::new(10.0, 0.0));
        assert_eq!(Scoring::Value.f_value(&s, target), 5.0);
        assert_eq!(Scoring::Cost.f_value(&s, target), (9 + 3 * 16) as f64);
        assert!(Scoring::Value.prefers(2.0, 1.0));
        assert!(Scoring::Cost.prefers(1.0, 2.0));
        assert!(!Scoring::Cost.prefers(1.0, 1.0));
    }

    #[test]
    fn default_config() {
        let c = SearchConfig::default();
        assert_eq!(c.max_depth, 100);
        assert_eq!(c.max_steps, None);
        assert_eq!(c.scoring, Scoring::Cost);
    }
}
