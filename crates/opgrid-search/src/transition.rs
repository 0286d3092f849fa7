//! Successor generation.

use log::trace;
use opgrid_core::Point;

use crate::operator::{Direction, apply, step_cost};
use crate::state::{Explored, PathState};
use crate::traits::Pather;
use crate::view::GridView;

/// Enumerates the successors of a [`PathState`].
///
/// A candidate is every cardinal neighbour that is on the board, not a
/// wall, and not already on the current path. Candidates whose operator
/// cannot be applied, or that reproduce a state in `explored`, are dropped.
pub(crate) struct Expander<'v, 'b> {
    view: &'v GridView<'b>,
    direction: Direction,
    accrue_cost: bool,
    nbuf: Vec<Point>,
}

impl<'v, 'b> Expander<'v, 'b> {
    pub(crate) fn new(view: &'v GridView<'b>, direction: Direction, accrue_cost: bool) -> Self {
        Self {
            view,
            direction,
            accrue_cost,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Append the successors of `state` to `out`, in up, left, down, right
    /// order.
    pub(crate) fn expand(
        &mut self,
        state: &PathState,
        explored: &Explored,
        out: &mut Vec<PathState>,
    ) {
        self.nbuf.clear();
        self.view.neighbors(state.pos(), &mut self.nbuf);

        for &np in self.nbuf.iter() {
            let (Some(ni), Some(tile)) = (self.view.index(np), self.view.tile(np)) else {
                continue;
            };
            if state.visited().contains(ni) {
                continue;
            }
            let values = match apply(tile, state.values(), self.direction) {
                Ok(v) => v,
                Err(err) => {
                    trace!("skip {np}: {err}");
                    continue;
                }
            };
            let cost = if self.accrue_cost {
                state.cost() + step_cost(tile.op)
            } else {
                state.cost()
            };
            let next = state.successor(np, ni, values, cost);
            if explored.contains(&next) {
                continue;
            }
            out.push(next);
        }
    }
}
