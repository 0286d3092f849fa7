//! Search nodes.
//!
//! A [`PathState`] is immutable once built. Its visited mask and its path
//! history are persistent: a successor copies the parent's mask words and
//! links to the parent's trail, so siblings never observe each other.

use std::collections::HashSet;
use std::rc::Rc;

use opgrid_core::Point;

use crate::operator::Values;

// ---------------------------------------------------------------------------
// VisitMask
// ---------------------------------------------------------------------------

/// The set of cells on one path, as a fixed-size bitset over the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VisitMask {
    words: Rc<[u64]>,
}

impl VisitMask {
    /// An empty mask for a board of `len` cells.
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![0u64; len.div_ceil(64)].into(),
        }
    }

    /// Whether cell `i` is marked.
    #[inline]
    pub fn contains(&self, i: usize) -> bool {
        self.words
            .get(i / 64)
            .is_some_and(|w| w & (1u64 << (i % 64)) != 0)
    }

    /// A copy of this mask with cell `i` marked.
    pub fn with(&self, i: usize) -> Self {
        let mut words = self.words.to_vec();
        if let Some(w) = words.get_mut(i / 64) {
            *w |= 1u64 << (i % 64);
        }
        Self {
            words: words.into(),
        }
    }

    /// Number of marked cells.
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

// ---------------------------------------------------------------------------
// Trail
// ---------------------------------------------------------------------------

/// Parent-linked path history.
#[derive(Debug)]
struct Trail {
    pos: Point,
    len: usize,
    prev: Option<Rc<Trail>>,
}

impl Drop for Trail {
    // Unlink iteratively so that dropping a long trail does not recurse.
    fn drop(&mut self) {
        let mut prev = self.prev.take();
        while let Some(rc) = prev {
            match Rc::try_unwrap(rc) {
                Ok(mut t) => prev = t.prev.take(),
                Err(_) => break,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// PathState
// ---------------------------------------------------------------------------

/// A search node: position, running values, accumulated cost, the cells
/// already on this path, and how it got here.
///
/// Equality and hashing go through [`SearchKey`], so two states compare
/// equal exactly when they would be deduplicated.
#[derive(Clone, Debug)]
pub struct PathState {
    pos: Point,
    values: Values,
    cost: u64,
    visited: VisitMask,
    trail: Rc<Trail>,
}

impl PathState {
    /// A search root at `pos` (flat index `index`) on a board of `len` cells.
    pub(crate) fn root(pos: Point, index: usize, len: usize, values: Values) -> Self {
        Self {
            pos,
            values,
            cost: 0,
            visited: VisitMask::new(len).with(index),
            trail: Rc::new(Trail {
                pos,
                len: 1,
                prev: None,
            }),
        }
    }

    /// A child of `self` that has moved to `pos` (flat index `index`).
    pub(crate) fn successor(&self, pos: Point, index: usize, values: Values, cost: u64) -> Self {
        Self {
            pos,
            values,
            cost,
            visited: self.visited.with(index),
            trail: Rc::new(Trail {
                pos,
                len: self.trail.len + 1,
                prev: Some(Rc::clone(&self.trail)),
            }),
        }
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn values(&self) -> Values {
        self.values
    }

    #[inline]
    pub fn path_value(&self) -> f64 {
        self.values.path
    }

    #[inline]
    pub fn goal_value(&self) -> f64 {
        self.values.goal
    }

    /// Accumulated step cost. Zero unless the strategy accrues cost.
    #[inline]
    pub fn cost(&self) -> u64 {
        self.cost
    }

    #[inline]
    pub fn visited(&self) -> &VisitMask {
        &self.visited
    }

    /// Number of moves from the root.
    #[inline]
    pub fn depth(&self) -> usize {
        self.trail.len - 1
    }

    /// Positions from the root to this state, inclusive.
    pub fn path(&self) -> Vec<Point> {
        let mut path = Vec::with_capacity(self.trail.len);
        let mut cur = Some(&self.trail);
        while let Some(t) = cur {
            path.push(t.pos);
            cur = t.prev.as_ref();
        }
        path.reverse();
        path
    }

    /// The key used for deduplication within one traversal.
    pub fn key(&self) -> SearchKey {
        SearchKey {
            pos: self.pos,
            // +0.0 folds -0.0 into 0.0
            path_bits: (self.values.path + 0.0).to_bits(),
            goal_bits: (self.values.goal + 0.0).to_bits(),
            visited: self.visited.clone(),
        }
    }
}

impl PartialEq for PathState {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for PathState {}

impl std::hash::Hash for PathState {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// Position, running values and visited cells of a [`PathState`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SearchKey {
    pos: Point,
    path_bits: u64,
    goal_bits: u64,
    visited: VisitMask,
}

/// States already expanded by one search invocation.
#[derive(Debug, Default)]
pub(crate) struct Explored {
    keys: HashSet<SearchKey>,
}

impl Explored {
    /// Record `state`. Returns `false` if an equal state was already there.
    pub(crate) fn insert(&mut self, state: &PathState) -> bool {
        self.keys.insert(state.key())
    }

    pub(crate) fn contains(&self, state: &PathState) -> bool {
        self.keys.contains(&state.key())
    }

    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }
}
