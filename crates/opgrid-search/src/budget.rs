//! Step budgets for long-running searches.

use crate::report::SearchStats;

/// Counts driver steps against an optional ceiling.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StepBudget {
    limit: Option<u64>,
    spent: u64,
}

impl StepBudget {
    #[inline]
    pub(crate) fn new(limit: Option<u64>) -> Self {
        Self { limit, spent: 0 }
    }

    /// Take one step. Returns `false`, without taking it, once the ceiling
    /// is reached.
    #[inline]
    pub(crate) fn charge(&mut self) -> bool {
        if self.limit.is_some_and(|l| self.spent >= l) {
            return false;
        }
        self.spent += 1;
        true
    }

    /// Take one step and count it as an expansion in `stats`.
    #[inline]
    pub(crate) fn expand(&mut self, stats: &mut SearchStats) -> bool {
        let ok = self.charge();
        if ok {
            stats.expanded += 1;
        }
        ok
    }

    #[inline]
    pub(crate) fn spent(&self) -> u64 {
        self.spent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_never_refuses() {
        let mut b = StepBudget::new(None);
        for _ in 0..1000 {
            assert!(b.charge());
        }
        assert_eq!(b.spent(), 1000);
    }

    #[test]
    fn limited_refuses_after_ceiling() {
        let mut b = StepBudget::new(Some(2));
        let mut stats = SearchStats::default();
        assert!(b.expand(&mut stats));
        assert!(b.expand(&mut stats));
        assert!(!b.expand(&mut stats));
        assert_eq!(b.spent(), 2);
        assert_eq!(stats.expanded, 2);
    }
}
