//! Lookup accelerator.
//!
//! [`InterpAccel`] remembers the segment index returned by the previous
//! lookup.  When the next query lands in the same segment or one of its two
//! neighbours the index is returned without searching; otherwise a binary
//! search restricted to the side of the cached segment that contains the
//! query is performed and its result cached.
//!
//! The cached index is only ever used after its bounds have been checked
//! against the table passed to [`InterpAccel::find`], so reusing an
//! accelerator with a different table can cost a miss but never produces a
//! wrong index.  Calling [`InterpAccel::reset`] when switching tables keeps
//! the hit rate meaningful.
//!
//! An accelerator carries mutable state: threads evaluating the same
//! interpolant concurrently must each use their own.

use sk_core::Real;
use tracing::trace;

use crate::search::bsearch;

/// Cache of the most recently located segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterpAccel {
    /// `None` while cold.
    cache: Option<usize>,
    hit_count: usize,
    miss_count: usize,
}

impl InterpAccel {
    /// A cold accelerator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the cached segment and the hit/miss statistics.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Cached segment index, if any.
    pub fn cached(&self) -> Option<usize> {
        self.cache
    }

    /// Lookups answered from the cache since the last reset.
    pub fn hits(&self) -> usize {
        self.hit_count
    }

    /// Lookups that needed a binary search since the last reset.
    pub fn misses(&self) -> usize {
        self.miss_count
    }

    /// Locate the segment of `xa` containing `x`.
    ///
    /// Always returns the same index as
    /// [`find_interval`](crate::search::find_interval); `xa` must be sorted.
    /// Tables with fewer than two samples give `0`.
    pub fn find(&mut self, xa: &[Real], x: Real) -> usize {
        let n = xa.len();
        let index = match self.cache {
            Some(k) if k + 1 < n => {
                if let Some(j) = Self::nearby(xa, k, x) {
                    self.hit_count += 1;
                    j
                } else {
                    self.miss_count += 1;
                    trace!(cached = k, x, "accelerator miss");
                    if x < xa[k] {
                        bsearch(xa, x, 0, k)
                    } else {
                        bsearch(xa, x, k, n - 1)
                    }
                }
            }
            _ => {
                self.miss_count += 1;
                bsearch(xa, x, 0, n.saturating_sub(1))
            }
        };
        self.cache = Some(index);
        index
    }

    /// Segment `k` or one of its neighbours, if it holds `x`.
    #[inline]
    fn nearby(xa: &[Real], k: usize, x: Real) -> Option<usize> {
        if holds(xa, k, x) {
            Some(k)
        } else if k + 2 < xa.len() && holds(xa, k + 1, x) {
            Some(k + 1)
        } else if k > 0 && holds(xa, k - 1, x) {
            Some(k - 1)
        } else {
            None
        }
    }
}

/// `true` if the clamped binary search would return segment `j` for `x`.
#[inline]
fn holds(xa: &[Real], j: usize, x: Real) -> bool {
    let last = xa.len() - 2;
    (j == 0 || xa[j] <= x) && (j == last || x < xa[j + 1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::find_interval;

    const XA: [Real; 5] = [0.0, 1.0, 2.0, 3.0, 4.0];

    #[test]
    fn starts_cold() {
        let acc = InterpAccel::new();
        assert_eq!(acc.cached(), None);
    }

    #[test]
    fn matches_bsearch_over_all_pairs() {
        let r = [
            -0.2, 0.0, 0.1, 0.7, 1.0, 1.3, 1.9, 2.0, 2.2, 2.7, 3.0, 3.1, 3.6, 4.0, 4.1, 4.9,
        ];
        let mut acc = InterpAccel::new();
        for &first in &r {
            for &second in &r {
                for x in [first, second] {
                    let i = acc.find(&XA, x);
                    let j = find_interval(&XA, x);
                    assert_eq!(i, j, "accelerated lookup vs bsearch at x = {x}");
                }
            }
        }
    }

    #[test]
    fn sequential_queries_hit() {
        let mut acc = InterpAccel::new();
        for i in 0..=40 {
            let x = 0.1 * i as Real;
            assert_eq!(acc.find(&XA, x), find_interval(&XA, x));
        }
        assert_eq!(acc.miss_count, 1, "only the cold lookup should miss");
        assert_eq!(acc.hit_count, 40);
    }

    #[test]
    fn far_jump_misses() {
        let mut acc = InterpAccel::new();
        acc.find(&XA, 0.5);
        assert_eq!(acc.find(&XA, 3.5), 3);
        assert_eq!(acc.miss_count, 2);
        assert_eq!(acc.find(&XA, 0.2), 0);
        assert_eq!(acc.miss_count, 3);
    }

    #[test]
    fn reset_goes_cold() {
        let mut acc = InterpAccel::new();
        acc.find(&XA, 2.5);
        assert_eq!(acc.cached(), Some(2));
        acc.reset();
        assert_eq!(acc, InterpAccel::new());
    }

    #[test]
    fn stale_cache_from_larger_table_is_revalidated() {
        let big: Vec<Real> = (0..20).map(|i| i as Real).collect();
        let mut acc = InterpAccel::new();
        assert_eq!(acc.find(&big, 17.5), 17);
        // no reset: the cached index does not exist in the smaller table
        assert_eq!(acc.find(&XA, 2.5), 2);
        assert_eq!(acc.find(&XA, 10.0), 3);
    }

    #[test]
    fn degenerate_tables_clamp_to_zero() {
        let mut acc = InterpAccel::new();
        assert_eq!(acc.find(&[], 0.5), 0);
        assert_eq!(acc.find(&[1.0], 0.5), 0);
        // a cache left by a real table is not trusted on an empty one
        assert_eq!(acc.find(&XA, 3.5), 3);
        assert_eq!(acc.find(&[], 3.5), 0);
        assert_eq!(acc.find(&[1.0], 3.5), 0);
    }
}
