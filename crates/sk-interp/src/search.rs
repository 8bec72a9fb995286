//! Bounded binary search over a sorted abscissa table.

use sk_core::Real;

/// Find `i` in `[index_lo, index_hi - 1]` such that `xa[i] <= x < xa[i+1]`.
///
/// The result is clamped at the table edges: a point below `xa[index_lo]`
/// maps to `index_lo`, a point at or beyond `xa[index_hi]` maps to
/// `index_hi - 1`.  A point equal to an interior sample returns the segment
/// starting at that sample.
///
/// `xa` must be sorted and `index_lo < index_hi < xa.len()`.
#[inline]
pub fn bsearch(xa: &[Real], x: Real, index_lo: usize, index_hi: usize) -> usize {
    let mut ilo = index_lo;
    let mut ihi = index_hi;
    while ihi > ilo + 1 {
        let i = (ihi + ilo) / 2;
        if xa[i] > x {
            ihi = i;
        } else {
            ilo = i;
        }
    }
    ilo
}

/// Segment index of `x` in the whole table.
///
/// Equivalent to `bsearch(xa, x, 0, xa.len() - 1)`.  Tables with fewer
/// than two samples have no segments; they map every `x` to `0`.
#[inline]
pub fn find_interval(xa: &[Real], x: Real) -> usize {
    bsearch(xa, x, 0, xa.len().saturating_sub(1))
}
