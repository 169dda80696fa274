//! Lenient comparison of texts through their invariant forms.
//!
//! Both operands are folded with the same [`Axis`] on the fly, so nothing is
//! allocated and comparisons stop at the first difference.

use std::cmp::Ordering;

use itertools::{EitherOrBoth, Itertools};

use crate::{axis::Axis, mapper::fold_char};

/// Iterates over the invariant form of `s` under `axis`.
#[inline]
pub fn invariant_chars(axis: Axis, s: &str) -> impl DoubleEndedIterator<Item = char> + '_ {
    s.chars().flat_map(move |ch| fold_char(axis, ch))
}

/// States whether `s1` and `s2` have the same invariant form under `axis`.
#[inline]
pub fn str_invariant_equal(axis: Axis, s1: &str, s2: &str) -> bool {
    invariant_chars(axis, s1)
        .zip_longest(invariant_chars(axis, s2))
        .all(|eb| match eb {
            EitherOrBoth::Both(c1, c2) => c1 == c2,
            _ => false,
        })
}

/// States whether the invariant form of `s1` is a prefix of the invariant
/// form of `s2`.
#[inline]
pub fn str_invariant_is_prefix(axis: Axis, s1: &str, s2: &str) -> bool {
    for eob in invariant_chars(axis, s1).zip_longest(invariant_chars(axis, s2)) {
        match eob {
            EitherOrBoth::Both(c1, c2) => {
                if c1 != c2 {
                    return false;
                }
            }
            EitherOrBoth::Left(_) => return false,
            EitherOrBoth::Right(_) => return true,
        }
    }
    true
}

/// States whether the invariant form of `s1` is a suffix of the invariant
/// form of `s2`.
#[inline]
pub fn str_invariant_is_suffix(axis: Axis, s1: &str, s2: &str) -> bool {
    for eob in invariant_chars(axis, s1)
        .rev()
        .zip_longest(invariant_chars(axis, s2).rev())
    {
        match eob {
            EitherOrBoth::Both(c1, c2) => {
                if c1 != c2 {
                    return false;
                }
            }
            EitherOrBoth::Left(_) => return false,
            EitherOrBoth::Right(_) => return true,
        }
    }
    true
}

/// Orders `s1` and `s2` by code point over their invariant forms.
#[inline]
pub fn str_invariant_cmp(axis: Axis, s1: &str, s2: &str) -> Ordering {
    invariant_chars(axis, s1).cmp(invariant_chars(axis, s2))
}
