//! Simultaneous minimum and maximum selection by divide and conquer.
//!
//! The range is halved until one or two elements remain; pairs cost a single
//! comparison and every merge costs two, for roughly `3n/2` comparisons instead
//! of the `2n - 2` needed by two independent scans.

use core::cmp::Ordering;
use core::fmt;

use log::trace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The sequence has no elements
    EmptySequence,
    /// The inclusive range `[lo, hi]` is reversed or reaches past the end of the sequence
    OutOfRange { lo: usize, hi: usize, len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptySequence => write!(f, "the sequence is empty"),
            Error::OutOfRange { lo, hi, len } => {
                write!(f, "range [{lo}, {hi}] is not valid for a sequence of length {len}")
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;

/// The outcome of a selection, along with how many element comparisons it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a, T> {
    pub min: &'a T,
    pub max: &'a T,
    pub comparisons: usize,
}

/// Returns the minimum and maximum of `sequence[lo..=hi]`.
pub fn min_max_select<T: Ord>(sequence: &[T], lo: usize, hi: usize) -> Result<(&T, &T)> {
    min_max_select_by(sequence, lo, hi, Ord::cmp)
}

pub fn min_max_select_by<T, F>(sequence: &[T], lo: usize, hi: usize, compare: F) -> Result<(&T, &T)>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let selection = select_by(sequence, lo, hi, compare)?;
    Ok((selection.min, selection.max))
}

pub fn select_with_stats<T: Ord>(sequence: &[T], lo: usize, hi: usize) -> Result<Selection<'_, T>> {
    select_by(sequence, lo, hi, Ord::cmp)
}

pub fn select_by<T, F>(sequence: &[T], lo: usize, hi: usize, compare: F) -> Result<Selection<'_, T>>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if sequence.is_empty() {
        return Err(Error::EmptySequence);
    }

    if lo > hi || hi >= sequence.len() {
        return Err(Error::OutOfRange {
            lo,
            hi,
            len: sequence.len(),
        });
    }

    let mut selector = Selector {
        sequence,
        compare,
        comparisons: 0,
    };

    let (min, max) = selector.select(lo, hi);
    trace!("Selected over [{lo}, {hi}] with {} comparisons", selector.comparisons);

    Ok(Selection {
        min,
        max,
        comparisons: selector.comparisons,
    })
}

struct Selector<'a, T, F> {
    sequence: &'a [T],
    compare: F,
    comparisons: usize,
}

impl<'a, T, F> Selector<'a, T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    fn is_less(&mut self, lhs: &T, rhs: &T) -> bool {
        self.comparisons += 1;
        (self.compare)(lhs, rhs) == Ordering::Less
    }

    fn select(&mut self, lo: usize, hi: usize) -> (&'a T, &'a T) {
        let sequence = self.sequence;
        if lo == hi {
            return (&sequence[lo], &sequence[lo]);
        }

        if hi == lo + 1 {
            let (first, second) = (&sequence[lo], &sequence[hi]);
            return if self.is_less(first, second) {
                (first, second)
            } else {
                (second, first)
            };
        }

        let mid = lo + (hi - lo) / 2;
        let (left_min, left_max) = self.select(lo, mid);
        let (right_min, right_max) = self.select(mid + 1, hi);

        // Ties keep the left half's element.
        let min = if self.is_less(right_min, left_min) { right_min } else { left_min };
        let max = if self.is_less(left_max, right_max) { right_max } else { left_max };
        (min, max)
    }
}
