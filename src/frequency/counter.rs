//! Exact-value frequency counting
//!
//! Values are grouped by exact equality after sorting, so results come out
//! in ascending value order no matter how the input was ordered.

use core::cmp::Ordering;

use crate::traits::{present, Numeric, Sample};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// A representative value and how many input entries equal it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemCount<T> {
    value: T,
    count: usize,
}

impl<T> ItemCount<T> {
    pub fn new(value: T, count: usize) -> Self {
        Self { value, count }
    }

    /// The first input entry of this group
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn into_inner(self) -> (T, usize) {
        (self.value, self.count)
    }
}

/// Count equal items under `compare`, ascending
///
/// The sort is stable, so each group's representative is its first entry in
/// input order.
///
/// ```
/// use samplestats::frequency::count_each_by;
///
/// let words = ["b", "A", "a", "B", "b"];
/// let counts = count_each_by(words, |x, y| x.to_lowercase().cmp(&y.to_lowercase()));
///
/// assert_eq!(counts.len(), 2);
/// assert_eq!((*counts[0].value(), counts[0].count()), ("A", 2));
/// assert_eq!((*counts[1].value(), counts[1].count()), ("b", 3));
/// ```
pub fn count_each_by<I, F>(source: I, mut compare: F) -> Vec<ItemCount<I::Item>>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    let mut items: Vec<I::Item> = source.into_iter().collect();
    items.sort_by(&mut compare);

    let mut counts: Vec<ItemCount<I::Item>> = Vec::new();
    for item in items {
        if let Some(group) = counts.last_mut() {
            if compare(&group.value, &item) == Ordering::Equal {
                group.count += 1;
                continue;
            }
        }
        counts.push(ItemCount::new(item, 1));
    }
    counts
}

/// Count equal items, ascending
///
/// ```
/// use samplestats::frequency::count_each;
///
/// let counts = count_each(["red", "blue", "red", "green", "red"]);
/// let flat: Vec<_> = counts.into_iter().map(|c| c.into_inner()).collect();
///
/// assert_eq!(flat, vec![("blue", 1), ("green", 1), ("red", 3)]);
/// ```
pub fn count_each<I>(source: I) -> Vec<ItemCount<I::Item>>
where
    I: IntoIterator,
    I::Item: Ord,
{
    count_each_by(source, Ord::cmp)
}

/// Count equal numeric values, ascending; missing entries are dropped
///
/// Floats are grouped under [`Numeric::sort_cmp`], so every NaN lands in
/// one trailing group.
pub fn count_values<I>(source: I) -> Vec<ItemCount<<I::Item as Sample>::Value>>
where
    I: IntoIterator,
    I::Item: Sample,
{
    count_each_by(present(source), Numeric::sort_cmp)
}

/// Most frequent value
///
/// Runs of equal values are scanned in ascending order and only a strictly
/// longer run replaces the current best, so ties go to the smallest value.
/// `None` when empty or when no value repeats.
///
/// ```
/// use samplestats::frequency::mode;
///
/// assert_eq!(mode([1, 1, 1]), Some(1));
/// assert_eq!(mode([1, 2, 3]), None);
/// assert_eq!(mode([1, 2, 2, 3, 3, 3]), Some(3));
/// assert_eq!(mode([1, 2, 2, 3, 3]), Some(2));
/// ```
pub fn mode<I>(source: I) -> Option<<I::Item as Sample>::Value>
where
    I: IntoIterator,
    I::Item: Sample,
{
    let mut values: Vec<_> = present(source).collect();
    values.sort_by(Numeric::sort_cmp);

    let mut best: Option<(_, usize)> = None;
    let mut run_value = *values.first()?;
    let mut run_len = 0usize;

    for value in values {
        if value.sort_cmp(&run_value) == Ordering::Equal {
            run_len += 1;
        } else {
            run_value = value;
            run_len = 1;
        }
        if best.map_or(true, |(_, len)| run_len > len) {
            best = Some((run_value, run_len));
        }
    }

    best.filter(|&(_, len)| len > 1).map(|(value, _)| value)
}

/// Every value occurring more than once
///
/// Ordered by count descending, ties by value ascending. Empty when no value
/// repeats.
///
/// ```
/// use samplestats::frequency::modes;
///
/// assert_eq!(modes([1, 3, 2, 2, 3]), vec![2, 3]);
/// assert_eq!(modes([5, 1, 5, 1, 5]), vec![5, 1]);
/// ```
pub fn modes<I>(source: I) -> Vec<<I::Item as Sample>::Value>
where
    I: IntoIterator,
    I::Item: Sample,
{
    let mut counts = count_values(source);
    counts.retain(|c| c.count > 1);
    // stable, so equal counts keep ascending value order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.into_iter().map(|c| c.value).collect()
}

with_selector! {
    /// [`count_values`] over projected items
    count_values_by => count_values -> Vec<ItemCount<S::Value>>;
    /// [`mode`] over projected items
    mode_by => mode -> Option<S::Value>;
    /// [`modes`] over projected items
    modes_by => modes -> Vec<S::Value>;
}
