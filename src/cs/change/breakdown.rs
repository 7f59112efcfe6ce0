use std::collections::BTreeMap;
use std::fmt;

use crate::change::Coin;

/// How many coins of each denomination make up an amount.
///
/// Only denominations actually used are stored, each with a count of at least
/// one, ordered from the largest denomination to the smallest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Breakdown<T> {
    counts: Vec<(T, usize)>,
}

impl<T: Coin> Breakdown<T> {
    /// An empty breakdown, the change for an amount of zero.
    pub fn new() -> Self {
        Self { counts: Vec::new() }
    }

    /// Appends a denomination smaller than every one already present.
    pub(crate) fn push(&mut self, coin: T, count: usize) {
        debug_assert!(count > 0);
        debug_assert!(self.counts.last().map_or(true, |&(last, _)| coin < last));
        self.counts.push((coin, count));
    }

    /// Number of coins of denomination `coin`, zero if it is not used.
    pub fn get(&self, coin: T) -> usize {
        self.counts
            .iter()
            .find(|&&(c, _)| c == coin)
            .map_or(0, |&(_, count)| count)
    }

    /// Number of distinct denominations used.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over `(denomination, count)` pairs, largest denomination first.
    pub fn iter(&self) -> impl Iterator<Item = (T, usize)> + '_ {
        self.counts.iter().copied()
    }

    /// Total number of coins.
    pub fn total_coins(&self) -> usize {
        self.counts.iter().map(|&(_, count)| count).sum()
    }

    /// Sum of `denomination * count`, or `None` if it overflows `T`.
    pub fn total_value(&self) -> Option<T> {
        self.counts.iter().try_fold(T::zero(), |total, &(coin, count)| {
            let count = T::from(count)?;
            total.checked_add(&coin.checked_mul(&count)?)
        })
    }

    pub fn into_map(self) -> BTreeMap<T, usize> {
        self.counts.into_iter().collect()
    }
}

impl<T: Coin> Default for Breakdown<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Coin> From<BTreeMap<T, usize>> for Breakdown<T> {
    fn from(map: BTreeMap<T, usize>) -> Self {
        Self {
            counts: map.into_iter().rev().filter(|&(_, count)| count > 0).collect(),
        }
    }
}

impl<'a, T: Coin> IntoIterator for &'a Breakdown<T> {
    type Item = (T, usize);
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, (T, usize)>>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter().copied()
    }
}

impl<T: Coin> fmt::Display for Breakdown<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (coin, count)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", coin, count)?;
        }
        write!(f, "}}")
    }
}
