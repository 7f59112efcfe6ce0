//! Shared pieces of the change-making algorithms.
//!
//! Both strategies take an amount and a borrowed slice of denominations and
//! return a [`Breakdown`]. The slice is never reordered; each call validates
//! its input and works on a private, sorted copy.
//!
//! # Examples
//!
//! ```
//! use changemaker::change::{compare, STANDARD_DENOMINATIONS};
//!
//! let result = compare(12u64, &[10, 6, 1]).unwrap();
//! assert_eq!(result.greedy.total_coins(), 3);
//! assert_eq!(result.minimal.total_coins(), 2);
//! assert_eq!(result.coins_saved(), 1);
//!
//! let standard = compare(113u64, &STANDARD_DENOMINATIONS).unwrap();
//! assert!(standard.greedy_is_optimal());
//! ```

use std::fmt::{Debug, Display};
use std::hash::Hash;

use num_traits::PrimInt;

use crate::error::{ChangeError, Result};

pub mod breakdown;
pub mod compare;


pub use breakdown::Breakdown;
pub use compare::{compare, time_strategy, Comparison, TimingConfig, DEMO_CASES};

/// Coin denominations most change-making examples start from.
pub const STANDARD_DENOMINATIONS: [u64; 6] = [50, 25, 10, 5, 2, 1];

/// Integer types usable as amounts and denominations.
pub trait Coin: PrimInt + Hash + Debug + Display {}

impl<T> Coin for T where T: PrimInt + Hash + Debug + Display {}

/// A change-making strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Largest denomination first, see [`crate::greedy::make_greedy`].
    Greedy,
    /// Fewest coins, see [`crate::dynamic::make_minimal`].
    MinCoin,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Greedy, Strategy::MinCoin];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Greedy => "make_greedy",
            Strategy::MinCoin => "make_minimal",
        }
    }

    /// Runs this strategy on the given input.
    pub fn make_change<T: Coin>(&self, amount: T, denominations: &[T]) -> Result<Breakdown<T>> {
        match self {
            Strategy::Greedy => crate::greedy::make_greedy(amount, denominations),
            Strategy::MinCoin => crate::dynamic::make_minimal(amount, denominations),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Rejects negative amounts.
pub(crate) fn validate_amount<T: Coin>(amount: T) -> Result<()> {
    if amount < T::zero() {
        return Err(ChangeError::invalid_amount(amount));
    }
    Ok(())
}

/// Validates the denominations and returns them deduplicated, largest first.
pub(crate) fn sorted_denominations<T: Coin>(denominations: &[T]) -> Result<Vec<T>> {
    if denominations.is_empty() {
        return Err(ChangeError::EmptyDenominationSet);
    }
    if let Some(&coin) = denominations.iter().find(|&&coin| coin <= T::zero()) {
        return Err(ChangeError::invalid_denomination(coin));
    }

    let mut coins = denominations.to_vec();
    coins.sort_unstable_by(|a, b| b.cmp(a));
    coins.dedup();
    Ok(coins)
}
