//! Side-by-side runs and wall-clock timing of the change-making strategies.

use std::hint::black_box;
use std::time::{Duration, Instant};

use log::debug;

use crate::change::{Breakdown, Coin, Strategy, STANDARD_DENOMINATIONS};
use crate::error::Result;

/// Inputs the report binary walks through: a large amount and a small one
/// over the standard set, then a set where greedy is not optimal.
pub const DEMO_CASES: [(u64, &[u64]); 3] = [
    (1327, &STANDARD_DENOMINATIONS),
    (113, &STANDARD_DENOMINATIONS),
    (12, &[10, 6, 1]),
];

/// Both strategies' answers for one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison<T> {
    pub amount: T,
    pub greedy: Breakdown<T>,
    pub minimal: Breakdown<T>,
}

impl<T: Coin> Comparison<T> {
    /// How many more coins greedy hands out than necessary.
    pub fn coins_saved(&self) -> usize {
        self.greedy
            .total_coins()
            .saturating_sub(self.minimal.total_coins())
    }

    /// True when greedy paid out the full amount with the fewest coins.
    pub fn greedy_is_optimal(&self) -> bool {
        self.greedy.total_value() == Some(self.amount)
            && self.greedy.total_coins() == self.minimal.total_coins()
    }
}

/// Runs both strategies on the same input.
///
/// # Errors
/// * Any error from [`crate::greedy::make_greedy`] or [`crate::dynamic::make_minimal`],
///   including `UnreachableAmount` when no combination sums to `amount`
pub fn compare<T: Coin>(amount: T, denominations: &[T]) -> Result<Comparison<T>> {
    let greedy = Strategy::Greedy.make_change(amount, denominations)?;
    let minimal = Strategy::MinCoin.make_change(amount, denominations)?;
    Ok(Comparison {
        amount,
        greedy,
        minimal,
    })
}

/// Configuration for [`time_strategy`].
#[derive(Debug, Clone)]
pub struct TimingConfig {
    /// Number of calls to time
    pub iterations: usize,
    /// Amount passed on every call
    pub amount: u64,
    /// Denominations passed on every call
    pub denominations: Vec<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            iterations: 100_000,
            amount: 113,
            denominations: STANDARD_DENOMINATIONS.to_vec(),
        }
    }
}

/// Calls `strategy` `config.iterations` times with fixed inputs and returns
/// the total elapsed time.
///
/// The input is validated by one untimed call first, so an invalid
/// configuration fails fast instead of being timed.
///
/// # Examples
///
/// ```
/// use changemaker::change::{time_strategy, Strategy, TimingConfig};
///
/// let config = TimingConfig {
///     iterations: 10,
///     ..TimingConfig::default()
/// };
/// assert!(time_strategy(Strategy::Greedy, &config).is_ok());
/// ```
pub fn time_strategy(strategy: Strategy, config: &TimingConfig) -> Result<Duration> {
    strategy.make_change(config.amount, config.denominations.as_slice())?;

    let start = Instant::now();
    for _ in 0..config.iterations {
        let _ = black_box(strategy.make_change(
            black_box(config.amount),
            black_box(config.denominations.as_slice()),
        ));
    }
    let elapsed = start.elapsed();

    debug!("{} x{} took {:?}", strategy, config.iterations, elapsed);
    Ok(elapsed)
}
