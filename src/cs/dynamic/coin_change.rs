use log::{debug, trace};

use crate::change::{sorted_denominations, validate_amount, Breakdown, Coin};
use crate::error::{ChangeError, Result};

/// Makes change for `amount` with the fewest possible coins.
///
/// This is the "unbounded" coin change problem: each denomination can be
/// used any number of times. For every sub-amount `s` in `1..=amount` the
/// table records the fewest coins that form `s` and the last coin used to get
/// there; the breakdown is then read back from `amount` down to zero.
///
/// # Arguments
/// * `amount` - The amount to pay out, must not be negative
/// * `denominations` - Available coin values in any order; duplicates are ignored
///
/// # Returns
/// * `Ok(Breakdown)` - A breakdown summing to `amount` with the minimal number
///   of coins, largest denomination first
///
/// # Examples
/// ```
/// use changemaker::dynamic::make_minimal;
/// use changemaker::ChangeError;
///
/// // 6 + 6 beats the greedy 10 + 1 + 1
/// let change = make_minimal(12u32, &[10, 6, 1]).unwrap();
/// assert_eq!(change.to_string(), "{6: 2}");
///
/// // Impossible to form 1 from [2]
/// assert!(matches!(
///     make_minimal(1u32, &[2]),
///     Err(ChangeError::UnreachableAmount(_))
/// ));
/// ```
///
/// # Complexity
/// * Time: O(amount * D) where D is the number of denominations
/// * Space: O(amount)
///
/// # Errors
/// * `InvalidAmount` if `amount` is negative
/// * `EmptyDenominationSet` if `denominations` is empty
/// * `InvalidDenomination` if a denomination is zero or negative
/// * `AmountTooLarge` if the tables for `amount` cannot be allocated
/// * `UnreachableAmount` if no combination of denominations sums to `amount`
pub fn make_minimal<T: Coin>(amount: T, denominations: &[T]) -> Result<Breakdown<T>> {
    validate_amount(amount)?;
    let coins = sorted_denominations(denominations)?;
    let target = amount
        .to_usize()
        .ok_or_else(|| ChangeError::amount_too_large(amount))?;

    // Coins larger than the target can never be used
    let usable: Vec<(T, usize)> = coins
        .iter()
        .filter_map(|&coin| {
            coin.to_usize()
                .filter(|&value| value <= target)
                .map(|value| (coin, value))
        })
        .collect();
    debug!("minimal change for {} from {:?}", amount, coins);

    let len = target
        .checked_add(1)
        .ok_or_else(|| ChangeError::amount_too_large(amount))?;

    // min_count[s] is the fewest coins forming s, None while s is unreachable.
    // last_coin[s] indexes into `usable`.
    let mut min_count: Vec<Option<usize>> = table(len, amount)?;
    let mut last_coin: Vec<Option<usize>> = table(len, amount)?;
    min_count[0] = Some(0);

    for sub_amount in 1..=target {
        for (index, &(_, value)) in usable.iter().enumerate() {
            if value > sub_amount {
                continue;
            }
            if let Some(previous) = min_count[sub_amount - value] {
                let candidate = previous + 1;
                if min_count[sub_amount].map_or(true, |best| candidate < best) {
                    min_count[sub_amount] = Some(candidate);
                    last_coin[sub_amount] = Some(index);
                }
            }
        }
    }
    trace!("min_count = {:?}", min_count);

    let Some(total) = min_count[target] else {
        debug!("{} cannot be formed from {:?}", amount, coins);
        return Err(ChangeError::unreachable_amount(amount));
    };

    let mut counts = vec![0_usize; usable.len()];
    let mut remaining = target;
    while remaining > 0 {
        let index = last_coin[remaining].ok_or_else(|| ChangeError::unreachable_amount(amount))?;
        counts[index] += 1;
        remaining -= usable[index].1;
    }

    let mut breakdown = Breakdown::new();
    for (&(coin, _), &count) in usable.iter().zip(&counts) {
        if count > 0 {
            breakdown.push(coin, count);
        }
    }
    debug_assert_eq!(breakdown.total_coins(), total);
    Ok(breakdown)
}

fn table<T: Coin>(len: usize, amount: T) -> Result<Vec<Option<usize>>> {
    let mut table = Vec::new();
    table
        .try_reserve_exact(len)
        .map_err(|_| ChangeError::amount_too_large(amount))?;
    table.resize(len, None);
    Ok(table)
}
