use log::debug;

use crate::change::{sorted_denominations, validate_amount, Breakdown, Coin};
use crate::error::{ChangeError, Result};

/// Makes change for `amount` by always taking as many of the largest
/// remaining denomination as fit.
///
/// Greedy is optimal for canonical coin systems such as `[50, 25, 10, 5, 2, 1]`
/// but not in general: for `12` with `[10, 6, 1]` it returns `10 + 1 + 1`
/// instead of `6 + 6`. Without a denomination of `1` it may also be unable to
/// pay the full amount. In that case the coins that did fit are returned and
/// the breakdown totals less than `amount`; use [`make_greedy_exact`] to
/// treat that as an error.
///
/// # Arguments
/// * `amount` - The amount to pay out, must not be negative
/// * `denominations` - Available coin values in any order; duplicates are ignored
///
/// # Returns
/// * `Ok(Breakdown)` - The coins used, largest denomination first
///
/// # Examples
/// ```
/// use changemaker::greedy::make_greedy;
///
/// let change = make_greedy(113u32, &[50, 25, 10, 5, 2, 1]).unwrap();
/// assert_eq!(change.to_string(), "{50: 2, 10: 1, 2: 1, 1: 1}");
///
/// // 1 cannot be paid with 2s; nothing fits
/// assert!(make_greedy(1u32, &[2]).unwrap().is_empty());
/// ```
///
/// # Complexity
/// * Time: O(D log D) where D is the number of denominations
/// * Space: O(D)
///
/// # Errors
/// * `InvalidAmount` if `amount` is negative
/// * `EmptyDenominationSet` if `denominations` is empty
/// * `InvalidDenomination` if a denomination is zero or negative
pub fn make_greedy<T: Coin>(amount: T, denominations: &[T]) -> Result<Breakdown<T>> {
    validate_amount(amount)?;
    let coins = sorted_denominations(denominations)?;
    debug!("greedy change for {} from {:?}", amount, coins);

    let mut remaining = amount;
    let mut breakdown = Breakdown::new();
    for coin in coins {
        if remaining.is_zero() {
            break;
        }
        let quotient = remaining / coin;
        if quotient > T::zero() {
            let count = quotient
                .to_usize()
                .ok_or_else(|| ChangeError::amount_too_large(amount))?;
            breakdown.push(coin, count);
            remaining = remaining % coin;
        }
    }

    if !remaining.is_zero() {
        debug!("greedy change for {} left {} unpaid", amount, remaining);
    }
    Ok(breakdown)
}

/// Like [`make_greedy`], but fails when the coins taken do not add up to
/// `amount`.
///
/// A success does not mean the breakdown is minimal, only that it is complete.
///
/// # Examples
/// ```
/// use changemaker::greedy::make_greedy_exact;
/// use changemaker::ChangeError;
///
/// assert_eq!(make_greedy_exact(12u32, &[10, 6, 1]).unwrap().total_coins(), 3);
/// assert!(matches!(
///     make_greedy_exact(7u32, &[5, 3]),
///     Err(ChangeError::UnreachableAmount(_))
/// ));
/// ```
///
/// # Errors
/// * Everything [`make_greedy`] reports
/// * `UnreachableAmount` if the greedy breakdown does not sum to `amount`
pub fn make_greedy_exact<T: Coin>(amount: T, denominations: &[T]) -> Result<Breakdown<T>> {
    let breakdown = make_greedy(amount, denominations)?;
    if breakdown.total_value() != Some(amount) {
        return Err(ChangeError::unreachable_amount(amount));
    }
    Ok(breakdown)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STANDARD: [u64; 6] = [50, 25, 10, 5, 2, 1];

    #[test]
    fn test_standard_denominations() {
        let change = make_greedy(113u64, &STANDARD).unwrap();
        assert_eq!(
            change.iter().collect::<Vec<_>>(),
            vec![(50, 2), (10, 1), (2, 1), (1, 1)]
        );
        assert_eq!(change.total_coins(), 5);

        let change = make_greedy(1327u64, &STANDARD).unwrap();
        assert_eq!(change.total_value(), Some(1327));
        assert_eq!(
            change.iter().collect::<Vec<_>>(),
            vec![(50, 26), (25, 1), (2, 1)]
        );
    }

    #[test]
    fn test_non_canonical_denominations() {
        let change = make_greedy(12u32, &[10, 6, 1]).unwrap();
        assert_eq!(change.get(10), 1);
        assert_eq!(change.get(1), 2);
        assert_eq!(change.get(6), 0);
        assert_eq!(change.total_coins(), 3);
    }

    #[test]
    fn test_input_order_and_duplicates() {
        let sorted = make_greedy(88i32, &[25, 10, 5, 1]).unwrap();
        let shuffled = make_greedy(88i32, &[1, 10, 25, 5, 10, 1]).unwrap();
        assert_eq!(sorted, shuffled);
        assert_eq!(sorted.to_string(), "{25: 3, 10: 1, 1: 3}");
    }

    #[test]
    fn test_does_not_reorder_caller_slice() {
        let denominations = vec![1u16, 5, 10];
        let _ = make_greedy(16u16, &denominations).unwrap();
        assert_eq!(denominations, vec![1, 5, 10]);
    }

    #[test]
    fn test_zero_amount() {
        assert!(make_greedy(0u8, &[1, 2]).unwrap().is_empty());
    }

    #[test]
    fn test_incomplete_change() {
        assert!(make_greedy(1u32, &[2]).unwrap().is_empty());

        // 7 = 5 + 2 remaining, which 3 cannot pay
        let change = make_greedy(7u32, &[5, 3]).unwrap();
        assert_eq!(change.to_string(), "{5: 1}");
        assert_eq!(change.total_value(), Some(5));
    }

    #[test]
    fn test_exact() {
        assert_eq!(
            make_greedy_exact(1u32, &[2]),
            Err(ChangeError::UnreachableAmount("1".to_string()))
        );
        assert!(make_greedy_exact(0u32, &[2]).unwrap().is_empty());
        assert_eq!(make_greedy_exact(8u32, &[5, 3]).unwrap().to_string(), "{5: 1, 3: 1}");

        // 3 + 3 pays 6, but greedy takes the 5 first
        assert!(matches!(
            make_greedy_exact(6u32, &[5, 3]),
            Err(ChangeError::UnreachableAmount(_))
        ));
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            make_greedy(-5i32, &[1]),
            Err(ChangeError::InvalidAmount("-5".to_string()))
        );
        assert_eq!(make_greedy::<u32>(5, &[]), Err(ChangeError::EmptyDenominationSet));
        assert!(matches!(
            make_greedy(5i64, &[5, 0]),
            Err(ChangeError::InvalidDenomination(_))
        ));
    }
}
