use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;

use crate::errors::JobError;

/// Minimum interval between successive payments on one job:
/// one synodic-month equivalent (30 days).
pub const PAYMENT_PERIOD: i64 = 2_592_000;

/// Feed prices are USD per SOL scaled by 1e8 (8 decimals).
pub const PRICE_SCALE: u128 = 100_000_000;

/// A feed older than this at pay time is rejected outright.
pub const MAX_PRICE_AGE: i64 = 3_600;

/// Convert a USD-denominated pay rate into lamports at the supplied
/// SOL/USD price.
///
/// Ceiling division: the employer is never allowed to underpay, and
/// rounding costs at most one lamport.
pub fn required_lamports(pay_rate_usd: u64, sol_price_usd: u64) -> Result<u64, JobError> {
    if sol_price_usd == 0 {
        return Err(JobError::InvalidPrice);
    }

    let numerator = (pay_rate_usd as u128)
        .checked_mul(PRICE_SCALE)
        .and_then(|n| n.checked_mul(LAMPORTS_PER_SOL as u128))
        .ok_or(JobError::Overflow)?;
    let denominator = sol_price_usd as u128;

    let required = numerator
        .checked_add(denominator - 1)
        .ok_or(JobError::Overflow)?
        / denominator;

    u64::try_from(required).map_err(|_| JobError::Overflow)
}

/// True iff a full payment period has elapsed since `last`.
pub fn period_elapsed(last: i64, now: i64) -> bool {
    now.saturating_sub(last) >= PAYMENT_PERIOD
}

/// True iff the feed has been published and its last push is within the
/// freshness window.
pub fn price_fresh(updated_at: i64, now: i64) -> bool {
    updated_at > 0 && now.saturating_sub(updated_at) <= MAX_PRICE_AGE
}

/// True iff the employer supplied at least the converted amount.
pub fn value_sufficient(provided: u64, required: u64) -> bool {
    provided >= required
}

#[cfg(test)]
mod tests {
    use super::*;

    // $2000/SOL at 8 decimals.
    const PRICE_2000: u64 = 2_000 * PRICE_SCALE as u64;

    #[test]
    fn converts_a_round_rate_exactly() {
        // $50 at $2000/SOL = 0.025 SOL.
        let required = required_lamports(50, PRICE_2000).unwrap();
        assert_eq!(required, 25_000_000);
    }

    #[test]
    fn rounds_up_never_down() {
        // $1 at $3/SOL: 10^9 / 3 does not divide evenly.
        let price = 3 * PRICE_SCALE as u64;
        let required = required_lamports(1, price).unwrap();
        assert_eq!(required, 333_333_334);

        // One lamport less would underpay at this price.
        let paid_usd_scaled = (required as u128 - 1) * price as u128;
        assert!(paid_usd_scaled < PRICE_SCALE * LAMPORTS_PER_SOL as u128);
        // The rounded amount covers the rate with at most one lamport over.
        let covered = required as u128 * price as u128;
        assert!(covered >= PRICE_SCALE * LAMPORTS_PER_SOL as u128);
    }

    #[test]
    fn zero_rate_costs_nothing() {
        assert_eq!(required_lamports(0, PRICE_2000).unwrap(), 0);
    }

    #[test]
    fn zero_price_is_rejected() {
        assert!(matches!(
            required_lamports(50, 0),
            Err(JobError::InvalidPrice)
        ));
    }

    #[test]
    fn absurd_rate_overflows_cleanly() {
        assert!(matches!(
            required_lamports(u64::MAX, 1),
            Err(JobError::Overflow)
        ));
    }

    #[test]
    fn period_gate_is_inclusive_at_the_boundary() {
        assert!(!period_elapsed(0, PAYMENT_PERIOD - 1));
        assert!(period_elapsed(0, PAYMENT_PERIOD));
        assert!(period_elapsed(0, PAYMENT_PERIOD + 1));
    }

    #[test]
    fn period_gate_tolerates_clock_skew() {
        // A now earlier than last must never satisfy the gate.
        assert!(!period_elapsed(PAYMENT_PERIOD, 0));
    }

    #[test]
    fn price_freshness_window_is_inclusive_at_the_boundary() {
        let now = 1_700_000_000;
        assert!(price_fresh(now, now));
        assert!(price_fresh(now - MAX_PRICE_AGE, now));
        assert!(!price_fresh(now - MAX_PRICE_AGE - 1, now));
    }

    #[test]
    fn unpublished_feed_is_never_fresh() {
        assert!(!price_fresh(0, 0));
        assert!(!price_fresh(0, 100));
        // A push timestamped in the future still counts as published.
        assert!(price_fresh(200, 100));
    }

    #[test]
    fn value_check_is_a_simple_floor() {
        assert!(value_sufficient(100, 100));
        assert!(value_sufficient(101, 100));
        assert!(!value_sufficient(99, 100));
    }
}
