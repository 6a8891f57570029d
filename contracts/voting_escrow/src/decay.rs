//! Decay curve of the escrow balance.
//!
//! A lock of `amount` ending at `end` is worth `amount * (end - now) / MAXTIME`
//! at time `now`: the full amount for a maximum-length lock, falling linearly
//! to zero at `end`. Nothing here reads storage; the contract passes in the
//! stored lock and the ledger time.

use escrow_errors::ContractError;

use crate::math::{mul_i128, mul_u64};
use crate::types::ExpiryRounding;

pub const DAY: u64 = 86_400;
pub const WEEK: u64 = 7 * DAY;

/// Shortest lock `create_lock` accepts.
pub const MIN_LOCK_DURATION: u64 = 7 * DAY;
/// Longest lock (4 × 360-day years); also the denominator of the curve.
pub const MAXTIME: u64 = 4 * 360 * DAY;

pub const FEE_DENOMINATOR: i128 = 10_000;
pub const DEFAULT_EARLY_WITHDRAW_FEE_RATE: u32 = 5_000;

/// Undivided value of a lock at `now`: `amount * (end - now)`, or 0 once the
/// lock has matured.
pub fn lock_bias(amount: i128, end: u64, now: u64) -> Result<i128, ContractError> {
    if amount <= 0 || now >= end {
        return Ok(0);
    }
    mul_i128(amount, (end - now) as i128)
}

/// Escrow balance of a lock at `now`.
///
/// Floors once, after the full product, so small locks do not lose precision.
pub fn escrow_balance(amount: i128, end: u64, now: u64) -> Result<i128, ContractError> {
    Ok(lock_bias(amount, end, now)? / MAXTIME as i128)
}

/// Aligns an unlock time according to `rounding`.
pub fn round_expiry(ts: u64, rounding: ExpiryRounding) -> u64 {
    match rounding {
        ExpiryRounding::Exact => ts,
        ExpiryRounding::Week => ts / WEEK * WEEK,
    }
}

pub fn days_to_seconds(days: u64) -> Result<u64, ContractError> {
    mul_u64(days, DAY)
}

/// Rejects lock durations outside `[MIN_LOCK_DURATION, MAXTIME]`.
pub fn check_lock_duration(duration: u64) -> Result<(), ContractError> {
    if duration < MIN_LOCK_DURATION {
        return Err(ContractError::LockTooShort);
    }
    if duration > MAXTIME {
        return Err(ContractError::LockTooLong);
    }
    Ok(())
}
