//! Voting Escrow Contract
//!
//! Accounts lock an underlying token for 7 to 1440 days and receive a
//! non-transferable escrow balance (voting power) worth
//! `amount * (end - now) / MAXTIME`. The balance is never stored: every read
//! recomputes it from the lock and the ledger time, so it decays linearly to
//! zero at `end` without any scheduled update.
//!
//! ## Key design decisions
//!
//! - **One lock per account**: top-ups and extensions mutate it in place.
//! - **Validate, then move tokens, then write**: payers are checked for
//!   balance and allowance before any state changes; payouts are sent after
//!   the ledger is reset.
//! - **Incremental supply**: total supply comes from a single checkpoint plus
//!   slope changes scheduled in per-week buckets (see `supply`), not a walk
//!   over every account.
//! - **Forced exit**: `emergency_withdraw` releases a live lock early and
//!   forfeits `early_withdraw_fee_rate` of the principal to the penalty sink.

#![no_std]

mod decay;
mod events;
mod guard;
mod ledger;
mod math;
mod supply;
mod token_integration;
pub mod types;

pub use decay::{
    escrow_balance, round_expiry, DAY, DEFAULT_EARLY_WITHDRAW_FEE_RATE, MAXTIME,
    MIN_LOCK_DURATION, WEEK,
};
pub use escrow_errors::{ContractError, ErrorCategory, ErrorExt};
pub use types::{DepositType, EscrowConfig, ExpiryRounding, LockedBalance, PenaltySink};

use soroban_sdk::{contract, contractimpl, Address, Env, String};

use guard::with_reentrancy_guard;
use ledger::{get_config, load_lock, require_admin, save_lock};
use math::{add_i128, add_u64, bps, sub_i128};
use types::DataKey;


#[cfg(test)]
mod test_create_lock;

// ─── Helpers ───────────────────────────────────────────────────────────────

/// Stores `new` for `account` and moves the aggregates from `old` to `new`.
fn commit_lock(
    e: &Env,
    account: &Address,
    old: &LockedBalance,
    new: &LockedBalance,
    now: u64,
) -> Result<(), ContractError> {
    supply::replace_contribution(e, old, new, now)?;
    save_lock(e, account, new);

    if old.amount != new.amount {
        let prev_total = ledger::get_total_locked(e);
        let delta = sub_i128(new.amount, old.amount)?;
        let total = add_i128(prev_total, delta)?;
        ledger::set_total_locked(e, total);
        events::emit_supply(e, prev_total, total);
    }
    Ok(())
}

/// Adds `amount` paid by `from` to the live lock of `account`, keeping its end.
fn deposit_into_lock(
    e: &Env,
    from: &Address,
    account: &Address,
    amount: i128,
    deposit_type: DepositType,
) -> Result<LockedBalance, ContractError> {
    get_config(e)?;
    if amount <= 0 {
        return Err(ContractError::AmountMustBePositive);
    }

    let now = e.ledger().timestamp();
    let old = load_lock(e, account);
    if !old.is_live(now) {
        return Err(ContractError::NoLiveLock);
    }

    let new = LockedBalance {
        amount: add_i128(old.amount, amount)?,
        end: old.end,
    };

    token_integration::pull_into_custody(e, from, amount)?;
    commit_lock(e, account, &old, &new, now)?;
    events::emit_deposit(e, account, amount, new.end, deposit_type);
    Ok(new)
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct VotingEscrow;

#[contractimpl]
impl VotingEscrow {
    // ── Setup ──────────────────────────────────────────────────────────────

    /// One-time initialization.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - called a second time
    /// * `AmountMustBePositive` - `min_locked_amount` is negative
    pub fn initialize(
        e: Env,
        admin: Address,
        name: String,
        symbol: String,
        locked_token: Address,
        min_locked_amount: i128,
    ) -> Result<(), ContractError> {
        if ledger::is_initialized(&e) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();
        if min_locked_amount < 0 {
            return Err(ContractError::AmountMustBePositive);
        }

        let config = EscrowConfig {
            name: name.clone(),
            symbol,
            locked_token: locked_token.clone(),
            min_locked_amount,
            early_withdraw_fee_rate: DEFAULT_EARLY_WITHDRAW_FEE_RATE,
        };
        let storage = e.storage().instance();
        storage.set(&DataKey::Admin, &admin);
        storage.set(&DataKey::Config, &config);
        ledger::set_total_locked(&e, 0);

        events::emit_initialized(&e, &admin, &locked_token, &name, min_locked_amount);
        Ok(())
    }

    /// Route forfeited penalties to `sink` (admin only).
    pub fn set_penalty_sink(
        e: Env,
        admin: Address,
        sink: PenaltySink,
    ) -> Result<(), ContractError> {
        require_admin(&e, &admin)?;
        ledger::set_penalty_sink(&e, &sink);
        events::emit_penalty_sink_set(&e, &sink);
        Ok(())
    }

    /// Choose how unlock times computed from now on are aligned (admin only).
    pub fn set_expiry_rounding(
        e: Env,
        admin: Address,
        rounding: ExpiryRounding,
    ) -> Result<(), ContractError> {
        require_admin(&e, &admin)?;
        ledger::set_expiry_rounding(&e, rounding);
        events::emit_expiry_rounding_set(&e, rounding);
        Ok(())
    }

    // ── Lock lifecycle ─────────────────────────────────────────────────────

    /// Lock `amount` for `duration_days` days.
    ///
    /// # Errors
    /// * `AmountMustBePositive`, `BelowMinLockAmount`
    /// * `LockTooShort` - under 7 days, before or after rounding
    /// * `LockTooLong` - over 1440 days
    /// * `LockExists` - the account still holds principal
    /// * `InsufficientBalance`, `InsufficientAllowance`
    pub fn create_lock(
        e: Env,
        account: Address,
        amount: i128,
        duration_days: u64,
    ) -> Result<LockedBalance, ContractError> {
        with_reentrancy_guard(&e, || {
            let config = get_config(&e)?;
            account.require_auth();

            if amount <= 0 {
                return Err(ContractError::AmountMustBePositive);
            }
            if amount < config.min_locked_amount {
                return Err(ContractError::BelowMinLockAmount);
            }

            let duration = decay::days_to_seconds(duration_days)?;
            decay::check_lock_duration(duration)?;

            let old = load_lock(&e, &account);
            if old.amount > 0 {
                return Err(ContractError::LockExists);
            }

            let now = e.ledger().timestamp();
            let rounding = ledger::get_expiry_rounding(&e);
            let end = decay::round_expiry(add_u64(now, duration)?, rounding);
            decay::check_lock_duration(end.saturating_sub(now))?;

            token_integration::pull_into_custody(&e, &account, amount)?;

            let new = LockedBalance { amount, end };
            commit_lock(&e, &account, &old, &new, now)?;
            events::emit_deposit(&e, &account, amount, end, DepositType::CreateLock);
            Ok(new)
        })
    }

    /// `from` adds `amount` to the live lock of `account` without changing
    /// when it unlocks.
    ///
    /// # Errors
    /// * `AmountMustBePositive`
    /// * `NoLiveLock` - `account` has no unexpired lock
    /// * `InsufficientBalance`, `InsufficientAllowance`
    pub fn deposit_for(
        e: Env,
        from: Address,
        account: Address,
        amount: i128,
    ) -> Result<LockedBalance, ContractError> {
        with_reentrancy_guard(&e, || {
            from.require_auth();
            deposit_into_lock(&e, &from, &account, amount, DepositType::DepositFor)
        })
    }

    /// Adds `amount` to the caller's own live lock.
    pub fn increase_amount(
        e: Env,
        account: Address,
        amount: i128,
    ) -> Result<LockedBalance, ContractError> {
        with_reentrancy_guard(&e, || {
            account.require_auth();
            deposit_into_lock(&e, &account, &account, amount, DepositType::IncreaseAmount)
        })
    }

    /// Pushes the unlock time of a live lock back by `extra_days`.
    ///
    /// # Errors
    /// * `NoLiveLock`
    /// * `ExtensionMustBePositive` - zero days, or rounding left the end unchanged
    /// * `LockTooLong` - new end is more than 1440 days from now
    pub fn increase_unlock_time(
        e: Env,
        account: Address,
        extra_days: u64,
    ) -> Result<LockedBalance, ContractError> {
        with_reentrancy_guard(&e, || {
            get_config(&e)?;
            account.require_auth();

            let now = e.ledger().timestamp();
            let old = load_lock(&e, &account);
            if !old.is_live(now) {
                return Err(ContractError::NoLiveLock);
            }
            if extra_days == 0 {
                return Err(ContractError::ExtensionMustBePositive);
            }

            let extended = add_u64(old.end, decay::days_to_seconds(extra_days)?)?;
            let end = decay::round_expiry(extended, ledger::get_expiry_rounding(&e));
            if end > add_u64(now, MAXTIME)? {
                return Err(ContractError::LockTooLong);
            }
            if end <= old.end {
                return Err(ContractError::ExtensionMustBePositive);
            }

            let new = LockedBalance {
                amount: old.amount,
                end,
            };
            commit_lock(&e, &account, &old, &new, now)?;
            events::emit_deposit(&e, &account, 0, end, DepositType::IncreaseUnlockTime);
            Ok(new)
        })
    }

    /// Returns the full principal of a matured lock.
    ///
    /// # Errors
    /// * `NothingToWithdraw`
    /// * `LockNotExpired`
    pub fn withdraw(e: Env, account: Address) -> Result<i128, ContractError> {
        with_reentrancy_guard(&e, || {
            get_config(&e)?;
            account.require_auth();

            let old = load_lock(&e, &account);
            if old.amount == 0 {
                return Err(ContractError::NothingToWithdraw);
            }
            let now = e.ledger().timestamp();
            if now < old.end {
                return Err(ContractError::LockNotExpired);
            }

            commit_lock(&e, &account, &old, &LockedBalance::default(), now)?;
            token_integration::release_from_custody(&e, &account, old.amount)?;
            events::emit_withdraw(&e, &account, old.amount);
            Ok(old.amount)
        })
    }

    /// Exits a lock at any time. A live lock forfeits
    /// `early_withdraw_fee_rate` basis points of its principal to the penalty
    /// sink; a matured one pays out in full. Returns the amount paid to
    /// `account`.
    ///
    /// # Errors
    /// * `NothingToWithdraw`
    pub fn emergency_withdraw(e: Env, account: Address) -> Result<i128, ContractError> {
        with_reentrancy_guard(&e, || {
            let config = get_config(&e)?;
            account.require_auth();

            let old = load_lock(&e, &account);
            if old.amount == 0 {
                return Err(ContractError::NothingToWithdraw);
            }

            let now = e.ledger().timestamp();
            let penalty = if old.is_live(now) {
                bps(old.amount, config.early_withdraw_fee_rate)?
            } else {
                0
            };
            let net = sub_i128(old.amount, penalty)?;

            commit_lock(&e, &account, &old, &LockedBalance::default(), now)?;
            token_integration::release_from_custody(&e, &account, net)?;
            token_integration::forfeit_penalty(&e, &ledger::get_penalty_sink(&e), penalty)?;
            events::emit_emergency_withdraw(&e, &account, old.amount, penalty, net);
            Ok(net)
        })
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Current escrow balance (voting power) of `account`.
    pub fn balance_of(e: Env, account: Address) -> Result<i128, ContractError> {
        let lock = load_lock(&e, &account);
        escrow_balance(lock.amount, lock.end, e.ledger().timestamp())
    }

    /// Escrow balance of `account` at `timestamp`, assuming the lock is not
    /// changed in between.
    pub fn balance_of_at(e: Env, account: Address, timestamp: u64) -> Result<i128, ContractError> {
        let lock = load_lock(&e, &account);
        escrow_balance(lock.amount, lock.end, timestamp)
    }

    /// Sum of every account's escrow balance now.
    pub fn total_supply(e: Env) -> Result<i128, ContractError> {
        supply::supply_at(&e, e.ledger().timestamp())
    }

    /// Sum of every account's escrow balance at `timestamp`, which must not
    /// precede the last mutation.
    pub fn total_supply_at(e: Env, timestamp: u64) -> Result<i128, ContractError> {
        supply::supply_at(&e, timestamp)
    }

    pub fn get_lock(e: Env, account: Address) -> LockedBalance {
        load_lock(&e, &account)
    }

    /// Principal currently locked by `account`.
    pub fn locked_of(e: Env, account: Address) -> i128 {
        load_lock(&e, &account).amount
    }

    /// Unlock time of `account`, 0 if it holds no lock.
    pub fn locked_end(e: Env, account: Address) -> u64 {
        load_lock(&e, &account).end
    }

    /// Principal held in custody across all accounts.
    pub fn total_locked(e: Env) -> i128 {
        ledger::get_total_locked(&e)
    }

    pub fn name(e: Env) -> Result<String, ContractError> {
        Ok(get_config(&e)?.name)
    }

    pub fn symbol(e: Env) -> Result<String, ContractError> {
        Ok(get_config(&e)?.symbol)
    }

    /// Same as the locked token.
    pub fn decimals(e: Env) -> Result<u32, ContractError> {
        token_integration::decimals(&e)
    }

    pub fn locked_token(e: Env) -> Result<Address, ContractError> {
        Ok(get_config(&e)?.locked_token)
    }

    pub fn min_locked_amount(e: Env) -> Result<i128, ContractError> {
        Ok(get_config(&e)?.min_locked_amount)
    }

    pub fn early_withdraw_fee_rate(e: Env) -> Result<u32, ContractError> {
        Ok(get_config(&e)?.early_withdraw_fee_rate)
    }

    pub fn penalty_sink(e: Env) -> PenaltySink {
        ledger::get_penalty_sink(&e)
    }

    pub fn expiry_rounding(e: Env) -> ExpiryRounding {
        ledger::get_expiry_rounding(&e)
    }

    pub fn admin(e: Env) -> Result<Address, ContractError> {
        ledger::get_admin(&e)
    }
}
