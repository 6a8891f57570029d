//! Storage access for the lock ledger and contract configuration.
//!
//! | Key                           | Tier           | Lifecycle             |
//! |-------------------------------|----------------|-----------------------|
//! | `DataKey::Admin`              | `instance()`   | Entire contract       |
//! | `DataKey::Config`             | `instance()`   | Entire contract       |
//! | `DataKey::PenaltySink`        | `instance()`   | Entire contract       |
//! | `DataKey::ExpiryRounding`     | `instance()`   | Entire contract       |
//! | `DataKey::TotalLocked`        | `instance()`   | Entire contract       |
//! | `DataKey::SupplyPoint`        | `instance()`   | Entire contract       |
//! | `DataKey::Guard`              | `instance()`   | Per invocation        |
//! | `DataKey::SlopeChanges(week)` | `persistent()` | Until the week passes |
//! | `DataKey::Lock(addr)`         | `persistent()` | Per account           |
//!
//! Lock records are never removed; a withdrawal resets them to zero.

use escrow_errors::ContractError;
use soroban_sdk::{Address, Env};

use crate::types::{DataKey, EscrowConfig, ExpiryRounding, LockedBalance, PenaltySink};

/// Minimum ledger sequence TTL before a bump is requested (~1 day at 5 s/ledger).
pub const BUMP_THRESHOLD: u32 = 17_280;
/// Target TTL after a bump (~30 days).
pub const BUMP_TARGET: u32 = 518_400;

// ── Locks ─────────────────────────────────────────────────────────────────

/// Lock of `account`, or an empty record if it never locked.
pub fn load_lock(e: &Env, account: &Address) -> LockedBalance {
    let key = DataKey::Lock(account.clone());
    let storage = e.storage().persistent();
    match storage.get::<_, LockedBalance>(&key) {
        Some(lock) => {
            storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
            lock
        }
        None => LockedBalance::default(),
    }
}

pub fn save_lock(e: &Env, account: &Address, lock: &LockedBalance) {
    let key = DataKey::Lock(account.clone());
    let storage = e.storage().persistent();
    storage.set(&key, lock);
    storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

// ── Configuration ─────────────────────────────────────────────────────────

pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Config)
}

pub fn get_config(e: &Env) -> Result<EscrowConfig, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ContractError::NotInitialized)
}

pub fn get_admin(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(ContractError::NotInitialized)
}

/// Checks `caller` is the stored admin and that it signed the call.
pub fn require_admin(e: &Env, caller: &Address) -> Result<(), ContractError> {
    let admin = get_admin(e)?;
    if admin != *caller {
        return Err(ContractError::NotAdmin);
    }
    caller.require_auth();
    Ok(())
}

pub fn get_penalty_sink(e: &Env) -> PenaltySink {
    e.storage()
        .instance()
        .get(&DataKey::PenaltySink)
        .unwrap_or(PenaltySink::Burn)
}

pub fn set_penalty_sink(e: &Env, sink: &PenaltySink) {
    e.storage().instance().set(&DataKey::PenaltySink, sink);
}

pub fn get_expiry_rounding(e: &Env) -> ExpiryRounding {
    e.storage()
        .instance()
        .get(&DataKey::ExpiryRounding)
        .unwrap_or(ExpiryRounding::Exact)
}

pub fn set_expiry_rounding(e: &Env, rounding: ExpiryRounding) {
    e.storage()
        .instance()
        .set(&DataKey::ExpiryRounding, &rounding);
}

// ── Custody bookkeeping ───────────────────────────────────────────────────

pub fn get_total_locked(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::TotalLocked)
        .unwrap_or(0)
}

pub fn set_total_locked(e: &Env, total: i128) {
    e.storage().instance().set(&DataKey::TotalLocked, &total);
}
